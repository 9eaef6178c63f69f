use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::info;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{color::ColorToken, export::ExportOptions};

/// Largest grid accepted from a config file, in cells.
pub const MAX_CELLS: usize = 1 << 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub columns: usize,
    pub rows: usize,
    /// Side of one cell on the drawing surface, in pixels.
    pub cell_size: u32,
    /// Checkerboard tones for even and odd `(x + y)`.
    pub checker: [ColorToken; 2],
    pub show_grid_lines: bool,
    pub grid_line_color: ColorToken,
    /// Maximum undo depth per sprite; unbounded when absent.
    pub history_limit: Option<usize>,
    /// Dump the active sprite to the log after every change.
    pub log_exports: bool,
    pub export: ExportOptions,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            columns: 16,
            rows: 16,
            cell_size: 20,
            checker: [ColorToken::from("#f3f3f3"), ColorToken::from("#e8e8e8")],
            show_grid_lines: false,
            grid_line_color: ColorToken::from("#d0d0d0"),
            history_limit: None,
            log_exports: true,
            export: ExportOptions::default(),
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.columns > 0 && self.rows > 0,
            "grid must have at least one cell, got {}x{}",
            self.columns,
            self.rows
        );
        ensure!(
            self.columns
                .checked_mul(self.rows)
                .is_some_and(|n| n <= MAX_CELLS),
            "grid of {}x{} exceeds {} cells",
            self.columns,
            self.rows,
            MAX_CELLS
        );
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.history_limit != Some(0),
            "history limit must be at least 1, or absent for no limit"
        );
        Ok(())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let data_bytes = std::fs::read(path)?;
    let data: T = serde_json::from_slice(&data_bytes)?;
    Ok(data)
}

pub fn get_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "SpritePainter")
        .context("Unable to open config directory.")?;
    Ok(project_dirs.config_dir().join("config.json"))
}

/// Read the config at `path`, falling back to defaults if there is no file.
pub fn load_config_from(path: &Path) -> Result<EditorConfig> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(EditorConfig::default());
    }
    let config: EditorConfig =
        load_json(path).with_context(|| format!("Invalid config file {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config() -> Result<EditorConfig> {
    load_config_from(&get_config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ColorMode, ExportFormat};

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"columns": 8, "export": {"color_mode": "index"}}"#).unwrap();
        assert_eq!(config.columns, 8);
        assert_eq!(config.rows, 16);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.export.color_mode, ColorMode::Index);
        assert_eq!(config.export.format, ExportFormat::Object);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let config = EditorConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = EditorConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let config = EditorConfig {
            columns: usize::MAX,
            rows: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = EditorConfig {
            columns: 1024,
            rows: 1024,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let config = EditorConfig {
            columns: 1025,
            ..config
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let config = EditorConfig {
            history_limit: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = EditorConfig {
            history_limit: Some(1),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("sprite_painter_missing_config.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_config_from(&path).unwrap(), EditorConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("sprite_painter_malformed_config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_config_from(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
