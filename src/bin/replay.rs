use std::{io::Read, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use sprite_painter::{
    config::{self, EditorConfig},
    editor::Editor,
    export::{to_json_string, ColorMode, ExportFormat, ExportScope},
    script::parse_script,
};

/// Replay an input script against a blank editor and print the export.
#[derive(Parser, Debug)]
struct Args {
    /// Script to replay; reads stdin when omitted
    script: Option<PathBuf>,

    /// Start from the user config instead of built-in defaults
    #[arg(long)]
    user_config: bool,

    #[arg(long)]
    columns: Option<usize>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cell_size: Option<u32>,

    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    #[arg(long, value_enum)]
    color_mode: Option<ColorMode>,

    #[arg(long, value_enum)]
    scope: Option<ExportScope>,

    #[arg(long)]
    include_empty: bool,
}

fn build_config(args: &Args) -> Result<EditorConfig> {
    let mut config = if args.user_config {
        config::load_config()?
    } else {
        EditorConfig::default()
    };
    config.columns = args.columns.unwrap_or(config.columns);
    config.rows = args.rows.unwrap_or(config.rows);
    config.cell_size = args.cell_size.unwrap_or(config.cell_size);
    config.export.format = args.format.unwrap_or(config.export.format);
    config.export.color_mode = args.color_mode.unwrap_or(config.export.color_mode);
    config.export.scope = args.scope.unwrap_or(config.export.scope);
    config.export.include_empty |= args.include_empty;
    // The final dump goes to stdout instead.
    config.log_exports = false;
    config.validate()?;
    Ok(config)
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => {
            info!("Loading {}", p.display());
            std::fs::read_to_string(p).with_context(|| format!("Unable to read {}", p.display()))
        }
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Unable to read stdin")?;
            Ok(script)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    let commands = parse_script(&read_script(args.script.as_ref())?)?;
    info!("Replaying {} commands", commands.len());

    let mut editor = Editor::new(config);
    for cmd in commands {
        cmd.apply(&mut editor);
    }

    for dump in editor.export() {
        println!("{}: {}", dump.name, to_json_string(&dump.data)?);
    }
    Ok(())
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
