// Diagnostic dump of sprite contents, in the shapes the console expects.
use anyhow::Result;
use clap::ValueEnum;
use itertools::iproduct;
use json_pretty_compact::PrettyCompactFormatter;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Serializer, Value};

use crate::{
    grid::Cell,
    palette::Palette,
    sprite::{Sprite, SpriteManager},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    /// Only the active sprite
    #[default]
    Single,
    /// Every sprite, in tab order
    All,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// The color token itself
    #[default]
    Hex,
    /// Position in the palette (-1 when unlisted)
    Index,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One row-major list
    Flat,
    /// One list per row
    Matrix,
    /// Mapping from "(column,row)" to value
    #[default]
    Object,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub scope: ExportScope,
    pub color_mode: ColorMode,
    pub include_empty: bool,
    pub format: ExportFormat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteDump {
    pub name: String,
    pub data: Value,
}

// `None` means the cell is left out of the output entirely.
fn cell_value(cell: &Cell, palette: &Palette, options: &ExportOptions) -> Option<Value> {
    match cell {
        None => options.include_empty.then_some(Value::Null),
        Some(color) => Some(match options.color_mode {
            ColorMode::Hex => Value::from(color.as_str()),
            ColorMode::Index => palette
                .index_of(color)
                .map_or(Value::from(-1), Value::from),
        }),
    }
}

pub fn export_sprite(sprite: &Sprite, palette: &Palette, options: &ExportOptions) -> Value {
    let grid = &sprite.grid;
    let value = |cell: &Cell| cell_value(cell, palette, options);
    match options.format {
        ExportFormat::Flat => Value::Array(grid.cells().iter().filter_map(&value).collect()),
        ExportFormat::Matrix => Value::Array(
            grid.cells()
                .chunks(grid.columns().max(1))
                .take(grid.rows())
                .map(|row| Value::Array(row.iter().filter_map(&value).collect()))
                .collect(),
        ),
        ExportFormat::Object => {
            let mut map = Map::new();
            for (r, c) in iproduct!(0..grid.rows(), 0..grid.columns()) {
                if let Some(v) = value(&grid.cells()[r * grid.columns() + c]) {
                    map.insert(format!("({},{})", c, r), v);
                }
            }
            Value::Object(map)
        }
    }
}

pub fn export(sprites: &SpriteManager, palette: &Palette, options: &ExportOptions) -> Vec<SpriteDump> {
    let dump = |sprite: &Sprite| SpriteDump {
        name: sprite.name.clone(),
        data: export_sprite(sprite, palette, options),
    };
    match options.scope {
        ExportScope::Single => vec![dump(sprites.active())],
        ExportScope::All => sprites.iter().map(dump).collect(),
    }
}

pub fn to_json_string(value: &Value) -> Result<String> {
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(data_bytes)?)
}
