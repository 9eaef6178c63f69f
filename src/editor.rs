use log::{debug, error, info};

use crate::{
    color::ColorToken,
    config::EditorConfig,
    export::{self, to_json_string, ExportOptions, SpriteDump},
    grid::Grid,
    input::{cell_at, is_undo_shortcut, InputEvent, Modifiers, PixelCoord},
    palette::{ColorIdx, Palette},
    render::{Renderer, Surface},
    sprite::{SpriteId, SpriteManager},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

/// State of one editing session. Every mutation of the sprites goes through
/// here; callers redraw when an operation reports a change.
pub struct Editor {
    config: EditorConfig,
    sprites: SpriteManager,
    palette: Palette,
    renderer: Renderer,
    tool: Tool,
    dragging: bool,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let sprites = SpriteManager::new(config.columns, config.rows, config.history_limit);
        let palette = Palette::default().on_change(|c| debug!("Active color is now {}", c));
        let renderer = Renderer::new(&config);
        Self {
            config,
            sprites,
            palette,
            renderer,
            tool: Tool::Pen,
            dragging: false,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Export settings are the only part of the config that may change after
    /// construction; grid size, cell size and history depth are fixed.
    pub fn set_export_options(&mut self, options: ExportOptions) {
        self.config.export = options;
    }

    pub fn sprites(&self) -> &SpriteManager {
        &self.sprites
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn grid(&self) -> &Grid {
        &self.sprites.active().grid
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn surface_size(&self) -> (f32, f32) {
        self.renderer.surface_size(self.grid())
    }

    /// Handle one input event. Returns whether the canvas needs a redraw.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Press { x, y } => {
                self.dragging = true;
                self.sprites.active_mut().push_history();
                self.paint_at(x, y)
            }
            InputEvent::Move { x, y } => self.dragging && self.paint_at(x, y),
            InputEvent::Release => {
                self.dragging = false;
                false
            }
            InputEvent::Pick { x, y } => {
                self.pick_at(x, y);
                false
            }
            InputEvent::Key { key, modifiers } => self.key(&key, modifiers),
        }
    }

    fn key(&mut self, key: &str, modifiers: Modifiers) -> bool {
        if is_undo_shortcut(key, modifiers) {
            return self.undo();
        }
        false
    }

    /// Apply the current tool to the cell under `(x, y)`.
    pub fn paint_at(&mut self, x: PixelCoord, y: PixelCoord) -> bool {
        let Some((cx, cy)) = cell_at(x, y, self.config.cell_size) else {
            return false;
        };
        let color = match self.tool {
            Tool::Pen => Some(self.palette.active().clone()),
            Tool::Eraser => None,
        };
        if !self.sprites.active_mut().grid.set_cell(cx, cy, color) {
            return false;
        }
        self.after_change();
        true
    }

    /// Adopt the color under `(x, y)` as the active color. Empty cells and
    /// positions off the grid leave everything unchanged.
    pub fn pick_at(&mut self, x: PixelCoord, y: PixelCoord) -> bool {
        let picked = cell_at(x, y, self.config.cell_size)
            .and_then(|(cx, cy)| self.grid().get_cell(cx, cy))
            .cloned();
        match picked {
            Some(color) => {
                self.select_color(color);
                true
            }
            None => {
                debug!("Nothing to pick at ({}, {})", x, y);
                false
            }
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Make `color` active and switch to the pen.
    pub fn select_color(&mut self, color: ColorToken) {
        self.palette.select(color);
        self.tool = Tool::Pen;
    }

    pub fn select_palette_index(&mut self, idx: ColorIdx) -> bool {
        if !self.palette.select_index(idx) {
            return false;
        }
        self.tool = Tool::Pen;
        true
    }

    pub fn clear(&mut self) {
        let sprite = self.sprites.active_mut();
        sprite.push_history();
        sprite.grid.clear();
        self.after_change();
    }

    pub fn undo(&mut self) -> bool {
        if !self.sprites.active_mut().undo() {
            return false;
        }
        info!("Undo on sprite {}", self.sprites.active().name);
        self.after_change();
        true
    }

    pub fn add_sprite(&mut self) {
        self.sprites.add_sprite();
        self.dragging = false;
    }

    pub fn select_sprite(&mut self, idx: usize) -> bool {
        if !self.sprites.select(idx) {
            return false;
        }
        self.dragging = false;
        true
    }

    pub fn select_sprite_id(&mut self, id: SpriteId) -> bool {
        match self.sprites.position(id) {
            Some(idx) => self.select_sprite(idx),
            None => false,
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        self.renderer.render(self.grid(), surface);
    }

    pub fn export(&self) -> Vec<SpriteDump> {
        export::export(&self.sprites, &self.palette, &self.config.export)
    }

    pub fn log_export(&self) {
        for dump in self.export() {
            match to_json_string(&dump.data) {
                Ok(json) => info!("Sprite {}: {}", dump.name, json),
                Err(e) => error!("Error exporting sprite {}: {}", dump.name, e),
            }
        }
    }

    fn after_change(&self) {
        if self.config.log_exports {
            self.log_export();
        }
    }
}
