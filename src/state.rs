use anyhow::Result;
use iced::widget::canvas;
use sprite_painter::{config, editor::Editor};

pub struct AppState {
    pub editor: Editor,
    // Rendered sprite; cleared whenever the editor reports a change.
    pub canvas_cache: canvas::Cache,
}

pub fn get_initial_state() -> Result<AppState> {
    let config = config::load_config()?;
    Ok(AppState {
        editor: Editor::new(config),
        canvas_cache: canvas::Cache::new(),
    })
}
