use iced::{Size, Task, Theme};
use log::info;
use state::AppState;

mod message;
mod state;
mod update;
mod view;

fn theme(_state: &AppState) -> Theme {
    match dark_light::detect().unwrap_or(dark_light::Mode::Unspecified) {
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Dark | dark_light::Mode::Unspecified => Theme::Dark,
    }
}

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = state::get_initial_state()?;
    let (width, height) = state.editor.surface_size();
    info!(
        "Starting with a {}x{} grid",
        state.editor.grid().columns(),
        state.editor.grid().rows()
    );

    iced::application("Sprite Painter", update::update, view::view)
        .font(iced_fonts::REQUIRED_FONT_BYTES)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .theme(theme)
        .subscription(update::subscription)
        .window_size(Size::new(
            (width + view::PALETTE_PANEL_WIDTH + 60.0).max(640.0),
            (height + 140.0).max(420.0),
        ))
        .run_with(move || (state, Task::none()))?;
    Ok(())
}
