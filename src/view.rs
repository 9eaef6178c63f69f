mod canvas;
mod palette;

use canvas::sprite_canvas_view;
use iced::{
    alignment::Vertical,
    widget::{button, column, row, text, Row},
    Element, Length, Theme,
};
use iced_aw::quad;
use palette::palette_view;
use sprite_painter::editor::Tool;

use crate::{message::Message, state::AppState};

pub use palette::PALETTE_PANEL_WIDTH;

fn vertical_separator() -> quad::Quad {
    quad::Quad {
        quad_color: iced::Color::from([0.5; 3]).into(),
        quad_border: iced::Border {
            radius: iced::border::Radius::new(1.0),
            ..Default::default()
        },
        inner_bounds: iced_aw::widget::InnerBounds::Ratio(1.0, 1.0),
        width: Length::Fixed(1.0),
        ..Default::default()
    }
}

fn button_style(active: bool) -> fn(&Theme, button::Status) -> button::Style {
    if active {
        button::primary
    } else {
        button::secondary
    }
}

fn tool_button(label: &str, tool: Tool, current: Tool) -> Element<Message> {
    button(text(label))
        .style(button_style(tool == current))
        .on_press(Message::SetTool(tool))
        .into()
}

fn toolbar_view(state: &AppState) -> Element<Message> {
    let tool = state.editor.tool();
    row![
        tool_button("Pen", Tool::Pen, tool),
        tool_button("Eraser", Tool::Eraser, tool),
        button(text("Undo"))
            .style(button::secondary)
            .on_press(Message::Undo),
        button(text("Clear"))
            .style(button::danger)
            .on_press(Message::Clear),
        button(text("Export"))
            .style(button::secondary)
            .on_press(Message::Export),
    ]
    .spacing(10)
    .align_y(Vertical::Center)
    .into()
}

fn tabs_view(state: &AppState) -> Element<Message> {
    let sprites = state.editor.sprites();
    let mut tabs: Row<Message> = Row::new();
    for (i, sprite) in sprites.iter().enumerate() {
        tabs = tabs.push(
            button(text(sprite.name.clone()))
                .style(button_style(i == sprites.active_index()))
                .on_press(Message::SelectSprite(sprite.id)),
        );
    }
    tabs = tabs.push(
        button(text("\u{F64D}").font(iced_fonts::BOOTSTRAP_FONT))
            .style(button::success)
            .on_press(Message::AddSprite),
    );
    tabs.spacing(5).align_y(Vertical::Center).into()
}

pub fn view(state: &AppState) -> Element<Message> {
    let main_panel: Element<Message> = column![
        toolbar_view(state),
        tabs_view(state),
        sprite_canvas_view(state),
    ]
    .padding(10)
    .spacing(10)
    .into();

    row![main_panel, vertical_separator(), palette_view(state)]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
