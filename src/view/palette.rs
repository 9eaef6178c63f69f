// Module for displaying the palette swatches and picking the active color
use iced::{
    mouse,
    widget::{canvas, column, text, Column, Row},
    Element, Size,
};
use sprite_painter::{color::ColorRGB, palette::ColorIdx};

use crate::{message::Message, state::AppState};

const SWATCHES_PER_ROW: usize = 8;
const SWATCH_SIZE: f32 = 28.0;
pub const PALETTE_PANEL_WIDTH: f32 = SWATCH_SIZE * SWATCHES_PER_ROW as f32 + 20.0;

#[derive(Debug)]
struct ColorBox {
    // Unparsable tokens are drawn as an empty outline.
    color: Option<ColorRGB>,
    thickness: f32,
    selected: bool,
    color_idx: ColorIdx,
}

impl canvas::Program<Message> for ColorBox {
    // No internal state
    type State = ();

    fn update(
        &self,
        _interaction: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if cursor.position_in(bounds).is_none() {
            return (canvas::event::Status::Ignored, None);
        };

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => (
                canvas::event::Status::Captured,
                Some(Message::SelectColor(self.color_idx)),
            ),
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let thickness = self.thickness;
        if let Some([r, g, b]) = self.color {
            let size = Size {
                width: frame.size().width - 2.0 * thickness,
                height: frame.size().height - 2.0 * thickness,
            };
            frame.fill_rectangle(
                iced::Point {
                    x: thickness,
                    y: thickness,
                },
                size,
                iced::Color::from_rgb8(r, g, b),
            );
        }

        if self.selected || self.color.is_none() {
            let border_color = if theme.extended_palette().is_dark {
                iced::Color::WHITE
            } else {
                iced::Color::BLACK
            };
            let size = Size {
                width: frame.size().width - thickness,
                height: frame.size().height - thickness,
            };
            frame.stroke_rectangle(
                iced::Point {
                    x: thickness / 2.0,
                    y: thickness / 2.0,
                },
                size,
                canvas::Stroke {
                    width: thickness,
                    style: border_color.into(),
                    ..Default::default()
                },
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn palette_view(state: &AppState) -> Element<Message> {
    let palette = state.editor.palette();
    let mut col: Column<Message> = Column::new();
    for (row_idx, colors) in palette.colors().chunks(SWATCHES_PER_ROW).enumerate() {
        let mut colors_row: Row<Message> = Row::new();
        for (i, color) in colors.iter().enumerate() {
            colors_row = colors_row.push(
                canvas(ColorBox {
                    color: color.to_rgb(),
                    thickness: 2.0,
                    selected: palette.is_active(color),
                    color_idx: row_idx * SWATCHES_PER_ROW + i,
                })
                .width(SWATCH_SIZE)
                .height(SWATCH_SIZE),
            );
        }
        col = col.push(colors_row);
    }

    column![text(format!("Color: {}", palette.active())), col]
        .spacing(10)
        .padding(10)
        .width(PALETTE_PANEL_WIDTH)
        .into()
}
