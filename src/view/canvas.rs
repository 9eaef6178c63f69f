// Module for displaying and painting the active sprite cell-by-cell
use iced::{
    mouse,
    widget::{
        canvas,
        canvas::{Frame, Path, Stroke},
    },
    Element, Point, Size,
};
use sprite_painter::{
    color::ColorRGB,
    editor::Editor,
    input::InputEvent,
    render::{Rect, Surface},
};

use crate::{message::Message, state::AppState};

fn to_iced_color([r, g, b]: ColorRGB) -> iced::Color {
    iced::Color::from_rgb8(r, g, b)
}

struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl Surface for FrameSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: ColorRGB) {
        self.frame.fill_rectangle(
            Point::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
            to_iced_color(color),
        );
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: ColorRGB, width: f32) {
        self.frame.stroke(
            &Path::line(Point::new(from.0, from.1), Point::new(to.0, to.1)),
            Stroke::default()
                .with_width(width)
                .with_color(to_iced_color(color)),
        );
    }
}

struct SpriteCanvas<'a> {
    editor: &'a Editor,
    cache: &'a canvas::Cache,
}

impl canvas::Program<Message> for SpriteCanvas<'_> {
    // Drag state is kept by the editor.
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let canvas::Event::Mouse(mouse_event) = event else {
            return (canvas::event::Status::Ignored, None);
        };
        let input = match mouse_event {
            mouse::Event::ButtonPressed(button) => {
                let Some(p) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                match button {
                    mouse::Button::Left => InputEvent::Press { x: p.x, y: p.y },
                    mouse::Button::Right => InputEvent::Pick { x: p.x, y: p.y },
                    _ => return (canvas::event::Status::Ignored, None),
                }
            }
            // Releases count wherever they happen, so a stroke never sticks.
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft
                if self.editor.is_dragging() =>
            {
                InputEvent::Release
            }
            mouse::Event::CursorMoved { position } if self.editor.is_dragging() => {
                InputEvent::Move {
                    x: position.x - bounds.x,
                    y: position.y - bounds.y,
                }
            }
            _ => return (canvas::event::Status::Ignored, None),
        };
        (canvas::event::Status::Captured, Some(Message::Input(input)))
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            self.editor.render(&mut FrameSurface { frame });
        });
        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn sprite_canvas_view(state: &AppState) -> Element<Message> {
    let (width, height) = state.editor.surface_size();
    canvas(SpriteCanvas {
        editor: &state.editor,
        cache: &state.canvas_cache,
    })
    .width(width)
    .height(height)
    .into()
}
