use iced::{keyboard, Subscription, Task};
use sprite_painter::input::{InputEvent, Modifiers};

use crate::{message::Message, state::AppState};

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    let editor = &mut state.editor;
    let redraw = match message {
        Message::Input(event) => editor.dispatch(event),
        Message::SelectColor(idx) => {
            editor.select_palette_index(idx);
            false
        }
        Message::SetTool(tool) => {
            editor.set_tool(tool);
            false
        }
        Message::Undo => editor.undo(),
        Message::Clear => {
            editor.clear();
            true
        }
        Message::AddSprite => {
            editor.add_sprite();
            true
        }
        Message::SelectSprite(id) => editor.select_sprite_id(id),
        Message::Export => {
            editor.log_export();
            false
        }
    };
    if redraw {
        state.canvas_cache.clear();
    }
    Task::none()
}

fn key_press(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    let keyboard::Key::Character(c) = key else {
        return None;
    };
    Some(Message::Input(InputEvent::Key {
        key: c.to_string(),
        modifiers: Modifiers {
            ctrl: modifiers.control(),
            meta: modifiers.logo(),
            shift: modifiers.shift(),
            alt: modifiers.alt(),
        },
    }))
}

pub fn subscription(_state: &AppState) -> Subscription<Message> {
    keyboard::on_key_press(key_press)
}
