use sprite_painter::{editor::Tool, input::InputEvent, palette::ColorIdx, sprite::SpriteId};

#[derive(Debug, Clone)]
pub enum Message {
    Input(InputEvent),
    SelectColor(ColorIdx),
    SetTool(Tool),
    Undo,
    Clear,
    AddSprite,
    SelectSprite(SpriteId),
    Export,
}
