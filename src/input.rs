// Toolkit-independent input events consumed by `Editor::dispatch`.
use crate::grid::CellCoord;

/// Pointer position in surface pixels, relative to its top-left corner.
pub type PixelCoord = f32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const META: Modifiers = Modifiers {
        ctrl: false,
        meta: true,
        shift: false,
        alt: false,
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed: starts a stroke.
    Press { x: PixelCoord, y: PixelCoord },
    /// Pointer moved. Paints only while a stroke is in progress.
    Move { x: PixelCoord, y: PixelCoord },
    /// Primary button released, wherever the pointer is.
    Release,
    /// Secondary button: sample the color under the pointer.
    Pick { x: PixelCoord, y: PixelCoord },
    Key { key: String, modifiers: Modifiers },
}

/// Map a pixel position to the cell containing it. Negative positions map to
/// negative cells; non-finite positions map to nothing.
pub fn cell_at(x: PixelCoord, y: PixelCoord, cell_size: u32) -> Option<(CellCoord, CellCoord)> {
    if !x.is_finite() || !y.is_finite() || cell_size == 0 {
        return None;
    }
    let size = cell_size as f32;
    Some(((x / size).floor() as CellCoord, (y / size).floor() as CellCoord))
}

pub fn is_undo_shortcut(key: &str, modifiers: Modifiers) -> bool {
    modifiers.command() && key.eq_ignore_ascii_case("z")
}
