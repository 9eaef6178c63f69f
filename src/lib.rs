//! Pixel-art sprite editing: a fixed-size grid of colored cells with pen and
//! eraser tools, a palette, per-sprite undo history and a full-repaint
//! renderer. The windowing front end lives in `main.rs`; everything here is
//! independent of any UI toolkit.

pub mod color;
pub mod config;
pub mod editor;
pub mod export;
pub mod grid;
pub mod history;
pub mod input;
pub mod palette;
pub mod render;
pub mod script;
pub mod sprite;
