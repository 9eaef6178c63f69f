use serde_json::json;
use sprite_painter::{
    color::ColorToken,
    config::EditorConfig,
    editor::Editor,
    export::{ColorMode, ExportFormat, ExportOptions, ExportScope},
    grid::Grid,
    history::History,
    input::InputEvent,
    render::{Rect, Surface},
};

fn editor() -> Editor {
    Editor::new(EditorConfig {
        log_exports: false,
        ..Default::default()
    })
}

#[derive(Default)]
struct CountingSurface {
    fills: Vec<(Rect, [u8; 3])>,
}

impl Surface for CountingSurface {
    fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
        self.fills.push((rect, color));
    }
}

#[test]
fn painting_one_cell_on_default_grid() {
    let mut editor = editor();
    editor.select_color(ColorToken::from("#e03c28"));
    editor.dispatch(InputEvent::Press { x: 0.0, y: 0.0 });
    editor.dispatch(InputEvent::Release);

    let grid = editor.grid();
    assert_eq!((grid.columns(), grid.rows()), (16, 16));
    assert_eq!(editor.surface_size(), (320.0, 320.0));
    for y in 0..16 {
        for x in 0..16 {
            let expected = ((x, y) == (0, 0)).then(|| ColorToken::from("#e03c28"));
            assert_eq!(grid.get_cell(x, y), expected.as_ref());
        }
    }
}

#[test]
fn undo_returns_to_state_before_gesture() {
    let mut grid = Grid::new(16, 16);
    let mut history = History::new();
    history.push(&grid);
    grid.set_cell(2, 3, Some(ColorToken::from("#e03c28")));
    grid.set_cell(2, 3, Some(ColorToken::from("#ffffff")));
    assert!(history.undo(&mut grid));
    assert_eq!(grid.get_cell(2, 3), None);
}

#[test]
fn redraw_after_clear_is_background_only() {
    let mut editor = editor();
    editor.dispatch(InputEvent::Press { x: 30.0, y: 30.0 });
    editor.dispatch(InputEvent::Release);
    editor.clear();

    let mut surface = CountingSurface::default();
    editor.render(&mut surface);
    assert_eq!(surface.fills.len(), 256);
    let tones: Vec<[u8; 3]> = surface.fills.iter().map(|&(_, c)| c).collect();
    assert!(tones.iter().all(|c| *c == [0xf3; 3] || *c == [0xe8; 3]));
}

#[test]
fn object_export_with_palette_indices() {
    let mut editor = editor();
    editor.set_export_options(ExportOptions {
        scope: ExportScope::Single,
        color_mode: ColorMode::Index,
        include_empty: false,
        format: ExportFormat::Object,
    });
    editor.select_palette_index(5);
    editor.dispatch(InputEvent::Press { x: 25.0, y: 25.0 });
    editor.dispatch(InputEvent::Release);

    let dumps = editor.export();
    assert_eq!(dumps.len(), 1);
    assert_eq!(dumps[0].data, json!({"(1,1)": 5}));
}

#[test]
fn switching_sprites_keeps_inactive_state() {
    let mut editor = editor();
    editor.select_palette_index(1);
    editor.dispatch(InputEvent::Press { x: 5.0, y: 5.0 });
    editor.dispatch(InputEvent::Release);
    let first_grid = editor.grid().clone();

    editor.add_sprite();
    editor.dispatch(InputEvent::Press { x: 45.0, y: 45.0 });
    editor.dispatch(InputEvent::Release);
    assert!(editor.undo());
    assert!(editor.grid().is_blank());

    assert!(editor.select_sprite(0));
    assert_eq!(editor.grid(), &first_grid);
    assert_eq!(editor.sprites().active().history.len(), 1);
    assert!(editor.undo());
    assert!(editor.grid().is_blank());
}
