use itertools::iproduct;
use log::warn;

use crate::{
    color::{ColorRGB, ColorToken},
    config::EditorConfig,
    grid::Grid,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Drawing primitives supplied by whatever displays the canvas.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: ColorRGB);

    fn stroke_line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: ColorRGB, _width: f32) {}
}

const DEFAULT_CHECKER: [ColorRGB; 2] = [[0xf3, 0xf3, 0xf3], [0xe8, 0xe8, 0xe8]];

fn parse_or(token: &ColorToken, fallback: ColorRGB) -> ColorRGB {
    token.to_rgb().unwrap_or_else(|| {
        warn!("Cannot draw color {}, using fallback", token);
        fallback
    })
}

/// Repaints a whole grid: checkerboard first, then the painted cells.
#[derive(Clone, Debug)]
pub struct Renderer {
    cell_size: f32,
    checker: [ColorRGB; 2],
    grid_lines: Option<ColorRGB>,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        let grid_lines = config
            .show_grid_lines
            .then(|| parse_or(&config.grid_line_color, [0xd0, 0xd0, 0xd0]));
        Self {
            cell_size: config.cell_size as f32,
            checker: [
                parse_or(&config.checker[0], DEFAULT_CHECKER[0]),
                parse_or(&config.checker[1], DEFAULT_CHECKER[1]),
            ],
            grid_lines,
        }
    }

    pub fn surface_size(&self, grid: &Grid) -> (f32, f32) {
        (
            grid.columns() as f32 * self.cell_size,
            grid.rows() as f32 * self.cell_size,
        )
    }

    fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect {
            x: x as f32 * self.cell_size,
            y: y as f32 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    fn draw_background(&self, grid: &Grid, surface: &mut impl Surface) {
        for (y, x) in iproduct!(0..grid.rows(), 0..grid.columns()) {
            surface.fill_rect(self.cell_rect(x, y), self.checker[(x + y) % 2]);
        }
    }

    fn draw_cells(&self, grid: &Grid, surface: &mut impl Surface) {
        for (y, x) in iproduct!(0..grid.rows(), 0..grid.columns()) {
            let Some(color) = &grid.cells()[y * grid.columns() + x] else {
                continue;
            };
            match color.to_rgb() {
                Some(rgb) => surface.fill_rect(self.cell_rect(x, y), rgb),
                None => warn!("Cannot draw color {} at ({}, {})", color, x, y),
            }
        }
    }

    fn draw_grid_lines(&self, grid: &Grid, color: ColorRGB, surface: &mut impl Surface) {
        let (width, height) = self.surface_size(grid);
        for x in 1..grid.columns() {
            let px = x as f32 * self.cell_size;
            surface.stroke_line((px, 0.0), (px, height), color, 1.0);
        }
        for y in 1..grid.rows() {
            let py = y as f32 * self.cell_size;
            surface.stroke_line((0.0, py), (width, py), color, 1.0);
        }
    }

    pub fn render(&self, grid: &Grid, surface: &mut impl Surface) {
        self.draw_background(grid, surface);
        self.draw_cells(grid, surface);
        if let Some(color) = self.grid_lines {
            self.draw_grid_lines(grid, color, surface);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Fill(Rect, ColorRGB),
        Line((f32, f32), (f32, f32), ColorRGB),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, rect: Rect, color: ColorRGB) {
            self.ops.push(Op::Fill(rect, color));
        }

        fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: ColorRGB, _width: f32) {
            self.ops.push(Op::Line(from, to, color));
        }
    }

    fn render(config: &EditorConfig, grid: &Grid) -> Vec<Op> {
        let mut surface = RecordingSurface::default();
        Renderer::new(config).render(grid, &mut surface);
        surface.ops
    }

    #[test]
    fn blank_grid_is_checkerboard_only() {
        let config = EditorConfig::default();
        let ops = render(&config, &Grid::new(3, 2));
        assert_eq!(ops.len(), 6);
        assert_eq!(
            ops[0],
            Op::Fill(Rect { x: 0.0, y: 0.0, width: 20.0, height: 20.0 }, DEFAULT_CHECKER[0])
        );
        assert_eq!(
            ops[1],
            Op::Fill(Rect { x: 20.0, y: 0.0, width: 20.0, height: 20.0 }, DEFAULT_CHECKER[1])
        );
        // (0, 1) is odd
        assert_eq!(
            ops[3],
            Op::Fill(Rect { x: 0.0, y: 20.0, width: 20.0, height: 20.0 }, DEFAULT_CHECKER[1])
        );
    }

    #[test]
    fn cells_are_drawn_after_background() {
        let config = EditorConfig::default();
        let mut grid = Grid::new(2, 2);
        grid.set_cell(1, 1, Some(ColorToken::from("#e03c28")));
        let ops = render(&config, &grid);
        assert_eq!(ops.len(), 5);
        assert_eq!(
            ops[4],
            Op::Fill(Rect { x: 20.0, y: 20.0, width: 20.0, height: 20.0 }, [0xe0, 0x3c, 0x28])
        );
    }

    #[test]
    fn unparsable_cell_is_skipped() {
        let config = EditorConfig::default();
        let mut grid = Grid::new(1, 1);
        grid.set_cell(0, 0, Some(ColorToken::from("tomato")));
        assert_eq!(render(&config, &grid).len(), 1);
    }

    #[test]
    fn grid_lines_are_optional() {
        let config = EditorConfig {
            show_grid_lines: true,
            ..Default::default()
        };
        let ops = render(&config, &Grid::new(3, 2));
        let lines = ops.iter().filter(|op| matches!(op, Op::Line(..))).count();
        assert_eq!(lines, 3);
        assert!(matches!(ops.last(), Some(Op::Line(..))));
    }

    #[test]
    fn surface_matches_grid_size() {
        let renderer = Renderer::new(&EditorConfig::default());
        assert_eq!(renderer.surface_size(&Grid::new(16, 8)), (320.0, 160.0));
    }
}
