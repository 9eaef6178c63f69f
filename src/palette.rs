// Ordered list of selectable colors plus the active selection.
use crate::color::ColorToken;

pub type ColorIdx = usize;

pub const DEFAULT_PALETTE: [&str; 64] = [
    "#000000", "#e03c28", "#ffffff", "#d7d7d7", "#a8a8a8", "#7b7b7b", "#343434", "#151515",
    "#0d2030", "#415d66", "#71a6a1", "#bdffca", "#25e2cd", "#0a98ac", "#005280", "#00604b",
    "#20b562", "#58d332", "#139d08", "#004e00", "#172808", "#376d03", "#6ab417", "#8cd612",
    "#beeb71", "#eeffa9", "#b6c121", "#939717", "#cc8f15", "#ffbb31", "#ffe737", "#f68f37",
    "#ad4e1a", "#231712", "#5c3c0d", "#ae6c37", "#c59782", "#e2d7b5", "#4f1507", "#823c3d",
    "#da655e", "#e18289", "#f5b784", "#ffe9c5", "#ff82ce", "#cf3c71", "#871646", "#a328b3",
    "#cc69e4", "#d59cfc", "#fec9ed", "#e2c9ff", "#a675fe", "#6a31ca", "#5a1991", "#211640",
    "#3d34a5", "#6264dc", "#9ba0ef", "#98dcff", "#5ba8ff", "#0a89ff", "#024aca", "#00177d",
];

pub type ColorChangeCallback = Box<dyn FnMut(&ColorToken) + Send>;

pub struct Palette {
    colors: Vec<ColorToken>,
    active: ColorToken,
    on_change: Option<ColorChangeCallback>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.iter().map(|&c| ColorToken::from(c)).collect())
    }
}

impl Palette {
    /// The first listed color starts out active (black if the list is empty).
    pub fn new(colors: Vec<ColorToken>) -> Self {
        let active = colors
            .first()
            .cloned()
            .unwrap_or_else(|| ColorToken::from("#000000"));
        Self {
            colors,
            active,
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(&ColorToken) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn colors(&self) -> &[ColorToken] {
        &self.colors
    }

    pub fn active(&self) -> &ColorToken {
        &self.active
    }

    /// Make `color` active. The color does not need to be listed, e.g. when
    /// it was sampled from the canvas.
    pub fn select(&mut self, color: ColorToken) {
        self.active = color;
        if let Some(callback) = &mut self.on_change {
            callback(&self.active);
        }
    }

    pub fn select_index(&mut self, idx: ColorIdx) -> bool {
        let Some(color) = self.colors.get(idx).cloned() else {
            return false;
        };
        self.select(color);
        true
    }

    pub fn index_of(&self, color: &ColorToken) -> Option<ColorIdx> {
        self.colors.iter().position(|c| c.matches(color))
    }

    pub fn is_active(&self, color: &ColorToken) -> bool {
        self.active.matches(color)
    }
}
