// Multiple independent canvases ("sprites"), each with its own undo stack.
use hashbrown::HashMap;
use log::{debug, info};

use crate::{grid::Grid, history::History};

pub type SpriteId = u32;

#[derive(Clone, Debug)]
pub struct Sprite {
    pub id: SpriteId,
    pub name: String,
    pub grid: Grid,
    pub history: History,
}

impl Sprite {
    pub fn new(
        id: SpriteId,
        name: String,
        columns: usize,
        rows: usize,
        history_limit: Option<usize>,
    ) -> Self {
        Self {
            id,
            name,
            grid: Grid::new(columns, rows),
            history: History::with_limit(history_limit),
        }
    }

    pub fn push_history(&mut self) {
        self.history.push(&self.grid);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }
}

/// Ordered sprites plus the active one. Always holds at least one sprite.
pub struct SpriteManager {
    sprites: Vec<Sprite>,
    sprites_id_idx_map: HashMap<SpriteId, usize>,
    active_idx: usize,
    next_id: SpriteId,
    columns: usize,
    rows: usize,
    history_limit: Option<usize>,
}

impl SpriteManager {
    pub fn new(columns: usize, rows: usize, history_limit: Option<usize>) -> Self {
        let mut manager = Self {
            sprites: vec![],
            sprites_id_idx_map: HashMap::new(),
            active_idx: 0,
            next_id: 1,
            columns,
            rows,
            history_limit,
        };
        manager.add_sprite();
        manager
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    /// Tab position of the sprite with the given id.
    pub fn position(&self, id: SpriteId) -> Option<usize> {
        self.sprites_id_idx_map.get(&id).copied()
    }

    pub fn active_index(&self) -> usize {
        self.active_idx
    }

    pub fn active(&self) -> &Sprite {
        &self.sprites[self.active_idx]
    }

    pub fn active_mut(&mut self) -> &mut Sprite {
        &mut self.sprites[self.active_idx]
    }

    /// Append a blank sprite and make it active. Its name is its 1-based
    /// position at creation time.
    pub fn add_sprite(&mut self) -> SpriteId {
        let id = self.next_id;
        self.next_id += 1;
        let name = format!("{}", self.sprites.len() + 1);
        info!("Creating sprite {} (id {})", name, id);
        self.sprites.push(Sprite::new(
            id,
            name,
            self.columns,
            self.rows,
            self.history_limit,
        ));
        self.active_idx = self.sprites.len() - 1;
        self.sprites_id_idx_map.insert(id, self.active_idx);
        id
    }

    pub fn select(&mut self, idx: usize) -> bool {
        if idx >= self.sprites.len() {
            debug!("No sprite at index {}", idx);
            return false;
        }
        if idx != self.active_idx {
            info!("Switching to sprite {}", self.sprites[idx].name);
        }
        self.active_idx = idx;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorToken;

    #[test]
    fn starts_with_one_sprite() {
        let sprites = SpriteManager::new(16, 16, None);
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites.active_index(), 0);
        assert_eq!(sprites.active().name, "1");
    }

    #[test]
    fn new_sprite_is_appended_and_active() {
        let mut sprites = SpriteManager::new(4, 4, None);
        let id = sprites.add_sprite();
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites.active_index(), 1);
        assert_eq!(sprites.active().id, id);
        assert_eq!(sprites.active().name, "2");
        assert!(sprites.active().grid.is_blank());
        assert_eq!(sprites.position(id), Some(1));
        assert_eq!(sprites.position(id + 1), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut sprites = SpriteManager::new(1, 1, None);
        let a = sprites.active().id;
        let b = sprites.add_sprite();
        let c = sprites.add_sprite();
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn select_out_of_range_keeps_active() {
        let mut sprites = SpriteManager::new(4, 4, None);
        sprites.add_sprite();
        assert!(!sprites.select(2));
        assert_eq!(sprites.active_index(), 1);
        assert!(sprites.select(0));
        assert_eq!(sprites.active_index(), 0);
    }

    #[test]
    fn histories_are_private() {
        let mut sprites = SpriteManager::new(4, 4, None);
        sprites.active_mut().push_history();
        sprites
            .active_mut()
            .grid
            .set_cell(0, 0, Some(ColorToken::from("#ffffff")));

        sprites.add_sprite();
        assert!(!sprites.active_mut().undo());

        sprites.select(0);
        assert_eq!(sprites.active().history.len(), 1);
        assert!(sprites.active_mut().undo());
        assert!(sprites.active().grid.is_blank());
    }
}
