//! Layouts: nibble placements on the coarse 4x4 grid.

use crate::types::{Mirror, Placement, LAYOUT_GRID_SIZE};

/// Inclusive coarse-grid extent of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u8,
    pub max_x: u8,
    pub min_y: u8,
    pub max_y: u8,
}

impl Bounds {
    /// Coarse columns spanned.
    pub fn cols(&self) -> i32 {
        self.max_x as i32 - self.min_x as i32 + 1
    }

    /// Coarse rows spanned.
    pub fn rows(&self) -> i32 {
        self.max_y as i32 - self.min_y as i32 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Four nibbles as a 2x2 block, most significant top-left.
    pub fn square() -> Self {
        Self::new(vec![
            Placement::new(3, 0, 0),
            Placement::new(2, 1, 0),
            Placement::new(1, 0, 1),
            Placement::new(0, 1, 1),
        ])
    }

    /// Nibble 0 alone at the origin, the layout of a fresh slot.
    pub fn single() -> Self {
        Self::new(vec![Placement::new(0, 0, 0)])
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.placements.first()?;
        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(self.placements.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Placement occupying grid cell `(x, y)`, if any.
    pub fn at(&self, x: u8, y: u8) -> Option<&Placement> {
        self.placements.iter().find(|p| p.x == x && p.y == y)
    }

    /// Place a nibble token the way the layout editor does.
    ///
    /// Any previous placement of `nibble` is removed. If it was not at
    /// `(x, y)`, the nibble is put there, evicting whatever occupied the
    /// cell; picking the nibble's own cell therefore just removes it.
    /// Coordinates outside the 4x4 grid are ignored. Returns whether the
    /// nibble ends up placed.
    pub fn place(&mut self, nibble: u8, x: u8, y: u8, mirror: Mirror) -> bool {
        if x >= LAYOUT_GRID_SIZE || y >= LAYOUT_GRID_SIZE {
            return false;
        }

        let idx = self.placements.iter().position(|p| p.nibble == nibble);
        let old = idx.map(|i| self.placements.remove(i));
        if matches!(old, Some(p) if p.x == x && p.y == y) {
            return false;
        }

        self.placements.retain(|p| !(p.x == x && p.y == y));
        self.placements
            .push(Placement::new(nibble, x, y).with_mirror(mirror));
        self.sort_row_major();
        true
    }

    /// Drop every placement.
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    fn sort_row_major(&mut self) {
        self.placements.sort_by_key(|p| (p.y, p.x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_square_and_empty() {
        assert_eq!(Layout::default().bounds(), None);

        let b = Layout::square().bounds().unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (0, 1, 0, 1));
        assert_eq!((b.cols(), b.rows()), (2, 2));

        let l = Layout::new(vec![Placement::new(0, 3, 2), Placement::new(1, 1, 3)]);
        let b = l.bounds().unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (1, 3, 2, 3));
    }

    #[test]
    fn bounds_span_the_full_coordinate_range() {
        let l = Layout::new(vec![Placement::new(0, 0, 0), Placement::new(1, 255, 255)]);
        let b = l.bounds().unwrap();
        assert_eq!((b.cols(), b.rows()), (256, 256));
    }

    #[test]
    fn place_moves_existing_nibble() {
        let mut l = Layout::single();
        assert!(l.place(0, 2, 1, Mirror::new(true, false)));
        assert_eq!(l.placements().len(), 1);
        let p = l.at(2, 1).unwrap();
        assert_eq!(p.nibble, 0);
        assert!(p.mirror.x);
        assert!(l.at(0, 0).is_none());
    }

    #[test]
    fn place_on_own_cell_removes_it() {
        let mut l = Layout::single();
        assert!(!l.place(0, 0, 0, Mirror::NONE));
        assert!(l.is_empty());
    }

    #[test]
    fn place_evicts_other_nibble_and_keeps_row_major_order() {
        let mut l = Layout::square();
        assert!(l.place(0, 0, 0, Mirror::NONE));
        let order: Vec<_> = l.placements().iter().map(|p| (p.nibble, p.x, p.y)).collect();
        assert_eq!(order, vec![(0, 0, 0), (2, 1, 0), (1, 0, 1)]);
    }

    #[test]
    fn place_outside_grid_is_ignored() {
        let mut l = Layout::single();
        assert!(!l.place(1, 4, 0, Mirror::NONE));
        assert_eq!(l, Layout::single());
        l.clear();
        assert!(l.is_empty());
    }
}
