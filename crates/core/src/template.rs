//! Nibble design templates.
//!
//! A template is a 4x4 grid whose cells are tagged with a bit group (0..3) or
//! left empty. Group `g` lights up when bit `g` of the nibble is set, so a
//! template that is meant to read as a binary digit gives group `g` exactly
//! `2^g` cells.

use thiserror::Error;

use crate::types::{GROUP_COUNT, GROUP_LIMITS, TEMPLATE_SIZE};

/// The documented default design: a staircase of 8/4/2/1 cells.
pub const DEFAULT_TEMPLATE_CELLS: [i32; 16] = [3, 3, 3, 3, 3, 2, 2, 3, 3, 2, 1, -1, 3, 2, 1, 0];

/// Flat-form marker for an empty cell.
pub const EMPTY_CELL: i32 = -1;

/// A template cell: `None` is empty, `Some(g)` tags group `g`.
pub type GroupCell = Option<u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("cell ({row}, {col}) is outside the 4x4 grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("group {group} is not a bit group (expected 0..3)")]
    InvalidGroup { group: u8 },
    #[error("group {group} already holds its limit of {limit} cells")]
    GroupLimit { group: u8, limit: u8 },
}

/// Result of a successful [`Template::paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    Set,
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Template {
    rows: [[GroupCell; TEMPLATE_SIZE]; TEMPLATE_SIZE],
}

impl Template {
    /// A template with every cell empty.
    pub const fn empty() -> Self {
        Self {
            rows: [[None; TEMPLATE_SIZE]; TEMPLATE_SIZE],
        }
    }

    /// Build from explicit rows. Values are kept as given, even outside 0..3;
    /// such cells never light up.
    pub const fn from_rows(rows: [[GroupCell; TEMPLATE_SIZE]; TEMPLATE_SIZE]) -> Self {
        Self { rows }
    }

    /// Build from the flat, row-major form used by the settings document.
    ///
    /// `-1` (and anything else outside 0..3) is empty. Missing trailing cells
    /// stay empty and extra entries are ignored.
    pub fn from_cells(cells: &[i32]) -> Self {
        let mut t = Self::empty();
        for (i, &v) in cells.iter().take(TEMPLATE_SIZE * TEMPLATE_SIZE).enumerate() {
            if (0..GROUP_COUNT as i32).contains(&v) {
                t.rows[i / TEMPLATE_SIZE][i % TEMPLATE_SIZE] = Some(v as u8);
            }
        }
        t
    }

    /// The default staircase design.
    pub fn default_design() -> Self {
        Self::from_cells(&DEFAULT_TEMPLATE_CELLS)
    }

    /// Flat row-major form with `-1` for empty cells.
    pub fn to_cells(&self) -> [i32; 16] {
        let mut out = [EMPTY_CELL; 16];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(g) = cell {
                    out[r * TEMPLATE_SIZE + c] = *g as i32;
                }
            }
        }
        out
    }

    pub fn rows(&self) -> &[[GroupCell; TEMPLATE_SIZE]; TEMPLATE_SIZE] {
        &self.rows
    }

    /// Cell at `(row, col)`; `None` when empty or out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> GroupCell {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Mirrored copy: `x` reverses each row, `y` reverses the row order.
    ///
    /// The flips are independent, so applying both equals reversing columns
    /// and then rows.
    pub fn mirrored(&self, x: bool, y: bool) -> Self {
        let mut rows = self.rows;
        if x {
            for row in rows.iter_mut() {
                row.reverse();
            }
        }
        if y {
            rows.reverse();
        }
        Self { rows }
    }

    /// Number of cells tagged with `group`.
    pub fn group_count(&self, group: u8) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(group))
            .count()
    }

    /// Whether the template reads as a binary digit: every group is either
    /// absent or holds exactly `2^g` cells, no cell carries a foreign tag, and
    /// at least one group is present.
    pub fn is_valid_bit_display(&self) -> bool {
        let foreign = self.rows.iter().flatten().flatten().any(|&g| g >= GROUP_COUNT);
        if foreign {
            return false;
        }
        let mut present = false;
        for g in 0..GROUP_COUNT {
            let n = self.group_count(g);
            if n != 0 && n != GROUP_LIMITS[g as usize] as usize {
                return false;
            }
            present |= n != 0;
        }
        present
    }

    /// Paint a cell with a group, the way the design editor does.
    ///
    /// Painting a cell with the group it already has clears it. Otherwise the
    /// cell takes the group, unless the group is already at its `2^g` limit.
    pub fn paint(&mut self, row: usize, col: usize, group: u8) -> Result<PaintOutcome, EditError> {
        if row >= TEMPLATE_SIZE || col >= TEMPLATE_SIZE {
            return Err(EditError::OutOfBounds { row, col });
        }
        if group >= GROUP_COUNT {
            return Err(EditError::InvalidGroup { group });
        }

        if self.rows[row][col] == Some(group) {
            self.rows[row][col] = None;
            return Ok(PaintOutcome::Cleared);
        }

        let limit = GROUP_LIMITS[group as usize];
        if self.group_count(group) >= limit as usize {
            log::trace!("template: group {} already has {} cells", group, limit);
            return Err(EditError::GroupLimit { group, limit });
        }
        self.rows[row][col] = Some(group);
        Ok(PaintOutcome::Set)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}
