//! Tile renderer: clock value -> colored rectangles.
//!
//! This module is pure (no I/O, no clock reads). Every tick the caller hands in
//! the current value together with the active template, layout and palette and
//! gets back the draw ops for one frame.
//!
//! Per placement the renderer
//!
//! 1. extracts the placement's nibble from the value,
//! 2. mirrors the template as requested,
//! 3. emits one rect per lit cell,
//! 4. bridges the gap between lit cells of the same group to the right and
//!    below,
//! 5. fills the diagonal hole in the middle of every lit 2x2 same-group block.
//!
//! Bridges and corners overlap their neighbours by one pixel on each side so
//! no seam shows between them.

use arrayvec::ArrayVec;

use crate::layout::Layout;
use crate::nibble::{bit_set, halves, nibble_of};
use crate::palette::Palette;
use crate::template::Template;
use crate::types::{
    DrawKind, DrawOp, Placement, CELL_SIZE, GAP_SIZE, NIBBLE_GAP, STACK_GAP, TEMPLATE_SIZE,
};

/// Upper bound of ops for one nibble: 16 cells, 24 bridges, 9 corners.
pub const MAX_OPS_PER_NIBBLE: usize = 16 + 24 + 9;

/// Ops emitted for a single nibble.
pub type NibbleOps = ArrayVec<DrawOp, MAX_OPS_PER_NIBBLE>;

/// Pixel geometry of tiles and the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub cell: i32,
    pub gap: i32,
    pub nibble_gap: i32,
    pub stack_gap: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            cell: CELL_SIZE,
            gap: GAP_SIZE,
            nibble_gap: NIBBLE_GAP,
            stack_gap: STACK_GAP,
        }
    }
}

impl Geometry {
    /// Side length of one 4x4 tile.
    pub fn nibble_px(&self) -> i32 {
        TEMPLATE_SIZE as i32 * self.cell + (TEMPLATE_SIZE as i32 - 1) * self.gap
    }

    /// Distance between the origins of two neighbouring tiles.
    pub fn step(&self) -> i32 {
        self.nibble_px() + self.nibble_gap
    }

    #[inline]
    fn cell_pitch(&self) -> i32 {
        self.cell + self.gap
    }
}

/// Which palette band colors a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBand {
    /// The band of the placement's own nibble.
    #[default]
    PerNibble,
    /// Always the band of the given nibble (day counters share nibble 0's).
    Shared(u8),
}

impl ColorBand {
    #[inline]
    fn nibble_for(&self, placement: &Placement) -> u8 {
        match *self {
            ColorBand::PerNibble => placement.nibble,
            ColorBand::Shared(n) => n,
        }
    }
}

/// Cosmetic passes; both on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub bridge_gaps: bool,
    pub fill_corners: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bridge_gaps: true,
            fill_corners: true,
        }
    }
}

/// Where and how one block of placements is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    /// Pixel origin of coarse cell `grid_offset`.
    pub origin: (i32, i32),
    /// Coarse cell drawn at `origin`; placements are positioned relative to it.
    pub grid_offset: (u8, u8),
    pub band: ColorBand,
}

/// Everything that stays fixed while the value changes.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub template: &'a Template,
    pub layout: &'a Layout,
    pub palette: &'a Palette,
    pub options: RenderOptions,
}

impl<'a> Scene<'a> {
    pub fn new(template: &'a Template, layout: &'a Layout, palette: &'a Palette) -> Self {
        Self {
            template,
            layout,
            palette,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TileRenderer {
    geometry: Geometry,
}

impl TileRenderer {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Render a value with the layout's absolute grid coordinates, origin at
    /// (0, 0) and each placement colored by its own nibble band.
    pub fn render(&self, value: u32, scene: &Scene<'_>) -> Vec<DrawOp> {
        let mut out = Vec::with_capacity(scene.layout.placements().len() * 16);
        self.render_into(value, scene, Block::default(), &mut out);
        out
    }

    /// Append the ops of one block to `out`.
    ///
    /// This is the allocation-free hot path once `out` has grown to its
    /// steady-state capacity; callers clear and reuse the buffer every tick.
    pub fn render_into(&self, value: u32, scene: &Scene<'_>, block: Block, out: &mut Vec<DrawOp>) {
        let step = self.geometry.step();
        for p in scene.layout.placements() {
            let nibble = nibble_of(value, p.nibble);
            let template = if p.mirror.x || p.mirror.y {
                scene.template.mirrored(p.mirror.x, p.mirror.y)
            } else {
                *scene.template
            };
            let ox = block.origin.0 + (p.x as i32 - block.grid_offset.0 as i32) * step;
            let oy = block.origin.1 + (p.y as i32 - block.grid_offset.1 as i32) * step;
            let ops = self.render_nibble(
                (ox, oy),
                nibble,
                &template,
                block.band.nibble_for(p),
                scene.palette,
                scene.options,
            );
            out.extend(ops);
        }
    }

    /// Ops for one already-mirrored tile whose top-left corner is `origin`.
    ///
    /// `color_nibble` selects the palette band.
    pub fn render_nibble(
        &self,
        origin: (i32, i32),
        nibble: u8,
        template: &Template,
        color_nibble: u8,
        palette: &Palette,
        options: RenderOptions,
    ) -> NibbleOps {
        let g = self.geometry;
        let pitch = g.cell_pitch();
        let active = |cell: Option<u8>| cell.filter(|&gid| bit_set(nibble, gid));
        let mut ops = NibbleOps::new();

        let mut push = |x: i32, y: i32, w: i32, h: i32, gid: u8, kind: DrawKind| {
            ops.push(DrawOp {
                x,
                y,
                width: w,
                height: h,
                color: palette.band_color(color_nibble, gid),
                kind,
            });
        };

        for r in 0..TEMPLATE_SIZE {
            for c in 0..TEMPLATE_SIZE {
                if let Some(gid) = active(template.get(r, c)) {
                    let x = origin.0 + c as i32 * pitch;
                    let y = origin.1 + r as i32 * pitch;
                    push(x, y, g.cell, g.cell, gid, DrawKind::Cell);
                }
            }
        }

        if options.bridge_gaps {
            for r in 0..TEMPLATE_SIZE {
                for c in 0..TEMPLATE_SIZE {
                    let Some(gid) = active(template.get(r, c)) else {
                        continue;
                    };
                    let x = origin.0 + c as i32 * pitch;
                    let y = origin.1 + r as i32 * pitch;
                    if c + 1 < TEMPLATE_SIZE && template.get(r, c + 1) == Some(gid) {
                        push(x + g.cell - 1, y, g.gap + 2, g.cell, gid, DrawKind::Bridge);
                    }
                    if r + 1 < TEMPLATE_SIZE && template.get(r + 1, c) == Some(gid) {
                        push(x, y + g.cell - 1, g.cell, g.gap + 2, gid, DrawKind::Bridge);
                    }
                }
            }
        }

        if options.fill_corners {
            for r in 0..TEMPLATE_SIZE - 1 {
                for c in 0..TEMPLATE_SIZE - 1 {
                    let Some(gid) = active(template.get(r, c)) else {
                        continue;
                    };
                    let block = [
                        template.get(r, c + 1),
                        template.get(r + 1, c),
                        template.get(r + 1, c + 1),
                    ];
                    if block.iter().all(|&cell| cell == Some(gid)) {
                        let x = origin.0 + c as i32 * pitch + g.cell - 1;
                        let y = origin.1 + r as i32 * pitch + g.cell - 1;
                        push(x, y, g.gap + 2, g.gap + 2, gid, DrawKind::Corner);
                    }
                }
            }
        }

        ops
    }

    /// Pixel size of the layout drawn as one block normalized to its bounds.
    pub fn block_size(&self, layout: &Layout) -> (i32, i32) {
        let Some(b) = layout.bounds() else {
            return (0, 0);
        };
        let g = self.geometry;
        let span = |n: i32| n * g.nibble_px() + (n - 1) * g.nibble_gap;
        (span(b.cols()), span(b.rows()))
    }

    /// Pixel size of the stacked 32-bit display.
    pub fn stacked_size(&self, layout: &Layout) -> (i32, i32) {
        let (w, h) = self.block_size(layout);
        if layout.is_empty() {
            return (0, 0);
        }
        (w, 2 * h + self.geometry.stack_gap)
    }

    /// Render a 32-bit value as two stacked blocks starting at `origin`.
    ///
    /// The high half-word (day counter) goes on top and is colored with the
    /// band of nibble 0; the low half-word (time of day) goes below with the
    /// regular per-nibble bands. Both blocks are normalized to the layout's
    /// bounding box.
    pub fn render_stacked_into(
        &self,
        value: u32,
        scene: &Scene<'_>,
        origin: (i32, i32),
        out: &mut Vec<DrawOp>,
    ) {
        let Some(bounds) = scene.layout.bounds() else {
            return;
        };
        let (_, block_h) = self.block_size(scene.layout);
        let (high, low) = halves(value);
        let grid_offset = (bounds.min_x, bounds.min_y);

        let top = Block {
            origin,
            grid_offset,
            band: ColorBand::Shared(0),
        };
        self.render_into(high as u32, scene, top, out);

        let bottom = Block {
            origin: (origin.0, origin.1 + block_h + self.geometry.stack_gap),
            grid_offset,
            band: ColorBand::PerNibble,
        };
        self.render_into(low as u32, scene, bottom, out);
    }

    /// Allocating convenience wrapper around [`Self::render_stacked_into`].
    pub fn render_stacked(&self, value: u32, scene: &Scene<'_>) -> Vec<DrawOp> {
        let mut out = Vec::with_capacity(scene.layout.placements().len() * 32);
        self.render_stacked_into(value, scene, (0, 0), &mut out);
        out
    }
}
