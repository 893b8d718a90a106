//! ClockView: rasterizes draw ops into a terminal framebuffer.
//!
//! This module is pure (no I/O). The drawing is sampled at each terminal
//! cell's centre, so a cell shows the color of the last op covering that
//! point and the background otherwise.

use crate::core::time::utc_offset_label;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{ClockMode, DrawOp, Rgb, BACKGROUND_COLOR};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Pixel-space bounding box of a set of ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelBounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box covering every op, or `None` for an empty frame.
    pub fn of(ops: &[DrawOp]) -> Option<Self> {
        let first = ops.first()?;
        let (mut x0, mut y0) = (first.x, first.y);
        let (mut x1, mut y1) = (first.right(), first.bottom());
        for op in &ops[1..] {
            x0 = x0.min(op.x);
            y0 = y0.min(op.y);
            x1 = x1.max(op.right());
            y1 = y1.max(op.bottom());
        }
        Some(Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

const STATUS_FG: Rgb = Rgb::new(200, 200, 200);

pub struct ClockView {
    /// Pixels covered by one terminal column.
    px_per_col: u16,
    /// Pixels covered by one terminal row.
    px_per_row: u16,
}

impl Default for ClockView {
    fn default() -> Self {
        // Terminal glyphs are roughly twice as tall as wide.
        Self::new(4, 8)
    }
}

impl ClockView {
    /// Zero scales are treated as 1.
    pub fn new(px_per_col: u16, px_per_row: u16) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    pub fn px_per_col(&self) -> u16 {
        self.px_per_col
    }

    pub fn px_per_row(&self) -> u16 {
        self.px_per_row
    }

    /// Terminal cells needed to show `bounds` at this scale.
    pub fn cells_for(&self, bounds: PixelBounds) -> (i32, i32) {
        let cols = ceil_div(bounds.width.max(0), self.px_per_col as i32);
        let rows = ceil_div(bounds.height.max(0), self.px_per_row as i32);
        (cols, rows)
    }

    /// Render `ops` and a one-line `status` into an existing framebuffer.
    ///
    /// `canvas` is the pixel area being shown, normally the full layout so the
    /// picture does not shift as bits change; `None` fits the lit ops. The
    /// last viewport row holds the status line; the canvas is centred in the
    /// rows above it and cropped evenly when it does not fit. Reusing the
    /// framebuffer across frames keeps this allocation-free.
    pub fn render_into(
        &self,
        ops: &[DrawOp],
        canvas: Option<PixelBounds>,
        status: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::blank(CellStyle::solid(BACKGROUND_COLOR)));
        if viewport.height == 0 {
            return;
        }

        let status_row = viewport.height - 1;
        fb.put_str_centered(status_row, status, CellStyle::text(STATUS_FG));

        let Some(bounds) = canvas.or_else(|| PixelBounds::of(ops)) else {
            return;
        };
        let (cols, rows) = self.cells_for(bounds);
        let area_w = viewport.width as i32;
        let area_h = status_row as i32;
        let start_x = (area_w - cols).div_euclid(2);
        let start_y = (area_h - rows).div_euclid(2);

        let ppc = self.px_per_col as i32;
        let ppr = self.px_per_row as i32;

        // Ops are painted in order, so later ops win where they overlap.
        for op in ops {
            let c0 = (op.x - bounds.x).div_euclid(ppc);
            let c1 = (op.right() - bounds.x).div_euclid(ppc);
            let r0 = (op.y - bounds.y).div_euclid(ppr);
            let r1 = (op.bottom() - bounds.y).div_euclid(ppr);
            let cell = Cell::blank(CellStyle::solid(op.color));

            for r in r0..=r1 {
                let ty = start_y + r;
                if ty < 0 || ty >= area_h {
                    continue;
                }
                let sy = bounds.y + r * ppr + ppr / 2;
                for c in c0..=c1 {
                    let tx = start_x + c;
                    if tx < 0 || tx >= area_w {
                        continue;
                    }
                    let sx = bounds.x + c * ppc + ppc / 2;
                    if op.contains(sx, sy) {
                        fb.set(tx as u16, ty as u16, cell);
                    }
                }
            }
        }
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}

/// Status line text for the bar under the clock.
///
/// Day mode shows the 16-bit value in hex and decimal; epoch mode shows the
/// full 32-bit value (day counter then time of day) and the local offset.
pub fn status_text(mode: ClockMode, value: u32, utc_offset_secs: i32, profile: &str) -> String {
    match mode {
        ClockMode::Day => {
            let v = value & 0xFFFF;
            format!("VALUE: 0x{:04X} ({})  [{}]", v, v, profile)
        }
        ClockMode::Epoch => format!(
            "F.F: {:08X}  (Local: {})  [{}]",
            value,
            utc_offset_label(utc_offset_secs),
            profile
        ),
    }
}
