//! Integration tests for the tile renderer
//!
//! These go through the facade crate and check the exact rectangles produced
//! for small, hand-checkable designs.

use proptest::prelude::*;

use bin_clock::core::nibble::split_u16;
use bin_clock::core::{Layout, Palette, RenderOptions, Scene, Template, TileRenderer};
use bin_clock::types::{DrawKind, DrawOp, Mirror, Placement, Rgb, ERROR_COLOR, NIBBLE_GAP};

fn count(ops: &[DrawOp], kind: DrawKind) -> usize {
    ops.iter().filter(|op| op.kind == kind).count()
}

fn rects(ops: &[DrawOp], kind: DrawKind) -> Vec<(i32, i32, i32, i32)> {
    let mut out: Vec<_> = ops
        .iter()
        .filter(|op| op.kind == kind)
        .map(|op| (op.x, op.y, op.width, op.height))
        .collect();
    out.sort();
    out
}

/// Template with only the listed (row, col, group) cells set.
fn sparse(cells: &[(usize, usize, i32)]) -> Template {
    let mut flat = [-1; 16];
    for &(r, c, g) in cells {
        flat[r * 4 + c] = g;
    }
    Template::from_cells(&flat)
}

#[test]
fn default_design_bits_zero_and_two() {
    let template = Template::default_design();
    let layout = Layout::single();
    let palette = Palette::teal_gold();
    let ops = TileRenderer::default().render(0b0101, &Scene::new(&template, &layout, &palette));

    // Group 0 is the single cell at (3,3); group 2 is the L at
    // (1,1), (1,2), (2,1), (3,1). Cell pitch is 24px.
    assert_eq!(
        rects(&ops, DrawKind::Cell),
        vec![(24, 24, 20, 20), (24, 48, 20, 20), (24, 72, 20, 20), (48, 24, 20, 20), (72, 72, 20, 20)]
    );
    assert_eq!(
        rects(&ops, DrawKind::Bridge),
        vec![(24, 43, 20, 6), (24, 67, 20, 6), (43, 24, 6, 20)]
    );
    // The L has no complete 2x2 block, so nothing fills a corner.
    assert_eq!(count(&ops, DrawKind::Corner), 0);

    // Nibble 0 band of the teal/gold palette is dark teal for every group.
    let teal = Rgb::new(0x00, 0x7E, 0x7F);
    assert!(ops.iter().all(|op| op.color == teal));

    // Groups 1 and 3 stay dark: nothing at (0,0) or (2,2).
    assert!(!ops.iter().any(|op| op.contains(5, 5)));
    assert!(!ops.iter().any(|op| op.contains(53, 53)));
}

#[test]
fn uniform_square_gets_bridges_and_a_corner() {
    let template = sparse(&[(0, 0, 2), (0, 1, 2), (1, 0, 2), (1, 1, 2)]);
    let layout = Layout::single();
    let palette = Palette::teal_gold();
    let ops = TileRenderer::default().render(0b0100, &Scene::new(&template, &layout, &palette));

    assert_eq!(count(&ops, DrawKind::Cell), 4);
    assert_eq!(count(&ops, DrawKind::Bridge), 4);
    assert_eq!(rects(&ops, DrawKind::Corner), vec![(19, 19, 6, 6)]);
}

#[test]
fn cosmetic_passes_can_be_switched_off() {
    let template = sparse(&[(0, 0, 2), (0, 1, 2), (1, 0, 2), (1, 1, 2)]);
    let layout = Layout::single();
    let palette = Palette::teal_gold();
    let scene = Scene::new(&template, &layout, &palette).with_options(RenderOptions {
        bridge_gaps: false,
        fill_corners: true,
    });
    let ops = TileRenderer::default().render(0b0100, &scene);
    assert_eq!(count(&ops, DrawKind::Bridge), 0);
    assert_eq!(count(&ops, DrawKind::Corner), 1);
}

#[test]
fn single_cell_group_zero_is_one_rect() {
    let template = sparse(&[(2, 1, 0)]);
    let layout = Layout::single();
    let palette = Palette::standard();
    let ops = TileRenderer::default().render(1, &Scene::new(&template, &layout, &palette));
    assert_eq!(ops.len(), 1);
    assert_eq!((ops[0].x, ops[0].y), (24, 48));

    let dark = TileRenderer::default().render(0b1110, &Scene::new(&template, &layout, &palette));
    assert!(dark.is_empty());
}

#[test]
fn short_palette_falls_back_to_error_color() {
    let template = sparse(&[(0, 0, 0)]);
    let layout = Layout::new(vec![Placement::new(3, 0, 0)]);
    let palette = Palette::new(vec![Rgb::new(1, 2, 3); 10]);
    // Nibble 3, group 0 -> palette index 12.
    let ops = TileRenderer::default().render(0x1000, &Scene::new(&template, &layout, &palette));
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].color, ERROR_COLOR);
}

#[test]
fn mirrored_placement_flips_the_tile() {
    let template = Template::default_design();
    let palette = Palette::teal_gold();
    let layout = Layout::new(vec![Placement::new(0, 0, 0).with_mirror(Mirror::new(true, false))]);
    let ops = TileRenderer::default().render(0b0001, &Scene::new(&template, &layout, &palette));
    // Group 0 moves from column 3 to column 0.
    assert_eq!(rects(&ops, DrawKind::Cell), vec![(0, 72, 20, 20)]);
}

#[test]
fn placements_are_offset_by_grid_step() {
    let template = sparse(&[(0, 0, 0)]);
    let palette = Palette::teal_gold();
    let layout = Layout::new(vec![Placement::new(0, 2, 1)]);
    let ops = TileRenderer::default().render(1, &Scene::new(&template, &layout, &palette));
    let step = 92 + NIBBLE_GAP;
    assert_eq!((ops[0].x, ops[0].y), (2 * step, step));
}

#[test]
fn empty_layout_draws_nothing() {
    let template = Template::default_design();
    let layout = Layout::new(Vec::new());
    let palette = Palette::teal_gold();
    let r = TileRenderer::default();
    assert!(r.render(0xFFFF, &Scene::new(&template, &layout, &palette)).is_empty());
    assert!(r.render_stacked(0xFFFF_FFFF, &Scene::new(&template, &layout, &palette)).is_empty());
    assert_eq!(r.stacked_size(&layout), (0, 0));
}

#[test]
fn stacked_high_half_uses_nibble_zero_colors() {
    let template = Template::default_design();
    let layout = Layout::square();
    let palette = Palette::teal_gold();
    let r = TileRenderer::default();

    // High half 0x0010: nibble 1 (placed at (0,1)) shows group 0.
    let ops = r.render_stacked(0x0010_0000, &Scene::new(&template, &layout, &palette));
    assert_eq!(rects(&ops, DrawKind::Cell), vec![(72, 122 + 72, 20, 20)]);
    assert_eq!(ops[0].color, palette.band_color(0, 0));
    assert_ne!(ops[0].color, palette.band_color(1, 0));
}

#[test]
fn stacked_low_half_sits_below_the_high_half() {
    let template = Template::default_design();
    let layout = Layout::square();
    let palette = Palette::teal_gold();
    let r = TileRenderer::default();

    let (_, block_h) = r.block_size(&layout);
    assert_eq!(block_h, 2 * 92 + NIBBLE_GAP);

    // Low half 0x0001: nibble 0 at (1,1) shows group 0, band 0.
    let ops = r.render_stacked(0x0000_0001, &Scene::new(&template, &layout, &palette));
    let y = block_h + NIBBLE_GAP + 122 + 72;
    assert_eq!(rects(&ops, DrawKind::Cell), vec![(122 + 72, y, 20, 20)]);
    assert_eq!(r.stacked_size(&layout), (214, 2 * block_h + NIBBLE_GAP));
}

proptest! {
    // Group g of the default design has 2^g cells, so a tile lights exactly
    // as many cells as its nibble's value.
    #[test]
    fn lit_cells_equal_nibble_sum(value in any::<u16>()) {
        let template = Template::default_design();
        let layout = Layout::square();
        let palette = Palette::teal_gold();
        let ops = TileRenderer::default().render(value as u32, &Scene::new(&template, &layout, &palette));
        let expected: usize = split_u16(value).iter().map(|&n| n as usize).sum();
        prop_assert_eq!(count(&ops, DrawKind::Cell), expected);
    }

    #[test]
    fn every_op_stays_inside_the_stacked_canvas(value in any::<u32>()) {
        let template = Template::default_design();
        let layout = Layout::square();
        let palette = Palette::teal_gold();
        let r = TileRenderer::default();
        let (w, h) = r.stacked_size(&layout);
        for op in r.render_stacked(value, &Scene::new(&template, &layout, &palette)) {
            prop_assert!(op.x >= 0 && op.y >= 0);
            prop_assert!(op.right() <= w && op.bottom() <= h);
        }
    }
}
