//! Built-in settings used when no document exists or it cannot be read.

use crate::core::{Layout, Palette, Template, DEFAULT_TEMPLATE_CELLS};
use crate::schema::{
    ColorValue, Library, LayoutGrid, Margin, NibbleGrid, PaletteEntry, PlacementEntry,
    ProfileEntry, SettingsDocument, SCHEMA_VERSION, XY,
};
use crate::types::SLOT_COUNT;

pub fn default_nibble_grid(id: usize) -> NibbleGrid {
    let template = if id == 0 {
        Template::from_cells(&DEFAULT_TEMPLATE_CELLS)
    } else {
        Template::empty()
    };
    NibbleGrid {
        id,
        name: format!("Nibble {}", id),
        cells: template.to_cells().to_vec(),
        gap: XY { x: 2, y: 2 },
        bridge_gaps: true,
        fill_corners: true,
    }
}

pub fn default_layout_grid(id: usize) -> LayoutGrid {
    let layout = if id == 0 {
        Layout::square()
    } else {
        Layout::single()
    };
    LayoutGrid {
        id,
        name: format!("Layout {}", id),
        margin: Margin {
            top: 10,
            right: 10,
            bottom: 10,
            left: 10,
        },
        gap: XY { x: 20, y: 20 },
        placements: layout.placements().iter().map(PlacementEntry::from).collect(),
    }
}

pub fn default_palette_entry(id: usize) -> PaletteEntry {
    let palette = if id == 0 {
        Palette::teal_gold()
    } else {
        Palette::standard()
    };
    PaletteEntry {
        id,
        name: format!("Palette {}", id),
        colors: palette.colors().iter().copied().map(ColorValue::from).collect(),
    }
}

pub fn default_profile(id: usize) -> ProfileEntry {
    ProfileEntry {
        id,
        name: format!("Profile {}", id),
        nibble_grid_id: 0,
        layout_id: 0,
        palette_id: 0,
    }
}

/// Sixteen slots of everything; slot 0 is a ready-to-run clock.
pub fn default_document() -> SettingsDocument {
    SettingsDocument {
        version: SCHEMA_VERSION.to_string(),
        active_profile_id: 0,
        library: Library {
            nibble_grids: (0..SLOT_COUNT).map(default_nibble_grid).collect(),
            layout_grids: (0..SLOT_COUNT).map(default_layout_grid).collect(),
            palettes: (0..SLOT_COUNT).map(default_palette_entry).collect(),
        },
        profiles: (0..SLOT_COUNT).map(default_profile).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_ACTIVE_COLOR, NEUTRAL_COLOR};

    #[test]
    fn sixteen_slots_each() {
        let doc = default_document();
        assert_eq!(doc.library.nibble_grids.len(), 16);
        assert_eq!(doc.library.layout_grids.len(), 16);
        assert_eq!(doc.library.palettes.len(), 16);
        assert_eq!(doc.profiles.len(), 16);
        assert_eq!(doc.active_profile_id, 0);
    }

    #[test]
    fn slot_zero_is_the_documented_design() {
        let doc = default_document();
        assert_eq!(doc.library.nibble_grids[0].cells, DEFAULT_TEMPLATE_CELLS.to_vec());
        assert_eq!(doc.library.layout_grids[0].layout(), Layout::square());
        assert_eq!(doc.library.palettes[0].palette(), Palette::teal_gold());
    }

    #[test]
    fn other_slots_are_blank() {
        let doc = default_document();
        assert!(doc.library.nibble_grids[5].cells.iter().all(|&c| c == -1));
        assert_eq!(doc.library.layout_grids[5].layout(), Layout::single());
        let p = doc.library.palettes[5].palette();
        assert_eq!(p.color_at(0), DEFAULT_ACTIVE_COLOR);
        assert_eq!(p.color_at(15), NEUTRAL_COLOR);
    }

    #[test]
    fn round_trips_through_json() {
        let doc = default_document();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert!(json.contains("\"active_profileId\""));
        assert!(json.contains("\"nibbleGridId\""));
        let back: SettingsDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
