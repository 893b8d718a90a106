//! Settings document schema - the JSON shapes on disk
//!
//! Only the canonical layout is understood: a `library` of templates
//! ("nibbleGrids"), layouts ("layoutGrids") and palettes, plus `profiles` and
//! `active_profileId`. Unknown fields are ignored and missing ones take their
//! defaults, so hand-edited files degrade instead of failing to load.

use serde::{Deserialize, Serialize};

use crate::core::{Layout, Palette, Template};
use crate::types::{Mirror, Placement, Rgb, ERROR_COLOR, LAYOUT_GRID_SIZE};

/// Schema version written by [`crate::defaults::default_document`].
pub const SCHEMA_VERSION: &str = "0.2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(rename = "active_profileId", default)]
    pub active_profile_id: usize,
    #[serde(default)]
    pub library: Library,
    #[serde(default)]
    pub profiles: Vec<ProfileEntry>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    #[serde(default)]
    pub nibble_grids: Vec<NibbleGrid>,
    #[serde(default)]
    pub layout_grids: Vec<LayoutGrid>,
    #[serde(default)]
    pub palettes: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XY {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
    #[serde(default)]
    pub left: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirrorFlags {
    #[serde(default)]
    pub x: bool,
    #[serde(default)]
    pub y: bool,
}

/// A template slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NibbleGrid {
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cells: Vec<i32>,
    #[serde(default)]
    pub gap: XY,
    #[serde(default = "yes")]
    pub bridge_gaps: bool,
    #[serde(default = "yes")]
    pub fill_corners: bool,
}

fn yes() -> bool {
    true
}

impl NibbleGrid {
    pub fn template(&self) -> Template {
        Template::from_cells(&self.cells)
    }
}

/// A layout slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGrid {
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default)]
    pub gap: XY,
    #[serde(default)]
    pub placements: Vec<PlacementEntry>,
}

impl LayoutGrid {
    /// Placements on the 4x4 layout grid; entries with negative or
    /// off-grid numbers are skipped.
    pub fn layout(&self) -> Layout {
        let placements = self
            .placements
            .iter()
            .filter_map(|p| {
                let nibble = u8::try_from(p.nibble_id).ok()?;
                let x = u8::try_from(p.position.x).ok()?;
                let y = u8::try_from(p.position.y).ok()?;
                if x >= LAYOUT_GRID_SIZE || y >= LAYOUT_GRID_SIZE {
                    log::debug!("settings: skipping nibble {} at ({}, {}), off the grid", nibble, x, y);
                    return None;
                }
                Some(
                    Placement::new(nibble, x, y).with_mirror(Mirror::new(p.mirror.x, p.mirror.y)),
                )
            })
            .collect();
        Layout::new(placements)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementEntry {
    pub nibble_id: i64,
    #[serde(default)]
    pub position: XY,
    #[serde(default)]
    pub mirror: MirrorFlags,
}

impl From<&Placement> for PlacementEntry {
    fn from(p: &Placement) -> Self {
        Self {
            nibble_id: p.nibble as i64,
            position: XY {
                x: p.x as i32,
                y: p.y as i32,
            },
            mirror: MirrorFlags {
                x: p.mirror.x,
                y: p.mirror.y,
            },
        }
    }
}

/// A color as stored: `"#RRGGBB"` or `[r, g, b]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Triple([u8; 3]),
}

impl ColorValue {
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            ColorValue::Hex(s) => Rgb::from_hex(s),
            ColorValue::Triple([r, g, b]) => Some(Rgb::new(*r, *g, *b)),
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(c: Rgb) -> Self {
        ColorValue::Hex(c.to_hex())
    }
}

/// A palette slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub colors: Vec<ColorValue>,
}

impl PaletteEntry {
    /// Resolved palette. Entries that do not parse become the error color,
    /// keeping their index; missing entries are left missing.
    pub fn palette(&self) -> Palette {
        let colors = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, c)| {
                c.to_rgb().unwrap_or_else(|| {
                    log::warn!("palette {}: entry {} is not a color: {:?}", self.id, i, c);
                    ERROR_COLOR
                })
            })
            .collect();
        Palette::new(colors)
    }
}

/// A profile: which template, layout and palette the clock shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nibble_grid_id: usize,
    #[serde(default)]
    pub layout_id: usize,
    #[serde(default)]
    pub palette_id: usize,
}
