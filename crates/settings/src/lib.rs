//! Settings module - the JSON document that drives the clock
//!
//! The clock is configured by a single JSON file (default
//! `binClockSettings.json`) holding a library of sixteen templates, layouts
//! and palettes, plus sixteen profiles that pick one of each.
//!
//! # Document Overview
//!
//! ```text
//! {
//!   "version": "0.2",
//!   "active_profileId": 0,
//!   "library": {
//!     "nibbleGrids": [{"id":0,"name":"Nibble 0","cells":[3,3,3,3, ...],"bridgeGaps":true,"fillCorners":true}, ...],
//!     "layoutGrids": [{"id":0,"name":"Layout 0","placements":[{"nibbleId":3,"position":{"x":0,"y":0},"mirror":{"x":false,"y":false}}, ...]}, ...],
//!     "palettes":    [{"id":0,"name":"Palette 0","colors":["#007E7F", ...]}, ...]
//!   },
//!   "profiles": [{"id":0,"name":"Profile 0","nibbleGridId":0,"layoutId":0,"paletteId":0}, ...]
//! }
//! ```
//!
//! # Resolution Rules
//!
//! - Ids that point past the end of their list resolve to index 0
//! - An empty list resolves to the built-in slot 0
//! - Palette entries that are not colors become the error color
//! - A missing or corrupt file loads the built-in defaults
//!
//! The store only reads; editing the file is up to the user.
//!
//! # Example
//!
//! ```
//! use bin_clock_settings::SettingsStore;
//!
//! let store = SettingsStore::from_json(r#"{"active_profileId": 7}"#).unwrap();
//! let profile = store.resolve_active();
//! assert_eq!(profile.profile_id, 0);
//! assert!(!profile.layout.is_empty());
//! ```

pub mod defaults;
pub mod schema;
pub mod store;

pub use bin_clock_core as core;
pub use bin_clock_types as types;

pub use defaults::default_document;
pub use schema::{
    ColorValue, LayoutGrid, Library, NibbleGrid, PaletteEntry, PlacementEntry, ProfileEntry,
    SettingsDocument,
};
pub use store::{LoadOrigin, ResolvedProfile, SettingsStore};

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "binClockSettings.json";
