//! Settings document integration tests: files on disk through to resolved
//! profiles.

use std::fs;

use bin_clock::core::{Layout, Palette, Template};
use bin_clock::settings::{default_document, LoadOrigin, SettingsStore, DEFAULT_SETTINGS_FILE};
use bin_clock::types::{Mirror, Placement, Rgb, ERROR_COLOR};

const CUSTOM: &str = r##"{
  "version": "0.2",
  "active_profileId": 1,
  "library": {
    "nibbleGrids": [
      {"id": 0, "name": "Default", "cells": [3,3,3,3,3,2,2,3,3,2,1,-1,3,2,1,0]},
      {"id": 1, "name": "Dots", "cells": [0,-1,1,1,-1,-1,-1,-1,2,2,2,2,-1,-1,-1,-1], "fillCorners": false}
    ],
    "layoutGrids": [
      {"id": 0, "name": "Row", "placements": [
        {"nibbleId": 1, "position": {"x": 0, "y": 0}},
        {"nibbleId": 0, "position": {"x": 1, "y": 0}, "mirror": {"x": true, "y": false}}
      ]}
    ],
    "palettes": [
      {"id": 0, "name": "Mixed", "colors": ["#102030", [255, 199, 0], "nope"]}
    ]
  },
  "profiles": [
    {"id": 0, "name": "Zero", "nibbleGridId": 0, "layoutId": 0, "paletteId": 0},
    {"id": 1, "name": "Dots", "nibbleGridId": 1, "layoutId": 9, "paletteId": 0}
  ]
}"##;

#[test]
fn custom_document_resolves_every_part() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SETTINGS_FILE);
    fs::write(&path, CUSTOM).unwrap();

    let store = SettingsStore::load(&path).unwrap();
    assert_eq!(store.origin(), LoadOrigin::File);

    let p = store.resolve_active();
    assert_eq!(p.profile_id, 1);
    assert_eq!(p.name, "Dots");
    assert_eq!(p.template.group_count(2), 4);
    assert!(p.options.bridge_gaps);
    assert!(!p.options.fill_corners);

    // Layout id 9 does not exist and falls back to layout 0.
    assert_eq!(
        p.layout.placements(),
        &[
            Placement::new(1, 0, 0),
            Placement::new(0, 1, 0).with_mirror(Mirror::new(true, false)),
        ]
    );

    assert_eq!(p.palette.len(), 3);
    assert_eq!(p.palette.color_at(0), Rgb::new(0x10, 0x20, 0x30));
    assert_eq!(p.palette.color_at(1), Rgb::new(0xFF, 0xC7, 0x00));
    assert_eq!(p.palette.color_at(2), ERROR_COLOR);
    assert_eq!(p.palette.color_at(3), ERROR_COLOR);
}

#[test]
fn missing_file_yields_defaults_and_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SETTINGS_FILE);

    let store = SettingsStore::load(&path).unwrap();
    assert_eq!(store.origin(), LoadOrigin::Missing);
    let p = store.resolve_active();
    assert_eq!(p.template, Template::default_design());
    assert_eq!(p.layout, Layout::square());
    assert_eq!(p.palette, Palette::teal_gold());
    assert!(!path.exists());
}

#[test]
fn profile_override_out_of_range_resolves_to_zero() {
    let mut store = SettingsStore::from_json(CUSTOM).unwrap();
    store.set_active_profile(42);
    let p = store.resolve_active();
    assert_eq!(p.profile_id, 0);
    assert_eq!(p.name, "Zero");
}

#[test]
fn reload_after_edit_switches_design() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clock.json");
    fs::write(&path, serde_json::to_string(&default_document()).unwrap()).unwrap();

    let mut store = SettingsStore::load(&path).unwrap();
    assert_eq!(store.resolve_active().name, "Profile 0");

    fs::write(&path, CUSTOM).unwrap();
    store.reload().unwrap();
    assert_eq!(store.resolve_active().name, "Dots");

    // A broken edit falls back to defaults rather than failing.
    fs::write(&path, "{ \"profiles\": [").unwrap();
    store.reload().unwrap();
    assert_eq!(store.origin(), LoadOrigin::Corrupt);
    assert_eq!(store.resolve_active().name, "Profile 0");
}

#[test]
fn default_document_uses_canonical_keys() {
    let json = serde_json::to_value(default_document()).unwrap();
    assert_eq!(json["active_profileId"], 0);
    assert_eq!(json["library"]["nibbleGrids"].as_array().map(Vec::len), Some(16));
    assert_eq!(json["library"]["layoutGrids"][0]["placements"][0]["nibbleId"], 3);
    assert_eq!(json["library"]["palettes"][0]["colors"][0], "#007E7F");
    assert_eq!(json["profiles"][3]["nibbleGridId"], 0);
    assert!(json.get("settings").is_none());
}

#[test]
fn off_grid_placements_are_dropped_before_rendering() {
    let store = SettingsStore::from_json(
        r#"{"library":{"layoutGrids":[{"placements":[
            {"nibbleId":0,"position":{"x":0,"y":0}},
            {"nibbleId":1,"position":{"x":255,"y":0}}
        ]}]},"profiles":[{"name":"wide"}]}"#,
    )
    .unwrap();
    let p = store.resolve_active();
    assert_eq!(p.layout.placements(), &[Placement::new(0, 0, 0)]);

    let r = bin_clock::core::TileRenderer::default();
    assert_eq!(r.block_size(&p.layout), (92, 92));
    let (w, h) = r.stacked_size(&p.layout);
    assert!(w > 0 && h > 0);
}
