//! Read-only settings store and profile resolution.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{Layout, Palette, RenderOptions, Template};
use crate::defaults::{
    default_document, default_layout_grid, default_nibble_grid, default_palette_entry,
};
use crate::schema::SettingsDocument;

/// Everything the renderer needs for one profile, with ids already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    /// Index into `profiles` actually used.
    pub profile_id: usize,
    pub name: String,
    pub template: Template,
    pub layout: Layout,
    pub palette: Palette,
    pub options: RenderOptions,
}

/// Where a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    File,
    /// The file does not exist.
    Missing,
    /// The file exists but is not a valid document.
    Corrupt,
    /// Built in memory, no file involved.
    Memory,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    doc: SettingsDocument,
    origin: LoadOrigin,
}

impl SettingsStore {
    /// Store over an in-memory document.
    pub fn from_document(doc: SettingsDocument) -> Self {
        Self {
            path: None,
            doc,
            origin: LoadOrigin::Memory,
        }
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SettingsDocument =
            serde_json::from_str(json).context("settings: invalid JSON document")?;
        Ok(Self::from_document(doc))
    }

    /// Load the document at `path`.
    ///
    /// A missing file or a corrupt document yields the built-in defaults;
    /// any other I/O failure is an error. The file is never written.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (doc, origin) = read_document(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            doc,
            origin,
        })
    }

    /// Re-read the backing file, keeping the current document on error.
    ///
    /// Stores without a file are left unchanged.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        let (doc, origin) = read_document(&path)?;
        self.doc = doc;
        self.origin = origin;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.doc
    }

    pub fn profile_count(&self) -> usize {
        self.doc.profiles.len()
    }

    /// The active profile id as stored (possibly out of range).
    pub fn active_profile_id(&self) -> usize {
        self.doc.active_profile_id
    }

    /// Select a profile for this session.
    pub fn set_active_profile(&mut self, id: usize) {
        log::debug!("settings: active profile {} -> {}", self.doc.active_profile_id, id);
        self.doc.active_profile_id = id;
    }

    /// Step the active profile forward or backward, wrapping around.
    ///
    /// Returns the new id. An out-of-range selection counts from 0.
    pub fn cycle_profile(&mut self, delta: i32) -> usize {
        let n = self.profile_count();
        if n == 0 {
            return 0;
        }
        let current = resolve_index(self.doc.active_profile_id, n) as i64;
        let next = (current + delta as i64).rem_euclid(n as i64) as usize;
        self.set_active_profile(next);
        next
    }

    /// Resolve the active profile into renderable data.
    pub fn resolve_active(&self) -> ResolvedProfile {
        self.resolve(self.doc.active_profile_id)
    }

    /// Resolve profile `id`.
    ///
    /// Every id that does not exist (profile, template, layout or palette)
    /// falls back to index 0; an empty list falls back to the built-in slot 0.
    pub fn resolve(&self, id: usize) -> ResolvedProfile {
        let lib = &self.doc.library;

        let profile_id = resolve_index(id, self.doc.profiles.len());
        let (name, template_id, layout_id, palette_id) = match self.doc.profiles.get(profile_id) {
            Some(p) => (p.name.clone(), p.nibble_grid_id, p.layout_id, p.palette_id),
            None => (String::from("Default"), 0, 0, 0),
        };

        let grid = lib
            .nibble_grids
            .get(resolve_index(template_id, lib.nibble_grids.len()))
            .cloned()
            .unwrap_or_else(|| default_nibble_grid(0));
        let layout = lib
            .layout_grids
            .get(resolve_index(layout_id, lib.layout_grids.len()))
            .map(|l| l.layout())
            .unwrap_or_else(|| default_layout_grid(0).layout());
        let palette = lib
            .palettes
            .get(resolve_index(palette_id, lib.palettes.len()))
            .map(|p| p.palette())
            .unwrap_or_else(|| default_palette_entry(0).palette());

        ResolvedProfile {
            profile_id,
            name,
            template: grid.template(),
            layout,
            palette,
            options: RenderOptions {
                bridge_gaps: grid.bridge_gaps,
                fill_corners: grid.fill_corners,
            },
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::from_document(default_document())
    }
}

/// `id` when it indexes a list of `len` entries, else 0.
fn resolve_index(id: usize, len: usize) -> usize {
    if id < len {
        id
    } else {
        0
    }
}

fn read_document(path: &Path) -> Result<(SettingsDocument, LoadOrigin)> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("settings: {} not found, using defaults", path.display());
            return Ok((default_document(), LoadOrigin::Missing));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("settings: failed to read {}", path.display()))
        }
    };

    match serde_json::from_str::<SettingsDocument>(&text) {
        Ok(doc) => {
            log::info!(
                "settings: loaded {} ({} profiles)",
                path.display(),
                doc.profiles.len()
            );
            Ok((doc, LoadOrigin::File))
        }
        Err(e) => {
            log::warn!("settings: {} is corrupt ({}), using defaults", path.display(), e);
            Ok((default_document(), LoadOrigin::Corrupt))
        }
    }
}
