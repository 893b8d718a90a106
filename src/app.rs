//! Display state driven by the binary's event loop.
//!
//! `ClockApp` owns the settings store, the resolved profile and the reusable
//! op buffer. It never touches the terminal, so the whole frame pipeline
//! (value -> ops -> framebuffer) runs in tests against a [`FixedTime`].
//!
//! [`FixedTime`]: crate::core::FixedTime

use std::time::Duration;

use crate::core::{Block, ColorBand, Scene, TickScheduler, TileRenderer, TimeSource};
use crate::settings::{ResolvedProfile, SettingsStore};
use crate::term::{frame_fingerprint, status_text, ClockView, FrameBuffer, PixelBounds, Viewport};
use crate::types::{ClockAction, ClockMode, DrawOp};

pub struct ClockApp {
    store: SettingsStore,
    profile: ResolvedProfile,
    scheduler: TickScheduler,
    renderer: TileRenderer,
    view: ClockView,
    ops: Vec<DrawOp>,
}

impl ClockApp {
    pub fn new(store: SettingsStore, mode: ClockMode, view: ClockView) -> Self {
        let profile = store.resolve_active();
        log::info!(
            "clock: profile {} ({}) in {} mode",
            profile.profile_id,
            profile.name,
            mode.as_str()
        );
        Self {
            store,
            profile,
            scheduler: TickScheduler::new(mode),
            renderer: TileRenderer::default(),
            view,
            ops: Vec::with_capacity(256),
        }
    }

    pub fn mode(&self) -> ClockMode {
        self.scheduler.mode()
    }

    pub fn profile(&self) -> &ResolvedProfile {
        &self.profile
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Apply a user command. Returns true when the frame must be redrawn.
    pub fn apply(&mut self, action: ClockAction) -> bool {
        log::debug!("clock: {}", action.as_str());
        match action {
            ClockAction::NextProfile => {
                self.store.cycle_profile(1);
            }
            ClockAction::PrevProfile => {
                self.store.cycle_profile(-1);
            }
            ClockAction::ToggleMode => {
                let mode = self.mode().toggled();
                self.scheduler.set_mode(mode);
                return true;
            }
            ClockAction::Reload => {
                // The session's profile choice outlives the file's.
                let selected = self.store.active_profile_id();
                if let Err(e) = self.store.reload() {
                    log::warn!("clock: reload failed, keeping current settings: {:#}", e);
                    return false;
                }
                self.store.set_active_profile(selected);
            }
        }
        self.profile = self.store.resolve_active();
        true
    }

    /// Current clock value for the active mode.
    pub fn value(&self, source: &dyn TimeSource) -> u32 {
        source.value(self.mode())
    }

    /// How long the loop may sleep before the value changes.
    pub fn next_delay(&self, source: &dyn TimeSource) -> Duration {
        self.scheduler.next_delay(source)
    }

    /// Identifies what a frame for `value` would show.
    pub fn fingerprint(&self, value: u32, viewport: Viewport) -> u64 {
        let mode_bit = (self.mode() == ClockMode::Epoch) as u8;
        frame_fingerprint(
            value,
            self.profile.profile_id,
            mode_bit,
            (viewport.width, viewport.height),
        )
    }

    /// Draw ops for `value`, normalized so the layout's top-left tile sits at
    /// the origin. Day values draw one block, epoch values two stacked blocks.
    pub fn render_ops(&mut self, value: u32) -> &[DrawOp] {
        self.ops.clear();
        let p = &self.profile;
        let Some(bounds) = p.layout.bounds() else {
            return &self.ops;
        };
        let scene = Scene::new(&p.template, &p.layout, &p.palette).with_options(p.options);
        match self.scheduler.mode() {
            ClockMode::Day => {
                let block = Block {
                    origin: (0, 0),
                    grid_offset: (bounds.min_x, bounds.min_y),
                    band: ColorBand::PerNibble,
                };
                self.renderer
                    .render_into(value & 0xFFFF, &scene, block, &mut self.ops)
            }
            ClockMode::Epoch => self
                .renderer
                .render_stacked_into(value, &scene, (0, 0), &mut self.ops),
        }
        &self.ops
    }

    /// Pixel area of the whole display for the current profile and mode,
    /// lit or not.
    pub fn canvas(&self) -> Option<PixelBounds> {
        let layout = &self.profile.layout;
        if layout.is_empty() {
            return None;
        }
        let (w, h) = match self.mode() {
            ClockMode::Day => self.renderer.block_size(layout),
            ClockMode::Epoch => self.renderer.stacked_size(layout),
        };
        Some(PixelBounds::new(0, 0, w, h))
    }

    /// Render the full frame for `value` into `fb`.
    pub fn draw(&mut self, value: u32, utc_offset_secs: i32, viewport: Viewport, fb: &mut FrameBuffer) {
        let status = status_text(self.mode(), value, utc_offset_secs, &self.profile.name);
        self.render_ops(value);
        let canvas = self.canvas();
        self.view.render_into(&self.ops, canvas, &status, viewport, fb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedTime;
    use crate::types::{DrawKind, EPOCH_UNIX_MS};

    fn app(mode: ClockMode) -> ClockApp {
        ClockApp::new(SettingsStore::default(), mode, ClockView::default())
    }

    #[test]
    fn day_mode_draws_one_block() {
        let mut app = app(ClockMode::Day);
        // All bits set: every template cell of all four nibbles is lit.
        let ops = app.render_ops(0xFFFF);
        let cells = ops.iter().filter(|op| op.kind == DrawKind::Cell).count();
        assert_eq!(cells, 4 * 15);
    }

    #[test]
    fn epoch_mode_draws_two_blocks() {
        let mut app = app(ClockMode::Epoch);
        let ops = app.render_ops(0xFFFF_FFFF);
        let cells = ops.iter().filter(|op| op.kind == DrawKind::Cell).count();
        assert_eq!(cells, 8 * 15);
    }

    #[test]
    fn canvas_covers_the_layout() {
        let mut app = app(ClockMode::Day);
        // 2x2 tiles of 92px with a 30px gap.
        assert_eq!(app.canvas(), Some(PixelBounds::new(0, 0, 214, 214)));
        app.apply(ClockAction::ToggleMode);
        assert_eq!(app.canvas(), Some(PixelBounds::new(0, 0, 214, 458)));
    }

    #[test]
    fn actions_switch_profile_and_mode() {
        let mut app = app(ClockMode::Day);
        assert!(app.apply(ClockAction::PrevProfile));
        assert_eq!(app.profile().profile_id, 15);
        assert!(app.apply(ClockAction::NextProfile));
        assert_eq!(app.profile().profile_id, 0);

        assert!(app.apply(ClockAction::ToggleMode));
        assert_eq!(app.mode(), ClockMode::Epoch);
    }

    #[test]
    fn reload_without_file_keeps_profile() {
        let mut app = app(ClockMode::Day);
        assert!(app.apply(ClockAction::Reload));
        assert_eq!(app.profile().profile_id, 0);
    }

    #[test]
    fn fingerprint_tracks_value_and_mode() {
        let mut app = app(ClockMode::Day);
        let vp = Viewport::new(80, 24);
        let a = app.fingerprint(1, vp);
        assert_ne!(a, app.fingerprint(2, vp));
        app.apply(ClockAction::ToggleMode);
        assert_ne!(a, app.fingerprint(1, vp));
    }

    #[test]
    fn value_and_delay_follow_the_mode() {
        let mut app = app(ClockMode::Day);
        let t = FixedTime::at_unix_ms(EPOCH_UNIX_MS + 86_400_000 + 1319);
        assert_eq!(app.value(&t), 1);
        app.apply(ClockAction::ToggleMode);
        assert_eq!(app.value(&t), 0x0001_0001);
        assert!(app.next_delay(&t) >= Duration::from_millis(10));
    }
}
