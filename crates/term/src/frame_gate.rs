use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Decides when the display loop should redraw.
///
/// A frame is drawn when its fingerprint (value, profile, mode...) changes,
/// and otherwise at most once per `refresh_ms` so the screen recovers from
/// anything that scribbled over it.
#[derive(Debug, Clone)]
pub struct FrameGate {
    refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl FrameGate {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_ms;
        if !(changed || stale) {
            return false;
        }
        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Make the next call render regardless of fingerprint.
    pub fn force(&mut self) {
        self.has_rendered = false;
    }
}

/// Hash a frame's identifying parts into one fingerprint.
pub fn frame_fingerprint(value: u32, profile_id: usize, mode_bit: u8, viewport: (u16, u16)) -> u64 {
    let mut h = DefaultHasher::new();
    (value, profile_id, mode_bit, viewport).hash(&mut h);
    h.finish()
}
