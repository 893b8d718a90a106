//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the clock.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (renderer, settings store, terminal view).
//!
//! # Time Units
//!
//! A day is divided into 65536 equal units, so a 16-bit value covers exactly
//! one day and each nibble (4 bits) of it is one tile on screen:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MS_PER_DAY` | 86 400 000 | Milliseconds in a day |
//! | `UNITS_PER_DAY` | 65 536 | Distinct 16-bit values per day |
//! | `MIN_TICK_DELAY_MS` | 10 | Lower bound of the redraw delay |
//!
//! One unit lasts `86400000 / 65536 ≈ 1318.36ms`.
//!
//! # Tile Geometry
//!
//! Pixel geometry of a single nibble tile and of the layout grid:
//!
//! - `CELL_SIZE`: 20px square cells
//! - `GAP_SIZE`: 4px between cells of a tile
//! - `NIBBLE_GAP`: 30px between tiles on the coarse layout grid
//! - `STACK_GAP`: 30px between the two halves of a stacked 32-bit display
//!
//! # Examples
//!
//! ```
//! use bin_clock_types::{ClockMode, Rgb, TEMPLATE_SIZE, PALETTE_LEN};
//!
//! let gold = Rgb::from_hex("#FFC700").unwrap();
//! assert_eq!(gold, Rgb::new(0xFF, 0xC7, 0x00));
//! assert_eq!(gold.to_hex(), "#FFC700");
//!
//! assert_eq!(ClockMode::from_str("epoch"), Some(ClockMode::Epoch));
//!
//! assert_eq!(TEMPLATE_SIZE, 4);
//! assert_eq!(PALETTE_LEN, 16);
//! ```

use std::fmt;

/// Milliseconds per day
pub const MS_PER_DAY: u64 = 86_400_000;

/// Distinct 16-bit clock values per day
pub const UNITS_PER_DAY: u64 = 65_536;

/// Lower bound of the delay between two redraws (10ms)
pub const MIN_TICK_DELAY_MS: u64 = 10;

/// Start of the extended (epoch) clock: 2026-01-27T00:00:00Z as unix milliseconds.
pub const EPOCH_UNIX_MS: i64 = 1_769_472_000_000;

/// Rows and columns of a nibble template (4x4)
pub const TEMPLATE_SIZE: usize = 4;

/// Number of bit groups per nibble (bits 0..3)
pub const GROUP_COUNT: u8 = 4;

/// Number of palette entries (4 nibbles x 4 groups)
pub const PALETTE_LEN: usize = 16;

/// Rows and columns of the coarse layout grid (4x4)
pub const LAYOUT_GRID_SIZE: u8 = 4;

/// Number of slots of each kind (templates, layouts, palettes, profiles)
pub const SLOT_COUNT: usize = 16;

/// Side length of one template cell in pixels
pub const CELL_SIZE: i32 = 20;

/// Gap between cells of one tile in pixels
pub const GAP_SIZE: i32 = 4;

/// Gap between tiles on the layout grid in pixels
pub const NIBBLE_GAP: i32 = 30;

/// Gap between the high and low block of a stacked display in pixels
pub const STACK_GAP: i32 = NIBBLE_GAP;

/// Color used when a palette has no entry for an index (error red)
pub const ERROR_COLOR: Rgb = Rgb::new(0xFF, 0x00, 0x00);

/// Neutral fill for unset palette entries (#333333)
pub const NEUTRAL_COLOR: Rgb = Rgb::new(0x33, 0x33, 0x33);

/// Conventional "active" color of a fresh palette (#FFC800)
pub const DEFAULT_ACTIVE_COLOR: Rgb = Rgb::new(0xFF, 0xC8, 0x00);

/// Conventional "inactive" color of a fresh palette (#2A2A2A)
pub const DEFAULT_INACTIVE_COLOR: Rgb = Rgb::new(0x2A, 0x2A, 0x2A);

/// Window background of the display (#202020)
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0x20, 0x20, 0x20);

/// Maximum cells a group may occupy: group `g` encodes bit `g`, worth `2^g`.
pub const GROUP_LIMITS: [u8; 4] = [1, 2, 4, 8];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` color (the leading `#` is optional, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bin_clock_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#007E7F"), Some(Rgb::new(0x00, 0x7E, 0x7F)));
    /// assert_eq!(Rgb::from_hex("00fcff"), Some(Rgb::new(0x00, 0xFC, 0xFF)));
    /// assert_eq!(Rgb::from_hex("#12345"), None);
    /// assert_eq!(Rgb::from_hex("red"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Which time value drives the display
///
/// - **Day**: 16-bit fraction of the local day
/// - **Epoch**: 32-bit count of day units since [`EPOCH_UNIX_MS`]; the high
///   half counts days, the low half is the UTC time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockMode {
    #[default]
    Day,
    Epoch,
}

impl ClockMode {
    /// Parse mode from string (case-insensitive)
    ///
    /// Accepts "day" | "16", "epoch" | "ff" | "32".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" | "16" => Some(ClockMode::Day),
            "epoch" | "ff" | "32" => Some(ClockMode::Epoch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClockMode::Day => "day",
            ClockMode::Epoch => "epoch",
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            ClockMode::Day => ClockMode::Epoch,
            ClockMode::Epoch => ClockMode::Day,
        }
    }
}

/// Independent mirror flags of a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mirror {
    /// Reverse every template row (left-right flip)
    pub x: bool,
    /// Reverse the row order (top-bottom flip)
    pub y: bool,
}

impl Mirror {
    pub const NONE: Mirror = Mirror { x: false, y: false };

    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }
}

/// A nibble placed on the coarse layout grid
///
/// `nibble` selects bits `[4n, 4n+3]` of the time value. `x`/`y` are coarse
/// grid coordinates, not pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub nibble: u8,
    pub x: u8,
    pub y: u8,
    pub mirror: Mirror,
}

impl Placement {
    pub const fn new(nibble: u8, x: u8, y: u8) -> Self {
        Self {
            nibble,
            x,
            y,
            mirror: Mirror::NONE,
        }
    }

    pub const fn with_mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = mirror;
        self
    }
}

/// What part of a tile a draw op paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    /// A lit template cell
    Cell,
    /// Infill between two adjacent cells of the same group
    Bridge,
    /// Infill of the diagonal hole inside a 2x2 same-group block
    Corner,
}

/// A filled rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawOp {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Rgb,
    pub kind: DrawKind,
}

impl DrawOp {
    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether the point lies inside the half-open rectangle
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// User commands of the live display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    /// Select the next profile (wrapping)
    NextProfile,
    /// Select the previous profile (wrapping)
    PrevProfile,
    /// Switch between day and epoch mode
    ToggleMode,
    /// Re-read the settings file
    Reload,
}

impl ClockAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bin_clock_types::ClockAction;
    ///
    /// assert_eq!(ClockAction::from_str("nextProfile"), Some(ClockAction::NextProfile));
    /// assert_eq!(ClockAction::from_str("reload"), Some(ClockAction::Reload));
    /// assert_eq!(ClockAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nextprofile" => Some(ClockAction::NextProfile),
            "prevprofile" => Some(ClockAction::PrevProfile),
            "togglemode" => Some(ClockAction::ToggleMode),
            "reload" => Some(ClockAction::Reload),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::NextProfile => "nextProfile",
            ClockAction::PrevProfile => "prevProfile",
            ClockAction::ToggleMode => "toggleMode",
            ClockAction::Reload => "reload",
        }
    }
}
