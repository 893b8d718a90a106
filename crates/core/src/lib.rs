//! Core clock logic module - pure, deterministic, and testable
//!
//! This crate turns a clock value into draw operations. It has **zero
//! dependencies** on terminals, files or settings documents, making it:
//!
//! - **Deterministic**: the same value, template, layout and palette always
//!   produce the same ops
//! - **Testable**: every rendering rule is covered by unit tests
//! - **Portable**: the ops are plain rectangles any surface can paint
//! - **Fast**: allocation-free hot path when the output buffer is reused
//!
//! # Module Structure
//!
//! - [`template`]: 4x4 nibble designs, mirroring and the group-limit editing rules
//! - [`layout`]: nibble placements on the coarse grid
//! - [`palette`]: 16-entry color palettes with error-color fallback
//! - [`nibble`]: bit slicing of clock values
//! - [`render`]: the tile renderer (cells, bridges, corners, stacked 32-bit mode)
//! - [`time`]: wall clock -> clock value
//! - [`tick`]: delay until the next distinct value
//!
//! # Example
//!
//! ```
//! use bin_clock_core::{Layout, Palette, Scene, Template, TileRenderer};
//! use bin_clock_core::types::DrawKind;
//!
//! let template = Template::default_design();
//! let layout = Layout::single();
//! let palette = Palette::teal_gold();
//!
//! // Bits 0 and 2 of nibble 0: the single group-0 cell and the four group-2 cells.
//! let ops = TileRenderer::default().render(0b0101, &Scene::new(&template, &layout, &palette));
//!
//! let cells = ops.iter().filter(|op| op.kind == DrawKind::Cell).count();
//! assert_eq!(cells, 5);
//! ```

pub mod layout;
pub mod nibble;
pub mod palette;
pub mod render;
pub mod template;
pub mod tick;
pub mod time;

pub use bin_clock_types as types;

// Re-export commonly used types for convenience
pub use layout::{Bounds, Layout};
pub use palette::{Brush, Palette};
pub use render::{Block, ColorBand, Geometry, RenderOptions, Scene, TileRenderer};
pub use template::{EditError, PaintOutcome, Template, DEFAULT_TEMPLATE_CELLS};
pub use tick::TickScheduler;
pub use time::{FixedTime, SystemTimeSource, TimeSource};
