//! Binary clock (workspace facade crate).
//!
//! Re-exports the `bin_clock::{core,input,settings,term,types}` API whose
//! implementation lives in dedicated crates under `crates/`, plus the
//! display state the binary drives.

pub mod app;

pub use bin_clock_core as core;
pub use bin_clock_input as input;
pub use bin_clock_settings as settings;
pub use bin_clock_term as term;
pub use bin_clock_types as types;
