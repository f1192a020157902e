//! sysglance - One-second host metrics dashboard library.
//!
//! This library provides the two halves of the `sysglance` binary:
//! - `collector` - best-effort host metric probes behind a mockable trait
//! - `tui` - the interactive terminal dashboard driven by a 1-second tick

pub mod collector;
pub mod tui;
