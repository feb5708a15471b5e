//! UniFFI bindings for the lipi transliteration engine.
//!
//! Keyboard hosts (Android, iOS) link the generated library and call into
//! [`api`]; everything here is a thin wrapper over `lipi-core`.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use api::{LipiError, LipiTransliterator};
