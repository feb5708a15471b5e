//! UniFFI export layer.
//!
//! Each public type here maps to a generated Kotlin/Swift class or enum.

mod transliterator;
mod types;

pub use transliterator::LipiTransliterator;
pub use types::LipiError;

use std::path::Path;

use lipi_core::settings::{self, DEFAULT_SETTINGS_TOML};
use lipi_core::{Mode, Transliterator};

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Mode names accepted by `LipiTransliterator::new`.
#[uniffi::export]
fn available_modes() -> Vec<String> {
    Mode::ALL.iter().map(|m| m.name().to_string()).collect()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), LipiError> {
    let content = std::fs::read_to_string(&path).map_err(|e| LipiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    settings::init_custom(content)?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

/// Transliterate with the shared instance for the configured default mode.
#[uniffi::export]
fn transliterate_default(input: String, composing: bool) -> String {
    let mode = settings::settings().default_mode();
    Transliterator::global(mode).transliterate(&input, composing)
}
