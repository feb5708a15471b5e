//! Tunables for the transliterators: the mode a host starts in, how many
//! results each mode's cache keeps, and the suffixes appended to a base key
//! when building long-press variants.
//!
//! The shipped values live in `default_settings.toml`. A host that wants
//! different ones hands its TOML to [`init_custom`] before anything reads
//! [`settings`]; after that the values are fixed for the process.

use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::mode::Mode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub cache: CacheSettings,
    pub variants: VariantSettings,
}

impl Settings {
    /// Mode used when the host does not pick one explicitly.
    pub fn default_mode(&self) -> Mode {
        self.engine.default_mode_parsed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    default_mode: String,
    #[serde(skip)]
    default_mode_parsed: Mode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantSettings {
    pub vowel_suffixes: Vec<String>,
    pub mark_suffixes: Vec<String>,
    pub cluster_suffixes: Vec<String>,
}

impl VariantSettings {
    /// All probe suffixes in popup order: vowels, then marks, then clusters.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.vowel_suffixes
            .iter()
            .chain(&self.mark_suffixes)
            .chain(&self.cluster_suffixes)
            .map(String::as_str)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.engine.default_mode_parsed =
        Mode::from_str(&s.engine.default_mode).map_err(|e| SettingsError::InvalidValue {
            field: "engine.default_mode".to_string(),
            reason: e.to_string(),
        })?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_no_empty_entries {
        ($section:ident . $field:ident) => {
            if s.$section.$field.iter().any(|v| v.is_empty()) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "entries must be non-empty".to_string(),
                });
            }
        };
    }

    check_positive_usize!(cache.capacity);

    check_no_empty_entries!(variants.vowel_suffixes);
    check_no_empty_entries!(variants.mark_suffixes);
    check_no_empty_entries!(variants.cluster_suffixes);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.default_mode(), Mode::MasaramGondi);
        assert_eq!(s.cache.capacity, 500);
        assert_eq!(s.variants.vowel_suffixes.len(), 10);
        assert_eq!(s.variants.mark_suffixes, vec!["aM", "aH", "a.N"]);
        assert_eq!(s.variants.cluster_suffixes, vec!["ha", "ra", "ya"]);
    }

    #[test]
    fn suffix_order_is_vowels_marks_clusters() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let all: Vec<&str> = s.variants.suffixes().collect();
        assert_eq!(all.first(), Some(&"a"));
        assert_eq!(all[10], "aM");
        assert_eq!(all.last(), Some(&"ya"));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[engine]
default_mode = "ol_chiki"

[cache]
capacity = 64

[variants]
vowel_suffixes = ["a", "i"]
mark_suffixes = []
cluster_suffixes = ["ra"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.default_mode(), Mode::OlChiki);
        assert_eq!(s.cache.capacity, 64);
        assert_eq!(s.variants.suffixes().count(), 3);
    }

    #[test]
    fn error_zero_capacity() {
        let toml = DEFAULT_SETTINGS_TOML.replace("capacity = 500", "capacity = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        match err {
            SettingsError::InvalidValue { field, .. } => assert_eq!(field, "cache.capacity"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn error_unknown_mode() {
        let toml = DEFAULT_SETTINGS_TOML.replace("masaram_gondi", "klingon");
        let err = parse_settings_toml(&toml).unwrap_err();
        match err {
            SettingsError::InvalidValue { field, reason } => {
                assert_eq!(field, "engine.default_mode");
                assert!(reason.contains("klingon"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn error_empty_suffix() {
        let toml = DEFAULT_SETTINGS_TOML.replace(r#"["ha", "ra", "ya"]"#, r#"["ha", ""]"#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[cache]\ncapacity = 10\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
