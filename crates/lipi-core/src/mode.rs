use std::fmt;
use std::str::FromStr;

use crate::script::{self, ScriptDefinition};

/// Engine configuration selected by the host.
///
/// Latin-source modes read ITRANS-style romanization; the `Devanagari*`
/// source modes read Devanagari text and render it in a Gondi script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    MasaramGondi,
    GunjalaGondi,
    OlChiki,
    Devanagari,
    DevanagariMasaram,
    DevanagariGunjala,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("unknown mode: {0}")]
    Unknown(String),
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::MasaramGondi,
        Mode::GunjalaGondi,
        Mode::OlChiki,
        Mode::Devanagari,
        Mode::DevanagariMasaram,
        Mode::DevanagariGunjala,
    ];

    /// Stable snake_case name used in settings, the CLI and the FFI layer.
    pub fn name(self) -> &'static str {
        match self {
            Mode::MasaramGondi => "masaram_gondi",
            Mode::GunjalaGondi => "gunjala_gondi",
            Mode::OlChiki => "ol_chiki",
            Mode::Devanagari => "devanagari",
            Mode::DevanagariMasaram => "devanagari_masaram",
            Mode::DevanagariGunjala => "devanagari_gunjala",
        }
    }

    /// True when the input alphabet is Devanagari rather than Latin.
    pub fn is_devanagari_source(self) -> bool {
        matches!(self, Mode::DevanagariMasaram | Mode::DevanagariGunjala)
    }

    /// Script the output is written in.
    pub fn target(self) -> &'static ScriptDefinition {
        match self {
            Mode::MasaramGondi | Mode::DevanagariMasaram => script::masaram_gondi(),
            Mode::GunjalaGondi | Mode::DevanagariGunjala => script::gunjala_gondi(),
            Mode::OlChiki => script::ol_chiki(),
            Mode::Devanagari => script::devanagari(),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ModeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
