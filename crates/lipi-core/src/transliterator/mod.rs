//! The host-facing transliteration entry point.
//!
//! A `Transliterator` pairs one engine (Latin or Devanagari source) with its
//! own result cache. It is `Send + Sync`: keystroke handlers and background
//! suggestion refreshes may share one instance.

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use tracing::{debug_span, trace};

use crate::cache::ResultCache;
use crate::devanagari_source::{self, DevanagariSource};
use crate::mode::Mode;
use crate::settings::{settings, Settings};
use crate::syllable::LatinEngine;
use crate::variants::{self, VariantProbe};

#[derive(Debug, Clone, Copy)]
enum Engine {
    Latin(LatinEngine),
    Devanagari(&'static DevanagariSource),
}

impl Engine {
    fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::DevanagariMasaram => Engine::Devanagari(devanagari_source::masaram()),
            Mode::DevanagariGunjala => Engine::Devanagari(devanagari_source::gunjala()),
            _ => Engine::Latin(LatinEngine::new(mode.target())),
        }
    }

    fn run(&self, input: &str, composing: bool) -> String {
        match self {
            Engine::Latin(e) => e.transliterate(input, composing),
            Engine::Devanagari(e) => e.transliterate(input, composing),
        }
    }
}

#[derive(Debug)]
pub struct Transliterator {
    mode: Mode,
    engine: Engine,
    cache: ResultCache,
    probe: VariantProbe,
}

impl Transliterator {
    /// Build with the global settings.
    pub fn new(mode: Mode) -> Self {
        Self::with_settings(mode, settings())
    }

    pub fn with_settings(mode: Mode, settings: &Settings) -> Self {
        let probe = if mode.is_devanagari_source() {
            VariantProbe {
                force_inherent: false,
                suffixes: Vec::new(),
            }
        } else {
            VariantProbe {
                force_inherent: !mode.target().is_alphabetic(),
                suffixes: settings.variants.suffixes().map(str::to_string).collect(),
            }
        };
        Self {
            mode,
            engine: Engine::for_mode(mode),
            cache: ResultCache::new(settings.cache.capacity),
            probe,
        }
    }

    /// Process-wide instance for `mode`, built on first use.
    pub fn global(mode: Mode) -> &'static Transliterator {
        static INSTANCES: OnceLock<[Transliterator; 6]> = OnceLock::new();
        &INSTANCES.get_or_init(|| Mode::ALL.map(Transliterator::new))[mode.index()]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Transliterate `input`. With `composing` set, abugida scripts leave a
    /// trailing dead consonant without its halanta.
    pub fn transliterate(&self, input: &str, composing: bool) -> String {
        if input.is_empty() {
            return String::new();
        }
        if let Some(hit) = self.cache.get(input, composing) {
            trace!(mode = %self.mode, composing, "cache hit");
            return hit;
        }
        let _span = debug_span!(
            "transliterate",
            mode = %self.mode,
            char_count = input.chars().count(),
            composing
        )
        .entered();
        let output = self.engine.run(input, composing);
        self.cache.put(input, composing, output.clone());
        output
    }

    /// Alternate renderings of `base_key` for a long-press popup.
    pub fn variants(&self, base_key: &str) -> Vec<String> {
        variants::generate(base_key, &self.probe, |probe| {
            self.transliterate(probe, false)
        })
    }

    /// Word suggestions are produced by the host's dictionary, not here.
    pub fn get_suggestions(&self, _input: &str, _limit: usize) -> Vec<String> {
        Vec::new()
    }

    /// Number of cached `(input, composing)` results.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
