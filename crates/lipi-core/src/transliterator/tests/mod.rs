mod variants;

use super::Transliterator;
use crate::mode::Mode;
use crate::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};

pub(super) fn translit(mode: Mode) -> Transliterator {
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    Transliterator::with_settings(mode, &settings)
}

/// Committed (non-composing) rendering.
pub(super) fn commit(mode: Mode, input: &str) -> String {
    translit(mode).transliterate(input, false)
}

pub(super) fn compose(mode: Mode, input: &str) -> String {
    translit(mode).transliterate(input, true)
}

/// Every virama/halanta glyph of every script.
pub(super) const KILLERS: [char; 4] = ['\u{11D44}', '\u{11D45}', '\u{11D97}', '\u{094D}'];

#[test]
fn empty_input_is_empty_for_every_mode() {
    for mode in Mode::ALL {
        let t = translit(mode);
        assert_eq!(t.transliterate("", false), "");
        assert_eq!(t.transliterate("", true), "");
        assert_eq!(t.cache_len(), 0, "{mode}: empty input must not be cached");
    }
}

#[test]
fn word_boundary_resets_state() {
    for mode in [Mode::MasaramGondi, Mode::GunjalaGondi, Mode::OlChiki, Mode::Devanagari] {
        let one = commit(mode, "ka");
        assert_eq!(commit(mode, "ka ka"), format!("{one} {one}"), "{mode}");
    }
}

#[test]
fn whitespace_passes_through_unchanged() {
    let out = commit(Mode::MasaramGondi, "ka\tka\nka");
    assert_eq!(out.matches('\t').count(), 1);
    assert_eq!(out.matches('\n').count(), 1);
}

#[test]
fn abugida_bare_consonant_ends_with_killer_only_when_committed() {
    for mode in [Mode::MasaramGondi, Mode::GunjalaGondi, Mode::Devanagari] {
        let halanta = mode.target().marks.halanta.unwrap();
        for key in ["k", "g", "t", "n", "m", "kh", "sh"] {
            assert!(commit(mode, key).ends_with(halanta), "{mode} {key}");
            assert!(!compose(mode, key).ends_with(halanta), "{mode} {key}");
        }
    }
}

#[test]
fn repeated_call_hits_cache() {
    let t = translit(Mode::MasaramGondi);
    let first = t.transliterate("namaste", true);
    assert_eq!(t.cache_len(), 1);
    let second = t.transliterate("namaste", true);
    assert_eq!(first, second);
    assert_eq!(t.cache_len(), 1);
    t.transliterate("namaste", false);
    assert_eq!(t.cache_len(), 2);
}

#[test]
fn cache_is_bounded_by_settings_capacity() {
    let t = translit(Mode::Devanagari);
    for i in 0..501 {
        t.transliterate(&format!("ka{i}"), false);
    }
    assert_eq!(t.cache_len(), 500);
    t.clear_cache();
    assert_eq!(t.cache_len(), 0);
}

#[test]
fn cached_result_matches_fresh_result() {
    let warm = translit(Mode::MasaramGondi);
    let inputs = ["k", "ka", "kar", "karm", "karma"];
    for input in inputs {
        warm.transliterate(input, true);
    }
    for input in inputs {
        assert_eq!(
            warm.transliterate(input, true),
            translit(Mode::MasaramGondi).transliterate(input, true)
        );
    }
}

#[test]
fn suggestions_are_always_empty() {
    for mode in Mode::ALL {
        assert!(translit(mode).get_suggestions("ka", 5).is_empty());
    }
}

#[test]
fn global_instances_are_per_mode() {
    let a = Transliterator::global(Mode::OlChiki);
    let b = Transliterator::global(Mode::OlChiki);
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.mode(), Mode::OlChiki);
    assert_eq!(Transliterator::global(Mode::Devanagari).mode(), Mode::Devanagari);
}

#[test]
fn shared_across_threads() {
    let t = std::sync::Arc::new(translit(Mode::MasaramGondi));
    let expected = t.transliterate("kri", false);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = std::sync::Arc::clone(&t);
            std::thread::spawn(move || t.transliterate("kri", false))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
