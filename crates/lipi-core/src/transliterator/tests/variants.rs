use std::collections::HashSet;

use super::translit;
use crate::mode::Mode;

#[test]
fn abugida_canonical_form_is_the_inherent_syllable() {
    let out = translit(Mode::MasaramGondi).variants("k");
    assert_eq!(out[0], "\u{11D0C}");
    assert!(out.contains(&"\u{11D0C}\u{11D32}".to_string()));
    assert!(out.contains(&"\u{11D0D}".to_string()), "kha via the ha suffix");
    assert!(out.contains(&"\u{11D0C}\u{11D47}".to_string()), "kra via the ra suffix");
    assert!(out.contains(&"\u{11D0C}\u{11D40}".to_string()));
    // "ka" from the canonical probe and from the "a" suffix collapse.
    assert_eq!(out.len(), 16);
}

#[test]
fn alphabetic_canonical_form_is_the_bare_key() {
    let out = translit(Mode::OlChiki).variants("k");
    assert_eq!(out[0], "\u{1C60}");
    assert_eq!(out[1], "\u{1C60}\u{1C5A}");
}

#[test]
fn variants_are_distinct_and_never_echo_the_probe() {
    for mode in [Mode::MasaramGondi, Mode::GunjalaGondi, Mode::OlChiki, Mode::Devanagari] {
        let t = translit(mode);
        for key in ["k", "g", "sh", "n"] {
            let out = t.variants(key);
            assert!(!out.is_empty(), "{mode} {key}");
            let unique: HashSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len(), "{mode} {key}");
            for v in &out {
                assert!(!v.trim().is_empty());
                assert!(!v.is_ascii(), "{mode} {key}: {v}");
            }
        }
    }
}

#[test]
fn devanagari_source_offers_only_the_canonical_form() {
    let out = translit(Mode::DevanagariMasaram).variants("क");
    assert_eq!(out, vec!["\u{11D0C}".to_string()]);
}

#[test]
fn empty_key_has_no_variants() {
    for mode in Mode::ALL {
        assert!(translit(mode).variants("").is_empty());
    }
}

#[test]
fn variant_probes_populate_the_cache() {
    let t = translit(Mode::MasaramGondi);
    let out = t.variants("k");
    assert!(t.cache_len() >= out.len());
    assert_eq!(t.variants("k"), out);
}
