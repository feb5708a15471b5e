//! Ol Chiki (U+1C50..U+1C7F).
//!
//! Ol Chiki is a true alphabet: no inherent vowel, no virama. Vowels are
//! ordinary letters, so the sign table is the same set as the vowel table.
//! Long vowels take RELAA (U+1C7B) and aspirates take OH (U+1C77).

use super::{Pairs, ScriptData};
use crate::script::{Marks, Rule};

const VOWELS: Pairs = &[
    ("a", "\u{1C5A}"),
    ("aa", "\u{1C5F}"),
    ("A", "\u{1C5F}"),
    ("i", "\u{1C64}"),
    ("ii", "\u{1C64}\u{1C7B}"),
    ("I", "\u{1C64}\u{1C7B}"),
    ("u", "\u{1C69}"),
    ("uu", "\u{1C69}\u{1C7B}"),
    ("U", "\u{1C69}\u{1C7B}"),
    ("e", "\u{1C6E}"),
    ("ee", "\u{1C6E}\u{1C7B}"),
    ("ai", "\u{1C5F}\u{1C64}"),
    ("o", "\u{1C73}"),
    ("oo", "\u{1C73}\u{1C7B}"),
    ("au", "\u{1C5F}\u{1C69}"),
];

pub(crate) static DATA: ScriptData = ScriptData {
    vowels: VOWELS,
    matras: VOWELS,
    consonants: &[
        ("k", "\u{1C60}"),
        ("kh", "\u{1C60}\u{1C77}"),
        ("g", "\u{1C5C}"),
        ("gh", "\u{1C5C}\u{1C77}"),
        ("ng", "\u{1C5D}"),
        ("~N", "\u{1C5D}"),
        ("c", "\u{1C6A}"),
        ("ch", "\u{1C6A}"),
        ("Ch", "\u{1C6A}\u{1C77}"),
        ("chh", "\u{1C6A}\u{1C77}"),
        ("j", "\u{1C61}"),
        ("jh", "\u{1C61}\u{1C77}"),
        ("ny", "\u{1C67}"),
        ("~n", "\u{1C67}"),
        ("T", "\u{1C74}"),
        ("Th", "\u{1C74}\u{1C77}"),
        ("D", "\u{1C70}"),
        ("Dh", "\u{1C70}\u{1C77}"),
        ("N", "\u{1C6C}"),
        ("t", "\u{1C5B}"),
        ("th", "\u{1C5B}\u{1C77}"),
        ("d", "\u{1C6B}"),
        ("dh", "\u{1C6B}\u{1C77}"),
        ("n", "\u{1C71}"),
        ("p", "\u{1C6F}"),
        ("ph", "\u{1C6F}\u{1C77}"),
        ("b", "\u{1C75}"),
        ("bh", "\u{1C75}\u{1C77}"),
        ("m", "\u{1C62}"),
        ("y", "\u{1C6D}"),
        ("r", "\u{1C68}"),
        ("R", "\u{1C72}"),
        ("l", "\u{1C5E}"),
        ("w", "\u{1C63}"),
        ("v", "\u{1C76}"),
        ("s", "\u{1C65}"),
        ("sh", "\u{1C65}"),
        ("Sh", "\u{1C65}"),
        ("h", "\u{1C66}"),
    ],
    nukta_consonants: &[],
    conjuncts: &[],
    digits: &[
        ("0", "\u{1C50}"),
        ("1", "\u{1C51}"),
        ("2", "\u{1C52}"),
        ("3", "\u{1C53}"),
        ("4", "\u{1C54}"),
        ("5", "\u{1C55}"),
        ("6", "\u{1C56}"),
        ("7", "\u{1C57}"),
        ("8", "\u{1C58}"),
        ("9", "\u{1C59}"),
    ],
    punctuation: &[
        (".", "\u{1C7E}"),
        ("..", "\u{1C7F}"),
        ("...", "\u{2026}"),
        ("|", "\u{1C7E}"),
        ("||", "\u{1C7F}"),
    ],
};

pub(crate) const MARKS: Marks = Marks {
    anusvara: "\u{1C78}",
    visarga: "\u{1C77}",
    chandrabindu: None,
    virama: None,
    halanta: None,
    nukta: None,
    repha: None,
    rakar: None,
};

pub(crate) const RULES: &[Rule] = &[
    Rule::Digit,
    Rule::Punctuation,
    Rule::Whitespace,
    Rule::Chandrabindu,
    Rule::Anusvara,
    Rule::Visarga,
    Rule::Consonant,
    Rule::Vowel,
];
