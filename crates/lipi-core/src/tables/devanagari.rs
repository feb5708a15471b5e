//! Devanagari (U+0900..U+097F), Hindi conventions.
//!
//! Nukta consonants are produced as base + U+093C rather than the
//! precomposed U+0958..U+095F letters, which are excluded from NFC.

use super::{ScriptData, DANDA_PUNCTUATION};
use crate::script::{Marks, Rule};

pub(crate) static DATA: ScriptData = ScriptData {
    vowels: &[
        ("a", "\u{0905}"),
        ("aa", "\u{0906}"),
        ("A", "\u{0906}"),
        ("i", "\u{0907}"),
        ("ii", "\u{0908}"),
        ("I", "\u{0908}"),
        ("u", "\u{0909}"),
        ("uu", "\u{090A}"),
        ("U", "\u{090A}"),
        ("RRi", "\u{090B}"),
        ("R^i", "\u{090B}"),
        ("RRI", "\u{0960}"),
        ("R^I", "\u{0960}"),
        ("e", "\u{090F}"),
        ("ee", "\u{090F}"),
        ("ai", "\u{0910}"),
        ("o", "\u{0913}"),
        ("oo", "\u{0913}"),
        ("au", "\u{0914}"),
        ("OM", "\u{0950}"),
        ("AUM", "\u{0950}"),
    ],
    matras: &[
        ("aa", "\u{093E}"),
        ("A", "\u{093E}"),
        ("i", "\u{093F}"),
        ("ii", "\u{0940}"),
        ("I", "\u{0940}"),
        ("u", "\u{0941}"),
        ("uu", "\u{0942}"),
        ("U", "\u{0942}"),
        ("RRi", "\u{0943}"),
        ("R^i", "\u{0943}"),
        ("RRI", "\u{0944}"),
        ("R^I", "\u{0944}"),
        ("e", "\u{0947}"),
        ("ee", "\u{0947}"),
        ("ai", "\u{0948}"),
        ("o", "\u{094B}"),
        ("oo", "\u{094B}"),
        ("au", "\u{094C}"),
    ],
    consonants: &[
        ("k", "\u{0915}"),
        ("kh", "\u{0916}"),
        ("g", "\u{0917}"),
        ("gh", "\u{0918}"),
        ("~N", "\u{0919}"),
        ("ch", "\u{091A}"),
        ("c", "\u{091A}"),
        ("Ch", "\u{091B}"),
        ("chh", "\u{091B}"),
        ("j", "\u{091C}"),
        ("jh", "\u{091D}"),
        ("~n", "\u{091E}"),
        ("T", "\u{091F}"),
        ("Th", "\u{0920}"),
        ("D", "\u{0921}"),
        ("Dh", "\u{0922}"),
        ("N", "\u{0923}"),
        ("t", "\u{0924}"),
        ("th", "\u{0925}"),
        ("d", "\u{0926}"),
        ("dh", "\u{0927}"),
        ("n", "\u{0928}"),
        ("p", "\u{092A}"),
        ("ph", "\u{092B}"),
        ("b", "\u{092C}"),
        ("bh", "\u{092D}"),
        ("m", "\u{092E}"),
        ("y", "\u{092F}"),
        ("r", "\u{0930}"),
        ("l", "\u{0932}"),
        ("L", "\u{0933}"),
        ("v", "\u{0935}"),
        ("w", "\u{0935}"),
        ("sh", "\u{0936}"),
        ("Sh", "\u{0937}"),
        ("shh", "\u{0937}"),
        ("s", "\u{0938}"),
        ("h", "\u{0939}"),
    ],
    nukta_consonants: &[
        ("q", "\u{0915}"),
        ("K", "\u{0916}"),
        ("G", "\u{0917}"),
        ("z", "\u{091C}"),
        (".D", "\u{0921}"),
        (".Dh", "\u{0922}"),
        (".r", "\u{0930}"),
        ("f", "\u{092B}"),
        ("Y", "\u{092F}"),
    ],
    conjuncts: &[
        ("ksh", "\u{0915}\u{094D}\u{0937}"),
        ("x", "\u{0915}\u{094D}\u{0937}"),
        ("tr", "\u{0924}\u{094D}\u{0930}"),
        ("gy", "\u{091C}\u{094D}\u{091E}"),
        ("j~n", "\u{091C}\u{094D}\u{091E}"),
        ("dny", "\u{091C}\u{094D}\u{091E}"),
        ("shr", "\u{0936}\u{094D}\u{0930}"),
    ],
    digits: &[
        ("0", "\u{0966}"),
        ("1", "\u{0967}"),
        ("2", "\u{0968}"),
        ("3", "\u{0969}"),
        ("4", "\u{096A}"),
        ("5", "\u{096B}"),
        ("6", "\u{096C}"),
        ("7", "\u{096D}"),
        ("8", "\u{096E}"),
        ("9", "\u{096F}"),
    ],
    punctuation: DANDA_PUNCTUATION,
};

pub(crate) const MARKS: Marks = Marks {
    anusvara: "\u{0902}",
    visarga: "\u{0903}",
    chandrabindu: Some("\u{0901}"),
    virama: Some("\u{094D}"),
    halanta: Some("\u{094D}"),
    nukta: Some("\u{093C}"),
    repha: None,
    rakar: None,
};

/// Named conjuncts take priority over nukta and plain consonants.
pub(crate) const RULES: &[Rule] = &[
    Rule::Digit,
    Rule::Punctuation,
    Rule::Whitespace,
    Rule::Chandrabindu,
    Rule::Anusvara,
    Rule::Visarga,
    Rule::Conjunct,
    Rule::Nukta,
    Rule::Consonant,
    Rule::Vowel,
];
