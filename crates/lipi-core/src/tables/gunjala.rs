//! Gunjala Gondi (U+11D60..U+11DAF).
//!
//! The script has no dedicated letters for the retroflex nasal, the
//! palatal nasal or the sibilants other than SA, so those keys fold onto
//! NA and SA. Clusters without an atomic letter are spelled with the virama.

use super::{ScriptData, DANDA_PUNCTUATION};
use crate::script::{Marks, Rule};

pub(crate) static DATA: ScriptData = ScriptData {
    vowels: &[
        ("a", "\u{11D60}"),
        ("aa", "\u{11D61}"),
        ("A", "\u{11D61}"),
        ("i", "\u{11D62}"),
        ("ii", "\u{11D63}"),
        ("I", "\u{11D63}"),
        ("u", "\u{11D64}"),
        ("uu", "\u{11D65}"),
        ("U", "\u{11D65}"),
        ("e", "\u{11D67}"),
        ("ee", "\u{11D67}"),
        ("ai", "\u{11D68}"),
        ("o", "\u{11D6A}"),
        ("oo", "\u{11D6A}"),
        ("au", "\u{11D6B}"),
        ("OM", "\u{11D98}"),
        ("AUM", "\u{11D98}"),
    ],
    matras: &[
        ("aa", "\u{11D8A}"),
        ("A", "\u{11D8A}"),
        ("i", "\u{11D8B}"),
        ("ii", "\u{11D8C}"),
        ("I", "\u{11D8C}"),
        ("u", "\u{11D8D}"),
        ("uu", "\u{11D8E}"),
        ("U", "\u{11D8E}"),
        // No vocalic R sign: written as virama + RA + I.
        ("RRi", "\u{11D97}\u{11D88}\u{11D8B}"),
        ("R^i", "\u{11D97}\u{11D88}\u{11D8B}"),
        ("e", "\u{11D90}"),
        ("ee", "\u{11D90}"),
        ("ai", "\u{11D91}"),
        ("o", "\u{11D93}"),
        ("oo", "\u{11D93}"),
        ("au", "\u{11D94}"),
    ],
    consonants: &[
        ("k", "\u{11D71}"),
        ("kh", "\u{11D72}"),
        ("g", "\u{11D76}"),
        ("gh", "\u{11D77}"),
        ("~N", "\u{11D84}"),
        ("ch", "\u{11D7B}"),
        ("c", "\u{11D7B}"),
        ("Ch", "\u{11D7C}"),
        ("chh", "\u{11D7C}"),
        ("j", "\u{11D80}"),
        ("jh", "\u{11D81}"),
        ("~n", "\u{11D7A}"),
        ("T", "\u{11D7D}"),
        ("Th", "\u{11D7E}"),
        ("D", "\u{11D82}"),
        ("Dh", "\u{11D83}"),
        ("N", "\u{11D7A}"),
        ("t", "\u{11D73}"),
        ("th", "\u{11D74}"),
        ("d", "\u{11D78}"),
        ("dh", "\u{11D79}"),
        ("n", "\u{11D7A}"),
        ("p", "\u{11D85}"),
        ("ph", "\u{11D86}"),
        ("b", "\u{11D6E}"),
        ("bh", "\u{11D6F}"),
        ("m", "\u{11D70}"),
        ("y", "\u{11D6C}"),
        ("r", "\u{11D88}"),
        ("l", "\u{11D75}"),
        ("v", "\u{11D6D}"),
        ("w", "\u{11D6D}"),
        ("sh", "\u{11D89}"),
        ("Sh", "\u{11D89}"),
        ("shh", "\u{11D89}"),
        ("s", "\u{11D89}"),
        ("h", "\u{11D87}"),
        ("L", "\u{11D7F}"),
        ("ksh", "\u{11D71}\u{11D97}\u{11D89}"),
        ("x", "\u{11D71}\u{11D97}\u{11D89}"),
        ("j~n", "\u{11D80}\u{11D97}\u{11D7A}"),
        ("dny", "\u{11D80}\u{11D97}\u{11D7A}"),
    ],
    nukta_consonants: &[
        ("q", "\u{11D71}"),
        ("K", "\u{11D72}"),
        ("G", "\u{11D76}"),
        ("z", "\u{11D80}"),
        (".D", "\u{11D82}"),
        (".Dh", "\u{11D83}"),
        (".r", "\u{11D88}"),
        ("f", "\u{11D86}"),
        ("Y", "\u{11D6C}"),
    ],
    conjuncts: &[],
    digits: &[
        ("0", "\u{11DA0}"),
        ("1", "\u{11DA1}"),
        ("2", "\u{11DA2}"),
        ("3", "\u{11DA3}"),
        ("4", "\u{11DA4}"),
        ("5", "\u{11DA5}"),
        ("6", "\u{11DA6}"),
        ("7", "\u{11DA7}"),
        ("8", "\u{11DA8}"),
        ("9", "\u{11DA9}"),
    ],
    punctuation: DANDA_PUNCTUATION,
};

pub(crate) const MARKS: Marks = Marks {
    anusvara: "\u{11D95}",
    visarga: "\u{11D96}",
    chandrabindu: None,
    virama: Some("\u{11D97}"),
    halanta: Some("\u{11D97}"),
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
    Rule::Nukta,
    Rule::Consonant,
    Rule::Vowel,
];
