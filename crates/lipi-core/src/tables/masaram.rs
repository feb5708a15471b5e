//! Masaram Gondi (U+11D00..U+11D5F).

use super::{ScriptData, DANDA_PUNCTUATION};
use crate::script::{Marks, Rule};

pub(crate) static DATA: ScriptData = ScriptData {
    vowels: &[
        ("a", "\u{11D00}"),
        ("aa", "\u{11D01}"),
        ("A", "\u{11D01}"),
        ("i", "\u{11D02}"),
        ("ii", "\u{11D03}"),
        ("I", "\u{11D03}"),
        ("u", "\u{11D04}"),
        ("uu", "\u{11D05}"),
        ("U", "\u{11D05}"),
        ("e", "\u{11D06}"),
        ("ee", "\u{11D06}"),
        ("ai", "\u{11D08}"),
        ("o", "\u{11D09}"),
        ("oo", "\u{11D09}"),
        ("au", "\u{11D0B}"),
    ],
    matras: &[
        ("aa", "\u{11D31}"),
        ("A", "\u{11D31}"),
        ("i", "\u{11D32}"),
        ("ii", "\u{11D33}"),
        ("I", "\u{11D33}"),
        ("u", "\u{11D34}"),
        ("uu", "\u{11D35}"),
        ("U", "\u{11D35}"),
        ("RRi", "\u{11D36}"),
        ("R^i", "\u{11D36}"),
        ("e", "\u{11D3A}"),
        ("ee", "\u{11D3A}"),
        ("ai", "\u{11D3C}"),
        ("o", "\u{11D3D}"),
        ("oo", "\u{11D3D}"),
        ("au", "\u{11D3F}"),
    ],
    consonants: &[
        ("k", "\u{11D0C}"),
        ("kh", "\u{11D0D}"),
        ("g", "\u{11D0E}"),
        ("gh", "\u{11D0F}"),
        ("~N", "\u{11D10}"),
        ("ch", "\u{11D11}"),
        ("c", "\u{11D11}"),
        ("Ch", "\u{11D12}"),
        ("chh", "\u{11D12}"),
        ("j", "\u{11D13}"),
        ("jh", "\u{11D14}"),
        ("~n", "\u{11D15}"),
        ("T", "\u{11D16}"),
        ("Th", "\u{11D17}"),
        ("D", "\u{11D18}"),
        ("Dh", "\u{11D19}"),
        ("N", "\u{11D1A}"),
        ("t", "\u{11D1B}"),
        ("th", "\u{11D1C}"),
        ("d", "\u{11D1D}"),
        ("dh", "\u{11D1E}"),
        ("n", "\u{11D1F}"),
        ("p", "\u{11D20}"),
        ("ph", "\u{11D21}"),
        ("b", "\u{11D22}"),
        ("bh", "\u{11D23}"),
        ("m", "\u{11D24}"),
        ("y", "\u{11D25}"),
        ("r", "\u{11D26}"),
        ("l", "\u{11D27}"),
        ("v", "\u{11D28}"),
        ("w", "\u{11D28}"),
        ("sh", "\u{11D29}"),
        ("Sh", "\u{11D2A}"),
        ("shh", "\u{11D2A}"),
        ("s", "\u{11D2B}"),
        ("h", "\u{11D2C}"),
        ("L", "\u{11D2D}"),
        // Atomic ligature letters.
        ("ksh", "\u{11D2E}"),
        ("x", "\u{11D2E}"),
        ("j~n", "\u{11D2F}"),
        ("dny", "\u{11D2F}"),
    ],
    nukta_consonants: &[
        ("q", "\u{11D0C}"),
        ("K", "\u{11D0D}"),
        ("G", "\u{11D0E}"),
        ("z", "\u{11D13}"),
        (".D", "\u{11D18}"),
        (".Dh", "\u{11D19}"),
        (".r", "\u{11D26}"),
        ("f", "\u{11D21}"),
        ("Y", "\u{11D25}"),
    ],
    conjuncts: &[],
    digits: &[
        ("0", "\u{11D50}"),
        ("1", "\u{11D51}"),
        ("2", "\u{11D52}"),
        ("3", "\u{11D53}"),
        ("4", "\u{11D54}"),
        ("5", "\u{11D55}"),
        ("6", "\u{11D56}"),
        ("7", "\u{11D57}"),
        ("8", "\u{11D58}"),
        ("9", "\u{11D59}"),
    ],
    punctuation: DANDA_PUNCTUATION,
};

pub(crate) const MARKS: Marks = Marks {
    anusvara: "\u{11D40}",
    visarga: "\u{11D41}",
    chandrabindu: Some("\u{11D43}"),
    virama: Some("\u{11D45}"),
    halanta: Some("\u{11D44}"),
    nukta: Some("\u{11D42}"),
    repha: Some("\u{11D46}"),
    rakar: Some("\u{11D47}"),
};

/// Repha is tried before rakar, and both before nukta consonants.
pub(crate) const RULES: &[Rule] = &[
    Rule::Digit,
    Rule::Punctuation,
    Rule::Whitespace,
    Rule::Chandrabindu,
    Rule::Anusvara,
    Rule::Visarga,
    Rule::Repha,
    Rule::Rakar,
    Rule::Nukta,
    Rule::Consonant,
    Rule::Vowel,
];
