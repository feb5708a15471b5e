//! Devanagari text rendered in a Gondi script.
//!
//! The lookup tables are derived at construction by joining the Latin-keyed
//! Devanagari tables with the target's Latin-keyed tables on their shared
//! romanization key, so no Devanagari-to-Gondi data is maintained by hand.
//!
//! Unlike Latin input, a bare Devanagari consonant already carries its
//! inherent vowel. A consonant is dead only when the source spells an
//! explicit virama, and a dead consonant followed by another consonant is a
//! conjunct.

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::script::{self, ScriptDefinition};
use crate::tables::{devanagari, MappingTable};
use crate::tokenizer::{longest_match, Cursor, Match};

const VIRAMA: char = '\u{094D}';
const NUKTA: char = '\u{093C}';
const RA: char = '\u{0930}';
const ANUSVARA: char = '\u{0902}';
const VISARGA: char = '\u{0903}';
const CHANDRABINDU: char = '\u{0901}';

#[derive(Debug)]
pub struct DevanagariSource {
    target: &'static ScriptDefinition,
    consonants: MappingTable,
    /// Virama-joined Devanagari clusters the target writes as one letter.
    clusters: MappingTable,
    vowels: MappingTable,
    matras: MappingTable,
    digits: MappingTable,
}

pub fn masaram() -> &'static DevanagariSource {
    static INSTANCE: OnceLock<DevanagariSource> = OnceLock::new();
    INSTANCE.get_or_init(|| DevanagariSource::new(script::masaram_gondi()))
}

pub fn gunjala() -> &'static DevanagariSource {
    static INSTANCE: OnceLock<DevanagariSource> = OnceLock::new();
    INSTANCE.get_or_init(|| DevanagariSource::new(script::gunjala_gondi()))
}

impl DevanagariSource {
    pub fn new(target: &'static ScriptDefinition) -> Self {
        let data = &devanagari::DATA;
        let t = &target.tables;
        Self {
            target,
            consonants: MappingTable::join(data.consonants, &t.consonants),
            clusters: MappingTable::join(data.conjuncts, &t.consonants),
            vowels: MappingTable::join(data.vowels, &t.vowels),
            matras: MappingTable::join(data.matras, &t.matras),
            digits: MappingTable::join(data.digits, &t.digits),
        }
    }

    pub fn transliterate(&self, input: &str, composing: bool) -> String {
        let normalized = decompose_nukta(input);
        let cursor = Cursor::new(&normalized);
        let marks = &self.target.marks;
        let mut out = String::with_capacity(input.len() * 2);
        // Consonant killed by a source virama; its glyph is deferred until
        // we know whether a conjunct or a terminal halanta follows.
        let mut dead = false;
        // The last unit ended in a vowel (inherent, sign or independent).
        let mut after_vowel = false;
        let mut pos = 0;

        while pos < cursor.len() {
            let Some(c) = cursor.char_at(pos) else { break };

            if c == RA
                && after_vowel
                && !dead
                && self.target.supports_repha()
                && cursor.char_at(pos + 1) == Some(VIRAMA)
                && self.consonant_at(&cursor, pos + 2).is_some()
            {
                out.push_str(marks.repha.unwrap_or_default());
                after_vowel = false;
                pos += 2;
                continue;
            }

            if let Some(m) = self.consonant_at(&cursor, pos) {
                let mut next = pos + m.consumed;
                if dead && c == RA && m.consumed == 1 && self.target.supports_rakar() {
                    out.push_str(marks.rakar.unwrap_or_default());
                } else {
                    if dead {
                        push_opt(&mut out, marks.virama);
                    }
                    out.push_str(m.value);
                    if cursor.char_at(next) == Some(NUKTA) {
                        push_opt(&mut out, marks.nukta);
                        next += 1;
                    }
                }
                dead = false;
                after_vowel = false;
                match cursor.char_at(next) {
                    Some(VIRAMA) => {
                        dead = true;
                        next += 1;
                    }
                    Some(_) => {
                        if let Some(sign) = self.matras.get(cursor.slice(next, 1)) {
                            out.push_str(sign);
                            next += 1;
                        }
                        after_vowel = true;
                    }
                    None => after_vowel = true,
                }
                pos = next;
                continue;
            }

            // Everything below closes a dead consonant with the halanta.
            if dead {
                push_opt(&mut out, marks.halanta);
                dead = false;
            }
            let unit = cursor.slice(pos, 1);
            after_vowel = false;
            match c {
                ANUSVARA => out.push_str(marks.anusvara),
                VISARGA => out.push_str(marks.visarga),
                CHANDRABINDU => out.push_str(self.target.chandrabindu_glyph()),
                VIRAMA => push_opt(&mut out, marks.halanta),
                _ => {
                    if let Some(m) = longest_match(&cursor, pos, &self.vowels) {
                        out.push_str(m.value);
                        after_vowel = true;
                        pos += m.consumed;
                        continue;
                    }
                    let mapped = self
                        .matras
                        .get(unit)
                        .or_else(|| self.digits.get(unit))
                        .unwrap_or(unit);
                    out.push_str(mapped);
                }
            }
            pos += 1;
        }

        if dead && !(composing && self.target.withhold_halanta_while_composing) {
            push_opt(&mut out, marks.halanta);
        }
        out
    }

    fn consonant_at(&self, cursor: &Cursor<'_>, pos: usize) -> Option<Match> {
        longest_match(cursor, pos, &self.clusters)
            .or_else(|| longest_match(cursor, pos, &self.consonants))
    }
}

fn push_opt(out: &mut String, glyph: Option<&str>) {
    if let Some(g) = glyph {
        out.push_str(g);
    }
}

/// Split precomposed nukta letters (U+0958..U+095F) into base + nukta.
fn decompose_nukta(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| nukta_base(c).is_some()) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match nukta_base(c) {
            Some(base) => {
                out.push(base);
                out.push(NUKTA);
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn nukta_base(c: char) -> Option<char> {
    Some(match c {
        '\u{0958}' => '\u{0915}',
        '\u{0959}' => '\u{0916}',
        '\u{095A}' => '\u{0917}',
        '\u{095B}' => '\u{091C}',
        '\u{095C}' => '\u{0921}',
        '\u{095D}' => '\u{0922}',
        '\u{095E}' => '\u{092B}',
        '\u{095F}' => '\u{092F}',
        _ => return None,
    })
}
