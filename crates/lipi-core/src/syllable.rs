//! Syllable state machine for Latin-source transliteration.
//!
//! The whole input is consumed left to right. At each position the script's
//! rules are tried in order; the first one that accepts the input emits
//! glyphs and reports how many chars it consumed. Unrecognised chars pass
//! through unchanged.

use crate::script::{Rule, ScriptDefinition};
use crate::tables::MappingTable;
use crate::tokenizer::{longest_match, Cursor};

/// Per-word tracking of the last emitted unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Syllable {
    pub has_consonant: bool,
    pub has_vowel: bool,
}

impl Syllable {
    /// A consonant was emitted and no vowel followed it yet.
    pub fn is_pending(self) -> bool {
        self.has_consonant && !self.has_vowel
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn consonant(&mut self) {
        self.has_consonant = true;
        self.has_vowel = false;
    }

    fn vowel_sign(&mut self) {
        self.has_vowel = true;
    }

    fn independent_vowel(&mut self) {
        self.has_consonant = false;
        self.has_vowel = true;
    }
}

/// Where a dead consonant's virama is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kill {
    /// Another consonant follows: conjunct virama.
    BeforeConsonant,
    /// Anything else, including end of word: terminal halanta.
    Terminal,
}

/// Latin-source engine for one script.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatinEngine {
    script: &'static ScriptDefinition,
}

impl LatinEngine {
    pub fn new(script: &'static ScriptDefinition) -> Self {
        Self { script }
    }

    pub fn transliterate(&self, input: &str, composing: bool) -> String {
        let cursor = Cursor::new(input);
        let mut run = Run {
            script: self.script,
            cursor: &cursor,
            out: String::with_capacity(input.len() * 4),
            state: Syllable::default(),
        };
        let mut pos = 0;
        while pos < cursor.len() {
            pos += run.step(pos);
        }
        run.finish(composing)
    }
}

struct Run<'c, 'a> {
    script: &'static ScriptDefinition,
    cursor: &'c Cursor<'a>,
    out: String,
    state: Syllable,
}

impl Run<'_, '_> {
    /// Consume input at `pos`; returns the number of chars consumed (>= 1).
    fn step(&mut self, pos: usize) -> usize {
        let Some(c) = self.cursor.char_at(pos) else {
            return 1;
        };
        for &rule in self.script.rules {
            if let Some(consumed) = self.apply(rule, pos, c) {
                return consumed;
            }
        }
        self.kill_pending(Kill::Terminal);
        self.out.push(c);
        self.state.reset();
        1
    }

    fn apply(&mut self, rule: Rule, pos: usize, c: char) -> Option<usize> {
        let script = self.script;
        let tables = &script.tables;
        match rule {
            Rule::Digit => self.digit(pos),
            Rule::Punctuation => self.punctuation(pos),
            Rule::Whitespace => self.whitespace(c),
            Rule::Chandrabindu => self.chandrabindu(pos),
            Rule::Anusvara => self.anusvara(pos, c),
            Rule::Visarga => self.visarga(pos, c),
            Rule::Repha => self.repha(pos, c),
            Rule::Rakar => self.rakar(pos, c),
            Rule::Conjunct => self.consonant_from(pos, &tables.conjuncts, None),
            Rule::Nukta => {
                let nukta = self.script.nukta_glyph();
                self.consonant_from(pos, &tables.nukta_consonants, Some(nukta))
            }
            Rule::Consonant => self.consonant_from(pos, &tables.consonants, None),
            Rule::Vowel => self.vowel(pos),
        }
    }

    fn finish(mut self, composing: bool) -> String {
        if !(composing && self.script.withhold_halanta_while_composing) {
            self.kill_pending(Kill::Terminal);
        }
        self.out
    }

    /// Write the virama for a pending consonant. Alphabetic scripts have no
    /// virama glyphs, so this is a no-op for them.
    fn kill_pending(&mut self, kill: Kill) {
        if !self.state.is_pending() {
            return;
        }
        let glyph = match kill {
            Kill::BeforeConsonant => self.script.marks.virama,
            Kill::Terminal => self.script.marks.halanta,
        };
        if let Some(g) = glyph {
            self.out.push_str(g);
        }
    }

    /// Close the word at a boundary glyph (digit, punctuation, whitespace).
    fn boundary(&mut self, glyph: &str, consumed: usize) -> Option<usize> {
        self.kill_pending(Kill::Terminal);
        self.out.push_str(glyph);
        self.state.reset();
        Some(consumed)
    }

    fn digit(&mut self, pos: usize) -> Option<usize> {
        let m = longest_match(self.cursor, pos, &self.script.tables.digits)?;
        self.boundary(m.value, m.consumed)
    }

    fn punctuation(&mut self, pos: usize) -> Option<usize> {
        if self.is_reserved_escape(pos) {
            return None;
        }
        let m = longest_match(self.cursor, pos, &self.script.tables.punctuation)?;
        self.boundary(m.value, m.consumed)
    }

    /// A `.` that opens a mark or nukta escape is not punctuation.
    fn is_reserved_escape(&self, pos: usize) -> bool {
        const MARK_ESCAPES: [&str; 4] = [".n", ".m", ".N", ".h"];
        if MARK_ESCAPES.iter().any(|e| self.cursor.starts_with(pos, e)) {
            return true;
        }
        self.script.has_rule(Rule::Nukta)
            && self.cursor.char_at(pos) == Some('.')
            && longest_match(self.cursor, pos, &self.script.tables.nukta_consonants).is_some()
    }

    fn whitespace(&mut self, c: char) -> Option<usize> {
        if !c.is_whitespace() {
            return None;
        }
        let mut buf = [0u8; 4];
        self.boundary(c.encode_utf8(&mut buf), 1)
    }

    fn chandrabindu(&mut self, pos: usize) -> Option<usize> {
        if !(self.cursor.starts_with(pos, ".N") || self.cursor.starts_with(pos, "MM")) {
            return None;
        }
        self.out.push_str(self.script.chandrabindu_glyph());
        if self.state.is_pending() {
            self.state.vowel_sign();
        }
        Some(2)
    }

    fn anusvara(&mut self, pos: usize, c: char) -> Option<usize> {
        let consumed = if self.cursor.starts_with(pos, ".n") || self.cursor.starts_with(pos, ".m")
        {
            2
        } else if matches!(c, 'M' | 'ṃ' | 'ṁ') && self.state.has_vowel {
            1
        } else {
            return None;
        };
        self.out.push_str(self.script.marks.anusvara);
        self.state.reset();
        Some(consumed)
    }

    fn visarga(&mut self, pos: usize, c: char) -> Option<usize> {
        let consumed = if self.cursor.starts_with(pos, ".h") {
            2
        } else if matches!(c, 'H' | 'ḥ') && self.state.has_vowel {
            1
        } else {
            return None;
        };
        self.out.push_str(self.script.marks.visarga);
        self.state.reset();
        Some(consumed)
    }

    /// `r` between a vowel and a consonant becomes the repha, which belongs
    /// to the following cluster rather than to a syllable of its own.
    fn repha(&mut self, pos: usize, c: char) -> Option<usize> {
        let glyph = self.script.marks.repha?;
        if c != 'r' || !self.state.has_vowel || !self.starts_consonant(pos + 1) {
            return None;
        }
        self.out.push_str(glyph);
        self.state.reset();
        Some(1)
    }

    /// `r` directly after a pending consonant becomes the rakar sign. The
    /// syllable resolves with the inherent vowel when no sign follows.
    fn rakar(&mut self, pos: usize, c: char) -> Option<usize> {
        let glyph = self.script.marks.rakar?;
        if c != 'r' || !self.state.is_pending() {
            return None;
        }
        self.out.push_str(glyph);
        let vowel = self.consume_vowel(pos + 1);
        if vowel == 0 {
            self.state.vowel_sign();
        }
        Some(1 + vowel)
    }

    /// Shared path for conjunct, nukta and plain consonants. `nukta` is
    /// `Some(glyph)` on the nukta path, where `glyph` may itself be absent.
    fn consonant_from(
        &mut self,
        pos: usize,
        table: &MappingTable,
        nukta: Option<Option<&'static str>>,
    ) -> Option<usize> {
        let m = longest_match(self.cursor, pos, table)?;
        self.kill_pending(Kill::BeforeConsonant);
        self.out.push_str(m.value);
        if let Some(Some(sign)) = nukta {
            self.out.push_str(sign);
        }
        self.state.consonant();
        Some(m.consumed + self.consume_vowel(pos + m.consumed))
    }

    /// Attach a vowel sign after a consonant; returns chars consumed.
    ///
    /// `aa`, `ai` and `au` are sign-table keys, so the longest match wins
    /// over a lone `a`. A lone `a` is the inherent vowel in an abugida and
    /// is consumed silently; alphabetic scripts list it as a real letter.
    fn consume_vowel(&mut self, pos: usize) -> usize {
        if let Some(m) = longest_match(self.cursor, pos, &self.script.tables.matras) {
            self.out.push_str(m.value);
            self.state.vowel_sign();
            return m.consumed;
        }
        if !self.script.is_alphabetic() && self.cursor.char_at(pos) == Some('a') {
            self.state.vowel_sign();
            return 1;
        }
        0
    }

    fn vowel(&mut self, pos: usize) -> Option<usize> {
        let m = longest_match(self.cursor, pos, &self.script.tables.vowels)?;
        self.kill_pending(Kill::Terminal);
        self.out.push_str(m.value);
        self.state.independent_vowel();
        Some(m.consumed)
    }

    fn starts_consonant(&self, pos: usize) -> bool {
        let tables = &self.script.tables;
        [&tables.conjuncts, &tables.nukta_consonants, &tables.consonants]
            .into_iter()
            .any(|t| longest_match(self.cursor, pos, t).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_means_consonant_without_vowel() {
        let mut s = Syllable::default();
        assert!(!s.is_pending());
        s.consonant();
        assert!(s.is_pending());
        s.vowel_sign();
        assert!(!s.is_pending());
        s.independent_vowel();
        assert!(!s.has_consonant && s.has_vowel);
        s.reset();
        assert_eq!(s, Syllable::default());
    }
}
