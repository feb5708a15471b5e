//! Script definitions: one data value per target script.
//!
//! All scripts run the same syllable state machine. What differs is the
//! tables, the mark glyphs, and the order in which the per-position rules
//! are tried, so each of those is a field here.

use std::sync::OnceLock;

use crate::tables::{self, ScriptTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Consonants carry an inherent vowel; dead consonants take a virama.
    Abugida,
    /// Every vowel is written; there is no virama.
    Alphabetic,
}

/// One rule of the per-position precedence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Digit,
    Punctuation,
    Whitespace,
    Chandrabindu,
    Anusvara,
    Visarga,
    Repha,
    Rakar,
    Conjunct,
    Nukta,
    Consonant,
    Vowel,
}

/// Mark glyphs for a script. `None` means the script has no such sign.
#[derive(Debug, Clone, Copy)]
pub struct Marks {
    pub anusvara: &'static str,
    pub visarga: &'static str,
    pub chandrabindu: Option<&'static str>,
    /// Virama written between a dead consonant and the next consonant.
    pub virama: Option<&'static str>,
    /// Visible killer written on a dead consonant before anything else.
    pub halanta: Option<&'static str>,
    pub nukta: Option<&'static str>,
    pub repha: Option<&'static str>,
    pub rakar: Option<&'static str>,
}

#[derive(Debug)]
pub struct ScriptDefinition {
    pub name: &'static str,
    pub kind: ScriptKind,
    pub tables: ScriptTables,
    pub marks: Marks,
    /// Rules tried at each input position, first hit wins.
    pub rules: &'static [Rule],
    /// Withhold a trailing halanta while the caller is still composing.
    pub withhold_halanta_while_composing: bool,
}

impl ScriptDefinition {
    pub fn is_alphabetic(&self) -> bool {
        self.kind == ScriptKind::Alphabetic
    }

    pub fn supports_repha(&self) -> bool {
        self.marks.repha.is_some() && self.rules.contains(&Rule::Repha)
    }

    pub fn supports_rakar(&self) -> bool {
        self.marks.rakar.is_some() && self.rules.contains(&Rule::Rakar)
    }

    pub fn nukta_glyph(&self) -> Option<&'static str> {
        self.marks.nukta
    }

    /// Chandrabindu, or anusvara where the script has no chandrabindu.
    pub fn chandrabindu_glyph(&self) -> &'static str {
        self.marks.chandrabindu.unwrap_or(self.marks.anusvara)
    }

    pub fn has_rule(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }
}

pub fn masaram_gondi() -> &'static ScriptDefinition {
    static DEF: OnceLock<ScriptDefinition> = OnceLock::new();
    DEF.get_or_init(|| ScriptDefinition {
        name: "Masaram Gondi",
        kind: ScriptKind::Abugida,
        tables: ScriptTables::from_data(&tables::masaram::DATA),
        marks: tables::masaram::MARKS,
        rules: tables::masaram::RULES,
        withhold_halanta_while_composing: true,
    })
}

pub fn gunjala_gondi() -> &'static ScriptDefinition {
    static DEF: OnceLock<ScriptDefinition> = OnceLock::new();
    DEF.get_or_init(|| ScriptDefinition {
        name: "Gunjala Gondi",
        kind: ScriptKind::Abugida,
        tables: ScriptTables::from_data(&tables::gunjala::DATA),
        marks: tables::gunjala::MARKS,
        rules: tables::gunjala::RULES,
        withhold_halanta_while_composing: true,
    })
}

pub fn ol_chiki() -> &'static ScriptDefinition {
    static DEF: OnceLock<ScriptDefinition> = OnceLock::new();
    DEF.get_or_init(|| ScriptDefinition {
        name: "Ol Chiki",
        kind: ScriptKind::Alphabetic,
        tables: ScriptTables::from_data(&tables::ol_chiki::DATA),
        marks: tables::ol_chiki::MARKS,
        rules: tables::ol_chiki::RULES,
        withhold_halanta_while_composing: false,
    })
}

pub fn devanagari() -> &'static ScriptDefinition {
    static DEF: OnceLock<ScriptDefinition> = OnceLock::new();
    DEF.get_or_init(|| ScriptDefinition {
        name: "Devanagari",
        kind: ScriptKind::Abugida,
        tables: ScriptTables::from_data(&tables::devanagari::DATA),
        marks: tables::devanagari::MARKS,
        rules: tables::devanagari::RULES,
        withhold_halanta_while_composing: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_masaram_supports_repha_and_rakar() {
        assert!(masaram_gondi().supports_repha());
        assert!(masaram_gondi().supports_rakar());
        for def in [gunjala_gondi(), ol_chiki(), devanagari()] {
            assert!(!def.supports_repha(), "{}", def.name);
            assert!(!def.supports_rakar(), "{}", def.name);
        }
    }

    #[test]
    fn masaram_tries_repha_before_nukta() {
        let rules = masaram_gondi().rules;
        let pos = |r| rules.iter().position(|x| *x == r).unwrap();
        assert!(pos(Rule::Repha) < pos(Rule::Rakar));
        assert!(pos(Rule::Rakar) < pos(Rule::Nukta));
        assert!(pos(Rule::Nukta) < pos(Rule::Consonant));
    }

    #[test]
    fn devanagari_tries_conjuncts_first() {
        let rules = devanagari().rules;
        let pos = |r| rules.iter().position(|x| *x == r).unwrap();
        assert!(pos(Rule::Conjunct) < pos(Rule::Nukta));
        assert!(pos(Rule::Conjunct) < pos(Rule::Consonant));
        assert!(!devanagari().has_rule(Rule::Repha));
    }

    #[test]
    fn ol_chiki_has_no_virama_nukta_or_r_forms() {
        let def = ol_chiki();
        assert!(def.is_alphabetic());
        assert!(def.marks.virama.is_none());
        assert!(def.marks.halanta.is_none());
        for rule in [Rule::Repha, Rule::Rakar, Rule::Nukta, Rule::Conjunct] {
            assert!(!def.has_rule(rule), "{rule:?}");
        }
    }

    #[test]
    fn every_script_ends_with_consonant_then_vowel() {
        for def in [masaram_gondi(), gunjala_gondi(), ol_chiki(), devanagari()] {
            let n = def.rules.len();
            assert_eq!(&def.rules[n - 2..], &[Rule::Consonant, Rule::Vowel]);
            assert_eq!(def.rules[0], Rule::Digit);
        }
    }

    #[test]
    fn gunjala_chandrabindu_falls_back_to_anusvara() {
        let def = gunjala_gondi();
        assert_eq!(def.chandrabindu_glyph(), def.marks.anusvara);
        assert_eq!(masaram_gondi().chandrabindu_glyph(), "\u{11D43}");
    }
}
