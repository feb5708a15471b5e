//! Immutable per-script lookup tables.
//!
//! Each script module declares its data as `(key, value)` arrays keyed by
//! the shared romanization scheme. The arrays are indexed into
//! [`MappingTable`]s once, when the owning [`ScriptDefinition`] is first
//! requested, and never mutated afterwards.
//!
//! [`ScriptDefinition`]: crate::script::ScriptDefinition

pub(crate) mod devanagari;
pub(crate) mod gunjala;
pub(crate) mod masaram;
pub(crate) mod ol_chiki;

use std::collections::HashMap;

/// Raw `(key, value)` pairs backing one table.
pub type Pairs = &'static [(&'static str, &'static str)];

/// String-to-string lookup with a bounded key length.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<&'static str, &'static str>,
    /// Longest key, in chars.
    max_key_len: usize,
}

impl MappingTable {
    /// Index `pairs`. When a key repeats, the first occurrence wins.
    pub fn new(pairs: Pairs) -> Self {
        let mut table = Self::default();
        for &(key, value) in pairs {
            table.insert(key, value);
        }
        table
    }

    /// Build a table from `source`'s values to `target`'s values, joining
    /// on their shared romanization key. Keys missing from `target` are
    /// skipped; the first source key wins for repeated values.
    pub fn join(source: Pairs, target: &MappingTable) -> Self {
        let mut table = Self::default();
        for &(key, source_value) in source {
            if let Some(target_value) = target.get(key) {
                table.insert(source_value, target_value);
            }
        }
        table
    }

    fn insert(&mut self, key: &'static str, value: &'static str) {
        if let std::collections::hash_map::Entry::Vacant(slot) = self.entries.entry(key) {
            slot.insert(value);
            self.max_key_len = self.max_key_len.max(key.chars().count());
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw data for one script, as declared in its module.
pub(crate) struct ScriptData {
    pub vowels: Pairs,
    pub matras: Pairs,
    pub consonants: Pairs,
    /// Nukta keys mapped to the *base* consonant; the engine appends the
    /// script's nukta sign.
    pub nukta_consonants: Pairs,
    pub conjuncts: Pairs,
    pub digits: Pairs,
    pub punctuation: Pairs,
}

/// Indexed tables for one script.
#[derive(Debug, Clone)]
pub struct ScriptTables {
    /// Independent vowels.
    pub vowels: MappingTable,
    /// Dependent vowel signs. Abugidas have no entry for the inherent `a`.
    pub matras: MappingTable,
    pub consonants: MappingTable,
    pub nukta_consonants: MappingTable,
    /// Fixed multi-consonant clusters matched ahead of plain consonants.
    pub conjuncts: MappingTable,
    pub digits: MappingTable,
    pub punctuation: MappingTable,
}

impl ScriptTables {
    pub(crate) fn from_data(data: &ScriptData) -> Self {
        Self {
            vowels: MappingTable::new(data.vowels),
            matras: MappingTable::new(data.matras),
            consonants: MappingTable::new(data.consonants),
            nukta_consonants: MappingTable::new(data.nukta_consonants),
            conjuncts: MappingTable::new(data.conjuncts),
            digits: MappingTable::new(data.digits),
            punctuation: MappingTable::new(data.punctuation),
        }
    }
}

/// Sentence punctuation for scripts written with the Devanagari danda.
pub(crate) const DANDA_PUNCTUATION: Pairs = &[
    (".", "\u{0964}"),
    ("..", "\u{0965}"),
    ("...", "\u{2026}"),
    ("|", "\u{0964}"),
    ("||", "\u{0965}"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_data() -> [(&'static str, &'static ScriptData); 4] {
        [
            ("masaram", &masaram::DATA),
            ("gunjala", &gunjala::DATA),
            ("ol_chiki", &ol_chiki::DATA),
            ("devanagari", &devanagari::DATA),
        ]
    }

    fn pairs_of(data: &ScriptData) -> [(&'static str, Pairs); 7] {
        [
            ("vowels", data.vowels),
            ("matras", data.matras),
            ("consonants", data.consonants),
            ("nukta_consonants", data.nukta_consonants),
            ("conjuncts", data.conjuncts),
            ("digits", data.digits),
            ("punctuation", data.punctuation),
        ]
    }

    #[test]
    fn keys_are_unique_within_each_table() {
        for (script, data) in all_data() {
            for (table, pairs) in pairs_of(data) {
                let mut seen = HashSet::new();
                for (key, _) in pairs {
                    assert!(seen.insert(*key), "{script}.{table}: duplicate key {key:?}");
                }
            }
        }
    }

    #[test]
    fn keys_and_values_are_non_empty_and_bounded() {
        for (script, data) in all_data() {
            for (table, pairs) in pairs_of(data) {
                for (key, value) in pairs {
                    assert!(!key.is_empty(), "{script}.{table}: empty key");
                    assert!(!value.is_empty(), "{script}.{table}: empty value for {key:?}");
                    assert!(
                        key.chars().count() <= 5,
                        "{script}.{table}: key {key:?} longer than 5"
                    );
                }
            }
        }
    }

    #[test]
    fn every_script_maps_all_ten_digits() {
        for (script, data) in all_data() {
            let table = MappingTable::new(data.digits);
            for d in '0'..='9' {
                assert!(table.contains_key(&d.to_string()), "{script}: digit {d}");
            }
        }
    }

    #[test]
    fn max_key_len_tracks_longest_key() {
        let table = MappingTable::new(&[("k", "x"), ("ksh", "y"), ("kh", "z")]);
        assert_eq!(table.max_key_len(), 3);
        assert_eq!(table.len(), 3);
        assert_eq!(MappingTable::default().max_key_len(), 0);
    }

    #[test]
    fn first_key_wins_on_repeat() {
        let table = MappingTable::new(&[("a", "1"), ("a", "2")]);
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn max_key_len_counts_chars_not_bytes() {
        let table = MappingTable::new(&[("\u{0915}\u{094D}\u{0937}", "x")]);
        assert_eq!(table.max_key_len(), 3);
    }

    #[test]
    fn join_maps_source_values_to_target_values() {
        let target = MappingTable::new(&[("k", "K"), ("g", "G")]);
        let joined = MappingTable::join(&[("k", "क"), ("c", "च"), ("g", "ग")], &target);
        assert_eq!(joined.get("क"), Some("K"));
        assert_eq!(joined.get("ग"), Some("G"));
        assert_eq!(joined.get("च"), None);
        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn abugida_matras_have_no_inherent_vowel() {
        for data in [&masaram::DATA, &gunjala::DATA, &devanagari::DATA] {
            assert!(!MappingTable::new(data.matras).contains_key("a"));
        }
        assert!(MappingTable::new(ol_chiki::DATA.matras).contains_key("a"));
    }
}
