//! Real-time transliteration of romanized keystrokes into Brahmic scripts.
//!
//! The engine is a table-driven syllable state machine shared by every
//! target script. Each [`Mode`] selects a [`ScriptDefinition`] (tables,
//! marks and an explicit rule precedence) and, for Devanagari input, the
//! Devanagari-source path. [`Transliterator`] wraps an engine with a bounded
//! LRU cache so that re-running the whole composing buffer on every
//! keystroke stays cheap.

pub mod cache;
pub mod devanagari_source;
pub mod mode;
pub mod script;
pub mod settings;
pub(crate) mod syllable;
pub mod tables;
pub mod tokenizer;
pub mod transliterator;
pub mod unicode;
pub mod variants;

pub use cache::ResultCache;
pub use mode::{Mode, ModeError};
pub use script::{Marks, Rule, ScriptDefinition, ScriptKind};
pub use tables::MappingTable;
pub use transliterator::Transliterator;
