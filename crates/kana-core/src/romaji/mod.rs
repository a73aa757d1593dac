//! Romaji-to-kana conversion.
//!
//! A trie built from a TOML table resolves romaji sequences greedily.
//! Sokuon (っ) and hatsuon (ん) are derived from the input shape rather
//! than from table entries.

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{convert_romaji, is_vowel, RomajiConvertResult};
pub use trie::{RomajiTrie, TrieLookupResult};

/// Returns the embedded default romaji table.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
