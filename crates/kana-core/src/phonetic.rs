//! The conversion collaborator used by the live session.

use serde::{Deserialize, Serialize};

use crate::romaji::{convert_romaji, RomajiTrie};
use crate::unicode::{hiragana_to_katakana, is_kana_text};

/// Romaji in, target script out.
///
/// Implementations must be pure: the same input always converts the same way.
pub trait PhoneticConverter {
    /// Convert `text` completely, passing through anything that does not map.
    fn convert(&self, text: &str) -> String;

    /// Whether `text` is entirely target script.
    fn is_target_script(&self, text: &str) -> bool;

    /// The still-open tail of `text` once every unit that can no longer
    /// change has been resolved, together with whether any resolved unit
    /// failed to map.
    fn open_tail(&self, text: &str) -> (String, bool);

    /// Upper bound on the romaji length of a single unit.
    fn max_unit_len(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Replacement for a plain U+0020 space.
    pub word_space: char,
    pub script: Script,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            word_space: '\u{3000}',
            script: Script::Hiragana,
        }
    }
}

/// Trie-backed converter over the global romaji table.
#[derive(Debug, Clone, Default)]
pub struct KanaConverter {
    options: ConvertOptions,
}

impl KanaConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl PhoneticConverter for KanaConverter {
    fn convert(&self, text: &str) -> String {
        let kana: String = convert_romaji(text, true)
            .kana
            .chars()
            .map(|c| if c == ' ' { self.options.word_space } else { c })
            .collect();
        match self.options.script {
            Script::Hiragana => kana,
            Script::Katakana => hiragana_to_katakana(&kana),
        }
    }

    fn is_target_script(&self, text: &str) -> bool {
        is_kana_text(text)
    }

    fn open_tail(&self, text: &str) -> (String, bool) {
        let r = convert_romaji(text, false);
        let has_dead = !r.kana.is_empty() && !is_kana_text(&r.kana);
        (r.pending, has_dead)
    }

    fn max_unit_len(&self) -> usize {
        RomajiTrie::global().max_key_len()
    }
}
