use std::collections::BTreeMap;
use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};
use tracing::debug;

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

/// Romaji keys in a double-array trie. Key ids index `values`.
pub struct RomajiTrie {
    da: DoubleArray<u8>,
    values: Vec<String>,
    max_key_len: usize,
}

impl RomajiTrie {
    /// Install a custom table. Must happen before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTrie {
        static INSTANCE: OnceLock<RomajiTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            // Validated in init_custom; the embedded table is covered by config tests.
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            debug!(
                mappings = map.len(),
                custom = CUSTOM_TOML.get().is_some(),
                "romaji table loaded"
            );
            Self::from_map(&map)
        })
    }

    /// Build a standalone trie, bypassing the global table.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(r, k)| (r.to_string(), k.to_string()))
            .collect();
        Self::from_map(&map)
    }

    fn from_map(map: &BTreeMap<String, String>) -> Self {
        // BTreeMap iterates sorted, which the double-array build requires.
        let keys: Vec<&[u8]> = map.keys().map(|r| r.as_bytes()).collect();
        let values: Vec<String> = map.values().cloned().collect();
        let max_key_len = keys.iter().map(|k| k.len()).max().unwrap_or(0);
        let da = DoubleArray::<u8>::build(&keys);
        RomajiTrie {
            da,
            values,
            max_key_len,
        }
    }

    /// Length of the longest romaji key. Keys are ASCII, so bytes and chars agree.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn lookup(&self, romaji: &str) -> TrieLookupResult {
        if !romaji.is_ascii() {
            return TrieLookupResult::None;
        }
        self.lookup_bytes(romaji.as_bytes())
    }

    pub fn lookup_chars(&self, romaji: &[char]) -> TrieLookupResult {
        match ascii_bytes(romaji) {
            Some(bytes) => self.lookup_bytes(&bytes),
            None => TrieLookupResult::None,
        }
    }

    /// Kana for an exact key, ignoring whether longer keys exist.
    pub(crate) fn value_of(&self, romaji: &[char]) -> Option<&str> {
        let bytes = ascii_bytes(romaji)?;
        let id = self.da.probe(bytes.as_slice()).value?;
        Some(self.values[id as usize].as_str())
    }

    fn lookup_bytes(&self, romaji: &[u8]) -> TrieLookupResult {
        let pr = self.da.probe(romaji);
        match (pr.value, pr.has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(id), false) => TrieLookupResult::Exact(self.values[id as usize].clone()),
            (Some(id), true) => TrieLookupResult::ExactAndPrefix(self.values[id as usize].clone()),
        }
    }
}

/// `None` when any char is outside ASCII; such input can match no key.
fn ascii_bytes(romaji: &[char]) -> Option<Vec<u8>> {
    romaji
        .iter()
        .map(|&c| c.is_ascii().then_some(c as u8))
        .collect()
}
