//! Loading and checking a romaji table.
//!
//! A table is a `[mappings]` section of `romaji = "kana"` pairs. The session
//! only commits text that passes the target-script check, so every value
//! must be kana, and every key must be reachable from lowercased typing.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_kana_text;

#[derive(Deserialize)]
struct RomajiTable {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },
    #[error("value for {key:?} is not kana: {value:?}")]
    NonKanaValue { key: String, value: String },
    #[error("romaji trie already initialized")]
    AlreadyInitialized,
}

/// Parse a table into `romaji -> kana` pairs, sorted by romaji.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let table: RomajiTable =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if table.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }
    for (romaji, kana) in &table.mappings {
        check_key(romaji)?;
        if !is_kana_text(kana) {
            return Err(RomajiConfigError::NonKanaValue {
                key: romaji.clone(),
                value: kana.clone(),
            });
        }
    }
    Ok(table.mappings)
}

fn check_key(romaji: &str) -> Result<(), RomajiConfigError> {
    let reason = if romaji.is_empty() {
        "empty"
    } else if !romaji.chars().all(|c| c.is_ascii_graphic()) {
        // Whitespace ends the word before it reaches the table.
        "only printable ASCII without spaces"
    } else if romaji.chars().any(|c| c.is_ascii_uppercase()) {
        // Typed input is lowercased before lookup.
        "uppercase never matches"
    } else {
        return Ok(());
    };
    Err(RomajiConfigError::InvalidKey {
        key: romaji.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_key(toml: &str) -> String {
        match parse_romaji_toml(toml) {
            Err(RomajiConfigError::InvalidKey { key, .. }) => key,
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn parse_small_table() {
        let map = parse_romaji_toml("[mappings]\nka = \"か\"\n\"-\" = \"ー\"\n").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["ka"], "か");
        assert_eq!(map["-"], "ー");
    }

    #[test]
    fn embedded_table() {
        let map = parse_romaji_toml(super::super::default_toml()).unwrap();
        assert!(map.len() > 250, "expected 250+ mappings, got {}", map.len());
        assert_eq!(map["nn"], "ん");
        assert_eq!(map["nya"], "にゃ");
        assert!(!map.contains_key("n"), "bare n is resolved by the converter");
    }

    #[test]
    fn empty_table() {
        let err = parse_romaji_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn rejected_keys() {
        assert_eq!(invalid_key("[mappings]\n\"あ\" = \"あ\"\n"), "あ");
        assert_eq!(invalid_key("[mappings]\n\" \" = \"　\"\n"), " ");
        assert_eq!(invalid_key("[mappings]\n\"k a\" = \"か\"\n"), "k a");
        assert_eq!(invalid_key("[mappings]\n\"\" = \"あ\"\n"), "");
        assert_eq!(invalid_key("[mappings]\nKa = \"か\"\n"), "Ka");
    }

    #[test]
    fn value_must_be_kana() {
        for value in ["", "ka", "か1"] {
            let toml = format!("[mappings]\nka = \"{value}\"\n");
            let err = parse_romaji_toml(&toml).unwrap_err();
            assert!(
                matches!(err, RomajiConfigError::NonKanaValue { .. }),
                "value {value:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
