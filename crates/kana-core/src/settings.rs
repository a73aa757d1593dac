//! Plugin settings loaded from TOML.
//!
//! - Defaults are embedded via `include_str!("default_settings.toml")`
//! - `load_merged(saved)` deep-merges a saved blob over the defaults
//! - `to_toml()` serializes the full settings back for saving

use serde::{Deserialize, Serialize};

use crate::phonetic::{ConvertOptions, Script};
use crate::unicode::is_kana_char;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("TOML serialize error: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub indicator: IndicatorSettings,
    pub conversion: ConversionSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndicatorSettings {
    pub on_label: String,
    pub off_label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConversionSettings {
    pub word_space: String,
    pub script: Script,
    pub reset_on_toggle: bool,
}

impl Settings {
    /// The embedded defaults.
    pub fn defaults() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            // validate() guarantees exactly one char
            word_space: self.conversion.word_space.chars().next().unwrap_or('\u{3000}'),
            script: self.conversion.script,
        }
    }

    pub fn indicator_label(&self, enabled: bool) -> &str {
        if enabled {
            &self.indicator.on_label
        } else {
            &self.indicator.off_label
        }
    }

    /// Check the values the plugin relies on. Run before saving as well as
    /// after loading.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate(self)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }
}

/// Parse a complete settings document.
pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

/// Parse a saved (possibly partial) blob and merge it over the defaults.
/// Keys the defaults do not know are ignored.
pub fn load_merged(saved: &str) -> Result<Settings, SettingsError> {
    let mut base: toml::Table = DEFAULT_SETTINGS_TOML
        .parse()
        .map_err(|e: toml::de::Error| SettingsError::Parse(e.to_string()))?;
    let overlay: toml::Table = saved
        .parse()
        .map_err(|e: toml::de::Error| SettingsError::Parse(e.to_string()))?;
    merge_tables(&mut base, overlay);

    let s: Settings = toml::Value::Table(base)
        .try_into()
        .map_err(|e: toml::de::Error| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(dst)), toml::Value::Table(src)) => merge_tables(dst, src),
            (Some(slot), value) => *slot = value,
            (None, _) => {}
        }
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(indicator.on_label);
    check_non_empty!(indicator.off_label);
    if s.indicator.on_label == s.indicator.off_label {
        return Err(SettingsError::InvalidValue {
            field: "indicator.off_label".to_string(),
            reason: "must differ from indicator.on_label".to_string(),
        });
    }

    // A space commits only if its glyph passes the target-script check.
    let mut glyph = s.conversion.word_space.chars();
    let reason = match (glyph.next(), glyph.next()) {
        (Some(c), None) if is_kana_char(c) => None,
        (Some(_), None) => Some("must be kana or CJK punctuation"),
        _ => Some("must be exactly one character"),
    };
    if let Some(reason) = reason {
        return Err(SettingsError::InvalidValue {
            field: "conversion.word_space".to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(())
}
