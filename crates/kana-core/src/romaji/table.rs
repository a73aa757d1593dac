/// Embedded default romaji table.
pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");
