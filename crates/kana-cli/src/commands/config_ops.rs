use std::fs;

pub fn romaji_export() {
    print!("{}", kana_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(kana_core::romaji::parse_romaji_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(kana_core::settings::load_merged(&content), "Error: {}");
    println!(
        "OK: indicator={:?}/{:?}, word_space={:?}, script={:?}, reset_on_toggle={}",
        s.indicator.on_label,
        s.indicator.off_label,
        s.conversion.word_space,
        s.conversion.script,
        s.conversion.reset_on_toggle
    );
}
