//! Character-level Unicode classification for Japanese text.

/// Full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Full Katakana block (U+30A0..U+30FF), including ー and ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Symbols and Punctuation (U+3000..U+303F): 　 、 。 「 」 〜 and friends.
pub fn is_cjk_punctuation(c: char) -> bool {
    ('\u{3000}'..='\u{303F}').contains(&c)
}

/// Fullwidth punctuation the romaji table can emit (！ ？ etc.).
/// Fullwidth digits and latin letters are excluded.
pub fn is_fullwidth_punctuation(c: char) -> bool {
    ('\u{FF01}'..='\u{FF0F}').contains(&c)
        || ('\u{FF1A}'..='\u{FF20}').contains(&c)
        || ('\u{FF3B}'..='\u{FF40}').contains(&c)
        || ('\u{FF5B}'..='\u{FF65}').contains(&c)
}

pub fn is_kana_char(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_cjk_punctuation(c) || is_fullwidth_punctuation(c)
}

/// Whether `s` is entirely made of target-script characters.
///
/// The empty string is not.
pub fn is_kana_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_kana_char)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
