use super::trie::{RomajiTrie, TrieLookupResult};

pub struct RomajiConvertResult {
    /// Converted output. May contain latin characters that did not map.
    pub kana: String,
    /// Unconsumed tail of the input, always a suffix of it.
    pub pending: String,
}

pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// What the head of the remaining input resolves to.
enum Unit {
    /// Kana produced and the number of input chars it consumed.
    Kana(String, usize),
    /// A single char that cannot start any mapping; passed through.
    Literal(char),
    /// The head may still grow into a longer mapping.
    Incomplete,
}

/// Convert romaji to kana.
///
/// With `flush == false`, a head that could still extend into a longer
/// mapping ("k", "sh", a bare "n") is left in `pending`. With `flush == true`
/// everything is consumed: a trailing "n" becomes ん and unfinished romaji is
/// passed through as latin.
///
/// Input is lowercased first.
pub fn convert_romaji(input: &str, flush: bool) -> RomajiConvertResult {
    convert_with(RomajiTrie::global(), input, flush)
}

fn convert_with(trie: &RomajiTrie, input: &str, flush: bool) -> RomajiConvertResult {
    let chars: Vec<char> = input.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut kana = String::new();
    let mut rest = chars.as_slice();

    while !rest.is_empty() {
        match next_unit(trie, rest, flush) {
            Unit::Kana(text, used) => {
                kana.push_str(&text);
                rest = &rest[used..];
            }
            Unit::Literal(c) => {
                kana.push(c);
                rest = &rest[1..];
            }
            Unit::Incomplete => break,
        }
    }

    RomajiConvertResult {
        kana,
        pending: rest.iter().collect(),
    }
}

fn next_unit(trie: &RomajiTrie, rest: &[char], flush: bool) -> Unit {
    match trie.lookup_chars(rest) {
        TrieLookupResult::Exact(kana) => return Unit::Kana(kana, rest.len()),
        TrieLookupResult::ExactAndPrefix(kana) if flush => return Unit::Kana(kana, rest.len()),
        TrieLookupResult::ExactAndPrefix(_) => return Unit::Incomplete,
        TrieLookupResult::Prefix if !flush => return Unit::Incomplete,
        TrieLookupResult::Prefix | TrieLookupResult::None => {}
    }

    // No key starts with the whole of `rest`, so more input cannot help the
    // head. Take the longest proper prefix that maps to something.
    for len in (1..rest.len()).rev() {
        if let Some(kana) = trie.value_of(&rest[..len]) {
            return Unit::Kana(kana.to_string(), len);
        }
    }

    match rest {
        [first, second, ..] if first == second && is_consonant(*first) && *first != 'n' => {
            Unit::Kana("っ".to_string(), 1)
        }
        ['n', next, ..] if !is_vowel(*next) && *next != 'n' && *next != 'y' => {
            Unit::Kana("ん".to_string(), 1)
        }
        ['n'] if flush => Unit::Kana("ん".to_string(), 1),
        [c, ..] => Unit::Literal(*c),
        [] => Unit::Incomplete,
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str, flush: bool) -> (String, String) {
        let r = convert_romaji(input, flush);
        (r.kana, r.pending)
    }

    #[test]
    fn test_basic_ka() {
        assert_eq!(convert("ka", false), ("か".into(), "".into()));
    }

    #[test]
    fn test_consonant_waits() {
        assert_eq!(convert("k", false), ("".into(), "k".into()));
        assert_eq!(convert("sh", false), ("".into(), "sh".into()));
    }

    #[test]
    fn test_consonant_flushes_as_latin() {
        assert_eq!(convert("k", true), ("k".into(), "".into()));
        assert_eq!(convert("ky", true), ("ky".into(), "".into()));
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(convert("kk", false), ("っ".into(), "k".into()));
        assert_eq!(convert("kka", false), ("っか".into(), "".into()));
    }

    #[test]
    fn test_no_sokuon_for_digits() {
        assert_eq!(convert("11", true), ("11".into(), "".into()));
    }

    #[test]
    fn test_hatsuon_before_consonant() {
        assert_eq!(convert("nk", false), ("ん".into(), "k".into()));
        assert_eq!(convert("kanji", false), ("かんじ".into(), "".into()));
    }

    #[test]
    fn test_bare_n() {
        assert_eq!(convert("n", false), ("".into(), "n".into()));
        assert_eq!(convert("n", true), ("ん".into(), "".into()));
        assert_eq!(convert("kon", true), ("こん".into(), "".into()));
    }

    #[test]
    fn test_double_n() {
        assert_eq!(convert("nn", false), ("ん".into(), "".into()));
        assert_eq!(convert("nna", false), ("んあ".into(), "".into()));
    }

    #[test]
    fn test_ny_waits_for_youon() {
        assert_eq!(convert("ny", false), ("".into(), "ny".into()));
        assert_eq!(convert("nya", false), ("にゃ".into(), "".into()));
    }

    #[test]
    fn test_words() {
        assert_eq!(convert("kyouha", false), ("きょうは".into(), "".into()));
        // "nn" is always ん, so an explicit third n is needed before a vowel.
        assert_eq!(convert("konnichiha", false), ("こんいちは".into(), "".into()));
        assert_eq!(convert("konnnichiha", false), ("こんにちは".into(), "".into()));
        assert_eq!(convert("shinbun", true), ("しんぶん".into(), "".into()));
    }

    #[test]
    fn test_uppercase_is_lowered() {
        assert_eq!(convert("KA", false), ("か".into(), "".into()));
    }

    #[test]
    fn test_unknown_char_passes_through() {
        assert_eq!(convert("1", false), ("1".into(), "".into()));
        assert_eq!(convert("ka1", false), ("か1".into(), "".into()));
    }

    #[test]
    fn test_dead_head_is_released() {
        // "c" + "hy" cannot form a key, but "hy" can still become ひゃ.
        assert_eq!(convert("chy", false), ("c".into(), "hy".into()));
    }

    #[test]
    fn test_standalone_table() {
        let trie = RomajiTrie::from_pairs([("ka", "カ"), ("kya", "キャ")]);
        let r = convert_with(&trie, "kaky", false);
        assert_eq!((r.kana.as_str(), r.pending.as_str()), ("カ", "ky"));
        let r = convert_with(&trie, "kaky", true);
        assert_eq!(r.kana, "カky");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(convert("ka.", false), ("か。".into(), "".into()));
        assert_eq!(convert("-", false), ("ー".into(), "".into()));
    }
}
