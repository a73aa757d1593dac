//! Newly typed text between two document snapshots.

/// How a diff affects the pending buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    /// Romaji, punctuation, or anything else worth converting.
    Text,
    /// Only plain U+0020 spaces. Converted to the word-space glyph.
    Space,
    /// Contains a line break or other non-space whitespace (tab, U+3000, …).
    /// Resets the session without converting.
    Boundary,
}

/// The text appended to `old` to produce `new`, or `""` when `new` is not a
/// strictly longer extension of `old`. Deletions and edits anywhere but the
/// end are not tracked.
pub fn appended<'a>(old: &str, new: &'a str) -> &'a str {
    if new.len() <= old.len() {
        return "";
    }
    new.strip_prefix(old).unwrap_or("")
}

pub fn classify(diff: &str) -> InputClass {
    if diff.chars().any(|c| c.is_whitespace() && c != ' ') {
        InputClass::Boundary
    } else if !diff.is_empty() && diff.chars().all(|c| c == ' ') {
        InputClass::Space
    } else {
        InputClass::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_text() {
        assert_eq!(appended("", "k"), "k");
        assert_eq!(appended("ka", "kak"), "k");
        assert_eq!(appended("か", "かn"), "n");
        assert_eq!(appended("line\n", "line\nabc"), "abc");
    }

    #[test]
    fn not_longer_is_empty() {
        assert_eq!(appended("ka", "ka"), "");
        assert_eq!(appended("kak", "ka"), "");
        assert_eq!(appended("ka", "か"), "");
        assert_eq!(appended("", ""), "");
    }

    #[test]
    fn not_an_extension_is_empty() {
        assert_eq!(appended("ka", "xkak"), "");
        assert_eq!(appended("abc", "abXd"), "");
    }

    #[test]
    fn classify_inputs() {
        assert_eq!(classify("k"), InputClass::Text);
        assert_eq!(classify("ka ki"), InputClass::Text);
        assert_eq!(classify(" "), InputClass::Space);
        assert_eq!(classify("  "), InputClass::Space);
        assert_eq!(classify("\n"), InputClass::Boundary);
        assert_eq!(classify("\r\n"), InputClass::Boundary);
        assert_eq!(classify("\t"), InputClass::Boundary);
        assert_eq!(classify("\u{3000}"), InputClass::Boundary);
        assert_eq!(classify("ka\n"), InputClass::Boundary);
    }
}
