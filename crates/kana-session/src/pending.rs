use kana_core::romaji::is_vowel;
use kana_core::PhoneticConverter;
use tracing::debug;

use crate::diff::{classify, InputClass};
use crate::types::{Phase, Position, Replacement, NASAL};

/// Per-document transliteration state.
///
/// Invariants after every [`feed`](Self::feed):
/// - `pending` holds no whitespace and spans the last
///   `pending.chars().count()` characters before the cursor. After a
///   lookahead join the first of those is the committed ん standing for "n".
/// - `lookahead` implies `pending` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationState {
    pub(crate) enabled: bool,
    pub(crate) pending: String,
    pub(crate) lookahead: bool,
}

impl Default for TransliterationState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransliterationState {
    /// Disabled, idle state. The toggle starts off.
    pub fn new() -> Self {
        Self {
            enabled: false,
            pending: String::new(),
            lookahead: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn lookahead_pending(&self) -> bool {
        self.lookahead
    }

    pub fn phase(&self) -> Phase {
        if self.lookahead {
            Phase::AwaitingLookahead
        } else if self.pending.is_empty() {
            Phase::Idle
        } else {
            Phase::Accumulating
        }
    }

    /// Drop the pending buffer and the lookahead flag.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.lookahead = false;
    }

    /// Flip the toggle. With `reset`, in-flight state is dropped so a stale
    /// buffer cannot be converted after re-enabling.
    pub fn set_enabled(&mut self, enabled: bool, reset: bool) {
        if reset {
            self.reset();
        }
        self.enabled = enabled;
    }

    /// Feed newly appended text typed at `cursor` (the position after it).
    pub fn feed<C: PhoneticConverter + ?Sized>(
        &mut self,
        diff: &str,
        cursor: Position,
        conv: &C,
    ) -> Option<Replacement> {
        if !self.enabled || diff.is_empty() {
            return None;
        }

        let class = classify(diff);
        if class == InputClass::Boundary {
            debug!(pending = %self.pending, "boundary, reset");
            self.reset();
            return None;
        }

        if std::mem::take(&mut self.lookahead) {
            self.pending = resolve_lookahead(diff);
        } else {
            self.pending.push_str(diff);
        }

        self.attempt(class, cursor, conv)
    }
}

/// Pure form of [`TransliterationState::feed`].
pub fn transition<C: PhoneticConverter + ?Sized>(
    state: &TransliterationState,
    diff: &str,
    cursor: Position,
    conv: &C,
) -> (TransliterationState, Option<Replacement>) {
    let mut next = state.clone();
    let replacement = next.feed(diff, cursor, conv);
    (next, replacement)
}

/// The new buffer when a ん is waiting on `diff`.
///
/// A vowel, "y", or a second "n" joins the committed nasal, whose ん then
/// counts as the buffer's leading "n" and is replaced along with it. "ny"
/// stays pending until the vowel of にゃ/にゅ/にょ arrives. Anything else
/// leaves ん alone.
fn resolve_lookahead(diff: &str) -> String {
    let mut chars = diff.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if joins_nasal(c.to_ascii_lowercase()) => format!("{NASAL}{c}"),
        _ => diff.to_string(),
    }
}

fn joins_nasal(c: char) -> bool {
    is_vowel(c) || c == NASAL || c == 'y'
}

/// Whether committed romaji ended in a lone "n" that was read as ん.
/// "nn" and "xn" are explicit and need no lookahead.
pub(crate) fn ends_with_bare_nasal(romaji: &str) -> bool {
    let mut rev = romaji.chars().rev().map(|c| c.to_ascii_lowercase());
    match (rev.next(), rev.next()) {
        (Some(NASAL), None) => true,
        (Some(NASAL), Some(prev)) => prev != NASAL && prev != 'x',
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_vowel_glide_and_geminate() {
        assert_eq!(resolve_lookahead("a"), "na");
        assert_eq!(resolve_lookahead("O"), "nO");
        assert_eq!(resolve_lookahead("n"), "nn");
        assert_eq!(resolve_lookahead("k"), "k");
        assert_eq!(resolve_lookahead("y"), "ny");
        assert_eq!(resolve_lookahead("Y"), "nY");
        assert_eq!(resolve_lookahead("ai"), "ai");
    }

    #[test]
    fn bare_nasal_detection() {
        assert!(ends_with_bare_nasal("n"));
        assert!(ends_with_bare_nasal("kan"));
        assert!(ends_with_bare_nasal("KAN"));
        assert!(!ends_with_bare_nasal("nn"));
        assert!(!ends_with_bare_nasal("xn"));
        assert!(!ends_with_bare_nasal("n'"));
        assert!(!ends_with_bare_nasal("na"));
        assert!(!ends_with_bare_nasal(""));
    }

    #[test]
    fn phase_follows_fields() {
        let mut s = TransliterationState::new();
        assert_eq!(s.phase(), Phase::Idle);
        s.pending.push('k');
        assert_eq!(s.phase(), Phase::Accumulating);
        s.pending.clear();
        s.lookahead = true;
        assert_eq!(s.phase(), Phase::AwaitingLookahead);
        s.reset();
        assert_eq!(s.phase(), Phase::Idle);
    }
}
