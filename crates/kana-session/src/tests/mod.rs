
use crate::{Position, Replacement, Transliterator};

/// Minimal document that only grows at the end, like a user typing.
#[derive(Default)]
pub(super) struct Doc {
    pub text: String,
}

impl Doc {
    pub fn cursor(&self) -> Position {
        let line = self.text.matches('\n').count();
        let last = self.text.rsplit('\n').next().unwrap_or("");
        Position::new(line, last.chars().count())
    }

    fn byte_offset(&self, pos: Position) -> usize {
        let line_start: usize = self
            .text
            .split('\n')
            .take(pos.line)
            .map(|l| l.len() + 1)
            .sum();
        let line = self.text[line_start..].split('\n').next().unwrap_or("");
        line_start
            + line
                .char_indices()
                .nth(pos.ch)
                .map(|(i, _)| i)
                .unwrap_or(line.len())
    }

    pub fn apply(&mut self, r: &Replacement) {
        let from = self.byte_offset(r.from);
        let to = self.byte_offset(r.to);
        self.text.replace_range(from..to, &r.text);
    }
}

/// Enabled session with the default converter and an empty document.
pub(super) fn enabled_session() -> (Transliterator, Doc) {
    let mut t = Transliterator::new(Default::default());
    t.set_enabled(true);
    (t, Doc::default())
}

/// Type `s` one character at a time, applying replacements like the host.
pub(super) fn type_string(t: &mut Transliterator, doc: &mut Doc, s: &str) -> Vec<Replacement> {
    let mut applied = Vec::new();
    for ch in s.chars() {
        doc.text.push(ch);
        if let Some(r) = t.handle_change(&doc.text, doc.cursor()) {
            doc.apply(&r);
            t.observe(&doc.text);
            applied.push(r);
        }
    }
    applied
}
