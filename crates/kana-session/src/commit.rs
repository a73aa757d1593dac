use kana_core::PhoneticConverter;
use tracing::debug;

use crate::diff::InputClass;
use crate::pending::{ends_with_bare_nasal, TransliterationState};
use crate::types::{Position, Replacement};

impl TransliterationState {
    /// Try to convert the whole buffer and commit it.
    pub(crate) fn attempt<C: PhoneticConverter + ?Sized>(
        &mut self,
        class: InputClass,
        cursor: Position,
        conv: &C,
    ) -> Option<Replacement> {
        let converted = conv.convert(&self.pending);
        if conv.is_target_script(&converted) {
            return self.commit(converted, cursor);
        }

        if class == InputClass::Space {
            // A space that completes nothing ends the word as typed.
            debug!(pending = %self.pending, "space without conversion, reset");
            self.reset();
            return None;
        }

        self.release_dead_head(conv);
        None
    }

    fn commit(&mut self, converted: String, cursor: Position) -> Option<Replacement> {
        let committed = std::mem::take(&mut self.pending);
        // Decided from the buffer as it was before clearing.
        self.lookahead = ends_with_bare_nasal(&committed);

        if converted == committed {
            // Already target script (e.g. typed through an OS IME).
            self.lookahead = false;
            return None;
        }

        let span = committed.chars().count();
        let Some(start) = cursor.ch.checked_sub(span) else {
            debug!(span, ch = cursor.ch, "buffer longer than line, desynced");
            self.reset();
            return None;
        };

        debug!(romaji = %committed, kana = %converted, lookahead = self.lookahead, "commit");
        Some(Replacement {
            from: Position::new(cursor.line, start),
            to: cursor,
            text: converted,
        })
    }

    /// Drop leading characters that can never become target script. They
    /// stay in the document as typed; only the still-open tail is kept.
    fn release_dead_head<C: PhoneticConverter + ?Sized>(&mut self, conv: &C) {
        let (tail, dead) = conv.open_tail(&self.pending);
        let too_long = self.pending.chars().count() > conv.max_unit_len() + 1;
        if dead || too_long {
            debug!(pending = %self.pending, tail = %tail, "release");
            self.pending = tail;
        }
    }
}
