//! Live romaji-to-kana transliteration for a text editor.
//!
//! `Transliterator` follows one document: on every change notification it
//! extracts the newly appended text, feeds it to the pending-buffer state
//! machine, and returns at most one replacement for the host to apply.

mod commit;
mod diff;
mod pending;
mod types;

#[cfg(test)]
mod tests;

use kana_core::settings::Settings;
use kana_core::{KanaConverter, PhoneticConverter};
use tracing::debug_span;

pub use diff::{appended, classify, InputClass};
pub use pending::{transition, TransliterationState};
pub use types::{Phase, Position, Replacement};

/// Session for one open document.
pub struct Transliterator<C = KanaConverter> {
    converter: C,
    state: TransliterationState,
    previous_content: String,
    reset_on_toggle: bool,
}

impl Transliterator<KanaConverter> {
    /// Session configured from plugin settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut t = Self::new(KanaConverter::new(settings.convert_options()));
        t.reset_on_toggle = settings.conversion.reset_on_toggle;
        t
    }
}

impl<C: PhoneticConverter> Transliterator<C> {
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            state: TransliterationState::new(),
            previous_content: String::new(),
            reset_on_toggle: true,
        }
    }

    pub fn set_reset_on_toggle(&mut self, reset: bool) {
        self.reset_on_toggle = reset;
    }

    /// Record the document text without treating it as typed input
    /// (file open, or the host applied our replacement).
    pub fn observe(&mut self, content: &str) {
        self.previous_content.clear();
        self.previous_content.push_str(content);
    }

    /// Handle a change notification. `content` is the full new text and
    /// `cursor` the position after the edit.
    pub fn handle_change(&mut self, content: &str, cursor: Position) -> Option<Replacement> {
        let _span = debug_span!("handle_change", line = cursor.line, ch = cursor.ch).entered();
        let diff = appended(&self.previous_content, content);
        let replacement = self.state.feed(diff, cursor, &self.converter);
        self.observe(content);
        replacement
    }

    /// Flip the toggle and return the new value.
    pub fn toggle(&mut self) -> bool {
        let enabled = !self.state.enabled;
        self.set_enabled(enabled);
        enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.set_enabled(enabled, self.reset_on_toggle);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn state(&self) -> &TransliterationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn previous_content(&self) -> &str {
        &self.previous_content
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }
}
