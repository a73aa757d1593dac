//! The editor-facing plugin: toggle command, status indicator, and one
//! transliteration session per open document.

use std::collections::HashMap;

use kana_core::settings::{load_merged, Settings};
use kana_session::{Replacement, Transliterator};
use tracing::{debug, debug_span};

use crate::editor::Editor;
use crate::store::{SettingsStore, StoreError};

/// Stable identifier of the toggle command.
pub const COMMAND_ID: &str = "live-translate-switch";
/// Display name of the toggle command.
pub const COMMAND_NAME: &str = "activate live translate";

pub struct LivePlugin<S: SettingsStore> {
    store: S,
    settings: Settings,
    enabled: bool,
    sessions: HashMap<String, Transliterator>,
}

impl<S: SettingsStore> LivePlugin<S> {
    /// Load settings (merged over defaults) and start disabled.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let settings = match store.load()? {
            Some(blob) => load_merged(&blob)?,
            None => Settings::defaults(),
        };
        Ok(Self {
            store,
            settings,
            enabled: false,
            sessions: HashMap::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Persist new settings. Invalid settings are rejected before anything
    /// is saved. Open sessions are rebuilt with the new options and lose
    /// their pending buffers.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), StoreError> {
        settings.validate()?;
        self.store.save(&settings.to_toml()?)?;
        self.settings = settings;
        for session in self.sessions.values_mut() {
            let mut rebuilt = Transliterator::from_settings(&self.settings);
            rebuilt.observe(session.previous_content());
            rebuilt.set_enabled(self.enabled);
            *session = rebuilt;
        }
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Status bar text for the current toggle state.
    pub fn indicator_text(&self) -> &str {
        self.settings.indicator_label(self.enabled)
    }

    /// Run a command by id. Returns false for unknown ids.
    pub fn run_command(&mut self, id: &str) -> bool {
        if id != COMMAND_ID {
            return false;
        }
        self.toggle();
        true
    }

    /// Click on the status indicator.
    pub fn click_indicator(&mut self) {
        self.toggle();
    }

    /// Flip the toggle for every session. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        for session in self.sessions.values_mut() {
            session.set_enabled(self.enabled);
        }
        debug!(enabled = self.enabled, "toggle");
        self.enabled
    }

    /// A document was opened: remember its current content.
    pub fn on_file_open(&mut self, doc_id: &str, editor: &dyn Editor) {
        let content = editor.value();
        self.session_mut(doc_id).observe(&content);
    }

    pub fn on_file_close(&mut self, doc_id: &str) {
        self.sessions.remove(doc_id);
    }

    /// A document changed. Applies at most one replacement to `editor` and
    /// returns it.
    pub fn on_editor_change(&mut self, doc_id: &str, editor: &mut dyn Editor) -> Option<Replacement> {
        let _span = debug_span!("on_editor_change", doc_id).entered();
        let content = editor.value();
        let cursor = editor.cursor();
        let session = self.session_mut(doc_id);
        let replacement = session.handle_change(&content, cursor)?;

        let line_len = editor
            .line(replacement.to.line)
            .map(|l| l.chars().count())
            .unwrap_or(0);
        if replacement.to.ch > line_len {
            debug!(line_len, to = replacement.to.ch, "replacement past line end, dropped");
            return None;
        }

        editor.replace_range(&replacement.text, replacement.from, replacement.to);
        // Our own edit must not look like typed input on the next change.
        session.observe(&editor.value());
        Some(replacement)
    }

    pub fn session(&self, doc_id: &str) -> Option<&Transliterator> {
        self.sessions.get(doc_id)
    }

    fn session_mut(&mut self, doc_id: &str) -> &mut Transliterator {
        let settings = &self.settings;
        let enabled = self.enabled;
        self.sessions.entry(doc_id.to_string()).or_insert_with(|| {
            let mut session = Transliterator::from_settings(settings);
            session.set_enabled(enabled);
            session
        })
    }
}
