//! Live romaji-to-kana input for a text editor.
//!
//! The host wires its document events to [`LivePlugin`]: file-open,
//! editor-change, the toggle command, and clicks on the status indicator.
//! Conversion itself lives in `kana_session`; romaji tables and settings in
//! `kana_core`.

pub mod editor;
pub mod plugin;
pub mod store;
mod trace_init;

pub use editor::{Editor, TextBuffer};
pub use plugin::{LivePlugin, COMMAND_ID, COMMAND_NAME};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore, StoreError};
pub use trace_init::{init_tracing, TRACE_FILE};

pub use kana_core::settings::Settings;
pub use kana_session::{Position, Replacement};
