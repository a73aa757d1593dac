use std::fs;
use std::io::{self, BufRead};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kana_core::PhoneticConverter;
use kana_live::{LivePlugin, MemorySettingsStore, StoreError, TextBuffer};
use kana_session::Transliterator;

const DOC_ID: &str = "kanatool";

/// One keystroke and what the session did with it.
#[derive(Debug, Serialize)]
pub struct Step {
    pub key: String,
    pub text: String,
    pub replaced: Option<Replaced>,
    pub phase: String,
    pub pending: String,
}

#[derive(Debug, Serialize)]
pub struct Replaced {
    pub line: usize,
    pub from: usize,
    pub to: usize,
    pub text: String,
}

fn enabled_plugin(settings_blob: Option<&str>) -> Result<LivePlugin<MemorySettingsStore>, StoreError> {
    let store = match settings_blob {
        Some(blob) => MemorySettingsStore::with_blob(blob),
        None => MemorySettingsStore::default(),
    };
    let mut plugin = LivePlugin::load(store)?;
    plugin.toggle();
    Ok(plugin)
}

/// Type `input` key by key into an empty document with the plugin enabled.
pub fn simulate(input: &str, settings_blob: Option<&str>) -> Result<Vec<Step>, StoreError> {
    let mut plugin = enabled_plugin(settings_blob)?;
    let mut buf = TextBuffer::default();
    plugin.on_file_open(DOC_ID, &buf);

    let mut steps = Vec::new();
    for ch in input.chars() {
        buf.insert(&ch.to_string());
        let replaced = plugin.on_editor_change(DOC_ID, &mut buf).map(|r| Replaced {
            line: r.from.line,
            from: r.from.ch,
            to: r.to.ch,
            text: r.text,
        });
        let (phase, pending) = match plugin.session(DOC_ID) {
            Some(s) => (format!("{:?}", s.phase()), s.state().pending().to_string()),
            None => (String::new(), String::new()),
        };
        steps.push(Step {
            key: ch.escape_debug().to_string(),
            text: buf.text().to_string(),
            replaced,
            phase,
            pending,
        });
    }
    Ok(steps)
}

fn read_settings(file: Option<&str>) -> Option<String> {
    file.map(|f| die!(fs::read_to_string(f), "Error reading {f}: {}"))
}

pub fn type_text(input: &str, settings_file: Option<&str>, json: bool, show_steps: bool) {
    let blob = read_settings(settings_file);
    let steps = die!(simulate(input, blob.as_deref()), "Error: {}");

    if json {
        let out = die!(serde_json::to_string_pretty(&steps), "Error: {}");
        println!("{out}");
        return;
    }

    if show_steps {
        let width = steps
            .iter()
            .map(|s| UnicodeWidthStr::width(s.text.as_str()))
            .max()
            .unwrap_or(0);
        for s in &steps {
            let pad = width - UnicodeWidthStr::width(s.text.as_str());
            let replaced = match &s.replaced {
                Some(r) => format!("{}:{}..{} -> {}", r.line, r.from, r.to, r.text),
                None => "-".to_string(),
            };
            println!(
                "{:>4}  {}{}  {:<18} {:<8} {}",
                s.key,
                s.text.replace('\n', "⏎"),
                " ".repeat(pad),
                s.phase,
                s.pending,
                replaced
            );
        }
        return;
    }

    if let Some(last) = steps.last() {
        println!("{}", last.text);
    }
}

pub fn convert(input: &str, settings_file: Option<&str>) {
    let blob = read_settings(settings_file).unwrap_or_default();
    let settings = die!(kana_core::settings::load_merged(&blob), "Error: {}");
    let session = Transliterator::from_settings(&settings);
    let conv = session.converter();
    let out = conv.convert(input);
    let valid = conv.is_target_script(&out);
    println!("{out}\t{}", if valid { "kana" } else { "mixed" });
}

/// Read lines from stdin and type them (with their line breaks) into one
/// document, printing the converted text of each line.
pub fn interactive(settings_file: Option<&str>) {
    let blob = read_settings(settings_file);
    let mut plugin = die!(enabled_plugin(blob.as_deref()), "Error: {}");
    let mut buf = TextBuffer::default();
    plugin.on_file_open(DOC_ID, &buf);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        for ch in line.chars().chain(std::iter::once('\n')) {
            buf.insert(&ch.to_string());
            plugin.on_editor_change(DOC_ID, &mut buf);
        }
        let cursor_line = buf.text().matches('\n').count().saturating_sub(1);
        if let Some(converted) = buf.text().split('\n').nth(cursor_line) {
            println!("{converted}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_records_each_key() {
        let steps = simulate("kan", None).unwrap();
        assert_eq!(steps.len(), 3);
        assert!(steps[0].replaced.is_none());
        assert_eq!(steps[0].pending, "k");
        assert_eq!(steps[1].text, "か");
        assert_eq!(steps[2].text, "かん");
        assert_eq!(steps[2].phase, "AwaitingLookahead");
    }

    #[test]
    fn simulate_with_settings() {
        let steps = simulate("a i", Some("[conversion]\nscript = \"katakana\"\n")).unwrap();
        assert_eq!(steps.last().unwrap().text, "ア\u{3000}イ");
    }

    #[test]
    fn simulate_rejects_bad_settings() {
        assert!(simulate("a", Some("[indicator]\non_label = \"\"\n")).is_err());
    }

    #[test]
    fn steps_serialize_to_json() {
        let steps = simulate("ka", None).unwrap();
        let json = serde_json::to_value(&steps).unwrap();
        assert_eq!(json[1]["replaced"]["text"], "か");
        assert_eq!(json[1]["replaced"]["from"], 0);
    }
}
