use std::fs;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, type_ops};
use kana_core::romaji::RomajiTrie;

#[derive(Parser)]
#[command(name = "kanatool", about = "Live romaji-to-kana diagnostics")]
struct Cli {
    /// Custom romaji table (TOML) replacing the built-in one
    #[arg(long, global = true)]
    romaji: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type romaji key by key into an empty document and show the result
    Type {
        /// Keystrokes to type
        text: String,
        /// Plugin settings file (optional)
        #[arg(long)]
        settings: Option<String>,
        /// Show every keystroke with the replacement it caused
        #[arg(long)]
        steps: bool,
        /// Output the keystroke log as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a whole romaji string at once
    Convert {
        /// Romaji text
        text: String,
        /// Plugin settings file (optional)
        #[arg(long)]
        settings: Option<String>,
    },
    /// Type lines read from stdin and print each converted line
    Interactive {
        /// Plugin settings file (optional)
        #[arg(long)]
        settings: Option<String>,
    },
    /// Print the built-in romaji table
    RomajiExport,
    /// Validate a custom romaji table
    RomajiValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the default plugin settings
    SettingsExport,
    /// Validate a plugin settings file merged over the defaults
    SettingsValidate {
        /// TOML file to validate
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    kana_live::init_tracing(Path::new("."));

    if let Some(path) = &cli.romaji {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {path}: {e}");
            process::exit(1);
        });
        if let Err(e) = RomajiTrie::init_custom(content) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Type {
            text,
            settings,
            steps,
            json,
        } => type_ops::type_text(&text, settings.as_deref(), json, steps),
        Command::Convert { text, settings } => type_ops::convert(&text, settings.as_deref()),
        Command::Interactive { settings } => type_ops::interactive(settings.as_deref()),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
