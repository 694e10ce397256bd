use clap::Parser;

use crate::prefs::{AccentColor, Language, Preferences, ThemeMode};

/// Appearance preferences form.
#[derive(Debug, Parser)]
#[command(name = "preftui", version, about)]
pub struct Cli {
    /// Initial language (English, Español, Português, Français).
    #[arg(long)]
    pub language: Option<Language>,

    /// Initial interface theme (auto, light, dark).
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// Initial accent color: a palette hex like "#22c55e" or a name like "green".
    #[arg(long)]
    pub accent: Option<AccentColor>,

    /// Event-loop tick interval in milliseconds.
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,
}

impl Cli {
    /// The default record, overlaid with any seeded fields. Values were
    /// already validated by the `FromStr` impls during parsing.
    pub fn initial_preferences(&self) -> Preferences {
        let mut prefs = Preferences::default();
        if let Some(language) = self.language {
            prefs.set_language(language);
        }
        if let Some(theme) = self.theme {
            prefs.set_theme(theme);
        }
        if let Some(accent) = self.accent {
            prefs.set_accent(accent);
        }
        prefs
    }
}
