use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when an out-of-set value reaches a preference boundary
/// (CLI flags are the only string input today).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefParseError {
    #[error("unknown language '{0}' (expected English, Español, Português or Français)")]
    Language(String),
    #[error("unknown theme '{0}' (expected auto, light or dark)")]
    Theme(String),
    #[error("accent '{0}' is not in the palette (try a palette hex like #a855f7, or a name like violet)")]
    Accent(String),
}

/// Platform language selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    English,
    #[serde(rename = "Español")]
    Espanol,
    #[serde(rename = "Português")]
    Portugues,
    #[serde(rename = "Français")]
    Frances,
}

impl Language {
    /// All variants, in selector order.
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Espanol, Self::Portugues, Self::Frances]
    }

    /// Display label, as shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Espanol => "Español",
            Self::Portugues => "Português",
            Self::Frances => "Français",
        }
    }
}

impl FromStr for Language {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the display label and an accent-free ASCII spelling.
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Self::English),
            "español" | "espanol" => Ok(Self::Espanol),
            "português" | "portugues" => Ok(Self::Portugues),
            "français" | "francais" => Ok(Self::Frances),
            _ => Err(PrefParseError::Language(s.to_string())),
        }
    }
}

/// Interface theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// All variants, in picker order.
    pub fn all() -> &'static [ThemeMode] {
        &[Self::Auto, Self::Light, Self::Dark]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(PrefParseError::Theme(s.to_string())),
        }
    }
}

/// Accent color, restricted to the fixed 6-entry palette.
///
/// Keeping this an enum (rather than a free-form hex string) makes
/// out-of-palette values unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Orange,
    Red,
    Green,
    Cyan,
    Violet,
    Pink,
}

impl AccentColor {
    /// All palette entries, in swatch order.
    pub fn all() -> &'static [AccentColor] {
        &[
            Self::Orange,
            Self::Red,
            Self::Green,
            Self::Cyan,
            Self::Violet,
            Self::Pink,
        ]
    }

    /// The exact palette hex string this entry stands for.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
            Self::Green => "#22c55e",
            Self::Cyan => "#06b6d4",
            Self::Violet => "#a855f7",
            Self::Pink => "#ec4899",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Violet => "violet",
            Self::Pink => "pink",
        }
    }
}

impl Serialize for AccentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

impl FromStr for AccentColor {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        for entry in Self::all() {
            if wanted == entry.hex() || wanted == entry.label() {
                return Ok(*entry);
            }
        }
        Err(PrefParseError::Accent(s.to_string()))
    }
}

/// Identifier for the boolean preference rows.
///
/// The three switches share one get/set/flip surface keyed by this id, so
/// adding a toggle means one variant here plus a label/description below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleId {
    ReduceMotion,
    AutoPlay,
    HqPhoto,
}

impl ToggleId {
    /// All toggles, in form order.
    pub fn all() -> &'static [ToggleId] {
        &[Self::ReduceMotion, Self::AutoPlay, Self::HqPhoto]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReduceMotion => "Reduce motion",
            Self::AutoPlay => "Auto play",
            Self::HqPhoto => "High quality photo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ReduceMotion => "Minimize interface animation",
            Self::AutoPlay => "Play media automatically",
            Self::HqPhoto => "Prefer full resolution images",
        }
    }
}

/// The appearance preferences record.
///
/// Field order matters for the serialized snapshot handed to the sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: ThemeMode,
    pub accent: AccentColor,
    pub reduce_motion: bool,
    pub auto_play: bool,
    pub hq_photo: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::English,
            theme: ThemeMode::Light,
            accent: AccentColor::Violet,
            reduce_motion: true,
            auto_play: true,
            hq_photo: false,
        }
    }
}

impl Preferences {
    /// Replace the language field, leaving everything else untouched.
    pub fn set_language(&mut self, value: Language) {
        self.language = value;
    }

    /// Replace the theme field, leaving everything else untouched.
    pub fn set_theme(&mut self, value: ThemeMode) {
        self.theme = value;
    }

    /// Replace the accent field, leaving everything else untouched.
    pub fn set_accent(&mut self, value: AccentColor) {
        self.accent = value;
    }

    /// Current value of one boolean row.
    pub fn toggle(&self, id: ToggleId) -> bool {
        match id {
            ToggleId::ReduceMotion => self.reduce_motion,
            ToggleId::AutoPlay => self.auto_play,
            ToggleId::HqPhoto => self.hq_photo,
        }
    }

    /// Replace one boolean row, leaving everything else untouched.
    pub fn set_toggle(&mut self, id: ToggleId, value: bool) {
        match id {
            ToggleId::ReduceMotion => self.reduce_motion = value,
            ToggleId::AutoPlay => self.auto_play = value,
            ToggleId::HqPhoto => self.hq_photo = value,
        }
    }

    /// Invert one boolean row.
    pub fn flip_toggle(&mut self, id: ToggleId) {
        let current = self.toggle(id);
        self.set_toggle(id, !current);
    }

    /// Restore the full default record. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
