use crate::prefs::{AccentColor, Language, ThemeMode, ToggleId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace the language field.
    SetLanguage(Language),
    /// Replace the theme field.
    SetTheme(ThemeMode),
    /// Replace the accent field.
    SetAccent(AccentColor),
    /// Replace one boolean row.
    SetToggle(ToggleId, bool),
    /// Invert one boolean row.
    FlipToggle(ToggleId),
    /// Restore the full default record.
    Reset,
    FocusNext,
    FocusPrev,
    /// Cycle the focused row's value forward.
    OptionNext,
    /// Cycle the focused row's value backward.
    OptionPrev,
    /// Flip the focused toggle, or cycle the focused selector forward.
    Activate,
    /// The snapshot was handed to the sink; clear the dirty flag.
    MarkSaved,
}

impl Intent for FormIntent {}
