use crate::prefs::{Preferences, ToggleId};
use crate::ui::mvi::UiState;

/// One focusable row of the form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRow {
    #[default]
    Language,
    Theme,
    Accent,
    Toggle(ToggleId),
}

impl FieldRow {
    /// All rows, top to bottom.
    pub fn all() -> &'static [FieldRow] {
        &[
            Self::Language,
            Self::Theme,
            Self::Accent,
            Self::Toggle(ToggleId::ReduceMotion),
            Self::Toggle(ToggleId::AutoPlay),
            Self::Toggle(ToggleId::HqPhoto),
        ]
    }
}

/// The form's entire state: the preferences record plus presentation-local
/// bookkeeping. The form has no terminal state — it always accepts further
/// mutation or submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub prefs: Preferences,
    pub focused: FieldRow,
    /// Edited since the last save or reset.
    pub dirty: bool,
    /// Last action was a save; cleared by the next edit or reset.
    pub saved: bool,
}

impl UiState for FormState {}

impl FormState {
    /// Start from a seeded record (CLI flags may pre-set fields).
    pub fn with_prefs(prefs: Preferences) -> Self {
        Self {
            prefs,
            ..Self::default()
        }
    }
}
