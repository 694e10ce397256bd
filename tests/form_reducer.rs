use preftui::prefs::{AccentColor, Language, Preferences, ThemeMode, ToggleId};
use preftui::ui::form::{FieldRow, FormIntent, FormReducer, FormState};
use preftui::ui::mvi::Reducer;

fn reduce(state: FormState, intent: FormIntent) -> FormState {
    FormReducer::reduce(state, intent)
}

// -- Setter isolation: each intent sets exactly its field ---------------------

#[test]
fn set_language_leaves_other_fields_unchanged() {
    let state = reduce(
        FormState::default(),
        FormIntent::SetLanguage(Language::Frances),
    );
    let expected = Preferences {
        language: Language::Frances,
        ..Preferences::default()
    };
    assert_eq!(state.prefs, expected);
}

#[test]
fn set_theme_leaves_other_fields_unchanged() {
    let state = reduce(FormState::default(), FormIntent::SetTheme(ThemeMode::Dark));
    let expected = Preferences {
        theme: ThemeMode::Dark,
        ..Preferences::default()
    };
    assert_eq!(state.prefs, expected);
}

#[test]
fn set_accent_leaves_other_fields_unchanged() {
    let state = reduce(
        FormState::default(),
        FormIntent::SetAccent(AccentColor::Green),
    );
    let expected = Preferences {
        accent: AccentColor::Green,
        ..Preferences::default()
    };
    assert_eq!(state.prefs, expected);
}

#[test]
fn set_toggle_leaves_other_fields_unchanged() {
    let state = reduce(
        FormState::default(),
        FormIntent::SetToggle(ToggleId::HqPhoto, true),
    );
    let expected = Preferences {
        hq_photo: true,
        ..Preferences::default()
    };
    assert_eq!(state.prefs, expected);
}

#[test]
fn setters_mark_state_dirty() {
    let state = reduce(FormState::default(), FormIntent::SetTheme(ThemeMode::Auto));
    assert!(state.dirty);
    assert!(!state.saved);
}

// -- Reset --------------------------------------------------------------------

#[test]
fn reset_restores_the_full_default_record() {
    let mut state = FormState::default();
    state = reduce(state, FormIntent::SetLanguage(Language::Espanol));
    state = reduce(state, FormIntent::SetTheme(ThemeMode::Dark));
    state = reduce(state, FormIntent::SetAccent(AccentColor::Pink));
    state = reduce(state, FormIntent::FlipToggle(ToggleId::ReduceMotion));
    state = reduce(state, FormIntent::Reset);
    assert_eq!(state.prefs, Preferences::default());
    assert!(!state.dirty);
}

#[test]
fn reset_is_idempotent() {
    let edited = reduce(FormState::default(), FormIntent::SetTheme(ThemeMode::Dark));
    let once = reduce(edited, FormIntent::Reset);
    let twice = reduce(once.clone(), FormIntent::Reset);
    assert_eq!(once, twice);
}

#[test]
fn set_dark_then_reset_scenario() {
    let state = reduce(FormState::default(), FormIntent::SetTheme(ThemeMode::Dark));
    assert_eq!(state.prefs.theme, ThemeMode::Dark);
    assert_eq!(state.prefs.language, Language::English);
    assert_eq!(state.prefs.accent, AccentColor::Violet);

    let state = reduce(state, FormIntent::Reset);
    assert_eq!(state.prefs, Preferences::default());
}

// -- Focus navigation ---------------------------------------------------------

#[test]
fn focus_next_walks_rows_in_order() {
    let mut state = FormState::default();
    assert_eq!(state.focused, FieldRow::Language);
    state = reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FieldRow::Theme);
    state = reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FieldRow::Accent);
    state = reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FieldRow::Toggle(ToggleId::ReduceMotion));
}

#[test]
fn focus_wraps_at_both_ends() {
    let state = reduce(FormState::default(), FormIntent::FocusPrev);
    assert_eq!(state.focused, FieldRow::Toggle(ToggleId::HqPhoto));
    let state = reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FieldRow::Language);
}

#[test]
fn focus_moves_do_not_touch_the_record_or_dirty_flag() {
    let state = reduce(FormState::default(), FormIntent::FocusNext);
    assert_eq!(state.prefs, Preferences::default());
    assert!(!state.dirty);
}

// -- Option cycling -----------------------------------------------------------

#[test]
fn option_next_cycles_the_focused_selector() {
    let mut state = FormState::default();
    state.focused = FieldRow::Theme;
    let state = reduce(state, FormIntent::OptionNext);
    assert_eq!(state.prefs.theme, ThemeMode::Dark);
}

#[test]
fn option_cycling_wraps_the_palette() {
    let mut state = FormState::default();
    state.focused = FieldRow::Accent;
    state.prefs.set_accent(AccentColor::Pink);
    let state = reduce(state, FormIntent::OptionNext);
    assert_eq!(state.prefs.accent, AccentColor::Orange);

    let state = reduce(state, FormIntent::OptionPrev);
    assert_eq!(state.prefs.accent, AccentColor::Pink);
}

#[test]
fn activate_flips_the_focused_toggle() {
    let mut state = FormState::default();
    state.focused = FieldRow::Toggle(ToggleId::AutoPlay);
    let state = reduce(state, FormIntent::Activate);
    assert!(!state.prefs.auto_play, "auto_play defaults to true");
    let state = reduce(state, FormIntent::Activate);
    assert!(state.prefs.auto_play);
}

// -- MarkSaved ----------------------------------------------------------------

#[test]
fn mark_saved_clears_dirty_and_sets_saved() {
    let state = reduce(FormState::default(), FormIntent::SetTheme(ThemeMode::Dark));
    let state = reduce(state, FormIntent::MarkSaved);
    assert!(!state.dirty);
    assert!(state.saved);
    // The record itself is untouched.
    assert_eq!(state.prefs.theme, ThemeMode::Dark);
}

#[test]
fn edit_after_save_clears_the_saved_marker() {
    let state = reduce(FormState::default(), FormIntent::MarkSaved);
    let state = reduce(state, FormIntent::SetAccent(AccentColor::Cyan));
    assert!(!state.saved);
    assert!(state.dirty);
}
