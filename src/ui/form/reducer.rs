use crate::prefs::{AccentColor, Language, Preferences, ThemeMode};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FieldRow, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut next = state;
        match intent {
            FormIntent::SetLanguage(value) => {
                next.prefs.set_language(value);
                mark_edited(&mut next);
            }
            FormIntent::SetTheme(value) => {
                next.prefs.set_theme(value);
                mark_edited(&mut next);
            }
            FormIntent::SetAccent(value) => {
                next.prefs.set_accent(value);
                mark_edited(&mut next);
            }
            FormIntent::SetToggle(id, value) => {
                next.prefs.set_toggle(id, value);
                mark_edited(&mut next);
            }
            FormIntent::FlipToggle(id) => {
                next.prefs.flip_toggle(id);
                mark_edited(&mut next);
            }
            FormIntent::Reset => {
                next.prefs = Preferences::default();
                next.dirty = false;
                next.saved = false;
            }
            FormIntent::FocusNext => {
                next.focused = cycle(FieldRow::all(), next.focused, true);
            }
            FormIntent::FocusPrev => {
                next.focused = cycle(FieldRow::all(), next.focused, false);
            }
            FormIntent::OptionNext => cycle_value(&mut next, true),
            FormIntent::OptionPrev => cycle_value(&mut next, false),
            FormIntent::Activate => match next.focused {
                FieldRow::Toggle(id) => {
                    next.prefs.flip_toggle(id);
                    mark_edited(&mut next);
                }
                _ => cycle_value(&mut next, true),
            },
            FormIntent::MarkSaved => {
                next.dirty = false;
                next.saved = true;
            }
        }
        next
    }
}

fn mark_edited(state: &mut FormState) {
    state.dirty = true;
    state.saved = false;
}

/// Cycle the focused row's value one step, wrapping at either end.
fn cycle_value(state: &mut FormState, forward: bool) {
    match state.focused {
        FieldRow::Language => {
            let value = cycle(Language::all(), state.prefs.language, forward);
            state.prefs.set_language(value);
        }
        FieldRow::Theme => {
            let value = cycle(ThemeMode::all(), state.prefs.theme, forward);
            state.prefs.set_theme(value);
        }
        FieldRow::Accent => {
            let value = cycle(AccentColor::all(), state.prefs.accent, forward);
            state.prefs.set_accent(value);
        }
        FieldRow::Toggle(id) => {
            state.prefs.flip_toggle(id);
        }
    }
    mark_edited(state);
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, forward: bool) -> T {
    let index = items.iter().position(|item| *item == current).unwrap_or(0);
    let len = items.len();
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    items[next]
}
