use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::prefs::{Preferences, PreferencesSink};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

/// Run an intent through the form reducer and store the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the form state and the submission sink.
///
/// Pure transitions go through the reducer; the two side effects the form
/// has (handing a snapshot to the sink, quitting) live here.
pub struct App {
    form: FormState,
    sink: Box<dyn PreferencesSink>,
    should_quit: bool,
}

impl App {
    pub fn new(initial: Preferences, sink: Box<dyn PreferencesSink>) -> Self {
        Self {
            form: FormState::with_prefs(initial),
            sink,
            should_quit: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Hand the current record to the sink, unchanged, then clear the dirty
    /// flag. Never mutates the record and has no failure path.
    pub fn submit(&mut self) {
        let snapshot = self.form.prefs.clone();
        self.sink.submit(&snapshot);
        self.dispatch(FormIntent::MarkSaved);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('c') | KeyCode::Char('q') => self.request_quit(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.dispatch(FormIntent::FocusPrev),
            KeyCode::Down | KeyCode::Tab => self.dispatch(FormIntent::FocusNext),
            KeyCode::Left => self.dispatch(FormIntent::OptionPrev),
            KeyCode::Right => self.dispatch(FormIntent::OptionNext),
            KeyCode::Char(' ') => self.dispatch(FormIntent::Activate),
            KeyCode::Enter | KeyCode::Char('s') => self.submit(),
            KeyCode::Char('r') => self.dispatch(FormIntent::Reset),
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }
}
