//! The appearance preferences record and its external boundary.

mod model;
mod sink;

pub use model::{AccentColor, Language, PrefParseError, Preferences, ThemeMode, ToggleId};
pub use sink::{LogSink, PreferencesSink};
