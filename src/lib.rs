pub mod cli;
pub mod logging;
pub mod prefs;
pub mod ui;
