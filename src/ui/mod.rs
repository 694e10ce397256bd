pub mod app;
pub mod events;
pub mod form;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::prefs::{Preferences, PreferencesSink};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};

/// Run the form until the user quits. The terminal guard restores the
/// screen on exit and on panic.
pub fn run(
    initial: Preferences,
    sink: Box<dyn PreferencesSink>,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, _guard) = terminal_guard::setup_terminal()?;
    let mut app = App::new(initial, sink);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            // Tick and Resize only trigger the redraw at the top of the loop.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
