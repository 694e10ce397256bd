use std::sync::{Arc, Mutex};

use preftui::prefs::{Preferences, PreferencesSink};

/// Sink that records every submitted snapshot for later inspection.
/// Clone the handle before boxing it into the app.
#[derive(Clone, Default)]
pub struct RecordingSink {
    submitted: Arc<Mutex<Vec<Preferences>>>,
}

impl RecordingSink {
    pub fn submitted(&self) -> Vec<Preferences> {
        self.submitted.lock().expect("sink lock poisoned").clone()
    }
}

impl PreferencesSink for RecordingSink {
    fn submit(&mut self, snapshot: &Preferences) {
        self.submitted
            .lock()
            .expect("sink lock poisoned")
            .push(snapshot.clone());
    }
}
