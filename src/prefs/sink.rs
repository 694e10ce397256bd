use crate::prefs::model::Preferences;

/// External consumer of a submitted preferences snapshot.
///
/// Submission is fire-and-forget from the form's point of view: the sink
/// owns its own failure handling, so the trait exposes no error path.
pub trait PreferencesSink {
    fn submit(&mut self, snapshot: &Preferences);
}

/// Reference sink: serializes the snapshot and emits it through `tracing`.
pub struct LogSink;

impl PreferencesSink for LogSink {
    fn submit(&mut self, snapshot: &Preferences) {
        match serde_json::to_string(snapshot) {
            Ok(json) => tracing::info!(target: "prefs", %json, "preferences saved"),
            Err(err) => tracing::error!(target: "prefs", %err, "snapshot serialization failed"),
        }
    }
}
