//! Logging for optional documents before their default is substituted.

use crate::domain::LoadOutcome;
use tracing::{debug, warn};

/// Absent documents are normal on first run; corrupt ones are worth a warning.
pub(crate) fn report<T>(document: &str, outcome: &LoadOutcome<T>) {
    match outcome {
        LoadOutcome::Loaded(_) => {}
        LoadOutcome::Absent => debug!(document, "document absent, using default"),
        LoadOutcome::Corrupt(detail) => {
            warn!(document, detail = %detail, "document unreadable, using default")
        }
        LoadOutcome::Mismatch(detail) => {
            warn!(document, detail = %detail, "document has unexpected shape, using default")
        }
    }
}
