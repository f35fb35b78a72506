//! Export Session use case
//!
//! Stamps the current session snapshot with an ISO-8601 UTC timestamp
//! and serializes it for download. The snapshot itself is a pure read,
//! so exporting never disturbs session state.

use crate::ports::content_source::ContentSource;
use crate::session::ModuleSession;
use casewalk_domain::ExportSnapshot;
use chrono::{SecondsFormat, Utc};

/// Build a timestamped export snapshot of the session.
pub fn export_session<C: ContentSource>(session: &ModuleSession<C>) -> ExportSnapshot {
    session.snapshot(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Build the snapshot and serialize it to pretty-printed JSON.
pub fn export_session_json<C: ContentSource>(
    session: &ModuleSession<C>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export_session(session))
}
