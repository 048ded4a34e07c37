//! Snapshot assembly over one session.
//!
//! 1. `serverinfo` under [`RequestId::SERVER_INFO`]
//! 2. `status` under [`RequestId::STATUS`]
//! 3. Parse both, merge, close the session
//!
//! The two requests run one after the other. Both must succeed; there are
//! no partial snapshots.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::error::Result;
use crate::identifiers::RequestId;
use crate::protocol::Command;
use crate::status::{parse_players, parse_server_info, parse_status_meta};
use crate::transport::Session;

use super::merge::merge;
use super::model::ServerSnapshot;

// ============================================================================
// Assembly
// ============================================================================

/// Polls one snapshot over `session`, then closes it.
///
/// The session is closed on every path, including request failures.
///
/// # Errors
///
/// Returns the first request error unchanged
/// ([`Error::RequestTimeout`](crate::Error::RequestTimeout),
/// [`Error::ConnectionClosed`](crate::Error::ConnectionClosed), ...).
pub async fn poll_session(session: Session) -> Result<ServerSnapshot> {
    let result = request_replies(&session).await;
    session.close().await;

    let (server_info_raw, status_raw) = result?;
    Ok(assemble(&server_info_raw, status_raw))
}

/// Builds a snapshot from the raw `serverinfo` and `status` bodies.
#[must_use]
pub fn assemble(server_info_raw: &str, status_raw: String) -> ServerSnapshot {
    let structured = if looks_structured(server_info_raw) {
        parse_server_info(server_info_raw)
    } else {
        None
    };

    let meta = parse_status_meta(&status_raw);
    let players = parse_players(&status_raw);

    debug!(
        structured = structured.is_some(),
        players = players.len(),
        "Assembling snapshot"
    );

    merge(structured, meta, players, status_raw)
}

async fn request_replies(session: &Session) -> Result<(String, String)> {
    let server_info_raw = session
        .send(RequestId::SERVER_INFO, &Command::ServerInfo)
        .await?;
    let status_raw = session.send(RequestId::STATUS, &Command::Status).await?;

    Ok((server_info_raw, status_raw))
}

/// `true` when the first non-whitespace character is `{`.
fn looks_structured(body: &str) -> bool {
    body.trim_start().starts_with('{')
}

// ============================================================================
// Tests
// ============================================================================
