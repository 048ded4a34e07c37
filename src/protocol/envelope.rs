//! WebRCON message envelope.
//!
//! Every request and reply is one WebSocket text frame holding a JSON
//! object with the keys `Identifier`, `Message`, `Name` and `Type`.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::identifiers::RequestId;

use super::Command;

// ============================================================================
// Constants
// ============================================================================

/// Label sent in the `Name` field of outgoing requests.
pub const DEFAULT_NAME: &str = "WebRcon";

/// Label sent in the `Type` field of outgoing requests.
pub const DEFAULT_TYPE: &str = "Generic";

// ============================================================================
// Envelope
// ============================================================================

/// One WebRCON message, in either direction.
///
/// # Format
///
/// ```json
/// {
///   "Identifier": 1,
///   "Message": "serverinfo",
///   "Name": "WebRcon",
///   "Type": "Generic"
/// }
/// ```
///
/// Replies only need `Identifier`. The server adds keys such as
/// `Stacktrace`, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope {
    /// Correlation identifier.
    pub identifier: RequestId,

    /// Console command (request) or console output (reply).
    #[serde(default)]
    pub message: String,

    /// Free-form sender label.
    #[serde(default)]
    pub name: String,

    /// Free-form message type label (`Generic`, `Chat`, `Warning`, ...).
    #[serde(default, rename = "Type")]
    pub kind: String,
}

impl Envelope {
    /// Builds the request envelope for `command`.
    #[inline]
    #[must_use]
    pub fn request(id: RequestId, command: &Command) -> Self {
        Self {
            identifier: id,
            message: command.as_str().to_string(),
            name: DEFAULT_NAME.to_string(),
            kind: DEFAULT_TYPE.to_string(),
        }
    }

    /// Parses an incoming text frame.
    ///
    /// Returns `None` for anything that is not a well-formed envelope.
    #[inline]
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let envelope = Envelope::request(RequestId::SERVER_INFO, &Command::ServerInfo);
        let json = serde_json::to_string(&envelope).expect("serialize");
        assert_eq!(
            json,
            r#"{"Identifier":1,"Message":"serverinfo","Name":"WebRcon","Type":"Generic"}"#
        );
    }

    #[test]
    fn test_reply_parse() {
        let text = r#"{
            "Message": "hostname: Box",
            "Identifier": 2,
            "Type": "Generic",
            "Stacktrace": ""
        }"#;

        let envelope = Envelope::parse(text).expect("parse");
        assert_eq!(envelope.identifier, RequestId::STATUS);
        assert_eq!(envelope.message, "hostname: Box");
        assert_eq!(envelope.kind, "Generic");
        assert!(envelope.name.is_empty());
    }

    #[test]
    fn test_reply_without_message_is_empty() {
        let envelope = Envelope::parse(r#"{"Identifier": 7}"#).expect("parse");
        assert_eq!(envelope.identifier, RequestId::new(7));
        assert!(envelope.message.is_empty());
    }

    #[test]
    fn test_malformed_frames_are_rejected() {
        assert!(Envelope::parse("not json").is_none());
        assert!(Envelope::parse("[1, 2]").is_none());
        assert!(Envelope::parse(r#"{"Message": "no id"}"#).is_none());
        assert!(Envelope::parse(r#"{"Identifier": "one"}"#).is_none());
    }
}
