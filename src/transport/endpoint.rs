//! Remote console endpoint and URI construction.
//!
//! WebRCON authenticates through the request path rather than a header:
//!
//! ```text
//! ws://<host>:<port>/<url-encoded credential>
//! ```
//!
//! The credential is percent-encoded so reserved characters (`/`, `?`,
//! `#`, `%`, spaces) reach the server intact.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Scheme
// ============================================================================

/// WebSocket scheme used to reach the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    /// Plain `ws://`.
    #[default]
    Ws,
    /// TLS `wss://` (needs the `tls` feature).
    Wss,
}

impl Scheme {
    /// Returns the URI scheme string.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ws => "ws",
            Self::Wss => "wss",
        }
    }
}

// ============================================================================
// Endpoint
// ============================================================================

/// Address and credential of a remote console.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    credential: String,
    scheme: Scheme,
}

impl Endpoint {
    /// Creates a plain `ws://` endpoint.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, credential: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            credential: credential.into(),
            scheme: Scheme::Ws,
        }
    }

    /// Sets the scheme.
    #[inline]
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns `host:port`, safe for logs and error messages.
    #[must_use]
    pub fn authority(&self) -> String {
        format!("{}:{}", self.uri_host(), self.port)
    }

    /// Builds the connection URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the host does not form a valid URI.
    pub fn url(&self) -> Result<Url> {
        let raw = format!(
            "{}://{}/{}",
            self.scheme.as_str(),
            self.authority(),
            urlencoding::encode(&self.credential)
        );

        let url = Url::parse(&raw)
            .map_err(|e| Error::config(format!("Invalid RCON host {:?}: {e}", self.host)))?;

        if url.port_or_known_default() != Some(self.port) {
            return Err(Error::config(format!(
                "Invalid RCON host {:?}: port does not survive URI parsing",
                self.host
            )));
        }

        Ok(url)
    }

    /// Host as it appears in a URI (IPv6 literals are bracketed).
    fn uri_host(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("credential", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
