//! Remote console configuration.
//!
//! # Example
//!
//! ```no_run
//! use rcon_snapshot::RconConfig;
//!
//! # fn example() -> rcon_snapshot::Result<()> {
//! let config = RconConfig::builder()
//!     .host("127.0.0.1")
//!     .port(28016)
//!     .credential("password")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::transport::{DEFAULT_HANDSHAKE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, Endpoint, Scheme};

// ============================================================================
// Constants
// ============================================================================

/// Environment variable holding the console host.
pub const ENV_HOST: &str = "RCON_HOST";

/// Environment variable holding the console port.
pub const ENV_PORT: &str = "RCON_PORT";

/// Environment variable holding the console password.
pub const ENV_PASSWORD: &str = "RCON_PASSWORD";

/// Environment variable selecting `wss://` when set to `1`, `true` or `yes`.
pub const ENV_SECURE: &str = "RCON_SECURE";

// ============================================================================
// RconConfig
// ============================================================================

/// Validated connection settings for one remote console.
#[derive(Clone, PartialEq, Eq)]
pub struct RconConfig {
    /// Console host name or IP literal.
    pub host: String,
    /// Console port.
    pub port: u16,
    /// RCON password.
    pub credential: String,
    /// WebSocket scheme.
    pub scheme: Scheme,
    /// Deadline for the WebSocket handshake.
    pub handshake_timeout: Duration,
    /// Deadline for each correlated request.
    pub request_timeout: Duration,
}

impl RconConfig {
    /// Creates a new builder.
    #[inline]
    #[must_use]
    pub fn builder() -> RconConfigBuilder {
        RconConfigBuilder::new()
    }

    /// Reads `RCON_HOST`, `RCON_PORT`, `RCON_PASSWORD` and `RCON_SECURE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is missing or invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RconConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a value is missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::config(format!("{key} is not set")))
        };

        let host = required(ENV_HOST)?;
        let port = required(ENV_PORT)?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| Error::config(format!("{ENV_PORT}={port:?} is not a valid port: {e}")))?;
        let credential = required(ENV_PASSWORD)?;

        let secure = lookup(ENV_SECURE).is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });

        let mut builder = Self::builder()
            .host(host.trim())
            .port(port)
            .credential(credential);
        if secure {
            builder = builder.secure();
        }

        builder.build()
    }

    /// Returns the endpoint for these settings.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port, self.credential.clone()).with_scheme(self.scheme)
    }
}

impl fmt::Debug for RconConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RconConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("credential", &"<redacted>")
            .field("scheme", &self.scheme)
            .field("handshake_timeout", &self.handshake_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

// ============================================================================
// RconConfigBuilder
// ============================================================================

/// Builder for [`RconConfig`].
#[derive(Debug, Clone)]
pub struct RconConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    credential: Option<String>,
    scheme: Scheme,
    handshake_timeout: Duration,
    request_timeout: Duration,
}

impl Default for RconConfigBuilder {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            credential: None,
            scheme: Scheme::Ws,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RconConfigBuilder {
    /// Creates a builder with default timeouts and no target.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the console host.
    #[inline]
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the console port.
    #[inline]
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the RCON password.
    #[inline]
    #[must_use]
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Connects with `wss://`.
    #[inline]
    #[must_use]
    pub fn secure(mut self) -> Self {
        self.scheme = Scheme::Wss;
        self
    }

    /// Sets the handshake deadline.
    #[inline]
    #[must_use]
    pub fn handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Sets the per-request deadline.
    #[inline]
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if host, port or credential is missing,
    /// a timeout is zero, or the host does not form a valid URI.
    pub fn build(self) -> Result<RconConfig> {
        let host = self
            .host
            .filter(|host| !host.trim().is_empty())
            .ok_or_else(|| {
                Error::config(
                    "RCON host is required. Use .host() to set it.\n\
                     Example: RconConfig::builder().host(\"127.0.0.1\")",
                )
            })?;

        let port = self.port.filter(|port| *port != 0).ok_or_else(|| {
            Error::config("RCON port is required and must be non-zero. Use .port() to set it.")
        })?;

        let credential = self
            .credential
            .filter(|credential| !credential.is_empty())
            .ok_or_else(|| Error::config("RCON credential is required. Use .credential() to set it."))?;

        if self.handshake_timeout.is_zero() || self.request_timeout.is_zero() {
            return Err(Error::config("RCON timeouts must be non-zero"));
        }

        let config = RconConfig {
            host,
            port,
            credential,
            scheme: self.scheme,
            handshake_timeout: self.handshake_timeout,
            request_timeout: self.request_timeout,
        };

        // Reject hosts that cannot form a URI before the first poll.
        config.endpoint().url()?;

        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
