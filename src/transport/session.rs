//! WebRCON session and event loop.
//!
//! A [`Session`] owns one WebSocket connection to the remote console.
//! Opening it spawns a tokio task that handles:
//!
//! - Outgoing requests wrapped in an [`Envelope`]
//! - Incoming frames, routed to their waiter by `Identifier`
//! - Unrelated console chatter, which is dropped
//! - Failing every pending request when the socket goes away
//!
//! Each pending request holds a `oneshot` sender in the correlation map.
//! The sender is removed on the first matching reply, on timeout, or when
//! the session ends, so every request resolves exactly once.

// ============================================================================
// Imports
// ============================================================================

use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::to_string;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{WebSocketStream, connect_async};
use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::identifiers::{RequestId, RequestIdGenerator};
use crate::protocol::{Command, Envelope};

use super::Endpoint;

// ============================================================================
// Constants
// ============================================================================

/// Default WebSocket handshake deadline.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(15);

/// Default deadline for one correlated request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default deadline for the event loop to acknowledge [`Session::close`].
pub const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum pending requests before rejecting new ones.
pub const MAX_PENDING_REQUESTS: usize = 100;

// ============================================================================
// Types
// ============================================================================

/// Completion handle for one pending request.
type ReplySender = oneshot::Sender<Result<String>>;

/// Map of request IDs to reply channels.
type CorrelationMap = FxHashMap<RequestId, ReplySender>;

/// Internal commands for the event loop.
enum SessionCommand {
    /// Register a request and write it to the socket.
    Send {
        envelope: Envelope,
        reply_tx: ReplySender,
    },
    /// Remove a timed-out correlation entry.
    RemoveCorrelation(RequestId),
    /// Close the socket, then acknowledge.
    Shutdown {
        done_tx: Option<oneshot::Sender<()>>,
    },
}

/// Why the event loop stopped.
enum LoopExit {
    /// Closed locally.
    Shutdown(Option<oneshot::Sender<()>>),
    /// Closed by the remote, or the socket failed.
    Remote,
}

// ============================================================================
// Session
// ============================================================================

/// One WebSocket connection to a remote console.
///
/// Many requests may be pending at once. Replies are routed strictly by
/// identifier, never by arrival order.
///
/// # Example
///
/// ```ignore
/// use rcon_snapshot::transport::{Endpoint, Session};
/// use rcon_snapshot::protocol::Command;
///
/// let endpoint = Endpoint::new("127.0.0.1", 28016, "password");
/// let session = Session::open(&endpoint, Duration::from_secs(15)).await?;
/// let reply = session.execute(&Command::Status).await?;
/// session.close().await;
/// ```
pub struct Session {
    /// `host:port` of the remote console.
    authority: String,
    /// Channel for sending commands to the event loop.
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    /// Correlation map (shared with event loop).
    correlation: Arc<Mutex<CorrelationMap>>,
    /// Identifier source for [`Session::execute`].
    ids: RequestIdGenerator,
    /// Deadline applied by [`Session::send`].
    request_timeout: Duration,
    /// Deadline for the event loop to acknowledge a close.
    close_timeout: Duration,
    /// Event loop task, aborted if it misses the close deadline.
    task: JoinHandle<()>,
}

impl Session {
    /// Connects to `endpoint` and spawns the event loop.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the endpoint does not form a valid URI
    /// - [`Error::ConnectionTimeout`] if the handshake exceeds `handshake_timeout`
    /// - [`Error::ConnectionRejected`] if the handshake fails
    pub async fn open(endpoint: &Endpoint, handshake_timeout: Duration) -> Result<Self> {
        let url = endpoint.url()?;
        let authority = endpoint.authority();

        debug!(endpoint = %authority, "Opening WebRCON session");

        let (ws_stream, _response) = timeout(handshake_timeout, connect_async(url.as_str()))
            .await
            .map_err(|_| Error::connection_timeout(millis(handshake_timeout)))?
            .map_err(|e| Error::connection_rejected(authority.as_str(), e))?;

        info!(endpoint = %authority, "WebRCON session established");

        Ok(Self::new(ws_stream, authority))
    }

    /// Creates a session from an already upgraded WebSocket stream.
    pub(crate) fn new<S>(ws_stream: WebSocketStream<S>, authority: String) -> Self
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let correlation = Arc::new(Mutex::new(CorrelationMap::default()));

        let task = tokio::spawn(Self::run_event_loop(
            ws_stream,
            command_rx,
            Arc::clone(&correlation),
            authority.clone(),
        ));

        Self {
            authority,
            command_tx,
            correlation,
            ids: RequestIdGenerator::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            close_timeout: DEFAULT_CLOSE_TIMEOUT,
            task,
        }
    }

    /// Sets the deadline used by [`Session::send`] and [`Session::execute`].
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Returns `host:port` of the remote console.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Runs `command` under a fresh identifier and returns the reply body.
    ///
    /// # Errors
    ///
    /// See [`Session::send_with_timeout`].
    pub async fn execute(&self, command: &Command) -> Result<String> {
        let id = self.ids.next_id();
        self.send(id, command).await
    }

    /// Sends `command` under `id` with the session's request timeout.
    ///
    /// # Errors
    ///
    /// See [`Session::send_with_timeout`].
    pub async fn send(&self, id: RequestId, command: &Command) -> Result<String> {
        self.send_with_timeout(id, command, self.request_timeout)
            .await
    }

    /// Sends `command` under `id` and waits for the reply with that `id`.
    ///
    /// A timeout only affects this request. Other pending requests on the
    /// same session keep waiting.
    ///
    /// # Errors
    ///
    /// - [`Error::RequestTimeout`] if no matching reply arrives in time
    /// - [`Error::DuplicateRequest`] if `id` is already pending
    /// - [`Error::TooManyPending`] if the pending table is full
    /// - [`Error::ConnectionClosed`] if the socket closes or fails first
    /// - [`Error::Cancelled`] if [`Session::close`] runs first
    pub async fn send_with_timeout(
        &self,
        id: RequestId,
        command: &Command,
        request_timeout: Duration,
    ) -> Result<String> {
        // Check pending request limit
        {
            let correlation = self.correlation.lock();
            if correlation.len() >= MAX_PENDING_REQUESTS {
                warn!(
                    pending = correlation.len(),
                    max = MAX_PENDING_REQUESTS,
                    "Too many pending requests"
                );
                return Err(Error::TooManyPending {
                    pending: correlation.len(),
                    max: MAX_PENDING_REQUESTS,
                });
            }
        }

        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(SessionCommand::Send {
                envelope: Envelope::request(id, command),
                reply_tx,
            })
            .map_err(|_| Error::ConnectionClosed)?;

        match timeout(request_timeout, reply_rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(Error::ConnectionClosed),
            Err(_) => {
                let _ = self
                    .command_tx
                    .send(SessionCommand::RemoveCorrelation(id));

                warn!(
                    request_id = %id,
                    %command,
                    timeout_ms = millis(request_timeout),
                    "Request timed out"
                );

                Err(Error::request_timeout(id, millis(request_timeout)))
            }
        }
    }

    /// Returns the number of pending requests.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.correlation.lock().len()
    }

    /// Closes the socket and cancels every pending request.
    ///
    /// Idempotent. Safe to call after the remote already closed. If the
    /// event loop misses the close deadline, for example while a write is
    /// stalled on an unresponsive peer, the loop is aborted and pending
    /// requests are cancelled here.
    pub async fn close(&self) {
        let (done_tx, done_rx) = oneshot::channel();

        if self
            .command_tx
            .send(SessionCommand::Shutdown {
                done_tx: Some(done_tx),
            })
            .is_err()
        {
            return;
        }

        if timeout(self.close_timeout, done_rx).await.is_err() {
            warn!(
                endpoint = %self.authority,
                timeout_ms = millis(self.close_timeout),
                "Close not acknowledged, aborting event loop"
            );
            self.task.abort();

            let pending: Vec<ReplySender> = self
                .correlation
                .lock()
                .drain()
                .map(|(_, tx)| tx)
                .collect();
            for tx in pending {
                let _ = tx.send(Err(Error::Cancelled));
            }
        }
    }

    /// Event loop that handles WebSocket I/O.
    async fn run_event_loop<S>(
        ws_stream: WebSocketStream<S>,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        correlation: Arc<Mutex<CorrelationMap>>,
        authority: String,
    ) where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut ws_write, mut ws_read) = ws_stream.split();

        let exit = loop {
            tokio::select! {
                // Incoming frames from the console
                message = ws_read.next() => {
                    match message {
                        Some(Ok(Message::Text(text))) => {
                            Self::handle_incoming_message(&text, &correlation);
                        }

                        Some(Ok(Message::Close(frame))) => {
                            debug!(endpoint = %authority, ?frame, "WebSocket closed by remote");
                            break LoopExit::Remote;
                        }

                        Some(Err(e)) => {
                            warn!(endpoint = %authority, error = %e, "WebSocket error");
                            break LoopExit::Remote;
                        }

                        None => {
                            debug!(endpoint = %authority, "WebSocket stream ended");
                            break LoopExit::Remote;
                        }

                        // Ignore Binary, Ping, Pong
                        _ => {}
                    }
                }

                // Commands from the session handle
                command = command_rx.recv() => {
                    match command {
                        Some(SessionCommand::Send { envelope, reply_tx }) => {
                            Self::handle_send_command(
                                envelope,
                                reply_tx,
                                &mut ws_write,
                                &correlation,
                            ).await;
                        }

                        Some(SessionCommand::RemoveCorrelation(request_id)) => {
                            correlation.lock().remove(&request_id);
                            debug!(%request_id, "Removed timed-out correlation");
                        }

                        Some(SessionCommand::Shutdown { done_tx }) => {
                            debug!(endpoint = %authority, "Shutdown command received");
                            let _ = ws_write.close().await;
                            break LoopExit::Shutdown(done_tx);
                        }

                        None => {
                            debug!(endpoint = %authority, "Session handle dropped");
                            let _ = ws_write.close().await;
                            break LoopExit::Shutdown(None);
                        }
                    }
                }
            }
        };

        match exit {
            LoopExit::Shutdown(done_tx) => {
                Self::fail_pending_requests(&correlation, &mut command_rx, || Error::Cancelled);
                if let Some(done_tx) = done_tx {
                    let _ = done_tx.send(());
                }
            }
            LoopExit::Remote => {
                Self::fail_pending_requests(&correlation, &mut command_rx, || {
                    Error::ConnectionClosed
                });
            }
        }

        debug!(endpoint = %authority, "Event loop terminated");
    }

    /// Routes an incoming text frame to its waiter.
    fn handle_incoming_message(text: &str, correlation: &Mutex<CorrelationMap>) {
        let Some(envelope) = Envelope::parse(text) else {
            trace!(len = text.len(), "Discarding non-envelope frame");
            return;
        };

        let reply_tx = correlation.lock().remove(&envelope.identifier);

        match reply_tx {
            Some(tx) => {
                trace!(request_id = %envelope.identifier, "Reply routed");
                let _ = tx.send(Ok(envelope.message));
            }
            None => {
                trace!(
                    request_id = %envelope.identifier,
                    kind = %envelope.kind,
                    "Frame for unknown request"
                );
            }
        }
    }

    /// Registers a request and writes it to the socket.
    async fn handle_send_command<S>(
        envelope: Envelope,
        reply_tx: ReplySender,
        ws_write: &mut SplitSink<WebSocketStream<S>, Message>,
        correlation: &Mutex<CorrelationMap>,
    ) where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let request_id = envelope.identifier;

        let json = match to_string(&envelope) {
            Ok(j) => j,
            Err(e) => {
                let _ = reply_tx.send(Err(Error::Json(e)));
                return;
            }
        };

        // Store correlation before sending
        match correlation.lock().entry(request_id) {
            Entry::Occupied(_) => {
                warn!(%request_id, "Identifier reused while pending");
                let _ = reply_tx.send(Err(Error::duplicate_request(request_id)));
                return;
            }
            Entry::Vacant(slot) => {
                slot.insert(reply_tx);
            }
        }

        if let Err(e) = ws_write.send(Message::Text(json.into())).await {
            warn!(%request_id, error = %e, "Failed to send request");
            if let Some(tx) = correlation.lock().remove(&request_id) {
                let _ = tx.send(Err(Error::ConnectionClosed));
            }
            return;
        }

        trace!(%request_id, "Request sent");
    }

    /// Fails all registered and queued requests.
    fn fail_pending_requests(
        correlation: &Mutex<CorrelationMap>,
        command_rx: &mut mpsc::UnboundedReceiver<SessionCommand>,
        error: impl Fn() -> Error,
    ) {
        command_rx.close();

        let mut pending: Vec<ReplySender> = correlation
            .lock()
            .drain()
            .map(|(_, tx)| tx)
            .collect();

        while let Ok(command) = command_rx.try_recv() {
            if let SessionCommand::Send { reply_tx, .. } = command {
                pending.push(reply_tx);
            }
        }

        let count = pending.len();
        for tx in pending {
            let _ = tx.send(Err(error()));
        }

        if count > 0 {
            debug!(count, "Failed pending requests on shutdown");
        }
    }
}

/// Converts `duration` to whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Drop for Session {
    fn drop(&mut self) {
        // The session is not Clone, so dropping it ends the socket.
        let _ = self
            .command_tx
            .send(SessionCommand::Shutdown { done_tx: None });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::net::TcpListener;
    use tokio_tungstenite::tungstenite::protocol::Role;

    use crate::transport::mock::MockServer;

    const SHORT: Duration = Duration::from_millis(200);

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_HANDSHAKE_TIMEOUT.as_secs(), 15);
        assert_eq!(DEFAULT_REQUEST_TIMEOUT.as_secs(), 30);
        assert_eq!(DEFAULT_CLOSE_TIMEOUT.as_secs(), 5);
        assert_eq!(MAX_PENDING_REQUESTS, 100);
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn test_execute_round_trip() {
        let server = MockServer::start(|mut peer| async move {
            while let Some(request) = peer.recv_request().await {
                let body = format!("echo {}", request.message);
                peer.reply(request.identifier, &body).await;
            }
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let reply = session
            .execute(&Command::custom("say hi"))
            .await
            .expect("reply");
        assert_eq!(reply, "echo say hi");
        assert_eq!(session.pending_count(), 0);

        session.close().await;
    }

    #[tokio::test]
    async fn test_replies_in_reverse_order_route_by_identifier() {
        let server = MockServer::start(|mut peer| async move {
            let Some(first) = peer.recv_request().await else { return };
            let Some(second) = peer.recv_request().await else { return };
            for request in [second, first] {
                let body = format!("reply to {}", request.message);
                peer.reply(request.identifier, &body).await;
            }
            peer.drain().await;
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let alpha = Command::custom("alpha");
        let beta = Command::custom("beta");
        let (a, b) = tokio::join!(
            session.send(RequestId::new(10), &alpha),
            session.send(RequestId::new(11), &beta),
        );

        assert_eq!(a.expect("alpha reply"), "reply to alpha");
        assert_eq!(b.expect("beta reply"), "reply to beta");

        session.close().await;
    }

    #[tokio::test]
    async fn test_chatter_is_discarded() {
        let server = MockServer::start(|mut peer| async move {
            while let Some(request) = peer.recv_request().await {
                peer.send_raw("not json at all").await;
                peer.send_raw(r#"{"Message": "missing identifier"}"#).await;
                peer.reply(RequestId::new(-1), "[chat] someone joined").await;
                peer.reply(request.identifier, "the real reply").await;
            }
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let reply = session
            .send(RequestId::STATUS, &Command::Status)
            .await
            .expect("reply");
        assert_eq!(reply, "the real reply");

        session.close().await;
    }

    #[tokio::test]
    async fn test_timeout_does_not_affect_other_requests() {
        let server = MockServer::start(|mut peer| async move {
            while let Some(request) = peer.recv_request().await {
                if request.message == "answer" {
                    peer.reply(request.identifier, "answered").await;
                }
            }
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open")
            .with_request_timeout(SHORT);

        let ignore = Command::custom("ignore");
        let answer = Command::custom("answer");
        let (ignored, answered) = tokio::join!(
            session.send(RequestId::new(20), &ignore),
            session.send(RequestId::new(21), &answer),
        );

        match ignored {
            Err(Error::RequestTimeout { request_id, .. }) => {
                assert_eq!(request_id, RequestId::new(20));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(answered.expect("answered"), "answered");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(session.pending_count(), 0);

        session.close().await;
    }

    #[tokio::test]
    async fn test_duplicate_identifier_fails_fast_and_close_cancels() {
        let server = MockServer::start(|peer| async move {
            // Never answers.
            peer.drain().await;
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let id = RequestId::new(30);
        let (first, second) = tokio::join!(
            session.send_with_timeout(id, &Command::Status, Duration::from_secs(5)),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let duplicate = session.send(id, &Command::Status).await;
                session.close().await;
                duplicate
            },
        );

        assert!(matches!(
            second,
            Err(Error::DuplicateRequest { request_id }) if request_id == id
        ));
        assert!(matches!(first, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_remote_close_fails_pending_requests() {
        let server = MockServer::start(|mut peer| async move {
            if peer.recv_request().await.is_some() {
                peer.close().await;
            }
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let result = session
            .send_with_timeout(RequestId::new(40), &Command::Status, Duration::from_secs(5))
            .await;
        assert!(matches!(result, Err(Error::ConnectionClosed)));

        // Closing after the remote left is a no-op.
        session.close().await;
    }

    #[tokio::test]
    async fn test_remote_close_fails_every_pending_request() {
        let server = MockServer::start(|mut peer| async move {
            let mut received = 0;
            while peer.recv_request().await.is_some() {
                received += 1;
                if received == 3 {
                    break;
                }
            }
            peer.close().await;
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let wait = Duration::from_secs(5);
        let (a, b, c) = tokio::join!(
            session.send_with_timeout(RequestId::new(41), &Command::Status, wait),
            session.send_with_timeout(RequestId::new(42), &Command::Status, wait),
            session.send_with_timeout(RequestId::new(43), &Command::Status, wait),
        );

        for result in [a, b, c] {
            assert!(matches!(result, Err(Error::ConnectionClosed)));
        }
        assert_eq!(session.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_local_close_cancels_every_pending_request() {
        let server = MockServer::start(|peer| async move {
            peer.drain().await;
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        let wait = Duration::from_secs(5);
        let (a, b, ()) = tokio::join!(
            session.send_with_timeout(RequestId::new(44), &Command::Status, wait),
            session.send_with_timeout(RequestId::new(45), &Command::ServerInfo, wait),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                assert_eq!(session.pending_count(), 2);
                session.close().await;
            },
        );

        assert!(matches!(a, Err(Error::Cancelled)));
        assert!(matches!(b, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_close_aborts_stalled_event_loop() {
        // The peer half is never read, so a large write blocks forever.
        let (client, _peer) = tokio::io::duplex(64);
        let ws_stream = WebSocketStream::from_raw_socket(client, Role::Client, None).await;

        let mut session = Session::new(ws_stream, "stalled:1".to_string());
        session.close_timeout = SHORT;

        let large = Command::custom("x".repeat(64 * 1024));
        let started = tokio::time::Instant::now();
        let (result, ()) = tokio::join!(
            session.send_with_timeout(RequestId::new(50), &large, Duration::from_secs(5)),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                session.close().await;
            },
        );

        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(session.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let server = MockServer::start(|peer| async move {
            peer.drain().await;
        })
        .await;

        let session = Session::open(&server.endpoint(), SHORT)
            .await
            .expect("open");

        session.close().await;
        session.close().await;

        let result = session.execute(&Command::Status).await;
        assert!(result.expect_err("closed session").is_transport_closed());
    }

    #[tokio::test]
    async fn test_handshake_timeout() {
        // Listener that never answers the upgrade request.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        let endpoint = Endpoint::new("127.0.0.1", port, "secret");

        let result = Session::open(&endpoint, Duration::from_millis(100)).await;
        assert!(matches!(result, Err(Error::ConnectionTimeout { timeout_ms: 100 })));

        drop(listener);
    }

    #[tokio::test]
    async fn test_refused_connection_is_rejected() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let endpoint = Endpoint::new("127.0.0.1", port, "secret");
        let result = Session::open(&endpoint, Duration::from_secs(2)).await;

        match result {
            Err(Error::ConnectionRejected { endpoint, .. }) => {
                assert_eq!(endpoint, format!("127.0.0.1:{port}"));
            }
            other => panic!("expected rejection, got {:?}", other.err()),
        }
    }
}
