//! In-process WebRCON server for tests.
//!
//! Accepts exactly one WebSocket connection on `127.0.0.1:0` and hands it
//! to a scripted handler.

// ============================================================================
// Imports
// ============================================================================

use std::future::Future;
use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{WebSocketStream, accept_async};

use crate::identifiers::RequestId;
use crate::protocol::Envelope;
use crate::protocol::envelope::DEFAULT_TYPE;

use super::Endpoint;

// ============================================================================
// Constants
// ============================================================================

/// Credential the mock endpoint connects with.
pub(crate) const MOCK_CREDENTIAL: &str = "secret";

// ============================================================================
// MockServer
// ============================================================================

/// A bound mock console running one scripted connection.
pub(crate) struct MockServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Binds to a random port and runs `handler` for the first client.
    pub(crate) async fn start<F, Fut>(handler: F) -> Self
    where
        F: FnOnce(MockPeer) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");

        let task = tokio::spawn(async move {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let Ok(ws) = accept_async(stream).await else {
                return;
            };
            handler(MockPeer { ws }).await;
        });

        Self { addr, task }
    }

    /// Mock console answering `serverinfo` and `status` with fixed bodies.
    pub(crate) async fn console(server_info: &str, status: &str) -> Self {
        let server_info = server_info.to_string();
        let status = status.to_string();

        Self::start(move |mut peer| async move {
            while let Some(request) = peer.recv_request().await {
                let body = match request.message.as_str() {
                    "serverinfo" => server_info.as_str(),
                    "status" => status.as_str(),
                    _ => "",
                };
                peer.reply(request.identifier, body).await;
            }
        })
        .await
    }

    /// Endpoint pointing at this server.
    pub(crate) fn endpoint(&self) -> Endpoint {
        Endpoint::new("127.0.0.1", self.addr.port(), MOCK_CREDENTIAL)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// ============================================================================
// MockPeer
// ============================================================================

/// Server side of one mock connection.
pub(crate) struct MockPeer {
    ws: WebSocketStream<TcpStream>,
}

impl MockPeer {
    /// Waits for the next well-formed request. `None` once the client left.
    pub(crate) async fn recv_request(&mut self) -> Option<Envelope> {
        while let Some(message) = self.ws.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    if let Some(envelope) = Envelope::parse(&text) {
                        return Some(envelope);
                    }
                }
                Ok(Message::Close(_)) | Err(_) => return None,
                Ok(_) => {}
            }
        }
        None
    }

    /// Sends a reply envelope.
    pub(crate) async fn reply(&mut self, id: RequestId, message: &str) {
        let envelope = Envelope {
            identifier: id,
            message: message.to_string(),
            name: String::new(),
            kind: DEFAULT_TYPE.to_string(),
        };
        let json = serde_json::to_string(&envelope).expect("serialize reply");
        self.send_raw(&json).await;
    }

    /// Sends an arbitrary text frame.
    pub(crate) async fn send_raw(&mut self, text: &str) {
        let _ = self.ws.send(Message::Text(text.to_string().into())).await;
    }

    /// Reads and ignores frames until the client disconnects.
    pub(crate) async fn drain(mut self) {
        while self.recv_request().await.is_some() {}
    }

    /// Closes the connection from the server side.
    pub(crate) async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}
