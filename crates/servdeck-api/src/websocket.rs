//! Realtime socket for one server
//!
//! The node daemon streams JSON text frames `{"event": ..., "args": [...]}`.
//! A connection is authenticated by sending an `auth` frame with the token
//! from [`crate::ServerApi::websocket_credentials`]; the daemon answers with
//! `auth success` and later warns with `token expiring` before the token
//! runs out.

use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::{HeaderValue, ORIGIN};
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use servdeck_core::prelude::*;
use servdeck_core::{EventFrame, ServerEvent};

use crate::protocol::SocketCredentials;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A decoded frame from the realtime socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketFrame {
    AuthSuccess,
    /// The token will expire soon; fetch new credentials and re-authenticate
    TokenExpiring,
    TokenExpired,
    /// The daemon rejected the token
    JwtError(String),
    Event(ServerEvent),
    /// Console output, stats and other frames the server view does not use
    Ignored,
}

#[derive(Serialize)]
struct OutgoingFrame<'a> {
    event: &'a str,
    args: [&'a str; 1],
}

/// Decode one text frame.
pub fn parse_frame(text: &str) -> Result<SocketFrame> {
    let frame: EventFrame = serde_json::from_str(text)
        .map_err(|e| Error::protocol(format!("invalid socket frame: {}", e)))?;

    let decoded = match frame.event.as_str() {
        "auth success" => SocketFrame::AuthSuccess,
        "token expiring" => SocketFrame::TokenExpiring,
        "token expired" => SocketFrame::TokenExpired,
        "jwt error" => SocketFrame::JwtError(frame.first_arg().unwrap_or_default().to_string()),
        _ => match frame.into_server_event() {
            Some(event) => SocketFrame::Event(event),
            None => SocketFrame::Ignored,
        },
    };
    Ok(decoded)
}

/// An open socket to one server's daemon
pub struct ServerSocket {
    stream: WsStream,
}

impl std::fmt::Debug for ServerSocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSocket").finish_non_exhaustive()
    }
}

impl ServerSocket {
    /// Open the socket named in `creds`. The daemon checks `origin` against
    /// the panel URL it was configured with.
    pub async fn connect(creds: &SocketCredentials, origin: &str) -> Result<Self> {
        let mut request = creds
            .socket
            .as_str()
            .into_client_request()
            .map_err(|e| Error::websocket(format!("invalid socket URL: {}", e)))?;

        let origin = HeaderValue::from_str(origin)
            .map_err(|e| Error::websocket(format!("invalid origin: {}", e)))?;
        request.headers_mut().insert(ORIGIN, origin);

        let (stream, _response) = connect_async(request)
            .await
            .map_err(|e| Error::websocket(format!("failed to connect: {}", e)))?;

        debug!("Realtime socket connected to {}", creds.socket);
        Ok(Self { stream })
    }

    /// Send the `auth` frame carrying `token`.
    pub async fn authenticate(&mut self, token: &str) -> Result<()> {
        let json = serde_json::to_string(&OutgoingFrame {
            event: "auth",
            args: [token],
        })?;
        self.stream
            .send(WsMessage::Text(json.into()))
            .await
            .map_err(|e| Error::websocket(format!("failed to send auth: {}", e)))
    }

    /// Wait for the next frame. `None` once the daemon closes the socket.
    ///
    /// Frames that fail to decode are logged and skipped.
    pub async fn next_frame(&mut self) -> Option<Result<SocketFrame>> {
        loop {
            match self.stream.next().await? {
                Ok(WsMessage::Text(text)) => match parse_frame(text.as_str()) {
                    Ok(frame) => return Some(Ok(frame)),
                    Err(e) => {
                        trace!("Skipping socket frame: {}", e);
                    }
                },
                Ok(WsMessage::Close(_)) => {
                    debug!("Realtime socket received Close frame");
                    return None;
                }
                // Ping/Pong/Binary
                Ok(_) => {}
                Err(e) => return Some(Err(Error::websocket(e.to_string()))),
            }
        }
    }

    /// Close the socket, ignoring failures.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!("Realtime socket close failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servdeck_core::{PowerState, TransferStatus};

    #[test]
    fn test_auth_frames() {
        assert_eq!(
            parse_frame(r#"{"event":"auth success"}"#).unwrap(),
            SocketFrame::AuthSuccess
        );
        assert_eq!(
            parse_frame(r#"{"event":"token expiring"}"#).unwrap(),
            SocketFrame::TokenExpiring
        );
        assert_eq!(
            parse_frame(r#"{"event":"jwt error","args":["signature is invalid"]}"#).unwrap(),
            SocketFrame::JwtError("signature is invalid".to_string())
        );
    }

    #[test]
    fn test_server_events_pass_through() {
        assert_eq!(
            parse_frame(r#"{"event":"status","args":["running"]}"#).unwrap(),
            SocketFrame::Event(ServerEvent::PowerState(PowerState::Running))
        );
        assert_eq!(
            parse_frame(r#"{"event":"transfer status","args":["failed"]}"#).unwrap(),
            SocketFrame::Event(ServerEvent::TransferStatus(TransferStatus::Failed))
        );
        assert_eq!(
            parse_frame(r#"{"event":"backup restore completed"}"#).unwrap(),
            SocketFrame::Event(ServerEvent::BackupRestoreCompleted)
        );
    }

    #[test]
    fn test_unused_frames_are_ignored() {
        assert_eq!(
            parse_frame(r#"{"event":"stats","args":["{\"cpu_absolute\":1.5}"]}"#).unwrap(),
            SocketFrame::Ignored
        );
    }

    #[test]
    fn test_malformed_frame_is_protocol_error() {
        let err = parse_frame("not json").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_auth_frame_shape() {
        let json = serde_json::to_string(&OutgoingFrame {
            event: "auth",
            args: ["abc"],
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"auth","args":["abc"]}"#);
    }
}
