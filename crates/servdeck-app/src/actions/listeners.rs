//! Realtime listener task
//!
//! One task per mounted scope. It fetches socket credentials, authenticates,
//! forwards server events to the update loop and reconnects with exponential
//! backoff when the socket drops. The task is aborted on unmount.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use servdeck_api::{ServerApi, ServerSocket, SocketFrame};
use servdeck_core::prelude::*;

use crate::message::Message;
use crate::scope::Generation;

/// Initial reconnection backoff duration.
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Maximum reconnection backoff duration (cap).
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Maximum number of consecutive reconnection attempts before giving up.
const MAX_RECONNECT_ATTEMPTS: u32 = 10;

/// How one socket session ended
#[derive(Debug, PartialEq, Eq)]
enum SessionEnd {
    /// The daemon closed the socket
    Disconnected,
    /// The update loop is gone
    Shutdown,
}

pub(super) fn spawn_listeners<A>(
    api: Arc<A>,
    generation: Generation,
    identifier: String,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    A: ServerApi + Sync + 'static,
{
    tokio::spawn(async move {
        run_listeners(api.as_ref(), generation, &identifier, &msg_tx).await;
        debug!("Listener task for {} exiting", identifier);
    })
}

async fn run_listeners<A>(
    api: &A,
    generation: Generation,
    identifier: &str,
    msg_tx: &mpsc::Sender<Message>,
) where
    A: ServerApi + Sync,
{
    let mut attempt: u32 = 0;

    loop {
        let mut authenticated = false;
        let outcome =
            run_session(api, generation, identifier, msg_tx, &mut authenticated).await;

        // Only consecutive failures count; a session the daemon accepted
        // resets the budget however it ended
        if authenticated {
            attempt = 0;
        }

        let reason = match outcome {
            Ok(SessionEnd::Shutdown) => return,
            Ok(SessionEnd::Disconnected) => {
                debug!("Realtime socket for {} closed", identifier);
                String::from("connection closed")
            }
            Err(e) if !e.is_recoverable() => {
                error!("Realtime socket for {} failed for good: {}", identifier, e);
                stop(msg_tx, generation, e.to_string()).await;
                return;
            }
            Err(e) => {
                warn!("Realtime socket for {} failed: {}", identifier, e);
                e.to_string()
            }
        };

        attempt += 1;
        if attempt > MAX_RECONNECT_ATTEMPTS {
            error!(
                "Realtime socket for {}: exceeded {} reconnection attempts, giving up",
                identifier, MAX_RECONNECT_ATTEMPTS
            );
            stop(msg_tx, generation, reason).await;
            return;
        }

        let backoff = compute_backoff(attempt);
        warn!(
            "Realtime socket for {}: retrying in {:?} (attempt {}/{})",
            identifier, backoff, attempt, MAX_RECONNECT_ATTEMPTS
        );
        tokio::time::sleep(backoff).await;

        if msg_tx.is_closed() {
            return;
        }
    }
}

async fn stop(msg_tx: &mpsc::Sender<Message>, generation: Generation, reason: String) {
    let _ = msg_tx
        .send(Message::ListenerStopped { generation, reason })
        .await;
}

/// Connect, authenticate and pump frames until the socket closes.
///
/// `authenticated` is set once the daemon accepts the token and stays set
/// when the session later fails.
async fn run_session<A>(
    api: &A,
    generation: Generation,
    identifier: &str,
    msg_tx: &mpsc::Sender<Message>,
    authenticated: &mut bool,
) -> Result<SessionEnd>
where
    A: ServerApi + Sync,
{
    let creds = api.websocket_credentials(identifier).await?;
    let mut socket = ServerSocket::connect(&creds, api.origin()).await?;
    socket.authenticate(&creds.token).await?;

    while let Some(frame) = socket.next_frame().await {
        match frame? {
            SocketFrame::AuthSuccess => {
                debug!("Realtime socket for {} authenticated", identifier);
                *authenticated = true;
            }
            SocketFrame::TokenExpiring => {
                debug!("Token for {} expiring, re-authenticating", identifier);
                let fresh = api.websocket_credentials(identifier).await?;
                socket.authenticate(&fresh.token).await?;
            }
            SocketFrame::TokenExpired => {
                debug!("Token for {} expired", identifier);
                break;
            }
            SocketFrame::JwtError(message) => {
                return Err(Error::websocket(format!("token rejected: {}", message)));
            }
            SocketFrame::Event(event) => {
                if msg_tx
                    .send(Message::ServerEvent { generation, event })
                    .await
                    .is_err()
                {
                    socket.close().await;
                    return Ok(SessionEnd::Shutdown);
                }
            }
            SocketFrame::Ignored => {}
        }
    }

    Ok(SessionEnd::Disconnected)
}

/// Compute exponential backoff duration for reconnection attempt `n`.
///
/// The formula is `INITIAL_BACKOFF * 2^(n-1)`, capped at `MAX_BACKOFF`.
fn compute_backoff(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1);
    let multiplier: u64 = 1u64.checked_shl(exponent).unwrap_or(u64::MAX);
    let secs = INITIAL_BACKOFF.as_secs().saturating_mul(multiplier);
    Duration::from_secs(secs.min(MAX_BACKOFF.as_secs()))
}
