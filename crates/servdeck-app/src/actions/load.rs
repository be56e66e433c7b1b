//! Server metadata fetch

use std::sync::Arc;

use tokio::sync::mpsc;

use servdeck_api::ServerApi;
use servdeck_core::prelude::*;

use crate::message::Message;
use crate::scope::Generation;

/// Fetch the server and report `ServerLoaded` or `ServerLoadFailed`.
/// Not retried.
pub(super) fn spawn_load_server<A>(
    api: Arc<A>,
    generation: Generation,
    identifier: String,
    msg_tx: mpsc::Sender<Message>,
) where
    A: ServerApi + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match api.load_server(&identifier).await {
            Ok(snapshot) => Message::ServerLoaded {
                generation,
                snapshot: Box::new(snapshot),
            },
            Err(e) => {
                debug!("load_server({}) failed: {:?}", identifier, e);
                Message::ServerLoadFailed {
                    generation,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(message).await.is_err() {
            debug!("Load result for {} dropped, event loop gone", identifier);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::fake::FakeApi;
    use crate::scope::ScopeProvider;

    #[tokio::test]
    async fn test_failure_carries_display_message() {
        let api = Arc::new(FakeApi::new(Err(
            "The requested resource could not be found on the server.".into(),
        )));
        let (tx, mut rx) = mpsc::channel(1);
        let generation = ScopeProvider::new().provide("missing").generation();

        spawn_load_server(api, generation, "missing".into(), tx);

        match rx.recv().await {
            Some(Message::ServerLoadFailed { generation: g, error }) => {
                assert_eq!(g, generation);
                assert_eq!(
                    error,
                    "The requested resource could not be found on the server."
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
