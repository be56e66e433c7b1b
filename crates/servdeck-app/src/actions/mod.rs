//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use servdeck_api::ServerApi;
use servdeck_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::scope::Generation;

pub(super) mod listeners;
pub(super) mod load;

/// Running listener tasks, keyed by the scope they serve
pub type ListenerTaskMap = Arc<std::sync::Mutex<HashMap<Generation, JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
    listener_tasks: &ListenerTaskMap,
) where
    A: ServerApi + Sync + 'static,
{
    match action {
        UpdateAction::LoadServer {
            generation,
            identifier,
        } => {
            load::spawn_load_server(api, generation, identifier, msg_tx);
        }

        UpdateAction::StartListeners {
            generation,
            identifier,
            uuid,
        } => {
            debug!("Starting listeners for {} ({})", identifier, uuid);
            let handle = listeners::spawn_listeners(api, generation, identifier, msg_tx);
            let previous = listener_tasks
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(generation, handle);
            if let Some(previous) = previous {
                previous.abort();
            }
        }

        UpdateAction::StopListeners { generation } => {
            let handle = listener_tasks
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .remove(&generation);
            if let Some(handle) = handle {
                debug!("Stopping listeners for scope {}", generation);
                handle.abort();
            }
        }
    }
}

/// Abort every listener (shutdown)
pub fn stop_all_listeners(listener_tasks: &ListenerTaskMap) {
    let mut tasks = listener_tasks.lock().unwrap_or_else(|e| e.into_inner());
    for (generation, handle) in tasks.drain() {
        debug!("Aborting listeners for scope {}", generation);
        handle.abort();
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted `ServerApi` for action tests

    use std::sync::atomic::{AtomicUsize, Ordering};

    use servdeck_api::{ServerApi, SocketCredentials};
    use servdeck_core::{Error, Result, ServerSnapshot, ViewerIdentity};

    /// What `websocket_credentials` answers
    pub(crate) enum Credentials {
        /// 409 while the server is being transferred
        Transferring,
        /// 403, the key may not open the socket
        Forbidden,
        /// A daemon socket URL
        Socket(String),
    }

    pub(crate) struct FakeApi {
        pub server: std::result::Result<ServerSnapshot, String>,
        pub credentials: Credentials,
        pub credential_calls: AtomicUsize,
    }

    impl FakeApi {
        pub(crate) fn new(server: std::result::Result<ServerSnapshot, String>) -> Self {
            Self {
                server,
                credentials: Credentials::Transferring,
                credential_calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn with_credentials(mut self, credentials: Credentials) -> Self {
            self.credentials = credentials;
            self
        }
    }

    impl ServerApi for FakeApi {
        fn origin(&self) -> &str {
            "https://panel.example.com"
        }

        async fn load_server(&self, _identifier: &str) -> Result<ServerSnapshot> {
            self.server
                .clone()
                .map_err(|message| Error::api(Some(500), message))
        }

        async fn load_account(&self) -> Result<ViewerIdentity> {
            Ok(ViewerIdentity::new("alice", false))
        }

        async fn websocket_credentials(&self, _identifier: &str) -> Result<SocketCredentials> {
            self.credential_calls.fetch_add(1, Ordering::SeqCst);
            match &self.credentials {
                Credentials::Transferring => {
                    Err(Error::api(Some(409), "Server is being transferred."))
                }
                Credentials::Forbidden => {
                    Err(Error::api(Some(403), "This action is unauthorized."))
                }
                Credentials::Socket(url) => Ok(SocketCredentials {
                    token: "jwt-token".to_string(),
                    socket: url.clone(),
                }),
            }
        }
    }
}
