//! Message processing
//!
//! Runs a message and its follow-ups through [`handler::update`] and hands
//! every resulting action to [`handle_action`].

use std::sync::Arc;

use tokio::sync::mpsc;

use servdeck_api::ServerApi;

use crate::actions::{handle_action, ListenerTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
    listener_tasks: &ListenerTaskMap,
) where
    A: ServerApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api.clone(), listener_tasks);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::fake::FakeApi;
    use crate::config::Settings;
    use crate::location::Location;
    use crate::router::Body;
    use crate::routes::SubView;
    use crate::test_support::snapshot;
    use servdeck_core::{ServerStatus, ViewerIdentity};

    #[tokio::test]
    async fn test_navigate_then_load_round_trip() {
        let api = Arc::new(FakeApi::new(Ok(snapshot(
            "abc",
            ServerStatus::Normal,
            false,
            &["*"],
        ))));
        let tasks: ListenerTaskMap = Arc::default();
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new(
            Settings::default(),
            Arc::new(ViewerIdentity::new("alice", false)),
            "https://panel.example.com",
            Location::server("abc"),
        );

        process_message(
            &mut state,
            Message::Navigate {
                location: Location::server("abc"),
            },
            &tx,
            &api,
            &tasks,
        );
        assert_eq!(state.view().body, Body::Spinner);

        let loaded = rx.recv().await.unwrap();
        assert!(matches!(loaded, Message::ServerLoaded { .. }));
        process_message(&mut state, loaded, &tx, &api, &tasks);

        assert_eq!(state.view().body, Body::SubView(SubView::Console));
        assert!(state.view().listeners_mounted);
        assert_eq!(tasks.lock().unwrap().len(), 1);

        crate::actions::stop_all_listeners(&tasks);
        assert!(tasks.lock().unwrap().is_empty());
    }
}
