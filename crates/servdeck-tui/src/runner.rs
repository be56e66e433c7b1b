//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the app. Messages from background
//! tasks (loads, listeners, signals) arrive on one channel and are drained
//! before every frame; terminal input is polled after drawing.

use std::sync::Arc;

use tokio::sync::mpsc;

use servdeck_api::ServerApi;
use servdeck_app::{
    process_message, spawn_signal_handler, stop_all_listeners, AppState, ListenerTaskMap, Message,
};
use servdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits
///
/// The initial location in `state` is mounted before the first frame.
pub async fn run<A>(mut state: AppState, api: Arc<A>) -> Result<()>
where
    A: ServerApi + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    spawn_signal_handler(msg_tx.clone());

    let listener_tasks: ListenerTaskMap = Arc::default();

    let initial = Message::Navigate {
        location: state.location.clone(),
    };
    process_message(&mut state, initial, &msg_tx, &api, &listener_tasks);

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        &msg_tx,
        &api,
        &listener_tasks,
    );

    stop_all_listeners(&listener_tasks);
    ratatui::restore();
    info!("servdeck exiting");

    result
}

fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
    listener_tasks: &ListenerTaskMap,
) -> Result<()>
where
    A: ServerApi + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, api, listener_tasks);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, api, listener_tasks);
        }
    }

    Ok(())
}
