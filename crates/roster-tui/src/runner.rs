//! Main TUI runner - entry point and event loop

use std::time::Duration;

use tokio::sync::mpsc;

use roster_api::ApiClient;
use roster_app::config::Settings;
use roster_app::message::Message;
use roster_app::process::process_message;
use roster_app::signals;
use roster_app::state::AppState;
use roster_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting Roster: base_url={} role={}",
        settings.api.base_url,
        settings.ui.role.label()
    );

    // Build the API client before touching the terminal so a bad base URL
    // prints a normal error instead of a garbled screen.
    let client = ApiClient::with_base_url(
        &settings.api.base_url,
        settings.api.timeout_secs,
        settings.api.page_size,
    )?;

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::new(settings);

    // Create unified message channel (signal handler, task completions)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Run the main loop
    let result = run_loop(&mut term, &mut state, &client, msg_rx, msg_tx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    client: &ApiClient,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    let tick = Duration::from_millis(state.settings.ui.tick_ms);

    // Kick off the first page load
    process_message(state, Message::FetchPage, client, &msg_tx);

    while !state.should_quit() {
        // Process external messages (task completions, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, client, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(tick)? {
            process_message(state, message, client, &msg_tx);
        }
    }

    Ok(())
}
