//! Message processing: the TEA drive loop
//!
//! Runs a message and its follow-ups through the update function and hands
//! any produced actions to the background task dispatcher.

use tokio::sync::mpsc;

use roster_api::ApiClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    client: &ApiClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        // Handle any action
        if let Some(action) = result.action {
            handle_action(action, client.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
