//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action is a one-shot API call. The task reports back through the
//! message channel; send failures mean the UI is shutting down and are
//! ignored.

use tokio::sync::mpsc;
use tracing::warn;

use roster_api::ApiClient;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, client: ApiClient, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::FetchPage {
            seq,
            page,
            search,
            sort_key,
            sort_direction,
        } => {
            tokio::spawn(async move {
                let msg = match client.list(page, &search, sort_key, sort_direction).await {
                    Ok(page) => Message::PageLoaded { seq, page },
                    Err(err) => {
                        warn!("List fetch failed: {err}");
                        Message::PageLoadFailed {
                            seq,
                            error: err.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::FetchDetail { seq, id } => {
            tokio::spawn(async move {
                let msg = match client.get(&id).await {
                    Ok(record) => Message::DetailLoaded {
                        seq,
                        record: Box::new(record),
                    },
                    Err(err) => {
                        warn!("Detail fetch failed for {id}: {err}");
                        Message::DetailLoadFailed {
                            seq,
                            error: err.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SubmitCreate { draft } => {
            tokio::spawn(async move {
                let msg = match client.create(&draft).await {
                    Ok(()) => Message::SubmitSucceeded,
                    Err(err) => {
                        warn!("Create failed: {err}");
                        Message::SubmitFailed {
                            error: err.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SubmitReplace { id, draft } => {
            tokio::spawn(async move {
                let msg = match client.replace(&id, &draft).await {
                    Ok(()) => Message::SubmitSucceeded,
                    Err(err) => {
                        warn!("Replace failed for {id}: {err}");
                        Message::SubmitFailed {
                            error: err.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SubmitPatch { id, payload } => {
            tokio::spawn(async move {
                let msg = match client.update(&id, &payload).await {
                    Ok(()) => Message::SubmitSucceeded,
                    Err(err) => {
                        warn!("Update failed for {id}: {err}");
                        Message::SubmitFailed {
                            error: err.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::DeleteRecord { id } => {
            tokio::spawn(async move {
                let msg = match client.delete(&id).await {
                    Ok(()) => Message::DeleteSucceeded,
                    Err(err) => {
                        warn!("Delete failed for {id}: {err}");
                        Message::DeleteFailed {
                            error: err.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}
