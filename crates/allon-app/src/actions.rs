//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Tasks only talk back through the message channel; they never see
//! `AppState`.

use allon_api::ProjectsApi;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: &A)
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchPage { page, limit } => {
            let api = api.clone();
            tokio::spawn(async move {
                let msg = match api.list_projects(page, limit).await {
                    Ok(result) => Message::PageLoaded { page, result },
                    Err(e) => {
                        warn!("Fetching page {} failed: {}", page, e);
                        Message::PageLoadFailed {
                            page,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::ApplyProject { project } => {
            let api = api.clone();
            tokio::spawn(async move {
                let id = project.id.clone();
                let msg = match api.apply_project(&project).await {
                    Ok(message) => Message::ConfigApplied { id, message },
                    Err(e) => {
                        warn!("Applying configuration of {} failed: {}", id, e);
                        Message::ConfigApplyFailed {
                            id,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}
