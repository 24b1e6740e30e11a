//! Message processing
//!
//! Runs the TEA update function until no follow-up message remains and hands
//! every resulting action to the action dispatcher.

use allon_api::ProjectsApi;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &A,
) where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
