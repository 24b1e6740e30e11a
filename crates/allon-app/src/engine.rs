//! Engine - shared orchestration state for the TUI and headless mode
//!
//! The Engine owns the TEA state, the message channel and the API client.
//! Frontends feed it messages (keys, ticks, scripted steps) and render or
//! report from `engine.state`.

use allon_api::ProjectsApi;
use allon_core::ProjectId;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::status::StatusKind;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    is_loading: bool,
    requested_page: u32,
    selected: Option<ProjectId>,
    dialog_project: Option<ProjectId>,
    applying: Option<ProjectId>,
    status: Option<(StatusKind, String)>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            is_loading: state.page.is_loading,
            requested_page: state.page.requested_page,
            selected: state.page.selected_project_id.clone(),
            dialog_project: state.confirm_dialog.as_ref().map(|d| d.project_id.clone()),
            applying: state.applying.clone(),
            status: state
                .status
                .as_ref()
                .map(|s| (s.kind, s.message.clone())),
        }
    }
}

/// Orchestration engine for the project browser.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, headless driver).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings, after command-line overrides
    pub settings: Settings,

    api: A,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A> Engine<A>
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// Creates the message channel (capacity 256) and spawns the signal
    /// handler, so it must be called inside a tokio runtime.
    pub fn new(settings: Settings, api: A) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            api,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Kick off the first page load
    pub fn start(&mut self) {
        info!("Loading first page from {}", self.settings.api.base_url);
        self.process_message(Message::LoadPage {
            page: 1,
            show_spinner: true,
        });
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner drains
    /// before every render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process incoming messages until no fetch or submission is outstanding
    pub async fn settle(&mut self) {
        while self.state.is_busy() && !self.state.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => break,
            }
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn shutdown(&self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        let page = &self.state.page;

        if !pre.is_loading && post.is_loading {
            self.emit(EngineEvent::PageRequested {
                page: post.requested_page,
            });
        }

        if pre.is_loading && !post.is_loading {
            if page.load_failed {
                self.emit(EngineEvent::PageLoadFailed {
                    page: page.current_page,
                    error: status_message(post),
                });
            } else {
                self.emit(EngineEvent::PageLoaded {
                    page: page.current_page,
                    count: self.state.projects.len(),
                    total_pages: page.total_pages,
                    total_projects: page.total_projects,
                    has_next: page.has_next(),
                });
            }
        }

        if pre.selected != post.selected {
            if let Some(project) = self.state.selected_project() {
                self.emit(EngineEvent::ProjectSelected {
                    id: project.id.clone(),
                    name: project.name.clone(),
                });
            }
        }

        if pre.dialog_project.is_none() {
            if let Some(id) = &post.dialog_project {
                self.emit(EngineEvent::ConfirmRequested { id: id.clone() });
            }
        }

        match (&pre.applying, &post.applying) {
            (None, Some(id)) => self.emit(EngineEvent::ConfigSubmitted { id: id.clone() }),
            (Some(id), None) => {
                let failed = matches!(post.status, Some((StatusKind::Error, _)));
                let message = status_message(post);
                if failed {
                    self.emit(EngineEvent::ConfigApplyFailed {
                        id: id.clone(),
                        error: message,
                    });
                } else {
                    self.emit(EngineEvent::ConfigApplied {
                        id: id.clone(),
                        message,
                    });
                }
            }
            _ => {}
        }

        if pre.status != post.status {
            if let Some((_, message)) = &post.status {
                self.emit(EngineEvent::Status {
                    message: message.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() only fails when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("No engine event subscribers");
        }
    }
}

fn status_message(snapshot: &StateSnapshot) -> String {
    snapshot
        .status
        .as_ref()
        .map(|(_, m)| m.clone())
        .unwrap_or_default()
}
