//! Headless mode runner - scripted scenario without a TUI
//!
//! Drives the Engine through the same operations a user would: load the
//! first page, select, page forward, load the selection and confirm. Every
//! engine event is forwarded to stdout as it happens.

use std::path::{Path, PathBuf};

use allon_app::{Engine, EngineEvent, Message, ProjectsApi, StatusKind};
use allon_core::prelude::*;
use allon_tui::snapshot::{render_to_string, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
use chrono::Local;
use serde::Serialize;
use tokio::sync::broadcast;

use super::HeadlessEvent;

/// Options for a headless run
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Where to write the final screen; `None` skips the snapshot
    pub snapshots_folder: Option<PathBuf>,
}

/// How the scenario ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// The device accepted a configuration
    Applied,
    /// The list had no project to apply
    NothingToApply,
    /// A page fetch failed
    LoadFailed,
    /// The project could not be submitted or the device refused it
    ApplyFailed,
    /// Quit signal received mid-run
    Interrupted,
}

impl ScenarioOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ScenarioOutcome::Applied | ScenarioOutcome::NothingToApply
        )
    }
}

/// Run the scenario, write the snapshot and report the outcome
pub async fn run_headless<A>(mut engine: Engine<A>, options: HeadlessOptions) -> Result<ScenarioOutcome>
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Allon starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut events = engine.subscribe();
    HeadlessEvent::started(&engine.settings.api.base_url, engine.settings.api.apply_mode).emit();

    let outcome = run_scenario(&mut engine, &mut events).await;
    info!("Scenario finished: {:?}", outcome);

    if let Some(folder) = &options.snapshots_folder {
        match write_snapshot(&engine, folder) {
            Ok(path) => HeadlessEvent::snapshot(&path).emit(),
            Err(e) => {
                warn!("Failed to write snapshot: {}", e);
                HeadlessEvent::error(format!("Failed to write snapshot: {e}"), false).emit();
            }
        }
    }

    engine.shutdown();
    forward_events(&mut events);
    HeadlessEvent::finished(outcome).emit();

    Ok(outcome)
}

/// The scripted steps; stops at the first failure
pub async fn run_scenario<A>(
    engine: &mut Engine<A>,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> ScenarioOutcome
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    step("load_page", events);
    engine.start();
    if let Some(outcome) = settle_page(engine, events).await {
        return outcome;
    }
    if !select_first(engine, events) {
        return ScenarioOutcome::NothingToApply;
    }
    let mut target = engine.state.page.selected_project_id.clone();

    if engine.state.page.has_next() {
        step("next_page", events);
        engine.process_message(Message::NextPage);
        if let Some(outcome) = settle_page(engine, events).await {
            return outcome;
        }

        if engine.state.projects.is_empty() {
            // A full last page still offers "next"; the page after it is empty.
            info!(
                "Page {} is empty, returning to the previous page",
                engine.state.page.current_page
            );
            step("previous_page", events);
            engine.process_message(Message::PreviousPage);
            if let Some(outcome) = settle_page(engine, events).await {
                return outcome;
            }
            if let Some(id) = target.clone() {
                step("select_project", events);
                engine.process_message(Message::SelectProject(id));
                forward_events(events);
            }
        } else if select_first(engine, events) {
            target = engine.state.page.selected_project_id.clone();
        }
    }

    let Some(target) = target else {
        return ScenarioOutcome::NothingToApply;
    };

    step("load_project", events);
    engine.process_message(Message::LoadProject(target));
    forward_events(events);
    if engine.state.confirm_dialog.is_none() {
        return ScenarioOutcome::ApplyFailed;
    }

    step("confirm_load", events);
    engine.process_message(Message::ConfirmLoad);
    engine.settle().await;
    forward_events(events);

    if engine.should_quit() {
        return ScenarioOutcome::Interrupted;
    }
    match engine.state.status.as_ref().map(|s| s.kind) {
        Some(StatusKind::Success) => ScenarioOutcome::Applied,
        _ => ScenarioOutcome::ApplyFailed,
    }
}

/// Wait for the outstanding page fetch; `Some` when the run must stop
async fn settle_page<A>(
    engine: &mut Engine<A>,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Option<ScenarioOutcome>
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    engine.settle().await;
    forward_events(events);

    if engine.should_quit() {
        Some(ScenarioOutcome::Interrupted)
    } else if engine.state.page.load_failed {
        Some(ScenarioOutcome::LoadFailed)
    } else {
        None
    }
}

/// Select the first project of the displayed page
fn select_first<A>(engine: &mut Engine<A>, events: &mut broadcast::Receiver<EngineEvent>) -> bool
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    let Some(first) = engine.state.projects.first().map(|p| p.id.clone()) else {
        info!("Page {} has no projects", engine.state.page.current_page);
        return false;
    };

    step("select_project", events);
    engine.process_message(Message::SelectProject(first));
    forward_events(events);
    true
}

fn step(name: &str, events: &mut broadcast::Receiver<EngineEvent>) {
    forward_events(events);
    info!("Headless step: {}", name);
    HeadlessEvent::step(name).emit();
}

/// Emit every engine event received so far
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(line) = HeadlessEvent::from_engine(&event) {
                    line.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless report skipped {} engine events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Render the final screen into `{folder}/result-{timestamp}.txt`
fn write_snapshot<A>(engine: &Engine<A>, folder: &Path) -> Result<PathBuf>
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    std::fs::create_dir_all(folder)
        .with_context(|| format!("Failed to create {}", folder.display()))?;

    let stamp = Local::now().format("%Y-%m-%d-%H:%M:%S");
    let path = folder.join(format!("result-{stamp}.txt"));
    let text = render_to_string(&engine.state, SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)?;
    std::fs::write(&path, text).context("Failed to write snapshot")?;

    info!("Snapshot written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use allon_app::config::Settings;
    use allon_app::{ApplyMode, HttpProjectsApi};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_json(ids: std::ops::RangeInclusive<u32>) -> serde_json::Value {
        let data: Vec<_> = ids
            .map(|i| {
                json!({
                    "id": i,
                    "name": format!("Project {i}"),
                    "config": {"config": [{"ID": "pump", "ESPinner_Mod": "DC"}]}
                })
            })
            .collect();
        json!({"success": true, "data": data})
    }

    fn engine_for(server: &MockServer) -> Engine<HttpProjectsApi> {
        let mut settings = Settings::default();
        settings.api.base_url = server.uri();
        let api = HttpProjectsApi::new(&server.uri(), ApplyMode::ConfigLoad).unwrap();
        Engine::new(settings, api)
    }

    #[tokio::test]
    async fn test_scenario_applies_first_project_of_second_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1..=5)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(6..=7)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .and(body_partial_json(json!({"id": "6"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let mut engine = engine_for(&server);
        let mut events = engine.subscribe();
        let outcome = run_scenario(&mut engine, &mut events).await;

        assert_eq!(outcome, ScenarioOutcome::Applied);
        assert_eq!(engine.state.page.current_page, 2);
    }

    #[tokio::test]
    async fn test_scenario_returns_from_empty_trailing_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1..=5)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .and(body_partial_json(json!({"id": "1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let mut engine = engine_for(&server);
        let mut events = engine.subscribe();
        let outcome = run_scenario(&mut engine, &mut events).await;

        assert_eq!(outcome, ScenarioOutcome::Applied);
        assert_eq!(engine.state.page.current_page, 1);
        assert_eq!(engine.state.projects.len(), 5);
        assert_eq!(
            engine.state.page.selected_project_id,
            Some(allon_core::ProjectId::from("1"))
        );
    }

    #[tokio::test]
    async fn test_scenario_stops_on_failed_load() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let mut engine = engine_for(&server);
        let mut events = engine.subscribe();
        let outcome = run_scenario(&mut engine, &mut events).await;

        assert_eq!(outcome, ScenarioOutcome::LoadFailed);
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_scenario_with_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})),
            )
            .mount(&server)
            .await;

        let mut engine = engine_for(&server);
        let mut events = engine.subscribe();
        let outcome = run_scenario(&mut engine, &mut events).await;

        assert_eq!(outcome, ScenarioOutcome::NothingToApply);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_run_headless_writes_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1..=2)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Configuration applied"})),
            )
            .mount(&server)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let folder = temp.path().join("screenshots");
        let options = HeadlessOptions {
            snapshots_folder: Some(folder.clone()),
        };

        let outcome = run_headless(engine_for(&server), options).await.unwrap();
        assert_eq!(outcome, ScenarioOutcome::Applied);

        let files: Vec<_> = std::fs::read_dir(&folder).unwrap().flatten().collect();
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().to_string_lossy().to_string();
        assert!(name.starts_with("result-") && name.ends_with(".txt"));

        let text = std::fs::read_to_string(files[0].path()).unwrap();
        assert!(text.contains("Allon"));
        assert!(text.contains("Configuration applied"));
    }
}
