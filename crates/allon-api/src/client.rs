//! HTTP client for the projects API

use allon_core::prelude::*;
use allon_core::{LoadResponse, Project, ProjectId, ProjectPage, ProjectsEnvelope};
use url::Url;

use crate::mode::ApplyMode;

const USER_AGENT: &str = concat!("allon/", env!("CARGO_PKG_VERSION"));

/// Operations the browser needs from the projects API
///
/// No timeout, retry or cancellation is layered on top: a request either
/// completes or fails with whatever the transport reports.
#[trait_variant::make(ProjectsApi: Send)]
pub trait LocalProjectsApi {
    /// Fetch one page of projects
    async fn list_projects(&self, page: u32, limit: usize) -> Result<ProjectPage>;

    /// Apply a project's configuration to the device
    ///
    /// Returns the server's confirmation message, if it sent one.
    async fn apply_project(&self, project: &Project) -> Result<Option<String>>;
}

/// `reqwest` implementation of [`ProjectsApi`]
#[derive(Debug, Clone)]
pub struct HttpProjectsApi {
    client: reqwest::Client,
    base_url: Url,
    mode: ApplyMode,
}

impl HttpProjectsApi {
    /// Create a client for the API rooted at `base_url`
    ///
    /// # Errors
    /// Returns [`Error::InvalidUrl`] when `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str, mode: ApplyMode) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            mode,
        })
    }

    /// Base URL without a trailing slash, for display
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn mode(&self) -> ApplyMode {
        self.mode
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::invalid_url(self.base_url.as_str()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /api/projects?page={page}&limit={limit}`
    pub async fn fetch_page(&self, page: u32, limit: usize) -> Result<ProjectPage> {
        let url = self.endpoint(&["api", "projects"])?;
        debug!(%url, page, limit, "Fetching projects");

        let response = self
            .client
            .get(url)
            .query(&[("page", page as u64), ("limit", limit as u64)])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            let err = status_error(status, &body);
            warn!(status = status.as_u16(), %err, "Project list request failed");
            return Err(err);
        }

        let envelope: ProjectsEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::protocol(e.to_string()))?;
        envelope.into_page()
    }

    /// `POST /api/config/load` with the whole project as the body
    pub async fn load_config(&self, project: &Project) -> Result<Option<String>> {
        let url = self.endpoint(&["api", "config", "load"])?;
        info!(%url, project = %project.id, "Applying project configuration");

        let response = self
            .client
            .post(url)
            .json(project)
            .send()
            .await
            .map_err(transport)?;
        read_load_response(response).await
    }

    /// `POST /api/project/{id}/load` with an empty body
    pub async fn load_project_by_id(&self, id: &ProjectId) -> Result<Option<String>> {
        let url = self.endpoint(&["api", "project", id.as_str(), "load"])?;
        info!(%url, project = %id, "Loading project by id");

        let response = self.client.post(url).send().await.map_err(transport)?;
        read_load_response(response).await
    }
}

impl ProjectsApi for HttpProjectsApi {
    async fn list_projects(&self, page: u32, limit: usize) -> Result<ProjectPage> {
        self.fetch_page(page, limit).await
    }

    async fn apply_project(&self, project: &Project) -> Result<Option<String>> {
        match self.mode {
            ApplyMode::ConfigLoad => self.load_config(project).await,
            ApplyMode::ProjectLoad => self.load_project_by_id(&project.id).await,
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(format!("{raw}: expected an http(s) URL")));
    }
    Ok(url)
}

fn transport(e: reqwest::Error) -> Error {
    Error::transport(e.to_string())
}

async fn read_load_response(response: reqwest::Response) -> Result<Option<String>> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        let err = status_error(status, &body);
        warn!(status = status.as_u16(), %err, "Configuration apply rejected");
        return Err(err);
    }

    serde_json::from_str::<LoadResponse>(&body)
        .map_err(|e| Error::protocol(e.to_string()))?
        .into_result()
}

/// Error for a non-2xx answer; a JSON `message`/`error` beats the bare status code
fn status_error(status: reqwest::StatusCode, body: &str) -> Error {
    let reason = serde_json::from_str::<LoadResponse>(body)
        .ok()
        .and_then(|r| r.message.or(r.error))
        .filter(|m| !m.trim().is_empty());

    match reason {
        Some(message) => Error::rejected(message),
        None => Error::HttpStatus {
            status: status.as_u16(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpProjectsApi, ProjectsApi};
    use crate::mode::ApplyMode;
    use allon_core::{Error, Project, GENERIC_APPLY_ERROR};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer, mode: ApplyMode) -> HttpProjectsApi {
        HttpProjectsApi::new(&server.uri(), mode).unwrap()
    }

    #[tokio::test]
    async fn test_list_projects_sends_page_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"id": 6, "name": "Six"}],
                "total": 6
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = api(&server, ApplyMode::ConfigLoad)
            .list_projects(2, 5)
            .await
            .unwrap();
        assert_eq!(page.projects.len(), 1);
        assert_eq!(page.projects[0].id.as_str(), "6");
        assert_eq!(page.total, Some(6));
    }

    #[tokio::test]
    async fn test_list_projects_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = api(&server, ApplyMode::ConfigLoad)
            .list_projects(1, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn test_list_projects_http_error_with_json_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(
                    json!({"success": false, "error": "Failed to fetch projects"}),
                ),
            )
            .mount(&server)
            .await;

        let err = api(&server, ApplyMode::ConfigLoad)
            .list_projects(1, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rejected { .. }));
        assert_eq!(err.to_string(), "Failed to fetch projects");
    }

    #[tokio::test]
    async fn test_list_projects_unsuccessful_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "error": "Failed to fetch projects"})),
            )
            .mount(&server)
            .await;

        let err = api(&server, ApplyMode::ConfigLoad)
            .list_projects(1, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[tokio::test]
    async fn test_list_projects_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = api(&server, ApplyMode::ConfigLoad)
            .list_projects(1, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[tokio::test]
    async fn test_apply_posts_whole_project() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .and(body_partial_json(json!({
                "id": "p-1",
                "name": "Greenhouse",
                "owner": "lab",
                "config": {"config": [{"ID": "fan"}]}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Configuration applied"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let project: Project = serde_json::from_value(json!({
            "id": "p-1",
            "name": "Greenhouse",
            "owner": "lab",
            "config": {"config": [{"ID": "fan"}]}
        }))
        .unwrap();

        let message = api(&server, ApplyMode::ConfigLoad)
            .apply_project(&project)
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Configuration applied"));
    }

    #[tokio::test]
    async fn test_apply_by_id_in_project_load_mode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/project/7/load"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let project = Project::new("7", "Seven").with_config(json!({"config": []}));
        let message = api(&server, ApplyMode::ProjectLoad)
            .apply_project(&project)
            .await
            .unwrap();
        assert_eq!(message, None);
    }

    #[tokio::test]
    async fn test_apply_rejected_uses_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "message": "Device busy"})),
            )
            .mount(&server)
            .await;

        let project = Project::new("1", "A").with_config(json!({}));
        let err = api(&server, ApplyMode::ConfigLoad)
            .apply_project(&project)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Device busy");
    }

    #[tokio::test]
    async fn test_apply_rejected_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let project = Project::new("1", "A").with_config(json!({}));
        let err = api(&server, ApplyMode::ConfigLoad)
            .apply_project(&project)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), GENERIC_APPLY_ERROR);
    }

    #[tokio::test]
    async fn test_apply_http_error_with_json_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"success": false, "error": "Invalid JSON"})),
            )
            .mount(&server)
            .await;

        let project = Project::new("1", "A").with_config(json!({}));
        let err = api(&server, ApplyMode::ConfigLoad)
            .apply_project(&project)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rejected { .. }));
        assert_eq!(err.to_string(), "Invalid JSON");
    }

    #[tokio::test]
    async fn test_apply_http_error_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/config/load"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let project = Project::new("1", "A").with_config(json!({}));
        let err = api(&server, ApplyMode::ConfigLoad)
            .apply_project(&project)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 502 }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let api = HttpProjectsApi::new("http://127.0.0.1:1", ApplyMode::ConfigLoad).unwrap();
        let err = api.list_projects(1, 5).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[test]
    fn test_invalid_base_urls() {
        for raw in ["not a url", "mailto:someone@example.com", "ftp://example.com"] {
            let err = HttpProjectsApi::new(raw, ApplyMode::ConfigLoad).unwrap_err();
            assert!(matches!(err, Error::InvalidUrl { .. }), "{raw}");
        }
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = HttpProjectsApi::new("http://device.local/esp/", ApplyMode::ConfigLoad).unwrap();
        let url = api.endpoint(&["api", "project", "a b", "load"]).unwrap();
        assert_eq!(url.as_str(), "http://device.local/esp/api/project/a%20b/load");
        assert_eq!(api.base_url(), "http://device.local/esp");
    }
}
