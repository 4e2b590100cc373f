//! Teams facade over the Microsoft Graph API
//!
//! Every operation follows the same contract: check required identifiers,
//! build the URL from a fixed template, call the transport, and map the JSON
//! body onto a model. A missing response (or a non-2xx one) comes back as
//! `Ok(None)`; only argument problems and undecodable bodies are errors.
//!
//! Archive and unarchive are asynchronous on the server. A `202 Accepted`
//! carries a `Location` header naming the operation's status resource, which
//! is fetched exactly once. There is no polling loop.

use std::borrow::Cow;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::models::{App, AsyncOperation, Channel, Team, ValueList};
use super::transport::{Transport, TransportResponse};
use crate::config::{DEFAULT_API_HOST, DEFAULT_API_VERSION};
use crate::error::{ApiError, Error, Result};

/// Endpoint templates, relative to `<service url><main resource>`
mod endpoints {
    pub const GET_TEAM: &str = "/teams/{team_id}";
    pub const MY_TEAMS: &str = "/me/joinedTeams";
    pub const CHANNELS: &str = "/teams/{team_id}/channels";
    pub const CHANNEL_INFO: &str = "/teams/{team_id}/channels/{channel_id}";
    pub const APPS_IN_TEAM: &str = "/teams/{team_id}/installedApps?$expand=teamsAppDefinition";
    pub const CREATE_TEAM: &str = "/groups/{group_id}/team";
    pub const CLONE_TEAM: &str = "/teams/{team_id}/clone";
    pub const ARCHIVE_TEAM: &str = "/teams/{team_id}/archive";
    pub const UNARCHIVE_TEAM: &str = "/teams/{team_id}/unarchive";
    pub const INSTALLED_APPS: &str = "/teams/{team_id}/installedApps";
}

/// Result of submitting an archive or unarchive request
#[derive(Debug, Clone, PartialEq)]
pub enum ArchiveOutcome {
    /// Server accepted the request; holds the status resource as fetched once.
    /// Check [`AsyncOperation::is_terminal`] before assuming the work is done.
    Completed(AsyncOperation),
    /// Server answered with something other than `202 Accepted`
    Unexpected(u16),
}

/// Shared context a facade can be built from: one transport plus the
/// protocol settings that locate the service.
#[derive(Clone)]
pub struct GraphContext {
    transport: Arc<dyn Transport>,
    service_url: String,
    main_resource: String,
}

impl GraphContext {
    pub fn new(transport: Arc<dyn Transport>, service_url: impl Into<String>) -> Self {
        Self {
            transport,
            service_url: service_url.into(),
            main_resource: String::new(),
        }
    }

    pub fn with_main_resource(mut self, main_resource: impl Into<String>) -> Self {
        self.main_resource = main_resource.into();
        self
    }

    /// Build a Teams facade sharing this context's transport
    pub fn teams(&self) -> Teams {
        Teams::from_parts(
            self.transport.clone(),
            &self.service_url,
            &self.main_resource,
        )
    }
}

/// Builder for [`Teams`].
///
/// Exactly one of [`parent`](Self::parent) or [`transport`](Self::transport)
/// must be supplied.
#[derive(Default)]
pub struct TeamsBuilder {
    parent: Option<GraphContext>,
    transport: Option<Arc<dyn Transport>>,
    service_url: Option<String>,
    main_resource: Option<String>,
}

impl TeamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take transport, service URL and main resource from a shared context
    pub fn parent(mut self, parent: GraphContext) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Use a transport directly
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Service URL; defaults to the public Graph v1.0 endpoint
    pub fn service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    /// Resource prefix; overrides the parent's when both are present
    pub fn main_resource(mut self, main_resource: impl Into<String>) -> Self {
        self.main_resource = Some(main_resource.into());
        self
    }

    pub fn build(self) -> Result<Teams> {
        let (transport, parent_url, parent_resource) = match (self.parent, self.transport) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidArgument(
                    "Need a parent or a transport but not both".to_string(),
                ));
            }
            (None, None) => {
                return Err(Error::InvalidArgument(
                    "Need a parent or a transport".to_string(),
                ));
            }
            (Some(parent), None) => (
                parent.transport,
                Some(parent.service_url),
                parent.main_resource,
            ),
            (None, Some(transport)) => (transport, None, String::new()),
        };

        let service_url = self
            .service_url
            .or(parent_url)
            .unwrap_or_else(|| format!("{}/{}", DEFAULT_API_HOST, DEFAULT_API_VERSION));
        let main_resource = self.main_resource.unwrap_or(parent_resource);

        Ok(Teams::from_parts(transport, &service_url, &main_resource))
    }
}

/// Facade exposing team, channel and installed-app operations
pub struct Teams {
    transport: Arc<dyn Transport>,
    service_url: String,
    main_resource: String,
}

impl std::fmt::Debug for Teams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Teams")
            .field("service_url", &self.service_url)
            .field("main_resource", &self.main_resource)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Teams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Microsoft Teams")
    }
}

impl Teams {
    fn from_parts(transport: Arc<dyn Transport>, service_url: &str, main_resource: &str) -> Self {
        let main_resource = main_resource.trim_matches('/');
        Self {
            transport,
            service_url: service_url.trim_end_matches('/').to_string(),
            main_resource: if main_resource.is_empty() {
                String::new()
            } else {
                format!("/{}", main_resource)
            },
        }
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// List the teams the signed-in user is a member of
    pub async fn list_my_teams(&self) -> Result<Option<Vec<Team>>> {
        let url = self.build_url(endpoints::MY_TEAMS);
        self.fetch_list(Method::GET, &url).await
    }

    /// Create a team under an existing Microsoft 365 group
    pub async fn create_team(&self, group_id: &str) -> Result<Option<Team>> {
        let group_id = require("group_id", group_id)?;
        let url = self.build_url(&endpoints::CREATE_TEAM.replace("{group_id}", &group_id));
        self.fetch_one(Method::PUT, &url, None).await
    }

    /// Put a team into a read-only state.
    ///
    /// With `read_only_for_members`, the team's SharePoint site is also made
    /// read-only for members.
    pub async fn archive_team(
        &self,
        team_id: &str,
        read_only_for_members: bool,
    ) -> Result<Option<ArchiveOutcome>> {
        let team_id = require("team_id", team_id)?;
        let url = self.build_url(&endpoints::ARCHIVE_TEAM.replace("{team_id}", &team_id));
        let body = read_only_for_members.then(|| json!({ "shouldSetSpoSiteReadOnlyForMembers": true }));
        self.submit_async(&url, body).await
    }

    /// Restore an archived team to a read-write state
    pub async fn unarchive_team(&self, team_id: &str) -> Result<Option<ArchiveOutcome>> {
        let team_id = require("team_id", team_id)?;
        let url = self.build_url(&endpoints::UNARCHIVE_TEAM.replace("{team_id}", &team_id));
        self.submit_async(&url, None).await
    }

    /// Declared for parity with the Graph surface; always `NotImplemented`.
    pub async fn get_team(&self, _team_id: &str) -> Result<Option<Team>> {
        log::debug!("get_team is declared for {}", endpoints::GET_TEAM);
        Err(Error::NotImplemented("get_team"))
    }

    /// Declared for parity with the Graph surface; always `NotImplemented`.
    pub async fn update_team(&self, _team_id: &str) -> Result<Option<Team>> {
        log::debug!("update_team is declared for {}", endpoints::GET_TEAM);
        Err(Error::NotImplemented("update_team"))
    }

    /// Declared for parity with the Graph surface; always `NotImplemented`.
    pub async fn clone_team(&self, _team_id: &str) -> Result<Option<ArchiveOutcome>> {
        log::debug!("clone_team is declared for {}", endpoints::CLONE_TEAM);
        Err(Error::NotImplemented("clone_team"))
    }

    // ========================================================================
    // Channels
    // ========================================================================

    /// List the channels of a team
    pub async fn list_channels(&self, team_id: &str) -> Result<Option<Vec<Channel>>> {
        let team_id = require("team_id", team_id)?;
        let url = self.build_url(&endpoints::CHANNELS.replace("{team_id}", &team_id));
        self.fetch_list(Method::GET, &url).await
    }

    /// Create a channel; `description` is only sent when non-empty
    pub async fn create_channel(
        &self,
        team_id: &str,
        display_name: &str,
        description: Option<&str>,
    ) -> Result<Option<Channel>> {
        let team_id = require("team_id", team_id)?;
        let url = self.build_url(&endpoints::CHANNELS.replace("{team_id}", &team_id));

        let mut body = json!({ "displayName": display_name });
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            body["description"] = Value::from(description);
        }

        self.fetch_one(Method::POST, &url, Some(&body)).await
    }

    /// Get a single channel of a team
    pub async fn get_channel_info(
        &self,
        team_id: &str,
        channel_id: &str,
    ) -> Result<Option<Channel>> {
        let team_id = require("team_id", team_id)?;
        let channel_id = require("channel_id", channel_id)?;
        let url = self.build_url(
            &endpoints::CHANNEL_INFO
                .replace("{team_id}", &team_id)
                .replace("{channel_id}", &channel_id),
        );
        self.fetch_one(Method::GET, &url, None).await
    }

    // ========================================================================
    // Apps
    // ========================================================================

    /// List apps installed in a team, with their catalog definitions expanded
    pub async fn list_installed_apps(&self, team_id: &str) -> Result<Option<Vec<App>>> {
        let team_id = require("team_id", team_id)?;
        let url = self.build_url(&endpoints::APPS_IN_TEAM.replace("{team_id}", &team_id));
        self.fetch_list(Method::GET, &url).await
    }

    /// Declared for parity with the Graph surface; always `NotImplemented`.
    pub async fn install_app(&self, _team_id: &str) -> Result<Option<App>> {
        log::debug!("install_app is declared for {}", endpoints::INSTALLED_APPS);
        Err(Error::NotImplemented("install_app"))
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    fn build_url(&self, path: &str) -> String {
        format!("{}{}{}", self.service_url, self.main_resource, path)
    }

    /// Relative `Location` values are resolved against the service URL
    fn resolve_location(&self, location: &str) -> String {
        if location.starts_with("http://") || location.starts_with("https://") {
            location.to_string()
        } else if location.starts_with('/') {
            format!("{}{}", self.service_url, location)
        } else {
            format!("{}/{}", self.service_url, location)
        }
    }

    /// Send a request, treating no response and non-2xx alike as absent
    async fn fetch(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Option<TransportResponse> {
        match self.transport.send(method, url, body).await {
            Some(response) if response.is_success() => Some(response),
            Some(response) => {
                log::debug!("HTTP {} from {}, treating as absent", response.status, url);
                None
            }
            None => {
                log::debug!("No response from {}", url);
                None
            }
        }
    }

    async fn fetch_one<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Option<T>> {
        match self.fetch(method, url, body).await {
            Some(response) => response.json().map(Some),
            None => Ok(None),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
    ) -> Result<Option<Vec<T>>> {
        match self.fetch(method, url, None).await {
            Some(response) => {
                let list: ValueList<T> = response.json()?;
                Ok(Some(list.value))
            }
            None => Ok(None),
        }
    }

    /// POST, then follow the `Location` of a `202 Accepted` with one GET
    async fn submit_async(&self, url: &str, body: Option<Value>) -> Result<Option<ArchiveOutcome>> {
        let Some(response) = self.transport.post(url, body.as_ref()).await else {
            log::debug!("No response from {}", url);
            return Ok(None);
        };

        if response.status != 202 {
            return Ok(Some(ArchiveOutcome::Unexpected(response.status)));
        }

        let location = response.location.as_deref().ok_or_else(|| {
            ApiError::InvalidResponse("202 Accepted without a Location header".to_string())
        })?;
        let status_url = self.resolve_location(location);
        log::info!("Following async operation at {}", status_url);

        let operation: Option<AsyncOperation> =
            self.fetch_one(Method::GET, &status_url, None).await?;
        Ok(operation.map(ArchiveOutcome::Completed))
    }
}

/// Reject a missing identifier before any request is made, and turn the
/// trimmed id into a single percent-encoded path segment.
fn require<'a>(name: &str, value: &'a str) -> Result<Cow<'a, str>> {
    let value = value.trim();
    if value.is_empty() {
        Err(Error::InvalidArgument(format!("Provide the {}", name)))
    } else {
        Ok(urlencoding::encode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use serde_json::json;

    const BASE: &str = "https://graph.microsoft.com/v1.0";

    fn teams_with(transport: &Arc<MockTransport>) -> Teams {
        TeamsBuilder::new()
            .transport(transport.clone())
            .build()
            .unwrap()
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_builder_rejects_parent_and_transport() {
        let transport: Arc<dyn Transport> = Arc::new(MockTransport::new());
        let parent = GraphContext::new(transport.clone(), BASE);

        let err = TeamsBuilder::new()
            .parent(parent)
            .transport(transport)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_builder_rejects_neither() {
        let err = TeamsBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_parent_supplies_service_url_and_main_resource() {
        let transport = Arc::new(MockTransport::new());
        let parent = GraphContext::new(transport.clone(), "http://localhost:8080/beta/")
            .with_main_resource("users/alice/");
        let teams = TeamsBuilder::new().parent(parent).build().unwrap();

        teams.list_my_teams().await.unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:8080/beta/users/alice/me/joinedTeams"
        );
    }

    #[tokio::test]
    async fn test_builder_main_resource_overrides_parent() {
        let transport = Arc::new(MockTransport::new());
        let parent = GraphContext::new(transport.clone(), BASE).with_main_resource("/users/alice");
        let teams = TeamsBuilder::new()
            .parent(parent)
            .main_resource("")
            .build()
            .unwrap();

        teams.list_my_teams().await.unwrap();

        assert_eq!(transport.requests()[0].url, format!("{BASE}/me/joinedTeams"));
    }

    #[tokio::test]
    async fn test_context_teams_shortcut() {
        let transport = Arc::new(MockTransport::new());
        let teams = GraphContext::new(transport.clone(), BASE).teams();

        teams.list_channels("T1").await.unwrap();

        assert_eq!(transport.requests()[0].url, format!("{BASE}/teams/T1/channels"));
        assert_eq!(teams.to_string(), "Microsoft Teams");
    }

    // ------------------------------------------------------------------------
    // Argument validation
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_missing_identifiers_fail_before_any_request() {
        let transport = Arc::new(MockTransport::new());
        let teams = teams_with(&transport);

        let results = vec![
            teams.list_channels("").await.map(|_| ()),
            teams.create_channel("", "General", None).await.map(|_| ()),
            teams.get_channel_info("", "C1").await.map(|_| ()),
            teams.get_channel_info("T1", "  ").await.map(|_| ()),
            teams.list_installed_apps("").await.map(|_| ()),
            teams.create_team("").await.map(|_| ()),
            teams.archive_team("", false).await.map(|_| ()),
            teams.unarchive_team("").await.map(|_| ()),
        ];

        for result in results {
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_argument_names_the_identifier() {
        let teams = teams_with(&Arc::new(MockTransport::new()));

        let err = teams.create_team("").await.unwrap_err();
        assert!(err.to_string().contains("group_id"));

        let err = teams.get_channel_info("T1", "").await.unwrap_err();
        assert!(err.to_string().contains("channel_id"));
    }

    #[tokio::test]
    async fn test_identifiers_are_trimmed() {
        let transport = Arc::new(MockTransport::new());
        let teams = teams_with(&transport);

        teams.list_channels(" T1 ").await.unwrap();

        assert_eq!(transport.requests()[0].url, format!("{BASE}/teams/T1/channels"));
    }

    #[tokio::test]
    async fn test_identifiers_stay_inside_their_path_segment() {
        let transport = Arc::new(MockTransport::new());
        let teams = teams_with(&transport);

        teams.list_channels("T1?x").await.unwrap();
        teams.list_channels("T1/../me#frag").await.unwrap();
        teams
            .get_channel_info("T1", "19:abc@thread.tacv2")
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, format!("{BASE}/teams/T1%3Fx/channels"));
        assert_eq!(
            requests[1].url,
            format!("{BASE}/teams/T1%2F..%2Fme%23frag/channels")
        );
        assert_eq!(
            requests[2].url,
            format!("{BASE}/teams/T1/channels/19%3Aabc%40thread.tacv2")
        );
    }

    // ------------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_channels_maps_value_array() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"value": [{"id": "C1", "displayName": "General"}]}),
        ));
        let teams = teams_with(&transport);

        let channels = teams.list_channels("T1").await.unwrap().unwrap();

        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].id(), "C1");
        assert_eq!(channels[0].display_name(), "General");

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url, format!("{BASE}/teams/T1/channels"));
    }

    #[tokio::test]
    async fn test_list_my_teams() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"value": [
                {"id": "T1", "displayName": "Engineering", "isArchived": false},
                {"id": "T2", "displayName": "Sales", "isArchived": true}
            ]}),
        ));
        let teams = teams_with(&transport);

        let my_teams = teams.list_my_teams().await.unwrap().unwrap();

        assert_eq!(my_teams.len(), 2);
        assert!(my_teams[1].is_archived());
        assert_eq!(transport.requests()[0].url, format!("{BASE}/me/joinedTeams"));
    }

    #[tokio::test]
    async fn test_list_installed_apps_expands_definition() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"value": [
                {"id": "A1", "teamsAppDefinition": {"displayName": "Planner"}}
            ]}),
        ));
        let teams = teams_with(&transport);

        let apps = teams.list_installed_apps("T1").await.unwrap().unwrap();

        assert_eq!(apps[0].display_name(), "Planner");
        assert_eq!(
            transport.requests()[0].url,
            format!("{BASE}/teams/T1/installedApps?$expand=teamsAppDefinition")
        );
    }

    #[tokio::test]
    async fn test_empty_value_is_empty_not_absent() {
        let transport = Arc::new(
            MockTransport::new()
                .respond_json(200, json!({"value": []}))
                .respond_json(200, json!({"value": []}))
                .respond_json(200, json!({"value": []})),
        );
        let teams = teams_with(&transport);

        assert_eq!(teams.list_my_teams().await.unwrap(), Some(vec![]));
        assert_eq!(teams.list_channels("T1").await.unwrap(), Some(vec![]));
        assert_eq!(teams.list_installed_apps("T1").await.unwrap(), Some(vec![]));
    }

    #[tokio::test]
    async fn test_no_response_is_absent_not_empty() {
        let transport = Arc::new(
            MockTransport::new()
                .no_response()
                .no_response()
                .no_response(),
        );
        let teams = teams_with(&transport);

        assert!(teams.list_my_teams().await.unwrap().is_none());
        assert!(teams.list_channels("T1").await.unwrap().is_none());
        assert!(teams.list_installed_apps("T1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_absent() {
        let transport = Arc::new(
            MockTransport::new()
                .respond_json(404, json!({"error": {"code": "NotFound"}}))
                .respond_json(403, json!({"error": {"code": "Forbidden"}})),
        );
        let teams = teams_with(&transport);

        assert!(teams.list_channels("T404").await.unwrap().is_none());
        assert!(teams.create_team("G1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_an_error() {
        let transport =
            Arc::new(MockTransport::new().respond(TransportResponse::new(200, "not json")));
        let teams = teams_with(&transport);

        let err = teams.list_my_teams().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    // ------------------------------------------------------------------------
    // Channels
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_channel_omits_missing_description() {
        let transport = Arc::new(
            MockTransport::new()
                .respond_json(201, json!({"id": "C1", "displayName": "Ops"}))
                .respond_json(201, json!({"id": "C2", "displayName": "Ops"})),
        );
        let teams = teams_with(&transport);

        let channel = teams.create_channel("T1", "Ops", None).await.unwrap().unwrap();
        assert_eq!(channel.id(), "C1");
        teams.create_channel("T1", "Ops", Some("")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].url, format!("{BASE}/teams/T1/channels"));
        assert_eq!(requests[0].body, Some(json!({"displayName": "Ops"})));
        assert_eq!(requests[1].body, Some(json!({"displayName": "Ops"})));
    }

    #[tokio::test]
    async fn test_create_channel_includes_description_verbatim() {
        let transport =
            Arc::new(MockTransport::new().respond_json(201, json!({"id": "C1"})));
        let teams = teams_with(&transport);

        teams
            .create_channel("T1", "Ops", Some("  On-call & incidents "))
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"displayName": "Ops", "description": "  On-call & incidents "}))
        );
    }

    #[tokio::test]
    async fn test_get_channel_info() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"id": "C9", "displayName": "Design", "email": "design@contoso.com"}),
        ));
        let teams = teams_with(&transport);

        let channel = teams.get_channel_info("T1", "C9").await.unwrap().unwrap();

        assert_eq!(channel.email(), "design@contoso.com");
        assert_eq!(
            transport.requests()[0].url,
            format!("{BASE}/teams/T1/channels/C9")
        );
    }

    // ------------------------------------------------------------------------
    // Team lifecycle
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_team_uses_put() {
        let transport = Arc::new(
            MockTransport::new().respond_json(201, json!({"id": "G1", "displayName": "New"})),
        );
        let teams = teams_with(&transport);

        let team = teams.create_team("G1").await.unwrap().unwrap();

        assert_eq!(team.id(), "G1");
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].url, format!("{BASE}/groups/G1/team"));
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_archive_follows_location_once() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(TransportResponse::new(202, "").with_location("/teamsAsyncOperations/OP1"))
                .respond_json(200, json!({"id": "OP1", "status": "succeeded"})),
        );
        let teams = teams_with(&transport);

        let outcome = teams.archive_team("T1", false).await.unwrap().unwrap();

        match outcome {
            ArchiveOutcome::Completed(op) => {
                assert_eq!(op.id(), "OP1");
                assert_eq!(op.status(), "succeeded");
            }
            other => panic!("Expected Completed, got {:?}", other),
        }

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].url, format!("{BASE}/teams/T1/archive"));
        assert!(requests[0].body.is_none());
        assert_eq!(requests[1].method, Method::GET);
        assert_eq!(requests[1].url, format!("{BASE}/teamsAsyncOperations/OP1"));
    }

    #[tokio::test]
    async fn test_archive_does_not_repoll_unfinished_operation() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(TransportResponse::new(202, "").with_location("/teams('T1')/operations('OP1')"))
                .respond_json(200, json!({"id": "OP1", "status": "inProgress"})),
        );
        let teams = teams_with(&transport);

        let outcome = teams.archive_team("T1", false).await.unwrap().unwrap();

        let ArchiveOutcome::Completed(op) = outcome else {
            panic!("Expected Completed");
        };
        assert!(!op.is_terminal());
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_archive_read_only_for_members_sends_body() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(TransportResponse::new(202, "").with_location("/op")),
        );
        let teams = teams_with(&transport);

        teams.archive_team("T1", true).await.unwrap();

        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"shouldSetSpoSiteReadOnlyForMembers": true}))
        );
    }

    #[tokio::test]
    async fn test_archive_unexpected_status() {
        let transport = Arc::new(
            MockTransport::new()
                .respond_json(400, json!({"error": {"code": "BadRequest"}}))
                .respond(TransportResponse::new(204, "")),
        );
        let teams = teams_with(&transport);

        assert_eq!(
            teams.archive_team("T1", false).await.unwrap(),
            Some(ArchiveOutcome::Unexpected(400))
        );
        assert_eq!(
            teams.unarchive_team("T1").await.unwrap(),
            Some(ArchiveOutcome::Unexpected(204))
        );
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_archive_no_response_is_absent() {
        let transport = Arc::new(MockTransport::new().no_response());
        let teams = teams_with(&transport);

        assert!(teams.archive_team("T1", false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_archive_without_location_is_an_error() {
        let transport = Arc::new(MockTransport::new().respond(TransportResponse::new(202, "")));
        let teams = teams_with(&transport);

        let err = teams.archive_team("T1", false).await.unwrap_err();
        assert!(err.to_string().contains("Location"));
    }

    #[tokio::test]
    async fn test_archive_status_fetch_without_response_is_absent() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(TransportResponse::new(202, "").with_location("/op"))
                .no_response(),
        );
        let teams = teams_with(&transport);

        assert!(teams.archive_team("T1", false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unarchive_follows_absolute_location() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(
                    TransportResponse::new(202, "")
                        .with_location("https://graph.microsoft.com/v1.0/teams('T1')/operations('OP7')"),
                )
                .respond_json(
                    200,
                    json!({"id": "OP7", "operationType": "unarchiveTeam", "status": "notStarted"}),
                ),
        );
        let teams = teams_with(&transport);

        let outcome = teams.unarchive_team("T1").await.unwrap().unwrap();

        let ArchiveOutcome::Completed(op) = outcome else {
            panic!("Expected Completed");
        };
        assert_eq!(op.operation_type(), "unarchiveTeam");

        let requests = transport.requests();
        assert_eq!(requests[0].url, format!("{BASE}/teams/T1/unarchive"));
        assert_eq!(
            requests[1].url,
            "https://graph.microsoft.com/v1.0/teams('T1')/operations('OP7')"
        );
    }

    #[tokio::test]
    async fn test_unimplemented_operations_signal_and_skip_network() {
        let transport = Arc::new(MockTransport::new());
        let teams = teams_with(&transport);

        assert!(matches!(
            teams.get_team("T1").await,
            Err(Error::NotImplemented("get_team"))
        ));
        assert!(matches!(
            teams.update_team("T1").await,
            Err(Error::NotImplemented("update_team"))
        ));
        assert!(matches!(
            teams.clone_team("T1").await,
            Err(Error::NotImplemented("clone_team"))
        ));
        assert!(matches!(
            teams.install_app("T1").await,
            Err(Error::NotImplemented("install_app"))
        ));
        assert!(transport.requests().is_empty());
    }
}
