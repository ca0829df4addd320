//
//  testrail-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TestRail Client
//!
//! [`TestRailClient`] is the facade over the whole API. Resource operations
//! (`get_case`, `add_run`, ...) live in [`crate::api::resources`] as
//! additional `impl TestRailClient` blocks; this module holds construction,
//! the shared request helpers every operation goes through, and the two
//! derived caches.
//!
//! ## Operation Shapes
//!
//! | Kind | Returns | On failure |
//! |------|---------|------------|
//! | Get one | `Option<T>` | `None`, failure reported to the observer or logged |
//! | Get many | `RequestResult<Vec<T>>` | failed result, empty list |
//! | Add / update | `RequestResult<Option<u64>>` | failed result, `None` |
//! | Delete / close | `RequestResult<String>` | failed result, empty body |
//!
//! No public operation panics or returns early with an error; every failure
//! is reported through the return value.
//!
//! ## Derived Caches
//!
//! [`all_projects`](TestRailClient::all_projects) and
//! [`priority_levels`](TestRailClient::priority_levels) fetch once per
//! client and reuse the result until the client is dropped. A failed fetch
//! is not stored, so the next call tries again.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::codec;
use super::common::{ApiError, JsonObject, Page, RequestResult};
use super::executor::CommandExecutor;
use super::observer::RequestObserver;
use super::transport::{ReqwestTransport, Transport};
use super::types::{Case, Project};
use super::uri::{build_path, CommandAction, QueryOptions};
use crate::auth::AuthCredential;

/// Client for the TestRail API v2.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use testrail_cli::api::TestRailClient;
/// use testrail_cli::auth::AuthCredential;
///
/// let client = TestRailClient::new(
///     "https://example.testrail.io",
///     AuthCredential::api_key("qa@example.com", "your-api-key"),
/// )?;
///
/// if let Some(case) = client.get_case(1) {
///     println!("{}", case.title.unwrap_or_default());
/// }
/// # Ok::<(), testrail_cli::api::ApiError>(())
/// ```
///
/// # Thread Safety
///
/// The client is `Send + Sync`. Calls block the calling thread; the client
/// never issues requests concurrently on its own.
pub struct TestRailClient {
    executor: CommandExecutor,
    projects: OnceCell<Vec<Project>>,
    priority_levels: OnceCell<HashMap<u64, u64>>,
}

impl TestRailClient {
    /// Creates a client for the installation at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `base_url` is not a valid
    /// `http(s)` URL, or [`ApiError::Transport`] if the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, credential: AuthCredential) -> Result<Self, ApiError> {
        if base_url.trim().is_empty() {
            return Err(ApiError::InvalidArgument("server URL must not be blank".into()));
        }
        let transport = ReqwestTransport::new(base_url, &credential)
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Creates a client on top of any [`Transport`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            executor: CommandExecutor::new(transport),
            projects: OnceCell::new(),
            priority_levels: OnceCell::new(),
        }
    }

    /// Routes request notifications to `observer` instead of the log.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.executor = self.executor.with_observer(observer);
        self
    }

    /// Every project visible to the user, fetched once per client.
    ///
    /// The first successful call follows every page and stores the list;
    /// later calls return a copy without touching the network.
    pub fn all_projects(&self) -> RequestResult<Vec<Project>> {
        self.projects
            .get_or_try_init(|| {
                let mut projects = Vec::new();
                let mut query = QueryOptions::new();
                loop {
                    let page = self.get_projects_page(query).into_result()?;
                    let next = page.next_offset();
                    projects.extend(page.items);
                    match next {
                        Some(offset) => query = QueryOptions::new().param("offset", offset),
                        None => break,
                    }
                }
                tracing::debug!("Cached {} projects", projects.len());
                Ok(projects)
            })
            .map(|projects| projects.clone())
            .into()
    }

    /// Map of priority id to priority level, fetched once per client.
    ///
    /// Priorities without an id or level are skipped.
    pub fn priority_levels(&self) -> RequestResult<HashMap<u64, u64>> {
        self.priority_levels
            .get_or_try_init(|| {
                self.get_priorities().into_result().map(|priorities| {
                    priorities
                        .into_iter()
                        .filter_map(|p| Some((p.id?, p.priority?)))
                        .collect()
                })
            })
            .map(|levels| levels.clone())
            .into()
    }

    /// Priority level of a case, from the cached priority map.
    ///
    /// Returns `None` if the case has no priority, the priority is unknown,
    /// or the priorities could not be fetched.
    pub fn priority_level_for_case(&self, case: &Case) -> Option<u64> {
        let priority_id = case.priority_id?;
        let levels = self.priority_levels();
        if !levels.is_success() {
            return None;
        }
        levels.value().get(&priority_id).copied()
    }

    // ------------------------------------------------------------------
    // Request helpers shared by the resource modules
    // ------------------------------------------------------------------

    /// GET one record. `None` on any failure.
    pub(crate) fn fetch_one<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Option<u64>,
        query: QueryOptions,
    ) -> Option<T> {
        match self.fetch_record(resource, id, query) {
            Ok(record) => Some(record),
            Err(e @ ApiError::Deserialization { .. }) => {
                tracing::warn!("Could not parse {} response: {}", resource, e);
                None
            }
            // Already reported by the executor.
            Err(_) => None,
        }
    }

    /// GET one record, keeping the failure detail.
    pub(crate) fn fetch_record<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Option<u64>,
        query: QueryOptions,
    ) -> Result<T, ApiError> {
        let uri = build_path(CommandAction::Get, resource, id, None, None, query.into_query().as_deref());
        let body = self.executor.execute_get(&uri).into_result()?;
        codec::parse(&body)
    }

    /// GET a bulk endpoint whose items live under `key`.
    pub(crate) fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Option<u64>,
        query: QueryOptions,
        key: &str,
    ) -> RequestResult<Page<T>> {
        self.fetch_page_at(resource, id, None, query, key)
    }

    /// Like [`fetch_page`](Self::fetch_page), with a second numeric id segment.
    pub(crate) fn fetch_page_at<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Option<u64>,
        secondary: Option<u64>,
        query: QueryOptions,
        key: &str,
    ) -> RequestResult<Page<T>> {
        let uri = build_path(
            CommandAction::Get,
            resource,
            id,
            secondary,
            None,
            query.into_query().as_deref(),
        );
        self.executor
            .execute_get(&uri)
            .into_result()
            .and_then(|body| codec::parse_list(&body, key))
            .into()
    }

    /// GET a bulk endpoint and keep only the items.
    pub(crate) fn fetch_list<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Option<u64>,
        query: QueryOptions,
        key: &str,
    ) -> RequestResult<Vec<T>> {
        self.fetch_page(resource, id, query, key).map(|page| page.items)
    }

    /// POST an add/update command built from a partial record.
    ///
    /// `custom` is merged into the serialized record, replacing duplicate keys.
    pub(crate) fn write_record<T: Serialize>(
        &self,
        action: CommandAction,
        resource: &str,
        id: Option<u64>,
        record: &T,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        self.write_record_at(action, resource, id, None, record, custom)
    }

    /// Like [`write_record`](Self::write_record), with a textual second id segment.
    pub(crate) fn write_record_at<T: Serialize>(
        &self,
        action: CommandAction,
        resource: &str,
        id: Option<u64>,
        secondary: Option<&str>,
        record: &T,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        let mut body = match codec::to_wire_json(record) {
            Ok(body) => body,
            Err(e) => return RequestResult::failure(e),
        };
        codec::merge_fields(&mut body, custom);

        let uri = build_path(action, resource, id, None, secondary, None);
        self.executor
            .execute_post(&uri, Some(&body))
            .map(|response| codec::resolve_record_id(&response))
    }

    /// POST an add command addressed by two numeric ids (`add_result_for_case/{run}/{case}`).
    pub(crate) fn write_record_for<T: Serialize>(
        &self,
        resource: &str,
        id: u64,
        secondary: u64,
        record: &T,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        let mut body = match codec::to_wire_json(record) {
            Ok(body) => body,
            Err(e) => return RequestResult::failure(e),
        };
        codec::merge_fields(&mut body, custom);

        let uri = build_path(CommandAction::Add, resource, Some(id), Some(secondary), None, None);
        self.executor
            .execute_post(&uri, Some(&body))
            .map(|response| codec::resolve_record_id(&response))
    }

    /// POST a delete or close command with no body.
    ///
    /// A close answered with status 200 succeeds even when its body is not
    /// valid JSON; the parse problem is logged.
    pub(crate) fn send_command(
        &self,
        action: CommandAction,
        resource: &str,
        id: u64,
        secondary: Option<&str>,
    ) -> RequestResult<String> {
        let uri = build_path(action, resource, Some(id), None, secondary, None);
        let response = self.executor.execute_post(&uri, None);

        if action == CommandAction::Close && response.is_success() {
            if let Err(e) = serde_json::from_str::<serde_json::Value>(response.value()) {
                tracing::warn!("close_{} {} returned a body that is not JSON: {}", resource, id, e);
            }
        }

        response
    }
}

/// Fails with [`ApiError::InvalidArgument`] when `value` is missing or blank.
pub(crate) fn require_text(value: Option<&str>, field: &str) -> Result<(), ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ApiError::InvalidArgument(format!("{} must not be blank", field))),
    }
}

impl std::fmt::Debug for TestRailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestRailClient")
            .field("executor", &self.executor)
            .field("projects_cached", &self.projects.get().is_some())
            .field("priorities_cached", &self.priority_levels.get().is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::testing::{FakeTransport, RecordingObserver};

    pub(crate) fn client() -> (TestRailClient, Arc<FakeTransport>) {
        let transport = Arc::new(FakeTransport::new());
        (TestRailClient::with_transport(transport.clone()), transport)
    }

    const PRIORITIES: &str = r#"[
        {"id": 1, "name": "1 - Don't Test", "short_name": "1 - Don't", "is_default": false, "priority": 1},
        {"id": 2, "name": "2 - Test If Time", "short_name": "2 - If Time", "is_default": false, "priority": 2},
        {"id": 4, "name": "4 - Must Test", "short_name": "4 - Must", "is_default": true, "priority": 4}
    ]"#;

    #[test]
    fn test_new_rejects_bad_urls() {
        let credential = AuthCredential::basic("qa@example.com", "secret");
        assert!(matches!(
            TestRailClient::new("  ", credential.clone()),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(TestRailClient::new("not a url", credential.clone()).is_err());
        assert!(TestRailClient::new("https://example.testrail.io", credential).is_ok());
    }

    #[test]
    fn test_priority_levels_are_cached() {
        let (client, transport) = client();
        transport.respond(200, PRIORITIES);

        let first = client.priority_levels();
        let second = client.priority_levels();

        assert!(first.is_success());
        assert_eq!(first, second);
        assert_eq!(first.value().get(&4), Some(&4));
        assert_eq!(first.value().len(), 3);
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_priority_level_for_case() {
        let (client, transport) = client();
        transport.respond(200, PRIORITIES);

        let case = Case {
            priority_id: Some(2),
            ..Default::default()
        };
        assert_eq!(client.priority_level_for_case(&case), Some(2));
        assert_eq!(client.priority_level_for_case(&Case::default()), None);

        let unknown = Case {
            priority_id: Some(99),
            ..Default::default()
        };
        assert_eq!(client.priority_level_for_case(&unknown), None);
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_failed_cache_fetch_is_retried() {
        let (client, transport) = client();
        transport.respond(500, "oops");
        transport.respond(200, PRIORITIES);

        assert!(!client.priority_levels().is_success());
        assert!(client.priority_levels().is_success());
        assert!(client.priority_levels().is_success());
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn test_all_projects_follows_every_page() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"offset":0,"limit":1,"size":1,
                "_links":{"next":"/api/v2/get_projects&limit=1&offset=1","prev":null},
                "projects":[{"id":1,"name":"Alpha"}]}"#,
        );
        transport.respond(
            200,
            r#"{"offset":1,"limit":1,"size":1,
                "_links":{"next":null,"prev":"/api/v2/get_projects&limit=1&offset=0"},
                "projects":[{"id":2,"name":"Beta"}]}"#,
        );

        let projects = client.all_projects();
        let ids: Vec<_> = projects.value().iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let uris: Vec<_> = transport.requests().into_iter().map(|r| r.uri).collect();
        assert_eq!(uris, vec!["?/api/v2/get_projects", "?/api/v2/get_projects&offset=1"]);

        assert_eq!(client.all_projects().value().len(), 2);
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn test_all_projects_cached() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"offset":0,"limit":250,"size":2,"_links":{"next":null,"prev":null},
                "projects":[{"id":1,"name":"Alpha"},{"id":2,"name":"Beta"}]}"#,
        );

        let projects = client.all_projects();
        assert_eq!(projects.value().len(), 2);
        assert_eq!(client.all_projects(), projects);
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_fetch_one_failure_notifies_once() {
        let transport = Arc::new(FakeTransport::new());
        let observer = Arc::new(RecordingObserver::default());
        let client = TestRailClient::with_transport(transport.clone()).with_observer(observer.clone());
        transport.respond(400, r#"{"error":"Field :case_id is not a valid test case."}"#);

        let case: Option<Case> = client.fetch_one("case", Some(404), QueryOptions::new());

        assert!(case.is_none());
        assert_eq!(observer.counts(), (1, 0, 1));
    }

    #[test]
    fn test_fetch_one_parse_failure_is_none() {
        let (client, transport) = client();
        transport.respond(200, "<html>maintenance</html>");

        let case: Option<Case> = client.fetch_one("case", Some(1), QueryOptions::new());
        assert!(case.is_none());
    }

    #[test]
    fn test_fetch_list_parse_failure_is_deserialization_error() {
        let (client, transport) = client();
        transport.respond(200, r#"{"cases": [{"id": "x"}]}"#);

        let cases: RequestResult<Vec<Case>> = client.fetch_list("cases", Some(1), QueryOptions::new(), "cases");
        assert!(matches!(cases.error(), Some(ApiError::Deserialization { .. })));
    }

    #[test]
    fn test_close_with_non_json_body_still_succeeds() {
        let (client, transport) = client();
        transport.respond(200, "closed");

        let result = client.send_command(CommandAction::Close, "run", 3, None);
        assert!(result.is_success());
        assert_eq!(result.value(), "closed");
        assert_eq!(transport.posted_uris(), vec!["?/api/v2/close_run/3"]);
    }

    #[test]
    fn test_write_record_without_id_in_response() {
        let (client, transport) = client();
        transport.respond(200, "");

        let result = client.write_record(
            CommandAction::Update,
            "project",
            Some(1),
            &Project::default(),
            None,
        );
        assert!(result.is_success());
        assert_eq!(*result.value(), None);
    }

    #[test]
    fn test_require_text() {
        assert!(require_text(Some("ok"), "name").is_ok());
        assert!(require_text(Some("  "), "name").is_err());
        assert!(require_text(None, "name").is_err());
    }
}
