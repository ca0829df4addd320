//
//  testrail-cli
//  api/executor.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Command Executor
//!
//! Runs one API command through a [`Transport`] and turns the outcome into
//! a [`RequestResult<String>`] holding the raw response body.
//!
//! ## Success Rule
//!
//! A command succeeds only when the transport completes **and** the status
//! is exactly 200. Any other status becomes [`ApiError::Http`] with the
//! server's body; a transport fault becomes [`ApiError::Transport`].
//!
//! ## Notifications
//!
//! Each call fires exactly one `request_sent` on the observer, then exactly
//! one of `response_received` (status 200) or `operation_failed`.

use std::sync::Arc;

use super::common::{ApiError, JsonObject, RequestResult};
use super::observer::{RequestObserver, TracingObserver};
use super::transport::{ApiRequest, HttpMethod, Transport};

const HTTP_OK: u16 = 200;

/// Executes GET and POST commands and reports them to an observer.
#[derive(Clone)]
pub struct CommandExecutor {
    transport: Arc<dyn Transport>,
    observer: Arc<dyn RequestObserver>,
}

impl CommandExecutor {
    /// Creates an executor that logs through [`TracingObserver`].
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Executes a GET command.
    ///
    /// # Parameters
    ///
    /// * `uri` - Relative endpoint path built with [`build_path`](super::uri::build_path)
    pub fn execute_get(&self, uri: &str) -> RequestResult<String> {
        self.execute(ApiRequest {
            method: HttpMethod::Get,
            uri: uri.to_string(),
            body: None,
        })
    }

    /// Executes a POST command.
    ///
    /// `body` is serialized as UTF-8 JSON text. `None` sends an empty body.
    pub fn execute_post(&self, uri: &str, body: Option<&JsonObject>) -> RequestResult<String> {
        let body = match body.map(serde_json::to_string).transpose() {
            Ok(body) => body,
            Err(e) => return RequestResult::failure(ApiError::Serialization(e.to_string())),
        };

        self.execute(ApiRequest {
            method: HttpMethod::Post,
            uri: uri.to_string(),
            body,
        })
    }

    fn execute(&self, request: ApiRequest) -> RequestResult<String> {
        self.observer
            .request_sent(request.method, &request.uri, request.body.as_deref());

        match self.transport.send(&request) {
            Ok(response) if response.status == HTTP_OK => {
                self.observer.response_received(&response.body);
                RequestResult::success(response.body)
            }
            Ok(response) => {
                let error = ApiError::Http {
                    status: response.status,
                    body: response.body,
                };
                self.observer.operation_failed(&error.to_string());
                RequestResult::failure(error)
            }
            Err(e) => {
                let error = ApiError::Transport(e.to_string());
                self.observer.operation_failed(&error.to_string());
                RequestResult::failure(error)
            }
        }
    }
}

impl std::fmt::Debug for CommandExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandExecutor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{FakeTransport, RecordingObserver};
    use serde_json::json;

    fn executor(transport: &Arc<FakeTransport>, observer: &Arc<RecordingObserver>) -> CommandExecutor {
        CommandExecutor::new(transport.clone()).with_observer(observer.clone())
    }

    #[test]
    fn test_get_success_fires_sent_and_received() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(200, r#"{"id":1}"#);
        let observer = Arc::new(RecordingObserver::default());

        let result = executor(&transport, &observer).execute_get("?/api/v2/get_case/1");

        assert!(result.is_success());
        assert_eq!(result.value(), r#"{"id":1}"#);
        assert_eq!(observer.counts(), (1, 1, 0));
        assert_eq!(transport.requests()[0].method, HttpMethod::Get);
    }

    #[test]
    fn test_non_200_is_failure_with_body() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(201, r#"{"id":1}"#);
        transport.respond(403, r#"{"error":"No access"}"#);
        let observer = Arc::new(RecordingObserver::default());
        let executor = executor(&transport, &observer);

        let created = executor.execute_get("?/api/v2/get_case/1");
        assert!(!created.is_success());
        assert!(matches!(created.error(), Some(ApiError::Http { status: 201, .. })));

        let denied = executor.execute_get("?/api/v2/get_case/1");
        match denied.error() {
            Some(ApiError::Http { status, body }) => {
                assert_eq!(*status, 403);
                assert_eq!(body, r#"{"error":"No access"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(observer.counts(), (2, 0, 2));
    }

    #[test]
    fn test_transport_fault_is_failure() {
        let transport = Arc::new(FakeTransport::new());
        transport.fail("connection refused");
        let observer = Arc::new(RecordingObserver::default());

        let result = executor(&transport, &observer).execute_get("?/api/v2/get_projects");

        assert_eq!(
            result.error(),
            Some(&ApiError::Transport("connection refused".into()))
        );
        assert_eq!(observer.counts(), (1, 0, 1));
        assert!(observer.failures()[0].contains("connection refused"));
    }

    #[test]
    fn test_post_serializes_body() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(200, r#"{"id":4}"#);
        let observer = Arc::new(RecordingObserver::default());
        let body = json!({"name": "Smoke"}).as_object().cloned();

        executor(&transport, &observer).execute_post("?/api/v2/add_suite/1", body.as_ref());

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.body.as_deref(), Some(r#"{"name":"Smoke"}"#));
    }

    #[test]
    fn test_post_without_body() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(200, "{}");
        let observer = Arc::new(RecordingObserver::default());

        executor(&transport, &observer).execute_post("?/api/v2/close_run/3", None);

        assert_eq!(transport.requests()[0].body, None);
    }
}
