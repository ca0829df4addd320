//
//  testrail-cli
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The wire layer below the command executor. A [`Transport`] sends one
//! [`ApiRequest`] and hands back the status code and full body text; it does
//! not interpret either. [`ReqwestTransport`] is the production
//! implementation on top of a blocking `reqwest` client.
//!
//! Every request carries:
//!
//! | Header | Value |
//! |--------|-------|
//! | `Authorization` | `Basic base64(user:secret)` |
//! | `Accept` | `application/json` |
//! | `Content-Type` | `application/json` (POST only) |
//! | `User-Agent` | `testrail-cli/<version>` |
//!
//! No retries are attempted. Timeouts and redirects follow the `reqwest`
//! defaults.

use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;
use url::Url;

use crate::auth::AuthCredential;

/// The two HTTP methods TestRail's API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A request ready to be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Relative endpoint path, starting with `?/api/v2/`.
    pub uri: String,
    /// JSON text of the body. `None` sends an empty body.
    pub body: Option<String>,
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// The request could not be completed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends requests to a TestRail server.
pub trait Transport: Send + Sync {
    /// Performs one request and returns the status and full body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was obtained or its
    /// body could not be read. Non-200 statuses are returned as responses.
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Blocking `reqwest` transport.
///
/// # Example
///
/// ```rust,no_run
/// use testrail_cli::api::transport::{ApiRequest, HttpMethod, ReqwestTransport, Transport};
/// use testrail_cli::auth::AuthCredential;
///
/// let transport = ReqwestTransport::new(
///     "https://example.testrail.io",
///     &AuthCredential::api_key("qa@example.com", "key"),
/// )?;
///
/// let response = transport.send(&ApiRequest {
///     method: HttpMethod::Get,
///     uri: "?/api/v2/get_case/1".to_string(),
///     body: None,
/// })?;
/// println!("{} {}", response.status, response.body);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    base_url: String,
    auth_header: String,
}

impl ReqwestTransport {
    /// Creates a transport for the instance at `base_url`.
    ///
    /// `base_url` is the address of the TestRail installation, such as
    /// `https://example.testrail.io` or `https://qa.example.com/testrail/`.
    /// A trailing slash or `/index.php` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the URL is not an absolute `http(s)`
    /// URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, credential: &AuthCredential) -> Result<Self, TransportError> {
        let base_url = normalize_base_url(base_url)?;

        let http = Client::builder()
            .user_agent(format!("testrail-cli/{}", crate::VERSION))
            .build()
            .map_err(|e| TransportError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            auth_header: credential.header_value(),
        })
    }

    /// The normalized installation address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, uri: &str) -> String {
        format!("{}/index.php{}", self.base_url, uri)
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.uri);

        let builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(request.body.clone().unwrap_or_default()),
        };

        let response = builder
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError(format!("failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}

/// Validates an installation address and strips `/`, `/index.php` suffixes.
fn normalize_base_url(raw: &str) -> Result<String, TransportError> {
    let mut trimmed = raw.trim().trim_end_matches('/');
    if let Some(stripped) = trimmed.strip_suffix("/index.php") {
        trimmed = stripped.trim_end_matches('/');
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| TransportError(format!("invalid server URL '{}': {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(TransportError(format!(
            "invalid server URL '{}': scheme must be http or https",
            raw
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn credential() -> AuthCredential {
        AuthCredential::basic("qa@example.com", "secret")
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://example.testrail.io/").unwrap(),
            "https://example.testrail.io"
        );
        assert_eq!(
            normalize_base_url("https://qa.example.com/testrail/index.php").unwrap(),
            "https://qa.example.com/testrail"
        );
        assert!(normalize_base_url("example.testrail.io").is_err());
        assert!(normalize_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_get_sends_auth_and_accept_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/index.php?/api/v2/get_case/5")
            .match_header("authorization", credential().header_value().as_str())
            .match_header("accept", "application/json")
            .match_header("user-agent", format!("testrail-cli/{}", crate::VERSION).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":5,"title":"Login"}"#)
            .create();

        let transport = ReqwestTransport::new(&server.url(), &credential()).unwrap();
        let response = transport
            .send(&ApiRequest {
                method: HttpMethod::Get,
                uri: "?/api/v2/get_case/5".into(),
                body: None,
            })
            .unwrap();

        mock.assert();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"id":5,"title":"Login"}"#);
    }

    #[test]
    fn test_post_sends_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/index.php?/api/v2/add_section/1")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(r#"{"name":"Checkout"}"#.into()))
            .with_status(200)
            .with_body(r#"{"id":12}"#)
            .create();

        let transport = ReqwestTransport::new(&server.url(), &credential()).unwrap();
        let response = transport
            .send(&ApiRequest {
                method: HttpMethod::Post,
                uri: "?/api/v2/add_section/1".into(),
                body: Some(r#"{"name":"Checkout"}"#.into()),
            })
            .unwrap();

        mock.assert();
        assert_eq!(response.body, r#"{"id":12}"#);
    }

    #[test]
    fn test_post_without_body_is_empty() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/index.php?/api/v2/close_run/3")
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{"id":3,"is_completed":true}"#)
            .create();

        let transport = ReqwestTransport::new(&server.url(), &credential()).unwrap();
        transport
            .send(&ApiRequest {
                method: HttpMethod::Post,
                uri: "?/api/v2/close_run/3".into(),
                body: None,
            })
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_error_status_is_returned_as_response() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/index.php?/api/v2/get_run/999")
            .with_status(400)
            .with_body(r#"{"error":"Field :run_id is not a valid test run."}"#)
            .create();

        let transport = ReqwestTransport::new(&server.url(), &credential()).unwrap();
        let response = transport
            .send(&ApiRequest {
                method: HttpMethod::Get,
                uri: "?/api/v2/get_run/999".into(),
                body: None,
            })
            .unwrap();

        assert_eq!(response.status, 400);
        assert!(response.body.contains("not a valid test run"));
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let transport = ReqwestTransport::new("http://127.0.0.1:9", &credential()).unwrap();
        let result = transport.send(&ApiRequest {
            method: HttpMethod::Get,
            uri: "?/api/v2/get_projects".into(),
            body: None,
        });
        assert!(result.is_err());
    }
}
