//
//  testrail-cli
//  api/observer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request lifecycle notifications.
//!
//! The executor reports every request to a [`RequestObserver`]: one
//! `request_sent` per attempt, followed by exactly one of
//! `response_received` or `operation_failed`. The default observer,
//! [`TracingObserver`], writes these events to the `tracing` log.

use super::transport::HttpMethod;

/// Receiver for request lifecycle events.
///
/// Implementations must be cheap and must not panic; they run inline on the
/// calling thread.
pub trait RequestObserver: Send + Sync {
    /// A request is about to be sent. `body` is the JSON text of a POST body.
    fn request_sent(&self, method: HttpMethod, uri: &str, body: Option<&str>);

    /// The server answered with status 200.
    fn response_received(&self, body: &str);

    /// The request failed, either at the transport level or with a non-200 status.
    fn operation_failed(&self, message: &str);
}

/// Observer that logs events with `tracing`.
///
/// Requests and responses are logged at debug level, failures at warn level.
/// Enable with `TR_DEBUG=debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn request_sent(&self, method: HttpMethod, uri: &str, body: Option<&str>) {
        match body {
            Some(body) => tracing::debug!("{} {} {}", method, uri, body),
            None => tracing::debug!("{} {}", method, uri),
        }
    }

    fn response_received(&self, body: &str) {
        tracing::debug!("Response: {}", body);
    }

    fn operation_failed(&self, message: &str) {
        tracing::warn!("Request failed: {}", message);
    }
}
