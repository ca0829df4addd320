//
//  testrail-cli
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test doubles for the transport and observer seams.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::observer::RequestObserver;
use super::transport::{ApiRequest, ApiResponse, HttpMethod, Transport, TransportError};

/// Transport that replays queued responses and records every request.
///
/// An empty queue answers with a transport error.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// URIs of the POST requests sent so far.
    pub fn posted_uris(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == HttpMethod::Post)
            .map(|request| request.uri)
            .collect()
    }

    /// Parsed JSON body of the last request.
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.requests()
            .last()
            .and_then(|request| request.body.as_deref())
            .map(|body| serde_json::from_str(body).unwrap())
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Sent,
    Received,
    Failed(String),
}

/// Observer that records the events it receives.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    /// `(sent, received, failed)` event counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        let events = self.events.lock().unwrap();
        let count = |wanted: fn(&Event) -> bool| events.iter().filter(|e| wanted(e)).count();
        (
            count(|e| matches!(e, Event::Sent)),
            count(|e| matches!(e, Event::Received)),
            count(|e| matches!(e, Event::Failed(_))),
        )
    }

    pub fn failures(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                Event::Failed(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RequestObserver for RecordingObserver {
    fn request_sent(&self, _method: HttpMethod, _uri: &str, _body: Option<&str>) {
        self.events.lock().unwrap().push(Event::Sent);
    }

    fn response_received(&self, _body: &str) {
        self.events.lock().unwrap().push(Event::Received);
    }

    fn operation_failed(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Failed(message.to_string()));
    }
}
