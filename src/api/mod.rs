//
//  testrail-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! A typed, blocking client for the TestRail API v2.
//!
//! ## Architecture
//!
//! ```text
//! TestRailClient ─┬─ resources/*   one impl block per entity family
//!                 └─ CommandExecutor ─┬─ Transport        (HTTP, swappable)
//!                                     └─ RequestObserver  (notifications)
//! ```
//!
//! - [`client`]: The [`TestRailClient`] facade, its caches and shared helpers
//! - [`resources`]: Get/add/update/delete/close operations per resource
//! - [`types`]: Entity records (`Case`, `Run`, `Plan`, ...)
//! - [`codec`]: JSON decoding, request bodies and record-id extraction
//! - [`uri`]: Endpoint path and query builder
//! - [`executor`]: Sends one command and reports it to the observer
//! - [`transport`]: The [`Transport`](transport::Transport) seam and its
//!   `reqwest` implementation
//! - [`observer`]: Request notification hooks
//! - [`common`]: [`ApiError`], [`RequestResult`] and pagination types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use testrail_cli::api::TestRailClient;
//! use testrail_cli::api::types::Run;
//! use testrail_cli::auth::AuthCredential;
//!
//! let client = TestRailClient::new(
//!     "https://example.testrail.io",
//!     AuthCredential::api_key("qa@example.com", "your-api-key"),
//! )?;
//!
//! let run = Run {
//!     name: Some("Nightly".into()),
//!     suite_id: Some(3),
//!     case_ids: Some(vec![10, 11, 12]),
//!     ..Default::default()
//! };
//! let created = client.add_run(1, &run, None);
//! if let Some(id) = created.value() {
//!     println!("Created run {}", id);
//! }
//! # Ok::<(), testrail_cli::api::ApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! Operations never return `Err` or panic. Collections, mutations, deletes
//! and closes return a [`RequestResult`] carrying the [`ApiError`] on
//! failure; single-record gets return `Option`.

pub mod client;
pub mod codec;
pub mod common;
pub mod executor;
pub mod observer;
pub mod resources;
pub mod transport;
pub mod types;
pub mod uri;

#[cfg(test)]
mod testing;

pub use client::TestRailClient;
pub use common::{ApiError, RequestResult};
