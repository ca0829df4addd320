//
//  testrail-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TestRail CLI Library
//!
//! A typed client for the TestRail API v2 and the `tr` command-line tool
//! built on it.
//!
//! ## Overview
//!
//! The [`api`] module is usable on its own: it maps every supported endpoint
//! (projects, suites, sections, cases, milestones, runs, plans, tests,
//! results, users, priorities, statuses, configurations) to a method on
//! [`TestRailClient`](api::TestRailClient), with partial-record writes,
//! custom-field pass-through and case-selection checks for runs.
//!
//! ## Module Structure
//!
//! - [`api`]: The client, entity types and transport
//! - [`auth`]: Basic-auth credentials (password or API key)
//! - [`config`]: Configuration file management
//! - [`output`]: Table and JSON output
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use testrail_cli::api::TestRailClient;
//! use testrail_cli::api::types::{ResultStatus, TestResult};
//! use testrail_cli::auth::AuthCredential;
//!
//! let client = TestRailClient::new(
//!     "https://example.testrail.io",
//!     AuthCredential::api_key("qa@example.com", "your-api-key"),
//! )?;
//!
//! let result = TestResult {
//!     status_id: Some(ResultStatus::Passed),
//!     comment: Some("Verified on build 412".into()),
//!     ..Default::default()
//! };
//! let recorded = client.add_result_for_case(81, 1203, &result, None);
//! assert!(recorded.is_success());
//! # Ok::<(), testrail_cli::api::ApiError>(())
//! ```

/// Command-line interface definitions.
pub mod cli;

/// TestRail API v2 client.
pub mod api;

/// Authentication credentials.
pub mod auth;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/testrail/config.toml`
/// - macOS: `~/Library/Application Support/testrail/config.toml`
/// - Windows: `%APPDATA%\testrail\config\config.toml`
pub mod config;

/// Output formatting (table and JSON).
pub mod output;

pub use cli::Cli;

pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary.
pub const APP_NAME: &str = "tr";

/// Application version constant, from `CARGO_PKG_VERSION`.
///
/// ```rust
/// use testrail_cli::VERSION;
///
/// println!("tr version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication failed.
    ///
    /// The server answered 401 or 403.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (HTTP 429 on TestRail Cloud).
    pub const RATE_LIMIT: i32 = 32;
}
