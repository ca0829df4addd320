//
//  testrail-cli
//  api/types/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TestRail Entity Types
//!
//! Typed records for every resource the client reads or writes.
//!
//! ## Conventions
//!
//! All entities follow the same rules so that one struct serves both as a
//! parsed server response and as a partial record for create/update calls:
//!
//! - Every field is an `Option`. Fields absent on the wire parse as `None`,
//!   and `None` fields are omitted when serializing, so an update only
//!   touches the fields the caller set.
//! - Timestamps are UNIX seconds on the wire and [`chrono::DateTime<Utc>`]
//!   in Rust.
//! - Estimates and elapsed times use [`Timespan`].
//! - Fields the model does not capture (custom fields, newer server fields)
//!   are kept in a flattened `extra` map and written back unchanged.
//! - Every entity implements `Default`; build partial records with
//!   `..Default::default()`.
//!
//! ```rust
//! use testrail_cli::api::types::Case;
//!
//! let draft = Case {
//!     title: Some("Checkout with saved card".to_string()),
//!     priority_id: Some(2),
//!     ..Default::default()
//! };
//!
//! let wire = serde_json::to_value(&draft).unwrap();
//! assert_eq!(wire, serde_json::json!({"title": "Checkout with saved card", "priority_id": 2}));
//! ```

mod case;
mod metadata;
mod milestone;
mod plan;
mod project;
mod result;
mod run;
mod suite;
pub mod timespan;
mod user;

pub use case::{Case, CaseField, CaseType};
pub use metadata::{Configuration, ConfigurationGroup, Priority, Status};
pub use milestone::Milestone;
pub use plan::{Plan, PlanEntry};
pub use project::{Project, SuiteMode};
pub use result::{ResultStatus, Test, TestResult};
pub use run::Run;
pub use suite::{Section, Suite};
pub use timespan::Timespan;
pub use user::User;
