//
//  testrail-cli
//  api/types/case.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test case types and case metadata (fields and types).
//!
//! # Custom Fields
//!
//! Every TestRail instance can define custom case fields. They appear on the
//! wire as `custom_<system_name>` keys and are kept, untouched, in
//! [`Case::extra`]. To write them, pass them as custom fields to
//! `add_case`/`update_case` or insert them into `extra` directly.
//!
//! ```rust
//! use testrail_cli::api::types::Case;
//!
//! let case: Case = serde_json::from_str(
//!     r#"{"id": 1, "title": "Login", "custom_preconds": "User exists"}"#,
//! ).unwrap();
//!
//! assert_eq!(case.custom_field("preconds").and_then(|v| v.as_str()), Some("User exists"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timespan::{self, Timespan};
use crate::api::common::JsonObject;

/// A test case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Unique case id (shown as `C<id>` in the UI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Case title. Required when creating a case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,

    /// Case type id, see `get_case_types`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,

    /// Priority id, see `get_priorities`. Not the priority level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,

    /// Comma-separated references/requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_on: Option<DateTime<Utc>>,

    /// Estimated execution time.
    #[serde(default, with = "timespan::optional", skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Timespan>,

    /// Forecast computed by TestRail from past results.
    #[serde(default, with = "timespan::optional", skip_serializing_if = "Option::is_none")]
    pub estimate_forecast: Option<Timespan>,

    /// Custom fields and any other wire fields not modeled above.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Case {
    /// Looks up a custom field by its system name, with or without the
    /// `custom_` prefix.
    pub fn custom_field(&self, name: &str) -> Option<&serde_json::Value> {
        let key = if name.starts_with("custom_") {
            name.to_string()
        } else {
            format!("custom_{}", name)
        };
        self.extra.get(&key)
    }
}

/// A case type (Automated, Functionality, Regression, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Definition of a custom case field.
///
/// `configs` holds the per-project contexts and options; its shape depends
/// on the field type and is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Field type (1 String, 2 Integer, 3 Text, 4 URL, 5 Checkbox, 6 Dropdown, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,

    /// Name without the `custom_` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name with the `custom_` prefix, as it appears on cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_ids: Option<Vec<u64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<serde_json::Value>>,

    #[serde(flatten)]
    pub extra: JsonObject,
}
