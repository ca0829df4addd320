//
//  testrail-cli
//  api/types/suite.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test suite and section types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::JsonObject;

/// A test suite: a named collection of sections and cases within a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Suite name. Required when creating a suite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Set on the master suite of a project in baseline mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_master: Option<bool>,

    /// Set on baseline copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_baseline: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A section groups cases inside a suite and may nest under a parent section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Section name. Required when creating a section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,

    /// Parent section; `None` for root sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Nesting level, 0 for root sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u64>,

    #[serde(flatten)]
    pub extra: JsonObject,
}
