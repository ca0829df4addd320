//
//  testrail-cli
//  api/types/plan.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test plan types.
//!
//! A plan groups several runs. Each [`PlanEntry`] targets one suite and
//! expands into one run per configuration combination, so an entry owns a
//! list of [`Run`]s. Entry ids are GUID strings, unlike every other id in
//! the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::run::Run;
use crate::api::common::JsonObject;

/// A test plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Plan name. Required when creating a plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untested_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retest_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status1_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status2_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status3_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status4_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status5_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status6_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status7_count: Option<u64>,

    /// Entries of the plan. Only returned by `get_plan`, not by `get_plans`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<PlanEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One suite inside a plan, expanded into a run per configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Entry GUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_ids: Option<Vec<u64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,

    /// Runs created for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Run>>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Plan {
    /// Iterates over every run of every entry.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.entries
            .iter()
            .flatten()
            .flat_map(|entry| entry.runs.iter().flatten())
    }
}
