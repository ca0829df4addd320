//
//  testrail-cli
//  api/types/run.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test run types.
//!
//! A run is an instance of a suite being executed. It either includes every
//! case of the suite (`include_all = true`) or a custom selection listed in
//! `case_ids`. Runs created as part of a test plan carry `plan_id`,
//! `entry_id` and `config` in addition to the plain run fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::JsonObject;

/// A test run.
///
/// # Status Counts
///
/// TestRail reports how many tests currently sit in each status. The five
/// built-in statuses have named counters; instances with custom statuses use
/// `custom_status1_count` through `custom_status7_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Run name. Required when creating a run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,

    /// Set when the run belongs to a plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<u64>,

    /// `true` to include every case of the suite, `false` for a custom selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,

    /// Cases of a custom selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,

    /// Configuration names, for runs inside a plan entry (`"Chrome, Windows"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_ids: Option<Vec<u64>>,

    /// Plan entry the run belongs to. A GUID, not a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_index: Option<u64>,

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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Run {
    /// Total number of tests across the built-in and custom status counters.
    pub fn total_count(&self) -> u64 {
        [
            self.passed_count,
            self.blocked_count,
            self.untested_count,
            self.retest_count,
            self.failed_count,
            self.custom_status1_count,
            self.custom_status2_count,
            self.custom_status3_count,
            self.custom_status4_count,
            self.custom_status5_count,
            self.custom_status6_count,
            self.custom_status7_count,
        ]
        .iter()
        .flatten()
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_count_ignores_unset_counters() {
        let run = Run {
            passed_count: Some(3),
            failed_count: Some(1),
            custom_status2_count: Some(2),
            ..Default::default()
        };
        assert_eq!(run.total_count(), 6);
        assert_eq!(Run::default().total_count(), 0);
    }
}
