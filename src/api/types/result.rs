//
//  testrail-cli
//  api/types/result.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests, test results and result statuses.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timespan::{self, Timespan};
use crate::api::common::JsonObject;

/// Status of a test or result.
///
/// The five built-in statuses have fixed ids. Instances may define up to
/// seven custom statuses, which are kept as [`ResultStatus::Custom`] with
/// their raw id. Serialized as the integer id.
///
/// ```rust
/// use testrail_cli::api::types::ResultStatus;
///
/// assert_eq!(ResultStatus::from(5), ResultStatus::Failed);
/// assert_eq!(u64::from(ResultStatus::Custom(6)), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum ResultStatus {
    Passed,
    Blocked,
    Untested,
    Retest,
    Failed,
    Custom(u64),
}

impl From<u64> for ResultStatus {
    fn from(id: u64) -> Self {
        match id {
            1 => Self::Passed,
            2 => Self::Blocked,
            3 => Self::Untested,
            4 => Self::Retest,
            5 => Self::Failed,
            other => Self::Custom(other),
        }
    }
}

impl From<ResultStatus> for u64 {
    fn from(status: ResultStatus) -> Self {
        match status {
            ResultStatus::Passed => 1,
            ResultStatus::Blocked => 2,
            ResultStatus::Untested => 3,
            ResultStatus::Retest => 4,
            ResultStatus::Failed => 5,
            ResultStatus::Custom(id) => id,
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::Blocked => f.write_str("blocked"),
            Self::Untested => f.write_str("untested"),
            Self::Retest => f.write_str("retest"),
            Self::Failed => f.write_str("failed"),
            Self::Custom(id) => write!(f, "custom ({})", id),
        }
    }
}

impl std::str::FromStr for ResultStatus {
    type Err = String;

    /// Accepts a built-in status name or a numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passed" | "pass" => Ok(Self::Passed),
            "blocked" => Ok(Self::Blocked),
            "untested" => Ok(Self::Untested),
            "retest" => Ok(Self::Retest),
            "failed" | "fail" => Ok(Self::Failed),
            other => other
                .parse::<u64>()
                .map(Self::from)
                .map_err(|_| format!("unknown status '{}'", s)),
        }
    }
}

/// A result recorded against a test.
///
/// Custom result fields (`custom_*`) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<u64>,

    /// `None` for results that only add a comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<ResultStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Version or build tested against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Time spent testing.
    #[serde(default, with = "timespan::optional", skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<Timespan>,

    /// Comma-separated defect ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defects: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A test: one case instantiated inside a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Test {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<ResultStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,

    #[serde(default, with = "timespan::optional", skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Timespan>,

    #[serde(default, with = "timespan::optional", skip_serializing_if = "Option::is_none")]
    pub estimate_forecast: Option<Timespan>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ids() {
        assert_eq!(ResultStatus::from(1), ResultStatus::Passed);
        assert_eq!(ResultStatus::from(4), ResultStatus::Retest);
        assert_eq!(ResultStatus::from(9), ResultStatus::Custom(9));
        assert_eq!(u64::from(ResultStatus::Blocked), 2);
    }

    #[test]
    fn test_status_serializes_as_integer() {
        let result = TestResult {
            status_id: Some(ResultStatus::Failed),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"status_id":5}"#);

        let parsed: TestResult = serde_json::from_str(r#"{"status_id":7}"#).unwrap();
        assert_eq!(parsed.status_id, Some(ResultStatus::Custom(7)));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Passed".parse::<ResultStatus>().unwrap(), ResultStatus::Passed);
        assert_eq!("fail".parse::<ResultStatus>().unwrap(), ResultStatus::Failed);
        assert_eq!("6".parse::<ResultStatus>().unwrap(), ResultStatus::Custom(6));
        assert!("sideways".parse::<ResultStatus>().is_err());
    }

    #[test]
    fn test_null_status_reads_as_none() {
        let parsed: TestResult =
            serde_json::from_str(r#"{"id": 1, "status_id": null, "comment": "note"}"#).unwrap();
        assert_eq!(parsed.status_id, None);
        assert_eq!(parsed.comment.as_deref(), Some("note"));
    }
}
