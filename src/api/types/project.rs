//
//  testrail-cli
//  api/types/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project types.
//!
//! Projects are the top-level container in TestRail. Every suite, run,
//! plan and milestone belongs to exactly one project.
//!
//! # Suite Modes
//!
//! | Mode | Value | Meaning |
//! |------|-------|---------|
//! | Single suite | 1 | One implicit suite per project |
//! | Single suite + baselines | 2 | One master suite plus baseline copies |
//! | Multiple suites | 3 | Any number of suites |

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::JsonObject;

/// How a project organizes its test suites.
///
/// Serialized as the integer TestRail uses (`1`, `2` or `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum SuiteMode {
    SingleSuite,
    SingleSuiteBaselines,
    MultipleSuites,
}

impl TryFrom<u64> for SuiteMode {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::SingleSuite),
            2 => Ok(Self::SingleSuiteBaselines),
            3 => Ok(Self::MultipleSuites),
            other => Err(format!("unknown suite mode {}", other)),
        }
    }
}

impl From<SuiteMode> for u64 {
    fn from(mode: SuiteMode) -> Self {
        match mode {
            SuiteMode::SingleSuite => 1,
            SuiteMode::SingleSuiteBaselines => 2,
            SuiteMode::MultipleSuites => 3,
        }
    }
}

impl fmt::Display for SuiteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SingleSuite => "single suite",
            Self::SingleSuiteBaselines => "single suite + baselines",
            Self::MultipleSuites => "multiple suites",
        };
        f.write_str(label)
    }
}

/// A TestRail project.
///
/// All fields are optional: a project parsed from the server has most of
/// them set, while a project built locally for `add_project` or
/// `update_project` only carries the fields to write.
///
/// # Example
///
/// ```rust
/// use testrail_cli::api::types::{Project, SuiteMode};
///
/// let draft = Project {
///     name: Some("Payments".to_string()),
///     suite_mode: Some(SuiteMode::MultipleSuites),
///     ..Default::default()
/// };
/// assert!(draft.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Project name. Required when creating a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description/announcement shown on the project overview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,

    /// Whether the announcement is displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_announcement: Option<bool>,

    /// Whether the project is archived as completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,

    /// When the project was completed.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_on: Option<DateTime<Utc>>,

    /// Suite organization of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_mode: Option<SuiteMode>,

    /// Web address of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Wire fields not modeled above.
    #[serde(flatten)]
    pub extra: JsonObject,
}
