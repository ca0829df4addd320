//
//  testrail-cli
//  api/types/metadata.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Instance-wide lookup tables: statuses, priorities and configurations.

use serde::{Deserialize, Serialize};

use crate::api::common::JsonObject;

/// A test/result status as configured on the instance.
///
/// Colours are RGB integers (`0x6a8a48` is green).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// System name (`passed`, `custom_status1`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_dark: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_medium: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_bright: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_untested: Option<bool>,

    /// Whether a test in this status counts as done.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A case priority.
///
/// `id` is what cases reference through `priority_id`; `priority` is the
/// level used for ordering (higher is more important).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Priority level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u64>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A named group of configurations (Browsers, Operating Systems, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<Configuration>>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A single configuration inside a group (Chrome, Firefox, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    #[serde(flatten)]
    pub extra: JsonObject,
}
