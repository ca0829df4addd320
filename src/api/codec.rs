//
//  testrail-cli
//  api/codec.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Entity Codec
//!
//! Conversions between TestRail's wire JSON and the typed records in
//! [`crate::api::types`].
//!
//! ## Functions
//!
//! - [`parse`] - One entity (or any deserializable value) from a body
//! - [`parse_list`] - A bulk response, paginated or bare array, into a [`Page`]
//! - [`to_wire_json`] - An entity into the JSON object sent as a request body
//! - [`merge_fields`] - Caller-supplied custom fields into a request body
//! - [`resolve_record_id`] - The id of the record a mutation created or updated
//!
//! ## Record Ids
//!
//! The `id` of a mutation response is usually an integer, but adding or
//! updating a plan entry answers with the entry, whose `id` is a GUID
//! string. In that case the useful id is the one of the first run created
//! for the entry:
//!
//! ```json
//! {"id": "3933d74b-4282-4c1f-be62-a641ab427063", "suite_id": 1, "runs": [{"id": 81}]}
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ApiError, JsonObject, Page, PageEnvelope};

/// Parses a response body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::Deserialization`] carrying the parser message and the
/// offending body.
pub fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| deserialization_error(e, body))
}

/// Parses a bulk response into a [`Page`].
///
/// Accepts both shapes TestRail produces:
///
/// - the pagination envelope, with the items under `key`
///   (`{"offset":0,"limit":250,"size":1,"_links":{...},"cases":[...]}`)
/// - a bare JSON array, returned by servers older than 6.7
///
/// A missing or `null` item array yields an empty page.
///
/// ```rust
/// use testrail_cli::api::codec::parse_list;
/// use testrail_cli::api::types::Project;
///
/// let page = parse_list::<Project>(
///     r#"{"offset":0,"limit":250,"size":1,"_links":{"next":null,"prev":null},"projects":[{"id":1,"name":"Alpha"}]}"#,
///     "projects",
/// ).unwrap();
///
/// assert_eq!(page.items[0].name.as_deref(), Some("Alpha"));
/// assert!(!page.has_next());
/// ```
pub fn parse_list<T: DeserializeOwned>(body: &str, key: &str) -> Result<Page<T>, ApiError> {
    let value: Value = parse(body)?;

    match value {
        Value::Array(_) => {
            let items = Vec::<T>::deserialize(&value).map_err(|e| deserialization_error(e, body))?;
            Ok(Page::from_items(items))
        }
        Value::Object(ref object) => {
            let envelope =
                PageEnvelope::deserialize(&value).map_err(|e| deserialization_error(e, body))?;
            let items = match object.get(key) {
                None | Some(Value::Null) => Vec::new(),
                Some(items) => {
                    Vec::<T>::deserialize(items).map_err(|e| deserialization_error(e, body))?
                }
            };
            Ok(Page::new(envelope, items))
        }
        _ => Err(ApiError::Deserialization {
            message: format!("expected an array or an object holding '{}'", key),
            body: body.to_string(),
        }),
    }
}

/// Serializes an entity into the JSON object sent as a request body.
///
/// Only fields that are set are emitted, and the flattened `extra` map is
/// written back verbatim.
///
/// # Errors
///
/// Returns [`ApiError::Serialization`] if the value does not serialize to a
/// JSON object.
pub fn to_wire_json<T: Serialize>(entity: &T) -> Result<JsonObject, ApiError> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(ApiError::Serialization(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ApiError::Serialization(e.to_string())),
    }
}

/// Merges caller-supplied fields into a request body.
///
/// Keys already present are replaced, so each key appears exactly once on
/// the wire and the caller's value wins.
///
/// ```rust
/// use serde_json::json;
/// use testrail_cli::api::codec::merge_fields;
///
/// let mut body = json!({"title": "Login", "priority_id": 2}).as_object().unwrap().clone();
/// let custom = json!({"priority_id": 4, "custom_preconds": "Seeded user"}).as_object().unwrap().clone();
///
/// merge_fields(&mut body, Some(&custom));
/// assert_eq!(body["priority_id"], 4);
/// assert_eq!(body.len(), 3);
/// ```
pub fn merge_fields(target: &mut JsonObject, extra: Option<&JsonObject>) {
    if let Some(extra) = extra {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// The `id` field of a mutation response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RecordProbe {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    runs: Option<Vec<RunProbe>>,
}

#[derive(Debug, Deserialize)]
struct RunProbe {
    #[serde(default)]
    id: Option<u64>,
}

/// Extracts the id of the record a mutation created or updated.
///
/// | Response | Result |
/// |----------|--------|
/// | `{"id": 42, ...}` | `Some(42)` |
/// | `{"id": "guid", "runs": [{"id": 81}, ...]}` | `Some(81)` |
/// | no `id`, or a GUID without runs | `None` |
/// | not JSON, or an unexpected shape | `None`, logged at warn level |
///
/// ```rust
/// use testrail_cli::api::codec::resolve_record_id;
///
/// assert_eq!(resolve_record_id(r#"{"id": 42}"#), Some(42));
/// assert_eq!(resolve_record_id(r#"{"id": "e-1", "runs": [{"id": 7}]}"#), Some(7));
/// assert_eq!(resolve_record_id("{}"), None);
/// ```
pub fn resolve_record_id(body: &str) -> Option<u64> {
    let probe: RecordProbe = match serde_json::from_str(body) {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!("Could not read record id from response: {}", e);
            return None;
        }
    };

    match probe.id? {
        RecordId::Numeric(id) => Some(id),
        RecordId::Text(_) => probe
            .runs
            .as_deref()
            .and_then(|runs| runs.first())
            .and_then(|run| run.id),
    }
}

fn deserialization_error(error: serde_json::Error, body: &str) -> ApiError {
    ApiError::Deserialization {
        message: error.to_string(),
        body: body.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
