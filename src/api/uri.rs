//
//  testrail-cli
//  api/uri.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Path Builder
//!
//! TestRail exposes every operation as `index.php?/api/v2/{action}_{resource}`
//! followed by optional id segments and query parameters. This module builds
//! the part starting at `?`; the transport prepends `{base_url}/index.php`.
//!
//! ```text
//! ?/api/v2/get_case/5
//! ?/api/v2/update_plan_entry/9/abc-123
//! ?/api/v2/get_cases/1&suite_id=7&limit=20
//! ```
//!
//! Query parameters are appended with `&` because the path already lives
//! inside the query component of the URL.

use std::fmt;

/// The verb half of an endpoint name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandAction {
    Get,
    Add,
    Update,
    Delete,
    Close,
}

impl CommandAction {
    /// The lowercase endpoint prefix (`get`, `add`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Close => "close",
        }
    }

    /// Returns `true` for actions sent as HTTP POST.
    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the relative endpoint path for an API command.
///
/// # Parameters
///
/// * `action` - The command verb
/// * `resource` - The resource name as TestRail spells it (`case`, `plan_entry`, ...);
///   not validated
/// * `primary_id` - First id segment
/// * `secondary_id` - Second id segment, numeric
/// * `secondary_id_text` - Second id segment, textual (plan entry ids are GUIDs);
///   ignored when `secondary_id` is present
/// * `query` - Pre-formatted, already escaped suffix such as `&suite_id=7`
///
/// # Example
///
/// ```rust
/// use testrail_cli::api::uri::{build_path, CommandAction};
///
/// assert_eq!(build_path(CommandAction::Get, "case", Some(5), None, None, None), "?/api/v2/get_case/5");
/// assert_eq!(
///     build_path(CommandAction::Update, "plan_entry", Some(9), None, Some("abc-123"), None),
///     "?/api/v2/update_plan_entry/9/abc-123"
/// );
/// ```
pub fn build_path(
    action: CommandAction,
    resource: &str,
    primary_id: Option<u64>,
    secondary_id: Option<u64>,
    secondary_id_text: Option<&str>,
    query: Option<&str>,
) -> String {
    let mut path = format!("?/api/v2/{}_{}", action, resource);

    if let Some(id) = primary_id {
        path.push('/');
        path.push_str(&id.to_string());
    }

    match (secondary_id, secondary_id_text) {
        (Some(id), _) => {
            path.push('/');
            path.push_str(&id.to_string());
        }
        (None, Some(text)) => {
            path.push('/');
            path.push_str(text);
        }
        (None, None) => {}
    }

    if let Some(query) = query {
        path.push_str(query);
    }

    path
}

/// Builder for the `&key=value` query suffix accepted by [`build_path`].
///
/// Values are percent-encoded with `application/x-www-form-urlencoded`
/// rules; keys are emitted as given.
///
/// ```rust
/// use testrail_cli::api::uri::QueryOptions;
///
/// let query = QueryOptions::new().param("suite_id", 7).param("limit", 20);
/// assert_eq!(query.to_string(), "&suite_id=7&limit=20");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pairs: Vec<(String, String)>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a parameter only when `value` is present.
    pub fn optional(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Appends a boolean flag in TestRail's `0`/`1` encoding.
    pub fn flag(self, key: &str, value: Option<bool>) -> Self {
        self.optional(key, value.map(u8::from))
    }

    /// Appends every parameter of `other`, keeping order.
    pub fn append(mut self, other: QueryOptions) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the suffix, or `None` when no parameter was added.
    pub fn into_query(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl fmt::Display for QueryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.pairs {
            let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
            write!(f, "&{}={}", key, encoded)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_id() {
        assert_eq!(
            build_path(CommandAction::Get, "case", Some(5), None, None, None),
            "?/api/v2/get_case/5"
        );
    }

    #[test]
    fn test_no_ids() {
        assert_eq!(
            build_path(CommandAction::Get, "priorities", None, None, None, None),
            "?/api/v2/get_priorities"
        );
    }

    #[test]
    fn test_text_secondary_id() {
        assert_eq!(
            build_path(CommandAction::Update, "plan_entry", Some(9), None, Some("abc-123"), None),
            "?/api/v2/update_plan_entry/9/abc-123"
        );
    }

    #[test]
    fn test_numeric_secondary_id() {
        assert_eq!(
            build_path(CommandAction::Add, "result_for_case", Some(3), Some(44), None, None),
            "?/api/v2/add_result_for_case/3/44"
        );
    }

    #[test]
    fn test_query_is_appended_verbatim() {
        assert_eq!(
            build_path(
                CommandAction::Get,
                "cases",
                Some(1),
                None,
                None,
                Some("&suite_id=7&limit=20")
            ),
            "?/api/v2/get_cases/1&suite_id=7&limit=20"
        );
    }

    #[test]
    fn test_close_and_delete_prefixes() {
        assert_eq!(
            build_path(CommandAction::Close, "run", Some(12), None, None, None),
            "?/api/v2/close_run/12"
        );
        assert_eq!(
            build_path(CommandAction::Delete, "plan_entry", Some(4), None, Some("e-1"), None),
            "?/api/v2/delete_plan_entry/4/e-1"
        );
    }

    #[test]
    fn test_query_options_encoding() {
        let query = QueryOptions::new()
            .param("email", "jane+qa@example.com")
            .flag("is_completed", Some(false))
            .optional("section_id", None::<u64>);
        assert_eq!(query.to_string(), "&email=jane%2Bqa%40example.com&is_completed=0");
    }

    #[test]
    fn test_empty_query_options() {
        assert_eq!(QueryOptions::new().into_query(), None);
    }
}
