//
//  testrail-cli
//  api/resources/plans.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Plan and plan entry operations.
//!
//! Plan entries are addressed by the plan id plus the entry GUID
//! (`update_plan_entry/{plan_id}/{entry_id}`). Adding or updating an entry
//! answers with the entry itself, so the id these calls return is the id of
//! the entry's first run.

use super::runs::has_case_selection;
use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{ApiError, JsonObject, RequestResult};
use crate::api::types::{Plan, PlanEntry};
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    /// Fetches a plan together with its entries and their runs.
    pub fn get_plan(&self, plan_id: u64) -> Option<Plan> {
        self.fetch_one("plan", Some(plan_id), QueryOptions::new())
    }

    /// Like [`get_plan`](Self::get_plan), keeping the failure.
    pub fn try_get_plan(&self, plan_id: u64) -> Result<Plan, ApiError> {
        self.fetch_record("plan", Some(plan_id), QueryOptions::new())
    }

    /// Lists the plans of a project. Entries are not included.
    pub fn get_plans(&self, project_id: u64) -> RequestResult<Vec<Plan>> {
        self.fetch_list("plans", Some(project_id), QueryOptions::new(), "plans")
    }

    /// Creates a plan, optionally with entries. `plan.name` is required.
    pub fn add_plan(
        &self,
        project_id: u64,
        plan: &Plan,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(plan.name.as_deref(), "plan name") {
            return RequestResult::failure(e);
        }
        self.write_record(CommandAction::Add, "plan", Some(project_id), plan, custom)
    }

    /// Updates the plan-level fields set on `plan`.
    pub fn update_plan(
        &self,
        plan_id: u64,
        plan: &Plan,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        self.write_record(CommandAction::Update, "plan", Some(plan_id), plan, custom)
    }

    /// Adds a suite to a plan.
    ///
    /// `entry.suite_id` is required. Explicit `case_ids` are validated
    /// against the plan's project and the entry's suite, as for runs.
    pub fn add_plan_entry(
        &self,
        plan_id: u64,
        entry: &PlanEntry,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if entry.suite_id.is_none() {
            return RequestResult::failure(ApiError::InvalidArgument(
                "plan entry suite_id is required".into(),
            ));
        }

        let entry = match self.entry_with_case_selection(plan_id, None, entry) {
            Ok(entry) => entry,
            Err(e) => return RequestResult::failure(e),
        };
        self.write_record(CommandAction::Add, "plan_entry", Some(plan_id), &entry, custom)
    }

    /// Updates an entry of a plan.
    pub fn update_plan_entry(
        &self,
        plan_id: u64,
        entry_id: &str,
        entry: &PlanEntry,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(Some(entry_id), "plan entry id") {
            return RequestResult::failure(e);
        }

        let entry = match self.entry_with_case_selection(plan_id, Some(entry_id), entry) {
            Ok(entry) => entry,
            Err(e) => return RequestResult::failure(e),
        };
        self.write_record_at(
            CommandAction::Update,
            "plan_entry",
            Some(plan_id),
            Some(entry_id),
            &entry,
            custom,
        )
    }

    /// Closes a plan and all of its runs.
    pub fn close_plan(&self, plan_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Close, "plan", plan_id, None)
    }

    pub fn delete_plan(&self, plan_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "plan", plan_id, None)
    }

    /// Removes one entry, and its runs, from a plan.
    pub fn delete_plan_entry(&self, plan_id: u64, entry_id: &str) -> RequestResult<String> {
        if let Err(e) = require_text(Some(entry_id), "plan entry id") {
            return RequestResult::failure(e);
        }
        self.send_command(CommandAction::Delete, "plan_entry", plan_id, Some(entry_id))
    }

    /// Validates explicit case ids of an entry and marks it as a custom selection.
    ///
    /// The plan is fetched to learn its project and, for updates without a
    /// `suite_id`, the suite of the existing entry.
    fn entry_with_case_selection(
        &self,
        plan_id: u64,
        entry_id: Option<&str>,
        entry: &PlanEntry,
    ) -> Result<PlanEntry, ApiError> {
        let mut entry = entry.clone();
        if !has_case_selection(&entry.case_ids) {
            return Ok(entry);
        }

        let plan: Plan = self.fetch_record("plan", Some(plan_id), QueryOptions::new())?;
        let project_id = plan
            .project_id
            .ok_or_else(|| ApiError::Precondition(format!("plan {} has no project", plan_id)))?;

        let suite_id = entry.suite_id.or_else(|| {
            let entry_id = entry_id?;
            plan.entries
                .iter()
                .flatten()
                .find(|existing| existing.id.as_deref() == Some(entry_id))
                .and_then(|existing| existing.suite_id)
        });

        let case_ids = entry.case_ids.clone().unwrap_or_default();
        self.ensure_cases_exist(project_id, suite_id, &case_ids)?;
        entry.include_all = Some(false);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::client;
    use crate::api::common::ApiError;
    use crate::api::types::*;
    use serde_json::json;

    const PLAN: &str = r#"{"id":80,"name":"Release 2.0","project_id":1,
        "entries":[{"id":"3933d74b","suite_id":4,"runs":[{"id":81,"suite_id":4}]}]}"#;

    const SUITE_CASES: &str = r#"[{"id":10},{"id":11}]"#;

    #[test]
    fn test_get_plan_with_entries() {
        let (client, transport) = client();
        transport.respond(200, PLAN);

        let plan = client.get_plan(80).unwrap();

        assert_eq!(plan.runs().count(), 1);
        assert_eq!(transport.requests()[0].uri, "?/api/v2/get_plan/80");
    }

    #[test]
    fn test_get_plans() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"offset":0,"limit":250,"size":2,"_links":{"next":null,"prev":null},
                "plans":[{"id":80,"name":"A"},{"id":81,"name":"B","is_completed":true}]}"#,
        );

        let plans = client.get_plans(1).into_result().unwrap();
        assert_eq!(plans[1].is_completed, Some(true));
    }

    #[test]
    fn test_add_plan_requires_name() {
        let (client, transport) = client();
        assert!(!client.add_plan(1, &Plan::default(), None).is_success());
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_update_plan_allows_missing_name() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":80}"#);

        let update = Plan {
            description: Some("Scope changed".into()),
            ..Default::default()
        };
        assert_eq!(client.update_plan(80, &update, None).into_result(), Ok(Some(80)));
        assert_eq!(transport.posted_uris(), vec!["?/api/v2/update_plan/80"]);
    }

    #[test]
    fn test_add_plan_entry_returns_first_run_id() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"id":"a1b2c3","suite_id":4,"runs":[{"id":95,"config":"Chrome"},{"id":96,"config":"Firefox"}]}"#,
        );

        let entry = PlanEntry {
            suite_id: Some(4),
            config_ids: Some(vec![1, 2]),
            ..Default::default()
        };
        let result = client.add_plan_entry(80, &entry, None);

        assert_eq!(result.into_result(), Ok(Some(95)));
        assert_eq!(transport.posted_uris(), vec!["?/api/v2/add_plan_entry/80"]);
    }

    #[test]
    fn test_add_plan_entry_requires_suite() {
        let (client, transport) = client();
        let result = client.add_plan_entry(80, &PlanEntry::default(), None);
        assert!(matches!(result.error(), Some(ApiError::InvalidArgument(_))));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_add_plan_entry_validates_cases() {
        let (client, transport) = client();
        transport.respond(200, PLAN);
        transport.respond(200, SUITE_CASES);

        let entry = PlanEntry {
            suite_id: Some(4),
            case_ids: Some(vec![77]),
            ..Default::default()
        };
        let result = client.add_plan_entry(80, &entry, None);

        assert!(matches!(result.error(), Some(ApiError::Precondition(_))));
        assert!(transport.posted_uris().is_empty());
        assert_eq!(transport.requests()[1].uri, "?/api/v2/get_cases/1&suite_id=4");
    }

    #[test]
    fn test_update_plan_entry_uses_existing_suite() {
        let (client, transport) = client();
        transport.respond(200, PLAN);
        transport.respond(200, SUITE_CASES);
        transport.respond(200, r#"{"id":"3933d74b","runs":[{"id":81}]}"#);

        let entry = PlanEntry {
            case_ids: Some(vec![11]),
            ..Default::default()
        };
        let result = client.update_plan_entry(80, "3933d74b", &entry, None);

        assert_eq!(result.into_result(), Ok(Some(81)));
        let requests = transport.requests();
        assert_eq!(requests[1].uri, "?/api/v2/get_cases/1&suite_id=4");
        assert_eq!(requests[2].uri, "?/api/v2/update_plan_entry/80/3933d74b");
        assert_eq!(
            transport.last_body(),
            Some(json!({"include_all": false, "case_ids": [11]}))
        );
    }

    #[test]
    fn test_plan_commands() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":80,"is_completed":true}"#);
        transport.respond(200, "");
        transport.respond(200, "");

        assert!(client.close_plan(80).is_success());
        assert!(client.delete_plan_entry(80, "3933d74b").is_success());
        assert!(client.delete_plan(80).is_success());
        assert!(!client.delete_plan_entry(80, " ").is_success());

        assert_eq!(
            transport.posted_uris(),
            vec![
                "?/api/v2/close_plan/80",
                "?/api/v2/delete_plan_entry/80/3933d74b",
                "?/api/v2/delete_plan/80"
            ]
        );
    }
}
