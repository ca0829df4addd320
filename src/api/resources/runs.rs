//
//  testrail-cli
//  api/resources/runs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Run operations.
//!
//! # Custom Case Selections
//!
//! When a run (or plan entry) is written with explicit `case_ids`, the
//! client first reads the cases of the target project and suite and checks
//! that at least one of the requested ids exists there. If none does, the
//! write is skipped and the call fails with [`ApiError::Precondition`].
//! Otherwise the record is sent with `include_all = false` and the requested
//! ids.
//!
//! ```text
//! add_run(project 1, suite 4, case_ids [10, 11])
//!   GET  get_cases/1&suite_id=4        -> cases 10, 12, 13
//!   POST add_run/1 {"suite_id":4,"include_all":false,"case_ids":[10,11]}
//! ```

use std::collections::HashSet;

use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{ApiError, JsonObject, Page, RequestResult};
use crate::api::types::Run;
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    pub fn get_run(&self, run_id: u64) -> Option<Run> {
        self.fetch_one("run", Some(run_id), QueryOptions::new())
    }

    /// Like [`get_run`](Self::get_run), keeping the failure.
    pub fn try_get_run(&self, run_id: u64) -> Result<Run, ApiError> {
        self.fetch_record("run", Some(run_id), QueryOptions::new())
    }

    /// Lists the runs of a project. Runs that belong to plans are not included.
    pub fn get_runs(&self, project_id: u64) -> RequestResult<Vec<Run>> {
        self.get_runs_page(project_id, QueryOptions::new())
            .map(|page| page.items)
    }

    /// Lists one page of runs. `query` carries filters such as
    /// `is_completed`, `suite_id`, `limit` or `offset`.
    pub fn get_runs_page(&self, project_id: u64, query: QueryOptions) -> RequestResult<Page<Run>> {
        self.fetch_page("runs", Some(project_id), query, "runs")
    }

    /// Creates a run in a project.
    ///
    /// `run.name` is required. When `run.case_ids` is non-empty the ids are
    /// checked against the cases of `project_id` / `run.suite_id` first.
    pub fn add_run(
        &self,
        project_id: u64,
        run: &Run,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(run.name.as_deref(), "run name") {
            return RequestResult::failure(e);
        }

        let run = match self.with_case_selection(run, project_id, run.suite_id) {
            Ok(run) => run,
            Err(e) => return RequestResult::failure(e),
        };
        self.write_record(CommandAction::Add, "run", Some(project_id), &run, custom)
    }

    /// Updates the fields set on `run`.
    ///
    /// When `run.case_ids` is non-empty the ids are validated like in
    /// [`add_run`](Self::add_run). If `run.project_id` is not set, the
    /// existing run is fetched to learn its project and suite.
    pub fn update_run(
        &self,
        run_id: u64,
        run: &Run,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        let run = match self.prepare_run_update(run_id, run) {
            Ok(run) => run,
            Err(e) => return RequestResult::failure(e),
        };
        self.write_record(CommandAction::Update, "run", Some(run_id), &run, custom)
    }

    /// Closes a run. Closed runs are archived and can no longer be edited.
    pub fn close_run(&self, run_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Close, "run", run_id, None)
    }

    pub fn delete_run(&self, run_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "run", run_id, None)
    }

    fn prepare_run_update(&self, run_id: u64, run: &Run) -> Result<Run, ApiError> {
        if !has_case_selection(&run.case_ids) {
            return Ok(run.clone());
        }

        let (project_id, suite_id) = match run.project_id {
            Some(project_id) => (project_id, run.suite_id),
            None => {
                let existing: Run = self.fetch_record("run", Some(run_id), QueryOptions::new())?;
                let project_id = existing.project_id.ok_or_else(|| {
                    ApiError::Precondition(format!("run {} has no project", run_id))
                })?;
                (project_id, run.suite_id.or(existing.suite_id))
            }
        };

        self.with_case_selection(run, project_id, suite_id)
    }

    /// Returns `run` as a custom selection after validating its case ids.
    fn with_case_selection(
        &self,
        run: &Run,
        project_id: u64,
        suite_id: Option<u64>,
    ) -> Result<Run, ApiError> {
        let mut run = run.clone();
        if let Some(case_ids) = run.case_ids.as_deref().filter(|ids| !ids.is_empty()) {
            self.ensure_cases_exist(project_id, suite_id, case_ids)?;
            run.include_all = Some(false);
        }
        Ok(run)
    }

    /// Fails unless at least one of `case_ids` belongs to the project and suite.
    ///
    /// Pages through `get_cases` until a match is found or the pages run out.
    pub(crate) fn ensure_cases_exist(
        &self,
        project_id: u64,
        suite_id: Option<u64>,
        case_ids: &[u64],
    ) -> Result<(), ApiError> {
        let wanted: HashSet<u64> = case_ids.iter().copied().collect();
        let mut query = QueryOptions::new();

        loop {
            let page = self
                .get_cases_page(project_id, suite_id, None, query)
                .into_result()?;

            if page.items.iter().filter_map(|case| case.id).any(|id| wanted.contains(&id)) {
                return Ok(());
            }

            match page.next_offset() {
                Some(offset) if !page.items.is_empty() => {
                    query = QueryOptions::new().param("offset", offset);
                }
                _ => break,
            }
        }

        Err(ApiError::Precondition(format!(
            "none of the cases {:?} exist in project {}{}",
            case_ids,
            project_id,
            suite_id.map(|id| format!(" suite {}", id)).unwrap_or_default()
        )))
    }
}

pub(crate) fn has_case_selection(case_ids: &Option<Vec<u64>>) -> bool {
    case_ids.as_ref().is_some_and(|ids| !ids.is_empty())
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::client;
    use crate::api::common::ApiError;
    use crate::api::types::*;
    use serde_json::json;

    const SUITE_CASES: &str = r#"{"offset":0,"limit":250,"size":3,"_links":{"next":null,"prev":null},
        "cases":[{"id":10,"suite_id":4},{"id":12,"suite_id":4},{"id":13,"suite_id":4}]}"#;

    fn nightly(case_ids: Option<Vec<u64>>) -> Run {
        Run {
            name: Some("Nightly".into()),
            suite_id: Some(4),
            case_ids,
            ..Default::default()
        }
    }

    #[test]
    fn test_get_run_counts() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"id":81,"name":"File Formats","passed_count":2,"failed_count":1,"untested_count":3,
                "custom_status1_count":1,"is_completed":false,"created_on":1393845644,"suite_id":4,"project_id":1}"#,
        );

        let run = client.get_run(81).unwrap();

        assert_eq!(run.total_count(), 7);
        assert_eq!(run.custom_status1_count, Some(1));
    }

    #[test]
    fn test_add_run_without_selection_skips_validation() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":90}"#);

        let run = Run {
            include_all: Some(true),
            ..nightly(None)
        };
        let result = client.add_run(1, &run, None);

        assert_eq!(result.into_result(), Ok(Some(90)));
        assert_eq!(transport.call_count(), 1);
        assert_eq!(transport.posted_uris(), vec!["?/api/v2/add_run/1"]);
    }

    #[test]
    fn test_add_run_blank_name_makes_no_call() {
        let (client, transport) = client();
        let run = Run {
            name: Some("".into()),
            ..nightly(Some(vec![10]))
        };
        assert!(matches!(
            client.add_run(1, &run, None).error(),
            Some(ApiError::InvalidArgument(_))
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_add_run_with_overlap_is_custom_selection() {
        let (client, transport) = client();
        transport.respond(200, SUITE_CASES);
        transport.respond(200, r#"{"id":91,"include_all":false}"#);

        let result = client.add_run(1, &nightly(Some(vec![10, 11])), None);

        assert_eq!(result.into_result(), Ok(Some(91)));
        let requests = transport.requests();
        assert_eq!(requests[0].uri, "?/api/v2/get_cases/1&suite_id=4");
        assert_eq!(requests[1].uri, "?/api/v2/add_run/1");
        assert_eq!(
            transport.last_body(),
            Some(json!({"name": "Nightly", "suite_id": 4, "include_all": false, "case_ids": [10, 11]}))
        );
    }

    #[test]
    fn test_case_check_pages_without_size() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"_links":{"next":"/api/v2/get_cases/1&suite_id=4&offset=2"},"cases":[{"id":10},{"id":12}]}"#,
        );
        transport.respond(200, r#"{"_links":{"next":null},"cases":[{"id":30}]}"#);
        transport.respond(200, r#"{"id":92}"#);

        let result = client.add_run(1, &nightly(Some(vec![30])), None);

        assert_eq!(result.into_result(), Ok(Some(92)));
        let requests = transport.requests();
        assert_eq!(requests[1].uri, "?/api/v2/get_cases/1&suite_id=4&offset=2");
        assert_eq!(requests[2].uri, "?/api/v2/add_run/1");
    }

    #[test]
    fn test_add_run_without_overlap_makes_no_mutation() {
        let (client, transport) = client();
        transport.respond(200, SUITE_CASES);

        let result = client.add_run(1, &nightly(Some(vec![98, 99])), None);

        assert!(matches!(result.error(), Some(ApiError::Precondition(_))));
        assert_eq!(*result.value(), None);
        assert!(transport.posted_uris().is_empty());
    }

    #[test]
    fn test_add_run_case_fetch_failure_fails_call() {
        let (client, transport) = client();
        transport.respond(400, r#"{"error":"Field :suite_id is not a valid test suite."}"#);

        let result = client.add_run(1, &nightly(Some(vec![10])), None);

        assert!(matches!(result.error(), Some(ApiError::Http { status: 400, .. })));
        assert!(transport.posted_uris().is_empty());
    }

    #[test]
    fn test_case_validation_follows_pages() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"offset":0,"limit":2,"size":2,"_links":{"next":"/api/v2/get_cases/1&suite_id=4&offset=2","prev":null},
                "cases":[{"id":1},{"id":2}]}"#,
        );
        transport.respond(
            200,
            r#"{"offset":2,"limit":2,"size":1,"_links":{"next":null,"prev":"x"},"cases":[{"id":3}]}"#,
        );
        transport.respond(200, r#"{"id":92}"#);

        let result = client.add_run(1, &nightly(Some(vec![3])), None);

        assert!(result.is_success());
        assert_eq!(transport.requests()[1].uri, "?/api/v2/get_cases/1&suite_id=4&offset=2");
    }

    #[test]
    fn test_update_run_fetches_existing_run_for_project() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":81,"project_id":1,"suite_id":4}"#);
        transport.respond(200, SUITE_CASES);
        transport.respond(200, r#"{"id":81}"#);

        let update = Run {
            case_ids: Some(vec![12]),
            ..Default::default()
        };
        let result = client.update_run(81, &update, None);

        assert_eq!(result.into_result(), Ok(Some(81)));
        let uris: Vec<String> = transport.requests().into_iter().map(|r| r.uri).collect();
        assert_eq!(
            uris,
            vec![
                "?/api/v2/get_run/81",
                "?/api/v2/get_cases/1&suite_id=4",
                "?/api/v2/update_run/81"
            ]
        );
        assert_eq!(
            transport.last_body(),
            Some(json!({"include_all": false, "case_ids": [12]}))
        );
    }

    #[test]
    fn test_update_run_without_overlap_makes_no_mutation() {
        let (client, transport) = client();
        transport.respond(200, SUITE_CASES);

        let update = Run {
            project_id: Some(1),
            suite_id: Some(4),
            case_ids: Some(vec![5]),
            ..Default::default()
        };
        let result = client.update_run(81, &update, None);

        assert!(matches!(result.error(), Some(ApiError::Precondition(_))));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_update_run_plain_fields() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":81}"#);

        let update = Run {
            description: Some("Rerun after fix".into()),
            ..Default::default()
        };
        assert!(client.update_run(81, &update, None).is_success());
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_close_and_delete_run() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":81,"is_completed":true}"#);
        transport.respond(200, "");

        assert!(client.close_run(81).is_success());
        assert!(client.delete_run(81).is_success());
        assert_eq!(
            transport.posted_uris(),
            vec!["?/api/v2/close_run/81", "?/api/v2/delete_run/81"]
        );
    }
}
