//
//  testrail-cli
//  api/resources/results.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test and result operations.

use crate::api::client::TestRailClient;
use crate::api::common::{JsonObject, RequestResult};
use crate::api::types::{Test, TestResult};
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    pub fn get_test(&self, test_id: u64) -> Option<Test> {
        self.fetch_one("test", Some(test_id), QueryOptions::new())
    }

    /// Lists the tests of a run.
    pub fn get_tests(&self, run_id: u64) -> RequestResult<Vec<Test>> {
        self.fetch_list("tests", Some(run_id), QueryOptions::new(), "tests")
    }

    /// Lists the results recorded for a test, newest first.
    pub fn get_results(&self, test_id: u64) -> RequestResult<Vec<TestResult>> {
        self.fetch_list("results", Some(test_id), QueryOptions::new(), "results")
    }

    /// Lists the results recorded for a case within a run.
    pub fn get_results_for_case(&self, run_id: u64, case_id: u64) -> RequestResult<Vec<TestResult>> {
        self.fetch_page_at(
            "results_for_case",
            Some(run_id),
            Some(case_id),
            QueryOptions::new(),
            "results",
        )
        .map(|page| page.items)
    }

    /// Lists every result of a run.
    pub fn get_results_for_run(&self, run_id: u64) -> RequestResult<Vec<TestResult>> {
        self.fetch_list("results_for_run", Some(run_id), QueryOptions::new(), "results")
    }

    /// Records a result against a test.
    pub fn add_result(
        &self,
        test_id: u64,
        result: &TestResult,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        self.write_record(CommandAction::Add, "result", Some(test_id), result, custom)
    }

    /// Records a result against the test of `case_id` in `run_id`.
    pub fn add_result_for_case(
        &self,
        run_id: u64,
        case_id: u64,
        result: &TestResult,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        self.write_record_for("result_for_case", run_id, case_id, result, custom)
    }
}
