//
//  testrail-cli
//  api/resources/cases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Case operations and case metadata.
//!
//! Custom case fields are written by passing them as the `custom` map of
//! [`add_case`](TestRailClient::add_case) and
//! [`update_case`](TestRailClient::update_case). Their keys carry the
//! `custom_` prefix, exactly as listed by `get_case_fields`:
//!
//! ```rust,no_run
//! use serde_json::json;
//! use testrail_cli::api::types::Case;
//! # fn demo(client: &testrail_cli::api::TestRailClient) {
//! let custom = json!({"custom_preconds": "A registered user"});
//! let case = Case { title: Some("Login".into()), ..Default::default() };
//! let created = client.add_case(12, &case, custom.as_object());
//! # }
//! ```

use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{ApiError, JsonObject, Page, RequestResult};
use crate::api::types::{Case, CaseField, CaseType};
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    pub fn get_case(&self, case_id: u64) -> Option<Case> {
        self.fetch_one("case", Some(case_id), QueryOptions::new())
    }

    /// Like [`get_case`](Self::get_case), keeping the failure.
    pub fn try_get_case(&self, case_id: u64) -> Result<Case, ApiError> {
        self.fetch_record("case", Some(case_id), QueryOptions::new())
    }

    /// Lists the cases of a project, optionally narrowed to a suite and a section.
    ///
    /// Returns the first page. See [`get_cases_page`](Self::get_cases_page).
    pub fn get_cases(
        &self,
        project_id: u64,
        suite_id: Option<u64>,
        section_id: Option<u64>,
    ) -> RequestResult<Vec<Case>> {
        self.get_cases_page(project_id, suite_id, section_id, QueryOptions::new())
            .map(|page| page.items)
    }

    /// Lists one page of cases. `query` carries extra filters such as
    /// `limit`, `offset` or `priority_id`.
    pub fn get_cases_page(
        &self,
        project_id: u64,
        suite_id: Option<u64>,
        section_id: Option<u64>,
        query: QueryOptions,
    ) -> RequestResult<Page<Case>> {
        let filters = QueryOptions::new()
            .optional("suite_id", suite_id)
            .optional("section_id", section_id)
            .append(query);
        self.fetch_page("cases", Some(project_id), filters, "cases")
    }

    /// Creates a case in a section. `case.title` is required.
    pub fn add_case(
        &self,
        section_id: u64,
        case: &Case,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(case.title.as_deref(), "case title") {
            return RequestResult::failure(e);
        }
        self.write_record(CommandAction::Add, "case", Some(section_id), case, custom)
    }

    /// Updates the fields set on `case`. A title, if given, must not be blank.
    pub fn update_case(
        &self,
        case_id: u64,
        case: &Case,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if case.title.is_some() {
            if let Err(e) = require_text(case.title.as_deref(), "case title") {
                return RequestResult::failure(e);
            }
        }
        self.write_record(CommandAction::Update, "case", Some(case_id), case, custom)
    }

    pub fn delete_case(&self, case_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "case", case_id, None)
    }

    /// Lists the custom case field definitions.
    pub fn get_case_fields(&self) -> RequestResult<Vec<CaseField>> {
        self.fetch_list("case_fields", None, QueryOptions::new(), "case_fields")
    }

    /// Lists the case types.
    pub fn get_case_types(&self) -> RequestResult<Vec<CaseType>> {
        self.fetch_list("case_types", None, QueryOptions::new(), "case_types")
    }
}
