//
//  testrail-cli
//  api/resources/suites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Suite and section operations.

use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{ApiError, JsonObject, RequestResult};
use crate::api::types::{Section, Suite};
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    pub fn get_suite(&self, suite_id: u64) -> Option<Suite> {
        self.fetch_one("suite", Some(suite_id), QueryOptions::new())
    }

    /// Like [`get_suite`](Self::get_suite), keeping the failure.
    pub fn try_get_suite(&self, suite_id: u64) -> Result<Suite, ApiError> {
        self.fetch_record("suite", Some(suite_id), QueryOptions::new())
    }

    /// Lists the suites of a project.
    pub fn get_suites(&self, project_id: u64) -> RequestResult<Vec<Suite>> {
        self.fetch_list("suites", Some(project_id), QueryOptions::new(), "suites")
    }

    /// Creates a suite in a project. `suite.name` is required.
    pub fn add_suite(
        &self,
        project_id: u64,
        suite: &Suite,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(suite.name.as_deref(), "suite name") {
            return RequestResult::failure(e);
        }
        self.write_record(CommandAction::Add, "suite", Some(project_id), suite, custom)
    }

    pub fn update_suite(
        &self,
        suite_id: u64,
        suite: &Suite,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if suite.name.is_some() {
            if let Err(e) = require_text(suite.name.as_deref(), "suite name") {
                return RequestResult::failure(e);
            }
        }
        self.write_record(CommandAction::Update, "suite", Some(suite_id), suite, custom)
    }

    pub fn delete_suite(&self, suite_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "suite", suite_id, None)
    }

    pub fn get_section(&self, section_id: u64) -> Option<Section> {
        self.fetch_one("section", Some(section_id), QueryOptions::new())
    }

    /// Lists the sections of a project, restricted to one suite when given.
    ///
    /// `suite_id` is required by the server for projects in multi-suite mode.
    pub fn get_sections(
        &self,
        project_id: u64,
        suite_id: Option<u64>,
    ) -> RequestResult<Vec<Section>> {
        self.fetch_list(
            "sections",
            Some(project_id),
            QueryOptions::new().optional("suite_id", suite_id),
            "sections",
        )
    }

    /// Creates a section. `section.name` is required; set `suite_id` and
    /// `parent_id` on the record to place it.
    pub fn add_section(
        &self,
        project_id: u64,
        section: &Section,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(section.name.as_deref(), "section name") {
            return RequestResult::failure(e);
        }
        self.write_record(CommandAction::Add, "section", Some(project_id), section, custom)
    }

    pub fn update_section(
        &self,
        section_id: u64,
        section: &Section,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if section.name.is_some() {
            if let Err(e) = require_text(section.name.as_deref(), "section name") {
                return RequestResult::failure(e);
            }
        }
        self.write_record(CommandAction::Update, "section", Some(section_id), section, custom)
    }

    /// Deletes a section with its subsections and cases.
    pub fn delete_section(&self, section_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "section", section_id, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::client;
    use crate::api::common::ApiError;
    use crate::api::types::*;
    use serde_json::json;

    #[test]
    fn test_get_suites_bare_array() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"[{"id":1,"name":"Setup & Installation","project_id":1,"is_master":true},
                {"id":2,"name":"Document Editing","project_id":1}]"#,
        );

        let suites = client.get_suites(1).into_result().unwrap();

        assert_eq!(suites.len(), 2);
        assert_eq!(suites[0].is_master, Some(true));
        assert_eq!(transport.requests()[0].uri, "?/api/v2/get_suites/1");
    }

    #[test]
    fn test_add_suite_blank_name_makes_no_call() {
        let (client, transport) = client();
        let result = client.add_suite(1, &Suite::default(), None);
        assert!(matches!(result.error(), Some(ApiError::InvalidArgument(_))));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_get_sections_for_suite() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"offset":0,"limit":250,"size":2,"_links":{"next":null,"prev":null},
                "sections":[{"id":1,"name":"Prerequisites","depth":0,"parent_id":null,"suite_id":5},
                            {"id":2,"name":"Login","depth":1,"parent_id":1,"suite_id":5}]}"#,
        );

        let sections = client.get_sections(1, Some(5)).into_result().unwrap();

        assert_eq!(sections[1].parent_id, Some(1));
        assert_eq!(transport.requests()[0].uri, "?/api/v2/get_sections/1&suite_id=5");
    }

    #[test]
    fn test_add_section() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":12,"name":"Checkout","suite_id":5}"#);

        let section = Section {
            name: Some("Checkout".into()),
            suite_id: Some(5),
            ..Default::default()
        };
        let result = client.add_section(1, &section, None);

        assert_eq!(result.into_result(), Ok(Some(12)));
        assert_eq!(transport.posted_uris(), vec!["?/api/v2/add_section/1"]);
        assert_eq!(transport.last_body(), Some(json!({"name": "Checkout", "suite_id": 5})));
    }

    #[test]
    fn test_add_section_blank_name_makes_no_call() {
        let (client, transport) = client();
        let section = Section {
            name: Some("\t".into()),
            suite_id: Some(5),
            ..Default::default()
        };
        assert!(!client.add_section(1, &section, None).is_success());
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_delete_section_failure() {
        let (client, transport) = client();
        transport.respond(403, r#"{"error":"You are not allowed to delete sections."}"#);

        let result = client.delete_section(3);

        assert!(!result.is_success());
        assert_eq!(result.value(), "");
        assert_eq!(
            result.error().and_then(|e| e.server_message()).as_deref(),
            Some("You are not allowed to delete sections.")
        );
    }
}
