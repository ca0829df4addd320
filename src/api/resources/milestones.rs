//
//  testrail-cli
//  api/resources/milestones.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Milestone operations.

use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{JsonObject, RequestResult};
use crate::api::types::Milestone;
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    /// Fetches a milestone with its sub-milestones.
    pub fn get_milestone(&self, milestone_id: u64) -> Option<Milestone> {
        self.fetch_one("milestone", Some(milestone_id), QueryOptions::new())
    }

    pub fn get_milestones(&self, project_id: u64) -> RequestResult<Vec<Milestone>> {
        self.fetch_list("milestones", Some(project_id), QueryOptions::new(), "milestones")
    }

    /// Creates a milestone. `milestone.name` is required; set `parent_id`
    /// to create a sub-milestone.
    pub fn add_milestone(
        &self,
        project_id: u64,
        milestone: &Milestone,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(milestone.name.as_deref(), "milestone name") {
            return RequestResult::failure(e);
        }
        self.write_record(CommandAction::Add, "milestone", Some(project_id), milestone, custom)
    }

    pub fn update_milestone(
        &self,
        milestone_id: u64,
        milestone: &Milestone,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if milestone.name.is_some() {
            if let Err(e) = require_text(milestone.name.as_deref(), "milestone name") {
                return RequestResult::failure(e);
            }
        }
        self.write_record(
            CommandAction::Update,
            "milestone",
            Some(milestone_id),
            milestone,
            custom,
        )
    }

    pub fn delete_milestone(&self, milestone_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "milestone", milestone_id, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::client;
    use crate::api::types::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_get_milestone_with_children() {
        let (client, transport) = client();
        transport.respond(
            200,
            r#"{"id":1,"name":"Release 1.5","project_id":1,"due_on":1391968184,"is_completed":false,
                "milestones":[{"id":2,"name":"Beta","parent_id":1}]}"#,
        );

        let milestone = client.get_milestone(1).unwrap();

        assert_eq!(milestone.due_on, Utc.timestamp_opt(1_391_968_184, 0).single());
        assert_eq!(milestone.milestones.map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_add_milestone_requires_name() {
        let (client, transport) = client();
        assert!(!client.add_milestone(1, &Milestone::default(), None).is_success());
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_add_milestone_sends_timestamps() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":3}"#);

        let milestone = Milestone {
            name: Some("Release 2.0".into()),
            due_on: Utc.timestamp_opt(1_700_000_000, 0).single(),
            ..Default::default()
        };
        let result = client.add_milestone(1, &milestone, None);

        assert_eq!(result.into_result(), Ok(Some(3)));
        assert_eq!(
            transport.last_body(),
            Some(json!({"name": "Release 2.0", "due_on": 1_700_000_000}))
        );
    }

    #[test]
    fn test_update_and_delete_milestone() {
        let (client, transport) = client();
        transport.respond(200, r#"{"id":3,"is_completed":true}"#);
        transport.respond(200, "");

        let update = Milestone {
            is_completed: Some(true),
            ..Default::default()
        };
        assert!(client.update_milestone(3, &update, None).is_success());
        assert!(client.delete_milestone(3).is_success());
        assert_eq!(
            transport.posted_uris(),
            vec!["?/api/v2/update_milestone/3", "?/api/v2/delete_milestone/3"]
        );
    }
}
