//
//  testrail-cli
//  api/resources/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project operations.

use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{ApiError, JsonObject, Page, RequestResult};
use crate::api::types::Project;
use crate::api::uri::{CommandAction, QueryOptions};

impl TestRailClient {
    /// Fetches one project. `None` if it does not exist or the call failed.
    pub fn get_project(&self, project_id: u64) -> Option<Project> {
        self.fetch_one("project", Some(project_id), QueryOptions::new())
    }

    /// Like [`get_project`](Self::get_project), keeping the failure.
    pub fn try_get_project(&self, project_id: u64) -> Result<Project, ApiError> {
        self.fetch_record("project", Some(project_id), QueryOptions::new())
    }

    /// Lists projects, optionally filtered by completion.
    ///
    /// Returns the first page. Use [`get_projects_page`](Self::get_projects_page)
    /// to walk large instances.
    pub fn get_projects(&self, is_completed: Option<bool>) -> RequestResult<Vec<Project>> {
        self.fetch_list(
            "projects",
            None,
            QueryOptions::new().flag("is_completed", is_completed),
            "projects",
        )
    }

    /// Lists one page of projects.
    ///
    /// ```rust,no_run
    /// use testrail_cli::api::uri::QueryOptions;
    /// # fn demo(client: &testrail_cli::api::TestRailClient) {
    /// let page = client.get_projects_page(QueryOptions::new().param("limit", 50).param("offset", 100));
    /// for project in &page.value().items {
    ///     println!("{:?}", project.name);
    /// }
    /// # }
    /// ```
    pub fn get_projects_page(&self, query: QueryOptions) -> RequestResult<Page<Project>> {
        self.fetch_page("projects", None, query, "projects")
    }

    /// Creates a project. `project.name` is required.
    pub fn add_project(
        &self,
        project: &Project,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if let Err(e) = require_text(project.name.as_deref(), "project name") {
            return RequestResult::failure(e);
        }
        self.write_record(CommandAction::Add, "project", None, project, custom)
    }

    /// Updates the fields set on `project`. A name, if given, must not be blank.
    pub fn update_project(
        &self,
        project_id: u64,
        project: &Project,
        custom: Option<&JsonObject>,
    ) -> RequestResult<Option<u64>> {
        if project.name.is_some() {
            if let Err(e) = require_text(project.name.as_deref(), "project name") {
                return RequestResult::failure(e);
            }
        }
        self.write_record(CommandAction::Update, "project", Some(project_id), project, custom)
    }

    /// Deletes a project and everything in it.
    pub fn delete_project(&self, project_id: u64) -> RequestResult<String> {
        self.send_command(CommandAction::Delete, "project", project_id, None)
    }
}
