//
//  testrail-cli
//  api/resources/metadata.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Priorities, statuses and configurations.

use crate::api::client::TestRailClient;
use crate::api::common::RequestResult;
use crate::api::types::{ConfigurationGroup, Priority, Status};
use crate::api::uri::QueryOptions;

impl TestRailClient {
    /// Lists the case priorities. Uncached; see
    /// [`priority_levels`](Self::priority_levels) for the cached id-to-level map.
    pub fn get_priorities(&self) -> RequestResult<Vec<Priority>> {
        self.fetch_list("priorities", None, QueryOptions::new(), "priorities")
    }

    /// Lists the built-in and custom statuses.
    pub fn get_statuses(&self) -> RequestResult<Vec<Status>> {
        self.fetch_list("statuses", None, QueryOptions::new(), "statuses")
    }

    /// Lists the configuration groups of a project with their configurations.
    pub fn get_configs(&self, project_id: u64) -> RequestResult<Vec<ConfigurationGroup>> {
        self.fetch_list("configs", Some(project_id), QueryOptions::new(), "configs")
    }
}
