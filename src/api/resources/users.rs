//
//  testrail-cli
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User lookups.

use crate::api::client::{require_text, TestRailClient};
use crate::api::common::{ApiError, RequestResult};
use crate::api::types::User;
use crate::api::uri::QueryOptions;

impl TestRailClient {
    pub fn get_user(&self, user_id: u64) -> Option<User> {
        self.fetch_one("user", Some(user_id), QueryOptions::new())
    }

    /// Like [`get_user`](Self::get_user), keeping the failure.
    pub fn try_get_user(&self, user_id: u64) -> Result<User, ApiError> {
        self.fetch_record("user", Some(user_id), QueryOptions::new())
    }

    /// Looks a user up by email address. A blank email returns `None`
    /// without a request.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        if let Err(e) = require_text(Some(email), "email") {
            tracing::debug!("{}", e);
            return None;
        }
        self.fetch_one(
            "user_by_email",
            None,
            QueryOptions::new().param("email", email.trim()),
        )
    }

    /// Like [`get_user_by_email`](Self::get_user_by_email), keeping the
    /// failure. A blank address is an [`ApiError::InvalidArgument`].
    pub fn try_get_user_by_email(&self, email: &str) -> Result<User, ApiError> {
        require_text(Some(email), "email")?;
        self.fetch_record(
            "user_by_email",
            None,
            QueryOptions::new().param("email", email.trim()),
        )
    }

    /// Lists users. Non-administrators must pass a `project_id`.
    pub fn get_users(&self, project_id: Option<u64>) -> RequestResult<Vec<User>> {
        self.fetch_list("users", project_id, QueryOptions::new(), "users")
    }
}
