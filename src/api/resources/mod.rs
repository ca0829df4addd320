//
//  testrail-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource operations on [`TestRailClient`](crate::api::TestRailClient).
//!
//! Each submodule adds one `impl TestRailClient` block:
//!
//! - [`projects`]: projects
//! - [`suites`]: suites and sections
//! - [`cases`]: cases, case fields and case types
//! - [`milestones`]: milestones
//! - [`runs`]: runs and custom case selections
//! - [`plans`]: plans and plan entries
//! - [`results`]: tests and results
//! - [`users`]: users
//! - [`metadata`]: priorities, statuses and configurations

pub mod cases;
pub mod metadata;
pub mod milestones;
pub mod plans;
pub mod projects;
pub mod results;
pub mod runs;
pub mod suites;
pub mod users;
