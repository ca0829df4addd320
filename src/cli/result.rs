//
//  testrail-cli
//  cli/result.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Result Commands
//!
//! ```bash
//! tr result list --run R81
//! tr result list --run R81 --case C10
//! tr result list --test T100
//! tr result add R81 C10 --status failed --comment "Times out" --elapsed 1m35s
//! ```

use anyhow::Result;
use clap::{ArgGroup, Args, Subcommand};

use crate::api::types::{ResultStatus, TestResult, Timespan};
use crate::output::{format_optional, format_status, truncate, TableRow};

use super::{format_date, parse_fields, parse_id, require, GlobalOptions};

/// View and record test results
#[derive(Args, Debug)]
pub struct ResultCommand {
    #[command(subcommand)]
    pub command: ResultSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ResultSubcommand {
    /// List results of a test, a case in a run, or a whole run
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Record a result for a case in a run
    Add(AddArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["run", "test"])))]
pub struct ListArgs {
    /// Run ID
    #[arg(long, short = 'r', value_parser = parse_id)]
    pub run: Option<u64>,

    /// Narrow a run to one case
    #[arg(long, short = 'c', value_parser = parse_id, requires = "run")]
    pub case: Option<u64>,

    /// Test ID
    #[arg(long, short = 't', value_parser = parse_id, conflicts_with = "run")]
    pub test: Option<u64>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Run ID
    #[arg(value_parser = parse_id)]
    pub run: u64,

    /// Case ID
    #[arg(value_parser = parse_id)]
    pub case: u64,

    /// Status name (passed, blocked, untested, retest, failed) or status ID
    #[arg(long, short = 's')]
    pub status: ResultStatus,

    /// Comment
    #[arg(long, short = 'm')]
    pub comment: Option<String>,

    /// Time spent, e.g. "1m 35s"
    #[arg(long, short = 'e')]
    pub elapsed: Option<Timespan>,

    /// Version or build tested (stored as the result's version)
    #[arg(long, value_name = "VERSION")]
    pub build: Option<String>,

    /// Comma-separated defect IDs
    #[arg(long)]
    pub defects: Option<String>,

    /// User ID to assign the test to
    #[arg(long)]
    pub assign: Option<u64>,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

impl TableRow for TestResult {
    fn headers() -> &'static [&'static str] {
        &["ID", "TEST", "STATUS", "ELAPSED", "CREATED", "COMMENT"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_optional(self.id),
            self.test_id.map_or_else(|| "-".to_string(), |id| format!("T{}", id)),
            format_status(self.status_id, color),
            format_optional(self.elapsed),
            format_date(self.created_on),
            truncate(self.comment.as_deref().unwrap_or("").lines().next().unwrap_or(""), 50),
        ]
    }
}

impl ResultCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ResultSubcommand::List(args) => self.list(args, global),
            ResultSubcommand::Add(args) => self.add(args, global),
        }
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let results = match (args.test, args.run, args.case) {
            (Some(test), _, _) => require(client.get_results(test), "list results")?,
            (None, Some(run), Some(case)) => {
                require(client.get_results_for_case(run, case), "list results")?
            }
            (None, Some(run), None) => require(client.get_results_for_run(run), "list results")?,
            (None, None, _) => anyhow::bail!("Pass --run or --test"),
        };
        global.writer().write_list(&results, "No results found.")
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let result = TestResult {
            status_id: Some(args.status),
            comment: args.comment.clone(),
            elapsed: args.elapsed,
            version: args.build.clone(),
            defects: args.defects.clone(),
            assignedto_id: args.assign,
            ..Default::default()
        };
        let custom = parse_fields(&args.fields)?;
        let id = require(
            client.add_result_for_case(args.run, args.case, &result, custom.as_ref()),
            "add result",
        )?;

        let writer = global.writer();
        if writer.is_json() {
            return crate::output::write_json(&serde_json::json!({ "id": id }));
        }
        writer.write_success(&format!(
            "Recorded {} for C{} in run R{}",
            format_status(Some(args.status), writer.color_enabled()),
            args.case,
            args.run
        ));
        Ok(())
    }
}
