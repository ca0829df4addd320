//
//  testrail-cli
//  cli/run.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Run Commands
//!
//! ```bash
//! tr run list 1
//! tr run view R81
//! tr run add 1 --name "Nightly" --suite 3 --cases C10,C11,C12
//! tr run close R81
//! tr run delete R81 --yes
//! ```
//!
//! When `--cases` is given the run includes only those cases; the client
//! checks that at least one of them exists in the suite before creating the
//! run.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::types::Run;
use crate::api::uri::QueryOptions;
use crate::output::{format_bool, format_optional, print_field, truncate, TableOutput, TableRow};

use super::{format_date, found, parse_fields, parse_id, require, GlobalOptions};

/// Manage test runs
#[derive(Args, Debug)]
pub struct RunCommand {
    #[command(subcommand)]
    pub command: RunSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RunSubcommand {
    /// List runs of a project
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show run details and status counts
    View(RunArgs),

    /// Start a new run
    #[command(visible_alias = "create")]
    Add(AddArgs),

    /// Close a run, archiving its tests and results
    Close(RunArgs),

    /// Delete a run
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Only completed runs
    #[arg(long, conflicts_with = "active")]
    pub completed: bool,

    /// Only active runs
    #[arg(long)]
    pub active: bool,

    /// Maximum number of runs to return
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of runs to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run ID (e.g. 81 or R81)
    #[arg(value_parser = parse_id)]
    pub run: u64,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Run name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Suite ID (required for multi-suite projects)
    #[arg(long, short = 's', value_parser = parse_id)]
    pub suite: Option<u64>,

    /// Only include these cases (comma-separated)
    #[arg(long, short = 'c', value_delimiter = ',', value_parser = parse_id)]
    pub cases: Vec<u64>,

    /// Run description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Milestone ID
    #[arg(long, value_parser = parse_id)]
    pub milestone: Option<u64>,

    /// User ID to assign the run to
    #[arg(long)]
    pub assign: Option<u64>,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Run ID
    #[arg(value_parser = parse_id)]
    pub run: u64,

    /// Confirm deletion; this also deletes the run's results
    #[arg(long)]
    pub yes: bool,
}

impl TableRow for Run {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PASSED", "FAILED", "UNTESTED", "TOTAL", "COMPLETED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.map_or_else(|| "-".to_string(), |id| format!("R{}", id)),
            truncate(self.name.as_deref().unwrap_or("-"), 40),
            format_optional(self.passed_count),
            format_optional(self.failed_count),
            format_optional(self.untested_count),
            self.total_count().to_string(),
            format_bool(self.is_completed.unwrap_or(false), color),
        ]
    }
}

impl TableOutput for Run {
    fn print_table(&self, color: bool) {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        let id = self.id.map(|id| format!("R{}", id)).unwrap_or_default();
        if color {
            println!("{} {}", style(id).dim(), style(name).bold());
        } else {
            println!("{} {}", id, name);
        }
        println!();
        print_field("Project", self.project_id.map(|id| format!("P{}", id)).as_deref(), color);
        print_field("Suite", self.suite_id.map(|id| format!("S{}", id)).as_deref(), color);
        print_field("Plan", self.plan_id.map(|id| id.to_string()).as_deref(), color);
        print_field("Milestone", self.milestone_id.map(|id| id.to_string()).as_deref(), color);
        print_field("Configuration", self.config.as_deref(), color);
        print_field(
            "Cases",
            Some(if self.include_all == Some(false) { "custom selection" } else { "all" }),
            color,
        );
        print_field("Created", Some(format_date(self.created_on).as_str()), color);
        if self.is_completed == Some(true) {
            print_field("Completed", Some(format_date(self.completed_on).as_str()), color);
        }
        print_field("Description", self.description.as_deref(), color);
        print_field("URL", self.url.as_deref(), color);

        println!();
        let counts = [
            ("Passed", self.passed_count),
            ("Failed", self.failed_count),
            ("Blocked", self.blocked_count),
            ("Retest", self.retest_count),
            ("Untested", self.untested_count),
        ];
        for (label, count) in counts {
            print_field(label, Some(format_optional(count).as_str()), color);
        }
        print_field("Total", Some(self.total_count().to_string().as_str()), color);
    }
}

impl RunCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RunSubcommand::List(args) => self.list(args, global),
            RunSubcommand::View(args) => {
                let client = global.connect()?;
                let run = found(client.try_get_run(args.run), format!("Run R{}", args.run))?;
                global.writer().write(&run)
            }
            RunSubcommand::Add(args) => self.add(args, global),
            RunSubcommand::Close(args) => {
                let client = global.connect()?;
                require(client.close_run(args.run), "close run")?;
                global.writer().write_success(&format!("Closed run R{}", args.run));
                Ok(())
            }
            RunSubcommand::Delete(args) => {
                if !args.yes {
                    bail!(
                        "Deleting run R{} also deletes its results. Re-run with --yes to confirm.",
                        args.run
                    );
                }
                let client = global.connect()?;
                require(client.delete_run(args.run), "delete run")?;
                global.writer().write_success(&format!("Deleted run R{}", args.run));
                Ok(())
            }
        }
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let completed = match (args.completed, args.active) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let query = QueryOptions::new()
            .flag("is_completed", completed)
            .optional("limit", args.limit)
            .optional("offset", args.offset);
        let page = require(client.get_runs_page(args.project, query), "list runs")?;

        let writer = global.writer();
        writer.write_list(&page.items, "No runs found.")?;
        if page.has_next() {
            writer.write_info(&format!(
                "More runs available; continue with --offset {}",
                page.offset + page.size
            ));
        }
        Ok(())
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let run = Run {
            name: Some(args.name.clone()),
            suite_id: args.suite,
            description: args.description.clone(),
            milestone_id: args.milestone,
            assignedto_id: args.assign,
            case_ids: (!args.cases.is_empty()).then(|| args.cases.clone()),
            ..Default::default()
        };
        let custom = parse_fields(&args.fields)?;
        let id = require(client.add_run(args.project, &run, custom.as_ref()), "create run")?;

        let writer = global.writer();
        if writer.is_json() {
            return crate::output::write_json(&serde_json::json!({ "id": id }));
        }
        let scope = if args.cases.is_empty() {
            "all cases".to_string()
        } else {
            format!("{} selected cases", args.cases.len())
        };
        match id {
            Some(id) => writer.write_success(&format!("Created run R{} '{}' with {}", id, args.name, scope)),
            None => writer.write_success(&format!("Created run '{}' with {}", args.name, scope)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> RunSubcommand {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Run(cmd) => cmd.command,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_with_case_list() {
        let RunSubcommand::Add(args) = parse(&[
            "tr", "run", "add", "1", "--name", "Nightly", "--suite", "3", "--cases", "C10,C11,12",
        ]) else {
            panic!("expected add");
        };
        assert_eq!(args.cases, vec![10, 11, 12]);
        assert_eq!(args.suite, Some(3));
    }

    #[test]
    fn test_parse_add_rejects_bad_case_id() {
        assert!(Cli::try_parse_from(["tr", "run", "add", "1", "-n", "x", "-c", "C10,abc"]).is_err());
    }

    #[test]
    fn test_parse_close_with_prefix() {
        let RunSubcommand::Close(args) = parse(&["tr", "run", "close", "R81"]) else {
            panic!("expected close");
        };
        assert_eq!(args.run, 81);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let cmd = RunCommand {
            command: RunSubcommand::Delete(DeleteArgs { run: 81, yes: false }),
        };
        assert!(cmd.run(&GlobalOptions::default()).is_err());
    }

    #[test]
    fn test_run_row_totals() {
        let run = Run {
            id: Some(81),
            name: Some("Nightly".into()),
            passed_count: Some(8),
            failed_count: Some(1),
            untested_count: Some(3),
            ..Default::default()
        };
        assert_eq!(run.row(false), vec!["R81", "Nightly", "8", "1", "3", "12", "No"]);
    }
}
