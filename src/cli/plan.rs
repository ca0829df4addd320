//
//  testrail-cli
//  cli/plan.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Plan Commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::types::Plan;
use crate::output::{format_bool, format_optional, print_field, truncate, TableBuilder, TableOutput, TableRow};

use super::{format_date, found, parse_fields, parse_id, require, GlobalOptions};

/// Manage test plans
#[derive(Args, Debug)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlanSubcommand {
    /// List plans of a project
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a plan with its entries and runs
    View(PlanArgs),

    /// Create an empty plan
    #[command(visible_alias = "create")]
    Add(AddArgs),

    /// Close a plan and all of its runs
    Close(PlanArgs),

    /// Delete a plan
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Plan ID
    #[arg(value_parser = parse_id)]
    pub plan: u64,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Plan name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Plan description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Milestone ID
    #[arg(long, value_parser = parse_id)]
    pub milestone: Option<u64>,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Plan ID
    #[arg(value_parser = parse_id)]
    pub plan: u64,

    /// Confirm deletion; this also deletes every run in the plan
    #[arg(long)]
    pub yes: bool,
}

impl TableRow for Plan {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PASSED", "FAILED", "UNTESTED", "COMPLETED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_optional(self.id),
            truncate(self.name.as_deref().unwrap_or("-"), 40),
            format_optional(self.passed_count),
            format_optional(self.failed_count),
            format_optional(self.untested_count),
            format_bool(self.is_completed.unwrap_or(false), color),
        ]
    }
}

impl TableOutput for Plan {
    fn print_table(&self, color: bool) {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        if color {
            println!("{}", style(name).bold());
        } else {
            println!("{}", name);
        }
        println!();
        print_field("ID", self.id.map(|id| id.to_string()).as_deref(), color);
        print_field("Project", self.project_id.map(|id| format!("P{}", id)).as_deref(), color);
        print_field("Milestone", self.milestone_id.map(|id| id.to_string()).as_deref(), color);
        print_field("Created", Some(format_date(self.created_on).as_str()), color);
        if self.is_completed == Some(true) {
            print_field("Completed", Some(format_date(self.completed_on).as_str()), color);
        }
        print_field("Description", self.description.as_deref(), color);
        print_field("URL", self.url.as_deref(), color);

        let runs: Vec<_> = self.runs().collect();
        if runs.is_empty() {
            return;
        }
        println!();
        TableBuilder::new()
            .color(color)
            .headers(["RUN", "NAME", "CONFIGURATION", "PASSED", "FAILED", "TOTAL"])
            .rows(runs.into_iter().map(|run| {
                vec![
                    run.id.map_or_else(|| "-".to_string(), |id| format!("R{}", id)),
                    truncate(run.name.as_deref().unwrap_or("-"), 40),
                    run.config.clone().unwrap_or_else(|| "-".to_string()),
                    format_optional(run.passed_count),
                    format_optional(run.failed_count),
                    run.total_count().to_string(),
                ]
            }))
            .print();
    }
}

impl PlanCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PlanSubcommand::List(args) => {
                let client = global.connect()?;
                let plans = require(client.get_plans(args.project), "list plans")?;
                global.writer().write_list(&plans, "No plans found.")
            }
            PlanSubcommand::View(args) => {
                let client = global.connect()?;
                let plan = found(client.try_get_plan(args.plan), format!("Plan {}", args.plan))?;
                global.writer().write(&plan)
            }
            PlanSubcommand::Add(args) => self.add(args, global),
            PlanSubcommand::Close(args) => {
                let client = global.connect()?;
                require(client.close_plan(args.plan), "close plan")?;
                global.writer().write_success(&format!("Closed plan {}", args.plan));
                Ok(())
            }
            PlanSubcommand::Delete(args) => {
                if !args.yes {
                    bail!(
                        "Deleting plan {} also deletes its runs and results. Re-run with --yes to confirm.",
                        args.plan
                    );
                }
                let client = global.connect()?;
                require(client.delete_plan(args.plan), "delete plan")?;
                global.writer().write_success(&format!("Deleted plan {}", args.plan));
                Ok(())
            }
        }
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let plan = Plan {
            name: Some(args.name.clone()),
            description: args.description.clone(),
            milestone_id: args.milestone,
            ..Default::default()
        };
        let custom = parse_fields(&args.fields)?;
        let id = require(client.add_plan(args.project, &plan, custom.as_ref()), "create plan")?;

        let writer = global.writer();
        if writer.is_json() {
            return crate::output::write_json(&serde_json::json!({ "id": id }));
        }
        writer.write_success(&format!("Created plan '{}' ({})", args.name, format_optional(id)));
        Ok(())
    }
}
