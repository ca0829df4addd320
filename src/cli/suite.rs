//
//  testrail-cli
//  cli/suite.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Suite Commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::types::Suite;
use crate::output::{format_bool, format_optional, print_field, truncate, TableOutput, TableRow};

use super::{found, parse_fields, parse_id, require, GlobalOptions};

/// Manage test suites
#[derive(Args, Debug)]
pub struct SuiteCommand {
    #[command(subcommand)]
    pub command: SuiteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SuiteSubcommand {
    /// List the suites of a project
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show suite details
    View(ViewArgs),

    /// Create a suite
    #[command(visible_alias = "create")]
    Add(AddArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Suite ID (e.g. 3 or S3)
    #[arg(value_parser = parse_id)]
    pub suite: u64,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Suite name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Suite description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

impl TableRow for Suite {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "MASTER", "COMPLETED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_optional(self.id),
            truncate(self.name.as_deref().unwrap_or("-"), 50),
            format_bool(self.is_master.unwrap_or(false), color),
            format_bool(self.is_completed.unwrap_or(false), color),
        ]
    }
}

impl TableOutput for Suite {
    fn print_table(&self, color: bool) {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        if color {
            println!("{}", style(name).bold());
        } else {
            println!("{}", name);
        }
        println!();
        print_field("ID", self.id.map(|id| format!("S{}", id)).as_deref(), color);
        print_field("Project", self.project_id.map(|id| format!("P{}", id)).as_deref(), color);
        if self.is_baseline == Some(true) {
            print_field("Baseline", Some("Yes"), color);
        }
        print_field("Description", self.description.as_deref(), color);
        print_field("URL", self.url.as_deref(), color);
    }
}

impl SuiteCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SuiteSubcommand::List(args) => {
                let client = global.connect()?;
                let suites = require(client.get_suites(args.project), "list suites")?;
                global.writer().write_list(&suites, "No suites found.")
            }
            SuiteSubcommand::View(args) => {
                let client = global.connect()?;
                let suite = found(client.try_get_suite(args.suite), format!("Suite S{}", args.suite))?;
                global.writer().write(&suite)
            }
            SuiteSubcommand::Add(args) => self.add(args, global),
        }
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let suite = Suite {
            name: Some(args.name.clone()),
            description: args.description.clone(),
            ..Default::default()
        };
        let custom = parse_fields(&args.fields)?;
        let id = require(client.add_suite(args.project, &suite, custom.as_ref()), "create suite")?;

        let writer = global.writer();
        if writer.is_json() {
            return crate::output::write_json(&serde_json::json!({ "id": id }));
        }
        writer.write_success(&format!(
            "Created suite {}'{}' in project P{}",
            id.map(|id| format!("S{} ", id)).unwrap_or_default(),
            args.name,
            args.project
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["tr", "suite", "add", "1", "-n", "Regression", "-d", "Full pass"]).unwrap();
        let Commands::Suite(SuiteCommand {
            command: SuiteSubcommand::Add(args),
        }) = cli.command
        else {
            panic!("expected suite add");
        };
        assert_eq!(args.project, 1);
        assert_eq!(args.name, "Regression");
        assert_eq!(args.description.as_deref(), Some("Full pass"));
    }

    #[test]
    fn test_add_requires_name() {
        assert!(Cli::try_parse_from(["tr", "suite", "add", "1"]).is_err());
    }
}
