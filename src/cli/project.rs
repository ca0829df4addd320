//
//  testrail-cli
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Project Commands
//!
//! ```bash
//! tr project list --active
//! tr project view 1
//! tr project add --name "Payments" --suite-mode multiple
//! tr project close 1
//! tr project delete 1 --yes
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use console::style;

use crate::api::types::{Project, SuiteMode};
use crate::output::{format_bool, format_optional, print_field, truncate, TableOutput, TableRow};

use super::{format_date, found, parse_fields, parse_id, require, GlobalOptions};

/// Manage projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show project details
    View(ViewArgs),

    /// Create a project
    #[command(visible_alias = "create")]
    Add(AddArgs),

    /// Mark a project as completed
    Close(ViewArgs),

    /// Delete a project and everything in it
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only completed projects
    #[arg(long, conflicts_with = "active")]
    pub completed: bool,

    /// Only active projects
    #[arg(long)]
    pub active: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project ID (e.g. 1 or P1)
    #[arg(value_parser = parse_id)]
    pub project: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SuiteModeArg {
    /// One implicit suite
    Single,
    /// One suite with baselines
    Baselines,
    /// Any number of suites
    Multiple,
}

impl From<SuiteModeArg> for SuiteMode {
    fn from(mode: SuiteModeArg) -> Self {
        match mode {
            SuiteModeArg::Single => SuiteMode::SingleSuite,
            SuiteModeArg::Baselines => SuiteMode::SingleSuiteBaselines,
            SuiteModeArg::Multiple => SuiteMode::MultipleSuites,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Announcement shown on the project overview
    #[arg(long, short = 'a')]
    pub announcement: Option<String>,

    /// Show the announcement
    #[arg(long)]
    pub show_announcement: bool,

    /// Suite mode
    #[arg(long, value_enum, default_value = "single")]
    pub suite_mode: SuiteModeArg,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Confirm deletion; this cannot be undone
    #[arg(long)]
    pub yes: bool,
}

impl TableRow for Project {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "SUITE MODE", "COMPLETED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_optional(self.id),
            truncate(self.name.as_deref().unwrap_or("-"), 40),
            format_optional(self.suite_mode),
            format_bool(self.is_completed.unwrap_or(false), color),
        ]
    }
}

impl TableOutput for Project {
    fn print_table(&self, color: bool) {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        if color {
            println!("{}", style(name).bold());
        } else {
            println!("{}", name);
        }
        println!();
        print_field("ID", self.id.map(|id| format!("P{}", id)).as_deref(), color);
        print_field("Suite mode", self.suite_mode.map(|m| m.to_string()).as_deref(), color);
        print_field(
            "Completed",
            Some(format_bool(self.is_completed.unwrap_or(false), color).as_str()),
            color,
        );
        if self.completed_on.is_some() {
            print_field("Completed on", Some(format_date(self.completed_on).as_str()), color);
        }
        print_field("Announcement", self.announcement.as_deref(), color);
        print_field("URL", self.url.as_deref(), color);
    }
}

impl ProjectCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List(args) => self.list(args, global),
            ProjectSubcommand::View(args) => self.view(args, global),
            ProjectSubcommand::Add(args) => self.add(args, global),
            ProjectSubcommand::Close(args) => self.close(args, global),
            ProjectSubcommand::Delete(args) => self.delete(args, global),
        }
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let filter = match (args.completed, args.active) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let projects = require(client.get_projects(filter), "list projects")?;
        global.writer().write_list(&projects, "No projects found.")
    }

    fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let project = found(client.try_get_project(args.project), format!("Project P{}", args.project))?;
        global.writer().write(&project)
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let project = Project {
            name: Some(args.name.clone()),
            announcement: args.announcement.clone(),
            show_announcement: args.show_announcement.then_some(true),
            suite_mode: Some(args.suite_mode.into()),
            ..Default::default()
        };
        let custom = parse_fields(&args.fields)?;
        let id = require(client.add_project(&project, custom.as_ref()), "create project")?;

        let writer = global.writer();
        if writer.is_json() {
            return crate::output::write_json(&serde_json::json!({ "id": id }));
        }
        match id {
            Some(id) => writer.write_success(&format!("Created project P{} '{}'", id, args.name)),
            None => writer.write_success(&format!("Created project '{}'", args.name)),
        }
        Ok(())
    }

    fn close(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let update = Project {
            is_completed: Some(true),
            ..Default::default()
        };
        require(client.update_project(args.project, &update, None), "close project")?;
        global
            .writer()
            .write_success(&format!("Marked project P{} as completed", args.project));
        Ok(())
    }

    fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.yes {
            bail!(
                "Deleting project P{} removes all of its suites, cases, runs and results. Re-run with --yes to confirm.",
                args.project
            );
        }
        let client = global.connect()?;
        require(client.delete_project(args.project), "delete project")?;
        global
            .writer()
            .write_success(&format!("Deleted project P{}", args.project));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> ProjectSubcommand {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Project(cmd) => cmd.command,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_add() {
        let ProjectSubcommand::Add(args) = parse(&[
            "tr", "project", "add", "--name", "Payments", "--suite-mode", "multiple", "-f", "custom_x=1",
        ]) else {
            panic!("expected add");
        };
        assert_eq!(args.name, "Payments");
        assert_eq!(SuiteMode::from(args.suite_mode), SuiteMode::MultipleSuites);
        assert_eq!(args.fields, vec!["custom_x=1"]);
    }

    #[test]
    fn test_list_filters_conflict() {
        assert!(Cli::try_parse_from(["tr", "project", "list", "--completed", "--active"]).is_err());
    }

    #[test]
    fn test_view_accepts_prefixed_id() {
        let ProjectSubcommand::View(args) = parse(&["tr", "project", "view", "P12"]) else {
            panic!("expected view");
        };
        assert_eq!(args.project, 12);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let cmd = ProjectCommand {
            command: ProjectSubcommand::Delete(DeleteArgs {
                project: 1,
                yes: false,
            }),
        };
        let err = cmd.run(&GlobalOptions::default()).unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }

    #[test]
    fn test_project_row() {
        let project = Project {
            id: Some(1),
            name: Some("Payments".into()),
            suite_mode: Some(SuiteMode::SingleSuite),
            ..Default::default()
        };
        assert_eq!(
            project.row(false),
            vec!["1", "Payments", "single suite", "No"]
        );
    }
}
