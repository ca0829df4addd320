//
//  testrail-cli
//  cli/case.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Case Commands
//!
//! ```bash
//! tr case list 1 --suite 3 --limit 50
//! tr case view C1203
//! tr case add 12 --title "Login with SSO" --estimate "2m 30s" -f custom_automated=true
//! tr case delete C1203 --yes
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::types::{Case, Timespan};
use crate::api::uri::QueryOptions;
use crate::output::{format_optional, print_field, truncate, TableOutput, TableRow};

use super::{format_date, found, parse_fields, parse_id, require, GlobalOptions};

/// Manage test cases
#[derive(Args, Debug)]
pub struct CaseCommand {
    #[command(subcommand)]
    pub command: CaseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CaseSubcommand {
    /// List cases of a project
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show case details, including custom fields
    View(ViewArgs),

    /// Create a case in a section
    #[command(visible_alias = "create")]
    Add(AddArgs),

    /// Delete a case
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Suite ID (required for multi-suite projects)
    #[arg(long, short = 's', value_parser = parse_id)]
    pub suite: Option<u64>,

    /// Only cases in this section
    #[arg(long, value_parser = parse_id)]
    pub section: Option<u64>,

    /// Maximum number of cases to return
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of cases to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Case ID (e.g. 1203 or C1203)
    #[arg(value_parser = parse_id)]
    pub case: u64,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Section ID to create the case in
    #[arg(value_parser = parse_id)]
    pub section: u64,

    /// Case title
    #[arg(long, short = 't')]
    pub title: String,

    /// Case type ID
    #[arg(long = "type")]
    pub type_id: Option<u64>,

    /// Priority ID
    #[arg(long, short = 'p')]
    pub priority: Option<u64>,

    /// Estimate, e.g. "1m 30s"
    #[arg(long, short = 'e')]
    pub estimate: Option<Timespan>,

    /// Milestone ID
    #[arg(long)]
    pub milestone: Option<u64>,

    /// Comma-separated references
    #[arg(long)]
    pub refs: Option<String>,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Case ID
    #[arg(value_parser = parse_id)]
    pub case: u64,

    /// Confirm deletion; this also deletes the case's results
    #[arg(long)]
    pub yes: bool,
}

impl TableRow for Case {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "SECTION", "PRIORITY", "ESTIMATE"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.map_or_else(|| "-".to_string(), |id| format!("C{}", id)),
            truncate(self.title.as_deref().unwrap_or("-"), 60),
            format_optional(self.section_id),
            format_optional(self.priority_id),
            format_optional(self.estimate),
        ]
    }
}

/// A case with its resolved priority level.
#[derive(Debug, serde::Serialize)]
struct CaseDetail {
    #[serde(flatten)]
    case: Case,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority_level: Option<u64>,
}

impl TableOutput for CaseDetail {
    fn print_table(&self, color: bool) {
        let case = &self.case;
        let title = case.title.as_deref().unwrap_or("(untitled)");
        let id = case.id.map(|id| format!("C{}", id)).unwrap_or_default();
        if color {
            println!("{} {}", style(id).dim(), style(title).bold());
        } else {
            println!("{} {}", id, title);
        }
        println!();
        print_field("Section", case.section_id.map(|id| id.to_string()).as_deref(), color);
        print_field("Suite", case.suite_id.map(|id| id.to_string()).as_deref(), color);
        print_field("Type", case.type_id.map(|id| id.to_string()).as_deref(), color);
        print_field(
            "Priority",
            case.priority_id
                .map(|id| match self.priority_level {
                    Some(level) => format!("{} (level {})", id, level),
                    None => id.to_string(),
                })
                .as_deref(),
            color,
        );
        print_field("Estimate", case.estimate.map(|e| e.to_string()).as_deref(), color);
        print_field("Forecast", case.estimate_forecast.map(|e| e.to_string()).as_deref(), color);
        print_field("Milestone", case.milestone_id.map(|id| id.to_string()).as_deref(), color);
        print_field("References", case.refs.as_deref(), color);
        print_field("Created", Some(format_date(case.created_on).as_str()), color);
        print_field("Updated", Some(format_date(case.updated_on).as_str()), color);

        let mut custom: Vec<_> = case
            .extra
            .iter()
            .filter(|(key, value)| key.starts_with("custom_") && !value.is_null())
            .collect();
        if custom.is_empty() {
            return;
        }
        custom.sort_by(|a, b| a.0.cmp(b.0));
        println!();
        for (key, value) in custom {
            let rendered = match value.as_str() {
                Some(text) => text.to_string(),
                None => value.to_string(),
            };
            print_field(key.trim_start_matches("custom_"), Some(truncate(&rendered, 200).as_str()), color);
        }
    }
}

impl CaseCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            CaseSubcommand::List(args) => self.list(args, global),
            CaseSubcommand::View(args) => self.view(args, global),
            CaseSubcommand::Add(args) => self.add(args, global),
            CaseSubcommand::Delete(args) => self.delete(args, global),
        }
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let query = QueryOptions::new()
            .optional("limit", args.limit)
            .optional("offset", args.offset);
        let page = require(
            client.get_cases_page(args.project, args.suite, args.section, query),
            "list cases",
        )?;

        let writer = global.writer();
        writer.write_list(&page.items, "No cases found.")?;
        if page.has_next() {
            writer.write_info(&format!(
                "More cases available; continue with --offset {}",
                page.offset + page.size
            ));
        }
        Ok(())
    }

    fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let case = found(client.try_get_case(args.case), format!("Case C{}", args.case))?;
        let priority_level = client.priority_level_for_case(&case);
        global.writer().write(&CaseDetail { case, priority_level })
    }

    fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.connect()?;
        let case = Case {
            title: Some(args.title.clone()),
            type_id: args.type_id,
            priority_id: args.priority,
            estimate: args.estimate,
            milestone_id: args.milestone,
            refs: args.refs.clone(),
            ..Default::default()
        };
        let custom = parse_fields(&args.fields)?;
        let id = require(client.add_case(args.section, &case, custom.as_ref()), "create case")?;

        let writer = global.writer();
        if writer.is_json() {
            return crate::output::write_json(&serde_json::json!({ "id": id }));
        }
        match id {
            Some(id) => writer.write_success(&format!("Created case C{} '{}'", id, args.title)),
            None => writer.write_success(&format!("Created case '{}'", args.title)),
        }
        Ok(())
    }

    fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.yes {
            bail!(
                "Deleting case C{} also deletes its results. Re-run with --yes to confirm.",
                args.case
            );
        }
        let client = global.connect()?;
        require(client.delete_case(args.case), "delete case")?;
        global.writer().write_success(&format!("Deleted case C{}", args.case));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> CaseSubcommand {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Case(cmd) => cmd.command,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_with_estimate() {
        let CaseSubcommand::Add(args) = parse(&[
            "tr", "case", "add", "12", "--title", "Login with SSO", "--estimate", "2m 30s", "--type", "3",
        ]) else {
            panic!("expected add");
        };
        assert_eq!(args.section, 12);
        assert_eq!(args.estimate, Some(Timespan::from_seconds(150)));
        assert_eq!(args.type_id, Some(3));
    }

    #[test]
    fn test_parse_bad_estimate() {
        assert!(Cli::try_parse_from(["tr", "case", "add", "12", "-t", "x", "-e", "5x"]).is_err());
    }

    #[test]
    fn test_parse_list_paging() {
        let CaseSubcommand::List(args) = parse(&["tr", "case", "list", "1", "-s", "S3", "-l", "50", "--offset", "100"]) else {
            panic!("expected list");
        };
        assert_eq!(args.suite, Some(3));
        assert_eq!(args.limit, Some(50));
        assert_eq!(args.offset, Some(100));
    }

    #[test]
    fn test_case_row() {
        let case = Case {
            id: Some(1203),
            title: Some("Login".into()),
            section_id: Some(12),
            estimate: Some(Timespan::from_seconds(90)),
            ..Default::default()
        };
        assert_eq!(case.row(false), vec!["C1203", "Login", "12", "-", "1m 30s"]);
    }

    #[test]
    fn test_case_detail_json_flattens_case() {
        let detail = CaseDetail {
            case: Case {
                id: Some(1),
                priority_id: Some(4),
                ..Default::default()
            },
            priority_level: Some(4),
        };
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            serde_json::json!({"id": 1, "priority_id": 4, "priority_level": 4})
        );
    }
}
