//
//  testrail-cli
//  cli/section.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Section Commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::types::Section;
use crate::output::{format_optional, truncate, TableRow};

use super::{parse_fields, parse_id, require, GlobalOptions};

/// Manage sections
#[derive(Args, Debug)]
pub struct SectionCommand {
    #[command(subcommand)]
    pub command: SectionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SectionSubcommand {
    /// List the sections of a project or suite
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Create a section
    #[command(visible_alias = "create")]
    Add(AddArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Suite ID (required for multi-suite projects)
    #[arg(long, short = 's', value_parser = parse_id)]
    pub suite: Option<u64>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project ID
    #[arg(value_parser = parse_id)]
    pub project: u64,

    /// Section name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Suite ID (required for multi-suite projects)
    #[arg(long, short = 's', value_parser = parse_id)]
    pub suite: Option<u64>,

    /// Parent section ID
    #[arg(long, value_parser = parse_id)]
    pub parent: Option<u64>,

    /// Section description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Extra field as key=value (repeatable)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

impl TableRow for Section {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PARENT", "SUITE"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        let indent = "  ".repeat(self.depth.unwrap_or(0) as usize);
        vec![
            format_optional(self.id),
            format!("{}{}", indent, truncate(self.name.as_deref().unwrap_or("-"), 50)),
            format_optional(self.parent_id),
            format_optional(self.suite_id),
        ]
    }
}

impl SectionCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SectionSubcommand::List(args) => {
                let client = global.connect()?;
                let sections = require(client.get_sections(args.project, args.suite), "list sections")?;
                global.writer().write_list(&sections, "No sections found.")
            }
            SectionSubcommand::Add(args) => {
                let client = global.connect()?;
                let section = Section {
                    name: Some(args.name.clone()),
                    suite_id: args.suite,
                    parent_id: args.parent,
                    description: args.description.clone(),
                    ..Default::default()
                };
                let custom = parse_fields(&args.fields)?;
                let id = require(
                    client.add_section(args.project, &section, custom.as_ref()),
                    "create section",
                )?;

                let writer = global.writer();
                if writer.is_json() {
                    return crate::output::write_json(&serde_json::json!({ "id": id }));
                }
                writer.write_success(&format!("Created section '{}' ({})", args.name, format_optional(id)));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_row_indents_by_depth() {
        let section = Section {
            id: Some(5),
            name: Some("Checkout".into()),
            depth: Some(2),
            parent_id: Some(4),
            suite_id: Some(1),
            ..Default::default()
        };
        assert_eq!(section.row(false), vec!["5", "    Checkout", "4", "1"]);
    }
}
