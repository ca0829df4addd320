//
//  testrail-cli
//  cli/priority.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Priority Commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::types::Priority;
use crate::output::{format_bool, format_optional, TableRow};

use super::{found, parse_id, require, GlobalOptions};

/// Inspect case priorities
#[derive(Args, Debug)]
pub struct PriorityCommand {
    #[command(subcommand)]
    pub command: PrioritySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PrioritySubcommand {
    /// List priorities
    #[command(visible_alias = "ls")]
    List,

    /// Print the priority level of a case
    Case(CaseArgs),
}

#[derive(Args, Debug)]
pub struct CaseArgs {
    /// Case ID (e.g. C1203)
    #[arg(value_parser = parse_id)]
    pub case: u64,
}

impl TableRow for Priority {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "SHORT NAME", "LEVEL", "DEFAULT"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_optional(self.id),
            self.name.clone().unwrap_or_else(|| "-".to_string()),
            self.short_name.clone().unwrap_or_else(|| "-".to_string()),
            format_optional(self.priority),
            format_bool(self.is_default.unwrap_or(false), color),
        ]
    }
}

impl PriorityCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PrioritySubcommand::List => {
                let client = global.connect()?;
                let mut priorities = require(client.get_priorities(), "list priorities")?;
                priorities.sort_by_key(|p| p.priority);
                global.writer().write_list(&priorities, "No priorities found.")
            }
            PrioritySubcommand::Case(args) => {
                let client = global.connect()?;
                let case = found(client.try_get_case(args.case), format!("Case C{}", args.case))?;
                let level = client.priority_level_for_case(&case);

                let writer = global.writer();
                if writer.is_json() {
                    return crate::output::write_json(&serde_json::json!({
                        "case_id": args.case,
                        "priority_id": case.priority_id,
                        "priority_level": level,
                    }));
                }
                match level {
                    Some(level) => println!("{}", level),
                    None => writer.write_warning(&format!("Case C{} has no known priority level", args.case)),
                }
                Ok(())
            }
        }
    }
}
