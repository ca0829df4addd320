//
//  testrail-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # User Commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::types::User;
use crate::output::{format_bool, format_optional, print_field, TableOutput, TableRow};

use super::{found, parse_id, require, GlobalOptions};

/// Look up users
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// List users
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a user by ID or email address
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only users with access to this project (required for non-administrators)
    #[arg(long, short = 'p', value_parser = parse_id)]
    pub project: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// User ID or email address
    #[arg(value_name = "USER")]
    pub id_or_email: String,
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "EMAIL", "ROLE", "ACTIVE"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            format_optional(self.id),
            self.name.clone().unwrap_or_else(|| "-".to_string()),
            self.email.clone().unwrap_or_else(|| "-".to_string()),
            self.role.clone().unwrap_or_else(|| "-".to_string()),
            format_bool(self.is_active.unwrap_or(false), color),
        ]
    }
}

impl TableOutput for User {
    fn print_table(&self, color: bool) {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        if color {
            println!("{}", style(name).bold());
        } else {
            println!("{}", name);
        }
        println!();
        print_field("ID", self.id.map(|id| id.to_string()).as_deref(), color);
        print_field("Email", self.email.as_deref(), color);
        print_field("Role", self.role.as_deref(), color);
        print_field(
            "Active",
            Some(format_bool(self.is_active.unwrap_or(false), color).as_str()),
            color,
        );
    }
}

impl UserCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::List(args) => {
                let client = global.connect()?;
                let users = require(client.get_users(args.project), "list users")?;
                global.writer().write_list(&users, "No users found.")
            }
            UserSubcommand::View(args) => {
                let client = global.connect()?;
                let user = if args.id_or_email.contains('@') {
                    client.try_get_user_by_email(&args.id_or_email)
                } else {
                    let id = parse_id(&args.id_or_email).map_err(anyhow::Error::msg)?;
                    client.try_get_user(id)
                };
                let user = found(user, format!("User '{}'", args.id_or_email))?;
                global.writer().write(&user)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row() {
        let user = User {
            id: Some(1),
            name: Some("Alexis Gonzalez".into()),
            email: Some("alexis@example.com".into()),
            is_active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            user.row(false),
            vec!["1", "Alexis Gonzalez", "alexis@example.com", "-", "Yes"]
        );
    }

    #[test]
    fn test_parse_view_with_global_user() {
        use crate::cli::{Cli, Commands};
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "tr", "user", "view", "alexis@example.com", "-u", "qa@example.com",
        ])
        .unwrap();
        assert_eq!(cli.global.user.as_deref(), Some("qa@example.com"));
        let Commands::User(UserCommand {
            command: UserSubcommand::View(args),
        }) = cli.command
        else {
            panic!("expected user view");
        };
        assert_eq!(args.id_or_email, "alexis@example.com");
    }
}
