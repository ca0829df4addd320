//
//  testrail-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use testrail_cli::api::ApiError;
use testrail_cli::cli::{Cli, Commands, NotFound};
use testrail_cli::exit_codes;

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli);

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("TR_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Project(cmd) => cmd.run(&cli.global),
        Commands::Suite(cmd) => cmd.run(&cli.global),
        Commands::Section(cmd) => cmd.run(&cli.global),
        Commands::Case(cmd) => cmd.run(&cli.global),
        Commands::Run(cmd) => cmd.run(&cli.global),
        Commands::Plan(cmd) => cmd.run(&cli.global),
        Commands::Result(cmd) => cmd.run(&cli.global),
        Commands::User(cmd) => cmd.run(&cli.global),
        Commands::Priority(cmd) => cmd.run(&cli.global),
        Commands::Config(cmd) => cmd.run(&cli.global),
        Commands::Version => {
            println!("{} version {}", testrail_cli::APP_NAME, testrail_cli::VERSION);
            Ok(())
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<NotFound>().is_some() {
        return exit_codes::NOT_FOUND;
    }
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::Http { status: 401 | 403, .. }) => exit_codes::AUTH_ERROR,
        Some(ApiError::Http { status: 429, .. }) => exit_codes::RATE_LIMIT,
        Some(e) if e.is_not_found() => exit_codes::NOT_FOUND,
        Some(e) if e.is_local() => exit_codes::USAGE,
        _ => exit_codes::ERROR,
    }
}
