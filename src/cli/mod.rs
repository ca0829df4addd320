//
//  testrail-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod case;
mod config;
mod plan;
mod priority;
mod project;
mod result;
mod run;
mod section;
mod suite;
mod user;

pub use case::CaseCommand;
pub use config::ConfigCommand;
pub use plan::PlanCommand;
pub use priority::PriorityCommand;
pub use project::ProjectCommand;
pub use result::ResultCommand;
pub use run::RunCommand;
pub use section::SectionCommand;
pub use suite::SuiteCommand;
pub use user::UserCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::api::common::{ApiError, JsonObject, RequestResult};
use crate::api::TestRailClient;
use crate::auth::AuthCredential;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// TestRail CLI - Work with TestRail from the command line
#[derive(Parser, Debug)]
#[command(
    name = "tr",
    version,
    about = "Work with TestRail from the command line",
    long_about = "tr is a CLI for the TestRail API v2.\n\n\
                  It brings projects, cases, runs, plans and results to your terminal.",
    propagate_version = true,
    after_help = "Use 'tr <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// TestRail base URL, e.g. https://example.testrail.io
    #[arg(long, global = true, env = "TESTRAIL_URL")]
    pub url: Option<String>,

    /// Login email address
    #[arg(long, short = 'u', global = true, env = "TESTRAIL_USER")]
    pub user: Option<String>,

    /// Account password
    #[arg(long, global = true, env = "TESTRAIL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API key (takes precedence over --password)
    #[arg(long, global = true, env = "TESTRAIL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Manage test suites
    Suite(SuiteCommand),

    /// Manage sections
    Section(SectionCommand),

    /// Manage test cases
    Case(CaseCommand),

    /// Manage test runs
    Run(RunCommand),

    /// Manage test plans
    Plan(PlanCommand),

    /// View and record test results
    Result(ResultCommand),

    /// Look up users
    User(UserCommand),

    /// Inspect case priorities
    Priority(PriorityCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// A record the server did not return.
#[derive(Error, Debug)]
#[error("{0} not found")]
pub struct NotFound(pub String);

impl GlobalOptions {
    /// Builds a client from flags, environment and the config file.
    pub fn connect(&self) -> Result<TestRailClient> {
        let config = Config::load()?;
        let (url, credential) = self.resolve_server(&config)?;
        tracing::debug!("Connecting to {} as {} ({})", url, credential.username(), credential.kind());
        TestRailClient::new(&url, credential).context("Invalid server settings")
    }

    /// Output writer honouring `--json`, then `output.format` from the config.
    pub fn writer(&self) -> OutputWriter {
        let configured = Config::load()
            .ok()
            .and_then(|config| config.output.format.parse::<OutputFormat>().ok());
        OutputWriter::new(self.output_format(configured))
    }

    fn output_format(&self, configured: Option<OutputFormat>) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            configured.unwrap_or_default()
        }
    }

    /// Merges flags over the `[server]` section of `config`.
    ///
    /// Flags win field by field; an API key from either source wins over a
    /// password from either source.
    pub fn resolve_server(&self, config: &Config) -> Result<(String, AuthCredential)> {
        let url = self
            .url
            .clone()
            .or_else(|| config.server.url.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No TestRail URL configured. Pass --url, set TESTRAIL_URL, or run 'tr config set server.url <URL>'."
                )
            })?;

        let mut merged = config.clone();
        if let Some(user) = &self.user {
            merged.server.user = Some(user.clone());
        }
        if let Some(key) = &self.api_key {
            merged.server.api_key = Some(key.clone());
        }
        if let Some(password) = &self.password {
            merged.server.password = Some(password.clone());
            if self.api_key.is_none() {
                merged.server.api_key = None;
            }
        }

        let credential = merged.server_credential().ok_or_else(|| {
            anyhow::anyhow!(
                "No TestRail credentials configured. Pass --user with --api-key or --password, or set them with 'tr config set'."
            )
        })?;

        Ok((url, credential))
    }
}

/// Turns a facade result into an `anyhow` result, naming the action on failure.
pub(crate) fn require<T>(result: RequestResult<T>, action: &str) -> Result<T> {
    result.into_result().map_err(|e| describe(e, action))
}

/// Unwraps a single-record lookup.
///
/// Unknown ids become [`NotFound`]; any other failure keeps its [`ApiError`]
/// so the exit code reflects it.
pub(crate) fn found<T>(record: std::result::Result<T, ApiError>, what: impl Into<String>) -> Result<T> {
    let what = what.into();
    match record {
        Ok(record) => Ok(record),
        Err(e) if e.is_not_found() => {
            tracing::debug!("{}: {}", what, e);
            Err(NotFound(what).into())
        }
        Err(e) => Err(describe(e, &format!("load {}", what))),
    }
}

fn describe(error: ApiError, action: &str) -> anyhow::Error {
    let detail = error.server_message();
    let err = anyhow::Error::new(error);
    let err = match detail {
        Some(message) => err.context(message),
        None => err,
    };
    err.context(format!("Failed to {}", action))
}

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]?(\d+)$").expect("id pattern is valid"));

/// Parses an id as typed in the UI (`42`, `C42`, `R7`).
pub(crate) fn parse_id(text: &str) -> std::result::Result<u64, String> {
    ID_PATTERN
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| format!("'{}' is not a valid id", text))
}

/// Parses `key=value` pairs into custom fields.
///
/// Values that parse as JSON (numbers, booleans, arrays, objects) are kept
/// as such; anything else becomes a string. Keys are passed through, so
/// custom fields need their `custom_` prefix.
pub(crate) fn parse_fields(pairs: &[String]) -> Result<Option<JsonObject>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut fields = JsonObject::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Field '{}' must look like key=value", pair))?;
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("Field '{}' has an empty key", pair);
        }
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        fields.insert(key.to_string(), value);
    }
    Ok(Some(fields))
}

/// Formats a unix timestamp field for tables.
pub(crate) fn format_date(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value.map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d %H:%M").to_string())
}
