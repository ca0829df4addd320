//
//  testrail-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Config Commands
//!
//! ```bash
//! tr config set server.url https://example.testrail.io
//! tr config set server.user qa@example.com
//! tr config set server.api_key <KEY>
//! tr config show
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};
use crate::output::OutputFormat;

use super::GlobalOptions;

const SECRET_KEYS: &[&str] = &["server.password", "server.api_key"];

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show every setting (secrets masked)
    #[command(visible_alias = "ls")]
    Show,

    /// Print one setting
    Get(GetArgs),

    /// Change one setting; an empty value clears it
    Set(SetArgs),

    /// Print the config file location
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Setting key, e.g. server.url
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Setting key, e.g. server.url
    pub key: String,

    /// New value
    pub value: String,
}

fn mask(key: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(v) if SECRET_KEYS.contains(&key) && !v.is_empty() => Some("********".to_string()),
        other => other,
    }
}

fn validate(key: &str, value: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        bail!("Unknown configuration key '{}'. Valid keys: {}", key, KEYS.join(", "));
    }
    if key == "output.format" {
        value.parse::<OutputFormat>()?;
    }
    if key == "server.url" && !value.is_empty() {
        let url = url::Url::parse(value)
            .map_err(|e| anyhow::anyhow!("Invalid value for server.url: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Invalid value for server.url: scheme must be http or https");
        }
    }
    Ok(())
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Path => {
                let path = Config::config_path()?;
                if global.json {
                    println!("{}", serde_json::json!({ "path": path }));
                } else {
                    println!("{}", path.display());
                }
                Ok(())
            }
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            let entries: serde_json::Map<String, serde_json::Value> = KEYS
                .iter()
                .map(|key| (key.to_string(), serde_json::json!(mask(key, config.get(key)))))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        for key in KEYS {
            let value = mask(key, config.get(key)).unwrap_or_else(|| "(not set)".to_string());
            println!("{} = {}", style(key).cyan(), value);
        }
        Ok(())
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        if !KEYS.contains(&args.key.as_str()) {
            bail!("Unknown configuration key '{}'. Valid keys: {}", args.key, KEYS.join(", "));
        }
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        validate(&args.key, &args.value)?;

        let mut config = Config::load()?;
        config.set(&args.key, args.value.clone());
        config.save()?;

        let shown = mask(&args.key, Some(args.value.clone())).unwrap_or_default();
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Set {} = {}", style("✓").green(), style(&args.key).cyan(), shown);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keys_and_values() {
        assert!(validate("server.url", "https://example.testrail.io").is_ok());
        assert!(validate("server.url", "").is_ok());
        assert!(validate("server.url", "ftp://example.com").is_err());
        assert!(validate("output.format", "json").is_ok());
        assert!(validate("output.format", "yaml").is_err());
        assert!(validate("core.editor", "vim").is_err());
    }

    #[test]
    fn test_mask_hides_secrets_only() {
        assert_eq!(mask("server.api_key", Some("abc".into())).as_deref(), Some("********"));
        assert_eq!(mask("server.password", None), None);
        assert_eq!(
            mask("server.user", Some("qa@example.com".into())).as_deref(),
            Some("qa@example.com")
        );
    }
}
