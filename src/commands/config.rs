//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Validate and store one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{API_URL_ENV, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let effective_url = config.base_url()?;
    let url_overridden = std::env::var(API_URL_ENV).is_ok_and(|v| !v.is_empty());

    let json_output = json!({
        "api": {
            "base_url": config.api.base_url,
            "effective_base_url": effective_url.as_str(),
            "timeout": config.api.timeout,
        },
        "ui": {
            "title": config.ui.title,
            "empty_message": config.ui.empty_message,
            "archived_empty_message": config.ui.archived_empty_message,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {}\n", config.api.base_url));
    if url_overridden {
        text_output.push_str(&format!(
            "  {}\n",
            format!("(overridden by {API_URL_ENV}: {effective_url})").yellow()
        ));
    }
    text_output.push_str(&format!("  timeout: {}s\n", config.api.timeout));

    text_output.push('\n');

    text_output.push_str(&format!("{}:\n", "ui".cyan()));
    text_output.push_str(&format!("  title: {}\n", config.ui.title));
    text_output.push_str(&format!("  empty_message: {}\n", config.ui.empty_message));
    text_output.push_str(&format!(
        "  archived_empty_message: {}\n",
        config.ui.archived_empty_message
    ));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({ "key": key, "value": value }))
        .with_text(value.clone())
        .print(json)
}

/// Set a configuration value and save the file
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?;
    tracing::info!("config {key} set");

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} = {}", key.cyan(), stored))
    .print(json)
}
