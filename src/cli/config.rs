use std::path::Path;

use anyhow::Context;
use cheatsheet::{ColorChoice, Config};
use tracing::instrument;

use super::Settings;
use crate::cli::terminal::Colorize;

const CONFIG_LOOKUP: &str =
    "Config file lookup: --config PATH, then $CHEAT_CONFIG, then ./cheat.toml";

const SET_EXAMPLES: &str =
    "Examples:\n  cheat config set default_sheet postgres\n  cheat config set color never";

#[derive(Debug, clap::Parser)]
/// Show or modify viewer configuration
///
/// Values are stored as TOML. Run 'cheat config set --help' to list the
/// keys and what they control.
#[command(after_help = CONFIG_LOOKUP)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve
        key: Key,
    },

    /// Set a configuration value
    #[command(after_help = SET_EXAMPLES)]
    Set {
        /// Configuration key to set
        key: Key,

        /// Value to set
        value: String,
    },

    /// Print the path of the configuration file in use
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
enum Key {
    /// Sheet shown when none is requested (mongo, sql, postgres)
    DefaultSheet,
    /// Print section intros (true, false)
    ShowIntro,
    /// Colour output (auto, always, never)
    Color,
}

impl Command {
    #[instrument(skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => Self::show_config(&settings.config, &settings.config_path),
            ConfigCommand::Get { key } => println!("{}", get(&settings.config, key)),
            ConfigCommand::Set { key, value } => {
                let mut config = settings.config.clone();
                set(&mut config, key, &value)?;
                config.save(&settings.config_path)?;
                println!(
                    "{}",
                    format!("Set {} = {}", key.name(), get(&config, key)).success()
                );
            }
            ConfigCommand::Path => println!("{}", settings.config_path.display()),
        }
        Ok(())
    }

    fn show_config(config: &Config, path: &Path) {
        println!("Configuration:");
        println!("  default_sheet: {}", config.default_sheet);
        println!("  show_intro: {}", config.show_intro);
        println!(
            "  color: {} ({})",
            config.color,
            match config.color {
                ColorChoice::Auto => "when supported",
                ColorChoice::Always => "forced on",
                ColorChoice::Never => "disabled",
            }
            .dim()
        );
        if !path.exists() {
            println!(
                "{}",
                format!("{} not found, showing defaults", path.display()).dim()
            );
        }
    }
}

impl Key {
    const fn name(self) -> &'static str {
        match self {
            Self::DefaultSheet => "default_sheet",
            Self::ShowIntro => "show_intro",
            Self::Color => "color",
        }
    }
}

fn get(config: &Config, key: Key) -> String {
    match key {
        Key::DefaultSheet => config.default_sheet.to_string(),
        Key::ShowIntro => config.show_intro.to_string(),
        Key::Color => config.color.to_string(),
    }
}

fn set(config: &mut Config, key: Key, value: &str) -> anyhow::Result<()> {
    match key {
        Key::DefaultSheet => {
            config.default_sheet = value.parse()?;
        }
        Key::ShowIntro => {
            config.show_intro = value
                .trim()
                .parse()
                .context("Value must be 'true' or 'false'")?;
        }
        Key::Color => {
            config.color = value.parse().map_err(anyhow::Error::msg)?;
        }
    }
    Ok(())
}
