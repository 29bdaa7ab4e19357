use std::path::PathBuf;

mod browse;
mod config;
mod render;
mod sections;
mod sheets;
mod show;
mod terminal;

use browse::Browse;
use cheatsheet::{Config, SheetKey, UnknownSheet};
use clap::ArgAction;
use sections::Sections;
use sheets::Sheets;
use show::Show;
use tracing::instrument;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "CHEAT_CONFIG";

/// Configuration file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "cheat.toml";

/// Parse a sheet key at the CLI boundary.
fn parse_sheet(s: &str) -> Result<SheetKey, String> {
    s.parse().map_err(|e: UnknownSheet| e.to_string())
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file [default: $CHEAT_CONFIG or ./cheat.toml]
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let location = self.config_location();
        let settings = location.load()?;
        terminal::set_color_choice(settings.config.color);

        self.command
            .unwrap_or_else(|| Command::Show(Show::default()))
            .run(&settings)
    }

    fn config_location(&self) -> ConfigLocation {
        if let Some(path) = &self.config {
            return ConfigLocation {
                path: path.clone(),
                required: true,
            };
        }

        let path = std::env::var_os(CONFIG_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        ConfigLocation {
            path,
            required: false,
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Where the configuration file lives, and whether it must exist.
#[derive(Debug, Clone)]
struct ConfigLocation {
    path: PathBuf,
    required: bool,
}

impl ConfigLocation {
    #[instrument(level = "debug")]
    fn load(self) -> anyhow::Result<Settings> {
        let config = if self.required {
            Config::load(&self.path)?
        } else {
            Config::load_or_default(&self.path)?
        };
        Ok(Settings {
            config,
            config_path: self.path,
        })
    }
}

/// Resolved configuration passed to every subcommand.
#[derive(Debug, Clone)]
pub struct Settings {
    config: Config,
    config_path: PathBuf,
}

impl Settings {
    /// The sheet to use when none was given on the command line.
    fn sheet_or_default(&self, sheet: Option<SheetKey>) -> SheetKey {
        sheet.unwrap_or(self.config.default_sheet)
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show a sheet, optionally narrowed by a search term (default)
    Show(Show),

    /// List the available sheets
    Sheets(Sheets),

    /// List the sections of a sheet
    ///
    /// Sections are always listed from the full sheet, for navigation.
    Sections(Sections),

    /// Print the sample tables the commands operate on
    Tables,

    /// Search a sheet interactively
    ///
    /// Each line entered is a new search. Type ':help' for commands.
    Browse(Browse),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            Self::Show(command) => command.run(settings)?,
            Self::Sheets(command) => command.run()?,
            Self::Sections(command) => command.run(settings)?,
            Self::Tables => Tables::run()?,
            Self::Browse(command) => command.run(settings)?,
            Self::Config(command) => command.run(settings)?,
        }
        Ok(())
    }
}

struct Tables;

impl Tables {
    #[instrument]
    fn run() -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        for (idx, table) in cheatsheet::catalogue()
            .reference_tables()
            .iter()
            .enumerate()
        {
            if idx > 0 {
                use std::io::Write;
                writeln!(out)?;
            }
            render::reference_table(&mut out, table)?;
        }
        Ok(())
    }
}
