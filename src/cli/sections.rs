use cheatsheet::{SheetKey, catalogue};
use clap::Parser;
use tracing::instrument;

use super::{Settings, render, terminal::Colorize};

#[derive(Debug, Parser, Default)]
#[command(about = "List the sections of a sheet")]
pub struct Sections {
    /// Sheet to list [default: from config]
    #[arg(long, short, value_parser = super::parse_sheet)]
    sheet: Option<SheetKey>,
}

impl Sections {
    #[instrument(level = "debug", skip(self, settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let key = settings.sheet_or_default(self.sheet);
        let sheet = catalogue().get(key);

        println!("{}", key.name().heading());
        render::outline(&mut std::io::stdout().lock(), sheet)?;
        Ok(())
    }
}
