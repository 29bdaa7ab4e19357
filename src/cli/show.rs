use std::io::Write;

use anyhow::bail;
use cheatsheet::{Selector, SheetKey, catalogue};
use clap::Parser;
use tracing::instrument;

use super::{
    Settings,
    render::{self, Layout},
};

#[derive(Debug, Parser, Default)]
#[command(about = "Show a sheet, optionally narrowed by a search term")]
pub struct Show {
    /// Search term, matched case-insensitively against command titles and
    /// code
    ///
    /// Multiple words are joined with single spaces.
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    /// Sheet to show [default: from config]
    #[arg(long, short, value_parser = super::parse_sheet)]
    sheet: Option<SheetKey>,

    /// Only show the section with this id
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Do not print section intros
    #[arg(long)]
    no_intro: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
    Markdown,
}

impl Show {
    /// The search term as typed.
    pub fn query(&self) -> String {
        self.query.join(" ")
    }

    #[instrument(level = "debug", skip(self, settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let key = settings.sheet_or_default(self.sheet);
        let query = self.query();

        let mut selector = Selector::new(key);
        selector.set_query(query.as_str());
        let selection = selector.select(catalogue());

        let sheet = match &self.section {
            Some(id) => {
                if catalogue().get(key).section(id).is_none() {
                    bail!(
                        "unknown section '{id}' in {key} sheet (see 'cheat sections --sheet {key}')"
                    );
                }
                selection
                    .sheet()
                    .sections()
                    .iter()
                    .filter(|section| section.id() == id.as_str())
                    .cloned()
                    .collect()
            }
            None => selection.sheet().clone(),
        };

        let mut out = std::io::stdout().lock();
        match self.output {
            OutputFormat::Pretty => {
                let show_intro = settings.config.show_intro && !self.no_intro;
                render::sheet_pretty(&mut out, key, &sheet, Layout::detect(show_intro))?;
            }
            OutputFormat::Json => {
                let shown = if query.trim().is_empty() {
                    ""
                } else {
                    query.as_str()
                };
                render::sheet_json(&mut out, key, shown, &sheet)?;
            }
            OutputFormat::Markdown => render::sheet_markdown(&mut out, key, &sheet)?,
        }
        out.flush()?;

        Ok(())
    }
}
