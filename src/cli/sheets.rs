use cheatsheet::{Catalogue, SheetKey, catalogue};
use clap::Parser;
use serde::Serialize;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "List the available sheets")]
pub struct Sheets {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Print only the sheet keys, one per line
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Counts for one sheet.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Summary {
    key: SheetKey,
    name: &'static str,
    sections: usize,
    commands: usize,
}

fn summaries(catalogue: &Catalogue) -> Vec<Summary> {
    catalogue
        .sheets()
        .map(|(key, sheet)| Summary {
            key,
            name: key.name(),
            sections: sheet.len(),
            commands: sheet.command_count(),
        })
        .collect()
}

impl Sheets {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let summaries = summaries(catalogue());

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            }
            OutputFormat::Table if self.quiet => {
                for summary in &summaries {
                    println!("{}", summary.key);
                }
            }
            OutputFormat::Table => Self::output_table(&summaries),
        }

        Ok(())
    }

    fn output_table(summaries: &[Summary]) {
        println!("Sheets");
        println!("{}", "──────".dim());

        if is_narrow() {
            for summary in summaries {
                println!(
                    "{} ({}): {} sections, {} commands",
                    summary.key.to_string().info(),
                    summary.name,
                    summary.sections,
                    summary.commands
                );
            }
        } else {
            println!(
                "{:<10} {:<12} {:<9} Commands",
                "Key", "Name", "Sections"
            );
            for summary in summaries {
                // pad before colouring, escape codes break alignment
                println!(
                    "{} {:<12} {:<9} {}",
                    format!("{:<10}", summary.key).info(),
                    summary.name,
                    summary.sections,
                    summary.commands
                );
            }
        }

        let total: usize = summaries.iter().map(|s| s.commands).sum();
        println!();
        println!("Total commands: {}", total.to_string().success());
    }
}
