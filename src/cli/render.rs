//! Text renderings of sheets and tables shared by the subcommands.

use std::io::{self, Write};

use anyhow::Context;
use cheatsheet::{Command, SectionBody, Sheet, SheetKey, domain::ReferenceTable};
use serde::Serialize;

use super::terminal::Colorize;

/// Layout knobs for [`sheet_pretty`].
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Print section intros.
    pub show_intro: bool,
    /// Print section anchors next to titles.
    pub show_ids: bool,
    /// Wrap intros to this many columns.
    pub width: Option<usize>,
}

impl Layout {
    /// Picks a layout for the current terminal.
    pub fn detect(show_intro: bool) -> Self {
        Self {
            show_intro,
            show_ids: !super::terminal::is_narrow(),
            width: super::terminal::terminal_width().map(usize::from),
        }
    }
}

pub fn sheet_pretty<W: Write>(
    out: &mut W,
    key: SheetKey,
    sheet: &Sheet,
    layout: Layout,
) -> io::Result<()> {
    writeln!(out, "{}", key.name().heading())?;
    writeln!(out, "{}", "═".repeat(key.name().chars().count()).dim())?;

    if sheet.is_empty() {
        writeln!(out)?;
        return empty_state(out);
    }

    for section in sheet.sections() {
        writeln!(out)?;
        if layout.show_ids {
            writeln!(
                out,
                "{}  {}",
                section.title().heading(),
                format!("#{}", section.id()).dim()
            )?;
        } else {
            writeln!(out, "{}", section.title().heading())?;
        }

        if layout.show_intro {
            for line in wrap(section.intro(), layout.width) {
                writeln!(out, "{}", line.dim())?;
            }
        }

        match section.body() {
            SectionBody::Commands(commands) => {
                for command in commands {
                    command_pretty(out, command, 1)?;
                }
            }
            SectionBody::SubSections(sub_sections) => {
                for sub_section in sub_sections {
                    writeln!(out)?;
                    writeln!(out, "  {}", sub_section.title().info())?;
                    for command in sub_section.commands() {
                        command_pretty(out, command, 2)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn command_pretty<W: Write>(out: &mut W, command: &Command, depth: usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    writeln!(out)?;
    writeln!(out, "{indent}{}", command.title())?;
    for line in command.code().lines() {
        writeln!(out, "{indent}  {}", line.success())?;
    }
    Ok(())
}

/// The message shown when a search leaves nothing to display.
pub fn empty_state<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No commands found")?;
    writeln!(out, "{}", "Try adjusting your search term.".dim())
}

pub fn sheet_markdown<W: Write>(out: &mut W, key: SheetKey, sheet: &Sheet) -> io::Result<()> {
    writeln!(out, "# {}", key.name())?;

    if sheet.is_empty() {
        writeln!(out)?;
        return writeln!(out, "_No commands found._");
    }

    let language = code_language(key);
    for section in sheet.sections() {
        writeln!(out, "\n## {}\n", section.title())?;
        writeln!(out, "{}", section.intro())?;

        match section.body() {
            SectionBody::Commands(commands) => {
                for command in commands {
                    command_markdown(out, command, language)?;
                }
            }
            SectionBody::SubSections(sub_sections) => {
                for sub_section in sub_sections {
                    writeln!(out, "\n### {}", sub_section.title())?;
                    for command in sub_section.commands() {
                        command_markdown(out, command, language)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn command_markdown<W: Write>(out: &mut W, command: &Command, language: &str) -> io::Result<()> {
    writeln!(out, "\n**{}**\n", command.title())?;
    writeln!(out, "```{language}")?;
    writeln!(out, "{}", command.code())?;
    writeln!(out, "```")
}

const fn code_language(key: SheetKey) -> &'static str {
    match key {
        SheetKey::Mongo => "javascript",
        SheetKey::Sql | SheetKey::Postgres => "sql",
    }
}

#[derive(Debug, Serialize)]
struct SheetOutput<'a> {
    sheet: SheetKey,
    name: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    query: &'a str,
    sections: &'a Sheet,
}

pub fn sheet_json<W: Write>(
    out: &mut W,
    key: SheetKey,
    query: &str,
    sheet: &Sheet,
) -> anyhow::Result<()> {
    let output = SheetOutput {
        sheet: key,
        name: key.name(),
        query,
        sections: sheet,
    };
    serde_json::to_writer_pretty(&mut *out, &output).context("failed to render json output")?;
    writeln!(out)?;
    Ok(())
}

/// Prints the navigation list of a sheet.
pub fn outline<W: Write>(out: &mut W, sheet: &Sheet) -> io::Result<()> {
    let width = sheet
        .outline()
        .map(|(id, _)| id.len())
        .max()
        .unwrap_or(0);
    for (id, title) in sheet.outline() {
        writeln!(out, "  {}  {title}", format!("{id:<width$}").dim())?;
    }
    Ok(())
}

pub fn reference_table<W: Write>(out: &mut W, table: &ReferenceTable) -> io::Result<()> {
    let widths = table.column_widths();

    writeln!(out, "{}", table.name().heading())?;
    for (header, width) in table.columns().iter().zip(&widths) {
        write!(out, "{header:<width$}  ")?;
    }
    writeln!(out)?;
    for width in &widths {
        write!(out, "{:-<width$}  ", "")?;
    }
    writeln!(out)?;

    for row in table.rows() {
        for (value, width) in row.iter().zip(&widths) {
            write!(out, "{value:<width$}  ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Greedy word wrap. Returns the text unchanged when no width is known.
fn wrap(text: &str, width: Option<usize>) -> Vec<String> {
    let Some(width) = width.filter(|w| *w > 0) else {
        return vec![text.to_string()];
    };

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
