use std::io::{self, BufRead, IsTerminal, Write};

use cheatsheet::{Selector, SheetKey, catalogue};
use clap::Parser;
use tracing::instrument;

use super::{
    Settings,
    render::{self, Layout},
    terminal::Colorize,
};

#[derive(Debug, Parser, Default)]
#[command(about = "Search a sheet interactively")]
pub struct Browse {
    /// Sheet to start on [default: from config]
    #[arg(long, short, value_parser = super::parse_sheet)]
    sheet: Option<SheetKey>,
}

impl Browse {
    #[instrument(level = "debug", skip(self, settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let key = settings.sheet_or_default(self.sheet);
        let mut session = Session::new(key, Layout::detect(settings.config.show_intro));
        let mut out = io::stdout().lock();

        session.render(&mut out)?;
        writeln!(out, "\n{}", HINT.dim())?;

        let interactive = io::stdin().is_terminal();
        loop {
            let Some(line) = next_line(interactive, session.selector.sheet())? else {
                break;
            };
            if session.handle(&line, &mut out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }

        Ok(())
    }
}

const HINT: &str = "Type to search. ':help' lists commands, ':q' quits.";

/// Reads the next line of input, or `None` at end of input.
fn next_line(interactive: bool, sheet: SheetKey) -> anyhow::Result<Option<String>> {
    if interactive {
        let prompt = format!("{sheet} search");
        match dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    } else {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// One line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Sheet(&'a str),
    Sections,
    Tables,
    Help,
    Unknown(&'a str),
    Query(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Input::Query(line);
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, arg)| (name, arg.trim()));

    match name {
        "q" | "quit" => Input::Quit,
        "sheet" => Input::Sheet(arg),
        "sections" => Input::Sections,
        "tables" => Input::Tables,
        "help" | "h" | "?" => Input::Help,
        _ => Input::Unknown(name),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive state: the selector plus how to draw it.
#[derive(Debug)]
struct Session {
    selector: Selector,
    layout: Layout,
}

impl Session {
    const fn new(sheet: SheetKey, layout: Layout) -> Self {
        Self {
            selector: Selector::new(sheet),
            layout,
        }
    }

    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match parse_input(line) {
            Input::Quit => return Ok(Flow::Quit),
            Input::Query(query) => {
                self.selector.set_query(query);
                self.render(out)?;
            }
            Input::Sheet(arg) => match arg.parse::<SheetKey>() {
                Ok(key) => {
                    self.selector.switch_sheet(key);
                    self.render(out)?;
                }
                Err(e) => writeln!(out, "{}", e.to_string().warning())?,
            },
            Input::Sections => {
                render::outline(out, catalogue().get(self.selector.sheet()))?;
            }
            Input::Tables => {
                for table in catalogue().reference_tables() {
                    render::reference_table(out, table)?;
                    writeln!(out)?;
                }
            }
            Input::Help => Self::help(out)?,
            Input::Unknown(name) => {
                writeln!(
                    out,
                    "{}",
                    format!("unknown command ':{name}' (try ':help')").warning()
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let selection = self.selector.select(catalogue());
        writeln!(out)?;
        render::sheet_pretty(out, selection.sheet_key(), selection.sheet(), self.layout)
    }

    fn help<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "Anything not starting with ':' is a search term.")?;
        writeln!(out, "  :sheet KEY   switch sheet ({})", sheet_keys())?;
        writeln!(out, "  :sections    list sections of the current sheet")?;
        writeln!(out, "  :tables      show the sample tables")?;
        writeln!(out, "  :help        show this help")?;
        writeln!(out, "  :q, :quit    exit")
    }
}

fn sheet_keys() -> String {
    SheetKey::ALL
        .iter()
        .map(|key| key.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use cheatsheet::ColorChoice;
    use test_case::test_case;

    use super::*;
    use crate::cli::terminal::set_color_choice;

    const PLAIN: Layout = Layout {
        show_intro: false,
        show_ids: false,
        width: None,
    };

    fn run_lines(session: &mut Session, lines: &[&str]) -> (String, Flow) {
        set_color_choice(ColorChoice::Never);
        let mut out = Vec::new();
        let mut flow = Flow::Continue;
        for line in lines {
            flow = session.handle(line, &mut out).unwrap();
            if flow == Flow::Quit {
                break;
            }
        }
        (String::from_utf8(out).unwrap(), flow)
    }

    #[test_case(":q", Input::Quit; "short quit")]
    #[test_case("  :quit  ", Input::Quit; "padded quit")]
    #[test_case(":sheet sql", Input::Sheet("sql"); "sheet")]
    #[test_case(":sheet   Postgres ", Input::Sheet("Postgres"); "sheet with padding")]
    #[test_case(":sheet", Input::Sheet(""); "sheet without key")]
    #[test_case(":sections", Input::Sections; "sections")]
    #[test_case(":tables", Input::Tables; "tables")]
    #[test_case(":help", Input::Help; "help")]
    #[test_case(":frobnicate", Input::Unknown("frobnicate"); "unknown")]
    #[test_case("find", Input::Query("find"); "query")]
    #[test_case("", Input::Query(""); "empty query")]
    #[test_case("  a:b ", Input::Query("  a:b "); "query keeps text")]
    fn classifies_input(line: &str, expected: Input<'_>) {
        assert_eq!(parse_input(line), expected);
    }

    #[test]
    fn query_narrows_the_sheet() {
        let mut session = Session::new(SheetKey::Sql, PLAIN);
        let (text, flow) = run_lines(&mut session, &["rollback"]);

        assert_eq!(flow, Flow::Continue);
        assert!(text.contains("Rollback Transaction"));
        assert!(!text.contains("INNER JOIN"));
        assert_eq!(session.selector.query(), "rollback");
    }

    #[test]
    fn switching_sheet_clears_the_query() {
        let mut session = Session::new(SheetKey::Mongo, PLAIN);
        let (text, _) = run_lines(&mut session, &["alice", ":sheet postgres"]);

        assert_eq!(session.selector.sheet(), SheetKey::Postgres);
        assert_eq!(session.selector.query(), "");
        assert!(text.contains("PostgreSQL\n"));
        assert!(text.contains("psql Meta-Commands"));
    }

    #[test]
    fn bad_sheet_is_reported_and_ignored() {
        let mut session = Session::new(SheetKey::Sql, PLAIN);
        let (text, flow) = run_lines(&mut session, &[":sheet oracle"]);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(session.selector.sheet(), SheetKey::Sql);
        assert!(text.contains("unknown sheet 'oracle': expected one of mongo, sql, postgres"));
    }

    #[test]
    fn each_line_renders_the_latest_query() {
        let mut session = Session::new(SheetKey::Sql, PLAIN);
        let (text, _) = run_lines(&mut session, &["rollback", "zzz_no_such_term"]);

        let (first, second) = text.split_once("No commands found").unwrap();
        assert!(first.contains("Rollback Transaction"));
        assert!(!second.contains("Rollback Transaction"));
        assert_eq!(session.selector.generation(), 2);
    }

    #[test]
    fn no_match_prints_empty_state() {
        let mut session = Session::new(SheetKey::Postgres, PLAIN);
        let (text, _) = run_lines(&mut session, &["zzz_no_such_term"]);
        assert!(text.contains("No commands found"));
    }

    #[test]
    fn quit_stops_processing() {
        let mut session = Session::new(SheetKey::Mongo, PLAIN);
        let (_, flow) = run_lines(&mut session, &[":q", "alice"]);

        assert_eq!(flow, Flow::Quit);
        assert_eq!(session.selector.query(), "");
    }

    #[test]
    fn help_lists_sheet_keys() {
        let mut session = Session::new(SheetKey::Mongo, PLAIN);
        let (text, _) = run_lines(&mut session, &[":help"]);
        assert!(text.contains(":sheet KEY   switch sheet (mongo, sql, postgres)"));
    }
}
