//! The selection engine: derives the visible part of a sheet for a query.

use tracing::instrument;

use crate::domain::{Command, FilteredSheet, Query, Section, SectionBody, Sheet, SubSection};

/// Returns the subset of `sheet` whose commands match `query`.
///
/// The shape and order of the sheet are preserved. Only commands are
/// matched; section and sub-section titles and intros are carried along with
/// whatever survives. Sub-sections and sections left with no commands are
/// dropped, including sections that had no content to begin with.
///
/// The empty query is the identity: the result equals `sheet`.
///
/// This function is total. An empty result means nothing matched.
#[must_use]
#[instrument(level = "trace", skip(sheet), fields(sections = sheet.len()))]
pub fn filter(sheet: &Sheet, query: &Query) -> FilteredSheet {
    if query.is_empty() {
        return sheet.clone();
    }

    let filtered: FilteredSheet = sheet
        .sections()
        .iter()
        .filter_map(|section| filter_section(section, query))
        .collect();

    tracing::trace!(
        kept = filtered.len(),
        commands = filtered.command_count(),
        "filtered sheet"
    );

    filtered
}

/// Filters `sheet` by raw user input.
///
/// Equivalent to `filter(sheet, &Query::parse(query))`.
///
/// # Examples
///
/// ```
/// use cheatsheet::{SheetKey, filter_sheet, get_sheet};
///
/// let hits = filter_sheet(get_sheet(SheetKey::Sql), "index");
/// assert_eq!(hits.command_count(), 2);
///
/// // surrounding whitespace is matched literally
/// assert!(!filter_sheet(get_sheet(SheetKey::Mongo), "db").is_empty());
/// assert!(filter_sheet(get_sheet(SheetKey::Mongo), "db ").is_empty());
/// ```
#[must_use]
pub fn filter_sheet(sheet: &Sheet, query: &str) -> FilteredSheet {
    filter(sheet, &Query::parse(query))
}

fn filter_section(section: &Section, query: &Query) -> Option<Section> {
    let body = match section.body() {
        SectionBody::Commands(commands) => SectionBody::Commands(filter_commands(commands, query)?),
        SectionBody::SubSections(sub_sections) => {
            let kept: Vec<SubSection> = sub_sections
                .iter()
                .filter_map(|sub_section| {
                    filter_commands(sub_section.commands(), query)
                        .map(|commands| sub_section.with_commands(commands))
                })
                .collect();
            if kept.is_empty() {
                return None;
            }
            SectionBody::SubSections(kept)
        }
    };

    Some(section.with_body(body))
}

/// Keeps matching commands in order, or `None` when nothing matches.
fn filter_commands(commands: &[Command], query: &Query) -> Option<Vec<Command>> {
    let kept: Vec<Command> = commands
        .iter()
        .filter(|command| query.matches(command))
        .copied()
        .collect();
    (!kept.is_empty()).then_some(kept)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{catalogue, domain::SheetKey};

    fn crud_sheet() -> Sheet {
        Sheet::new(vec![
            Section::with_commands(
                "database",
                "Database Commands",
                "Managing databases, alice is not searched here.",
                vec![
                    Command::new("Show all databases", "show dbs"),
                    Command::new("Drop the current database", "db.dropDatabase()"),
                ],
            ),
            Section::with_sub_sections(
                "crud",
                "CRUD Operations",
                "Create, read, update, delete.",
                vec![
                    SubSection::new(
                        "Create (Insert) Documents",
                        vec![
                            Command::new(
                                "Insert a single document",
                                r#"db.users.insertOne({ username: "alice", age: 30 })"#,
                            ),
                            Command::new(
                                "Insert multiple documents",
                                r#"db.users.insertMany([{ username: "bob" }])"#,
                            ),
                        ],
                    ),
                    SubSection::new(
                        "Read (Query) Documents",
                        vec![Command::new("Find all documents", "db.users.find()")],
                    ),
                    SubSection::new(
                        "Update Documents",
                        vec![Command::new(
                            "Update a single document",
                            r#"db.users.updateOne({ username: "bob" }, { $set: { age: 26 } })"#,
                        )],
                    ),
                    SubSection::new(
                        "Delete Documents",
                        vec![Command::new(
                            "Delete a single document",
                            r#"db.users.deleteOne({ username: "charlie" })"#,
                        )],
                    ),
                ],
            ),
            Section::with_commands("empty", "Nothing Yet", "No content.", Vec::new()),
        ])
    }

    fn titles(sheet: &Sheet) -> Vec<&'static str> {
        sheet
            .sections()
            .iter()
            .flat_map(|section| section.body().commands())
            .map(Command::title)
            .collect()
    }

    #[test]
    fn single_match_keeps_only_its_sub_section() {
        let filtered = filter_sheet(&crud_sheet(), "alice");

        assert_eq!(filtered.len(), 1);
        let section = &filtered.sections()[0];
        assert_eq!(section.id(), "crud");
        assert_eq!(section.intro(), "Create, read, update, delete.");

        let SectionBody::SubSections(sub_sections) = section.body() else {
            panic!("expected sub-sections");
        };
        assert_eq!(sub_sections.len(), 1);
        assert_eq!(sub_sections[0].title(), "Create (Insert) Documents");
        assert_eq!(
            sub_sections[0].commands(),
            &[Command::new(
                "Insert a single document",
                r#"db.users.insertOne({ username: "alice", age: 30 })"#,
            )]
        );
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    fn blank_query_is_identity(query: &str) {
        let sheet = crud_sheet();
        assert_eq!(filter_sheet(&sheet, query), sheet);
    }

    #[test]
    fn empty_section_passes_through_unfiltered() {
        let sheet = crud_sheet();
        let unfiltered = filter(&sheet, &Query::all());
        assert!(unfiltered.section("empty").is_some());
    }

    #[test]
    fn empty_section_is_pruned_under_a_query() {
        // "d" occurs in almost every command, but the empty section has none.
        let filtered = filter_sheet(&crud_sheet(), "d");
        assert!(filtered.section("empty").is_none());
        assert!(filtered.section("database").is_some());
    }

    #[test]
    fn section_and_sub_section_titles_are_not_searched() {
        assert!(filter_sheet(&crud_sheet(), "CRUD Operations").is_empty());
        assert!(filter_sheet(&crud_sheet(), "Read (Query)").is_empty());
        assert!(filter_sheet(&crud_sheet(), "not searched here").is_empty());
    }

    #[test]
    fn preserves_order_of_surviving_commands() {
        let filtered = filter_sheet(&crud_sheet(), "db");
        assert_eq!(
            titles(&filtered),
            vec![
                "Show all databases",
                "Drop the current database",
                "Insert a single document",
                "Insert multiple documents",
                "Find all documents",
                "Update a single document",
                "Delete a single document",
            ]
        );
    }

    #[test]
    fn drops_sub_sections_without_matches() {
        let filtered = filter_sheet(&crud_sheet(), "bob");
        let SectionBody::SubSections(sub_sections) = filtered.sections()[0].body() else {
            panic!("expected sub-sections");
        };
        let kept: Vec<_> = sub_sections.iter().map(SubSection::title).collect();
        assert_eq!(kept, vec!["Create (Insert) Documents", "Update Documents"]);
    }

    #[test]
    fn no_match_yields_empty_sheet() {
        for (_, sheet) in catalogue().sheets() {
            assert!(filter_sheet(sheet, "zzz_no_such_term").is_empty());
        }
    }

    #[test_case(SheetKey::Mongo, "alice"; "mongo name")]
    #[test_case(SheetKey::Sql, "Index"; "sql mixed case")]
    #[test_case(SheetKey::Postgres, "user"; "postgres common word")]
    fn case_insensitive(key: SheetKey, query: &str) {
        let sheet = catalogue().get(key);
        let upper = filter_sheet(sheet, &query.to_uppercase());
        let lower = filter_sheet(sheet, &query.to_lowercase());
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test_case("alice"; "name")]
    #[test_case("select"; "keyword")]
    #[test_case("("; "punctuation")]
    #[test_case("\\d"; "backslash")]
    fn reapplying_a_query_changes_nothing(query: &str) {
        for (_, sheet) in catalogue().sheets() {
            let once = filter_sheet(sheet, query);
            assert_eq!(filter_sheet(&once, query), once);
        }
    }

    fn contains_folded(command: &Command, needle: &str) -> bool {
        command.title().to_ascii_lowercase().contains(needle)
            || command.code().to_ascii_lowercase().contains(needle)
    }

    #[test_case("age"; "substring of average")]
    #[test_case("JOIN"; "join keyword")]
    #[test_case("users "; "trailing space")]
    #[test_case(" from"; "leading space")]
    #[test_case("db "; "space after prefix")]
    fn keeps_exactly_the_matching_commands(raw: &str) {
        let needle = raw.to_ascii_lowercase();
        for (_, sheet) in catalogue().sheets() {
            let expected: Vec<_> = sheet
                .sections()
                .iter()
                .flat_map(|section| section.body().commands())
                .filter(|command| contains_folded(command, &needle))
                .map(Command::title)
                .collect();
            assert_eq!(titles(&filter_sheet(sheet, raw)), expected);
        }
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_needle() {
        let sql = catalogue().get(SheetKey::Sql);
        let padded = filter_sheet(sql, "users ");
        let bare = filter_sheet(sql, "users");

        assert!(!padded.is_empty());
        assert!(padded.command_count() < bare.command_count());
        assert!(
            padded
                .sections()
                .iter()
                .flat_map(|section| section.body().commands())
                .all(|command| contains_folded(command, "users "))
        );
        assert!(filter_sheet(catalogue().get(SheetKey::Mongo), "db ").is_empty());
    }

    #[test]
    fn never_leaves_empty_groups() {
        for (_, sheet) in catalogue().sheets() {
            for query in ["a", "select", "db.users", "rank", "@"] {
                for section in filter_sheet(sheet, query).sections() {
                    assert!(!section.body().is_empty());
                    if let SectionBody::SubSections(sub_sections) = section.body() {
                        assert!(sub_sections.iter().all(|sub| !sub.commands().is_empty()));
                    }
                }
            }
        }
    }

    #[test]
    fn sql_index_matches_title_and_code() {
        let filtered = filter_sheet(catalogue().get(SheetKey::Sql), "INDEX");
        let found = titles(&filtered);
        assert!(found.contains(&"Create an index"));
        assert!(found.contains(&"Drop an index"));

        let codes: Vec<_> = filtered
            .sections()
            .iter()
            .flat_map(|section| section.body().commands())
            .map(Command::code)
            .collect();
        assert!(codes.contains(&"CREATE INDEX idx_username ON users (username);"));
    }
}
