use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifies one of the sheets in the catalogue.
///
/// The set of sheets is closed. Parsing is the only way to name a sheet that
/// does not exist, and it fails with [`UnknownSheet`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SheetKey {
    /// The `MongoDB` shell sheet.
    #[default]
    Mongo,
    /// The generic SQL sheet.
    Sql,
    /// The `PostgreSQL` sheet.
    Postgres,
}

impl SheetKey {
    /// Every sheet key, in catalogue order.
    pub const ALL: [Self; 3] = [Self::Mongo, Self::Sql, Self::Postgres];

    /// Returns the canonical lowercase key, as accepted by [`FromStr`].
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Sql => "sql",
            Self::Postgres => "postgres",
        }
    }

    /// Returns the human-readable name of the sheet.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mongo => "MongoDB",
            Self::Sql => "SQL",
            Self::Postgres => "PostgreSQL",
        }
    }
}

impl fmt::Display for SheetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for SheetKey {
    type Err = UnknownSheet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.key() == normalized)
            .ok_or_else(|| UnknownSheet(s.to_string()))
    }
}

impl TryFrom<&str> for SheetKey {
    type Error = UnknownSheet;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// Error returned when a sheet key is outside the fixed set of sheets.
///
/// This indicates a caller bug rather than a recoverable condition.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sheet '{0}': expected one of mongo, sql, postgres")]
pub struct UnknownSheet(String);

impl UnknownSheet {
    /// Returns the key that failed to resolve.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("mongo", SheetKey::Mongo; "mongo")]
    #[test_case("sql", SheetKey::Sql; "sql")]
    #[test_case("postgres", SheetKey::Postgres; "postgres")]
    #[test_case("SQL", SheetKey::Sql; "uppercase")]
    #[test_case("  Postgres ", SheetKey::Postgres; "padded mixed case")]
    fn parses_known_keys(input: &str, expected: SheetKey) {
        assert_eq!(input.parse::<SheetKey>().unwrap(), expected);
    }

    #[test_case("mysql"; "other dialect")]
    #[test_case(""; "empty")]
    #[test_case("postgresql"; "display name is not a key")]
    fn rejects_unknown_keys(input: &str) {
        let error = SheetKey::try_from(input).unwrap_err();
        assert_eq!(error.key(), input);
    }

    #[test]
    fn error_message_lists_valid_keys() {
        let error = "oracle".parse::<SheetKey>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown sheet 'oracle': expected one of mongo, sql, postgres"
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for key in SheetKey::ALL {
            assert_eq!(key.to_string().parse::<SheetKey>(), Ok(key));
        }
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:<6}|", SheetKey::Sql), "sql   |");
    }

    #[test]
    fn default_is_mongo() {
        assert_eq!(SheetKey::default(), SheetKey::Mongo);
        assert_eq!(SheetKey::default().name(), "MongoDB");
    }
}
