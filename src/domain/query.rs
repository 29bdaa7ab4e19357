use std::fmt;

use non_empty_string::NonEmptyString;

use crate::domain::Command;

/// A normalized search string.
///
/// Raw input is ASCII lower-cased and otherwise kept as typed, surrounding
/// whitespace included. Blank input produces the empty query, which matches
/// every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Option<NonEmptyString>);

impl Query {
    /// Normalizes raw user input into a query. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::all();
        }
        Self(NonEmptyString::new(raw.to_ascii_lowercase()).ok())
    }

    /// The query that matches everything.
    #[must_use]
    pub const fn all() -> Self {
        Self(None)
    }

    /// Returns `true` if this query applies no filter.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the folded search text, if any.
    #[must_use]
    pub fn needle(&self) -> Option<&str> {
        self.0.as_ref().map(NonEmptyString::as_str)
    }

    /// Checks whether `command` is visible under this query.
    ///
    /// A command matches if the needle occurs anywhere in its folded title or
    /// its folded code.
    #[must_use]
    pub fn matches(&self, command: &Command) -> bool {
        self.needle().is_none_or(|needle| {
            command.title().to_ascii_lowercase().contains(needle)
                || command.code().to_ascii_lowercase().contains(needle)
        })
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.needle().unwrap_or_default())
    }
}
