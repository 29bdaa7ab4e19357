use tracing::instrument;

use crate::{
    Catalogue,
    domain::{FilteredSheet, Query, SheetKey},
};

/// Tracks the sheet and query a viewer is looking at.
///
/// Every change bumps a generation counter. Each [`Selection`] is stamped with
/// the generation that produced it, so a caller can tell whether a result is
/// still the latest one and drop it otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    sheet: SheetKey,
    query: String,
    generation: u64,
}

impl Selector {
    /// Starts on `sheet` with an empty query.
    #[must_use]
    pub const fn new(sheet: SheetKey) -> Self {
        Self {
            sheet,
            query: String::new(),
            generation: 0,
        }
    }

    /// Returns the current sheet.
    #[must_use]
    pub const fn sheet(&self) -> SheetKey {
        self.sheet
    }

    /// Returns the current raw query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Switches to `sheet` and clears the query.
    ///
    /// The query is cleared even if `sheet` is already selected.
    pub fn switch_sheet(&mut self, sheet: SheetKey) {
        tracing::debug!(from = %self.sheet, to = %sheet, "switching sheet");
        self.sheet = sheet;
        self.query.clear();
        self.bump();
    }

    /// Replaces the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.bump();
    }

    /// Computes the visible part of the current sheet.
    #[must_use]
    #[instrument(level = "debug", skip(self, catalogue), fields(sheet = %self.sheet, query = %self.query))]
    pub fn select(&self, catalogue: &Catalogue) -> Selection {
        let query = Query::parse(&self.query);
        Selection {
            sheet_key: self.sheet,
            sheet: catalogue.get(self.sheet).filter(&query),
            generation: self.generation,
        }
    }

    /// Returns `true` if `selection` reflects the current sheet and query.
    #[must_use]
    pub const fn is_current(&self, selection: &Selection) -> bool {
        selection.generation == self.generation
    }

    const fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

/// A filtered sheet, stamped with the [`Selector`] generation that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    sheet_key: SheetKey,
    sheet: FilteredSheet,
    generation: u64,
}

impl Selection {
    /// Returns the key of the sheet this selection was taken from.
    #[must_use]
    pub const fn sheet_key(&self) -> SheetKey {
        self.sheet_key
    }

    /// Returns the visible sections.
    #[must_use]
    pub const fn sheet(&self) -> &FilteredSheet {
        &self.sheet
    }

    /// Returns the generation this selection was computed at.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheet.is_empty()
    }
}
