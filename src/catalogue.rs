use std::sync::LazyLock;

use crate::domain::{ReferenceTable, Sheet, SheetKey, UnknownSheet};

mod mongo;
mod postgres;
mod reference;
mod sql;

static CATALOGUE: LazyLock<Catalogue> = LazyLock::new(Catalogue::builtin);

/// Returns the process-wide built-in catalogue.
#[must_use]
pub fn catalogue() -> &'static Catalogue {
    &CATALOGUE
}

/// Looks up a sheet in the built-in catalogue.
#[must_use]
pub fn get_sheet(key: SheetKey) -> &'static Sheet {
    catalogue().get(key)
}

/// The complete, immutable set of sheets plus the sample tables they refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    mongo: Sheet,
    sql: Sheet,
    postgres: Sheet,
    reference_tables: Vec<ReferenceTable>,
}

impl Catalogue {
    /// Assembles a catalogue from one sheet per key.
    #[must_use]
    pub const fn new(
        mongo: Sheet,
        sql: Sheet,
        postgres: Sheet,
        reference_tables: Vec<ReferenceTable>,
    ) -> Self {
        Self {
            mongo,
            sql,
            postgres,
            reference_tables,
        }
    }

    /// Builds the bundled catalogue.
    #[must_use]
    pub fn builtin() -> Self {
        let catalogue = Self::new(
            mongo::sheet(),
            sql::sheet(),
            postgres::sheet(),
            reference::tables(),
        );
        tracing::debug!(
            sheets = SheetKey::ALL.len(),
            commands = catalogue
                .sheets()
                .map(|(_, sheet)| sheet.command_count())
                .sum::<usize>(),
            "built catalogue"
        );
        catalogue
    }

    /// Returns the sheet for `key`.
    #[must_use]
    pub const fn get(&self, key: SheetKey) -> &Sheet {
        match key {
            SheetKey::Mongo => &self.mongo,
            SheetKey::Sql => &self.sql,
            SheetKey::Postgres => &self.postgres,
        }
    }

    /// Returns the sheet named by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSheet`] if `name` is not one of the sheet keys.
    pub fn get_by_name(&self, name: &str) -> Result<&Sheet, UnknownSheet> {
        let key: SheetKey = name.parse()?;
        Ok(self.get(key))
    }

    /// Iterates over all sheets in catalogue order.
    pub fn sheets(&self) -> impl Iterator<Item = (SheetKey, &Sheet)> {
        SheetKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    /// Returns the sample tables the commands operate on.
    #[must_use]
    pub fn reference_tables(&self) -> &[ReferenceTable] {
        &self.reference_tables
    }
}
