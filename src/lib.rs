//! Database Command Cheat Sheets
//!
//! A fixed catalogue of `MongoDB`, SQL and `PostgreSQL` commands, and a pure
//! engine that narrows a sheet down to the commands matching a search string.

pub mod domain;
pub use domain::{
    ColorChoice, Command, Config, FilteredSheet, Query, Section, SectionBody, Selection, Selector,
    Sheet, SheetKey, SubSection, UnknownSheet, filter, filter_sheet,
};

/// The built-in sheets and reference tables.
pub mod catalogue;
pub use catalogue::{Catalogue, catalogue, get_sheet};
