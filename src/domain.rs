//! Domain models for the cheat sheets.
//!
//! This module contains the sheet data types, the closed set of sheet keys,
//! the query and selection engine, and viewer configuration.

/// Sheets, sections, sub-sections and commands.
pub mod sheet;
pub use sheet::{Command, FilteredSheet, Section, SectionBody, Sheet, SubSection};

mod sheet_key;
pub use sheet_key::{SheetKey, UnknownSheet};

mod query;
pub use query::Query;

mod filter;
pub use filter::{filter, filter_sheet};

mod selector;
pub use selector::{Selection, Selector};

mod reference;
pub use reference::ReferenceTable;

/// Viewer configuration and its on-disk format.
pub mod config;
pub use config::{ColorChoice, Config};
