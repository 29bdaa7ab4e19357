use serde::Serialize;

use crate::domain::{Query, filter};

/// A single cheat-sheet entry: a short label plus the literal command text.
///
/// The title and the code are the only searchable parts of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    title: &'static str,
    code: &'static str,
}

impl Command {
    /// Creates a command from its label and literal text.
    #[must_use]
    pub const fn new(title: &'static str, code: &'static str) -> Self {
        Self { title, code }
    }

    /// Returns the label of the command.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the literal command text. May span several lines.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

/// A titled group of commands nested inside a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubSection {
    title: &'static str,
    commands: Vec<Command>,
}

impl SubSection {
    /// Creates a sub-section holding the given commands, in order.
    #[must_use]
    pub const fn new(title: &'static str, commands: Vec<Command>) -> Self {
        Self { title, commands }
    }

    /// Returns the display name of the sub-section.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the commands in display order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub(crate) const fn with_commands(&self, commands: Vec<Command>) -> Self {
        Self {
            title: self.title,
            commands,
        }
    }
}

/// The content of a [`Section`].
///
/// A section holds either a flat list of commands or a list of sub-sections.
/// An empty list stands for a section with no content at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionBody {
    /// Commands listed directly under the section.
    Commands(Vec<Command>),
    /// Commands grouped into named sub-sections.
    SubSections(Vec<SubSection>),
}

impl SectionBody {
    /// Returns `true` if the body holds no commands and no sub-sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Commands(commands) => commands.is_empty(),
            Self::SubSections(sub_sections) => sub_sections.is_empty(),
        }
    }

    /// Counts the commands in the body, including those inside sub-sections.
    #[must_use]
    pub fn command_count(&self) -> usize {
        match self {
            Self::Commands(commands) => commands.len(),
            Self::SubSections(sub_sections) => sub_sections
                .iter()
                .map(|sub_section| sub_section.commands.len())
                .sum(),
        }
    }

    /// Iterates over every command in the body in display order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        let (direct, nested) = match self {
            Self::Commands(commands) => (commands.as_slice(), [].as_slice()),
            Self::SubSections(sub_sections) => ([].as_slice(), sub_sections.as_slice()),
        };
        let nested = nested.iter().flat_map(|sub| sub.commands.iter());
        direct.iter().chain(nested)
    }
}

/// A titled top-level grouping within a [`Sheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    id: &'static str,
    title: &'static str,
    intro: &'static str,
    #[serde(flatten)]
    body: SectionBody,
}

impl Section {
    /// Creates a section whose commands are listed directly.
    #[must_use]
    pub const fn with_commands(
        id: &'static str,
        title: &'static str,
        intro: &'static str,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            id,
            title,
            intro,
            body: SectionBody::Commands(commands),
        }
    }

    /// Creates a section whose commands are grouped into sub-sections.
    #[must_use]
    pub const fn with_sub_sections(
        id: &'static str,
        title: &'static str,
        intro: &'static str,
        sub_sections: Vec<SubSection>,
    ) -> Self {
        Self {
            id,
            title,
            intro,
            body: SectionBody::SubSections(sub_sections),
        }
    }

    /// Returns the anchor identifier, unique within a sheet.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the display name of the section.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the descriptive text shown under the title.
    #[must_use]
    pub const fn intro(&self) -> &'static str {
        self.intro
    }

    /// Returns the content of the section.
    #[must_use]
    pub const fn body(&self) -> &SectionBody {
        &self.body
    }

    pub(crate) const fn with_body(&self, body: SectionBody) -> Self {
        Self {
            id: self.id,
            title: self.title,
            intro: self.intro,
            body,
        }
    }
}

/// One complete reference document: an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sheet {
    sections: Vec<Section>,
}

/// The result of filtering a [`Sheet`]. It has exactly the same shape.
pub type FilteredSheet = Sheet;

impl Sheet {
    /// Creates a sheet from sections in display order.
    #[must_use]
    pub const fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Returns the sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the sheet has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Counts every command in the sheet.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.body.command_count())
            .sum()
    }

    /// Looks up a section by its anchor identifier.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Yields `(id, title)` for each section, in display order.
    ///
    /// This is the navigation list for the sheet and is meant to be taken
    /// from the unfiltered sheet.
    pub fn outline(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.sections
            .iter()
            .map(|section| (section.id, section.title))
    }

    /// Returns the subset of this sheet matching `query`.
    ///
    /// See [`filter`](crate::domain::filter()).
    #[must_use]
    pub fn filter(&self, query: &Query) -> Self {
        filter(self, query)
    }
}

impl FromIterator<Section> for Sheet {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
