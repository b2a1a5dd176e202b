use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the four addressable sections of the page.
///
/// The [`id`](Section::id) doubles as the DOM `id` of the section element, so
/// navigating to a section is a matter of scrolling that element into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Every section, in document order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Text shown on the navigation control for this section.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no section is identified by {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// The identifier recorded by navigation.
///
/// Navigation accepts arbitrary identifiers: the four known sections, and
/// anything else, which is recorded verbatim even though nothing on the page
/// answers to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionId {
    Known(Section),
    Unknown(String),
}

impl SectionId {
    pub fn as_str(&self) -> &str {
        match self {
            SectionId::Known(section) => section.id(),
            SectionId::Unknown(id) => id,
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            SectionId::Known(section) => Some(*section),
            SectionId::Unknown(_) => None,
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::Known(Section::Hero)
    }
}

impl From<Section> for SectionId {
    fn from(section: Section) -> Self {
        SectionId::Known(section)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        id.parse::<Section>()
            .map(SectionId::Known)
            .unwrap_or_else(|UnknownSection(id)| SectionId::Unknown(id))
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        SectionId::from(id.as_str())
    }
}

impl PartialEq<Section> for SectionId {
    fn eq(&self, other: &Section) -> bool {
        self.section() == Some(*other)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
