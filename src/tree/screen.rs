use crate::tree::options::OptionsSection;
use crate::tree::section::Section;

/// A section slot of a screen: either a plain section of mixed rows, or
/// a whole single-choice group.
#[derive(Debug, Clone)]
pub enum ScreenSection {
    /// Plain section of mixed rows.
    Section(Section),
    /// Single-choice group rendered as a section.
    Options(OptionsSection),
}

impl ScreenSection {
    /// Display title of the section.
    pub fn title(&self) -> &str {
        match self {
            ScreenSection::Section(section) => &section.title,
            ScreenSection::Options(options) => &options.title,
        }
    }

    /// The slot as a plain section, if it is one.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            ScreenSection::Section(section) => Some(section),
            _ => None,
        }
    }

    /// The slot as a mutable plain section, if it is one.
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            ScreenSection::Section(section) => Some(section),
            _ => None,
        }
    }

    /// The slot as a single-choice group, if it is one.
    pub fn as_options(&self) -> Option<&OptionsSection> {
        match self {
            ScreenSection::Options(options) => Some(options),
            _ => None,
        }
    }

    /// The slot as a mutable single-choice group, if it is one.
    pub fn as_options_mut(&mut self) -> Option<&mut OptionsSection> {
        match self {
            ScreenSection::Options(options) => Some(options),
            _ => None,
        }
    }
}

impl From<Section> for ScreenSection {
    fn from(section: Section) -> Self {
        ScreenSection::Section(section)
    }
}

impl From<OptionsSection> for ScreenSection {
    fn from(options: OptionsSection) -> Self {
        ScreenSection::Options(options)
    }
}

/// A navigable grouping of sections, one level above [`Section`].
///
/// Screens nest: a section row may itself be a screen, to arbitrary
/// depth.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    /// Display title.
    pub title: String,
    /// Opaque icon resource identifier; not interpreted by the core.
    pub icon: Option<String>,
    /// The sections, in display order.
    pub sections: Vec<ScreenSection>,
}

impl Screen {
    /// Creates an empty screen.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            sections: Vec::new(),
        }
    }

    /// Creates a screen from a builder closure, evaluated eagerly exactly
    /// once.
    pub fn build(title: impl Into<String>, sections: impl FnOnce() -> Vec<ScreenSection>) -> Self {
        Self::from_sections(title, sections())
    }

    /// Creates a screen from materialized sections.
    pub fn from_sections(title: impl Into<String>, sections: Vec<ScreenSection>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            sections,
        }
    }

    /// Appends a section.
    pub fn include(mut self, section: impl Into<ScreenSection>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Attaches an icon resource identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
