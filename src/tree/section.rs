use crate::tree::item::{Slider, Switch, TextField};
use crate::tree::options::OptionsButton;
use crate::tree::screen::Screen;

/// A row a plain section may hold.
///
/// The closed set of row kinds a renderer dispatches over. Bare options
/// are deliberately absent: an option always lives inside an
/// [`OptionsSection`](crate::tree::options::OptionsSection) or an
/// [`OptionsButton`], which is what guarantees it a container.
#[derive(Debug, Clone)]
pub enum SettingsEntry {
    /// Boolean toggle row.
    Switch(Switch),
    /// Float slider row.
    Slider(Slider),
    /// Free-text row.
    TextField(TextField),
    /// Row opening a single-choice group on its own screen.
    OptionsButton(OptionsButton),
    /// Row navigating to a nested screen.
    Screen(Screen),
}

impl SettingsEntry {
    /// Display title of the row.
    pub fn title(&self) -> &str {
        match self {
            SettingsEntry::Switch(item) => &item.title,
            SettingsEntry::Slider(slider) => &slider.item.title,
            SettingsEntry::TextField(field) => &field.item.title,
            SettingsEntry::OptionsButton(button) => &button.title,
            SettingsEntry::Screen(screen) => &screen.title,
        }
    }

    /// The row as a switch, if it is one.
    pub fn as_switch(&self) -> Option<&Switch> {
        match self {
            SettingsEntry::Switch(item) => Some(item),
            _ => None,
        }
    }

    /// The row as a mutable switch, if it is one.
    pub fn as_switch_mut(&mut self) -> Option<&mut Switch> {
        match self {
            SettingsEntry::Switch(item) => Some(item),
            _ => None,
        }
    }

    /// The row as a slider, if it is one.
    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            SettingsEntry::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// The row as a mutable slider, if it is one.
    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match self {
            SettingsEntry::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// The row as a text field, if it is one.
    pub fn as_text_field(&self) -> Option<&TextField> {
        match self {
            SettingsEntry::TextField(field) => Some(field),
            _ => None,
        }
    }

    /// The row as a mutable text field, if it is one.
    pub fn as_text_field_mut(&mut self) -> Option<&mut TextField> {
        match self {
            SettingsEntry::TextField(field) => Some(field),
            _ => None,
        }
    }

    /// The row as an options button, if it is one.
    pub fn as_options_button(&self) -> Option<&OptionsButton> {
        match self {
            SettingsEntry::OptionsButton(button) => Some(button),
            _ => None,
        }
    }

    /// The row as a mutable options button, if it is one.
    pub fn as_options_button_mut(&mut self) -> Option<&mut OptionsButton> {
        match self {
            SettingsEntry::OptionsButton(button) => Some(button),
            _ => None,
        }
    }

    /// The row as a nested screen, if it is one.
    pub fn as_screen(&self) -> Option<&Screen> {
        match self {
            SettingsEntry::Screen(screen) => Some(screen),
            _ => None,
        }
    }

    /// The row as a mutable nested screen, if it is one.
    pub fn as_screen_mut(&mut self) -> Option<&mut Screen> {
        match self {
            SettingsEntry::Screen(screen) => Some(screen),
            _ => None,
        }
    }
}

impl From<Switch> for SettingsEntry {
    fn from(item: Switch) -> Self {
        SettingsEntry::Switch(item)
    }
}

impl From<Slider> for SettingsEntry {
    fn from(slider: Slider) -> Self {
        SettingsEntry::Slider(slider)
    }
}

impl From<TextField> for SettingsEntry {
    fn from(field: TextField) -> Self {
        SettingsEntry::TextField(field)
    }
}

impl From<OptionsButton> for SettingsEntry {
    fn from(button: OptionsButton) -> Self {
        SettingsEntry::OptionsButton(button)
    }
}

impl From<Screen> for SettingsEntry {
    fn from(screen: Screen) -> Self {
        SettingsEntry::Screen(screen)
    }
}

/// An ordered sequence of mixed rows under one heading.
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Display title.
    pub title: String,
    /// Optional footer text below the section.
    pub footer: Option<String>,
    /// The rows, in display order.
    pub items: Vec<SettingsEntry>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            footer: None,
            items: Vec::new(),
        }
    }

    /// Creates a section from a builder closure, evaluated eagerly
    /// exactly once.
    pub fn build(title: impl Into<String>, items: impl FnOnce() -> Vec<SettingsEntry>) -> Self {
        Self::from_items(title, items())
    }

    /// Creates a section from materialized rows.
    pub fn from_items(title: impl Into<String>, items: Vec<SettingsEntry>) -> Self {
        Self {
            title: title.into(),
            footer: None,
            items,
        }
    }

    /// Appends a row.
    pub fn with(mut self, item: impl Into<SettingsEntry>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Sets the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}
