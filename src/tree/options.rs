use std::fmt;
use std::rc::Rc;

use crate::storage::SharedStorage;
use crate::tree::item::ChangeCallback;

/// One entry of a single-choice group.
///
/// An option has no storage key of its own. Appending it to an
/// [`OptionsSection`] or [`OptionsButton`] records the container's key,
/// and every value operation goes through that key: `selected()` is the
/// derived equality `value == option_id`, and [`select`](Self::select)
/// writes `option_id` under the container key. Because all options of a
/// group read the same slot, at most one of them is selected at a time.
#[derive(Clone)]
pub struct OptionItem {
    /// Display title.
    pub title: String,
    /// Opaque icon resource identifier; not interpreted by the core.
    pub icon: Option<String>,
    /// Value written under the container key when this option is selected.
    pub option_id: i64,
    /// Value assumed while the container key is absent from storage.
    pub default_value: i64,
    /// Whether selecting this option returns to the presenting view.
    /// Forced on by [`OptionsButton`]; recorded for the UI collaborator.
    pub navigate_back: bool,
    value_changed: Option<ChangeCallback<i64>>,
    container_key: Option<String>,
    storage: Option<SharedStorage>,
}

impl OptionItem {
    /// Creates a detached option. It becomes usable once appended to a
    /// container.
    pub fn new(title: impl Into<String>, option_id: i64) -> Self {
        Self {
            title: title.into(),
            icon: None,
            option_id,
            default_value: 0,
            navigate_back: false,
            value_changed: None,
            container_key: None,
            storage: None,
        }
    }

    /// Overrides the value assumed while nothing is stored.
    pub fn with_default(mut self, default_value: i64) -> Self {
        self.default_value = default_value;
        self
    }

    /// Attaches an icon resource identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Registers the change callback.
    pub fn on_change(mut self, callback: impl Fn(&str, &i64) + 'static) -> Self {
        self.value_changed = Some(Rc::new(callback));
        self
    }

    /// Key of the owning container, once appended.
    pub fn container_key(&self) -> Option<&str> {
        self.container_key.as_deref()
    }

    /// The effective storage key. A detached option has none; asking for
    /// it is a construction-time programmer error.
    fn effective_key(&self) -> &str {
        match &self.container_key {
            Some(key) => key,
            None => panic!(
                "option {:?} is not attached to an options container",
                self.title
            ),
        }
    }

    /// Current group value: `storage[container_key]`, or the default.
    pub fn value(&self) -> i64 {
        match &self.storage {
            Some(storage) => storage
                .borrow()
                .get_int(self.effective_key())
                .unwrap_or(self.default_value),
            None => self.default_value,
        }
    }

    /// Writes `value` under the container key, then fires the callback
    /// with `(container_key, value)`.
    pub fn set_value(&mut self, value: i64) {
        if let Some(storage) = &self.storage {
            storage.borrow_mut().set_int(self.effective_key(), value);
        }
        if let Some(callback) = &self.value_changed {
            callback(self.effective_key(), &value);
        }
    }

    /// Whether the group value currently equals this option's id.
    pub fn selected(&self) -> bool {
        self.value() == self.option_id
    }

    /// Selects this option: writes `option_id` under the container key.
    /// Siblings become deselected implicitly, since they read the same
    /// slot.
    pub fn select(&mut self) {
        self.set_value(self.option_id);
    }

    /// Whether a storage port has been bound.
    pub fn is_bound(&self) -> bool {
        self.storage.is_some()
    }

    pub(crate) fn attach(&mut self, container_key: &str) {
        self.container_key = Some(container_key.to_owned());
    }

    pub(crate) fn bind(&mut self, storage: &SharedStorage) {
        self.storage = Some(Rc::clone(storage));
    }
}

impl fmt::Debug for OptionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionItem")
            .field("title", &self.title)
            .field("option_id", &self.option_id)
            .field("container_key", &self.container_key)
            .field("navigate_back", &self.navigate_back)
            .finish()
    }
}

/// A section whose rows form one single-choice group.
///
/// Every appended option is back-linked to this section's key at append
/// time.
#[derive(Debug, Clone)]
pub struct OptionsSection {
    /// Display title.
    pub title: String,
    /// Storage key shared by all options of the group.
    pub key: String,
    /// Optional footer text below the section.
    pub footer: Option<String>,
    /// The options, in display order.
    pub options: Vec<OptionItem>,
}

impl OptionsSection {
    /// Creates an empty group section.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
            footer: None,
            options: Vec::new(),
        }
    }

    /// Creates a group section from a builder closure, evaluated eagerly
    /// exactly once.
    pub fn build(
        key: impl Into<String>,
        title: impl Into<String>,
        options: impl FnOnce() -> Vec<OptionItem>,
    ) -> Self {
        Self::from_options(key, title, options())
    }

    /// Creates a group section from materialized options.
    pub fn from_options(
        key: impl Into<String>,
        title: impl Into<String>,
        options: Vec<OptionItem>,
    ) -> Self {
        let mut section = Self::new(key, title);
        for option in options {
            section = section.with(option);
        }
        section
    }

    /// Appends an option, back-linking it to this section's key.
    pub fn with(mut self, mut option: OptionItem) -> Self {
        option.attach(&self.key);
        self.options.push(option);
        self
    }

    /// Sets the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// A row that opens a single-choice group on its own screen.
///
/// Selecting an option of a button-driven group implies returning to the
/// presenting view, so every appended option gets `navigate_back` forced
/// on.
#[derive(Debug, Clone)]
pub struct OptionsButton {
    /// Display title.
    pub title: String,
    /// Opaque icon resource identifier; not interpreted by the core.
    pub icon: Option<String>,
    /// Storage key shared by all options of the group.
    pub key: String,
    /// The options, in display order.
    pub options: Vec<OptionItem>,
}

impl OptionsButton {
    /// Creates an empty options button.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            key: key.into(),
            options: Vec::new(),
        }
    }

    /// Creates an options button from a builder closure, evaluated
    /// eagerly exactly once.
    pub fn build(
        key: impl Into<String>,
        title: impl Into<String>,
        options: impl FnOnce() -> Vec<OptionItem>,
    ) -> Self {
        Self::from_options(key, title, options())
    }

    /// Creates an options button from materialized options.
    pub fn from_options(
        key: impl Into<String>,
        title: impl Into<String>,
        options: Vec<OptionItem>,
    ) -> Self {
        let mut button = Self::new(key, title);
        for option in options {
            button = button.with(option);
        }
        button
    }

    /// Appends an option, back-linking it and forcing `navigate_back`.
    pub fn with(mut self, mut option: OptionItem) -> Self {
        option.attach(&self.key);
        option.navigate_back = true;
        self.options.push(option);
        self
    }

    /// Attaches an icon resource identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Title of the currently selected option, or an empty string when
    /// nothing matches the stored value.
    pub fn selected_option_title(&self) -> String {
        self.options
            .iter()
            .find(|option| option.selected())
            .map(|option| option.title.clone())
            .unwrap_or_default()
    }
}
