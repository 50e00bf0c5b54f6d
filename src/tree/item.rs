use std::fmt;
use std::rc::Rc;

use crate::storage::{SharedStorage, StorageValue};

/// Callback invoked after a successful value write, with the effective
/// storage key and the new value.
pub type ChangeCallback<T> = Rc<dyn Fn(&str, &T)>;

/// A value-bearing leaf bound to one storage key.
///
/// The value is never stored in the node itself: reads return
/// `storage[key]` falling back to `default_value`, writes go straight to
/// storage and then fire the change callback. Before binding, reads
/// return the default and writes are accepted but lost.
#[derive(Clone)]
pub struct Item<T: StorageValue> {
    /// Display title.
    pub title: String,
    /// Opaque icon resource identifier; not interpreted by the core.
    pub icon: Option<String>,
    /// Storage lookup key.
    pub key: String,
    /// Value returned while the key is absent from storage.
    pub default_value: T,
    value_changed: Option<ChangeCallback<T>>,
    storage: Option<SharedStorage>,
}

impl<T: StorageValue> Item<T> {
    /// Creates an item with the given key, title and default value.
    pub fn new(key: impl Into<String>, title: impl Into<String>, default_value: T) -> Self {
        Self {
            title: title.into(),
            icon: None,
            key: key.into(),
            default_value,
            value_changed: None,
            storage: None,
        }
    }

    /// Attaches an icon resource identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Registers the change callback.
    pub fn on_change(mut self, callback: impl Fn(&str, &T) + 'static) -> Self {
        self.value_changed = Some(Rc::new(callback));
        self
    }

    /// Current value: `storage[key]`, or the default when the key is
    /// absent or no storage is bound. Never fires the callback.
    pub fn value(&self) -> T {
        match &self.storage {
            Some(storage) => T::load(&*storage.borrow(), &self.key)
                .unwrap_or_else(|| self.default_value.clone()),
            None => self.default_value.clone(),
        }
    }

    /// Writes `value` through to storage, then fires the callback with
    /// `(key, value)`. Without bound storage the write is lost.
    pub fn set_value(&mut self, value: T) {
        if let Some(storage) = &self.storage {
            T::store(&mut *storage.borrow_mut(), &self.key, value.clone());
        }
        if let Some(callback) = &self.value_changed {
            callback(&self.key, &value);
        }
    }

    /// Whether a storage port has been bound.
    pub fn is_bound(&self) -> bool {
        self.storage.is_some()
    }

    pub(crate) fn bind(&mut self, storage: &SharedStorage) {
        self.storage = Some(Rc::clone(storage));
    }
}

impl<T: StorageValue + fmt::Debug> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("title", &self.title)
            .field("key", &self.key)
            .field("default_value", &self.default_value)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Boolean toggle control.
pub type Switch = Item<bool>;

/// Float control with a caller-supplied range.
///
/// The range is display metadata only: it is not validated and not
/// clamped, and an inverted range is legal.
#[derive(Debug, Clone)]
pub struct Slider {
    /// The underlying float item.
    pub item: Item<f64>,
    /// Lower bound shown by the renderer.
    pub minimum_value: f64,
    /// Upper bound shown by the renderer.
    pub maximum_value: f64,
    /// Opaque icon shown at the lower bound.
    pub minimum_value_icon: Option<String>,
    /// Opaque icon shown at the upper bound.
    pub maximum_value_icon: Option<String>,
}

impl Slider {
    /// Creates a slider with the default 0..100 range.
    pub fn new(key: impl Into<String>, title: impl Into<String>, default_value: f64) -> Self {
        Self {
            item: Item::new(key, title, default_value),
            minimum_value: 0.0,
            maximum_value: 100.0,
            minimum_value_icon: None,
            maximum_value_icon: None,
        }
    }

    /// Overrides the displayed range.
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        self
    }

    /// Attaches icons for the range bounds.
    pub fn with_range_icons(
        mut self,
        minimum: impl Into<String>,
        maximum: impl Into<String>,
    ) -> Self {
        self.minimum_value_icon = Some(minimum.into());
        self.maximum_value_icon = Some(maximum.into());
        self
    }

    /// Attaches an icon resource identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.item = self.item.with_icon(icon);
        self
    }

    /// Registers the change callback.
    pub fn on_change(mut self, callback: impl Fn(&str, &f64) + 'static) -> Self {
        self.item = self.item.on_change(callback);
        self
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.item.value()
    }

    /// Writes the value through to storage.
    pub fn set_value(&mut self, value: f64) {
        self.item.set_value(value);
    }
}

/// Free-text control.
#[derive(Debug, Clone)]
pub struct TextField {
    /// The underlying string item.
    pub item: Item<String>,
    /// Display hint asking the renderer to mask input. Not a security
    /// control: the stored value is plain text.
    pub secure_text_entry: bool,
}

impl TextField {
    /// Creates a text field.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            item: Item::new(key, title, default_value.into()),
            secure_text_entry: false,
        }
    }

    /// Marks the field as masked input.
    pub fn secure(mut self) -> Self {
        self.secure_text_entry = true;
        self
    }

    /// Attaches an icon resource identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.item = self.item.with_icon(icon);
        self
    }

    /// Registers the change callback.
    pub fn on_change(mut self, callback: impl Fn(&str, &String) + 'static) -> Self {
        self.item = self.item.on_change(callback);
        self
    }

    /// Current value.
    pub fn value(&self) -> String {
        self.item.value()
    }

    /// Writes the value through to storage.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.item.set_value(value.into());
    }
}
