//! Storage binding walk over a settings tree.
//!
//! Binding associates one storage port with every value-bearing leaf of a
//! tree. It is a pure assignment: idempotent, order-insensitive, and
//! exhaustive over arbitrary nesting (screens inside sections inside
//! screens). A leaf the walk does not reach stays unbound and silently
//! keeps default-value semantics, so the walk must reach everything.
//!
//! [`SettingsRoot`](crate::root::SettingsRoot) runs this walk exactly once
//! at construction. Structural edits afterwards are NOT rebound
//! automatically; call [`bind`] (or `SettingsRoot::rebind`) manually.

use crate::storage::SharedStorage;
use crate::tree::screen::{Screen, ScreenSection};
use crate::tree::section::{Section, SettingsEntry};

/// Binds `storage` to every value-bearing leaf reachable from `screen`.
///
/// Returns the number of leaves bound.
pub fn bind(screen: &mut Screen, storage: &SharedStorage) -> usize {
    let bound = bind_screen(screen, storage);
    debug!("bound storage to {bound} value nodes under {:?}", screen.title);
    bound
}

fn bind_screen(screen: &mut Screen, storage: &SharedStorage) -> usize {
    let mut bound = 0;
    for section in &mut screen.sections {
        bound += match section {
            ScreenSection::Section(section) => bind_section(section, storage),
            ScreenSection::Options(options) => {
                let mut n = 0;
                for option in &mut options.options {
                    option.bind(storage);
                    n += 1;
                }
                n
            }
        };
    }
    bound
}

fn bind_section(section: &mut Section, storage: &SharedStorage) -> usize {
    let mut bound = 0;
    for entry in &mut section.items {
        match entry {
            SettingsEntry::Switch(item) => {
                item.bind(storage);
                bound += 1;
            }
            SettingsEntry::Slider(slider) => {
                slider.item.bind(storage);
                bound += 1;
            }
            SettingsEntry::TextField(field) => {
                field.item.bind(storage);
                bound += 1;
            }
            SettingsEntry::OptionsButton(button) => {
                for option in &mut button.options {
                    option.bind(storage);
                    bound += 1;
                }
            }
            SettingsEntry::Screen(nested) => {
                bound += bind_screen(nested, storage);
            }
        }
    }
    bound
}
