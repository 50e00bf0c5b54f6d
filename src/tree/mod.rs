//! Settings node model.
//!
//! This module provides the entity hierarchy a settings tree is built
//! from:
//!
//! - Value-bearing leaves ([`Switch`], [`Slider`], [`TextField`]) keyed
//!   into storage
//! - Single-choice option groups ([`OptionsSection`], [`OptionsButton`])
//!   whose options share the group's key
//! - Structural containers ([`Section`], [`Screen`]) with ordered children
//!
//! Node kinds are closed sum types matched exhaustively; there is no
//! runtime type inspection. Every container supports both eager builder
//! closures and incremental `with`/`include` append, and both authoring
//! styles produce identical trees.
//!
//! ## Modules
//!
//! - [`item`] - Generic value item and the concrete leaf controls
//! - [`options`] - Single-choice options and their containers
//! - [`section`] - Sections and the section-child sum type
//! - [`screen`] - Screens and the screen-section sum type

/// Generic value item and the concrete leaf controls.
pub mod item;

/// Single-choice options and their containers.
pub mod options;

/// Screens and the screen-section sum type.
pub mod screen;

/// Sections and the section-child sum type.
pub mod section;

pub use item::{ChangeCallback, Item, Slider, Switch, TextField};
pub use options::{OptionItem, OptionsButton, OptionsSection};
pub use screen::{Screen, ScreenSection};
pub use section::{Section, SettingsEntry};
