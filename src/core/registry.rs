//! Registry of console variables.
//!
//! Central storage for type-erased bindings, kept in name order so that
//! listings are deterministic.

use std::collections::BTreeMap;

use super::VarBinding;

/// Owning collection of all console variables, keyed by name.
///
/// `'a` is the lifetime of any storage borrowed by the bindings; a registry
/// holding only shared handles can be `VariableRegistry<'static>`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use bevy_var_console::core::{Binding, VariableRegistry};
///
/// let gravity = Cell::new(800.0f32);
/// let mut registry = VariableRegistry::new();
/// registry.add("sv_gravity", Box::new(Binding::new(&gravity)));
///
/// assert_eq!(registry.get("sv_gravity").map(|b| b.to_text()), Some("800".to_string()));
/// ```
#[derive(Default)]
pub struct VariableRegistry<'a> {
    entries: BTreeMap<Box<str>, Box<dyn VarBinding + 'a>>,
}

impl<'a> VariableRegistry<'a> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a binding under `name`.
    ///
    /// Returns `true` if the variable was newly registered, `false` if it replaced an
    /// existing entry. The replaced binding is dropped; the storage it pointed to is not
    /// touched. A warning is logged if a duplicate is detected.
    pub fn add(&mut self, name: impl Into<Box<str>>, binding: Box<dyn VarBinding + 'a>) -> bool {
        let name = name.into();
        let type_name = binding.type_name();
        let previous = self.entries.insert(name.clone(), binding);

        if previous.is_some() {
            bevy::log::warn!(
                "Console: Overwriting existing variable '{}' with new {} binding",
                name,
                type_name
            );
        } else {
            bevy::log::debug!("Console: Registered variable '{}' ({})", name, type_name);
        }

        previous.is_none()
    }

    /// Remove the binding registered under `name`.
    ///
    /// Returns `false` if there was no such variable.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.entries.remove(name).is_some();
        if removed {
            bevy::log::debug!("Console: Removed variable '{}'", name);
        }
        removed
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<&(dyn VarBinding + 'a)> {
        self.entries.get(name).map(|binding| binding.as_ref())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &(dyn VarBinding + 'a))> {
        self.entries
            .iter()
            .map(|(name, binding)| (name.as_ref(), binding.as_ref()))
    }

    /// Iterate over all variable names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| name.as_ref())
    }
}
