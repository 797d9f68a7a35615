use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// A resolved option value: either a boolean toggle or an explicit string.
///
/// `Flag(false)` and the empty string are "falsy"; help rendering shows them
/// as the literal `off`. The untagged serde representation keeps the saved
/// settings blob a plain JSON object of booleans and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptValue {
    Flag(bool),
    Text(String),
}

impl OptValue {
    /// Whether this value counts as "set" for help rendering and the
    /// sample command line.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptValue::Flag(b) => *b,
            OptValue::Text(s) => !s.is_empty(),
        }
    }

    /// Rendering used in help output: `off` for falsy values, `on` for a
    /// set flag, the string itself otherwise.
    pub fn display(&self) -> &str {
        match self {
            OptValue::Flag(false) => "off",
            OptValue::Flag(true) => "on",
            OptValue::Text(s) if s.is_empty() => "off",
            OptValue::Text(s) => s,
        }
    }

    /// The string payload, if this is a non-flag value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptValue::Text(s) => Some(s),
            OptValue::Flag(_) => None,
        }
    }
}

impl From<bool> for OptValue {
    fn from(b: bool) -> Self {
        OptValue::Flag(b)
    }
}

impl From<&str> for OptValue {
    fn from(s: &str) -> Self {
        OptValue::Text(s.to_string())
    }
}

impl From<String> for OptValue {
    fn from(s: String) -> Self {
        OptValue::Text(s)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: OptValue,
    persist: bool,
}

/// The single source of truth for known option names, their current values,
/// and their persistence eligibility.
///
/// Iteration order is registration order, which only matters for
/// deterministic help rendering. Two built-ins, `debug` and `help`, exist
/// before any caller registration.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    order: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            order: Vec::new(),
            entries: HashMap::new(),
        };
        registry.register("debug", false, false);
        registry.register("help", false, false);
        registry
    }

    /// Adds an option, or overwrites its default and persist flag if the
    /// name is already present. Last registration wins; the name keeps its
    /// original position in the help table.
    pub fn register(&mut self, name: &str, default: impl Into<OptValue>, persist: bool) {
        let entry = Entry {
            value: default.into(),
            persist,
        };
        if self.entries.insert(name.to_string(), entry).is_none() {
            self.order.push(name.to_string());
        }
    }

    /// Current value of `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&OptValue> {
        self.entries.get(name).map(|e| &e.value)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Mutates the value of an already-registered option.
    pub fn set(&mut self, name: &str, value: impl Into<OptValue>) -> Result<(), CliError> {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.value = value.into();
                Ok(())
            }
            None => Err(CliError::UnknownFlag(name.to_string())),
        }
    }

    /// Sets `name` to `value`, introducing the entry if it was never
    /// registered. Used by keyed (`--name=value`) parsing and by settings
    /// merging, both of which deliberately accept unknown names. Entries
    /// introduced here are persist-eligible.
    pub fn assign(&mut self, name: &str, value: impl Into<OptValue>) {
        match self.entries.get_mut(name) {
            Some(entry) => entry.value = value.into(),
            None => self.register(name, value, true),
        }
    }

    /// Whether `name` is written by the settings store.
    pub fn persists(&self, name: &str) -> bool {
        self.entries.get(name).map(|e| e.persist).unwrap_or(false)
    }

    /// Option names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }
}
