use std::{collections::HashMap, fmt};

use crate::object::Object;

/// The variable store: case-folded identifier to current value.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Object> {
        self.store.get(key).copied()
    }

    pub fn set(&mut self, key: &str, value: Object) {
        self.store.insert(key.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Object)> {
        let mut bindings: Vec<(&str, Object)> = self
            .store
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings.into_iter()
    }
}

impl FromIterator<(String, Object)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        Self {
            store: iter
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(key, value)| format!("{} = {}", key, value))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
