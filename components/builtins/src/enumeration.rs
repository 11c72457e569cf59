//! Property key collection for for-each-key enumeration.
//!
//! Enumeration order must match first-insertion order, but keys arrive from
//! multiple origins (own properties, then the prototype chain) and may
//! repeat; the list drops duplicates while keeping membership checks O(1).

use std::collections::HashSet;

/// An ordered, duplicate-free list of property names.
///
/// Built once per enumeration statement and then iterated as a snapshot;
/// mutations to the underlying object during iteration are not reflected.
///
/// # Examples
///
/// ```
/// use builtins::PropertyNameList;
///
/// let mut keys = PropertyNameList::new();
/// keys.add("a");
/// keys.add("b");
/// keys.add("a"); // duplicate from the prototype chain, dropped
///
/// assert_eq!(keys.names(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyNameList {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl PropertyNameList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property name unless it was already added.
    ///
    /// Idempotent: the first occurrence wins its position, later
    /// occurrences are silently dropped.
    pub fn add(&mut self, name: &str) {
        if !self.seen.contains(name) {
            self.seen.insert(name.to_string());
            self.names.push(name.to_string());
        }
    }

    /// Append an array index key in its decimal string form.
    pub fn add_index(&mut self, index: u32) {
        self.add(&index.to_string());
    }

    /// The collected names in first-insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` has been added.
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of distinct names collected.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names have been collected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate the names in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a PropertyNameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl IntoIterator for PropertyNameList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
