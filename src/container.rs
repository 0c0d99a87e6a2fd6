//! Insertion ordered, index addressable collection plus the printer that walks it
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Write;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Container<T> {
    elements: Vec<T>,
}

impl<T> Container<T> {
    pub fn new() -> Self {
        Container { elements: vec![] }
    }

    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `None` for an index outside `0..count()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Read only view of the elements in insertion order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> Container<T> {
    /// Removes the first element equal to `element`. Returns whether anything was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Container::new()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Writes the string form of every element, one per line, in order.
pub fn process_container<T: Display>(
    container: &Container<T>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for element in container {
        writeln!(out, "{element}")?;
    }

    Ok(())
}
