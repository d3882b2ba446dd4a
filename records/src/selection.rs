//! Multi-select values that keep display names and ids index-aligned.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Paired id/name arrays for multi-select form fields.
///
/// The two vectors are private so every mutation goes through methods that
/// touch both at the same index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkedSelection {
    ids: Vec<i64>,
    names: Vec<String>,
}

impl LinkedSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. Returns `false` (and changes nothing) when `id` is
    /// already selected.
    pub fn add(&mut self, id: i64, name: impl Into<String>) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        self.names.push(name.into());
        true
    }

    /// Remove the entry for `id` from both arrays. Returns `false` when absent.
    pub fn remove(&mut self, id: i64) -> bool {
        let Some(index) = self.ids.iter().position(|existing| *existing == id) else {
            return false;
        };
        self.ids.remove(index);
        self.names.remove(index);
        true
    }

    /// Replace the display name for an id already in the selection.
    pub fn rename(&mut self, id: i64, name: impl Into<String>) {
        if let Some(index) = self.ids.iter().position(|existing| *existing == id) {
            self.names[index] = name.into();
        }
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(id, name)` pairs in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.ids.iter().copied().zip(self.names.iter().map(String::as_str))
    }
}
