//! In-memory shopping list storage.
//!
//! Items are kept in insertion order. Positions are 0-based here and only
//! become 1-based when rendered for the user.

use thiserror::Error;

/// Conditions reported by [`ItemStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `remove` was called with a position past the end of the list.
    #[error("invalid index {index} (list has {len} items)")]
    InvalidIndex { index: usize, len: usize },
    /// Backing storage could not grow. This is the only fatal condition.
    #[error("out of memory")]
    OutOfMemory,
}

impl StoreError {
    /// Returns true if the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::OutOfMemory)
    }
}

/// Ordered, dense sequence of non-empty text items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<String>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` as the new last item.
    ///
    /// Returns `Ok(false)` without touching the list when `text` is blank.
    pub fn add(&mut self, text: &str) -> Result<bool, StoreError> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        self.items
            .try_reserve(1)
            .map_err(|_| StoreError::OutOfMemory)?;
        self.items.push(text.to_string());
        Ok(true)
    }

    /// Remove the item at 0-based `index`, shifting later items down by one.
    pub fn remove(&mut self, index: usize) -> Result<String, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every item. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Iterate `(position, text)` pairs with 1-based positions.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.items.iter().enumerate(),
        }
    }
}

/// Iterator over `(1-based position, text)` pairs. See [`ItemStore::entries`].
pub struct Entries<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, String>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, item)| (index + 1, item.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
