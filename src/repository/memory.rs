//! In-memory repository

use super::types::{Keyed, Repository};
use crate::error::Result;

/// Repository backed by a growing `Vec`
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Borrow the stored items without cloning
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Keyed + Clone + Send + Sync,
{
    fn append(&mut self, item: T) -> Result<()> {
        self.items.push(item);
        Ok(())
    }

    fn query_by_key(&self, key: &str) -> Result<Vec<T>> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.key() == key)
            .cloned()
            .collect())
    }

    fn scan(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
