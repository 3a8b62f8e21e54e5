//! Repository traits

use crate::error::Result;

/// Items that can be looked up by a string key
pub trait Keyed {
    /// Lookup key (an entity id, an account id, ...)
    fn key(&self) -> &str;
}

/// Ordered append-only store queried by key
pub trait Repository<T: Keyed>: Send + Sync {
    /// Append an item at the end of the store
    fn append(&mut self, item: T) -> Result<()>;

    /// All items whose key equals `key`, in append order
    fn query_by_key(&self, key: &str) -> Result<Vec<T>>;

    /// Every item, in append order
    fn scan(&self) -> Result<Vec<T>>;

    /// Remove every item
    fn clear(&mut self) -> Result<()>;

    /// Number of stored items
    fn len(&self) -> usize;

    /// Whether the store holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append several items, stopping at the first failure
    fn extend(&mut self, items: Vec<T>) -> Result<()> {
        for item in items {
            self.append(item)?;
        }
        Ok(())
    }
}
