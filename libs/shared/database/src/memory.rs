use std::sync::Arc;

use dashmap::DashMap;

/// A stored record with a string `_id`.
pub trait Document: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Process-local document collection backing the in-memory repositories.
#[derive(Clone)]
pub struct MemoryCollection<T: Document> {
    docs: Arc<DashMap<String, T>>,
}

impl<T: Document> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            docs: Arc::new(DashMap::new()),
        }
    }

    pub fn insert(&self, doc: T) -> T {
        self.docs.insert(doc.id().to_string(), doc.clone());
        doc
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.docs.get(id).map(|entry| entry.value().clone())
    }

    pub fn find_one<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs
            .iter()
            .find(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
    }

    pub fn find<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Applies `update` to the stored document and returns the new value.
    pub fn update<F>(&self, id: &str, update: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut entry = self.docs.get_mut(id)?;
        update(entry.value_mut());
        Some(entry.value().clone())
    }

    pub fn replace(&self, doc: T) -> bool {
        match self.docs.get_mut(doc.id()) {
            Some(mut entry) => {
                *entry.value_mut() = doc;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: &str) -> Option<T> {
        self.docs.remove(id).map(|(_, doc)| doc)
    }

    pub fn remove_where<F>(&self, predicate: F) -> u64
    where
        F: Fn(&T) -> bool,
    {
        let before = self.docs.len();
        self.docs.retain(|_, doc| !predicate(doc));
        (before - self.docs.len()) as u64
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Skip/limit over an already sorted result set.
pub fn paginate<T>(items: Vec<T>, offset: u64, limit: u64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}
