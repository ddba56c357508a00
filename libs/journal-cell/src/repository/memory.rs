use async_trait::async_trait;

use shared_database::memory::paginate;
use shared_database::{contains_ignore_case, DatabaseError, MemoryCollection};

use super::JournalRepository;
use crate::models::{Journal, JournalFilter};

#[derive(Clone, Default)]
pub struct InMemoryJournalRepository {
    journals: MemoryCollection<Journal>,
}

impl InMemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching(&self, filter: &JournalFilter) -> Vec<Journal> {
        let search = filter.search.as_deref().filter(|s| !s.trim().is_empty());
        let mut journals = self.journals.find(|j| {
            j.user_id == filter.user_id
                && filter.category.as_deref().map_or(true, |c| j.category == c)
                && filter
                    .created
                    .map_or(true, |(start, end)| j.created_at >= start && j.created_at < end)
                && search.map_or(true, |s| {
                    contains_ignore_case(&j.content, s)
                        || j.title.as_deref().is_some_and(|t| contains_ignore_case(t, s))
                })
        });
        journals.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
        });
        journals
    }
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn create(&self, journal: Journal) -> Result<Journal, DatabaseError> {
        Ok(self.journals.insert(journal))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Journal>, DatabaseError> {
        Ok(self.journals.get(id))
    }

    async fn find(
        &self,
        filter: &JournalFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Journal>, DatabaseError> {
        Ok(paginate(self.matching(filter), offset, limit))
    }

    async fn count(&self, filter: &JournalFilter) -> Result<u64, DatabaseError> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn update(&self, journal: &Journal) -> Result<(), DatabaseError> {
        if !self.journals.replace(journal.clone()) {
            return Err(DatabaseError::NotFound("journal".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.journals
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::NotFound("journal".to_string()))
    }
}
