use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use shared_database::ids::{is_valid_id, new_id};
use shared_models::pagination::Pagination;
use shared_models::time;
use shared_utils::validation::{non_blank, required};

use crate::models::{
    CreateJournalRequest, Journal, JournalError, JournalFilter, JournalListQuery, JournalPage,
    UpdateJournalRequest,
};
use crate::repository::JournalRepository;

pub struct JournalService {
    journals: Arc<dyn JournalRepository>,
}

impl JournalService {
    pub fn new(journals: Arc<dyn JournalRepository>) -> Self {
        Self { journals }
    }

    pub async fn create(
        &self,
        user_id: &str,
        request: CreateJournalRequest,
    ) -> Result<Journal, JournalError> {
        let content = required("content", &request.content).map_err(JournalError::Validation)?;
        let category = required("category", &request.category).map_err(JournalError::Validation)?;

        let now = Utc::now();
        let journal = self
            .journals
            .create(Journal {
                id: new_id(),
                user_id: user_id.to_string(),
                title: non_blank(request.title.as_deref()),
                content: content.to_string(),
                category: category.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!("Created journal {} for user {}", journal.id, user_id);
        Ok(journal)
    }

    /// Unparseable `date` values are ignored rather than rejected.
    #[instrument(skip(self, query))]
    pub async fn list(&self, user_id: &str, query: &JournalListQuery) -> Result<JournalPage, JournalError> {
        let filter = JournalFilter {
            user_id: user_id.to_string(),
            search: non_blank(query.search.as_deref()),
            category: non_blank(query.category.as_deref()),
            created: query
                .date
                .as_deref()
                .and_then(time::parse_day)
                .and_then(time::day_bounds),
        };
        self.page(&filter, Pagination::new(query.page, query.limit)).await
    }

    pub async fn list_for_user(
        &self,
        caller_id: &str,
        user_id: &str,
        pagination: Pagination,
    ) -> Result<JournalPage, JournalError> {
        if caller_id != user_id {
            debug!("User {} asked for journals of {}", caller_id, user_id);
            return Err(JournalError::Forbidden);
        }
        let filter = JournalFilter {
            user_id: user_id.to_string(),
            ..Default::default()
        };
        self.page(&filter, pagination).await
    }

    pub async fn get(&self, user_id: &str, journal_id: &str) -> Result<Journal, JournalError> {
        let journal_id = journal_id.trim();
        if !is_valid_id(journal_id) {
            return Err(JournalError::NotFound);
        }
        self.journals
            .find_by_id(journal_id)
            .await?
            .filter(|journal| journal.user_id == user_id)
            .ok_or(JournalError::NotFound)
    }

    /// Only non-blank fields overwrite the stored values.
    pub async fn update(
        &self,
        user_id: &str,
        journal_id: &str,
        request: UpdateJournalRequest,
    ) -> Result<Journal, JournalError> {
        let mut journal = self.get(user_id, journal_id).await?;

        if let Some(title) = non_blank(request.title.as_deref()) {
            journal.title = Some(title);
        }
        if let Some(content) = non_blank(request.content.as_deref()) {
            journal.content = content;
        }
        if let Some(category) = non_blank(request.category.as_deref()) {
            journal.category = category;
        }
        journal.updated_at = Utc::now();

        self.journals.update(&journal).await?;
        Ok(journal)
    }

    pub async fn delete(&self, user_id: &str, journal_id: &str) -> Result<(), JournalError> {
        let journal = self.get(user_id, journal_id).await?;
        self.journals.delete(&journal.id).await?;
        info!("Deleted journal {}", journal.id);
        Ok(())
    }

    async fn page(&self, filter: &JournalFilter, pagination: Pagination) -> Result<JournalPage, JournalError> {
        let total = self.journals.count(filter).await?;
        let journals = self
            .journals
            .find(filter, pagination.offset(), pagination.limit)
            .await?;

        Ok(JournalPage {
            journals,
            total,
            page: pagination.page,
            pages: pagination.total_pages(total),
        })
    }
}
