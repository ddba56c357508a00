use async_trait::async_trait;

use shared_database::memory::paginate;
use shared_database::{DatabaseError, MemoryCollection};

use super::{PcosRepository, ResultRepository};
use crate::models::{PcosAssessment, TestResult};

#[derive(Clone, Default)]
pub struct InMemoryPcosRepository {
    assessments: MemoryCollection<PcosAssessment>,
}

impl InMemoryPcosRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PcosRepository for InMemoryPcosRepository {
    async fn create(&self, assessment: PcosAssessment) -> Result<PcosAssessment, DatabaseError> {
        Ok(self.assessments.insert(assessment))
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<PcosAssessment>, DatabaseError> {
        let mut assessments = self.assessments.find(|a| a.user_id == user_id);
        assessments.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
        });
        Ok(paginate(assessments, 0, limit))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryResultRepository {
    results: MemoryCollection<TestResult>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn create(&self, result: TestResult) -> Result<TestResult, DatabaseError> {
        Ok(self.results.insert(result))
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        test_name: Option<&str>,
    ) -> Result<Vec<TestResult>, DatabaseError> {
        let mut results = self.results.find(|r| {
            r.user_id == user_id && test_name.map_or(true, |name| r.test_name == name)
        });
        results.sort_by(|a, b| {
            b.test_date.cmp(&a.test_date).then_with(|| b.id.cmp(&a.id))
        });
        Ok(results)
    }
}
