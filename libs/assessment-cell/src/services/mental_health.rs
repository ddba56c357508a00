use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::info;

use shared_database::ids::new_id;
use shared_utils::validation::non_blank;

use crate::models::{AssessmentError, QuestionnaireTest, TestResult, TestSubmission};
use crate::questions::mental_health_tests;
use crate::repository::ResultRepository;

/// Sum of the answered items. Every key must be one of the test's questions and every
/// value one of its options; unanswered items count as zero.
pub fn questionnaire_score(
    test: &QuestionnaireTest,
    answers: &Map<String, Value>,
) -> Result<i64, AssessmentError> {
    answers.iter().try_fold(0i64, |score, (id, value)| {
        let question = test
            .questions
            .iter()
            .find(|question| &question.id == id)
            .ok_or_else(|| AssessmentError::Validation(format!("{} is not a {} question", id, test.name)))?;
        let value = value
            .as_f64()
            .map(|value| value.trunc() as i64)
            .filter(|value| question.accepts(*value))
            .ok_or_else(|| {
                let min = question.options.first().map_or(0, |o| o.value);
                let max = question.options.last().map_or(0, |o| o.value);
                AssessmentError::Validation(format!("{} must be between {} and {}", id, min, max))
            })?;
        Ok(score + value)
    })
}

pub fn severity(score: i64) -> &'static str {
    match score {
        s if s <= 4 => "minimal",
        s if s <= 9 => "mild",
        s if s <= 14 => "moderate",
        _ => "severe",
    }
}

pub struct MentalHealthService {
    results: Arc<dyn ResultRepository>,
}

impl MentalHealthService {
    pub fn new(results: Arc<dyn ResultRepository>) -> Self {
        Self { results }
    }

    pub fn tests(&self) -> Vec<QuestionnaireTest> {
        mental_health_tests()
    }

    pub fn test_by_name(&self, name: &str) -> Result<QuestionnaireTest, AssessmentError> {
        mental_health_tests()
            .into_iter()
            .find(|test| test.name.eq_ignore_ascii_case(name.trim()))
            .ok_or(AssessmentError::TestNotFound)
    }

    pub async fn submit(
        &self,
        user_id: &str,
        submission: TestSubmission,
    ) -> Result<TestResult, AssessmentError> {
        if submission.test_name.trim().is_empty() {
            return Err(AssessmentError::Validation("testName is required".to_string()));
        }
        let test = self.test_by_name(&submission.test_name)?;

        let score = questionnaire_score(&test, &submission.answers)?;
        let now = Utc::now();
        let result = self
            .results
            .create(TestResult {
                id: new_id(),
                user_id: user_id.to_string(),
                test_name: test.name.to_string(),
                score: score as f64,
                level: severity(score).to_string(),
                answers: submission.answers,
                domain_scores: None,
                notes: non_blank(submission.notes.as_deref()),
                test_date: now,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!("{} result {} scored {} ({})", test.name, result.id, score, result.level);
        Ok(result)
    }

    pub async fn results(
        &self,
        user_id: &str,
        test_name: Option<&str>,
    ) -> Result<Vec<TestResult>, AssessmentError> {
        let test_name = test_name.map(str::trim).filter(|name| !name.is_empty());
        Ok(self.results.find_by_user(user_id, test_name).await?)
    }
}
