use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::info;

use shared_database::ids::new_id;
use shared_utils::validation::non_blank;

use crate::models::{AssessmentError, DomainScores, FsfiSubmission, QuestionnaireTest, TestResult};
use crate::questions::{self, FSFI};
use crate::repository::ResultRepository;

/// Totals below this indicate sexual dysfunction.
pub const FSFI_CUTOFF: f64 = 26.55;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validates every item against its scale and returns the item values in order.
fn item_values(test: &QuestionnaireTest, answers: &Map<String, Value>) -> Result<Vec<i64>, AssessmentError> {
    test.questions
        .iter()
        .map(|question| {
            let value = answers
                .get(&question.id)
                .and_then(Value::as_f64)
                .ok_or_else(|| AssessmentError::Validation(format!("{} is required", question.id)))?;
            let value = value.trunc() as i64;
            if !question.accepts(value) {
                let min = question.options.first().map_or(0, |o| o.value);
                return Err(AssessmentError::Validation(format!(
                    "{} must be between {} and 5",
                    question.id, min
                )));
            }
            Ok(value)
        })
        .collect()
}

/// Domain scores: item sums over q1-2, q3-6, q7-10, q11-13, q14-16 and q17-19, each scaled by its factor.
pub fn domain_scores(items: &[i64]) -> DomainScores {
    let sum = |from: usize, to: usize| items[from - 1..to].iter().sum::<i64>() as f64;
    DomainScores {
        desire: round2(sum(1, 2) * 0.6),
        arousal: round2(sum(3, 6) * 0.3),
        lubrication: round2(sum(7, 10) * 0.3),
        orgasm: round2(sum(11, 13) * 0.4),
        satisfaction: round2(sum(14, 16) * 0.4),
        pain: round2(sum(17, 19) * 0.4),
    }
}

pub fn diagnosis(total: f64) -> &'static str {
    if total >= FSFI_CUTOFF {
        "normal"
    } else {
        "dysfunction"
    }
}

pub struct FsfiService {
    results: Arc<dyn ResultRepository>,
}

impl FsfiService {
    pub fn new(results: Arc<dyn ResultRepository>) -> Self {
        Self { results }
    }

    pub fn test(&self) -> QuestionnaireTest {
        questions::fsfi()
    }

    pub async fn submit(
        &self,
        user_id: &str,
        submission: FsfiSubmission,
    ) -> Result<TestResult, AssessmentError> {
        let items = item_values(&self.test(), &submission.answers)?;
        let domains = domain_scores(&items);
        let total = round2(domains.total());

        let now = Utc::now();
        let result = self
            .results
            .create(TestResult {
                id: new_id(),
                user_id: user_id.to_string(),
                test_name: FSFI.to_string(),
                score: total,
                level: diagnosis(total).to_string(),
                answers: submission.answers,
                domain_scores: Some(domains),
                notes: non_blank(submission.notes.as_deref()),
                test_date: now,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!("FSFI result {} total {:.2} ({})", result.id, total, result.level);
        Ok(result)
    }

    pub async fn my_results(&self, user_id: &str) -> Result<Vec<TestResult>, AssessmentError> {
        Ok(self.results.find_by_user(user_id, Some(FSFI)).await?)
    }
}
