use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use shared_database::ids::new_id;

use crate::models::{AssessmentError, PcosAssessment, PcosQuestion, PcosRisk, PcosSubmission};
use crate::questions::PCOS_QUESTIONS;
use crate::repository::PcosRepository;

pub const PCOS_HISTORY: u64 = 10;

/// A response counts towards the score when it is `true` or the string "yes".
pub fn pcos_score(responses: &[Value]) -> i64 {
    responses
        .iter()
        .filter(|response| match response {
            Value::Bool(answer) => *answer,
            Value::String(answer) => answer.trim().eq_ignore_ascii_case("yes"),
            _ => false,
        })
        .count() as i64
}

pub struct PcosService {
    assessments: Arc<dyn PcosRepository>,
}

impl PcosService {
    pub fn new(assessments: Arc<dyn PcosRepository>) -> Self {
        Self { assessments }
    }

    pub fn questions(&self) -> &'static [PcosQuestion] {
        &PCOS_QUESTIONS
    }

    pub async fn submit(
        &self,
        user_id: &str,
        submission: PcosSubmission,
    ) -> Result<PcosAssessment, AssessmentError> {
        if submission.responses.is_empty() {
            return Err(AssessmentError::Validation("responses are required".to_string()));
        }

        let score = pcos_score(&submission.responses);
        let now = Utc::now();
        let assessment = self
            .assessments
            .create(PcosAssessment {
                id: new_id(),
                user_id: user_id.to_string(),
                responses: submission.responses,
                score,
                result: PcosRisk::from_score(score),
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!("PCOS assessment {} scored {}", assessment.id, score);
        Ok(assessment)
    }

    pub async fn history(&self, user_id: &str) -> Result<Vec<PcosAssessment>, AssessmentError> {
        Ok(self.assessments.latest(user_id, PCOS_HISTORY).await?)
    }

    pub async fn latest(&self, user_id: &str) -> Result<Option<PcosAssessment>, AssessmentError> {
        Ok(self.assessments.latest(user_id, 1).await?.into_iter().next())
    }
}
