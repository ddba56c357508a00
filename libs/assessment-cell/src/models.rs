use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use shared_database::{DatabaseError, Document};
use shared_models::error::AppError;
use shared_models::time::timestamp;

// ==============================================================================
// QUESTION BANKS
// ==============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PcosQuestion {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestion {
    pub id: String,
    pub question_text: &'static str,
    pub response_type: &'static str,
    pub options: Vec<QuestionOption>,
}

impl TestQuestion {
    pub fn accepts(&self, value: i64) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireTest {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub questions: Vec<TestQuestion>,
}

// ==============================================================================
// PCOS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcosRisk {
    #[serde(rename = "low risk")]
    Low,
    #[serde(rename = "moderate risk")]
    Moderate,
    #[serde(rename = "high risk")]
    High,
}

impl PcosRisk {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s <= 2 => PcosRisk::Low,
            s if s <= 5 => PcosRisk::Moderate,
            _ => PcosRisk::High,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcosAssessment {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub responses: Vec<Value>,
    pub score: i64,
    pub result: PcosRisk,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PcosSubmission {
    pub responses: Vec<Value>,
}

// ==============================================================================
// QUESTIONNAIRE RESULTS (PHQ-9, GAD-7, FSFI)
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScores {
    pub desire: f64,
    pub arousal: f64,
    pub lubrication: f64,
    pub orgasm: f64,
    pub satisfaction: f64,
    pub pain: f64,
}

impl DomainScores {
    pub fn total(&self) -> f64 {
        self.desire + self.arousal + self.lubrication + self.orgasm + self.satisfaction + self.pain
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub test_name: String,
    pub score: f64,
    pub level: String,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_scores: Option<DomainScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub test_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestSubmission {
    pub test_name: String,
    pub answers: Map<String, Value>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FsfiSubmission {
    pub answers: Map<String, Value>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsQuery {
    pub test_name: Option<String>,
}

impl Document for PcosAssessment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for TestResult {
    fn id(&self) -> &str {
        &self.id
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Test not found")]
    TestNotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::TestNotFound => AppError::NotFound(err.to_string()),
            AssessmentError::Validation(msg) => AppError::ValidationError(msg),
            AssessmentError::Database(e) => e.into(),
        }
    }
}
