use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::{json, Map, Value};

use assessment_cell::models::{AssessmentError, FsfiSubmission, PcosRisk, PcosSubmission, TestSubmission};
use assessment_cell::repository::{InMemoryPcosRepository, InMemoryResultRepository};
use assessment_cell::services::{FsfiService, MentalHealthService, PcosService};

fn answers(pairs: impl IntoIterator<Item = (String, Value)>) -> Map<String, Value> {
    pairs.into_iter().collect()
}

fn fsfi_answers(value: i64) -> Map<String, Value> {
    answers((1..=19).map(|i| (format!("q{}", i), json!(value))))
}

#[tokio::test]
async fn pcos_submission_scores_and_keeps_history() {
    let service = PcosService::new(Arc::new(InMemoryPcosRepository::new()));

    let first = service
        .submit("u1", PcosSubmission { responses: vec![json!(true), json!("no")] })
        .await
        .unwrap();
    assert_eq!(first.score, 1);
    assert_eq!(first.result, PcosRisk::Low);

    let second = service
        .submit(
            "u1",
            PcosSubmission {
                responses: vec![json!(true), json!("YES"), json!(true), json!("yes"), json!(true), json!(true)],
            },
        )
        .await
        .unwrap();
    assert_eq!(second.result, PcosRisk::High);

    let history = service.history("u1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(service.latest("u1").await.unwrap().unwrap().id, second.id);
    assert!(service.latest("u2").await.unwrap().is_none());
}

#[tokio::test]
async fn pcos_requires_responses() {
    let service = PcosService::new(Arc::new(InMemoryPcosRepository::new()));
    let err = service.submit("u1", PcosSubmission::default()).await.unwrap_err();
    assert_matches!(err, AssessmentError::Validation(_));
}

#[tokio::test]
async fn mental_health_scores_known_tests_only() {
    let service = MentalHealthService::new(Arc::new(InMemoryResultRepository::new()));

    let result = service
        .submit(
            "u1",
            TestSubmission {
                test_name: "PHQ9".to_string(),
                answers: answers((1..=9).map(|i| (format!("q{}", i), json!(1)))),
                notes: Some("  ".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(result.test_name, "phq9");
    assert_eq!(result.score, 9.0);
    assert_eq!(result.level, "mild");
    assert!(result.notes.is_none());

    let err = service
        .submit(
            "u1",
            TestSubmission {
                test_name: "bdi".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, AssessmentError::TestNotFound);

    let err = service.submit("u1", TestSubmission::default()).await.unwrap_err();
    assert_matches!(err, AssessmentError::Validation(_));
}

#[tokio::test]
async fn mental_health_rejects_answers_off_the_question_bank() {
    let repo = Arc::new(InMemoryResultRepository::new());
    let service = MentalHealthService::new(repo.clone());
    let submission = |answers: Value| TestSubmission {
        test_name: "phq9".to_string(),
        answers: answers.as_object().cloned().unwrap_or_default(),
        notes: None,
    };

    let err = service
        .submit("u1", submission(json!({ "q1": -50, "bogus": 3 })))
        .await
        .unwrap_err();
    assert_matches!(err, AssessmentError::Validation(_));

    let err = service
        .submit("u1", submission(json!({ "q1": 1e19, "q2": 1e19 })))
        .await
        .unwrap_err();
    assert_matches!(err, AssessmentError::Validation(msg) if msg == "q1 must be between 0 and 3");

    let err = service
        .submit("u1", submission(json!({ "q10": 1 })))
        .await
        .unwrap_err();
    assert_matches!(err, AssessmentError::Validation(msg) if msg == "q10 is not a phq9 question");

    assert!(service.results("u1", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn mental_health_results_filter_by_test() {
    let repo = Arc::new(InMemoryResultRepository::new());
    let service = MentalHealthService::new(repo.clone());
    let fsfi = FsfiService::new(repo);

    for name in ["phq9", "gad7"] {
        service
            .submit(
                "u1",
                TestSubmission {
                    test_name: name.to_string(),
                    answers: answers([("q1".to_string(), json!(3))]),
                    notes: None,
                },
            )
            .await
            .unwrap();
    }
    fsfi.submit("u1", FsfiSubmission { answers: fsfi_answers(3), notes: None })
        .await
        .unwrap();

    assert_eq!(service.results("u1", None).await.unwrap().len(), 3);
    let gad7 = service.results("u1", Some("gad7")).await.unwrap();
    assert_eq!(gad7.len(), 1);
    assert_eq!(gad7[0].level, "minimal");
    assert!(service.results("u2", None).await.unwrap().is_empty());
    assert_eq!(fsfi.my_results("u1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn fsfi_scores_domains_and_diagnosis() {
    let service = FsfiService::new(Arc::new(InMemoryResultRepository::new()));

    let result = service
        .submit("u1", FsfiSubmission { answers: fsfi_answers(5), notes: None })
        .await
        .unwrap();
    assert_eq!(result.test_name, "fsfi");
    assert!((result.score - 36.0).abs() < 1e-9);
    assert_eq!(result.level, "normal");
    let domains = result.domain_scores.unwrap();
    assert!((domains.lubrication - 6.0).abs() < 1e-9);

    // 3 on every item: 3.6 + 3.6 + 3.6 + 3.6 + 3.6 + 3.6 = 21.6
    let result = service
        .submit("u1", FsfiSubmission { answers: fsfi_answers(3), notes: None })
        .await
        .unwrap();
    assert!((result.score - 21.6).abs() < 1e-9);
    assert_eq!(result.level, "dysfunction");
}

#[tokio::test]
async fn fsfi_rejects_missing_or_out_of_scale_items() {
    let service = FsfiService::new(Arc::new(InMemoryResultRepository::new()));

    let mut missing = fsfi_answers(4);
    missing.remove("q7");
    let err = service
        .submit("u1", FsfiSubmission { answers: missing, notes: None })
        .await
        .unwrap_err();
    assert_matches!(err, AssessmentError::Validation(msg) if msg == "q7 is required");

    let mut zero_desire = fsfi_answers(4);
    zero_desire.insert("q1".to_string(), json!(0));
    let err = service
        .submit("u1", FsfiSubmission { answers: zero_desire, notes: None })
        .await
        .unwrap_err();
    assert_matches!(err, AssessmentError::Validation(msg) if msg == "q1 must be between 1 and 5");

    assert!(service.my_results("u1").await.unwrap().is_empty());
}
