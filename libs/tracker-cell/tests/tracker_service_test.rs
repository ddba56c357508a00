use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};

use shared_database::ids::new_id;
use tracker_cell::models::*;
use tracker_cell::repository::{
    InMemoryPeriodRepository, InMemoryPregnancyRepository, InMemorySymptomsRepository,
    InMemoryWeightRepository,
};
use tracker_cell::services::{PeriodService, PregnancyService, SymptomsService, WeightService};

fn cycle(start: &str, end: Option<&str>) -> PeriodCycleRequest {
    PeriodCycleRequest {
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        cycle_length: Some(28),
        flow: Some("medium".to_string()),
    }
}

#[tokio::test]
async fn period_cycles_are_validated_and_capped() {
    let service = PeriodService::new(Arc::new(InMemoryPeriodRepository::new()));
    let user = new_id();

    let err = service
        .add_cycle(&user, cycle("2024-03-10", Some("2024-03-05")))
        .await
        .unwrap_err();
    assert_matches!(err, TrackerError::Validation(msg) if msg == "endDate cannot be before startDate");

    let err = service.add_cycle(&user, cycle("10/03/2024", None)).await.unwrap_err();
    assert_matches!(err, TrackerError::InvalidDate("startDate"));

    let mut zero = cycle("2024-03-10", None);
    zero.cycle_length = Some(0);
    assert_matches!(service.add_cycle(&user, zero).await, Err(TrackerError::Validation(_)));

    for month in 1..=12 {
        let start = format!("2023-{:02}-01", month);
        service.add_cycle(&user, cycle(&start, None)).await.unwrap();
    }
    service.add_cycle(&user, cycle("2024-01-01", Some("2024-01-05"))).await.unwrap();

    let cycles = service.cycles(&user).await.unwrap();
    assert_eq!(cycles.len(), 12);
    assert_eq!(cycles[0].start_date.format("%Y-%m-%d").to_string(), "2024-01-01");
    assert_eq!(cycles[11].start_date.format("%Y-%m-%d").to_string(), "2023-02-01");

    assert_eq!(service.reset(&user).await.unwrap(), 13);
    assert!(service.cycles(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn pregnancy_tracker_is_upserted_per_user() {
    let service = PregnancyService::new(Arc::new(InMemoryPregnancyRepository::new()));
    let user = new_id();
    assert!(service.current(&user).await.unwrap().is_none());

    let lmp = (Utc::now() - Duration::days(70)).format("%Y-%m-%d").to_string();
    let first = service
        .upsert(
            &user,
            PregnancyRequest {
                last_period_date: lmp.clone(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(first.current_week, 10);
    assert_eq!(
        first.tracker.due_date - first.tracker.last_period_date,
        Duration::days(280)
    );

    let second = service
        .upsert(
            &user,
            PregnancyRequest {
                last_period_date: lmp,
                due_date: Some("2031-01-01".to_string()),
                weight: Some(62.5),
                notes: Some("feeling good".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(second.tracker.id, first.tracker.id);
    assert_eq!(second.tracker.created_at, first.tracker.created_at);
    assert_eq!(second.tracker.weight, Some(62.5));

    let current = service.current(&user).await.unwrap().unwrap();
    assert_eq!(current.tracker.due_date.format("%Y-%m-%d").to_string(), "2031-01-01");
}

#[tokio::test]
async fn symptoms_require_known_type() {
    let service = SymptomsService::new(Arc::new(InMemorySymptomsRepository::new()));
    let user = new_id();

    let err = service
        .submit(
            &user,
            SymptomsRequest {
                kind: "Menopause".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, TrackerError::Validation(_));

    let entry = service
        .submit(
            &user,
            SymptomsRequest {
                kind: "Period".to_string(),
                date: None,
                tags: SymptomTags {
                    mood: vec!["calm".to_string()],
                    symptoms: vec!["cramps".to_string(), "bloating".to_string()],
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();
    assert_eq!(entry.kind, SymptomsKind::Period);
    assert!(Utc::now() - entry.date < Duration::minutes(1));

    let history = service.history(&user).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].tags.symptoms, vec!["cramps", "bloating"]);
}

#[tokio::test]
async fn weight_entries_compute_bmi() {
    let service = WeightService::new(Arc::new(InMemoryWeightRepository::new()));
    let user = new_id();

    let err = service
        .add_entry(
            &user,
            WeightRequest {
                weight: 0.0,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, TrackerError::Validation(msg) if msg == "weight must be greater than 0");

    let entry = service
        .add_entry(
            &user,
            WeightRequest {
                date: Some("2024-06-01".to_string()),
                weight: 72.0,
                height: Some(165.0),
                waist_size: Some(80.0),
                notes: None,
            },
        )
        .await
        .unwrap();
    let bmi = entry.bmi.unwrap();
    assert!((bmi - 26.446).abs() < 0.001);

    let without_height = service
        .add_entry(
            &user,
            WeightRequest {
                weight: 71.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(without_height.bmi.is_none());

    let entries = service.entries(&user).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].weight, 71.0);
}
