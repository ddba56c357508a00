use std::sync::Arc;

use assert_matches::assert_matches;

use doctor_cell::models::*;
use doctor_cell::repository::InMemoryDoctorRepository;
use doctor_cell::services::DoctorService;

fn service() -> DoctorService {
    DoctorService::new(Arc::new(InMemoryDoctorRepository::new()))
}

fn request(name: &str, email: &str, specialization: &str, approved: bool) -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: name.to_string(),
        email: email.to_string(),
        specialization: specialization.to_string(),
        consultation_fees: Some(ConsultationFees {
            video_call: 500,
            audio_call: 300,
            in_clinic: 0,
        }),
        is_approved: Some(approved),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_applies_defaults_and_rejects_duplicates() {
    let service = service();
    let doctor = service
        .create_doctor(request("Dr. Kavya", "Kavya@Clinic.in", "Gynecologist", false))
        .await
        .unwrap();

    assert_eq!(doctor.email, "kavya@clinic.in");
    assert!(doctor.is_available);
    assert!(!doctor.is_approved);
    assert!(!doctor.is_deleted);

    assert_matches!(
        service
            .create_doctor(request("Dr. K", "kavya@clinic.in", "Gynecologist", true))
            .await,
        Err(DoctorError::EmailTaken)
    );
    assert_matches!(
        service.create_doctor(request("", "x@clinic.in", "Gynecologist", true)).await,
        Err(DoctorError::Validation(_))
    );
}

#[tokio::test]
async fn listing_hides_unapproved_and_deleted_doctors() {
    let service = service();
    for i in 0..12 {
        service
            .create_doctor(request(&format!("Dr. {:02}", i), &format!("d{}@clinic.in", i), "Dermatologist", true))
            .await
            .unwrap();
    }
    service
        .create_doctor(request("Dr. Pending", "pending@clinic.in", "Dermatologist", false))
        .await
        .unwrap();
    let gone = service
        .create_doctor(request("Dr. Gone", "gone@clinic.in", "Dermatologist", true))
        .await
        .unwrap();
    service.delete_doctor(&gone.id).await.unwrap();

    let first = service
        .list_doctors(&DoctorListQuery { page: Some(0), limit: Some(500), search: None })
        .await
        .unwrap();
    assert_eq!(first.current_page, 1);
    assert_eq!(first.total_doctors, 12);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.doctors.len(), 10);
    assert!(first.has_next_page);
    assert!(!first.has_previous_page);
    assert_eq!(first.doctors[0].name, "Dr. 00");

    let second = service
        .list_doctors(&DoctorListQuery { page: Some(2), limit: Some(10), search: None })
        .await
        .unwrap();
    assert_eq!(second.doctors.len(), 2);
    assert!(!second.has_next_page);
    assert!(second.has_previous_page);

    assert_matches!(service.get_doctor(&gone.id).await, Err(DoctorError::NotFound));
}

#[tokio::test]
async fn search_matches_name_or_specialization() {
    let service = service();
    service.create_doctor(request("Dr. Anita", "a@clinic.in", "Gynecologist", true)).await.unwrap();
    service.create_doctor(request("Dr. Rohan", "r@clinic.in", "Nutritionist", true)).await.unwrap();

    let by_specialization = service
        .list_doctors(&DoctorListQuery { page: None, limit: None, search: Some("GYNEC".to_string()) })
        .await
        .unwrap();
    assert_eq!(by_specialization.total_doctors, 1);
    assert_eq!(by_specialization.doctors[0].name, "Dr. Anita");

    let by_name = service
        .list_doctors(&DoctorListQuery { page: None, limit: None, search: Some("rohan".to_string()) })
        .await
        .unwrap();
    assert_eq!(by_name.doctors[0].specialization, "Nutritionist");

    let specialists = service.doctors_by_specialization("Nutritionist").await.unwrap();
    assert_eq!(specialists.len(), 1);
}

#[tokio::test]
async fn get_validates_ids() {
    let service = service();
    let err = service.get_doctor("xyz").await.unwrap_err();
    assert_eq!(err.to_string(), "invalid doctor ID format");
    assert_matches!(
        service.get_doctor("65f1c0ffee0000000000abcd").await,
        Err(DoctorError::NotFound)
    );
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let service = service();
    let doctor = service
        .create_doctor(request("Dr. Anita", "a@clinic.in", "Gynecologist", false))
        .await
        .unwrap();

    let updated = service
        .update_doctor(
            &doctor.id,
            UpdateDoctorRequest {
                bio: Some("15 years in maternal care".to_string()),
                is_available: Some(false),
                is_approved: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Dr. Anita");
    assert_eq!(updated.bio.as_deref(), Some("15 years in maternal care"));
    assert!(!updated.is_available);
    assert!(updated.is_approved);
}

#[test]
fn fees_depend_on_session_type() {
    let doctor = Doctor {
        id: "65f1c0ffee0000000000abcd".to_string(),
        name: "Dr. Anita".to_string(),
        experience: None,
        qualifications: None,
        image: None,
        specialization: "Gynecologist".to_string(),
        bio: None,
        about: None,
        rating: None,
        total_reviews: None,
        location: None,
        phone: None,
        email: "a@clinic.in".to_string(),
        languages: vec![],
        consultation_fees: Some(ConsultationFees { video_call: 500, audio_call: 300, in_clinic: 0 }),
        is_available: true,
        timing: None,
        package_includes: vec![],
        is_approved: true,
        is_deleted: false,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    assert_eq!(doctor.fee_for(SessionType::VideoCall), Some(500));
    assert_eq!(doctor.fee_for(SessionType::AudioCall), Some(300));
    assert_eq!(doctor.fee_for(SessionType::InClinic), None);
    assert_eq!(SessionType::parse("In-Clinic"), Some(SessionType::InClinic));
    assert_eq!(SessionType::parse("Chat"), None);
}

#[test]
fn stored_documents_default_missing_flags() {
    let doctor: Doctor = serde_json::from_value(serde_json::json!({
        "_id": "65f1c0ffee0000000000abcd",
        "name": "Dr. Seeded",
        "specialization": "Gynecologist",
        "email": "seeded@clinic.in",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    }))
    .unwrap();
    assert!(doctor.is_available);
    assert!(!doctor.is_approved);
    assert!(!doctor.is_deleted);
    assert!(doctor.languages.is_empty());
}
