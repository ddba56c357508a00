//! Loads demo doctors, clinics and diagnostics into the configured store.
//!
//! Safe to run repeatedly: doctors are matched by email, clinics and diagnostics by name.

use std::sync::Arc;

use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_cell::models::{NewClinic, NewDiagnostic};
use doctor_cell::models::{ConsultationFees, CreateDoctorRequest, DoctorError, Timing};
use hsb_api::AppServices;
use shared_config::{AppConfig, StorageBackend};
use shared_database::{MongoDatabase, Storage};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn doctors() -> Vec<CreateDoctorRequest> {
    vec![
        CreateDoctorRequest {
            name: "Dr. Meera Iyer".to_string(),
            email: "meera.iyer@hsb.health".to_string(),
            specialization: "Gynecologist".to_string(),
            experience: Some("12 years".to_string()),
            qualifications: Some("MBBS, MS (OBG)".to_string()),
            bio: Some("Menstrual health, PCOS and fertility care.".to_string()),
            location: Some("Bengaluru".to_string()),
            languages: strings(&["English", "Hindi", "Kannada"]),
            consultation_fees: Some(ConsultationFees {
                video_call: 800,
                audio_call: 600,
                in_clinic: 1000,
            }),
            timing: Some(Timing {
                from: "09:00 AM".to_string(),
                to: "05:00 PM".to_string(),
            }),
            package_includes: strings(&["Follow-up chat for 7 days"]),
            is_approved: Some(true),
            ..Default::default()
        },
        CreateDoctorRequest {
            name: "Dr. Kavya Reddy".to_string(),
            email: "kavya.reddy@hsb.health".to_string(),
            specialization: "Obstetrician".to_string(),
            experience: Some("9 years".to_string()),
            qualifications: Some("MBBS, DGO".to_string()),
            bio: Some("High-risk pregnancy and prenatal care.".to_string()),
            location: Some("Hyderabad".to_string()),
            languages: strings(&["English", "Telugu"]),
            consultation_fees: Some(ConsultationFees {
                video_call: 700,
                audio_call: 0,
                in_clinic: 900,
            }),
            timing: Some(Timing {
                from: "10:00 AM".to_string(),
                to: "04:00 PM".to_string(),
            }),
            is_approved: Some(true),
            ..Default::default()
        },
        CreateDoctorRequest {
            name: "Dr. Ananya Sharma".to_string(),
            email: "ananya.sharma@hsb.health".to_string(),
            specialization: "Psychiatrist".to_string(),
            experience: Some("7 years".to_string()),
            qualifications: Some("MBBS, MD (Psychiatry)".to_string()),
            bio: Some("Perinatal mental health and anxiety.".to_string()),
            location: Some("Delhi".to_string()),
            languages: strings(&["English", "Hindi"]),
            consultation_fees: Some(ConsultationFees {
                video_call: 1200,
                audio_call: 1000,
                in_clinic: 0,
            }),
            timing: Some(Timing {
                from: "11:00".to_string(),
                to: "19:00".to_string(),
            }),
            is_approved: Some(true),
            ..Default::default()
        },
    ]
}

fn clinics() -> Vec<NewClinic> {
    vec![
        NewClinic {
            name: "Bloom Women's Clinic".to_string(),
            address: "12 Residency Road".to_string(),
            city: "Bengaluru".to_string(),
            phone: "+91 80 4000 1200".to_string(),
            services: strings(&["Gynecology", "Fertility", "Ultrasound"]),
            rating: 4.6,
            image: None,
        },
        NewClinic {
            name: "Nurture Maternity Centre".to_string(),
            address: "5 Banjara Hills".to_string(),
            city: "Hyderabad".to_string(),
            phone: "+91 40 2300 5500".to_string(),
            services: strings(&["Prenatal Care", "Lactation Support"]),
            rating: 4.4,
            image: None,
        },
    ]
}

fn diagnostics() -> Vec<NewDiagnostic> {
    vec![
        NewDiagnostic {
            name: "PCOS Hormone Panel".to_string(),
            description: "LH, FSH, testosterone, AMH and prolactin".to_string(),
            price: 2499,
            category: "Hormones".to_string(),
            tests: strings(&["LH", "FSH", "Total Testosterone", "AMH", "Prolactin"]),
        },
        NewDiagnostic {
            name: "Thyroid Profile".to_string(),
            description: "T3, T4 and TSH".to_string(),
            price: 599,
            category: "Thyroid".to_string(),
            tests: strings(&["T3", "T4", "TSH"]),
        },
        NewDiagnostic {
            name: "Prenatal Screening".to_string(),
            description: "Complete blood count, blood group and glucose".to_string(),
            price: 1299,
            category: "Pregnancy".to_string(),
            tests: strings(&["CBC", "Blood Group", "Fasting Glucose"]),
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    let storage = match config.storage()? {
        StorageBackend::MongoDb => Storage::Mongo(MongoDatabase::connect(&config).await?),
        StorageBackend::Memory => {
            warn!("STORAGE_BACKEND is memory; seeded data will not outlive this process");
            Storage::Memory
        }
    };
    let services = AppServices::build(Arc::new(config), &storage);

    let mut added = 0;
    for request in doctors() {
        let email = request.email.clone();
        match services.doctors.create_doctor(request).await {
            Ok(_) => added += 1,
            Err(DoctorError::EmailTaken) => info!("Doctor {} already present, skipping", email),
            Err(e) => return Err(e.into()),
        }
    }
    info!("Seeded {} doctors", added);

    let mut added = 0;
    for clinic in clinics() {
        if services.clinics.clinics.add_clinic(clinic).await? {
            added += 1;
        }
    }
    info!("Seeded {} clinics", added);

    let mut added = 0;
    for diagnostic in diagnostics() {
        if services.clinics.diagnostics.add_diagnostic(diagnostic).await? {
            added += 1;
        }
    }
    info!("Seeded {} diagnostics", added);

    if let Storage::Mongo(db) = storage {
        db.shutdown().await;
    }
    Ok(())
}
