use std::sync::Arc;

use tracing::info;

use appointment_cell::repository::booking_repository;
use appointment_cell::services::{AvailabilityService, BookingService};
use appointment_cell::AppointmentState;
use assessment_cell::repository::{pcos_repository, result_repository};
use assessment_cell::services::{FsfiService, MentalHealthService, PcosService};
use assessment_cell::AssessmentState;
use auth_cell::repository::{otp_repository, user_repository};
use auth_cell::services::{AuthService, UserService};
use auth_cell::AuthState;
use clinic_cell::repository::{clinic_repository, diagnostic_repository};
use clinic_cell::services::{ClinicService, DiagnosticService};
use clinic_cell::ClinicState;
use doctor_cell::repository::doctor_repository;
use doctor_cell::DoctorService;
use journal_cell::repository::journal_repository;
use journal_cell::services::JournalService;
use journal_cell::JournalState;
use payment_cell::{PaymentGateway, RazorpayClient};
use shared_config::AppConfig;
use shared_database::Storage;
use tracker_cell::repository::{
    period_repository, pregnancy_repository, symptoms_repository, weight_repository,
};
use tracker_cell::services::{PeriodService, PregnancyService, SymptomsService, WeightService};
use tracker_cell::TrackerState;

/// Every service the router needs, wired against one storage backend.
#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub auth: AuthState,
    pub doctors: Arc<DoctorService>,
    pub appointments: AppointmentState,
    pub clinics: ClinicState,
    pub trackers: TrackerState,
    pub assessments: AssessmentState,
    pub journals: JournalState,
}

impl AppServices {
    pub fn build(config: Arc<AppConfig>, storage: &Storage) -> Self {
        let payments: Arc<dyn PaymentGateway> = Arc::new(RazorpayClient::new(&config));
        Self::with_gateway(config, storage, payments)
    }

    /// Same as [`AppServices::build`] with a caller-supplied payment gateway.
    pub fn with_gateway(
        config: Arc<AppConfig>,
        storage: &Storage,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        let users = user_repository(storage);
        let doctors = doctor_repository(storage);
        let bookings = booking_repository(storage);
        let results = result_repository(storage);

        let auth = AuthState {
            auth: Arc::new(AuthService::new(users.clone(), otp_repository(storage), config.clone())),
            users: Arc::new(UserService::new(users)),
        };

        let appointments = AppointmentState {
            booking: Arc::new(BookingService::new(
                bookings.clone(),
                doctors.clone(),
                payments,
                config.payment_currency.clone(),
            )),
            availability: Arc::new(AvailabilityService::new(doctors.clone(), bookings)),
        };

        let services = Self {
            auth,
            doctors: Arc::new(DoctorService::new(doctors)),
            appointments,
            clinics: ClinicState {
                clinics: Arc::new(ClinicService::new(clinic_repository(storage))),
                diagnostics: Arc::new(DiagnosticService::new(diagnostic_repository(storage))),
            },
            trackers: TrackerState {
                period: Arc::new(PeriodService::new(period_repository(storage))),
                pregnancy: Arc::new(PregnancyService::new(pregnancy_repository(storage))),
                symptoms: Arc::new(SymptomsService::new(symptoms_repository(storage))),
                weight: Arc::new(WeightService::new(weight_repository(storage))),
            },
            assessments: AssessmentState {
                pcos: Arc::new(PcosService::new(pcos_repository(storage))),
                mental_health: Arc::new(MentalHealthService::new(results.clone())),
                fsfi: Arc::new(FsfiService::new(results)),
            },
            journals: JournalState {
                journals: Arc::new(JournalService::new(journal_repository(storage))),
            },
            config,
        };

        info!("Services wired against {} storage", storage.name());
        services
    }
}
