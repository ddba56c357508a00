use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use shared_database::ids::{new_id, parse_id};
use shared_models::pagination::Pagination;
use shared_utils::validation::{is_valid_email, non_blank, required};

use crate::models::{
    CreateDoctorRequest, Doctor, DoctorError, DoctorFilter, DoctorListQuery, DoctorPage,
    UpdateDoctorRequest,
};
use crate::repository::DoctorRepository;

pub struct DoctorService {
    doctors: Arc<dyn DoctorRepository>,
}

impl DoctorService {
    pub fn new(doctors: Arc<dyn DoctorRepository>) -> Self {
        Self { doctors }
    }

    /// Lists approved doctors. Out-of-range paging falls back to page 1 / 10 per page.
    #[instrument(skip(self))]
    pub async fn list_doctors(&self, query: &DoctorListQuery) -> Result<DoctorPage, DoctorError> {
        let pagination = Pagination::new(query.page, query.limit);
        let filter = DoctorFilter {
            search: non_blank(query.search.as_deref()),
            specialization: None,
        };

        let total = self.doctors.count_listed(&filter).await?;
        let doctors = self
            .doctors
            .find_listed(&filter, pagination.offset(), pagination.limit)
            .await?;
        debug!("Found {} of {} doctors", doctors.len(), total);

        Ok(DoctorPage {
            doctors,
            current_page: pagination.page,
            total_pages: pagination.total_pages(total),
            total_doctors: total,
            has_next_page: pagination.has_next(total),
            has_previous_page: pagination.has_previous(),
        })
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, DoctorError> {
        let id = parse_id("doctor", doctor_id)?;
        self.doctors
            .find_by_id(&id)
            .await?
            .ok_or(DoctorError::NotFound)
    }

    pub async fn doctors_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Doctor>, DoctorError> {
        let specialization = required("specialization", specialization).map_err(DoctorError::Validation)?;
        let filter = DoctorFilter {
            search: None,
            specialization: Some(specialization.to_string()),
        };
        let total = self.doctors.count_listed(&filter).await?;
        Ok(self.doctors.find_listed(&filter, 0, total).await?)
    }

    /// New doctors start unapproved unless the request says otherwise.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        let name = required("name", &request.name).map_err(DoctorError::Validation)?;
        let specialization =
            required("specialization", &request.specialization).map_err(DoctorError::Validation)?;
        let email = request.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(DoctorError::Validation("a valid email is required".to_string()));
        }

        if self.doctors.find_by_email(&email).await?.is_some() {
            return Err(DoctorError::EmailTaken);
        }

        let now = Utc::now();
        let doctor = Doctor {
            id: new_id(),
            name: name.to_string(),
            experience: non_blank(request.experience.as_deref()),
            qualifications: non_blank(request.qualifications.as_deref()),
            image: non_blank(request.image.as_deref()),
            specialization: specialization.to_string(),
            bio: non_blank(request.bio.as_deref()),
            about: non_blank(request.about.as_deref()),
            rating: None,
            total_reviews: None,
            location: non_blank(request.location.as_deref()),
            phone: non_blank(request.phone.as_deref()),
            email,
            languages: request.languages,
            consultation_fees: request.consultation_fees,
            is_available: true,
            timing: request.timing,
            package_includes: request.package_includes,
            is_approved: request.is_approved.unwrap_or(false),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let doctor = self.doctors.create(doctor).await?;
        info!("Created doctor {} ({})", doctor.id, doctor.specialization);
        Ok(doctor)
    }

    pub async fn update_doctor(
        &self,
        doctor_id: &str,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        let mut doctor = self.get_doctor(doctor_id).await?;

        if let Some(name) = non_blank(request.name.as_deref()) {
            doctor.name = name;
        }
        if let Some(specialization) = non_blank(request.specialization.as_deref()) {
            doctor.specialization = specialization;
        }
        for (field, value) in [
            (&mut doctor.experience, request.experience),
            (&mut doctor.qualifications, request.qualifications),
            (&mut doctor.image, request.image),
            (&mut doctor.bio, request.bio),
            (&mut doctor.about, request.about),
            (&mut doctor.location, request.location),
            (&mut doctor.phone, request.phone),
        ] {
            if let Some(value) = non_blank(value.as_deref()) {
                *field = Some(value);
            }
        }
        if let Some(languages) = request.languages {
            doctor.languages = languages;
        }
        if let Some(fees) = request.consultation_fees {
            doctor.consultation_fees = Some(fees);
        }
        if let Some(timing) = request.timing {
            doctor.timing = Some(timing);
        }
        if let Some(package) = request.package_includes {
            doctor.package_includes = package;
        }
        if let Some(available) = request.is_available {
            doctor.is_available = available;
        }
        if let Some(approved) = request.is_approved {
            doctor.is_approved = approved;
        }
        doctor.updated_at = Utc::now();

        self.doctors.update(&doctor).await?;
        info!("Updated doctor {}", doctor.id);
        Ok(doctor)
    }

    pub async fn delete_doctor(&self, doctor_id: &str) -> Result<(), DoctorError> {
        let doctor = self.get_doctor(doctor_id).await?;
        self.doctors.soft_delete(&doctor.id).await?;
        info!("Deleted doctor {}", doctor.id);
        Ok(())
    }
}
