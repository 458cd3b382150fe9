//! Optional JSON seed data loaded at startup.
//!
//! The seed file is input only: nothing is ever written back, so clinic
//! state still lives and dies with the process.

use std::path::Path;

use clinic_types::NonEmptyText;
use serde::Deserialize;

use crate::appointment::Appointment;
use crate::clinic::Clinic;
use crate::error::{ScheduleError, ScheduleResult};

/// Seed document: initial patients, doctors, and appointments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDocument {
    #[serde(default)]
    pub patients: Vec<SeedPatient>,
    #[serde(default)]
    pub doctors: Vec<SeedDoctor>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPatient {
    pub name: NonEmptyText,
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDoctor {
    pub name: NonEmptyText,
    pub id: String,
    pub specialty: NonEmptyText,
}

/// Reads and parses a seed document from disk.
///
/// # Errors
///
/// Returns `ScheduleError::SeedRead` when the file cannot be read and
/// `ScheduleError::SeedParse` when it is not a valid seed document.
pub fn load_from_path(path: &Path) -> ScheduleResult<SeedDocument> {
    let contents = std::fs::read_to_string(path).map_err(ScheduleError::SeedRead)?;
    serde_json::from_str(&contents).map_err(ScheduleError::SeedParse)
}

/// Applies a seed document to the clinic.
///
/// Patients and doctors are registered first so seeded appointments can
/// resolve their participants. Appointments that fail to book are logged
/// and skipped rather than failing the whole load. Returns the number of
/// appointments actually booked.
pub fn apply(clinic: &mut Clinic, seed: SeedDocument) -> usize {
    for patient in seed.patients {
        clinic.add_patient(patient.name, patient.id);
    }
    for doctor in seed.doctors {
        clinic.add_doctor(doctor.name, doctor.id, doctor.specialty);
    }

    let mut booked = 0;
    for appointment in seed.appointments {
        match clinic.book_appointment(appointment) {
            Ok(_) => booked += 1,
            Err(err) => tracing::warn!("skipping seeded appointment: {}", err),
        }
    }
    booked
}
