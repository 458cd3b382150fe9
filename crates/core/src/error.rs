//! Error types for clinic scheduling operations.

/// Errors returned by [`Clinic`](crate::Clinic) operations and seed loading.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("no patient with ID {0}")]
    PatientNotFound(String),
    #[error("no doctor with ID {0}")]
    DoctorNotFound(String),
    #[error("appointment not found")]
    AppointmentNotFound,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read seed file: {0}")]
    SeedRead(std::io::Error),
    #[error("failed to parse seed file: {0}")]
    SeedParse(serde_json::Error),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
