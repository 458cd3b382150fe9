//! Appointment records and their derived report priority.
//!
//! An appointment is immutable once constructed: the only lifecycle is
//! booking followed by cancellation, which destroys the record outright.

use clinic_types::{NonEmptyText, Urgency};
use serde::{Deserialize, Serialize};

/// Stable identifier for an appointment in the clinic's arena.
///
/// Patients and doctors hold these instead of direct references, so a
/// cancelled appointment can never be reached through a stale alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(u64);

impl AppointmentId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

/// Kind-specific appointment data.
///
/// The set of kinds is closed: regular visits carry a free-text reason,
/// emergencies carry an urgency level that drives report ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AppointmentKind {
    Regular { reason: NonEmptyText },
    Emergency { urgency: Urgency },
}

impl AppointmentKind {
    /// Display label for report and schedule lines.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentKind::Regular { .. } => "Regular",
            AppointmentKind::Emergency { .. } => "Emergency",
        }
    }
}

/// One scheduled encounter between a patient and a doctor.
///
/// Dates and times are caller-supplied opaque strings; the clinic compares
/// them by exact equality and never interprets their format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    date: String,
    time: String,
    patient_id: String,
    doctor_id: String,
    kind: AppointmentKind,
}

impl Appointment {
    /// Creates a regular appointment with a visit reason.
    pub fn regular(
        date: impl Into<String>,
        time: impl Into<String>,
        patient_id: impl Into<String>,
        doctor_id: impl Into<String>,
        reason: NonEmptyText,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            kind: AppointmentKind::Regular { reason },
        }
    }

    /// Creates an emergency appointment with the given urgency.
    pub fn emergency(
        date: impl Into<String>,
        time: impl Into<String>,
        patient_id: impl Into<String>,
        doctor_id: impl Into<String>,
        urgency: Urgency,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            kind: AppointmentKind::Emergency { urgency },
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn doctor_id(&self) -> &str {
        &self.doctor_id
    }

    pub fn kind(&self) -> &AppointmentKind {
        &self.kind
    }

    /// Report priority; higher sorts first.
    ///
    /// Regular appointments are always priority 1, emergencies rank by their
    /// urgency, so any emergency above urgency 1 outranks every regular visit.
    pub fn priority(&self) -> u8 {
        match &self.kind {
            AppointmentKind::Regular { .. } => 1,
            AppointmentKind::Emergency { urgency } => urgency.get(),
        }
    }
}
