//! The clinic: sole owner of patients, doctors, and appointments.

use crate::appointment::{Appointment, AppointmentId};
use crate::doctor::Doctor;
use crate::error::{ScheduleError, ScheduleResult};
use crate::patient::Patient;
use clinic_types::NonEmptyText;

/// Owner of all scheduling state.
///
/// Appointments live in an arena keyed by [`AppointmentId`]; patients and
/// doctors hold identifiers into it rather than references, so cancelling
/// an appointment cannot leave anything dangling. Lookups are linear scans
/// over the expected small populations. Duplicate patient or doctor IDs are
/// not rejected: the first registered entity wins on lookup.
#[derive(Debug, Default)]
pub struct Clinic {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<(AppointmentId, Appointment)>,
    next_appointment_id: u64,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a patient by ID. First match wins.
    pub fn find_patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id() == id)
    }

    /// Finds a doctor by ID. First match wins.
    pub fn find_doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id() == id)
    }

    fn find_patient_mut(&mut self, id: &str) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|patient| patient.id() == id)
    }

    fn find_doctor_mut(&mut self, id: &str) -> Option<&mut Doctor> {
        self.doctors.iter_mut().find(|doctor| doctor.id() == id)
    }

    /// Registers a new patient. The ID is not checked for uniqueness.
    pub fn add_patient(&mut self, name: NonEmptyText, id: impl Into<String>) {
        let patient = Patient::new(name, id);
        tracing::debug!("registered patient {}", patient.id());
        self.patients.push(patient);
    }

    /// Registers a new doctor. The ID is not checked for uniqueness.
    pub fn add_doctor(
        &mut self,
        name: NonEmptyText,
        id: impl Into<String>,
        specialty: NonEmptyText,
    ) {
        let doctor = Doctor::new(name, id, specialty);
        tracing::debug!("registered doctor {}", doctor.id());
        self.doctors.push(doctor);
    }

    /// Books an appointment, taking ownership of it on success.
    ///
    /// Both participant IDs embedded in the appointment must resolve to
    /// registered entities; otherwise nothing is stored and the failed
    /// lookup is reported.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::PatientNotFound` or
    /// `ScheduleError::DoctorNotFound` when the respective lookup fails.
    pub fn book_appointment(&mut self, appointment: Appointment) -> ScheduleResult<AppointmentId> {
        if self.find_patient(appointment.patient_id()).is_none() {
            return Err(ScheduleError::PatientNotFound(
                appointment.patient_id().to_owned(),
            ));
        }
        if self.find_doctor(appointment.doctor_id()).is_none() {
            return Err(ScheduleError::DoctorNotFound(
                appointment.doctor_id().to_owned(),
            ));
        }

        let id = AppointmentId::new(self.next_appointment_id);
        self.next_appointment_id += 1;

        // Lookups re-run mutably; both are known to succeed at this point.
        if let Some(patient) = self.find_patient_mut(appointment.patient_id()) {
            patient.add_appointment(id);
        }
        if let Some(doctor) = self.find_doctor_mut(appointment.doctor_id()) {
            doctor.add_appointment(id);
        }

        tracing::debug!(
            "booked {} appointment for patient {} with doctor {}",
            appointment.kind().label(),
            appointment.patient_id(),
            appointment.doctor_id()
        );
        self.appointments.push((id, appointment));
        Ok(id)
    }

    /// Cancels the first appointment matching all four criteria exactly.
    ///
    /// Back-references are removed from the participants (skipped when a
    /// participant ID no longer resolves), then the record is destroyed.
    /// When duplicate bookings share all four fields, only the earliest
    /// booked one is cancelled per call.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::AppointmentNotFound` when nothing matches.
    pub fn cancel_appointment(
        &mut self,
        patient_id: &str,
        doctor_id: &str,
        date: &str,
        time: &str,
    ) -> ScheduleResult<()> {
        let position = self
            .appointments
            .iter()
            .position(|(_, appointment)| {
                appointment.patient_id() == patient_id
                    && appointment.doctor_id() == doctor_id
                    && appointment.date() == date
                    && appointment.time() == time
            })
            .ok_or(ScheduleError::AppointmentNotFound)?;

        let id = self.appointments[position].0;
        if let Some(patient) = self.find_patient_mut(patient_id) {
            patient.remove_appointment(id);
        }
        if let Some(doctor) = self.find_doctor_mut(doctor_id) {
            doctor.remove_appointment(id);
        }

        self.appointments.remove(position);
        tracing::debug!(
            "cancelled appointment for patient {} with doctor {} at {} {}",
            patient_id,
            doctor_id,
            date,
            time
        );
        Ok(())
    }

    /// Resolves an arena identifier to its appointment, if still booked.
    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|(held, _)| *held == id)
            .map(|(_, appointment)| appointment)
    }

    /// Number of currently booked appointments.
    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// All live appointments ordered by descending priority.
    ///
    /// The sort is stable: appointments with equal priority keep their
    /// booking order.
    pub fn generate_report(&self) -> Vec<&Appointment> {
        let mut report: Vec<&Appointment> = self
            .appointments
            .iter()
            .map(|(_, appointment)| appointment)
            .collect();
        report.sort_by(|a, b| b.priority().cmp(&a.priority()));
        report
    }
}
