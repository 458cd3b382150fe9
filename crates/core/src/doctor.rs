//! Doctor identity, specialty, and appointment back-references.

use crate::appointment::AppointmentId;
use clinic_types::NonEmptyText;

/// A registered doctor.
///
/// Same ownership rule as [`Patient`](crate::Patient): the list holds arena
/// identifiers only, in the order appointments were booked.
#[derive(Debug, Clone)]
pub struct Doctor {
    name: NonEmptyText,
    id: String,
    specialty: NonEmptyText,
    appointments: Vec<AppointmentId>,
}

impl Doctor {
    pub fn new(name: NonEmptyText, id: impl Into<String>, specialty: NonEmptyText) -> Self {
        Self {
            name,
            id: id.into(),
            specialty,
            appointments: Vec::new(),
        }
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn specialty(&self) -> &NonEmptyText {
        &self.specialty
    }

    /// Identifiers of this doctor's appointments in booking order.
    pub fn appointment_ids(&self) -> &[AppointmentId] {
        &self.appointments
    }

    /// Appends an appointment reference. Duplicates are not collapsed.
    pub(crate) fn add_appointment(&mut self, id: AppointmentId) {
        self.appointments.push(id);
    }

    /// Removes the first matching reference; no-op when absent.
    pub(crate) fn remove_appointment(&mut self, id: AppointmentId) {
        if let Some(position) = self.appointments.iter().position(|&held| held == id) {
            self.appointments.remove(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_of_absent_reference_is_noop() {
        let mut doctor = Doctor::new(
            NonEmptyText::new("Bob").expect("valid name"),
            "D1",
            NonEmptyText::new("Cardiology").expect("valid specialty"),
        );
        doctor.add_appointment(AppointmentId::new(3));

        doctor.remove_appointment(AppointmentId::new(4));
        assert_eq!(doctor.appointment_ids(), &[AppointmentId::new(3)]);
    }
}
