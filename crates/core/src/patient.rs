//! Patient identity and appointment back-references.

use crate::appointment::AppointmentId;
use clinic_types::NonEmptyText;

/// A registered patient.
///
/// The appointment list holds arena identifiers in insertion order; the
/// clinic owns the appointment records themselves and keeps this list in
/// step when bookings are made or cancelled.
#[derive(Debug, Clone)]
pub struct Patient {
    name: NonEmptyText,
    id: String,
    appointments: Vec<AppointmentId>,
}

impl Patient {
    pub fn new(name: NonEmptyText, id: impl Into<String>) -> Self {
        Self {
            name,
            id: id.into(),
            appointments: Vec::new(),
        }
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifiers of this patient's appointments in booking order.
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

    fn patient() -> Patient {
        Patient::new(NonEmptyText::new("Alice").expect("valid name"), "P1")
    }

    #[test]
    fn appointments_keep_insertion_order_without_dedup() {
        let mut patient = patient();
        let first = AppointmentId::new(1);
        patient.add_appointment(first);
        patient.add_appointment(AppointmentId::new(2));
        patient.add_appointment(first);

        assert_eq!(
            patient.appointment_ids(),
            &[first, AppointmentId::new(2), first]
        );
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut patient = patient();
        let id = AppointmentId::new(7);
        patient.add_appointment(id);
        patient.add_appointment(id);

        patient.remove_appointment(id);
        assert_eq!(patient.appointment_ids(), &[id]);
    }

    #[test]
    fn remove_of_absent_reference_is_noop() {
        let mut patient = patient();
        patient.add_appointment(AppointmentId::new(1));

        patient.remove_appointment(AppointmentId::new(99));
        assert_eq!(patient.appointment_ids(), &[AppointmentId::new(1)]);
    }
}
