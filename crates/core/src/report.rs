//! Text rendering for the priority report and per-person schedule views.
//!
//! Rendering is kept apart from the data model: the clinic decides what is
//! booked and in what order, this module only shapes lines for display.

use crate::appointment::Appointment;
use crate::clinic::Clinic;
use crate::doctor::Doctor;
use crate::patient::Patient;

/// Line emitted when a schedule view has nothing to show.
pub const NO_APPOINTMENTS: &str = "No appointments.";

/// One line per booked appointment, highest priority first.
pub fn report_lines(clinic: &Clinic) -> impl Iterator<Item = String> + '_ {
    clinic.generate_report().into_iter().map(report_line)
}

fn report_line(appointment: &Appointment) -> String {
    format!(
        "{} {} | Patient: {} | Doctor: {} | {} | Priority: {}",
        appointment.date(),
        appointment.time(),
        appointment.patient_id(),
        appointment.doctor_id(),
        appointment.kind().label(),
        appointment.priority()
    )
}

/// Header line for a patient's appointment view.
pub fn patient_header(patient: &Patient) -> String {
    format!("Appointments for {} ({})", patient.name(), patient.id())
}

/// Header line for a doctor's schedule view.
pub fn doctor_header(doctor: &Doctor) -> String {
    format!("Schedule for Dr. {} ({})", doctor.name(), doctor.specialty())
}

/// Lines for one patient's appointments in booking order.
///
/// Identifiers are resolved against the clinic's arena on demand; an empty
/// list yields exactly one informational line.
pub fn patient_appointment_lines<'a>(
    patient: &'a Patient,
    clinic: &'a Clinic,
) -> impl Iterator<Item = String> + 'a {
    let placeholder = patient
        .appointment_ids()
        .is_empty()
        .then(|| NO_APPOINTMENTS.to_owned());
    placeholder.into_iter().chain(
        patient
            .appointment_ids()
            .iter()
            .filter_map(move |&id| clinic.appointment(id))
            .map(|appointment| {
                format!(
                    "{} {} | Doctor: {} | {} | Priority: {}",
                    appointment.date(),
                    appointment.time(),
                    appointment.doctor_id(),
                    appointment.kind().label(),
                    appointment.priority()
                )
            }),
    )
}

/// Lines for one doctor's schedule in booking order.
///
/// Same shape as the patient view, but labels the other party.
pub fn doctor_schedule_lines<'a>(
    doctor: &'a Doctor,
    clinic: &'a Clinic,
) -> impl Iterator<Item = String> + 'a {
    let placeholder = doctor
        .appointment_ids()
        .is_empty()
        .then(|| NO_APPOINTMENTS.to_owned());
    placeholder.into_iter().chain(
        doctor
            .appointment_ids()
            .iter()
            .filter_map(move |&id| clinic.appointment(id))
            .map(|appointment| {
                format!(
                    "{} {} | Patient: {} | {} | Priority: {}",
                    appointment.date(),
                    appointment.time(),
                    appointment.patient_id(),
                    appointment.kind().label(),
                    appointment.priority()
                )
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_types::{NonEmptyText, Urgency};

    fn text(value: &str) -> NonEmptyText {
        NonEmptyText::new(value).expect("valid text")
    }

    fn booked_clinic() -> Clinic {
        let mut clinic = Clinic::new();
        clinic.add_patient(text("Alice"), "P1");
        clinic.add_doctor(text("Bob"), "D1", text("Cardiology"));
        clinic
            .book_appointment(Appointment::regular(
                "2024-01-01",
                "10:00",
                "P1",
                "D1",
                text("Checkup"),
            ))
            .expect("booking succeeds");
        clinic
            .book_appointment(Appointment::emergency(
                "2024-01-01",
                "11:00",
                "P1",
                "D1",
                Urgency::new(5).expect("in-range urgency"),
            ))
            .expect("booking succeeds");
        clinic
    }

    #[test]
    fn report_lines_use_pipe_format_and_priority_order() {
        let clinic = booked_clinic();
        let lines: Vec<String> = report_lines(&clinic).collect();
        assert_eq!(
            lines,
            vec![
                "2024-01-01 11:00 | Patient: P1 | Doctor: D1 | Emergency | Priority: 5",
                "2024-01-01 10:00 | Patient: P1 | Doctor: D1 | Regular | Priority: 1",
            ]
        );
    }

    #[test]
    fn empty_patient_view_is_single_informational_line() {
        let mut clinic = Clinic::new();
        clinic.add_patient(text("Alice"), "P1");
        let patient = clinic.find_patient("P1").expect("patient exists");

        let lines: Vec<String> = patient_appointment_lines(patient, &clinic).collect();
        assert_eq!(lines, vec![NO_APPOINTMENTS.to_owned()]);
    }

    #[test]
    fn patient_view_lists_bookings_in_insertion_order() {
        let clinic = booked_clinic();
        let patient = clinic.find_patient("P1").expect("patient exists");

        let lines: Vec<String> = patient_appointment_lines(patient, &clinic).collect();
        assert_eq!(
            lines,
            vec![
                "2024-01-01 10:00 | Doctor: D1 | Regular | Priority: 1",
                "2024-01-01 11:00 | Doctor: D1 | Emergency | Priority: 5",
            ]
        );
        assert_eq!(patient_header(patient), "Appointments for Alice (P1)");
    }

    #[test]
    fn doctor_view_labels_the_patient() {
        let clinic = booked_clinic();
        let doctor = clinic.find_doctor("D1").expect("doctor exists");

        let lines: Vec<String> = doctor_schedule_lines(doctor, &clinic).collect();
        assert_eq!(
            lines[0],
            "2024-01-01 10:00 | Patient: P1 | Regular | Priority: 1"
        );
        assert_eq!(doctor_header(doctor), "Schedule for Dr. Bob (Cardiology)");
    }
}
