//! # Clinic Core
//!
//! Core scheduling logic for the clinic appointment system.
//!
//! This crate contains the pure in-memory data model and its operations:
//! - Patient and doctor registration with linear ID lookup
//! - Appointment booking and cancellation against an id-keyed arena
//! - Priority-ordered reporting and per-person schedule views
//! - Optional JSON seed data for pre-populating a clinic
//!
//! **No I/O concerns**: prompting, input re-validation, and printing belong
//! in the `clinic-cli` binary.

pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod error;
pub mod patient;
pub mod report;
pub mod seed;

pub use appointment::{Appointment, AppointmentId, AppointmentKind};
pub use clinic::Clinic;
pub use doctor::Doctor;
pub use error::{ScheduleError, ScheduleResult};
pub use patient::Patient;
