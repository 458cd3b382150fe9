use std::path::PathBuf;

use clap::Parser;
use clinic_core::{report, seed, Appointment, Clinic};
use clinic_types::{NonEmptyText, Urgency};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Interactive clinic appointment scheduling")]
struct Cli {
    /// JSON file with initial patients, doctors, and appointments
    #[arg(long)]
    seed: Option<PathBuf>,
}

const MENU: &str = "\n1.Add Patient 2.Add Doctor 3.Book Appointment\n\
                    4.View Report 5.Cancel Appointment 6.Patient Appointments\n\
                    7.Doctor Schedule 8.Exit";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut clinic = Clinic::new();

    if let Some(path) = cli.seed.as_deref() {
        let document = seed::load_from_path(path)?;
        let booked = seed::apply(&mut clinic, document);
        println!("Seeded clinic with {} appointment(s).", booked);
    }

    let mut editor = DefaultEditor::new()?;

    loop {
        println!("{MENU}");
        let choice = match editor.readline("Choice: ") {
            Ok(line) => line,
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let outcome = match choice.trim() {
            "1" => add_patient(&mut editor, &mut clinic),
            "2" => add_doctor(&mut editor, &mut clinic),
            "3" => book_appointment(&mut editor, &mut clinic),
            "4" => {
                view_report(&clinic);
                Ok(())
            }
            "5" => cancel_appointment(&mut editor, &mut clinic),
            "6" => patient_appointments(&mut editor, &clinic),
            "7" => doctor_schedule(&mut editor, &clinic),
            "8" => break,
            _ => {
                println!("Unknown choice.");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn add_patient(editor: &mut DefaultEditor, clinic: &mut Clinic) -> rustyline::Result<()> {
    let name = prompt_text(editor, "Name: ")?;
    let id = prompt_raw(editor, "Patient ID: ")?;
    clinic.add_patient(name, id);
    println!("Patient added.");
    Ok(())
}

fn add_doctor(editor: &mut DefaultEditor, clinic: &mut Clinic) -> rustyline::Result<()> {
    let name = prompt_text(editor, "Name: ")?;
    let id = prompt_raw(editor, "Doctor ID: ")?;
    let specialty = prompt_text(editor, "Specialty: ")?;
    clinic.add_doctor(name, id, specialty);
    println!("Doctor added.");
    Ok(())
}

fn book_appointment(editor: &mut DefaultEditor, clinic: &mut Clinic) -> rustyline::Result<()> {
    let patient_id = prompt_raw(editor, "Patient ID: ")?;
    let doctor_id = prompt_raw(editor, "Doctor ID: ")?;
    let date = prompt_raw(editor, "Date (YYYY-MM-DD): ")?;
    let time = prompt_raw(editor, "Time (HH:MM): ")?;

    let appointment = loop {
        let kind = prompt_raw(editor, "Type (Regular/Emergency): ")?;
        match kind.to_lowercase().as_str() {
            "regular" => {
                let reason = prompt_text(editor, "Reason: ")?;
                break Appointment::regular(&date, &time, &patient_id, &doctor_id, reason);
            }
            "emergency" => {
                let urgency = prompt_urgency(editor)?;
                break Appointment::emergency(&date, &time, &patient_id, &doctor_id, urgency);
            }
            _ => println!("Invalid input."),
        }
    };

    match clinic.book_appointment(appointment) {
        Ok(_) => println!("Appointment booked."),
        Err(err) => println!("Invalid patient or doctor ID ({err})."),
    }
    Ok(())
}

fn view_report(clinic: &Clinic) {
    println!("\n--- Appointment Report ---");
    let mut empty = true;
    for line in report::report_lines(clinic) {
        empty = false;
        println!("{line}");
    }
    if empty {
        println!("{}", report::NO_APPOINTMENTS);
    }
}

fn cancel_appointment(editor: &mut DefaultEditor, clinic: &mut Clinic) -> rustyline::Result<()> {
    let patient_id = prompt_raw(editor, "Patient ID: ")?;
    let doctor_id = prompt_raw(editor, "Doctor ID: ")?;
    let date = prompt_raw(editor, "Date: ")?;
    let time = prompt_raw(editor, "Time: ")?;

    match clinic.cancel_appointment(&patient_id, &doctor_id, &date, &time) {
        Ok(()) => println!("Appointment cancelled."),
        Err(_) => println!("Appointment not found."),
    }
    Ok(())
}

fn patient_appointments(editor: &mut DefaultEditor, clinic: &Clinic) -> rustyline::Result<()> {
    let id = prompt_raw(editor, "Patient ID: ")?;
    match clinic.find_patient(&id) {
        Some(patient) => {
            println!("\n{}", report::patient_header(patient));
            for line in report::patient_appointment_lines(patient, clinic) {
                println!("{line}");
            }
        }
        None => println!("No patient with ID {id}."),
    }
    Ok(())
}

fn doctor_schedule(editor: &mut DefaultEditor, clinic: &Clinic) -> rustyline::Result<()> {
    let id = prompt_raw(editor, "Doctor ID: ")?;
    match clinic.find_doctor(&id) {
        Some(doctor) => {
            println!("\n{}", report::doctor_header(doctor));
            for line in report::doctor_schedule_lines(doctor, clinic) {
                println!("{line}");
            }
        }
        None => println!("No doctor with ID {id}."),
    }
    Ok(())
}

/// Prompts until the input is non-empty after trimming.
fn prompt_raw(editor: &mut DefaultEditor, prompt: &str) -> rustyline::Result<String> {
    loop {
        let line = editor.readline(prompt)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_owned());
        }
        println!("Input cannot be empty.");
    }
}

/// Prompts until the input passes `NonEmptyText` validation.
fn prompt_text(editor: &mut DefaultEditor, prompt: &str) -> rustyline::Result<NonEmptyText> {
    loop {
        match NonEmptyText::new(editor.readline(prompt)?) {
            Ok(text) => return Ok(text),
            Err(_) => println!("Input cannot be empty."),
        }
    }
}

/// Prompts until the input parses as an in-range urgency.
fn prompt_urgency(editor: &mut DefaultEditor) -> rustyline::Result<Urgency> {
    loop {
        let line = editor.readline("Urgency (1-5): ")?;
        match line.trim().parse::<u8>().ok().and_then(|v| Urgency::new(v).ok()) {
            Some(urgency) => return Ok(urgency),
            None => println!("Invalid input."),
        }
    }
}
