//! Menu-driven console session over the registry.
//!
//! Thin collaborator: collects line-based input, validates primitives with
//! [`crate::validation`], and delegates to [`Registry`]. Every failure path
//! prints a reason and the loop continues; only choice 12 (or end of input)
//! ends the session.

use std::io::{self, BufRead, Write};

use chrono::NaiveDateTime;

use crate::models::{AppointmentId, AppointmentStatus, DoctorId, PatientId};
use crate::registry::Registry;
use crate::validation;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Runs the session on stdin/stdout.
pub fn run(registry: &mut Registry) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(registry, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs the session on arbitrary line-based input and output.
pub fn run_loop<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Welcome to {}", crate::config::APP_NAME)?;

    loop {
        print_menu(out)?;
        let Some(line) = prompt(input, out, "Enter your choice: ")? else {
            break;
        };
        match validation::parse_integer(&line) {
            Some(1) => add_patient(registry, input, out)?,
            Some(2) => add_doctor(registry, input, out)?,
            Some(3) => view_patients(registry, out)?,
            Some(4) => view_doctors(registry, out)?,
            Some(5) => assign_patient(registry, input, out)?,
            Some(6) => update_diagnosis(registry, input, out)?,
            Some(7) => search_patients(registry, input, out)?,
            Some(8) => view_doctor_details(registry, input, out)?,
            Some(9) => schedule_appointment(registry, input, out)?,
            Some(10) => view_appointments(registry, out)?,
            Some(11) => update_appointment_status(registry, input, out)?,
            Some(12) => {
                writeln!(out, "Thank you for using {}. Goodbye!", crate::config::APP_NAME)?;
                break;
            }
            _ => writeln!(out, "Invalid choice! Please try again (1-12).")?,
        }
    }
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Main Menu ---")?;
    writeln!(out, " 1.  Add Patient")?;
    writeln!(out, " 2.  Add Doctor")?;
    writeln!(out, " 3.  View Patients")?;
    writeln!(out, " 4.  View Doctors")?;
    writeln!(out, " 5.  Assign Patient to Doctor")?;
    writeln!(out, " 6.  Update Patient Diagnosis")?;
    writeln!(out, " 7.  Search Patient")?;
    writeln!(out, " 8.  View Doctor Details")?;
    writeln!(out, " 9.  Schedule Appointment")?;
    writeln!(out, "10.  View Appointments")?;
    writeln!(out, "11.  Update Appointment Status")?;
    writeln!(out, "12.  Exit")
}

/// Reads one line. `None` means end of input, which ends the session.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    read_line(input)
}

/// Prompts for a numeric id; prints a message and yields `None` on bad input.
fn read_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<u32>> {
    let Some(line) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match validation::parse_integer(&line).and_then(|v| u32::try_from(v).ok()) {
        Some(id) => Ok(Some(id)),
        None => {
            writeln!(out, "Invalid id.")?;
            Ok(None)
        }
    }
}

fn add_patient<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt(input, out, "Enter patient name: ")? else {
        return Ok(());
    };
    if !validation::is_valid_string(&name) {
        return writeln!(out, "Invalid name. Please enter a non-empty name.");
    }

    let Some(age_line) = prompt(input, out, "Enter age (0-150): ")? else {
        return Ok(());
    };
    let Some(age) = validation::parse_integer(&age_line).filter(|a| validation::is_valid_age(*a))
    else {
        return writeln!(out, "Invalid age. Age must be between 0 and 150.");
    };

    match registry.add_patient(&name, age as u8) {
        Ok(id) => writeln!(out, "Patient added successfully! (ID: {id})"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

fn add_doctor<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt(input, out, "Enter doctor name: ")? else {
        return Ok(());
    };
    if !validation::is_valid_string(&name) {
        return writeln!(out, "Invalid name. Please enter a non-empty name.");
    }

    let Some(specialization) =
        prompt(input, out, "Enter specialization (press Enter for 'General'): ")?
    else {
        return Ok(());
    };

    match registry.add_doctor(&name, &specialization) {
        Ok(id) => writeln!(out, "Doctor added successfully! (ID: {id})"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

fn view_patients<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Patient List ---")?;
    if registry.patients().is_empty() {
        return writeln!(out, "No patients registered yet!");
    }
    for patient in registry.patients() {
        writeln!(out, "{patient}")?;
    }
    Ok(())
}

fn view_doctors<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Doctor List ---")?;
    if registry.doctors().is_empty() {
        return writeln!(out, "No doctors registered yet!");
    }
    for doctor in registry.doctors() {
        writeln!(out, "{doctor}")?;
    }
    Ok(())
}

fn assign_patient<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if registry.patients().is_empty() || registry.doctors().is_empty() {
        return writeln!(out, "Need both patients and doctors to make an assignment!");
    }

    view_patients(registry, out)?;
    let Some(patient_id) = read_id(input, out, "Enter patient ID: ")? else {
        return Ok(());
    };
    view_doctors(registry, out)?;
    let Some(doctor_id) = read_id(input, out, "Enter doctor ID: ")? else {
        return Ok(());
    };

    match registry.assign_patient(PatientId(patient_id), DoctorId(doctor_id)) {
        Ok(()) => writeln!(out, "Patient assigned successfully!"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

fn update_diagnosis<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if registry.patients().is_empty() {
        return writeln!(out, "No patients registered yet!");
    }

    view_patients(registry, out)?;
    let Some(patient_id) = read_id(input, out, "Enter patient ID: ")? else {
        return Ok(());
    };
    let Some(diagnosis) = prompt(input, out, "Enter new diagnosis: ")? else {
        return Ok(());
    };
    if !validation::is_valid_string(&diagnosis) {
        return writeln!(out, "Invalid diagnosis. Please enter a non-empty value.");
    }

    match registry.set_patient_diagnosis(PatientId(patient_id), &diagnosis) {
        Ok(()) => writeln!(out, "Diagnosis updated successfully!"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

fn search_patients<R: BufRead, W: Write>(
    registry: &Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if registry.patients().is_empty() {
        return writeln!(out, "No patients registered yet!");
    }

    let Some(term) = prompt(input, out, "Enter patient name to search (partial match supported): ")?
    else {
        return Ok(());
    };
    if !validation::is_valid_string(&term) {
        return writeln!(out, "Invalid search term.");
    }

    writeln!(out)?;
    writeln!(out, "--- Search Results ---")?;
    let hits = registry.search_patients(&term);
    if hits.is_empty() {
        return writeln!(out, "No patients found with that name!");
    }
    for patient in hits {
        writeln!(out, "{patient}")?;
    }
    Ok(())
}

fn view_doctor_details<R: BufRead, W: Write>(
    registry: &Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if registry.doctors().is_empty() {
        return writeln!(out, "No doctors registered yet!");
    }

    view_doctors(registry, out)?;
    let Some(doctor_id) = read_id(input, out, "Enter doctor ID to view details: ")? else {
        return Ok(());
    };
    let Some(doctor) = registry.doctor(DoctorId(doctor_id)) else {
        return writeln!(out, "Doctor not found!");
    };

    writeln!(out)?;
    writeln!(out, "--- Doctor Details ---")?;
    writeln!(out, "{doctor}")?;
    writeln!(out, "Assigned Patients:")?;
    if doctor.assigned_patients().is_empty() {
        return writeln!(out, "  (none)");
    }
    for id in doctor.assigned_patients() {
        if let Some(patient) = registry.patient(*id) {
            writeln!(out, "  {patient}")?;
        }
    }
    Ok(())
}

fn schedule_appointment<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if registry.patients().is_empty() || registry.doctors().is_empty() {
        return writeln!(out, "Need both patients and doctors to schedule an appointment!");
    }

    view_patients(registry, out)?;
    let Some(patient_id) = read_id(input, out, "Enter patient ID: ")? else {
        return Ok(());
    };
    view_doctors(registry, out)?;
    let Some(doctor_id) = read_id(input, out, "Enter doctor ID: ")? else {
        return Ok(());
    };

    let Some(purpose) = prompt(input, out, "Enter appointment purpose: ")? else {
        return Ok(());
    };
    if !validation::is_valid_string(&purpose) {
        return writeln!(out, "Invalid purpose. Please enter a non-empty value.");
    }

    let Some(time_line) = prompt(input, out, "Enter appointment time (YYYY-MM-DD HH:MM): ")? else {
        return Ok(());
    };
    let Ok(scheduled_for) = NaiveDateTime::parse_from_str(time_line.trim(), TIME_FORMAT) else {
        return writeln!(out, "Invalid time. Use the format YYYY-MM-DD HH:MM.");
    };

    match registry.schedule_appointment(
        PatientId(patient_id),
        DoctorId(doctor_id),
        scheduled_for,
        &purpose,
    ) {
        Ok(id) => writeln!(out, "Appointment scheduled successfully! (ID: {id})"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

fn view_appointments<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Appointments ---")?;
    if registry.appointments().is_empty() {
        return writeln!(out, "No appointments scheduled yet!");
    }
    for appointment in registry.appointments() {
        writeln!(out, "{}", registry.appointment_line(appointment))?;
    }
    Ok(())
}

fn update_appointment_status<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if registry.appointments().is_empty() {
        return writeln!(out, "No appointments to update!");
    }

    view_appointments(registry, out)?;
    let Some(appointment_id) = read_id(input, out, "Enter appointment ID: ")? else {
        return Ok(());
    };
    let Some(appointment) = registry.appointment(AppointmentId(appointment_id)) else {
        return writeln!(out, "Appointment not found!");
    };

    writeln!(out)?;
    writeln!(out, "Current Status: {}", appointment.status())?;
    writeln!(out, "1. Scheduled")?;
    writeln!(out, "2. Completed")?;
    writeln!(out, "3. Cancelled")?;
    let Some(choice_line) = prompt(input, out, "Enter new status (1-3): ")? else {
        return Ok(());
    };
    let status = match validation::parse_integer_in_range(&choice_line, 1, 3) {
        Some(1) => AppointmentStatus::Scheduled,
        Some(2) => AppointmentStatus::Completed,
        Some(3) => AppointmentStatus::Cancelled,
        _ => return writeln!(out, "Invalid status choice."),
    };

    match registry.update_appointment_status(AppointmentId(appointment_id), status) {
        Ok(()) => writeln!(out, "Appointment status updated successfully!"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use std::io::Cursor;

    fn run_script(script: &str) -> (Registry, String) {
        let mut registry = Registry::new();
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run_loop(&mut registry, &mut input, &mut out).unwrap();
        (registry, String::from_utf8(out).unwrap())
    }

    #[test]
    fn add_and_view_patient() {
        let (registry, out) = run_script("1\nAlice\n30\n3\n12\n");
        assert_eq!(registry.patients().len(), 1);
        assert!(out.contains("Patient added successfully! (ID: 1)"));
        assert!(out.contains("Name: Alice"));
    }

    #[test]
    fn invalid_age_reprompts_the_menu_without_adding() {
        let (registry, out) = run_script("1\nAlice\ntwo hundred\n12\n");
        assert!(registry.patients().is_empty());
        assert!(out.contains("Invalid age."));
    }

    #[test]
    fn blank_specialization_defaults_to_general() {
        let (registry, out) = run_script("2\nBob\n\n4\n12\n");
        assert!(out.contains("Doctor added successfully! (ID: 1)"));
        assert!(out.contains("Specialization: General"));
        assert_eq!(registry.doctors()[0].specialization(), "General");
    }

    #[test]
    fn assignment_flow_end_to_end() {
        let (registry, out) = run_script("1\nAlice\n30\n2\nBob\nCardiology\n5\n1\n1\n8\n1\n12\n");
        assert!(out.contains("Patient assigned successfully!"));
        assert!(out.contains("Assigned Patients:"));
        assert!(out.contains("Doctor: Bob"));
        assert_eq!(registry.patients()[0].assigned_doctor(), "Bob");
    }

    #[test]
    fn assignment_requires_both_lists_non_empty() {
        let (_, out) = run_script("5\n12\n");
        assert!(out.contains("Need both patients and doctors to make an assignment!"));
    }

    #[test]
    fn schedule_and_update_status() {
        let time = (Local::now().naive_local() + Duration::days(7)).format("%Y-%m-%d %H:%M");
        let script =
            format!("1\nAlice\n30\n2\nBob\n\n9\n1\n1\nCheckup\n{time}\n10\n11\n1\n2\n12\n");
        let (registry, out) = run_script(&script);

        assert!(out.contains("Appointment scheduled successfully! (ID: 1)"));
        assert!(out.contains("Purpose: Checkup | Status: Scheduled"));
        assert!(out.contains("Appointment status updated successfully!"));
        assert_eq!(registry.appointments()[0].status(), AppointmentStatus::Completed);
    }

    #[test]
    fn scheduling_a_past_time_reports_the_reason() {
        let time = (Local::now().naive_local() - Duration::days(1)).format("%Y-%m-%d %H:%M");
        let script = format!("1\nAlice\n30\n2\nBob\n\n9\n1\n1\nCheckup\n{time}\n12\n");
        let (registry, out) = run_script(&script);
        assert!(registry.appointments().is_empty());
        assert!(out.contains("must be strictly in the future"));
    }

    #[test]
    fn search_reports_misses() {
        let (_, out) = run_script("1\nAlice\n30\n7\nzzz\n7\nali\n12\n");
        assert!(out.contains("No patients found with that name!"));
        assert!(out.contains("Name: Alice"));
    }

    #[test]
    fn unknown_menu_choice_reprompts() {
        let (_, out) = run_script("99\n12\n");
        assert!(out.contains("Invalid choice! Please try again (1-12)."));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (registry, _) = run_script("1\nAlice\n30\n");
        assert_eq!(registry.patients().len(), 1);
    }
}
