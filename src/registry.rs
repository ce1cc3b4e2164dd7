//! Session registry: owns the three entity collections and mediates
//! cross-entity operations for one console session.
//!
//! Collections keep insertion order, nothing is ever deleted, and lookups
//! are linear scans. Plain lookups return `Option` (an unresolved id is an
//! absent result, not an error); mediation operations resolve every id
//! before mutating anything, so a failure leaves no partial state.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::{
    Appointment, AppointmentId, AppointmentStatus, Doctor, DoctorId, DomainError, IdCounter,
    Patient, PatientId,
};

#[derive(Error, Debug)]
pub enum RegistryError {
    /// A mediation step referenced an identity with no matching entity.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: u32 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// In-memory store for one operator session.
#[derive(Debug, Default)]
pub struct Registry {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    patient_ids: IdCounter,
    doctor_ids: IdCounter,
    appointment_ids: IdCounter,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Entity creation ─────────────────────────────────────────────────

    pub fn add_patient(&mut self, name: &str, age: u8) -> Result<PatientId, DomainError> {
        let patient = Patient::new(&mut self.patient_ids, name, age)?;
        let id = patient.id();
        self.patients.push(patient);
        tracing::info!(%id, "patient registered");
        Ok(id)
    }

    pub fn add_doctor(&mut self, name: &str, specialization: &str) -> Result<DoctorId, DomainError> {
        let doctor = Doctor::new(&mut self.doctor_ids, name, specialization)?;
        let id = doctor.id();
        self.doctors.push(doctor);
        tracing::info!(%id, "doctor registered");
        Ok(id)
    }

    // ─── Lookups ─────────────────────────────────────────────────────────

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id() == id)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Case-insensitive partial match on patient names, insertion order.
    pub fn search_patients(&self, fragment: &str) -> Vec<&Patient> {
        let needle = fragment.trim().to_lowercase();
        self.patients
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    // ─── Mediation ───────────────────────────────────────────────────────

    /// Assigns a patient to a doctor, resolving both ids first.
    pub fn assign_patient(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
    ) -> Result<(), RegistryError> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id() == patient_id)
            .ok_or(RegistryError::NotFound { entity_type: "Patient", id: patient_id.0 })?;
        let doctor = self
            .doctors
            .iter_mut()
            .find(|d| d.id() == doctor_id)
            .ok_or(RegistryError::NotFound { entity_type: "Doctor", id: doctor_id.0 })?;

        doctor.assign_patient(patient)?;
        tracing::info!(patient = %patient_id, doctor = %doctor_id, "patient assigned");
        Ok(())
    }

    /// Constructs and stores an appointment for a resolved patient/doctor pair.
    pub fn schedule_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        scheduled_for: NaiveDateTime,
        purpose: &str,
    ) -> Result<AppointmentId, RegistryError> {
        let patient = self
            .patients
            .iter()
            .find(|p| p.id() == patient_id)
            .ok_or(RegistryError::NotFound { entity_type: "Patient", id: patient_id.0 })?;
        let doctor = self
            .doctors
            .iter()
            .find(|d| d.id() == doctor_id)
            .ok_or(RegistryError::NotFound { entity_type: "Doctor", id: doctor_id.0 })?;

        let appointment =
            Appointment::new(&mut self.appointment_ids, patient, doctor, scheduled_for, purpose)?;
        let id = appointment.id();
        self.appointments.push(appointment);
        tracing::info!(%id, patient = %patient_id, doctor = %doctor_id, "appointment scheduled");
        Ok(id)
    }

    pub fn update_appointment_status(
        &mut self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), RegistryError> {
        self.appointment_entry(id)?.set_status(status);
        tracing::info!(%id, %status, "appointment status updated");
        Ok(())
    }

    pub fn reschedule_appointment(
        &mut self,
        id: AppointmentId,
        new_time: NaiveDateTime,
    ) -> Result<(), RegistryError> {
        self.appointment_entry(id)?.reschedule(new_time)?;
        Ok(())
    }

    pub fn set_appointment_notes(
        &mut self,
        id: AppointmentId,
        notes: &str,
    ) -> Result<(), RegistryError> {
        self.appointment_entry(id)?.set_notes(notes);
        Ok(())
    }

    pub fn set_patient_diagnosis(
        &mut self,
        id: PatientId,
        diagnosis: &str,
    ) -> Result<(), RegistryError> {
        self.patients
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(RegistryError::NotFound { entity_type: "Patient", id: id.0 })?
            .set_diagnosis(diagnosis)?;
        Ok(())
    }

    // ─── Display ─────────────────────────────────────────────────────────

    /// Summary line with the patient and doctor display names resolved.
    /// The ids always resolve because entities are never deleted.
    pub fn appointment_line(&self, appointment: &Appointment) -> String {
        let patient = self
            .patient(appointment.patient_id())
            .map(|p| p.name())
            .unwrap_or("Unknown");
        let doctor = self
            .doctor(appointment.doctor_id())
            .map(|d| d.name())
            .unwrap_or("Unknown");
        format!(
            "Appointment ID: {} | Patient: {} | Doctor: {} | Time: {} | Purpose: {} | Status: {}",
            appointment.id(),
            patient,
            doctor,
            appointment.scheduled_for().format("%Y-%m-%d %H:%M"),
            appointment.purpose(),
            appointment.status(),
        )
    }

    fn appointment_entry(&mut self, id: AppointmentId) -> Result<&mut Appointment, RegistryError> {
        self.appointments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(RegistryError::NotFound { entity_type: "Appointment", id: id.0 })
    }
}
