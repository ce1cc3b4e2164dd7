//! Appointment entity: one patient, one doctor, a future time, a status.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::doctor::Doctor;
use super::enums::AppointmentStatus;
use super::ids::{AppointmentId, DoctorId, IdCounter, PatientId};
use super::patient::Patient;
use super::DomainError;
use crate::validation;

/// A scheduled appointment.
///
/// Construction requires resolved `Patient` and `Doctor` references, so a
/// dangling appointment cannot exist. The stored time is strictly in the
/// future at construction and at every successful reschedule.
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    scheduled_for: NaiveDateTime,
    purpose: String,
    status: AppointmentStatus,
    notes: String,
}

impl Appointment {
    pub fn new(
        ids: &mut IdCounter,
        patient: &Patient,
        doctor: &Doctor,
        scheduled_for: NaiveDateTime,
        purpose: &str,
    ) -> Result<Self, DomainError> {
        if scheduled_for <= Local::now().naive_local() {
            return Err(past_time_error());
        }
        if !validation::is_valid_string(purpose) {
            return Err(DomainError::invalid("purpose", "appointment purpose cannot be empty"));
        }

        Ok(Self {
            id: AppointmentId(ids.allocate()),
            patient_id: patient.id(),
            doctor_id: doctor.id(),
            scheduled_for,
            purpose: purpose.trim().to_string(),
            status: AppointmentStatus::Scheduled,
            notes: String::new(),
        })
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn scheduled_for(&self) -> NaiveDateTime {
        self.scheduled_for
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Any of the three statuses may be set at any time, including moving
    /// out of a terminal status. Rescheduling is what terminal states forbid.
    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.trim().to_string();
    }

    /// Moves the appointment to a new time.
    ///
    /// Fails without touching the stored time: `InvalidArgument` when the
    /// new time is not strictly in the future, `IllegalState` when the
    /// current status is terminal.
    pub fn reschedule(&mut self, new_time: NaiveDateTime) -> Result<(), DomainError> {
        if new_time <= Local::now().naive_local() {
            return Err(past_time_error());
        }
        if self.status.is_terminal() {
            return Err(DomainError::IllegalState {
                operation: "reschedule",
                status: self.status.as_str(),
            });
        }
        self.scheduled_for = new_time;
        Ok(())
    }
}

fn past_time_error() -> DomainError {
    DomainError::invalid("appointment time", "must be strictly in the future")
}
