//! Doctor entity: identity, specialization, and the assigned-patient list.

use std::fmt;

use serde::Serialize;

use super::ids::{DoctorId, IdCounter, PatientId};
use super::patient::Patient;
use super::DomainError;
use crate::validation;

/// Specialization used when none is given.
const DEFAULT_SPECIALIZATION: &str = "General";

/// A registered doctor.
///
/// Owns the list of assigned patient identities (insertion order, no
/// duplicates). The relation is asymmetric: the patient side stores only
/// this doctor's display name, set as a side effect of assignment.
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialization: String,
    assigned_patients: Vec<PatientId>,
    license_number: Option<String>,
    contact_number: Option<String>,
    years_of_experience: u8,
}

impl Doctor {
    /// A blank specialization is coerced to "General", not rejected.
    pub fn new(ids: &mut IdCounter, name: &str, specialization: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid("name", "doctor name cannot be empty"));
        }
        let specialization = match specialization.trim() {
            "" => DEFAULT_SPECIALIZATION,
            s => s,
        };

        Ok(Self {
            id: DoctorId(ids.allocate()),
            name: name.to_string(),
            specialization: specialization.to_string(),
            assigned_patients: Vec::new(),
            license_number: None,
            contact_number: None,
            years_of_experience: 0,
        })
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn assigned_patients(&self) -> &[PatientId] {
        &self.assigned_patients
    }

    pub fn license_number(&self) -> Option<&str> {
        self.license_number.as_deref()
    }

    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number.as_deref()
    }

    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience
    }

    /// Assigns a patient to this doctor.
    ///
    /// Idempotent: an already-assigned patient is a silent no-op. Otherwise
    /// the patient's assigned-doctor display name is updated and the patient
    /// id appended, in that order, so a failure leaves no partial state.
    pub fn assign_patient(&mut self, patient: &mut Patient) -> Result<(), DomainError> {
        if self.assigned_patients.contains(&patient.id()) {
            return Ok(());
        }
        patient.set_assigned_doctor(&self.name)?;
        self.assigned_patients.push(patient.id());
        Ok(())
    }

    /// Removes a patient from this doctor's list. Returns whether a removal
    /// occurred; an absent id is `false`, never an error.
    pub fn remove_patient(&mut self, id: PatientId) -> bool {
        let before = self.assigned_patients.len();
        self.assigned_patients.retain(|p| *p != id);
        self.assigned_patients.len() != before
    }

    pub fn set_license_number(&mut self, license: &str) -> Result<(), DomainError> {
        if !validation::is_valid_string(license) {
            return Err(DomainError::invalid("license number", "license number cannot be empty"));
        }
        self.license_number = Some(license.trim().to_string());
        Ok(())
    }

    pub fn set_contact_number(&mut self, contact: &str) -> Result<(), DomainError> {
        if !validation::is_valid_contact_number(contact) {
            return Err(DomainError::invalid(
                "contact number",
                "expected at least 10 digits, spaces, hyphens, '+' or parentheses",
            ));
        }
        self.contact_number = Some(contact.trim().to_string());
        Ok(())
    }

    pub fn set_years_of_experience(&mut self, years: u8) -> Result<(), DomainError> {
        if years > validation::MAX_EXPERIENCE_YEARS {
            return Err(DomainError::invalid(
                "years of experience",
                format!("must be between 0 and {}", validation::MAX_EXPERIENCE_YEARS),
            ));
        }
        self.years_of_experience = years;
        Ok(())
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor ID: {} | Name: {} | Specialization: {} | Experience: {} years | Patients: {}",
            self.id,
            self.name,
            self.specialization,
            self.years_of_experience,
            self.assigned_patients.len(),
        )
    }
}
