//! Patient entity: fixed identity plus mutable clinical and contact fields.

use std::fmt;

use serde::Serialize;

use super::ids::{IdCounter, PatientId};
use super::DomainError;
use crate::validation;

/// Diagnosis placeholder until a real one is recorded.
const DEFAULT_DIAGNOSIS: &str = "Pending";

/// Assigned-doctor placeholder until an assignment happens.
const DEFAULT_ASSIGNED_DOCTOR: &str = "Unassigned";

/// A registered patient.
///
/// Identity, name, and age are fixed at construction; the clinical and
/// contact fields mutate through validated setters only, so the struct is
/// never in a partially invalid state.
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u8,
    diagnosis: String,
    assigned_doctor: String,
    contact_number: Option<String>,
    medical_history: Option<String>,
}

impl Patient {
    /// Validates before allocating an identity: a rejected patient consumes
    /// nothing from the counter.
    pub fn new(ids: &mut IdCounter, name: &str, age: u8) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid("name", "patient name cannot be empty"));
        }
        if age > validation::MAX_PATIENT_AGE {
            return Err(DomainError::invalid(
                "age",
                format!("patient age must be between 0 and {}", validation::MAX_PATIENT_AGE),
            ));
        }

        Ok(Self {
            id: PatientId(ids.allocate()),
            name: name.to_string(),
            age,
            diagnosis: DEFAULT_DIAGNOSIS.into(),
            assigned_doctor: DEFAULT_ASSIGNED_DOCTOR.into(),
            contact_number: None,
            medical_history: None,
        })
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn assigned_doctor(&self) -> &str {
        &self.assigned_doctor
    }

    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number.as_deref()
    }

    pub fn medical_history(&self) -> Option<&str> {
        self.medical_history.as_deref()
    }

    pub fn set_diagnosis(&mut self, diagnosis: &str) -> Result<(), DomainError> {
        if !validation::is_valid_string(diagnosis) {
            return Err(DomainError::invalid("diagnosis", "diagnosis cannot be empty"));
        }
        self.diagnosis = diagnosis.trim().to_string();
        Ok(())
    }

    /// Crate-private: `Doctor::assign_patient` is the intended caller.
    pub(crate) fn set_assigned_doctor(&mut self, doctor: &str) -> Result<(), DomainError> {
        if !validation::is_valid_string(doctor) {
            return Err(DomainError::invalid("assigned doctor", "doctor name cannot be empty"));
        }
        self.assigned_doctor = doctor.trim().to_string();
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

    pub fn set_medical_history(&mut self, history: &str) -> Result<(), DomainError> {
        if !validation::is_valid_string(history) {
            return Err(DomainError::invalid("medical history", "medical history cannot be empty"));
        }
        self.medical_history = Some(history.trim().to_string());
        Ok(())
    }
}

impl fmt::Display for Patient {
    /// Field order is part of the display contract: id, name, age,
    /// diagnosis, assigned doctor, contact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient ID: {} | Name: {} | Age: {} | Diagnosis: {} | Doctor: {} | Contact: {}",
            self.id,
            self.name,
            self.age,
            self.diagnosis,
            self.assigned_doctor,
            self.contact_number.as_deref().unwrap_or("N/A"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_trims_name_and_applies_defaults() {
        let mut ids = IdCounter::new();
        let patient = Patient::new(&mut ids, "  Alice  ", 30).unwrap();
        assert_eq!(patient.id(), PatientId(1));
        assert_eq!(patient.name(), "Alice");
        assert_eq!(patient.age(), 30);
        assert_eq!(patient.diagnosis(), "Pending");
        assert_eq!(patient.assigned_doctor(), "Unassigned");
        assert_eq!(patient.contact_number(), None);
        assert_eq!(patient.medical_history(), None);
    }

    #[test]
    fn identities_increase_across_constructions() {
        let mut ids = IdCounter::new();
        let first = Patient::new(&mut ids, "Alice", 30).unwrap();
        let second = Patient::new(&mut ids, "Bob", 45).unwrap();
        assert!(second.id() > first.id());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut ids = IdCounter::new();
        let err = Patient::new(&mut ids, "   ", 30).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { field: "name", .. }));
    }

    #[test]
    fn age_above_150_is_rejected_without_consuming_an_identity() {
        let mut ids = IdCounter::new();
        assert!(Patient::new(&mut ids, "Bob", 200).is_err());
        let next = Patient::new(&mut ids, "Carol", 40).unwrap();
        assert_eq!(next.id(), PatientId(1));
    }

    #[test]
    fn boundary_ages_are_accepted() {
        let mut ids = IdCounter::new();
        assert!(Patient::new(&mut ids, "Newborn", 0).is_ok());
        assert!(Patient::new(&mut ids, "Elder", 150).is_ok());
        assert!(Patient::new(&mut ids, "Nobody", 151).is_err());
    }

    #[test]
    fn set_diagnosis_validates_and_trims() {
        let mut ids = IdCounter::new();
        let mut patient = Patient::new(&mut ids, "Alice", 30).unwrap();
        patient.set_diagnosis("  Influenza ").unwrap();
        assert_eq!(patient.diagnosis(), "Influenza");

        let err = patient.set_diagnosis("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { field: "diagnosis", .. }));
        assert_eq!(patient.diagnosis(), "Influenza");
    }

    #[test]
    fn set_contact_number_enforces_the_pattern() {
        let mut ids = IdCounter::new();
        let mut patient = Patient::new(&mut ids, "Alice", 30).unwrap();
        patient.set_contact_number("+1 (555) 123-4567").unwrap();
        assert_eq!(patient.contact_number(), Some("+1 (555) 123-4567"));

        assert!(patient.set_contact_number("short").is_err());
        assert_eq!(patient.contact_number(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn set_medical_history_rejects_blank() {
        let mut ids = IdCounter::new();
        let mut patient = Patient::new(&mut ids, "Alice", 30).unwrap();
        assert!(patient.set_medical_history(" ").is_err());
        patient.set_medical_history("Asthma since childhood").unwrap();
        assert_eq!(patient.medical_history(), Some("Asthma since childhood"));
    }

    #[test]
    fn summary_line_keeps_the_field_order() {
        let mut ids = IdCounter::new();
        let patient = Patient::new(&mut ids, "Alice", 30).unwrap();
        assert_eq!(
            patient.to_string(),
            "Patient ID: 1 | Name: Alice | Age: 30 | Diagnosis: Pending | Doctor: Unassigned | Contact: N/A"
        );
    }

    #[test]
    fn patient_serializes() {
        let mut ids = IdCounter::new();
        let patient = Patient::new(&mut ids, "Alice", 30).unwrap();
        let json = serde_json::to_string(&patient).unwrap();
        assert!(json.contains("\"name\":\"Alice\""));
        assert!(json.contains("\"diagnosis\":\"Pending\""));
    }
}
