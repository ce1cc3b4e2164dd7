//! Typed entity identities and the counter that issues them.

use std::fmt;

use serde::Serialize;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a registered patient.
    PatientId
);
entity_id!(
    /// Identity of a registered doctor.
    DoctorId
);
entity_id!(
    /// Identity of a scheduled appointment.
    AppointmentId
);

/// Issues unique, monotonically increasing identities starting at 1.
///
/// One counter per entity collection, owned by the registry. Constructors
/// allocate only after their validation passes, so a rejected entity never
/// consumes a number.
#[derive(Debug)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_one_and_is_monotonic() {
        let mut ids = IdCounter::new();
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.allocate(), 3);
    }

    #[test]
    fn default_matches_new() {
        let mut ids = IdCounter::default();
        assert_eq!(ids.allocate(), 1);
    }

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(PatientId(7).to_string(), "7");
        assert_eq!(DoctorId(2).to_string(), "2");
        assert_eq!(AppointmentId(15).to_string(), "15");
    }

    #[test]
    fn ids_of_different_entities_are_distinct_types() {
        // Compile-time property; the assertion just keeps the test honest.
        let p = PatientId(1);
        let q = PatientId(1);
        assert_eq!(p, q);
    }
}
