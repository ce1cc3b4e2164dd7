//! Appointment status values and their exact display literals.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

/// Status of an appointment.
///
/// `Completed` and `Cancelled` are terminal with respect to rescheduling
/// only; `set_status` still moves freely between all three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Terminal statuses forbid rescheduling.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    /// Case-sensitive: only the three exact literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::invalid(
                "status",
                format!("must be 'Scheduled', 'Completed', or 'Cancelled', got '{s}'"),
            )),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
