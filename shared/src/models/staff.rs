//! Staff Model

use serde::{Deserialize, Serialize};

/// Whether a staff member is currently working
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DutyStatus {
    #[default]
    #[serde(rename = "On Shift")]
    OnShift,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

/// Staff roster entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    /// Free-form role title ("Head Waiter", "Chef", ...)
    pub role: String,
    /// Shift window, e.g. "9am - 5pm"
    pub shift: String,
    pub status: DutyStatus,
    /// Avatar URL
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&DutyStatus::OnShift).unwrap(),
            "\"On Shift\""
        );
        let status: DutyStatus = serde_json::from_str("\"Off Duty\"").unwrap();
        assert_eq!(status, DutyStatus::OffDuty);
    }
}
