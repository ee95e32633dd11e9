//! Staff roster views

use shared::models::{DutyStatus, StaffMember};

/// Staff currently on shift, in roster order
pub fn on_duty(staff: &[StaffMember]) -> impl Iterator<Item = &StaffMember> + Clone {
    staff.iter().filter(|m| m.status == DutyStatus::OnShift)
}

pub fn on_duty_count(staff: &[StaffMember]) -> usize {
    on_duty(staff).count()
}

/// Staff with the given role title, ignoring case
pub fn by_role<'a>(
    staff: &'a [StaffMember],
    role: &str,
) -> impl Iterator<Item = &'a StaffMember> + Clone + use<'a> {
    let role = role.to_lowercase();
    staff.iter().filter(move |m| m.role.to_lowercase() == role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_on_duty() {
        let staff = seed::staff_members();
        assert_eq!(on_duty_count(&staff), 5);
        assert!(on_duty(&staff).all(|m| m.name != "Michael Brown"));
        assert_eq!(on_duty_count(&[]), 0);
    }

    #[test]
    fn test_by_role() {
        let staff = seed::staff_members();
        let waiters: Vec<&str> = by_role(&staff, "waiter").map(|m| m.name.as_str()).collect();
        assert_eq!(waiters, vec!["Maria Garcia", "Emily White"]);
        assert_eq!(by_role(&staff, "Sommelier").count(), 0);
    }
}
