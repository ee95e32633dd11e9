//! Mock seed data for the front-of-house screens
//!
//! Stands in for the catalog, floor and roster providers when no catalog
//! file is configured.

use rust_decimal::Decimal;
use shared::models::{CatalogItem, DiningTable, DutyStatus, MenuCategory, StaffMember, TableStatus};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/100x100.png";
const PLACEHOLDER_AVATAR: &str = "https://placehold.co/96x96.png";

/// Default menu: four starters, four mains, four drinks
pub fn menu_items() -> Vec<CatalogItem> {
    const MENU: &[(i64, &str, i64, MenuCategory)] = &[
        // Starters
        (1, "Bruschetta", 850, MenuCategory::Starters),
        (2, "Caprese Salad", 1000, MenuCategory::Starters),
        (3, "Garlic Bread", 600, MenuCategory::Starters),
        (4, "Fried Calamari", 1250, MenuCategory::Starters),
        // Mains
        (5, "Margherita Pizza", 1500, MenuCategory::Mains),
        (6, "Spaghetti Carbonara", 1800, MenuCategory::Mains),
        (7, "Grilled Salmon", 2250, MenuCategory::Mains),
        (8, "Chicken Parmesan", 2000, MenuCategory::Mains),
        // Drinks
        (9, "Coca-Cola", 350, MenuCategory::Drinks),
        (10, "Fresh Orange Juice", 500, MenuCategory::Drinks),
        (11, "Espresso", 300, MenuCategory::Drinks),
        (12, "House Red Wine", 700, MenuCategory::Drinks),
    ];

    MENU.iter()
        .map(|&(id, name, cents, category)| {
            CatalogItem::new(id, name, Decimal::new(cents, 2), category, PLACEHOLDER_IMAGE)
        })
        .collect()
}

/// Default floor: twelve tables
pub fn tables() -> Vec<DiningTable> {
    use TableStatus::*;
    const FLOOR: &[TableStatus] = &[
        Free, Occupied, Serving, Free, Occupied, Billing, Free, Free, Serving, Occupied, Free,
        Occupied,
    ];

    FLOOR
        .iter()
        .zip(1..)
        .map(|(&status, n)| DiningTable::new(i64::from(n), n, status))
        .collect()
}

/// Default roster
pub fn staff_members() -> Vec<StaffMember> {
    const ROSTER: &[(i64, &str, &str, &str, DutyStatus)] = &[
        (1, "James Smith", "Head Waiter", "9am - 5pm", DutyStatus::OnShift),
        (2, "Maria Garcia", "Waiter", "9am - 5pm", DutyStatus::OnShift),
        (3, "David Johnson", "Chef", "8am - 4pm", DutyStatus::OnShift),
        (4, "Emily White", "Waiter", "5pm - 11pm", DutyStatus::OnShift),
        (5, "Michael Brown", "Sous Chef", "5pm - 11pm", DutyStatus::OffDuty),
        (6, "Jessica Lee", "Hostess", "5pm - 11pm", DutyStatus::OnShift),
    ];

    ROSTER
        .iter()
        .map(|&(id, name, role, shift, status)| StaffMember {
            id,
            name: name.to_string(),
            role: role.to_string(),
            shift: shift.to_string(),
            status,
            avatar: PLACEHOLDER_AVATAR.to_string(),
        })
        .collect()
}
