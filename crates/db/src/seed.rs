//! Mock data for local development and demos.

use campus_core::error::CoreError;
use campus_core::forms::{CampusInput, ClassroomInput};
use campus_core::status::EntityStatus;

use crate::Store;

/// `(name, province, city, district, detail_address, status)`
const CAMPUSES: &[(&str, &str, &str, &str, &str, EntityStatus)] = &[
    (
        "Xihu Campus",
        "Zhejiang",
        "Hangzhou",
        "Xihu",
        "18 Wensan Road",
        EntityStatus::Active,
    ),
    (
        "Binjiang Campus",
        "Zhejiang",
        "Hangzhou",
        "Binjiang",
        "600 Jiangnan Avenue",
        EntityStatus::Active,
    ),
    (
        "Pudong Campus",
        "Shanghai",
        "Shanghai",
        "Pudong",
        "99 Century Avenue",
        EntityStatus::Disabled,
    ),
];

/// `(name, campus index into CAMPUSES, capacity, detail_address, status)`
const CLASSROOMS: &[(&str, usize, u32, &str, EntityStatus)] = &[
    ("Room 101", 0, 40, "Building A, 1st floor", EntityStatus::Active),
    ("Room 102", 0, 35, "Building A, 1st floor", EntityStatus::Active),
    ("Art Studio", 0, 20, "Building B, 3rd floor", EntityStatus::Disabled),
    ("Lab 1", 1, 30, "Tech Tower, 2nd floor", EntityStatus::Active),
    ("Lecture Hall", 2, 120, "Main building", EntityStatus::Active),
];

/// Populate `store` with a fixed set of campuses and classrooms.
///
/// Classrooms go through the normal insert path so campus counts are
/// accurate after seeding.
pub fn seed_mock_data(store: &mut Store) -> Result<(), CoreError> {
    let mut campus_ids = Vec::with_capacity(CAMPUSES.len());
    for &(name, province, city, district, detail_address, status) in CAMPUSES {
        let campus = store.insert_campus(&CampusInput {
            name: name.to_string(),
            province: province.to_string(),
            city: city.to_string(),
            district: district.to_string(),
            detail_address: detail_address.to_string(),
            status: Some(status),
        });
        campus_ids.push(campus.id);
    }

    for &(name, campus_index, capacity, detail_address, status) in CLASSROOMS {
        let campus_id = *campus_ids.get(campus_index).ok_or_else(|| {
            CoreError::Internal(format!("Seed classroom '{name}' references missing campus"))
        })?;
        store.insert_classroom(&ClassroomInput {
            name: name.to_string(),
            campus_id,
            capacity,
            detail_address: detail_address.to_string(),
            status: Some(status),
        })?;
    }

    tracing::debug!(
        campuses = store.campus_len(),
        classrooms = store.classroom_len(),
        "Seeded mock data",
    );
    Ok(())
}
