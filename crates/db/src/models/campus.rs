//! Campus entity.

use campus_core::forms::CampusForm;
use campus_core::status::EntityStatus;
use campus_core::types::{DbId, Timestamp};
use serde::Serialize;

/// A physical site containing classrooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Campus {
    pub id: DbId,
    pub name: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail_address: String,
    pub status: EntityStatus,
    /// Number of classrooms whose `campus_id` references this campus.
    pub classroom_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Campus> for CampusForm {
    fn from(campus: &Campus) -> Self {
        CampusForm {
            name: campus.name.clone(),
            province: campus.province.clone(),
            city: campus.city.clone(),
            district: campus.district.clone(),
            detail_address: campus.detail_address.clone(),
            status: Some(campus.status),
        }
    }
}
