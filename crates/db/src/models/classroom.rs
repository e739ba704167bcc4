//! Classroom entity.

use campus_core::forms::ClassroomForm;
use campus_core::status::EntityStatus;
use campus_core::types::{DbId, Timestamp};
use serde::Serialize;

/// A bookable room belonging to exactly one campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classroom {
    pub id: DbId,
    pub name: String,
    pub campus_id: DbId,
    /// Copy of the referenced campus's name, refreshed on every save.
    pub campus_name: String,
    pub capacity: u32,
    pub detail_address: String,
    pub status: EntityStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Classroom> for ClassroomForm {
    fn from(classroom: &Classroom) -> Self {
        ClassroomForm {
            name: classroom.name.clone(),
            campus_id: Some(classroom.campus_id),
            capacity: Some(i64::from(classroom.capacity)),
            detail_address: classroom.detail_address.clone(),
            status: Some(classroom.status),
        }
    }
}
