pub mod campus;
pub mod classroom;

use campus_core::status::EntityStatus;
use serde::Deserialize;

/// Body of `PUT /{id}/status` for both campuses and classrooms.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: EntityStatus,
}
