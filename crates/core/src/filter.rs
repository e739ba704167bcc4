//! Classroom list filtering.

use crate::status::EntityStatus;
use crate::types::DbId;

/// Filter fields above the classroom table.
///
/// Every populated field must match. An empty or whitespace-only name
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassroomFilter {
    /// Case-insensitive substring of the classroom name.
    pub name: Option<String>,
    /// Exact campus match.
    pub campus_id: Option<DbId>,
    /// Exact status match.
    pub status: Option<EntityStatus>,
}

impl ClassroomFilter {
    /// True when no field narrows the result.
    pub fn is_empty(&self) -> bool {
        self.name_needle().is_none() && self.campus_id.is_none() && self.status.is_none()
    }

    pub fn matches(&self, name: &str, campus_id: DbId, status: EntityStatus) -> bool {
        if let Some(needle) = self.name_needle() {
            if !name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.campus_id.is_some_and(|id| id != campus_id) {
            return false;
        }
        if self.status.is_some_and(|s| s != status) {
            return false;
        }
        true
    }

    fn name_needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}
