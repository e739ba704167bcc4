//! Campus and classroom form buffers and their save validation.
//!
//! A form is the raw, editable buffer behind a create/edit modal and the
//! JSON body of the matching API request. [`CampusForm::validate`] and
//! [`ClassroomForm::validate`] turn a buffer into a trimmed, checked input
//! that the repositories accept. Checks run in field order and the first
//! failure wins, so a rejected save always reports one fixed message.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::EntityStatus;
use crate::types::DbId;
use crate::validation::{require_selection, require_text, validate_max_chars};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a campus detail address, in characters.
pub const CAMPUS_DETAIL_ADDRESS_MAX: usize = 20;

/// Maximum length of a classroom detail address, in characters.
pub const CLASSROOM_DETAIL_ADDRESS_MAX: usize = 30;

// ---------------------------------------------------------------------------
// Campus
// ---------------------------------------------------------------------------

/// Editable campus buffer. Missing JSON fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusForm {
    pub name: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail_address: String,
    pub status: Option<EntityStatus>,
}

/// A campus form that passed validation.
///
/// `status` is `None` when the form did not carry one: a create stores
/// `Active`, an update keeps the stored status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusInput {
    pub name: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail_address: String,
    pub status: Option<EntityStatus>,
}

impl CampusForm {
    pub fn validate(&self) -> Result<CampusInput, CoreError> {
        let name = require_text(&self.name, "Campus name is required")?;
        let province = require_text(&self.province, "Province is required")?;
        let city = require_text(&self.city, "City is required")?;
        let district = require_text(&self.district, "District is required")?;
        let detail_address = require_text(&self.detail_address, "Detail address is required")?;
        validate_max_chars(&detail_address, CAMPUS_DETAIL_ADDRESS_MAX, "Detail address")?;

        Ok(CampusInput {
            name,
            province,
            city,
            district,
            detail_address,
            status: self.status,
        })
    }
}

// ---------------------------------------------------------------------------
// Classroom
// ---------------------------------------------------------------------------

/// Editable classroom buffer.
///
/// `campus_id` is `None` until a campus is picked from the selector, and
/// `capacity` is `None` until a number is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassroomForm {
    pub name: String,
    pub campus_id: Option<DbId>,
    pub capacity: Option<i64>,
    pub detail_address: String,
    pub status: Option<EntityStatus>,
}

/// A classroom form that passed validation. `status` follows the same
/// rule as [`CampusInput::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomInput {
    pub name: String,
    pub campus_id: DbId,
    pub capacity: u32,
    pub detail_address: String,
    pub status: Option<EntityStatus>,
}

impl ClassroomForm {
    pub fn validate(&self) -> Result<ClassroomInput, CoreError> {
        let name = require_text(&self.name, "Classroom name is required")?;
        let campus_id = require_selection(self.campus_id, "Please select a campus")?;
        let capacity = require_selection(self.capacity, "Capacity is required")?;
        if capacity < 0 {
            return Err(CoreError::Validation("Capacity must not be negative".to_string()));
        }
        let capacity = u32::try_from(capacity).map_err(|_| {
            CoreError::Validation(format!("Capacity must be at most {}", u32::MAX))
        })?;
        let detail_address = self.detail_address.trim().to_string();
        validate_max_chars(
            &detail_address,
            CLASSROOM_DETAIL_ADDRESS_MAX,
            "Detail address",
        )?;

        Ok(ClassroomInput {
            name,
            campus_id,
            capacity,
            detail_address,
            status: self.status,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
