//! Query parameter types for list endpoints.
//!
//! A filter field sent with no value (`?status=`) is treated as absent, the
//! same as leaving it out.

use std::fmt::Display;
use std::str::FromStr;

use campus_core::filter::ClassroomFilter;
use campus_core::status::EntityStatus;
use campus_core::types::DbId;
use serde::{Deserialize, Deserializer};

/// `?status=active|disabled` on the campus list.
#[derive(Debug, Default, Deserialize)]
pub struct StatusParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<EntityStatus>,
}

/// `?name=&campus_id=&status=` on the classroom list.
#[derive(Debug, Default, Deserialize)]
pub struct ClassroomListParams {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub campus_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<EntityStatus>,
}

impl From<ClassroomListParams> for ClassroomFilter {
    fn from(params: ClassroomListParams) -> Self {
        ClassroomFilter {
            name: params.name,
            campus_id: params.campus_id,
            status: params.status,
        }
    }
}

/// Parse a query value with [`FromStr`], mapping a blank value to `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
