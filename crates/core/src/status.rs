//! Active/disabled status shared by campuses and classrooms.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a campus or classroom.
///
/// Entities are never deleted; disabling is the only way to retire one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Active,
    Disabled,
}

impl EntityStatus {
    /// The opposite status. Toggling twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Disabled,
            Self::Disabled => Self::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// Display label for tables and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Disabled => "Disabled",
        }
    }

    /// Wire value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            other => Err(format!("Unknown status '{other}'")),
        }
    }
}
