//! Department enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The fixed set of departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Finance,
    Hr,
    It,
    Operations,
}

impl Department {
    /// All departments, in the order the form offers them
    pub const ALL: [Department; 4] = [
        Department::Hr,
        Department::Finance,
        Department::It,
        Department::Operations,
    ];

    /// Wire code (`FINANCE`, `HR`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Department::Finance => "FINANCE",
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Operations => "OPERATIONS",
        }
    }

    /// Human label shown in selection lists
    pub fn label(&self) -> &'static str {
        match self {
            Department::Finance => "Finance",
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Operations => "Operations",
        }
    }
}

impl FromStr for Department {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown department: {}", s)))
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
