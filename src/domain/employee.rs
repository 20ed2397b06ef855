//! Employee domain entity and related types.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Department;
use crate::config::{EMAIL_PATTERN, NAME_PATTERN};

pub(crate) static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"));

pub(crate) static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Department,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Employee {
    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Body of create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmployeeRequest {
    #[validate(
        regex(path = *NAME_REGEX, message = "Name must contain only letters and spaces"),
        length(max = 100, message = "Name must be less than 100 characters")
    )]
    pub name: String,
    #[validate(
        email(message = "Please enter a valid email address"),
        regex(path = *EMAIL_REGEX, message = "Please enter a valid email address")
    )]
    pub email: String,
    pub department: Department,
}

impl EmployeeRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, department: Department) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department,
        }
    }
}

/// Server timestamps arrive either as RFC 3339 instants or as zone-less
/// local date-times; both are kept as naive UTC values.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(LOCAL_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }

    pub(super) fn parse(s: &str) -> Result<NaiveDateTime, String> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_utc())
            .or_else(|_| NaiveDateTime::parse_from_str(s, LOCAL_FORMAT))
            .map_err(|e| format!("invalid timestamp {:?}: {}", s, e))
    }
}
