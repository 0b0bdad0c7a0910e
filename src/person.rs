use crate::error::ValidationError;
use crate::ticket::FieldUser;
use crate::AddressRecord;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The validated, flat per-ticket record handed to provisioning.
///
/// Address fields are flattened into the same mapping.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct PersonRecord {
    pub name: String,
    pub title: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    /// Dashed, see [`format_phone`](crate::format_phone).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `"Last, First"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_email: Option<String>,
    // The identity system keys managers by login, which is their email
    #[serde(default, rename = "managerId", skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(flatten)]
    pub address: AddressRecord,
    pub organization: String,
    #[serde(rename = "preferredLanguage")]
    pub preferred_language: String,
    pub ticket_id: String,
    pub ticket_number: String,
    pub ticket_state: String,
    #[serde(default)]
    pub ticket_created: Option<DateTime<FixedOffset>>,
}

impl PersonRecord {
    /// Splits `name` on its first space. A single word name has an empty
    /// last name.
    pub fn first_last(&self) -> (&str, &str) {
        let name = self.name.trim();
        match name.split_once(' ') {
            Some((first, last)) => (first, last.trim()),
            None => (name, ""),
        }
    }
}

/// The new hire's manager, from a "Reports to" user picker.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Manager {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Manager {
    /// Needs at least two words in the name: the first is the given name,
    /// the rest the family name.
    pub fn from_user(user: &FieldUser) -> Result<Manager, ValidationError> {
        let mut parts = user.name.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(first), Some(second)) => {
                let mut last_name = second.to_string();
                for part in parts {
                    last_name.push(' ');
                    last_name.push_str(part);
                }
                Ok(Manager {
                    first_name: first.to_string(),
                    last_name,
                    email: user.email.trim().to_string(),
                })
            }
            _ => Err(ValidationError::MalformedManagerName(user.name.clone())),
        }
    }

    /// `"Last, First"`.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}
