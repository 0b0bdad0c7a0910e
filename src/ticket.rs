use crate::deserializers::{datetime_or_none, string_from_any};
use crate::error::Error;
use chrono::{DateTime, FixedOffset};
use log::warn;
use serde::{Deserialize, Serialize};

/// Custom field labels the extractor understands. Matching is exact and
/// case-sensitive.
pub mod labels {
    pub const NAME: &str = "New Employee Name";
    pub const PERSONAL_EMAIL: &str = "New Employee Personal Email Address";
    pub const TITLE: &str = "New Employee Title";
    pub const DEPARTMENT: &str = "New Employee Department";
    pub const PHONE: &str = "New Employee Phone Number";
    pub const START_DATE: &str = "Start Date";
    pub const REPORTS_TO: &str = "Reports to";
    pub const MAILING_ADDRESS: &str = "New Employee Mailing Address";
}

/// An onboarding request as exported by the helpdesk.
#[derive(Debug, Deserialize, Serialize, Clone, Default, Eq, PartialEq)]
pub struct Ticket {
    #[serde(default, deserialize_with = "string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub number: String,
    /// Lifecycle state, e.g. `New` or `Assigned`.
    #[serde(default, deserialize_with = "string_from_any")]
    pub state: String,
    /// Ticket title, usually `"<new hire> - <request>"`.
    #[serde(default, deserialize_with = "string_from_any")]
    pub name: String,
    /// `None` when absent or not RFC 3339.
    #[serde(default, deserialize_with = "datetime_or_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "custom_fields_values")]
    pub fields: Vec<LabeledField>,
}

impl Ticket {
    pub fn from_json(json: &str) -> Result<Ticket, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of tickets. Only a malformed array is an error;
    /// entries that do not deserialize as a ticket are logged and skipped.
    pub fn list_from_json(json: &str) -> Result<Vec<Ticket>, Error> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let tickets = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(ticket) => Some(ticket),
                Err(err) => {
                    warn!("Skipping ticket at index {}: {}", index, err);
                    None
                }
            })
            .collect();
        Ok(tickets)
    }

    /// The new hire's name as written in the ticket title, before the first
    /// `" - "`.
    pub fn title_name(&self) -> Option<&str> {
        let name = self.name.split(" - ").next()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// One labeled custom field on a ticket.
#[derive(Debug, Deserialize, Serialize, Clone, Default, Eq, PartialEq)]
pub struct LabeledField {
    #[serde(default, deserialize_with = "string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub value: String,
    // Date pickers put the machine readable date here and a display string in `value`
    #[serde(default, deserialize_with = "string_from_any")]
    pub raw_value: String,
    /// Present on user-picker fields such as "Reports to".
    #[serde(default)]
    pub user: Option<FieldUser>,
}

impl LabeledField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        LabeledField {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, Eq, PartialEq)]
pub struct FieldUser {
    #[serde(default, deserialize_with = "string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub email: String,
}
