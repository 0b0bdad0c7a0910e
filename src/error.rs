/*!
Normalization errors.
*/
use thiserror::Error;

/// An address string that matches none of the recognized shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Address is empty")]
    Empty,
    #[error("Unrecognized address format: '{0}'")]
    Unrecognized(String),
    #[error("Invalid state/ZIP '{segment}' in address: '{address}'")]
    StateZip { segment: String, address: String },
    #[error("Invalid ZIP code '{zip}' in address: '{address}'")]
    Zip { zip: String, address: String },
    #[error("Invalid postal code/city '{segment}' in address: '{address}'")]
    PostalCity { segment: String, address: String },
}

/// A ticket, or one of its fields, failed validation.
///
/// Field level variants (`MalformedEmail`, `MalformedManagerName`,
/// `MissingManager`) only drop the offending field. The remaining variants
/// reject the whole ticket.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ticket is missing required field: number")]
    MissingTicketNumber,
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Missing required address fields: {}", .0.join(", "))]
    MissingAddressFields(Vec<&'static str>),
    #[error("Invalid email format: {0}")]
    MalformedEmail(String),
    #[error("Invalid manager name format: {0}")]
    MalformedManagerName(String),
    #[error("Manager field has no user")]
    MissingManager,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
