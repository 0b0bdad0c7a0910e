/*!
Ticket field extraction.

Each labeled field is routed on its own. A field that fails to parse is
logged and dropped without touching the others. The required-field gate
runs once every field has been attempted.
*/
use crate::address::{parse_address, AddressRecord};
use crate::error::{Error, ValidationError};
use crate::person::{Manager, PersonRecord};
use crate::phone::format_phone;
use crate::ticket::{labels, LabeledField, Ticket};
use crate::Options;
use log::{info, warn};

/// What one labeled field contributes to a [`PersonRecord`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FieldValue {
    Name(String),
    PersonalEmail(String),
    Title(String),
    Department(String),
    Phone(String),
    StartDate(String),
    Manager(Manager),
    Address(AddressRecord),
}

/// Parses a single field. `Ok(None)` means the label is not one we route, or
/// the value is blank.
pub fn route_field(field: &LabeledField) -> Result<Option<FieldValue>, Error> {
    let label = field.name.trim();
    let value = field.value.trim();

    if label == labels::REPORTS_TO {
        let user = field.user.as_ref().ok_or(ValidationError::MissingManager)?;
        return Ok(Some(FieldValue::Manager(Manager::from_user(user)?)));
    }
    if value.is_empty() {
        return Ok(None);
    }

    let routed = match label {
        labels::NAME => FieldValue::Name(value.to_string()),
        labels::PERSONAL_EMAIL => {
            if !value.contains('@') {
                return Err(ValidationError::MalformedEmail(value.to_string()).into());
            }
            FieldValue::PersonalEmail(value.to_string())
        }
        labels::TITLE => FieldValue::Title(value.to_string()),
        labels::DEPARTMENT => FieldValue::Department(value.to_string()),
        labels::PHONE => FieldValue::Phone(format_phone(value)),
        labels::START_DATE => {
            let raw = field.raw_value.trim();
            let date = if raw.is_empty() { value } else { raw };
            FieldValue::StartDate(date.to_string())
        }
        labels::MAILING_ADDRESS => FieldValue::Address(parse_address(value)?),
        _ => return Ok(None),
    };
    Ok(Some(routed))
}

#[derive(Default)]
struct Draft {
    name: Option<String>,
    title: Option<String>,
    department: Option<String>,
    personal_email: Option<String>,
    phone: Option<String>,
    start_date: Option<String>,
    manager: Option<Manager>,
    address: Option<AddressRecord>,
}

impl Draft {
    // Later fields win, matching how the helpdesk shows edited values
    fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Name(v) => self.name = Some(v),
            FieldValue::PersonalEmail(v) => self.personal_email = Some(v),
            FieldValue::Title(v) => self.title = Some(v),
            FieldValue::Department(v) => self.department = Some(v),
            FieldValue::Phone(v) => self.phone = Some(v),
            FieldValue::StartDate(v) => self.start_date = Some(v),
            FieldValue::Manager(v) => self.manager = Some(v),
            FieldValue::Address(v) => self.address = Some(v),
        }
    }
}

/// Builds the [`PersonRecord`] for one ticket, or says why there is none.
pub fn extract(ticket: &Ticket, options: &Options) -> Result<PersonRecord, ValidationError> {
    let number = ticket.number.trim();
    if number.is_empty() {
        return Err(ValidationError::MissingTicketNumber);
    }

    let outcomes: Vec<(&str, Result<Option<FieldValue>, Error>)> = ticket
        .fields
        .iter()
        .map(|field| (field.name.trim(), route_field(field)))
        .collect();

    let mut draft = Draft::default();
    for (label, outcome) in outcomes {
        match outcome {
            Ok(Some(value)) => draft.apply(value),
            Ok(None) => {}
            Err(err) => warn!("Ticket {}: dropping field '{}': {}", number, label, err),
        }
    }

    if draft.name.is_none() {
        draft.name = ticket.title_name().map(str::to_string);
    }

    let (name, title, department) = match (draft.name, draft.title, draft.department) {
        (Some(name), Some(title), Some(department)) => (name, title, department),
        (name, title, department) => {
            let missing = [("name", name), ("title", title), ("department", department)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| field)
                .collect();
            return Err(ValidationError::MissingFields(missing));
        }
    };

    let mut address = draft.address.unwrap_or_default();
    let missing = address.missing_fields(options.require_state_outside_us);
    if !missing.is_empty() {
        return Err(ValidationError::MissingAddressFields(missing));
    }
    address.refresh_timezone();

    let (manager_name, manager_email) = match draft.manager {
        Some(manager) => {
            let email = Some(manager.email.clone()).filter(|email| !email.is_empty());
            (Some(manager.display_name()), email)
        }
        None => (None, None),
    };

    Ok(PersonRecord {
        name,
        title,
        department,
        personal_email: draft.personal_email,
        phone: draft.phone,
        start_date: draft.start_date,
        manager_name,
        manager_id: manager_email.clone(),
        manager_email,
        address,
        organization: options.organization.clone(),
        preferred_language: options.preferred_language.clone(),
        ticket_id: ticket.id.clone(),
        ticket_number: number.to_string(),
        ticket_state: ticket.state.clone(),
        ticket_created: ticket.created_at,
    })
}

/// Like [`extract`], but a rejected ticket is logged and becomes `None`.
pub fn extract_person(ticket: &Ticket, options: &Options) -> Option<PersonRecord> {
    match extract(ticket, options) {
        Ok(person) => Some(person),
        Err(err) => {
            warn!("Ticket {} rejected: {}", ticket.number, err);
            None
        }
    }
}

/// A ticket that produced no record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rejection {
    pub ticket_number: String,
    pub error: ValidationError,
}

/// Result of [`extract_onboarding`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BatchReport {
    pub records: Vec<PersonRecord>,
    pub rejected: Vec<Rejection>,
    /// Tickets skipped because their state is not in `Options::active_states`.
    pub inactive: usize,
}

/// Extracts every ticket in an active state. Tickets are independent: a
/// rejected one is reported and the rest carry on.
pub fn extract_onboarding(tickets: &[Ticket], options: &Options) -> BatchReport {
    let mut report = BatchReport::default();
    for ticket in tickets {
        if !options.is_active(&ticket.state) {
            report.inactive += 1;
            continue;
        }
        match extract(ticket, options) {
            Ok(person) => report.records.push(person),
            Err(error) => {
                warn!("Ticket {} rejected: {}", ticket.number, error);
                report.rejected.push(Rejection {
                    ticket_number: ticket.number.clone(),
                    error,
                });
            }
        }
    }
    info!(
        "Parsed {} onboarding records from {} tickets ({} rejected, {} inactive)",
        report.records.len(),
        tickets.len(),
        report.rejected.len(),
        report.inactive
    );
    report
}
