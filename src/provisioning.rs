use crate::{Options, PersonRecord};
use serde::Serialize;

/// Profile payload for the identity provider. Building it is pure; sending
/// it belongs to the caller.
#[derive(Debug, Serialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningProfile {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    /// Work email, also used as the login.
    pub email: String,
    pub login: String,
    pub mobile_phone: String,
    pub second_email: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country_code: String,
    pub department: String,
    pub title: String,
    pub manager_id: String,
    pub manager: String,
    pub preferred_language: String,
    pub timezone: String,
    pub organization: String,
}

impl ProvisioningProfile {
    pub fn from_person(person: &PersonRecord, options: &Options) -> Self {
        let (first_name, last_name) = person.first_last();
        let email = work_email(first_name, last_name, &options.email_domain);
        let address = &person.address;

        ProvisioningProfile {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            display_name: format!("{} {}", first_name, last_name).trim().to_string(),
            login: email.clone(),
            email,
            mobile_phone: person.phone.clone().unwrap_or_default(),
            second_email: person.personal_email.clone().unwrap_or_default(),
            street_address: address.street_address.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country_code: address.country_code.clone(),
            department: person.department.clone(),
            title: person.title.clone(),
            manager_id: person.manager_id.clone().unwrap_or_default(),
            manager: person.manager_name.clone().unwrap_or_default(),
            preferred_language: person.preferred_language.clone(),
            timezone: address.timezone.clone(),
            organization: person.organization.clone(),
        }
    }
}

/// `{first}{last}@{domain}`, lowercased, with no separator or whitespace.
pub fn work_email(first_name: &str, last_name: &str, domain: &str) -> String {
    let local: String = first_name
        .chars()
        .chain(last_name.chars())
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("{}@{}", local, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::Ticket;

    #[test]
    fn work_email_has_no_separator() {
        assert_eq!("janedoe@filevine.com", work_email("Jane", "Doe", "filevine.com"));
        assert_eq!(
            "mariavandyke@filevine.com",
            work_email("Maria", "Van Dyke", "filevine.com")
        );
        assert_eq!("cher@acme.io", work_email("Cher", "", "acme.io"));
    }

    #[test]
    fn profile_from_ticket() {
        let json = r#"
            {
                "id": 7,
                "number": 59907,
                "state": "New",
                "custom_fields_values": [
                    {"name": "New Employee Name", "value": "Carson Geddes"},
                    {"name": "New Employee Title", "value": "Paralegal"},
                    {"name": "New Employee Department", "value": "Legal"},
                    {"name": "New Employee Phone Number", "value": "801 555 1212"},
                    {"name": "New Employee Personal Email Address", "value": "carson@example.com"},
                    {
                        "name": "Reports to",
                        "value": "Pat Smith",
                        "user": {"name": "Pat Smith", "email": "patsmith@filevine.com"}
                    },
                    {"name": "New Employee Mailing Address", "value": "632 Wantoot Blvd, Charleston, SC, 29407"}
                ]
            }
        "#;
        let options = Options::default();
        let person = extract(&Ticket::from_json(json).unwrap(), &options).unwrap();
        let profile = ProvisioningProfile::from_person(&person, &options);

        assert_eq!("Carson", profile.first_name);
        assert_eq!("Geddes", profile.last_name);
        assert_eq!("Carson Geddes", profile.display_name);
        assert_eq!("carsongeddes@filevine.com", profile.email);
        assert_eq!(profile.email, profile.login);
        assert_eq!("801-555-1212", profile.mobile_phone);
        assert_eq!("carson@example.com", profile.second_email);
        assert_eq!("Smith, Pat", profile.manager);
        assert_eq!("patsmith@filevine.com", profile.manager_id);
        assert_eq!("SC", profile.state);
        assert_eq!("America/New_York", profile.timezone);

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!("Carson", value["firstName"]);
        assert_eq!("29407", value["zipCode"]);
        assert_eq!("patsmith@filevine.com", value["managerId"]);
        assert_eq!("Filevine", value["organization"]);
    }
}
