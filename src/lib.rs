/*!
# Onboarding ticket normalizer

Turns the free-text address and contact fields of helpdesk onboarding
tickets into a strict, provisioning-ready record: street, city, state, postal
code, country code, IANA timezone and a dashed phone number.

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

Recognized address layouts, tried in this order:

- `"1035 Pink Lily Lane Richmond, TX 77406"`: street and a one word city, then `ST ZIP`.
- `"1035 Pink Lily Lane Richmond TX 77406"`: no commas at all.
- `"Hlavná 1, 821 06 Bratislava, Slovakia"`: European, for Slovakia and the Czech Republic.
- `"123 Main St, Apt 4B, Salt Lake City, UT 84111"` and `"632 Wantoot Blvd, Charleston, SC, 29407"`.

Unit markers (`Apt`, `Apartment`, `Unit`, `Suite`, `Ste`, `#`) are normalized to
an `Apt N` suffix on the street. Anything else is a [`FormatError`].

Parsing is pure and synchronous. Tickets can be processed from any number of
threads at once.

Diagnostics go through the [log](https://crates.io/crates/log) facade; pick a
logger in the host application.

## Usage

Add dependency to Cargo.toml:

```toml
[dependencies]
onboarding-normalizer = "0.1"
```

Parse one address:

```rust
use onboarding_normalizer::parse_address;

let address = parse_address("1035 Pink Lily Lane Richmond, TX 77406").unwrap();
assert_eq!("Richmond", address.city);
assert_eq!("America/Chicago", address.timezone);
```

Extract a whole ticket and build the provisioning profile:

```rust
use onboarding_normalizer::{extract_person, Options, ProvisioningProfile, Ticket};

let ticket = Ticket::from_json(r#"{
    "id": 1,
    "number": 1001,
    "state": "New",
    "custom_fields_values": [
        {"name": "New Employee Name", "value": "Jane Doe"},
        {"name": "New Employee Title", "value": "Engineer"},
        {"name": "New Employee Department", "value": "IT"},
        {"name": "New Employee Mailing Address", "value": "123 Main St, Anytown, CA 90210"}
    ]
}"#).unwrap();

let options = Options::default();
let person = extract_person(&ticket, &options).unwrap();
let profile = ProvisioningProfile::from_person(&person, &options);
assert_eq!("janedoe@filevine.com", profile.email);
assert_eq!("America/Los_Angeles", profile.timezone);
```
*/
#[macro_use]
extern crate lazy_static;

mod address;
mod apartment;
mod country;
mod deserializers;
pub mod error;
pub mod extractor;
mod options;
mod person;
mod phone;
mod provisioning;
mod ticket;
mod timezone;

pub use address::{parse_address, AddressRecord, AddressShape};
pub use apartment::extract_apartment;
pub use country::{country_code, is_us_alias};
pub use error::{Error, FormatError, ValidationError};
pub use extractor::{extract, extract_onboarding, extract_person, BatchReport, Rejection};
pub use options::Options;
pub use person::{Manager, PersonRecord};
pub use phone::format_phone;
pub use provisioning::{work_email, ProvisioningProfile};
pub use ticket::{labels, FieldUser, LabeledField, Ticket};
pub use timezone::{resolve_timezone, DEFAULT_TIMEZONE};
