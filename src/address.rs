use crate::apartment::{extract_apartment, starts_with_indicator};
use crate::country::{country_code, is_us_alias};
use crate::error::FormatError;
use crate::timezone::{resolve_timezone, DEFAULT_TIMEZONE};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

lazy_static! {
    static ref STATE_ZIP: Regex = Regex::new(r"^([A-Z]{2})\s+(\d{5})$").unwrap();
    static ref POSTAL_CITY: Regex = Regex::new(r"^(\d{3}\s?\d{2,3})\s+(\S.*)$").unwrap();
}

/// Normalized mailing address, ready for provisioning.
///
/// `state` is the two letter code for US addresses and empty elsewhere.
/// `timezone` is always populated.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    #[validate(length(min = 1))]
    /// House number and street, with an `Apt N` suffix when the input had a unit.
    pub street_address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(default)]
    pub state: String,
    // European postal codes are spaced ("821 06"), so this stays a string
    #[validate(length(min = 1))]
    /// Five digit ZIP in the US, free-form postal code elsewhere.
    pub zip_code: String,
    #[validate(length(equal = 2))]
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    #[validate(length(min = 1))]
    /// IANA zone identifier, e.g. `America/Denver`.
    pub timezone: String,
}

impl Default for AddressRecord {
    fn default() -> Self {
        AddressRecord {
            street_address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country_code: "US".to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl AddressRecord {
    fn new(
        street_address: String,
        city: &str,
        state: &str,
        zip_code: &str,
        country_code: &str,
    ) -> Self {
        AddressRecord {
            street_address,
            city: city.trim().to_string(),
            state: state.to_string(),
            zip_code: zip_code.to_string(),
            country_code: country_code.to_string(),
            timezone: resolve_timezone(country_code, state).to_string(),
        }
    }

    /// Names of the fields a provisioning record cannot do without.
    ///
    /// `state` only counts for US addresses unless `require_state_outside_us`
    /// is set.
    pub fn missing_fields(&self, require_state_outside_us: bool) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .into_keys()
                .map(wire_name)
                .collect(),
        };
        let state_required = self.country_code == "US" || require_state_outside_us;
        if state_required && self.state.trim().is_empty() {
            missing.push("state");
        }
        missing.sort_by_key(|field| FIELD_ORDER.iter().position(|f| f == field));
        missing
    }

    /// Recomputes `timezone` from the resolved country and state.
    pub fn refresh_timezone(&mut self) {
        self.timezone = resolve_timezone(&self.country_code, &self.state).to_string();
    }
}

const FIELD_ORDER: [&str; 6] = [
    "streetAddress",
    "city",
    "state",
    "zipCode",
    "countryCode",
    "timezone",
];

fn wire_name(field: &'static str) -> &'static str {
    match field {
        "street_address" => "streetAddress",
        "zip_code" => "zipCode",
        "country_code" => "countryCode",
        other => other,
    }
}

impl FromStr for AddressRecord {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Parses one free-text address into an [`AddressRecord`].
///
/// The shape is detected first (see [`AddressShape::detect`]), then parsed by
/// the matching strategy. Never returns a partially filled record.
pub fn parse_address(raw: &str) -> Result<AddressRecord, FormatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormatError::Empty);
    }
    let shape = AddressShape::detect(raw);
    debug!("Address '{}' detected as {}", raw, shape.name());
    shape.parse(raw)
}

/// The recognized address layouts, in detection priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressShape<'a> {
    /// `"<street> <city>, <ST> <ZIP>"`. The city is the single last word
    /// before the comma, so multi-word cities are mis-split.
    StreetCityStateZip {
        street_city: &'a str,
        state: &'a str,
        zip: &'a str,
    },
    /// No commas and at least four words: `"<street> <city> <ST> <ZIP>"`.
    SpaceDelimited { tokens: Vec<&'a str> },
    /// `"<street>, <postal> <city>, <country>"` for a supported country.
    European {
        street: Vec<&'a str>,
        postal_city: &'a str,
        country_code: &'static str,
    },
    /// `"<street>[, <unit>], <city>, <ST> <ZIP>"` or
    /// `"<street>, <city>, <ST>, <ZIP>"`.
    UsComma { segments: Vec<&'a str> },
    Unrecognized(&'a str),
}

impl<'a> AddressShape<'a> {
    /// Detects the layout of `raw` by its comma segments, first match wins.
    ///
    /// A trailing United States segment ("USA", "United States", ...) is
    /// dropped before detection.
    pub fn detect(raw: &'a str) -> Self {
        let mut segments: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.len() >= 2 && segments.last().map_or(false, |last| is_us_alias(last)) {
            segments.pop();
        }

        match segments[..] {
            [] => return AddressShape::Unrecognized(raw),
            [street_city, state_zip] => {
                return match STATE_ZIP.captures(state_zip) {
                    Some(caps) if street_city.split_whitespace().count() >= 2 => {
                        AddressShape::StreetCityStateZip {
                            street_city,
                            state: caps.get(1).map_or("", |m| m.as_str()),
                            zip: caps.get(2).map_or("", |m| m.as_str()),
                        }
                    }
                    _ => AddressShape::Unrecognized(raw),
                };
            }
            [single] => {
                let tokens: Vec<&str> = single.split_whitespace().collect();
                return if tokens.len() >= 4 {
                    AddressShape::SpaceDelimited { tokens }
                } else {
                    AddressShape::Unrecognized(raw)
                };
            }
            _ => {}
        }

        let (postal_city, last) = (segments[segments.len() - 2], segments[segments.len() - 1]);
        match country_code(last) {
            Some(country_code) => AddressShape::European {
                street: segments[..segments.len() - 2].to_vec(),
                postal_city,
                country_code,
            },
            None => AddressShape::UsComma { segments },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AddressShape::StreetCityStateZip { .. } => "street-city/state-zip",
            AddressShape::SpaceDelimited { .. } => "space-delimited",
            AddressShape::European { .. } => "european",
            AddressShape::UsComma { .. } => "us-comma",
            AddressShape::Unrecognized(_) => "unrecognized",
        }
    }

    /// Runs the parsing strategy for this shape. `raw` is only used for
    /// error messages.
    pub fn parse(self, raw: &str) -> Result<AddressRecord, FormatError> {
        match self {
            AddressShape::StreetCityStateZip {
                street_city,
                state,
                zip,
            } => {
                let tokens: Vec<&str> = street_city.split_whitespace().collect();
                let (city, street) = tokens
                    .split_last()
                    .ok_or_else(|| FormatError::Unrecognized(raw.to_string()))?;
                let street = build_street(street, raw)?;
                Ok(AddressRecord::new(street, city, state, zip, "US"))
            }
            AddressShape::SpaceDelimited { tokens } => {
                let (street, tail) = tokens.split_at(tokens.len().saturating_sub(3));
                let (city, state, zip) = match tail {
                    [city, state, zip] => (*city, *state, *zip),
                    _ => return Err(FormatError::Unrecognized(raw.to_string())),
                };
                if !is_state_code(state) || !is_zip(zip) {
                    return Err(FormatError::StateZip {
                        segment: format!("{} {}", state, zip),
                        address: raw.to_string(),
                    });
                }
                let street = build_street(street, raw)?;
                Ok(AddressRecord::new(street, city, state, zip, "US"))
            }
            AddressShape::European {
                street,
                postal_city,
                country_code,
            } => {
                let street = build_street(&words(&street), raw)?;
                let (postal, city) = split_postal_city(postal_city).ok_or_else(|| {
                    FormatError::PostalCity {
                        segment: postal_city.to_string(),
                        address: raw.to_string(),
                    }
                })?;
                Ok(AddressRecord::new(street, &city, "", &postal, country_code))
            }
            AddressShape::UsComma { segments } => parse_us_comma(&segments, raw),
            AddressShape::Unrecognized(raw) => Err(FormatError::Unrecognized(raw.to_string())),
        }
    }
}

fn parse_us_comma(segments: &[&str], raw: &str) -> Result<AddressRecord, FormatError> {
    let (street, rest) = if segments.len() > 3 && starts_with_indicator(segments[1]) {
        segments.split_at(2)
    } else {
        segments.split_at(1)
    };
    let street = build_street(&words(street), raw)?;

    match rest {
        [city, state, zip] => {
            let state = state.to_ascii_uppercase();
            if !is_state_code(&state) {
                return Err(FormatError::StateZip {
                    segment: state,
                    address: raw.to_string(),
                });
            }
            if !is_zip(zip) {
                return Err(FormatError::Zip {
                    zip: zip.to_string(),
                    address: raw.to_string(),
                });
            }
            Ok(AddressRecord::new(street, city, &state, zip, "US"))
        }
        [city, state_zip] => {
            let mut state = None;
            let mut zip = None;
            for token in state_zip.split_whitespace() {
                let alphabetic = token.chars().all(|c| c.is_ascii_alphabetic());
                if state.is_none() && token.len() == 2 && alphabetic {
                    state = Some(token.to_ascii_uppercase());
                } else if zip.is_none() && is_zip(token) {
                    zip = Some(token);
                }
            }
            match (state, zip) {
                (Some(state), Some(zip)) => {
                    Ok(AddressRecord::new(street, city, &state, zip, "US"))
                }
                _ => Err(FormatError::StateZip {
                    segment: state_zip.to_string(),
                    address: raw.to_string(),
                }),
            }
        }
        _ => Err(FormatError::Unrecognized(raw.to_string())),
    }
}

fn words<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    segments
        .iter()
        .flat_map(|segment| segment.split_whitespace())
        .collect()
}

/// Joins street tokens, moving any unit marker to an `Apt N` suffix.
fn build_street(tokens: &[&str], raw: &str) -> Result<String, FormatError> {
    let (apartment, rest) = extract_apartment(tokens);
    if rest.is_empty() {
        return Err(FormatError::Unrecognized(raw.to_string()));
    }
    let mut street = rest.join(" ");
    if let Some(apartment) = apartment {
        street.push(' ');
        street.push_str(&apartment);
    }
    Ok(street)
}

fn split_postal_city(segment: &str) -> Option<(String, String)> {
    if let Some(caps) = POSTAL_CITY.captures(segment) {
        let postal = caps.get(1)?.as_str().to_string();
        let city = caps.get(2)?.as_str().trim().to_string();
        return Some((postal, city));
    }

    // Postal codes the pattern misses ("8210", "SK-811 01") still lead the segment.
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let split = tokens
        .iter()
        .position(|token| !is_postal_token(token))
        .unwrap_or(tokens.len());
    if split == 0 || split == tokens.len() {
        return None;
    }
    Some((tokens[..split].join(" "), tokens[split..].join(" ")))
}

fn is_postal_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase() || c == '-')
}

fn is_state_code(token: &str) -> bool {
    token.len() == 2 && token.chars().all(|c| c.is_ascii_uppercase())
}

fn is_zip(token: &str) -> bool {
    token.len() == 5 && token.chars().all(|c| c.is_ascii_digit())
}
