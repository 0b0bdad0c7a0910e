use std::collections::HashMap;

lazy_static! {
    /// Lowercased country names with a supported postal convention.
    static ref COUNTRY_CODES: HashMap<&'static str, &'static str> = [
        ("slovakia", "SK"),
        ("slovak republic", "SK"),
        ("czech republic", "CZ"),
        ("czechia", "CZ"),
    ]
    .into_iter()
    .collect();
}

const US_ALIASES: [&str; 6] = [
    "us",
    "usa",
    "u.s.",
    "u.s.a.",
    "united states",
    "united states of america",
];

/// ISO code for a non-US country name, matched case-insensitively.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_CODES
        .get(name.trim().to_lowercase().as_str())
        .copied()
}

/// Whether `name` is one of the spellings of the United States.
pub fn is_us_alias(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    US_ALIASES.contains(&name.as_str())
}
