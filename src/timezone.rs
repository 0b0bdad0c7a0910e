use std::collections::HashMap;

/// Zone used for empty or unmapped states and for unlisted countries.
pub const DEFAULT_TIMEZONE: &str = "America/Denver";

lazy_static! {
    /// The 50 states plus `DC`.
    pub(crate) static ref US_STATE_ZONES: HashMap<&'static str, &'static str> = {
        let eastern = "America/New_York";
        let central = "America/Chicago";
        let mountain = "America/Denver";
        let pacific = "America/Los_Angeles";
        [
            ("AL", central),
            ("AK", "America/Anchorage"),
            ("AZ", "America/Phoenix"),
            ("AR", central),
            ("CA", pacific),
            ("CO", mountain),
            ("CT", eastern),
            ("DE", eastern),
            ("DC", eastern),
            ("FL", eastern),
            ("GA", eastern),
            ("HI", "America/Honolulu"),
            ("ID", "America/Boise"),
            ("IL", central),
            ("IN", "America/Indiana/Indianapolis"),
            ("IA", central),
            ("KS", central),
            ("KY", eastern),
            ("LA", central),
            ("ME", eastern),
            ("MD", eastern),
            ("MA", eastern),
            ("MI", "America/Detroit"),
            ("MN", central),
            ("MS", central),
            ("MO", central),
            ("MT", mountain),
            ("NE", central),
            ("NV", pacific),
            ("NH", eastern),
            ("NJ", eastern),
            ("NM", mountain),
            ("NY", eastern),
            ("NC", eastern),
            ("ND", central),
            ("OH", eastern),
            ("OK", central),
            ("OR", pacific),
            ("PA", eastern),
            ("RI", eastern),
            ("SC", eastern),
            ("SD", central),
            ("TN", central),
            ("TX", central),
            ("UT", mountain),
            ("VT", eastern),
            ("VA", eastern),
            ("WA", pacific),
            ("WV", eastern),
            ("WI", central),
            ("WY", mountain),
        ]
        .into_iter()
        .collect()
    };
}

/// Maps a country code and state/region to an IANA zone identifier.
///
/// An empty country code is treated as `US`. Never fails: anything not in the
/// table resolves to [`DEFAULT_TIMEZONE`].
pub fn resolve_timezone(country_code: &str, state: &str) -> &'static str {
    match country_code.trim().to_ascii_uppercase().as_str() {
        "" | "US" => US_STATE_ZONES
            .get(state.trim().to_ascii_uppercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_TIMEZONE),
        "SK" => "Europe/Bratislava",
        "CZ" => "Europe/Prague",
        _ => DEFAULT_TIMEZONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [&str; 50] = [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
        "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
        "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
        "VA", "WA", "WV", "WI", "WY",
    ];

    #[test]
    fn every_state_is_mapped() {
        for state in STATES {
            assert!(US_STATE_ZONES.contains_key(state), "{} is not mapped", state);
            assert!(!resolve_timezone("US", state).is_empty());
        }
    }

    #[test]
    fn clock_regions() {
        assert_eq!("America/Denver", resolve_timezone("US", "UT"));
        assert_eq!("America/New_York", resolve_timezone("US", "NY"));
        assert_eq!("America/Phoenix", resolve_timezone("US", "AZ"));
        assert_eq!("America/Honolulu", resolve_timezone("US", "HI"));
        assert_eq!("America/Chicago", resolve_timezone("US", "TX"));
        assert_eq!("America/Los_Angeles", resolve_timezone("US", "CA"));
        assert_eq!("America/New_York", resolve_timezone("US", "SC"));
    }

    #[test]
    fn district_of_columbia() {
        assert_eq!(51, US_STATE_ZONES.len());
        assert_eq!("America/New_York", resolve_timezone("US", "DC"));
    }

    #[test]
    fn empty_country_means_us() {
        assert_eq!("America/Chicago", resolve_timezone("", "IL"));
        assert_eq!("America/Los_Angeles", resolve_timezone("us", "wa"));
    }

    #[test]
    fn unmapped_falls_back() {
        assert_eq!(DEFAULT_TIMEZONE, resolve_timezone("US", ""));
        assert_eq!(DEFAULT_TIMEZONE, resolve_timezone("US", "ZZ"));
        assert_eq!(DEFAULT_TIMEZONE, resolve_timezone("DE", ""));
    }

    #[test]
    fn european_countries() {
        assert_eq!("Europe/Bratislava", resolve_timezone("SK", ""));
        assert_eq!("Europe/Prague", resolve_timezone("CZ", "anything"));
    }
}
