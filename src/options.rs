use serde::{Deserialize, Serialize};

/// Fixed defaults stamped onto every record, and the knobs of the validation
/// gate. Derives `Deserialize` with field defaults, so a host can override
/// just what it needs:
///
/// ```
/// use onboarding_normalizer::Options;
///
/// let options: Options = serde_json::from_str(r#"{"organization": "Acme"}"#).unwrap();
/// assert_eq!("Acme", options.organization);
/// assert_eq!("en", options.preferred_language);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(default)]
pub struct Options {
    pub organization: String,
    pub preferred_language: String,
    /// Domain of the generated work email, `{first}{last}@{email_domain}`.
    pub email_domain: String,
    /// Ticket states eligible for batch extraction.
    pub active_states: Vec<String>,
    /// Non-US addresses have no state. Set this to reject them anyway.
    pub require_state_outside_us: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            organization: "Filevine".to_string(),
            preferred_language: "en".to_string(),
            email_domain: "filevine.com".to_string(),
            active_states: vec![
                "New".to_string(),
                "Assigned".to_string(),
                "Auto-Assigned".to_string(),
            ],
            require_state_outside_us: false,
        }
    }
}

impl Options {
    pub fn is_active(&self, state: &str) -> bool {
        self.active_states.iter().any(|active| active == state)
    }
}
