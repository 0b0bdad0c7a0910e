/// Unit markers, matched case-insensitively.
const INDICATORS: [&str; 6] = ["apartment", "apt", "suite", "ste", "unit", "#"];

/// Pulls the first apartment/unit marker out of `tokens`.
///
/// Returns the normalized `"Apt N"` fragment, if any, and the remaining
/// tokens in their original order.
pub fn extract_apartment<S: AsRef<str>>(tokens: &[S]) -> (Option<String>, Vec<String>) {
    let mut apartment = None;
    let mut remaining = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();
        if apartment.is_some() {
            remaining.push(token.to_string());
            i += 1;
            continue;
        }

        match split_indicator(token) {
            Some(Marker::Fused(value)) => {
                apartment = format_apartment(value);
                i += 1;
            }
            Some(Marker::Bare) => match tokens.get(i + 1) {
                Some(next) => {
                    apartment = format_apartment(next.as_ref());
                    i += 2;
                }
                // No value after the indicator: drop it rather than invent one.
                None => i += 1,
            },
            None => {
                remaining.push(token.to_string());
                i += 1;
            }
        }
    }

    (apartment, remaining)
}

/// Whether a comma segment opens with a unit marker (`"Apt 4B"`, `"#12"`,
/// `"Suite 200"`), as opposed to a word like `"Sterling"`.
pub(crate) fn starts_with_indicator(segment: &str) -> bool {
    segment
        .split_whitespace()
        .next()
        .and_then(split_indicator)
        .is_some()
}

enum Marker<'a> {
    Bare,
    Fused(&'a str),
}

fn split_indicator(token: &str) -> Option<Marker<'_>> {
    let lower = token.to_ascii_lowercase();
    for indicator in INDICATORS {
        if !lower.starts_with(indicator) {
            continue;
        }
        let suffix = token[indicator.len()..].trim_start_matches(['.', ':']);
        if suffix.is_empty() {
            return Some(Marker::Bare);
        }
        let fused = indicator == "#" || suffix.starts_with(|c: char| c.is_ascii_digit());
        if fused {
            return Some(Marker::Fused(suffix));
        }
    }
    None
}

/// `None` when nothing is left once the redundant `#` is gone ("Apt #").
fn format_apartment(value: &str) -> Option<String> {
    let value = value.trim_start_matches('#');
    if value.is_empty() {
        None
    } else {
        Some(format!("Apt {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_indicator() {
        let (apt, rest) = extract_apartment(&["123", "Main", "St", "Apt", "4B"]);
        assert_eq!(Some("Apt 4B".to_string()), apt);
        assert_eq!(vec!["123", "Main", "St"], rest);
    }

    #[test]
    fn fused_hash() {
        let (apt, rest) = extract_apartment(&["123", "Main", "St", "#12"]);
        assert_eq!(Some("Apt 12".to_string()), apt);
        assert_eq!(vec!["123", "Main", "St"], rest);
    }

    #[test]
    fn fused_keyword() {
        let (apt, rest) = extract_apartment(&["Apt123", "Main", "St"]);
        assert_eq!(Some("Apt 123".to_string()), apt);
        assert_eq!(vec!["Main", "St"], rest);
    }

    #[test]
    fn punctuated_indicator_takes_next_token() {
        let (apt, rest) = extract_apartment(&["9", "Elm", "Ave", "Ste.", "200"]);
        assert_eq!(Some("Apt 200".to_string()), apt);
        assert_eq!(vec!["9", "Elm", "Ave"], rest);
    }

    #[test]
    fn redundant_hash_in_value() {
        let (apt, _) = extract_apartment(&["1", "Oak", "Unit", "#7"]);
        assert_eq!(Some("Apt 7".to_string()), apt);
    }

    #[test]
    fn trailing_indicator_is_dropped() {
        let (apt, rest) = extract_apartment(&["123", "Main", "St", "Apt"]);
        assert_eq!(None, apt);
        assert_eq!(vec!["123", "Main", "St"], rest);
    }

    #[test]
    fn indicator_with_only_a_hash_is_dropped() {
        let (apt, rest) = extract_apartment(&["123", "Main", "St", "Apt", "#"]);
        assert_eq!(None, apt);
        assert_eq!(vec!["123", "Main", "St"], rest);

        let (apt, rest) = extract_apartment(&["9", "Elm", "##"]);
        assert_eq!(None, apt);
        assert_eq!(vec!["9", "Elm"], rest);
    }

    #[test]
    fn first_match_wins() {
        let (apt, rest) = extract_apartment(&["1", "Oak", "Apt", "3", "Unit", "9"]);
        assert_eq!(Some("Apt 3".to_string()), apt);
        assert_eq!(vec!["1", "Oak", "Unit", "9"], rest);
    }

    #[test]
    fn words_sharing_a_prefix_are_kept() {
        let tokens = ["55", "Unity", "Blvd", "Sterling", "Apartments"];
        let (apt, rest) = extract_apartment(&tokens);
        assert_eq!(None, apt);
        assert_eq!(tokens.to_vec(), rest);
    }

    #[test]
    fn segment_indicator() {
        assert!(starts_with_indicator("Apt 4B"));
        assert!(starts_with_indicator("#12"));
        assert!(starts_with_indicator("suite 200"));
        assert!(!starts_with_indicator("Sterling"));
        assert!(!starts_with_indicator(""));
    }
}
