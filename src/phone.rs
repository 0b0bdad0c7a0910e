/// Canonicalizes a free-form phone number into a dashed layout chosen by its
/// digit count.
///
/// Everything but ASCII digits is stripped first. Lengths without a known
/// layout return the input untouched.
///
/// | digits          | layout             |
/// |-----------------|--------------------|
/// | 10              | `DDD-DDD-DDDD`     |
/// | 11, leading `1` | `D-DDD-DDD-DDDD`   |
/// | 11              | `DD-DDD-DDD-DDD`   |
/// | 12              | `DDD-DDD-DDD-DDD`  |
/// | 13              | `DDD-DDD-DDD-DDDD` |
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    // Leading group widths; the last group takes whatever is left.
    let leading: &[usize] = match digits.len() {
        10 => &[3, 3],
        11 if digits.starts_with('1') => &[1, 3, 3],
        11 => &[2, 3, 3],
        12 | 13 => &[3, 3, 3],
        _ => return raw.to_string(),
    };

    let mut out = String::with_capacity(digits.len() + leading.len());
    let mut start = 0;
    for width in leading {
        out.push_str(&digits[start..start + width]);
        out.push('-');
        start += width;
    }
    out.push_str(&digits[start..]);
    out
}
