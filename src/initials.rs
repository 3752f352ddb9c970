//! Short avatar labels for authors.

/// Label used for authors saved as a bare phone number.
pub const PHONE_SENTINEL: &str = "#";

/// Prefixes of a phone-number author: `+`, and the LRE/RLO marks WhatsApp
/// wraps unsaved numbers in.
const PHONE_PREFIXES: [char; 3] = ['+', '\u{202A}', '\u{202E}'];

/// Computes the initials of a display name.
///
/// Phone numbers yield [`PHONE_SENTINEL`]. Otherwise the first character of
/// every whitespace-separated token is kept, so a single word gives one
/// character and an empty name gives an empty string.
///
/// # Examples
///
/// ```
/// use wachat::initials::compute_initials;
///
/// assert_eq!(compute_initials("Luke Skywalker"), "LS");
/// assert_eq!(compute_initials("Loris"), "L");
/// assert_eq!(compute_initials("+39 333 1234567"), "#");
/// ```
pub fn compute_initials(name: &str) -> String {
    if name.starts_with(PHONE_PREFIXES) {
        return PHONE_SENTINEL.to_string();
    }

    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_numbers() {
        assert_eq!(compute_initials("+1 555 0100"), "#");
        assert_eq!(compute_initials("\u{202A}+39 333 1234567\u{202C}"), "#");
        assert_eq!(compute_initials("\u{202E}7654321"), "#");
    }

    #[test]
    fn test_names() {
        assert_eq!(compute_initials("Luke"), "L");
        assert_eq!(compute_initials("Luke Skywalker"), "LS");
        assert_eq!(compute_initials("Anakin Luke Skywalker"), "ALS");
        assert_eq!(compute_initials("  spaced   out  "), "so");
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(compute_initials("Émile Zola"), "ÉZ");
        assert_eq!(compute_initials("Муха Цокотуха"), "МЦ");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(compute_initials(""), "");
        assert_eq!(compute_initials("   "), "");
    }
}
