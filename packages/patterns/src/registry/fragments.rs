//! Regex fragments shared by the statute pattern table.
//!
//! Citations are written with a lot of spacing and punctuation noise:
//! `RA 8424`, `P.D. 1606`, `EO. 1008`, `B.  P.   22`. These builders keep
//! the table in [`super::config`] readable.

/// Acronym marker with optional dots and spaces between letters.
///
/// Acronyms are matched case-sensitively even inside a case-insensitive
/// pattern, so `ca. 150` or `10 a.m.` never qualify as markers.
///
/// `letters(&["R", "A"])` matches `RA`, `R.A.`, `R A`, `R. A.`.
#[must_use]
pub fn letters(parts: &[&str]) -> String {
    let joined = parts.join(r"\.?\s*");
    format!(r"(?-i:\b{joined}\.?)")
}

/// Optional `No.` / `Nos.` / `No` suffix after a marker.
#[must_use]
pub fn with_number(prefix: &str) -> String {
    format!(r"{prefix}(?:\s+No\.?s?\.?)?")
}

/// Optional `Blg.` suffix used by Batas Pambansa.
#[must_use]
pub fn with_blg(prefix: &str) -> String {
    format!(r"{prefix}(?:\s+Blg\.?)?")
}

/// A long-form marker followed by an optional parenthesised acronym,
/// e.g. `Republic Act (R.A.)`.
#[must_use]
pub fn with_acronym(prefix: &str, parts: &[&str]) -> String {
    format!(r"{prefix}(?:\s*\({}\))?", letters(parts))
}

/// A single serial number of up to `max_digits` digits with an optional
/// `-A` / `-B` suffix.
#[must_use]
pub fn digit(max_digits: usize) -> String {
    format!(r"\d{{1,{max_digits}}}(?:[-–]?[AB])?\b")
}

/// One or more serial numbers joined by commas, spaces and `and`:
/// `965 and 2630`, `123, 999, and 124`.
#[must_use]
pub fn digit_list(max_digits: usize) -> String {
    let d = digit(max_digits);
    format!(r"(?:(?:{d}[,\s]+)*(?:and\s+)?{d})")
}

/// An explicit whitelist of serial numbers.
#[must_use]
pub fn one_of(serials: &[&str]) -> String {
    format!(r"(?:{})\b", serials.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn find<'t>(pattern: &str, text: &'t str) -> Option<&'t str> {
        Regex::new(&format!("(?i){pattern}"))
            .unwrap()
            .find(text)
            .map(|m| m.as_str())
    }

    #[test]
    fn test_letters() {
        let ra = letters(&["R", "A"]);
        assert_eq!(find(&ra, "This is RA. 1241"), Some("RA."));
        assert_eq!(find(&ra, "This is R A 1241"), Some("R A"));
        assert_eq!(find(&letters(&["A", "M"]), "A.M. 141"), Some("A.M."));
    }

    #[test]
    fn test_letters_will_not_match() {
        assert_eq!(find(&letters(&["R", "A"]), "This isR.A. 1241"), None);
        assert_eq!(find(&letters(&["A", "M"]), "A..M. 141"), None);
        assert_eq!(find(&letters(&["C", "A"]), "ca. 150 years"), None);
    }

    #[test]
    fn test_digit() {
        assert_eq!(find(&digit(6), "Hello 123"), Some("123"));
        assert_eq!(find(&digit(6), "This is 123-A only"), Some("123-A"));
        assert_eq!(find(&digit(6), "Even letters A, B"), None);
    }

    #[test]
    fn test_digit_list() {
        let list = digit_list(6);
        assert_eq!(find(&list, "Hello 123, 999, and 124"), Some("123, 999, and 124"));
        assert_eq!(find(&list, "Hello this is a test 123, 999, 124"), Some("123, 999, 124"));
        assert_eq!(find(&list, "Hello X X X  123 and 124"), Some("123 and 124"));
        assert_eq!(find(&list, "No. 386, as amended"), Some("386"));
    }

    #[test]
    fn test_one_of() {
        let eo = one_of(&["292", "47"]);
        assert_eq!(find(&eo, "EO 47"), Some("47"));
        assert_eq!(find(&eo, "EO 4700"), None);
    }

    #[test]
    fn test_with_number_and_blg() {
        assert_eq!(find(&with_number("Act"), "Act Nos. 124"), Some("Act Nos."));
        assert_eq!(find(&with_blg(&letters(&["B", "P"])), "B.P. Blg. 22"), Some("B.P. Blg."));
    }
}
