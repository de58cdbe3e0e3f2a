//! Canonicalization of matched serial tokens.
//!
//! A serial token lifted from text ("No. 1474 - B", "0386", "02-11-10-SC")
//! is folded into the stable identifier used for folders and for rule
//! equality ("1474-b", "386", "02-11-10-sc").

use crate::category::Category;

/// Canonicalize a raw serial token for a category.
///
/// Idempotent: normalizing an already normalized id returns it unchanged.
///
/// # Examples
/// ```
/// use statute_patterns::{normalize, Category};
///
/// assert_eq!(normalize(Category::PresidentialDecree, "1474 – B"), "1474-b");
/// assert_eq!(normalize(Category::RepublicAct, "0386"), "386");
/// assert_eq!(normalize(Category::AdministrativeMatter, "02-11-10-SC"), "02-11-10-sc");
/// ```
#[must_use]
pub fn normalize(category: Category, raw: &str) -> String {
    let mut id = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for c in raw.trim().chars().flat_map(char::to_lowercase) {
        match c {
            '.' => {}
            '-' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' => {
                pending_hyphen = true;
            }
            c if c.is_whitespace() => pending_hyphen = true,
            c if c.is_ascii_alphanumeric() || c == '_' => {
                if pending_hyphen && !id.is_empty() {
                    id.push('-');
                }
                pending_hyphen = false;
                id.push(c);
            }
            _ => {}
        }
    }

    if category.strips_leading_zeros() {
        strip_leading_zeros(&id)
    } else {
        id
    }
}

/// Remove leading zeros from the leading digit run, keeping one digit.
fn strip_leading_zeros(id: &str) -> String {
    let digits = id.chars().take_while(char::is_ascii_digit).count();
    let zeros = id.chars().take_while(|c| *c == '0').count();
    let cut = zeros.min(digits.saturating_sub(1));
    id[cut..].to_string()
}

/// Split an enumerated serial span into its individual tokens.
///
/// Separators are commas, whitespace and the word `and`:
/// `"965, 2630 and 3019"` yields `["965", "2630", "3019"]`.
///
/// A number joined without `and` that has fewer leading digits than the
/// first serial ends the list, so in `386, 25 years later` only `386` is a
/// serial.
pub fn split_serials(text: &str) -> impl Iterator<Item = &str> {
    let mut serials = Vec::new();
    let mut first_width = None;
    let mut after_and = false;

    for part in text
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|part| !part.is_empty())
    {
        if part.eq_ignore_ascii_case("and") {
            after_and = true;
            continue;
        }
        let width = part.bytes().take_while(u8::is_ascii_digit).count();
        match first_width {
            None => first_width = Some(width),
            Some(first) if !after_and && width < first => break,
            Some(_) => {}
        }
        serials.push(part);
        after_and = false;
    }

    serials.into_iter()
}
