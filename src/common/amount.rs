use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};

use crate::common::money::Money;

const CURRENCY_TOKEN: &str = "rp";
const MILLION_MARKERS: &[&str] = &["jt"];
const THOUSAND_MARKERS: &[&str] = &["k", "rb"];

/// Parses a hand-typed amount such as `20k`, `1.5jt`, `Rp 15.000` or `50rb`.
///
/// Returns `Money::zero()` for anything that cannot be read as a number; the
/// caller treats zero as a rejected entry.
///
/// Rules, applied in order:
/// - lower-case, drop every `rp` token, drop all whitespace;
/// - `jt` scales by 1,000,000 and wins over `k`/`rb` (1,000). Every marker
///   is removed, so `1jt500k` reads as `1500` millions;
/// - `,` is the decimal separator and `.` groups thousands. Without a comma,
///   a lone `.` that is not followed by exactly three digits is read as a
///   decimal point, so `1.5jt` is one and a half million;
/// - the result is truncated toward zero.
///
/// # Examples
/// ```
/// use dompet::common::amount::parse_amount;
///
/// assert_eq!(parse_amount("20k").as_i64(), 20_000);
/// assert_eq!(parse_amount("1,5jt").as_i64(), 1_500_000);
/// assert_eq!(parse_amount("Rp 15.000").as_i64(), 15_000);
/// assert_eq!(parse_amount("abc").as_i64(), 0);
/// ```
pub fn parse_amount(text: &str) -> Money {
    if text.trim().is_empty() {
        return Money::zero();
    }

    let mut residue: String = text
        .to_lowercase()
        .replace(CURRENCY_TOKEN, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let scale: i64 = if contains_any(&residue, MILLION_MARKERS) {
        1_000_000
    } else if contains_any(&residue, THOUSAND_MARKERS) {
        1_000
    } else {
        1
    };
    for marker in MILLION_MARKERS.iter().chain(THOUSAND_MARKERS) {
        residue = residue.replace(*marker, "");
    }

    normalize_separators(&residue)
        .and_then(|residue| decimal_to_money(&residue, scale))
        .unwrap_or_default()
}

fn normalize_separators(residue: &str) -> Option<String> {
    if residue.contains(',') {
        return Some(residue.replace('.', "").replace(',', "."));
    }

    let groups: Vec<&str> = residue.split('.').collect();
    let grouped = groups[1..]
        .iter()
        .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()));
    match groups.len() {
        1 => Some(residue.to_string()),
        _ if grouped => Some(groups.concat()),
        2 => Some(residue.to_string()),
        _ => None,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn decimal_to_money(residue: &str, scale: i64) -> Option<Money> {
    // Exponent notation would let a short input expand into a huge integer.
    if !residue
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    {
        return None;
    }

    let (int_part, frac_part) = match residue.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (residue, ""),
    };
    let is_bare = |s: &str| s.trim_start_matches(['-', '+']).is_empty();
    if is_bare(int_part) && frac_part.is_empty() {
        return None;
    }

    let int_part = if is_bare(int_part) {
        format!("{int_part}0")
    } else {
        int_part.to_string()
    };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };

    let value = BigDecimal::from_str(&format!("{int_part}.{frac_part}")).ok()?;
    let scaled = (value * BigDecimal::from(scale)).with_scale(0);
    scaled.to_i64().map(Money::new)
}
