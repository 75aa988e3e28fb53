//! Structural validators for candidate values
//!
//! Each predicate decides whether a digit string plausibly is the value its
//! field name claims, so that a matched field whose number is something else
//! entirely (an order id, an amount) is left alone. "Invalid" is a normal
//! result, never an error.

/// Luhn check for card numbers.
///
/// Accepts digit strings of 13 to 16 digits whose Luhn checksum is a
/// multiple of 10.
pub fn is_valid_card_number(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 13 || digits.len() > 16 {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    checksum.is_multiple_of(10)
}

/// Structural check for expiry dates in MMYY form.
///
/// Only months 10-12 pass: the final conjunct requires the month's tens
/// digit to be 1, so single-digit months 01-09 are rejected.
pub fn is_valid_expiry(value: &str) -> bool {
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut chars = value.chars();
    let d0 = chars.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
    let d1 = chars.next().and_then(|c| c.to_digit(10)).unwrap_or(0);

    (d0 == 0 || d0 == 1) && !(d0 == 0 && d1 == 0) && (d0 == 1 && d1 < 3)
}

/// Structural check for CVV codes: exactly three digits.
pub fn is_valid_cvv(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|c| c.is_ascii_digit())
}
