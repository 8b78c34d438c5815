//! Headline price and strikethrough original for trip cards.
//!
//! The backend computes `total_price`; the card only compares it against
//! `price + transportation` and shows the sum struck through when they differ. The
//! comparison is display-only and nothing is reconciled.

/// What a trip card shows in its price row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSummary {
    /// Total price, falling back to price, falling back to "Contact"
    pub headline: String,
    /// `price + transportation` when it disagrees with the total
    pub original: Option<i64>,
}

/// Parses the integer prefix of an amount.
///
/// Leading whitespace and one sign are accepted, then digits up to the first other
/// character: `"1,500"` is 1 and `"12.9"` is 12. Returns `None` when no digit follows.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn summarize(
    price: Option<&str>,
    transportation: Option<&str>,
    total_price: Option<&str>,
) -> PriceSummary {
    let price = non_empty(price);
    let total_price = non_empty(total_price);

    let headline = total_price.or(price).unwrap_or("Contact").to_string();

    let original = match (price, total_price) {
        (Some(price), Some(total)) => {
            let transportation = non_empty(transportation).unwrap_or("0");

            match (
                parse_amount(price),
                parse_amount(transportation),
                parse_amount(total),
            ) {
                (Some(p), Some(t), Some(total)) => p.checked_add(t).filter(|sum| *sum != total),
                _ => None,
            }
        }
        _ => None,
    };

    PriceSummary { headline, original }
}
