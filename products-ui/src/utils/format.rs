//! Presentation helpers. Amounts stay in pence everywhere else.

use rust_decimal::Decimal;

/// Format an amount in pence as pounds sterling, e.g. `150` → `£1.50`
pub fn as_gbp(amount_in_pence: u64) -> String {
    let pounds = Decimal::from_i128_with_scale(i128::from(amount_in_pence), 2).round_dp(2);
    let formatted = format!("{:.2}", pounds);
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    format!("£{}.{}", group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Split a payment reference into groups of 3, 4 and the remainder
///
/// `ABC1234DEF` → `ABC 1234 DEF`. Shorter references keep their empty groups.
pub fn beautify(reference: &str) -> String {
    let chars: Vec<char> = reference.chars().collect();
    let head: String = chars.iter().take(3).collect();
    let middle: String = chars.iter().skip(3).take(4).collect();
    let tail: String = chars.iter().skip(7).collect();
    format!("{} {} {}", head, middle, tail)
}
