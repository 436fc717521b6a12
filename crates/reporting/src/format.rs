//! Display formatting for counts and monetary totals.

/// Group digits in threes with commas: `1121579` → `1,121,579`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Render a monetary amount with two fraction digits and the currency's
/// symbol, e.g. `$8,562.94`. Codes without a known symbol are written as a
/// prefix: `CAD 12.00`.
pub fn format_currency(value: f64, currency: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(&(cents / 100).to_string());
    let amount = format!("{whole}.{:02}", cents % 100);

    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{amount}"),
        None => format!("{sign}{} {amount}", currency.to_uppercase()),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
