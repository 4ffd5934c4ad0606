use chrono::NaiveDate;

/// Formats a currency value with a thousands separator and two decimals,
/// e.g. `$1,234.56`.
pub fn format_currency(symbol: &str, value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Formats a calendar date the way the table displays it, e.g. `Jan 2, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency("$", 0.0), "$0.00");
        assert_eq!(format_currency("$", 1234.5), "$1,234.50");
        assert_eq!(format_currency("$", 1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency("€", 99.999), "€100.00");
    }

    #[test]
    fn date_uses_short_month_without_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date(date), "Jan 2, 2024");
    }
}
