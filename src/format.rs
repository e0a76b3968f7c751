//! Display formatting for currency values and dates.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month};

/// Format a non-negative amount as US dollars, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if amount <= 0.0 {
        // Zero is hardcoded as "0" by numfmt, so specify it ourselves.
        return "$0.00".to_owned();
    }

    let mut formatted = fmt.fmt_string(amount);

    // numfmt omits the last trailing zero: "12.30" renders as "12.3".
    if formatted.len() >= 3 && formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

/// A month's full English name.
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

/// Format a date in full, e.g. `June 15, 2025`.
pub fn format_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        month_name(date.month()),
        date.day(),
        date.year()
    )
}

/// Format the month-and-year header for the given date, e.g. `June 2025`.
pub fn month_year(date: Date) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{format_currency, format_date, month_year};

    #[test]
    fn format_currency_renders_two_decimals() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(12.3), "$12.30");
        assert_eq!(format_currency(99.99), "$99.99");
    }

    #[test]
    fn format_currency_hardcodes_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn format_currency_handles_sub_cent_amounts() {
        // Rounds to zero dollars without panicking in the trailing-zero fixup.
        assert!(format_currency(0.001).starts_with("$0"));
    }

    #[test]
    fn format_date_writes_the_month_in_full() {
        assert_eq!(format_date(date!(2025 - 06 - 15)), "June 15, 2025");
        assert_eq!(month_year(date!(2025 - 01 - 02)), "January 2025");
    }
}
