//! Text and Number Formatting Utilities
//!
//! This module provides utility functions for formatting XP amounts,
//! currency, percentages, durations and addresses for display.

use chrono::{DateTime, Utc};

/// Seconds in a day, used to extrapolate per-second XP rates
pub const SECONDS_IN_DAY: f64 = 86_400.0;

/// Magnitude symbols, one per factor of 1000
const MAGNITUDE_SYMBOLS: [&str; 5] = ["", "K", "M", "B", "T"];

/// Average month length in days (365.25 / 12)
const DAYS_IN_MONTH: f64 = 30.436_875;

/// Reduce a value to a mantissa and a magnitude symbol.
///
/// Divides by 1000 while the value is at least 1000 and a larger symbol is
/// available, so `12_345.0` becomes `(12.345, "K")`.
pub fn significant_value(value: f64) -> (f64, &'static str) {
    let mut mantissa = value;
    let mut index = 0;
    while mantissa.abs() >= 1000.0 && index < MAGNITUDE_SYMBOLS.len() - 1 {
        mantissa /= 1000.0;
        index += 1;
    }
    (mantissa, MAGNITUDE_SYMBOLS[index])
}

/// Extra digits printed to tell an exact tie from a value just above or below it
const EXACT_TAIL_DIGITS: usize = 30;

/// Format with a fixed number of decimals, rounding exact ties away from zero.
///
/// `format!("{:.N}")` rounds exact binary ties to even (`50.25` becomes
/// `50.2`); displayed amounts round them up (`50.3`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, value);
    }
    let magnitude = value.abs();
    let exact = format!("{:.*}", decimals + EXACT_TAIL_DIGITS, magnitude);
    let tail = &exact[exact.len() - EXACT_TAIL_DIGITS..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }

    // An exact tie times 10^decimals is exactly k + 0.5, so ceil gives k + 1
    let scaled = (magnitude * 10f64.powi(decimals as i32)).ceil() as u64;
    let digits = format!("{:0>width$}", scaled, width = decimals + 1);
    let (integer, fraction) = digits.split_at(digits.len() - decimals);
    let sign = if value < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, fraction)
    }
}

/// One decimal place, or none when that decimal would be a zero
fn format_one_decimal_trimmed(value: f64) -> String {
    let rounded = to_fixed(value, 1);
    if rounded.ends_with('0') {
        to_fixed(value, 0)
    } else {
        rounded
    }
}

/// Format an XP amount for display.
///
/// Values below 100 keep one decimal, values below 10000 are rounded to an
/// integer and larger values are abbreviated (`12.3K`, `4M`). Negative values
/// keep their sign; non-finite values render as `0`.
pub fn format_xp(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        let magnitude = format_xp(-value);
        return if magnitude == "0" {
            magnitude
        } else {
            format!("-{}", magnitude)
        };
    }

    if value < 100.0 {
        return format_one_decimal_trimmed(value);
    }
    if value < 10_000.0 {
        return format!("{}", value.round());
    }

    let (mantissa, symbol) = significant_value(value);
    format!("{}{}", format_one_decimal_trimmed(mantissa), symbol)
}

/// Format a percentage with one decimal place
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", to_fixed(value, 1))
    } else {
        "0.0%".to_string()
    }
}

/// Format a USD amount with 2 decimal places
pub fn format_usd(value: f64) -> String {
    if value.is_finite() {
        format!("${}", to_fixed(value, 2))
    } else {
        "$0.00".to_string()
    }
}

/// Format a boost multiplier, e.g. `1.5x`
pub fn format_factor(factor: f64) -> String {
    format!("{}x", to_fixed(factor, 1))
}

/// XP earned per day at a per-second rate
pub fn daily_xp(xp_rate: f64) -> f64 {
    xp_rate * SECONDS_IN_DAY
}

/// Format a long address for display (show first 6 and last 4 characters)
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        address.to_string()
    } else {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

fn count_unit(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        format!("{} {}", count, many)
    }
}

/// Human duration between two instants, without direction.
///
/// Uses the usual relative-time thresholds: up to 44 seconds is
/// "A few seconds", up to 89 seconds "1 Minute", up to 44 minutes counted
/// minutes, up to 89 minutes "1 Hour", up to 21 hours counted hours, up to
/// 35 hours "1 Day", up to 25 days counted days, up to 45 days "1 Month",
/// up to 10 months counted months, up to 17 months "1 Year", then years.
pub fn format_time_to_go(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = (target - now).num_milliseconds().unsigned_abs() as f64;

    let seconds = (millis / 1000.0).round() as i64;
    if seconds <= 44 {
        return "A few seconds".to_string();
    }
    if seconds <= 89 {
        return "1 Minute".to_string();
    }

    let minutes = (millis / 60_000.0).round() as i64;
    if minutes <= 44 {
        return count_unit(minutes, "1 Minute", "Minutes");
    }
    if minutes <= 89 {
        return "1 Hour".to_string();
    }

    let hours = (millis / 3_600_000.0).round() as i64;
    if hours <= 21 {
        return count_unit(hours, "1 Hour", "Hours");
    }
    if hours <= 35 {
        return "1 Day".to_string();
    }

    let days_exact = millis / 86_400_000.0;
    let days = days_exact.round() as i64;
    if days <= 25 {
        return count_unit(days, "1 Day", "Days");
    }
    if days <= 45 {
        return "1 Month".to_string();
    }

    let months_exact = days_exact / DAYS_IN_MONTH;
    let months = months_exact.round() as i64;
    if months <= 10 {
        return count_unit(months, "1 Month", "Months");
    }
    if months <= 17 {
        return "1 Year".to_string();
    }

    let years = (months_exact / 12.0).round() as i64;
    count_unit(years, "1 Year", "Years")
}

/// Duration with a direction, e.g. "In 3 Days" or "2 Hours ago"
pub fn format_relative(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = format_time_to_go(target, now);
    if target >= now {
        format!("In {}", duration)
    } else {
        format!("{} ago", duration)
    }
}
