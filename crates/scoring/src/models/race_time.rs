use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, ScoringError};

/// Converts `m:ss.cc` or `ss.cc` time text to seconds.
pub fn parse_time_to_seconds(time: &str) -> Result<Decimal> {
    let time = time.trim();
    let invalid = || ScoringError::InvalidTime(time.to_string());

    match time.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
            let seconds = Decimal::from_str(seconds.trim()).map_err(|_| invalid())?;
            if seconds.is_sign_negative() {
                return Err(invalid());
            }
            Ok(Decimal::from(minutes) * Decimal::from(60) + seconds)
        }
        None => {
            let seconds = Decimal::from_str(time).map_err(|_| invalid())?;
            if seconds.is_sign_negative() {
                return Err(invalid());
            }
            Ok(seconds)
        }
    }
}

/// Renders seconds as `m:ss.cc`, or `ss.cc` under a minute.
pub fn format_seconds(seconds: Decimal) -> String {
    let sixty = Decimal::from(60);
    let minutes = (seconds / sixty).floor();
    let rest = (seconds - minutes * sixty).round_dp(2);

    let seconds_text = format!("{:.2}", rest);
    if minutes.is_zero() {
        seconds_text
    } else {
        format!("{}:{:0>5}", minutes, seconds_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_and_seconds() {
        assert_eq!(parse_time_to_seconds("1:43.19").unwrap(), Decimal::new(10319, 2));
        assert_eq!(parse_time_to_seconds("10:02.50").unwrap(), Decimal::new(60250, 2));
    }

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_time_to_seconds("58.20").unwrap(), Decimal::new(5820, 2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_time_to_seconds("DSQ").unwrap_err().is_invalid_time());
        assert!(parse_time_to_seconds("1:xx.00").is_err());
        assert!(parse_time_to_seconds("").is_err());
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(Decimal::new(10319, 2)), "1:43.19");
        assert_eq!(format_seconds(Decimal::new(5809, 2)), "58.09");
        assert_eq!(format_seconds(Decimal::new(6205, 2)), "1:02.05");
    }
}
