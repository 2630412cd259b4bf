//! Value checks behind the built-in filters

use std::path::Path;

use chrono::NaiveDate;

use super::types::{ValidationError, ValidationResult};

pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Base-10 integer with an optional leading `-`
pub fn validate_int(value: &str) -> ValidationResult<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotAnInteger(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| ValidationError::NotAnInteger(value.to_string()))
}

/// Calendar date written as `DD-MM-YYYY`, two-two-four digits
pub fn validate_date(value: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::InvalidDate(value.to_string());

    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Non-blank path
pub fn validate_filepath(value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyFilepath);
    }
    Ok(())
}

/// Path that exists on the filesystem right now
pub fn validate_file_exists(value: &str) -> ValidationResult<()> {
    if !Path::new(value).exists() {
        return Err(ValidationError::FileNotFound(value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_accepts() {
        assert_eq!(validate_int("42").unwrap(), 42);
        assert_eq!(validate_int("-7").unwrap(), -7);
        assert_eq!(validate_int("007").unwrap(), 7);
    }

    #[test]
    fn test_int_rejects() {
        for bad in ["abc", "", "-", "+5", "4.2", " 5", "5 ", "1e3", "--1"] {
            assert_eq!(
                validate_int(bad),
                Err(ValidationError::NotAnInteger(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_int_overflow_rejected() {
        assert!(validate_int("99999999999999999999").is_err());
    }

    #[test]
    fn test_date_accepts() {
        let date = validate_date("25-01-2026").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 25).unwrap());
        assert!(validate_date("29-02-2024").is_ok());
    }

    #[test]
    fn test_date_rejects() {
        for bad in [
            "2026-01-25",
            "5-1-2026",
            "25/01/2026",
            "32-01-2026",
            "29-02-2025",
            "25-13-2026",
            "25-01-26",
            "25-01-+026",
            "",
        ] {
            assert_eq!(
                validate_date(bad),
                Err(ValidationError::InvalidDate(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_filepath_blank() {
        assert!(validate_filepath("report.pdf").is_ok());
        assert_eq!(validate_filepath("   "), Err(ValidationError::EmptyFilepath));
    }

    #[test]
    fn test_file_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(validate_file_exists(path).is_ok());

        let missing = file.path().with_extension("missing");
        let missing = missing.to_str().unwrap();
        assert_eq!(
            validate_file_exists(missing),
            Err(ValidationError::FileNotFound(missing.to_string()))
        );
    }
}
