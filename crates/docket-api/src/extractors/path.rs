//! Typed path parameter helpers.

use docket_core::error::{AppError, FieldError};
use docket_core::types::CaseId;

/// Parses a positive case id from a path segment.
pub fn parse_case_id(s: &str) -> Result<CaseId, AppError> {
    match s.parse::<CaseId>() {
        Ok(id) if id.get() >= 1 => Ok(id),
        _ => Err(AppError::invalid_fields(
            format!("Invalid case id: {s}"),
            vec![FieldError::new("id", "must be a positive integer")],
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_id() {
        assert_eq!(parse_case_id("12").unwrap(), CaseId(12));
        assert!(parse_case_id("abc").is_err());
        assert!(parse_case_id("0").is_err());
        assert!(parse_case_id("1.5").is_err());
    }
}
