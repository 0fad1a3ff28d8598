/// Validation utilities for the amount input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Parse an amount typed by the user.
///
/// The whole text must be a finite number; surrounding whitespace is ignored.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// True for the two inputs that never produce a quote or a submission.
pub fn is_blank_or_zero(text: &str) -> bool {
    text.is_empty() || text == "0"
}

/// Decide whether an edit of the "from" amount is kept.
///
/// Empty text is accepted so the field can be cleared. Anything else has to be
/// a non-negative number in full.
pub fn validate_amount_input(text: &str) -> ValidationResult {
    if text.is_empty() {
        return ValidationResult::ok();
    }

    match parse_amount(text) {
        Some(value) if value >= 0.0 => ValidationResult::ok(),
        Some(_) => ValidationResult::err("Amount cannot be negative"),
        None => ValidationResult::err("Amount must be a number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_input_validation() {
        assert!(validate_amount_input("").is_valid);
        assert!(validate_amount_input("0").is_valid);
        assert!(validate_amount_input("1.5").is_valid);
        assert!(validate_amount_input("1.").is_valid); // partial decimal while typing
        assert!(validate_amount_input("2e3").is_valid);
        assert!(!validate_amount_input("-1").is_valid);
        assert!(!validate_amount_input("abc").is_valid);
        assert!(!validate_amount_input("1.2.3").is_valid);
        assert!(!validate_amount_input(".").is_valid);
        assert!(!validate_amount_input("inf").is_valid);
        assert!(!validate_amount_input("NaN").is_valid);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            validate_amount_input("-3").error.as_deref(),
            Some("Amount cannot be negative")
        );
        assert_eq!(
            validate_amount_input("x").error.as_deref(),
            Some("Amount must be a number")
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 2.5 "), Some(2.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1e400"), None);
    }

    #[test]
    fn test_blank_or_zero() {
        assert!(is_blank_or_zero(""));
        assert!(is_blank_or_zero("0"));
        assert!(!is_blank_or_zero("0.0"));
        assert!(!is_blank_or_zero("1"));
    }
}
