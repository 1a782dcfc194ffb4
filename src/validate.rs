use tracing::debug;

use crate::{FieldConfig, YearRange};

/// Outcome of checking one submitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { message: String },
}

/// A failed validation as an error value, for hosts that propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationResult {
    /// Returns true when the value passed
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(message),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    /// Returns `ValidationError` carrying the message when invalid.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid { message } => Err(ValidationError { message }),
        }
    }
}

/// User-facing validation wording. Hosts provide their own to localize.
pub trait ValidationMessages {
    /// Shown when a required field was left empty
    fn required(&self) -> String;

    /// Shown when the value falls outside `range`
    fn out_of_range(&self, range: &YearRange) -> String;
}

/// English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl ValidationMessages for DefaultMessages {
    fn required(&self) -> String {
        "This field is required. Please select a year.".to_owned()
    }

    fn out_of_range(&self, range: &YearRange) -> String {
        format!(
            "Please select a year between {} and {}.",
            range.min_year(),
            range.max_year()
        )
    }
}

/// Validates a submitted value with the default English messages.
pub fn validate(value: &str, config: &FieldConfig, current_year: i32) -> ValidationResult {
    validate_with(value, config, current_year, &DefaultMessages)
}

/// Validates a submitted value.
///
/// An empty value only fails when the field is required. Any other value,
/// whitespace included, must parse (trimmed) as an integer year inside the
/// range computed for `current_year`; anything unparsable fails the range check.
pub fn validate_with(
    value: &str,
    config: &FieldConfig,
    current_year: i32,
    messages: &dyn ValidationMessages,
) -> ValidationResult {
    if value.is_empty() {
        if config.required {
            debug!("Year picker validation failed: required value missing");
            return ValidationResult::Invalid {
                message: messages.required(),
            };
        }
        return ValidationResult::Valid;
    }

    let trimmed = value.trim();
    let range = YearRange::from_config(config, current_year);
    let in_range = trimmed
        .parse::<i32>()
        .is_ok_and(|year| range.contains(year));

    if in_range {
        ValidationResult::Valid
    } else {
        debug!(value = trimmed, %range, "Year picker validation failed: out of range");
        ValidationResult::Invalid {
            message: messages.out_of_range(&range),
        }
    }
}

/// Validation flags the host displays next to the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub failed: bool,
    pub message: Option<String>,
}

impl ValidationState {
    /// Marks the field failed and attaches the message; a valid result changes nothing.
    pub fn record(&mut self, result: &ValidationResult) {
        if let ValidationResult::Invalid { message } = result {
            self.failed = true;
            self.message = Some(message.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min_offset: i64, max_offset: i64, required: bool) -> FieldConfig {
        FieldConfig {
            min_year_offset: min_offset,
            max_year_offset: max_offset,
            required,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn test_validate_cases() {
        struct TestCase {
            value: &'static str,
            required: bool,
            is_valid: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                value: "2021",
                required: false,
                is_valid: true,
                description: "inside range",
            },
            TestCase {
                value: "2020",
                required: true,
                is_valid: true,
                description: "lower bound",
            },
            TestCase {
                value: "2027",
                required: false,
                is_valid: true,
                description: "upper bound",
            },
            TestCase {
                value: "2019",
                required: false,
                is_valid: false,
                description: "below range",
            },
            TestCase {
                value: "2028",
                required: false,
                is_valid: false,
                description: "above range",
            },
            TestCase {
                value: "",
                required: false,
                is_valid: true,
                description: "optional and empty",
            },
            TestCase {
                value: "",
                required: true,
                is_valid: false,
                description: "required and empty",
            },
            TestCase {
                value: "  ",
                required: false,
                is_valid: false,
                description: "optional and blank",
            },
            TestCase {
                value: " 2022 ",
                required: false,
                is_valid: true,
                description: "surrounding whitespace",
            },
            TestCase {
                value: "twenty",
                required: false,
                is_valid: false,
                description: "unparsable",
            },
            TestCase {
                value: "2021.5",
                required: false,
                is_valid: false,
                description: "fractional",
            },
        ];

        let field = config(5, 2, false);
        for case in &cases {
            let field = FieldConfig {
                required: case.required,
                ..field.clone()
            };
            assert_eq!(
                validate(case.value, &field, 2025).is_valid(),
                case.is_valid,
                "Value {:?} ({})",
                case.value,
                case.description
            );
        }
    }

    #[test]
    fn test_out_of_range_message_has_bounds() {
        let result = validate("2019", &config(5, 2, false), 2025);
        let message = result.message().unwrap();
        assert!(message.contains("2020"));
        assert!(message.contains("2027"));
        assert_eq!(message, "Please select a year between 2020 and 2027.");
    }

    #[test]
    fn test_required_message_regardless_of_offsets() {
        for (min_offset, max_offset) in [(0, 0), (5, 2), (100, 100), (-10, 500)] {
            let result = validate("", &config(min_offset, max_offset, true), 2025);
            assert_eq!(
                result.message(),
                Some("This field is required. Please select a year.")
            );
        }
    }

    #[test]
    fn test_blank_value_gets_range_message() {
        for blank in [" ", "   ", "\t"] {
            let result = validate(blank, &config(5, 2, false), 2025);
            assert_eq!(
                result.message(),
                Some("Please select a year between 2020 and 2027."),
                "Value {blank:?}"
            );
        }

        let result = validate("   ", &config(5, 2, true), 2025);
        assert_eq!(
            result.message(),
            Some("Please select a year between 2020 and 2027.")
        );
    }

    #[test]
    fn test_unparsable_gets_range_message() {
        let result = validate("abc", &config(1, 1, true), 2025);
        assert_eq!(
            result.message(),
            Some("Please select a year between 2024 and 2026.")
        );
    }

    #[test]
    fn test_clamped_offsets_apply() {
        // -50 clamps to 0, so only the current year is accepted
        let field = config(0, -50, false);
        assert!(validate("2025", &field, 2025).is_valid());
        assert!(!validate("2024", &field, 2025).is_valid());
    }

    #[test]
    fn test_custom_messages() {
        struct Terse;

        impl ValidationMessages for Terse {
            fn required(&self) -> String {
                "required".to_owned()
            }

            fn out_of_range(&self, range: &YearRange) -> String {
                format!("range {range}")
            }
        }

        let field = config(1, 0, true);
        let result = validate_with("", &field, 2025, &Terse);
        assert_eq!(result.message(), Some("required"));

        let result = validate_with("1999", &field, 2025, &Terse);
        assert_eq!(result.message(), Some("range 2024..=2025"));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::Valid.into_result().is_ok());

        let err = validate("1900", &config(0, 0, false), 2025)
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Please select a year between 2025 and 2025.");
    }

    #[test]
    fn test_validation_state_record() {
        let mut state = ValidationState::default();

        state.record(&ValidationResult::Valid);
        assert_eq!(state, ValidationState::default());

        state.record(&validate("", &config(0, 0, true), 2025));
        assert!(state.failed);
        assert_eq!(
            state.message.as_deref(),
            Some("This field is required. Please select a year.")
        );

        // a later success does not clear an earlier failure
        state.record(&ValidationResult::Valid);
        assert!(state.failed);
    }
}
