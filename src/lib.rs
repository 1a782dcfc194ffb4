//! A year picker form field.
//!
//! The field offers a dropdown of years spanning two admin-configured offsets
//! around the current year. Four pure operations carry the logic:
//!
//! - [`compute_range`]: clamps both offsets to `0..=100` and derives the
//!   inclusive `[min_year, max_year]` span.
//! - [`generate_choices`]: one [`Choice`] per year, most recent first.
//! - [`resolve_display_value`]: submitted value, else a still-valid default,
//!   else nothing.
//! - [`validate`]: required check, then range check.
//!
//! The current year is always a parameter. [`YearSource`] supplies it at the
//! host boundary, where [`FieldRegistry`] and [`pre_render`] connect the field
//! to a form host.
//!
//! ```
//! use year_picker::{compute_range, generate_choices, validate, FieldConfig};
//!
//! let range = compute_range(5, 2, 2025);
//! assert_eq!((range.min_year(), range.max_year()), (2020, 2027));
//! assert_eq!(generate_choices(&range).len(), 8);
//!
//! let config = FieldConfig { min_year_offset: 5, max_year_offset: 2, ..FieldConfig::default() };
//! assert!(validate("2021", &config, 2025).is_valid());
//! assert!(!validate("2019", &config, 2025).is_valid());
//! ```

mod clock;
mod config;
mod consts;
mod field;
mod form;
mod prelude;
mod range;
mod registry;
mod render;
mod types;
mod validate;
mod value;

#[cfg(test)]
mod test_utils;

pub use clock::{FixedYear, SystemYear, YearSource};
pub use config::{ConfigError, FieldConfig};
pub use consts::*;
pub use field::{EditorButton, FieldType, YearPickerField};
pub use form::{Form, FormField, pre_render};
pub use range::{YearRange, compute_range, generate_choices};
pub use registry::{FieldHandler, FieldRegistry, RegistryError};
pub use render::{Dropdown, DropdownOption, render_dropdown};
pub use types::{Choice, Offset};
pub use validate::{
    DefaultMessages, ValidationError, ValidationMessages, ValidationResult, ValidationState, validate,
    validate_with,
};
pub use value::resolve_display_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_range_and_validation() {
        let range = compute_range(5, 2, 2025);
        assert_eq!(range, YearRange::new(2020, 2027));

        let config = FieldConfig {
            min_year_offset: 5,
            max_year_offset: 2,
            ..FieldConfig::default()
        };

        let result = validate("2019", &config, 2025);
        let message = result.message().unwrap();
        assert!(message.contains("2020") && message.contains("2027"));
        assert_eq!(validate("2021", &config, 2025), ValidationResult::Valid);
    }

    #[test]
    fn test_degenerate_negative_max_offset() {
        let range = compute_range(0, -50, 2025);
        assert_eq!(range, YearRange::new(2025, 2025));
        assert_eq!(generate_choices(&range), vec![Choice::year(2025)]);
    }

    #[test]
    fn test_render_then_submit_round() {
        let registry = FieldRegistry::with_year_picker();
        let clock = FixedYear(2025);
        let form: Form = serde_json::from_str(
            r#"{"id": 2, "fields": [{"id": 1, "type": "yearpicker", "minYearOffset": 3, "isRequired": "1", "defaultValue": "2023"}]}"#,
        )
        .unwrap();

        let form = pre_render(form, &registry, &clock);
        let field = form.field(1).unwrap();

        let dropdown = render_dropdown(form.id, field, "");
        assert_eq!(dropdown.selected_value(), Some("2023"));
        assert_eq!(dropdown.options.len(), 4);

        let handler = registry.get(&field.field_type).unwrap();
        let mut state = ValidationState::default();

        state.record(&handler.validate("2022", &field.config, clock.current_year()));
        assert!(!state.failed);

        state.record(&handler.validate("", &field.config, clock.current_year()));
        assert!(state.failed);
        assert_eq!(
            state.message.as_deref(),
            Some("This field is required. Please select a year.")
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MIN_OFFSET, 0);
        assert_eq!(MAX_OFFSET, 100);
        assert_eq!(FIELD_TYPE, "yearpicker");
    }
}
