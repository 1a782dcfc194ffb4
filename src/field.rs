//! The year picker as a pluggable field type.
//!
//! Hosts route calls to a field type by its tag. [`FieldType`] is the narrow
//! capability surface they need: editor metadata, choice population before
//! render, and submission validation. [`YearPickerField`] is the only
//! implementation shipped here.

use std::fmt;

use serde::Serialize;

use crate::consts::{EDITOR_GROUP, EDITOR_SETTINGS, FIELD_TITLE, FIELD_TYPE};
use crate::{
    Choice, DefaultMessages, FieldConfig, FormField, ValidationMessages, ValidationResult, YearRange,
    generate_choices, resolve_display_value, validate_with,
};

/// Button a field type contributes to the form editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditorButton {
    pub group: &'static str,
    pub text: &'static str,
}

/// Capability interface the host registry calls by field-type tag.
pub trait FieldType {
    /// Registry tag, unique per field type
    fn type_tag(&self) -> &'static str;

    /// Human-readable name shown in the editor
    fn editor_title(&self) -> &'static str;

    /// Returns the button this field adds to the form editor
    fn editor_button(&self) -> EditorButton {
        EditorButton {
            group: EDITOR_GROUP,
            text: self.editor_title(),
        }
    }

    /// Editor settings panels this field exposes, in order
    fn editor_settings(&self) -> &'static [&'static str];

    /// Inclusive year span selectable for `config` in `current_year`
    fn compute_range(&self, config: &FieldConfig, current_year: i32) -> YearRange {
        YearRange::from_config(config, current_year)
    }

    /// Choices for `config` in `current_year`, most recent first
    fn generate_choices(&self, config: &FieldConfig, current_year: i32) -> Vec<Choice> {
        generate_choices(&self.compute_range(config, current_year))
    }

    /// Selected value for a render pass over `field`'s current choices
    fn resolve_display_value(&self, field: &FormField, submitted: &str) -> String {
        resolve_display_value(submitted, &field.config.default_value, &field.choices)
    }

    /// Returns `field` with its choices rebuilt for `current_year`.
    fn populate(&self, field: FormField, current_year: i32) -> FormField {
        let choices = self.generate_choices(&field.config, current_year);
        FormField { choices, ..field }
    }

    /// Checks a submitted value against the field's configuration.
    fn validate(&self, value: &str, config: &FieldConfig, current_year: i32) -> ValidationResult;
}

/// Dropdown of years spanning configurable offsets around the current year.
pub struct YearPickerField {
    messages: Box<dyn ValidationMessages + Send + Sync>,
}

impl YearPickerField {
    /// Creates the field with the default English messages
    pub fn new() -> Self {
        Self::with_messages(DefaultMessages)
    }

    /// Uses host-provided (typically localized) validation wording
    pub fn with_messages(messages: impl ValidationMessages + Send + Sync + 'static) -> Self {
        Self {
            messages: Box::new(messages),
        }
    }
}

impl Default for YearPickerField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for YearPickerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YearPickerField").finish_non_exhaustive()
    }
}

impl FieldType for YearPickerField {
    fn type_tag(&self) -> &'static str {
        FIELD_TYPE
    }

    fn editor_title(&self) -> &'static str {
        FIELD_TITLE
    }

    fn editor_settings(&self) -> &'static [&'static str] {
        &EDITOR_SETTINGS
    }

    fn validate(&self, value: &str, config: &FieldConfig, current_year: i32) -> ValidationResult {
        validate_with(value, config, current_year, self.messages.as_ref())
    }
}
