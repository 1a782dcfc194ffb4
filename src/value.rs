use crate::Choice;

/// Picks the value shown as selected in the dropdown.
///
/// A submitted or stored value always wins. Otherwise the configured default
/// is used, but only while it is still one of the current choices; a default
/// that has aged out of the range degrades to no selection.
pub fn resolve_display_value(submitted: &str, default_value: &str, choices: &[Choice]) -> String {
    if !submitted.is_empty() {
        return submitted.to_owned();
    }

    if !default_value.is_empty() && choices.iter().any(|choice| choice.value == default_value) {
        return default_value.to_owned();
    }

    String::new()
}
