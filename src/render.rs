//! Dropdown view model for a populated year picker.
//!
//! Markup is left to the host; this only decides names, option order and
//! which option is selected.

use serde::Serialize;

use crate::FormField;
use crate::consts::INPUT_PREFIX;
use crate::value::resolve_display_value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// A `<select>`-style control ready for the host to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    /// Submission name, `input_{field_id}`
    pub name: String,
    /// Element id, `input_{form_id}_{field_id}`
    pub id: String,
    /// Leading empty-valued option; absent in the editor preview
    pub placeholder: Option<DropdownOption>,
    pub options: Vec<DropdownOption>,
}

impl Dropdown {
    /// Empty control shown while the form is being edited
    pub fn editor_preview(form_id: u32, field_id: u32) -> Self {
        Self {
            name: input_name(field_id),
            id: input_id(form_id, field_id),
            placeholder: None,
            options: Vec::new(),
        }
    }

    /// Value of the selected option, `""` when the placeholder is selected
    pub fn selected_value(&self) -> Option<&str> {
        self.placeholder
            .iter()
            .chain(&self.options)
            .find(|option| option.selected)
            .map(|option| option.value.as_str())
    }
}

/// Builds the dropdown for `field`, whose choices should already be populated.
///
/// The placeholder is selected only when nothing resolves. A submitted value
/// that matches no choice leaves every option unselected.
pub fn render_dropdown(form_id: u32, field: &FormField, submitted: &str) -> Dropdown {
    let selected = resolve_display_value(submitted, &field.config.default_value, &field.choices);

    let placeholder = DropdownOption {
        value: String::new(),
        text: field.config.placeholder_text().to_owned(),
        selected: selected.is_empty(),
    };

    let options = field
        .choices
        .iter()
        .map(|choice| DropdownOption {
            value: choice.value.clone(),
            text: choice.text.clone(),
            selected: choice.value == selected,
        })
        .collect();

    Dropdown {
        name: input_name(field.id),
        id: input_id(form_id, field.id),
        placeholder: Some(placeholder),
        options,
    }
}

fn input_name(field_id: u32) -> String {
    format!("{INPUT_PREFIX}_{field_id}")
}

fn input_id(form_id: u32, field_id: u32) -> String {
    format!("{INPUT_PREFIX}_{form_id}_{field_id}")
}
