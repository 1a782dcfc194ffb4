use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Choice, FieldConfig, FieldRegistry, YearSource};

/// One field of a host form, as handed over for a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: u32,
    /// Registry tag of the field's type
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(flatten)]
    pub config: FieldConfig,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A host form and its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub id: u32,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl Form {
    /// Looks up a field by id
    pub fn field(&self, id: u32) -> Option<&FormField> {
        self.fields.iter().find(|field| field.id == id)
    }
}

/// Rebuilds choices for every field with a registered type before the form renders.
///
/// Fields whose type the registry does not know pass through untouched. The
/// current year is read once so every field in the pass agrees on it.
pub fn pre_render(form: Form, registry: &FieldRegistry, clock: &dyn YearSource) -> Form {
    let current_year = clock.current_year();
    debug!(form_id = form.id, current_year, "Populating form fields before render");

    let fields = form
        .fields
        .into_iter()
        .map(|field| match registry.get(&field.field_type) {
            Some(handler) => {
                trace!(field_id = field.id, field_type = %field.field_type, "Populating field");
                handler.populate(field, current_year)
            },
            None => field,
        })
        .collect();

    Form { fields, ..form }
}
