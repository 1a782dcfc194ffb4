use crate::consts::FIELD_TYPE;
use crate::{FieldConfig, FieldType, FormField, YearPickerField};

/// Year picker field with the given offsets and no choices yet
pub fn year_field(id: u32, min_offset: i64, max_offset: i64) -> FormField {
    FormField {
        id,
        field_type: FIELD_TYPE.to_owned(),
        config: FieldConfig {
            min_year_offset: min_offset,
            max_year_offset: max_offset,
            ..FieldConfig::default()
        },
        choices: Vec::new(),
    }
}

/// Year picker field with choices populated for `current_year`
pub fn populated_year_field(id: u32, min_offset: i64, max_offset: i64, current_year: i32) -> FormField {
    YearPickerField::new().populate(year_field(id, min_offset, max_offset), current_year)
}
