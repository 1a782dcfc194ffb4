/// Smallest accepted year offset
pub const MIN_OFFSET: u8 = 0;

/// Largest accepted year offset (a century either side of today)
pub const MAX_OFFSET: u8 = 100;

/// Tag the host registry uses to route calls to this field type
pub const FIELD_TYPE: &str = "yearpicker";

/// Title shown on the form editor button
pub const FIELD_TITLE: &str = "Year Picker";

/// Editor button group the field is listed under
pub const EDITOR_GROUP: &str = "advanced_fields";

/// Placeholder option text used when none is configured
pub const DEFAULT_PLACEHOLDER: &str = "Select a Year";

/// Setting for the offset before the current year
pub const MIN_YEAR_OFFSET_SETTING: &str = "min_year_offset_setting";
/// Setting for the offset after the current year
pub const MAX_YEAR_OFFSET_SETTING: &str = "max_year_offset_setting";

/// Editor settings the field declares, in display order
pub const EDITOR_SETTINGS: [&str; 10] = [
    "label_setting",
    "default_value_setting",
    "visibility_setting",
    "css_class_setting",
    "admin_label_setting",
    "placeholder_setting",
    "conditional_logic_field_setting",
    MIN_YEAR_OFFSET_SETTING,
    MAX_YEAR_OFFSET_SETTING,
    "rules_setting",
];

/// Prefix of every rendered input name and id
pub const INPUT_PREFIX: &str = "input";
