//! Per-field configuration supplied by the host.
//!
//! Hosts store field properties loosely typed (offsets typed into a number
//! input arrive as text, unset ones as `null` or `""`), so deserialization
//! coerces instead of rejecting. Only structurally broken JSON is an error.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::DEFAULT_PLACEHOLDER;
use crate::types::leading_integer;

/// Admin-configured settings for one year picker field.
///
/// Offsets are kept as given; clamping happens when a range is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Years before the current year that remain selectable
    #[serde(default, deserialize_with = "lenient_integer")]
    pub min_year_offset: i64,
    /// Years after the current year that remain selectable
    #[serde(default, deserialize_with = "lenient_integer")]
    pub max_year_offset: i64,
    #[serde(default, rename = "isRequired", deserialize_with = "lenient_flag")]
    pub required: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub placeholder: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub default_value: String,
}

/// Error type for loading field configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not a JSON object of field properties.
    #[error("Invalid field configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldConfig {
    /// Parses host-stored field properties.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` if `json` is malformed or not an object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Placeholder option text, falling back to `DEFAULT_PLACEHOLDER`
    pub fn placeholder_text(&self) -> &str {
        if self.placeholder.trim().is_empty() {
            DEFAULT_PLACEHOLDER
        } else {
            &self.placeholder
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Int(i64),
    Float(f64),
    Flag(bool),
    Text(String),
    // arrays, objects and anything else the host may have stored
    Other(IgnoredAny),
}

#[allow(clippy::cast_possible_truncation)]
fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseValue::Int(n)) => n,
        // float-to-int casts saturate, NaN becomes 0
        Some(LooseValue::Float(n)) => n as i64,
        Some(LooseValue::Flag(b)) => i64::from(b),
        Some(LooseValue::Text(s)) => leading_integer(&s),
        Some(LooseValue::Other(_)) | None => 0,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseValue::Flag(b)) => b,
        Some(LooseValue::Int(n)) => n != 0,
        Some(LooseValue::Float(n)) => n != 0.0,
        Some(LooseValue::Text(s)) => !s.is_empty() && s != "0",
        Some(LooseValue::Other(_)) | None => false,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseValue::Text(s)) => s,
        Some(LooseValue::Int(n)) => n.to_string(),
        Some(LooseValue::Float(n)) => n.to_string(),
        Some(LooseValue::Flag(b)) => if b { "1".to_owned() } else { String::new() },
        Some(LooseValue::Other(_)) | None => String::new(),
    })
}
