use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::{FieldType, YearPickerField};

/// A registered field type implementation.
pub type FieldHandler = Box<dyn FieldType + Send + Sync>;

/// Error type for field registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Another handler already claimed the tag.
    #[error("Field type already registered: {0}")]
    DuplicateType(String),
}

/// Field types known to the host, keyed by tag.
///
/// Built once during host start-up and read-only afterwards.
#[derive(Default)]
pub struct FieldRegistry {
    handlers: HashMap<&'static str, FieldHandler>,
}

impl FieldRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the default [`YearPickerField`]
    pub fn with_year_picker() -> Self {
        let picker = YearPickerField::new();
        let mut handlers: HashMap<&'static str, FieldHandler> = HashMap::new();
        handlers.insert(picker.type_tag(), Box::new(picker));
        Self { handlers }
    }

    /// Registers a field type under its tag.
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateType` if the tag is taken; the
    /// existing handler stays registered.
    pub fn register(&mut self, handler: FieldHandler) -> Result<(), RegistryError> {
        let tag = handler.type_tag();
        if self.handlers.contains_key(tag) {
            return Err(RegistryError::DuplicateType(tag.to_owned()));
        }
        debug!(field_type = tag, "Registered field type");
        self.handlers.insert(tag, handler);
        Ok(())
    }

    /// Returns the handler registered under `tag`
    pub fn get(&self, tag: &str) -> Option<&(dyn FieldType + Send + Sync)> {
        self.handlers.get(tag).map(AsRef::as_ref)
    }

    /// Checks if a handler is registered under `tag`
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry").field("tags", &self.tags()).finish()
    }
}
