//! Per-model accumulator of observed properties
//!
//! Every JSON object that belongs to a model is one *iteration*. A property
//! is optional when some iteration lacked it or carried `null` for it.

use tracing::{debug, warn};

use crate::domain::{Line, PropertyType};

#[derive(Debug, Clone)]
struct FieldRecord {
    key: String,
    property_type: PropertyType,
    occurrences: usize,
    nullable: bool,
}

/// Observed properties of a single model across all of its iterations
#[derive(Debug, Clone, Default)]
pub struct GeneratorDataSource {
    iterations: usize,
    fields: Vec<FieldRecord>,
}

impl GeneratorDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new iteration (one more object instance of this model)
    pub fn begin_iteration(&mut self) {
        self.iterations += 1;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Record one occurrence of `key` in the current iteration
    pub fn observe(&mut self, key: &str, property_type: PropertyType) {
        let is_null = property_type == PropertyType::Unknown;

        let Some(field) = self.fields.iter_mut().find(|f| f.key == key) else {
            debug!(key, %property_type, "new property");
            self.fields.push(FieldRecord {
                key: key.to_string(),
                property_type,
                occurrences: 1,
                nullable: is_null,
            });
            return;
        };

        field.occurrences += 1;
        field.nullable |= is_null;

        match field.property_type.merge(&property_type) {
            Ok(merged) => {
                if merged != field.property_type {
                    debug!(key, from = %field.property_type, to = %merged, "property type updated");
                    field.property_type = merged;
                }
            }
            Err(conflict) => {
                warn!(
                    key,
                    existing = %conflict.existing,
                    incoming = %conflict.incoming,
                    "conflicting types in sample payloads, keeping the first"
                );
            }
        }
    }

    /// Whether `key` is optional, or `None` if it was never observed
    pub fn is_optional(&self, key: &str) -> Option<bool> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| self.field_is_optional(f))
    }

    /// Type observed for `key`
    pub fn property_type(&self, key: &str) -> Option<&PropertyType> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| &f.property_type)
    }

    /// Build property lines, naming each property with `property_name`
    pub fn lines(&self, property_name: impl Fn(&str) -> String) -> Vec<Line> {
        self.fields
            .iter()
            .map(|f| {
                Line::new(
                    f.key.clone(),
                    property_name(&f.key),
                    f.property_type.clone(),
                    self.field_is_optional(f),
                )
            })
            .collect()
    }

    fn field_is_optional(&self, field: &FieldRecord) -> bool {
        field.nullable || field.occurrences < self.iterations
    }
}
