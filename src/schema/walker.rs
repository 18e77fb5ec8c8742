//! Walks sample payloads and feeds every object into its model's accumulator

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::data_source::GeneratorDataSource;
use super::naming::upper_camel;
use crate::domain::PropertyType;

/// Infer the property type of a single payload value
pub fn infer(key: &str, value: &Value) -> PropertyType {
    match value {
        Value::Null => PropertyType::Unknown,
        Value::Bool(_) => PropertyType::Bool,
        Value::Number(n) if n.is_i64() || n.is_u64() => PropertyType::Int,
        Value::Number(_) => PropertyType::Double,
        Value::String(_) => PropertyType::String,
        Value::Object(_) => PropertyType::Object(upper_camel(key)),
        Value::Array(items) => {
            let element = items
                .iter()
                .filter(|item| !item.is_null())
                .fold(PropertyType::Unknown, |acc, item| {
                    let incoming = infer(key, item);
                    acc.merge(&incoming).unwrap_or_else(|conflict| {
                        warn!(
                            key,
                            existing = %conflict.existing,
                            incoming = %conflict.incoming,
                            "mixed element types in array, keeping the first"
                        );
                        acc
                    })
                });
            PropertyType::Array(Box::new(element))
        }
    }
}

/// All models discovered while walking payloads, in discovery order
#[derive(Debug, Default)]
pub struct ModelSet {
    models: Vec<(String, GeneratorDataSource)>,
    by_name: HashMap<String, usize>,
}

impl ModelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one object instance of `model`, recursing into nested objects
    pub fn observe_object(&mut self, model: &str, object: &Map<String, Value>) {
        let mut nested = Vec::new();

        let source = self.entry(model);
        source.begin_iteration();
        for (key, value) in object {
            source.observe(key, infer(key, value));
            collect_nested(key, value, &mut nested);
        }

        debug!(model, properties = object.len(), "observed object");

        for (name, child) in nested {
            self.observe_object(&name, child);
        }
    }

    /// Feed a whole payload: an object is one iteration of `model`, an array
    /// of objects one iteration per element. Returns the iterations added.
    pub fn walk(&mut self, model: &str, payload: &Value) -> usize {
        match payload {
            Value::Object(object) => {
                self.observe_object(model, object);
                1
            }
            Value::Array(items) => items.iter().map(|item| self.walk_element(model, item)).sum(),
            _ => {
                warn!(model, "payload root is not an object, skipping");
                0
            }
        }
    }

    fn walk_element(&mut self, model: &str, item: &Value) -> usize {
        match item {
            Value::Object(object) => {
                self.observe_object(model, object);
                1
            }
            _ => {
                warn!(model, "array element is not an object, skipping");
                0
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&GeneratorDataSource> {
        self.by_name.get(name).map(|&idx| &self.models[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratorDataSource)> {
        self.models.iter().map(|(name, source)| (name.as_str(), source))
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn entry(&mut self, name: &str) -> &mut GeneratorDataSource {
        let idx = match self.by_name.get(name) {
            Some(&idx) => idx,
            None => {
                self.models
                    .push((name.to_string(), GeneratorDataSource::new()));
                let idx = self.models.len() - 1;
                self.by_name.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.models[idx].1
    }
}

fn collect_nested<'a>(key: &str, value: &'a Value, nested: &mut Vec<(String, &'a Map<String, Value>)>) {
    match value {
        Value::Object(child) => nested.push((upper_camel(key), child)),
        Value::Array(items) => {
            for item in items {
                collect_nested(key, item, nested);
            }
        }
        _ => {}
    }
}
