//! Inferred property types and the priority rules used to merge them

use std::fmt;

/// Type of a model property, inferred from sample payload values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Only `null` has been observed so far
    Unknown,
    Bool,
    Int,
    Double,
    String,
    /// A nested model, by model name
    Object(String),
    /// A homogeneous list of the element type
    Array(Box<PropertyType>),
}

/// Two observations of the same property that cannot be reconciled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConflict {
    pub existing: PropertyType,
    pub incoming: PropertyType,
}

impl PropertyType {
    /// Merge another observation into this type.
    ///
    /// `Unknown` yields to anything, `Int` widens to `Double`, and arrays merge
    /// their element types. Everything else has to agree exactly.
    pub fn merge(&self, other: &PropertyType) -> Result<PropertyType, TypeConflict> {
        use PropertyType::{Array, Double, Int, Unknown};

        match (self, other) {
            (a, b) if a == b => Ok(a.clone()),
            (Unknown, b) => Ok(b.clone()),
            (a, Unknown) => Ok(a.clone()),
            (Int, Double) | (Double, Int) => Ok(Double),
            (Array(a), Array(b)) => a
                .merge(b)
                .map(|element| Array(Box::new(element)))
                .map_err(|_| self.conflict(other)),
            _ => Err(self.conflict(other)),
        }
    }

    /// Name of the nested model this type refers to, looking through arrays
    pub fn model_name(&self) -> Option<&str> {
        match self {
            PropertyType::Object(name) => Some(name),
            PropertyType::Array(element) => element.model_name(),
            _ => None,
        }
    }

    /// Whether the type is a plain value (no heap object in reference-counted languages)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            PropertyType::Bool | PropertyType::Int | PropertyType::Double
        )
    }

    fn conflict(&self, other: &PropertyType) -> TypeConflict {
        TypeConflict {
            existing: self.clone(),
            incoming: other.clone(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Unknown => write!(f, "unknown"),
            PropertyType::Bool => write!(f, "bool"),
            PropertyType::Int => write!(f, "int"),
            PropertyType::Double => write!(f, "double"),
            PropertyType::String => write!(f, "string"),
            PropertyType::Object(name) => write!(f, "{name}"),
            PropertyType::Array(element) => write!(f, "[{element}]"),
        }
    }
}
