//! Property lines of a generated model

use super::PropertyType;

/// One property of a model, ready to be rendered by a language formatter
#[derive(Debug, Clone)]
pub struct Line {
    /// Key as it appears in the JSON payload
    pub key: String,
    /// Property name in the target language
    pub property: String,
    pub property_type: PropertyType,
    pub is_optional: bool,
}

impl Line {
    pub fn new(
        key: impl Into<String>,
        property: impl Into<String>,
        property_type: PropertyType,
        is_optional: bool,
    ) -> Self {
        Self {
            key: key.into(),
            property: property.into(),
            property_type,
            is_optional,
        }
    }
}

/// Compares two property lines. Optionality is ignored.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.property_type == other.property_type
    }
}

impl Eq for Line {}

/// A hand-edited property line found in a previously generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProperty {
    /// The line exactly as it was written
    pub custom_line: String,
    /// Property the line declares
    pub property: String,
}

/// Find the custom line declared for a property, if any
pub fn find_custom<'a>(custom: &'a [CustomProperty], property: &str) -> Option<&'a CustomProperty> {
    custom.iter().find(|c| c.property == property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_optional() {
        let a = Line::new("count", "count", PropertyType::Int, false);
        let b = Line::new("count", "count", PropertyType::Int, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_compares_type() {
        let a = Line::new("average", "average", PropertyType::Int, false);
        let b = Line::new("average", "average", PropertyType::Double, false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_find_custom() {
        let custom = vec![CustomProperty {
            custom_line: "    let price: Money // modelsync:custom".to_string(),
            property: "price".to_string(),
        }];
        assert!(find_custom(&custom, "price").is_some());
        assert!(find_custom(&custom, "oldPrice").is_none());
    }
}
