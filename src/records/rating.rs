//! Rating record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate rating of a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Rating {
    pub count: i64,
    pub average: f64,
}

impl Rating {
    pub fn new(count: i64, average: f64) -> Self {
        Self { count, average }
    }

    /// Build from a raw payload. Missing or unusable values become zero.
    pub fn from_dictionary(dictionary: &Map<String, Value>) -> Self {
        Self {
            count: dictionary.get("count").map(integer_value).unwrap_or_default(),
            average: dictionary.get("average").map(double_value).unwrap_or_default(),
        }
    }
}

impl From<Map<String, Value>> for Rating {
    fn from(dictionary: Map<String, Value>) -> Self {
        Self::from_dictionary(&dictionary)
    }
}

/// Numbers, numeric strings and booleans as an integer; fractions truncate toward zero
fn integer_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or_default(),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
                .unwrap_or_default()
        }
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn double_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dictionary(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_dictionary_exact_values() {
        let rating = Rating::from_dictionary(&dictionary(json!({"count": 42, "average": 4.25})));
        assert_eq!(rating.count, 42);
        assert_eq!(rating.average, 4.25);
    }

    #[test]
    fn test_absent_keys_are_zero() {
        let rating = Rating::from_dictionary(&Map::new());
        assert_eq!(rating, Rating::new(0, 0.0));
        assert_eq!(rating, Rating::default());
    }

    #[test]
    fn test_lenient_values() {
        let rating = Rating::from_dictionary(&dictionary(json!({"count": "17", "average": "3.5"})));
        assert_eq!(rating, Rating::new(17, 3.5));

        let rating = Rating::from_dictionary(&dictionary(json!({"count": 9.9, "average": 4})));
        assert_eq!(rating, Rating::new(9, 4.0));

        let rating = Rating::from_dictionary(&dictionary(json!({"count": null, "average": [1]})));
        assert_eq!(rating, Rating::default());
    }

    #[test]
    fn test_fields_are_mutable() {
        let mut rating = Rating::new(1, 5.0);
        rating.count += 1;
        rating.average = 4.5;
        assert_eq!(rating, Rating::new(2, 4.5));
    }

    #[test]
    fn test_serde() {
        let rating: Rating = serde_json::from_str(r#"{"count": "3", "extra": true}"#).unwrap();
        assert_eq!(rating, Rating::new(3, 0.0));

        let json = serde_json::to_value(Rating::new(3, 4.5)).unwrap();
        assert_eq!(json, json!({"count": 3, "average": 4.5}));
    }
}
