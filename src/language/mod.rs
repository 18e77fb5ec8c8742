//! Target languages and their formatters
//!
//! This module handles:
//! - The `LanguageFormatter` trait every target language implements
//! - Language lookup by name, with aliases (via `Language`)
//! - Formatter implementations for Swift, Kotlin, Objective-C and Rust

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Line, PropertyType};
use crate::error::ModelSyncError;
use crate::generator::HeaderContext;

pub mod kotlin;
pub mod objc;
pub mod rust;
pub mod swift;

/// Renders the pieces of a model declaration in one target language.
///
/// A generated file is assembled from these pieces by
/// [`crate::generator::render_file`]: header, imports, declaration, sorted
/// property lines, key mapping, end line.
pub trait LanguageFormatter {
    /// File extension without the leading dot
    fn file_extension(&self) -> &'static str;

    /// File name for a model
    fn file_name(&self, model: &str) -> String {
        format!("{model}.{}", self.file_extension())
    }

    fn line_comment(&self) -> &'static str {
        "//"
    }

    /// Property name for a payload key, escaped if it collides with a reserved word
    fn property_name(&self, key: &str) -> String;

    /// Spelling of a property type
    fn type_name(&self, property_type: &PropertyType) -> String;

    /// Lines between the file header and the model declaration
    fn imports(&self, _model: &str, _lines: &[Line], _context: &HeaderContext) -> Option<String> {
        None
    }

    /// Opening of the model declaration
    fn model_declaration(&self, model: &str) -> String;

    /// One property line
    fn variable_string(&self, line: &Line) -> String;

    /// Key used to order property lines
    fn sort_key(&self, line: &Line) -> String {
        self.variable_string(line)
    }

    /// Property declared by a previously rendered line, if it declares one
    fn property(&self, variable_string: &str) -> Option<String>;

    /// How a preserved custom line is emitted in place of the generated `line`
    fn wrap_custom(&self, _line: &Line, custom_line: &str) -> String {
        custom_line.to_string()
    }

    /// Mapping between payload keys and property names, when the language needs one
    fn key_mapping(&self, _lines: &[Line]) -> Option<String> {
        None
    }

    /// Closing of the model declaration
    fn model_end(&self, model: &str) -> String;

    /// A second file generated for every model (e.g. an Objective-C header)
    fn companion(&self) -> Option<&dyn LanguageFormatter> {
        None
    }
}

/// A supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Swift,
    Kotlin,
    ObjectiveC,
    Rust,
}

impl Language {
    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[
            Language::Swift,
            Language::Kotlin,
            Language::ObjectiveC,
            Language::Rust,
        ]
    }

    /// Canonical identifier used in configuration files
    pub fn id(self) -> &'static str {
        match self {
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::ObjectiveC => "objc",
            Language::Rust => "rust",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::ObjectiveC => "Objective-C",
            Language::Rust => "Rust",
        }
    }

    /// Formatter for this language
    pub fn formatter(self) -> Box<dyn LanguageFormatter> {
        match self {
            Language::Swift => Box::new(swift::SwiftFormatter),
            Language::Kotlin => Box::new(kotlin::KotlinFormatter),
            Language::ObjectiveC => Box::new(objc::ObjcFormatter::new()),
            Language::Rust => Box::new(rust::RustFormatter),
        }
    }

    /// Extensions of every file generated per model
    pub fn extensions(self) -> Vec<&'static str> {
        let formatter = self.formatter();
        let mut extensions = vec![formatter.file_extension()];
        if let Some(companion) = formatter.companion() {
            extensions.push(companion.file_extension());
        }
        extensions
    }
}

impl FromStr for Language {
    type Err = ModelSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swift" => Ok(Language::Swift),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "objc" | "objective-c" | "obj-c" | "objectivec" => Ok(Language::ObjectiveC),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(ModelSyncError::LanguageNotSupported {
                language: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = ModelSyncError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.id().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Escape a payload key for a double-quoted string literal
pub(crate) fn escape_literal(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Strip the reserved-word escaping a formatter applied to a property name
pub(crate) fn unescaped(property: &str) -> &str {
    property.trim_start_matches("r#").trim_matches('`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_aliases() {
        assert_eq!("swift".parse::<Language>().unwrap(), Language::Swift);
        assert_eq!("KT".parse::<Language>().unwrap(), Language::Kotlin);
        assert_eq!("Objective-C".parse::<Language>().unwrap(), Language::ObjectiveC);
        assert_eq!("obj-c".parse::<Language>().unwrap(), Language::ObjectiveC);
        assert_eq!("rs".parse::<Language>().unwrap(), Language::Rust);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert!(matches!(err, ModelSyncError::LanguageNotSupported { .. }));
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("product_id"), "product_id");
        assert_eq!(escape_literal(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_literal(r"a\b"), r"a\\b");
        assert_eq!(escape_literal("line\nbreak"), r"line\nbreak");
    }

    #[test]
    fn test_serde_uses_canonical_id() {
        let yaml = serde_yaml::to_string(&Language::ObjectiveC).unwrap();
        assert_eq!(yaml.trim(), "objc");

        let parsed: Language = serde_yaml::from_str("objective-c").unwrap();
        assert_eq!(parsed, Language::ObjectiveC);
    }

    #[test]
    fn test_all_languages_round_trip_through_id() {
        for language in Language::all() {
            assert_eq!(language.id().parse::<Language>().unwrap(), *language);
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Language::Swift.extensions(), vec!["swift"]);
        assert_eq!(Language::ObjectiveC.extensions(), vec!["m", "h"]);
    }

    #[test]
    fn test_unescaped() {
        assert_eq!(unescaped("r#type"), "type");
        assert_eq!(unescaped("`default`"), "default");
        assert_eq!(unescaped("count"), "count");
    }
}
