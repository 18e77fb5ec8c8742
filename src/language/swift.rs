//! Swift `Codable` structs

use super::{LanguageFormatter, escape_literal, unescaped};
use crate::domain::{Line, PropertyType};
use crate::generator::HeaderContext;
use crate::schema::naming::lower_camel;

const RESERVED: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "rethrows", "static", "struct", "subscript", "typealias", "var", "break", "case", "continue",
    "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in", "repeat",
    "return", "switch", "where", "while", "as", "catch", "false", "is", "nil", "super", "self",
    "throw", "throws", "true", "try",
];

/// Formatter for Swift `Codable` structs
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftFormatter;

impl LanguageFormatter for SwiftFormatter {
    fn file_extension(&self) -> &'static str {
        "swift"
    }

    fn property_name(&self, key: &str) -> String {
        let name = lower_camel(key);
        if RESERVED.contains(&name.as_str()) {
            format!("`{name}`")
        } else {
            name
        }
    }

    fn type_name(&self, property_type: &PropertyType) -> String {
        match property_type {
            // Codable has no dynamic value type; null-only fields decode as optional strings
            PropertyType::Unknown | PropertyType::String => "String".to_string(),
            PropertyType::Bool => "Bool".to_string(),
            PropertyType::Int => "Int".to_string(),
            PropertyType::Double => "Double".to_string(),
            PropertyType::Object(name) => name.clone(),
            PropertyType::Array(element) => format!("[{}]", self.type_name(element)),
        }
    }

    fn imports(&self, _model: &str, _lines: &[Line], _context: &HeaderContext) -> Option<String> {
        Some("import Foundation\n".to_string())
    }

    fn model_declaration(&self, model: &str) -> String {
        format!("struct {model}: Codable {{")
    }

    fn variable_string(&self, line: &Line) -> String {
        let optional = if line.is_optional { "?" } else { "" };
        format!(
            "    let {}: {}{optional}",
            line.property,
            self.type_name(&line.property_type)
        )
    }

    fn property(&self, variable_string: &str) -> Option<String> {
        let trimmed = variable_string.trim_start();
        let rest = trimmed
            .strip_prefix("let ")
            .or_else(|| trimmed.strip_prefix("var "))?;
        let (name, _) = rest.split_once(':')?;
        Some(name.trim().to_string())
    }

    fn key_mapping(&self, lines: &[Line]) -> Option<String> {
        if !lines.iter().any(|l| unescaped(&l.property) != l.key) {
            return None;
        }

        let mut sorted: Vec<&Line> = lines.iter().collect();
        sorted.sort_by(|a, b| a.property.cmp(&b.property));

        let mut mapping = vec![String::new(), "    enum CodingKeys: String, CodingKey {".to_string()];
        for line in sorted {
            if unescaped(&line.property) == line.key {
                mapping.push(format!("        case {}", line.property));
            } else {
                mapping.push(format!(
                    "        case {} = \"{}\"",
                    line.property,
                    escape_literal(&line.key)
                ));
            }
        }
        mapping.push("    }".to_string());

        Some(mapping.join("\n"))
    }

    fn model_end(&self, _model: &str) -> String {
        "}".to_string()
    }
}
