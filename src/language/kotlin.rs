//! Kotlin data classes with Gson key annotations

use super::{LanguageFormatter, escape_literal, unescaped};
use crate::domain::{Line, PropertyType};
use crate::generator::HeaderContext;
use crate::schema::naming::lower_camel;

const RESERVED: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

const SERIALIZED_NAME_IMPORT: &str = "import com.google.gson.annotations.SerializedName";

/// Formatter for Kotlin data classes
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinFormatter;

impl LanguageFormatter for KotlinFormatter {
    fn file_extension(&self) -> &'static str {
        "kt"
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
            PropertyType::Unknown => "Any".to_string(),
            PropertyType::Bool => "Boolean".to_string(),
            PropertyType::Int => "Int".to_string(),
            PropertyType::Double => "Double".to_string(),
            PropertyType::String => "String".to_string(),
            PropertyType::Object(name) => name.clone(),
            PropertyType::Array(element) => format!("List<{}>", self.type_name(element)),
        }
    }

    fn imports(&self, _model: &str, lines: &[Line], context: &HeaderContext) -> Option<String> {
        let mut imports = Vec::new();
        if let Some(package) = &context.package {
            imports.push(format!("package {package}\n"));
        }
        if lines.iter().any(|l| unescaped(&l.property) != l.key) {
            imports.push(format!("{SERIALIZED_NAME_IMPORT}\n"));
        }

        if imports.is_empty() {
            None
        } else {
            Some(imports.join("\n"))
        }
    }

    fn model_declaration(&self, model: &str) -> String {
        format!("data class {model}(")
    }

    fn variable_string(&self, line: &Line) -> String {
        let annotation = if unescaped(&line.property) == line.key {
            String::new()
        } else {
            format!(
                "@SerializedName(\"{}\") ",
                escape_literal(&line.key).replace('$', "\\$")
            )
        };
        let type_name = self.type_name(&line.property_type);
        let declared = if line.is_optional {
            format!("{type_name}? = null")
        } else {
            type_name
        };
        format!("    {annotation}val {}: {declared},", line.property)
    }

    fn sort_key(&self, line: &Line) -> String {
        unescaped(&line.property).to_string()
    }

    fn property(&self, variable_string: &str) -> Option<String> {
        let (_, rest) = variable_string
            .split_once("val ")
            .or_else(|| variable_string.split_once("var "))?;
        let (name, _) = rest.split_once(':')?;
        Some(name.trim().to_string())
    }

    fn model_end(&self, _model: &str) -> String {
        ")".to_string()
    }
}
