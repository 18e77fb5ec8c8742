//! Rust structs deriving serde

use super::{LanguageFormatter, escape_literal, unescaped};
use crate::domain::{Line, PropertyType};
use crate::generator::HeaderContext;
use crate::schema::naming::snake_case;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Formatter for Rust serde structs
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFormatter;

impl LanguageFormatter for RustFormatter {
    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn file_name(&self, model: &str) -> String {
        format!("{}.rs", snake_case(model))
    }

    fn property_name(&self, key: &str) -> String {
        let name = snake_case(key);
        if NON_RAW_KEYWORDS.contains(&name.as_str()) {
            format!("{name}_")
        } else if KEYWORDS.contains(&name.as_str()) {
            format!("r#{name}")
        } else {
            name
        }
    }

    fn type_name(&self, property_type: &PropertyType) -> String {
        match property_type {
            PropertyType::Unknown => "serde_json::Value".to_string(),
            PropertyType::Bool => "bool".to_string(),
            PropertyType::Int => "i64".to_string(),
            PropertyType::Double => "f64".to_string(),
            PropertyType::String => "String".to_string(),
            PropertyType::Object(name) => name.clone(),
            PropertyType::Array(element) => format!("Vec<{}>", self.type_name(element)),
        }
    }

    fn imports(&self, model: &str, lines: &[Line], _context: &HeaderContext) -> Option<String> {
        let mut nested: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.property_type.model_name())
            .filter(|name| *name != model)
            .collect();
        nested.sort_unstable();
        nested.dedup();

        let mut imports = vec!["use serde::{Deserialize, Serialize};".to_string()];
        if !nested.is_empty() {
            imports.push(String::new());
            imports.extend(
                nested
                    .into_iter()
                    .map(|name| format!("use super::{}::{name};", snake_case(name))),
            );
        }
        Some(format!("{}\n", imports.join("\n")))
    }

    fn model_declaration(&self, model: &str) -> String {
        format!("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\npub struct {model} {{")
    }

    fn variable_string(&self, line: &Line) -> String {
        let type_name = self.type_name(&line.property_type);
        let field = if line.is_optional {
            format!("    pub {}: Option<{type_name}>,", line.property)
        } else {
            format!("    pub {}: {type_name},", line.property)
        };
        with_serde_attribute(line, field)
    }

    /// A custom field line keeps the generated `#[serde(..)]` line above it
    fn wrap_custom(&self, line: &Line, custom_line: &str) -> String {
        with_serde_attribute(line, custom_line.to_string())
    }

    fn sort_key(&self, line: &Line) -> String {
        unescaped(&line.property).to_string()
    }

    fn property(&self, variable_string: &str) -> Option<String> {
        let rest = variable_string.trim_start().strip_prefix("pub ")?;
        let (name, _) = rest.split_once(':')?;
        Some(name.trim().to_string())
    }

    fn model_end(&self, _model: &str) -> String {
        "}".to_string()
    }
}

fn with_serde_attribute(line: &Line, field: String) -> String {
    // serde strips the raw prefix but not the `_` suffix of `self_`
    let serialized_name = line.property.trim_start_matches("r#");
    let mut attributes = Vec::new();
    if serialized_name != line.key {
        attributes.push(format!("rename = \"{}\"", escape_literal(&line.key)));
    }
    if line.is_optional {
        attributes.push("default".to_string());
    }

    if attributes.is_empty() {
        field
    } else {
        format!("    #[serde({})]\n{field}", attributes.join(", "))
    }
}
