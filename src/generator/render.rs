//! Assembles a generated file from a formatter's pieces

use std::collections::HashSet;

use tracing::warn;

use super::HeaderContext;
use crate::domain::{CustomProperty, Line, find_custom};
use crate::language::LanguageFormatter;

/// Render one model file.
///
/// Layout: header, imports, declaration, property lines sorted by the
/// formatter's sort key (custom lines in place of generated ones), key
/// mapping, end line. Parts are joined with `\n`.
pub fn render_file(
    formatter: &dyn LanguageFormatter,
    model: &str,
    lines: &[Line],
    custom: &[CustomProperty],
    context: &HeaderContext,
) -> String {
    let lines = unique_properties(model, lines);

    let mut body: Vec<(String, String)> = lines
        .iter()
        .map(|line| {
            let text = match find_custom(custom, &line.property) {
                Some(c) => formatter.wrap_custom(line, &c.custom_line),
                None => formatter.variable_string(line),
            };
            (formatter.sort_key(line), text)
        })
        .collect();
    body.sort();

    let mut parts = vec![context.file_header(&formatter.file_name(model), formatter.line_comment())];
    if let Some(imports) = formatter.imports(model, &lines, context) {
        parts.push(imports);
    }
    parts.push(formatter.model_declaration(model));
    parts.extend(body.into_iter().map(|(_, text)| text));
    if let Some(mapping) = formatter.key_mapping(&lines) {
        parts.push(mapping);
    }
    parts.push(formatter.model_end(model));

    parts.join("\n")
}

/// Drop lines whose property name is already taken (two keys mapping to one identifier)
fn unique_properties(model: &str, lines: &[Line]) -> Vec<Line> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|line| {
            let first = seen.insert(line.property.clone());
            if !first {
                warn!(
                    model,
                    key = %line.key,
                    property = %line.property,
                    "property name already used by another key, skipping"
                );
            }
            first
        })
        .cloned()
        .collect()
}
