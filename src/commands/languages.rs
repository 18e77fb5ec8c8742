//! Languages command implementation

use console::Style;

use crate::error::Result;
use crate::language::Language;

/// List supported languages with their identifiers and file extensions
pub fn run() -> Result<()> {
    for language in Language::all() {
        let extensions: Vec<String> = language
            .extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect();
        println!(
            "  {:<8} {:<12} {}",
            Style::new().cyan().bold().apply_to(language.id()),
            language.name(),
            Style::new().dim().apply_to(extensions.join(" "))
        );
    }
    Ok(())
}
