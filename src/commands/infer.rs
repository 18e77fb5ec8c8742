//! Infer command implementation

use console::Style;

use crate::cli::InferArgs;
use crate::error::Result;
use crate::generator::{HeaderContext, ModelGenerator};
use crate::source;

/// Run infer command: print the models for ad-hoc payload files
pub fn run(args: InferArgs) -> Result<()> {
    let models = source::collect_files(&args.name, &args.files)?;
    let project = std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "modelsync".to_string());

    let generator = ModelGenerator::new(args.language, HeaderContext::new(project), ".");
    let rendered = generator.render(&models);

    if let [(_, contents)] = rendered.as_slice() {
        println!("{contents}");
        return Ok(());
    }

    for (idx, (file_name, contents)) in rendered.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}", Style::new().bold().apply_to(format!("==> {file_name} <==")));
        println!("{contents}");
    }
    Ok(())
}
