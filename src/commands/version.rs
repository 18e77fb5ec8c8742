//! Version command implementation

use crate::error::Result;
use crate::language::Language;

/// Run version command
pub fn run() -> Result<()> {
    println!("modelsync {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!(
        "  Languages: {}",
        Language::all()
            .iter()
            .map(|l| l.id())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
