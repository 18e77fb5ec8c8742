//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::is_model_name;
use crate::language::Language;

/// modelsync - keep client models in sync with backend JSON
///
/// Infer model declarations from sample payloads and regenerate them in Swift,
/// Kotlin, Objective-C or Rust.
#[derive(Parser, Debug)]
#[command(
    name = "modelsync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate client model declarations from sample JSON payloads",
    long_about = "modelsync infers a schema from sample JSON payloads and keeps value-object \
                  declarations (Swift, Kotlin, Objective-C, Rust) in sync with it. Hand-edited \
                  lines tagged with `// modelsync:custom` survive regeneration.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  modelsync generate\n    \
                  modelsync generate --language kotlin --output app/models\n    \
                  modelsync check\n    \
                  modelsync infer samples/rating.json --name Rating\n    \
                  modelsync languages"
)]
pub struct Cli {
    /// Configuration file (defaults to ./modelsync.yaml)
    #[arg(long, short = 'c', global = true, env = "MODELSYNC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate model files from the configured payloads
    Generate(GenerateArgs),

    /// Fail if generated models are out of date
    Check,

    /// Print models inferred from payload files, without a configuration
    Infer(InferArgs),

    /// List supported target languages
    Languages,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate using modelsync.yaml:\n    modelsync generate\n\n\
                  Preview without writing:\n    modelsync generate --dry-run\n\n\
                  Override the language and output directory:\n    modelsync generate -l rust -o src/models\n\n\
                  Remove generated files for models that no longer exist:\n    modelsync generate --prune")]
pub struct GenerateArgs {
    /// Output directory (overrides output_directory from the configuration)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Target language (overrides language from the configuration)
    #[arg(long, short = 'l', value_name = "LANGUAGE")]
    pub language: Option<Language>,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Delete generated files whose model no longer exists
    #[arg(long)]
    pub prune: bool,
}

/// Arguments for the infer command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Infer a Swift model:\n    modelsync infer rating.json --name Rating\n\n\
                  Merge several payloads into one model:\n    modelsync infer samples/*.json -n MatrixOptions -l kotlin")]
pub struct InferArgs {
    /// Payload files (JSON object or array of objects)
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Name of the root model
    #[arg(long, short = 'n', value_parser = parse_model_name)]
    pub name: String,

    /// Target language
    #[arg(long, short = 'l', default_value = "swift", value_name = "LANGUAGE")]
    pub language: Language,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    modelsync completions --shell bash > ~/.bash_completion.d/modelsync\n\n\
                  Generate zsh completions:\n    modelsync completions --shell zsh > ~/.zfunc/_modelsync\n\n\
                  Generate fish completions:\n    modelsync completions --shell fish > ~/.config/fish/completions/modelsync.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

fn parse_model_name(name: &str) -> Result<String, String> {
    if is_model_name(name) {
        Ok(name.to_string())
    } else {
        Err("must start with a letter and contain only letters, digits or '_'".to_string())
    }
}
