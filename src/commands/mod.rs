//! Command implementations for the modelsync CLI

pub mod check;
pub mod completions;
pub mod generate;
mod helpers;
pub mod infer;
pub mod languages;
pub mod version;
