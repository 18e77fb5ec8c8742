//! Schema inference from sample JSON payloads
//!
//! This module handles:
//! - Identifier conversion for payload keys (via naming module)
//! - Per-model property accumulation and optional detection (via data_source module)
//! - Walking payloads into a set of models (via walker module)

pub mod data_source;
pub mod naming;
pub mod walker;

pub use data_source::GeneratorDataSource;
pub use walker::{ModelSet, infer};
