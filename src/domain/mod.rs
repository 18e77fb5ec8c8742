//! Core domain types shared by schema inference and code generation

pub mod line;
pub mod property_type;

pub use line::{CustomProperty, Line, find_custom};
pub use property_type::{PropertyType, TypeConflict};
