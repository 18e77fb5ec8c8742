//! Value objects for the `Rating` and `MatrixOptions` payloads
//!
//! These are the Rust shape of the two sample models: plain records whose
//! only behavior is exposing typed fields. Construction from a payload never
//! fails on missing keys.

pub mod matrix_options;
pub mod rating;

pub use matrix_options::{
    Autoship, Images, MatrixOptions, OldPrice, Price, PricingDetail, ProductOptions, Tabs,
};
pub use rating::Rating;
