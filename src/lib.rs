//! modelsync - keep client model declarations in sync with backend JSON
//!
//! Sample payloads are walked into per-model schemas ([`schema`]), rendered
//! through a [`language::LanguageFormatter`] and written by the
//! [`generator`]. The [`records`] module holds the `Rating` and
//! `MatrixOptions` value objects as Rust types.

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod language;
pub mod records;
pub mod schema;
pub mod source;
pub mod ui;
