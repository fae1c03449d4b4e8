//! Test fixtures for apigraph.
//!
//! Provides `ModelBuilder` for assembling expanded API graph models in
//! tests, plus helpers for the JSON fixtures under `tests/fixtures`.

#[cfg(test)]
pub mod cli;
pub mod model;

pub use model::{fixture_path, load_fixture, write_model, ModelBuilder, TestError};
