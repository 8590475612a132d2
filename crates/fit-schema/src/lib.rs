//! # fit-schema
//!
//! Schema registries for FitTrack.
//!
//! This crate provides:
//! - `SchemaRegistry`: the static per-kind table of required (and optional)
//!   property keys with their expected value tags, checked for internal
//!   consistency when built, plus the batch validator that reports every
//!   missing key and type mismatch of a line at once
//! - `RecordSchemas`: JSON Schemas generated from the `fit-core` record types
//!   with schemars and compiled once, printed by `fittrack schema --json` and
//!   used to check the summaries the CLI emits
//!
//! ## Architecture
//!
//! Record types are defined in `fit-core` with `#[derive(JsonSchema)]`.
//! `fit-parser` consults `SchemaRegistry` between descriptor assembly and
//! record construction.

mod error;
pub mod json;
pub mod registry;

pub use error::{RegistryError, SchemaError};
pub use json::RecordSchemas;
pub use registry::{KindSchema, PropertySpec, SchemaRegistry};
