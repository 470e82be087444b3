//! protoc plugin that compiles protobuf messages into a PostgreSQL schema
//! and sqlc CRUD queries.
//!
//! Provides:
//! - `plugin`: generated protoc plugin protocol and descriptor definitions
//! - `runtime`: stdin/stdout transport for protoc plugins
//! - `generate`: the request to response pipeline
//!
//! The pipeline runs in stages: [`descriptor`] indexes the request's proto
//! files, [`builder`] turns the requested files into a [`model::Schema`]
//! (using [`types`], [`extensions`] and [`constraints`]) and [`render`]
//! prints it as SQL.

pub mod builder;
pub mod constraints;
pub mod descriptor;
pub mod diagnostic;
pub mod error;
pub mod extensions;
pub mod generate;
pub mod model;
pub mod options;
pub mod plugin;
pub mod render;
pub mod runtime;
pub mod types;
pub mod verify;

#[cfg(test)]
mod testing;

pub mod prelude {
    pub use crate::builder::{BuildOutput, SchemaBuilder};
    pub use crate::descriptor::DescriptorPool;
    pub use crate::diagnostic::{Diagnostic, Outcome};
    pub use crate::error::{Error, Result};
    pub use crate::generate::generate;
    pub use crate::model::*;
    pub use crate::options::Options;
    pub use crate::plugin::*;
    pub use crate::render::{CrudParams, HeaderParams, Renderer};
    pub use crate::runtime::*;
    pub use prost::Message;
}
