//! Binds GraphQL executable documents against a schema, caches the
//! resulting query plans, and executes them through a staged pipeline.
//!
//! The usual entry point is [`pipeline::QueryEngine`]; the lower-level
//! pieces (binding, validation, plans, field scheduling) are usable on their
//! own.

pub mod ast;
pub mod binding;
pub mod config;
pub mod document;
pub mod error_codes;
pub mod execution;
pub mod loc;
pub mod messages;
pub mod pipeline;
pub mod plan;
pub mod response_path;
pub mod schema;
pub mod types;
pub mod validation;
