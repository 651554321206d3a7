//! The stages a [`QueryEngine`](crate::pipeline::QueryEngine) chains into
//! its pipeline. In chain order: [`PackageResponseStage`],
//! [`ValidateRequestStage`], [`QueryPlanCacheStage`] (when caching is
//! enabled), [`ParseDocumentStage`], [`ValidateDocumentStage`],
//! [`GeneratePlanStage`], [`SchemaDirectivesStage`],
//! [`ResolveVariablesStage`], [`ExecutionDirectivesStage`],
//! [`AuthorizeFieldsStage`] (when authorization is enabled) and
//! [`ExecuteOperationStage`].

mod authorize_fields;
mod execute_operation;
mod execution_directives;
mod generate_plan;
mod package_response;
mod parse_document;
mod query_plan_cache;
mod resolve_variables;
mod schema_directives;
mod validate_document;
mod validate_request;

pub use authorize_fields::AuthorizeFieldsStage;
pub use execute_operation::ExecuteOperationStage;
pub use execution_directives::ExecutionDirectivesStage;
pub use generate_plan::GeneratePlanStage;
pub use package_response::PackageResponseStage;
pub use parse_document::ParseDocumentStage;
pub use query_plan_cache::QueryPlanCacheStage;
pub use resolve_variables::ResolveVariablesStage;
pub use schema_directives::SchemaDirectivesStage;
pub use validate_document::ValidateDocumentStage;
pub use validate_request::ValidateRequestStage;
