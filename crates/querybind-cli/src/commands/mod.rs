mod execute;
mod plan;
mod validate;

use crate::Cli;
use crate::CommandResult;
use execute::ExecuteCmd;
use plan::PlanCmd;
use querybind::binding::DocumentBuilder;
use querybind::config::EngineConfig;
use querybind::document::QueryDocument;
use querybind::messages::GraphMessage;
use querybind::schema::SchemaBuilder;
use querybind::schema::SchemaLookup;
use querybind::validation::DocumentValidator;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "querybind")]
pub(crate) enum CommandEnum {
    /// Run an operation through the full execution pipeline.
    Execute(Box<ExecuteCmd>),

    /// Show the query plan generated for an operation.
    Plan(Box<PlanCmd>),

    /// Bind and validate executable documents against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Execute(cmd) => cmd.run(cli).await,
            Self::Plan(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

pub(crate) fn load_schema(schema_paths: &[PathBuf]) -> anyhow::Result<Arc<dyn SchemaLookup>> {
    log::debug!("Loading schema from {} files...", schema_paths.len());
    let schema = SchemaBuilder::new()
        .load_files(schema_paths.to_vec())?
        .build()?;
    Ok(Arc::new(schema))
}

pub(crate) fn load_config(config_path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match config_path {
        Some(config_path) => Ok(EngineConfig::from_file(config_path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Bind `content` and validate the result, returning the document (unless
/// it could not even be parsed) and every diagnostic found.
pub(crate) fn bind_and_validate(
    schema: Arc<dyn SchemaLookup>,
    content: &str,
) -> (Option<QueryDocument>, Vec<GraphMessage>) {
    match DocumentBuilder::from_str(schema, content) {
        Ok(builder) => {
            let document = builder.build();
            let mut messages = document.messages();
            messages.extend(
                DocumentValidator::new(&document)
                    .validate()
                    .iter()
                    .map(GraphMessage::from),
            );
            (Some(document), messages)
        },
        Err(err) => (None, vec![GraphMessage::from(&err)]),
    }
}

pub(crate) fn format_messages(messages: &[GraphMessage]) -> String {
    messages.iter()
        .map(|msg| format!("  * {:?}: {msg}", msg.severity()))
        .collect::<Vec<_>>()
        .join("\n")
}
