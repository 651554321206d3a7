use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use crate::output_utils;
use querybind::execution::Principal;
use querybind::pipeline::QueryEngineBuilder;
use querybind::pipeline::QueryRequest;
use querybind::pipeline::TracingObserver;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Fields resolve by property lookup on `--root-value`, so this runs an
/// operation against a fixed JSON document.
#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        help="Path to an engine config TOML file.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Name of the operation to execute. Required when the document \
             holds several operations.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="Name of the principal to authorize secure fields for.",
        long,
    )]
    principal: Option<String>,

    #[arg(
        help="Roles held by --principal.",
        long,
        requires="principal",
        value_delimiter = ',',
    )]
    roles: Vec<String>,

    #[arg(
        help="JSON object that top-level fields resolve against.",
        long,
    )]
    root_value: Option<String>,

    #[arg(
        help="Paths to one or more SDL files that together define the schema.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="JSON object of variable values.",
        long,
    )]
    variables: Option<String>,

    #[arg(
        help="Path to the executable GraphQL document.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.execute().await {
            Ok(result) => result,
            Err(err) => CommandResult::stderr(format_args!("{} {err:#}", output_utils::RED_X)),
        }
    }
}
impl ExecuteCmd {
    async fn execute(&self) -> anyhow::Result<CommandResult> {
        let schema = commands::load_schema(&self.schema)?;
        let config = commands::load_config(self.config.as_deref())?;
        let query_text = std::fs::read_to_string(&self.file)?;

        let mut request = QueryRequest::new(query_text);
        if let Some(operation) = &self.operation {
            request = request.with_operation_name(operation.as_str());
        }
        if let Some(variables) = &self.variables {
            request = request.with_variables(serde_json::from_str(variables)?);
        }
        if let Some(root_value) = &self.root_value {
            request = request.with_root_value(serde_json::from_str(root_value)?);
        }
        if let Some(name) = &self.principal {
            let principal = self.roles.iter()
                .fold(Principal::new(name.as_str()), |principal, role| principal.with_role(role.as_str()));
            request = request.with_principal(principal);
        }

        let engine = QueryEngineBuilder::new(schema)
            .with_config(config)
            .with_observer(Arc::new(TracingObserver))
            .build();
        let mut ctx = engine.new_context(request);
        let run_result = engine.run(&mut ctx).await;
        let response = ctx.take_response().unwrap_or_default();
        let output = serde_json::to_string_pretty(&response)?;

        if let Err(err) = run_result {
            for fault in err.faults() {
                log::error!("{fault}");
            }
            return Ok(CommandResult::stdout(format_args!("{output}")).with_exit_code(ExitCode::FAILURE));
        }
        let exit_code = if response.has_critical_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
        Ok(CommandResult::stdout(format_args!("{output}")).with_exit_code(exit_code))
    }
}
