use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use crate::output_utils;
use querybind::document::PartId;
use querybind::document::QueryDocument;
use querybind::plan::QueryPlan;
use querybind::plan::QueryPlanKeyManager;
use querybind::plan::Sha256KeyManager;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct PlanCmd {
    #[arg(
        help="Path to an engine config TOML file. Only its execution limits \
             apply here.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Name of the operation to plan. Required when the document holds \
             several operations.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="Paths to one or more SDL files that together define the schema.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Path to the executable GraphQL document.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PlanCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.plan() {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(err) => CommandResult::stderr(format_args!("{} {err:#}", output_utils::RED_X)),
        }
    }
}
impl PlanCmd {
    fn plan(&self) -> anyhow::Result<String> {
        let schema = commands::load_schema(&self.schema)?;
        let config = commands::load_config(self.config.as_deref())?;
        let content = std::fs::read_to_string(&self.file)?;

        let (document, messages) = commands::bind_and_validate(schema.clone(), content.as_str());
        let Some(document) = document else {
            anyhow::bail!("{:?} could not be parsed:\n{}", self.file, commands::format_messages(&messages));
        };
        let operation = QueryPlan::select_operation(&document, self.operation.as_deref())?;
        let plan = QueryPlan::new(
            Arc::new(document),
            operation,
            messages,
            &config.execution.plan_limits(),
        );
        let cache_key = Sha256KeyManager.create_key(
            schema.identity(),
            content.as_str(),
            self.operation.as_deref(),
        );

        let mut output = String::new();
        writeln!(output, "cache key:   {cache_key}")?;
        writeln!(output, "operation:   {} {}",
            plan.operation_part().kind(),
            plan.operation_part().name().unwrap_or("<anonymous>"),
        )?;
        writeln!(output, "valid:       {}", plan.is_valid())?;
        writeln!(output, "cacheable:   {}", plan.is_cacheable())?;
        writeln!(output, "depth:       {}", plan.max_depth())?;
        writeln!(output, "fields:      {}", plan.field_count())?;
        writeln!(output, "secure:      {}", plan.secure_fields().len())?;
        if !plan.messages().is_empty() {
            writeln!(output, "messages:\n{}", commands::format_messages(plan.messages()))?;
        }
        if let Some(root_set) = plan.root_selection_set() {
            writeln!(output, "executable fields:")?;
            write_field_tree(&mut output, plan.document(), root_set, 1, &mut vec![])?;
        }
        Ok(output.trim_end().to_string())
    }
}

fn write_field_tree(
    output: &mut String,
    document: &QueryDocument,
    selection_set: PartId,
    depth: usize,
    path: &mut Vec<PartId>,
) -> std::fmt::Result {
    if path.contains(&selection_set) {
        return Ok(());
    }
    path.push(selection_set);
    for exec_field in document.executable_fields(selection_set) {
        let Some(field) = document.part(exec_field.field).as_field() else { continue };
        let return_type = field.definition()
            .map(|def| def.type_annotation().to_string())
            .unwrap_or_else(|| "?".to_string());
        writeln!(
            output,
            "{}{}: {return_type} (on {})",
            "  ".repeat(depth),
            field.response_key(),
            exec_field.target_type,
        )?;
        if let Some(child_set) = document.selection_set_of(exec_field.field) {
            write_field_tree(output, document, child_set, depth + 1, path)?;
        }
    }
    path.pop();
    Ok(())
}
