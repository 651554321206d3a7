use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use crate::output_utils;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files that together define the schema.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more executable GraphQL documents or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    /// Every file at or under the given paths with a matching extension. A
    /// single file argument is taken as-is, whatever its extension.
    fn collect_file_paths(&self) -> Result<Vec<PathBuf>, walkdir::Error> {
        let graphql_file_exts: HashSet<&str> = self.graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        log::debug!("Scanning {} input paths...", self.file_or_dir_paths.len());
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                if let Some(ext) = path.extension().map(|ext| ext.to_string_lossy())
                    && graphql_file_exts.contains(ext.as_ref()) {
                    log::trace!("Found file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts.",
            );
            file_paths.push(first_arg_path.to_path_buf());
        }
        Ok(file_paths)
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match commands::load_schema(&self.schema) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to load schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let file_paths = match self.collect_file_paths() {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths: {err}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Found {} GraphQL files to be validated.", file_paths.len());

        let mut report = vec![];
        let mut num_invalid_files = 0;
        let mut num_operations = 0;
        for file_path in &file_paths {
            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(err) => {
                    num_invalid_files += 1;
                    report.push(format!("{} {file_path:?}: {err}", output_utils::RED_X));
                    continue;
                },
            };

            let (document, messages) = commands::bind_and_validate(schema.clone(), content.as_str());
            num_operations += document.as_ref().map_or(0, |doc| doc.operations().len());
            if messages.iter().any(|msg| msg.is_critical()) {
                num_invalid_files += 1;
                report.push(format!(
                    "{} {file_path:?}:\n{}",
                    output_utils::RED_X,
                    commands::format_messages(&messages),
                ));
            } else if !messages.is_empty() {
                report.push(format!(
                    "{} {file_path:?}:\n{}",
                    output_utils::YELLOW_WARNING,
                    commands::format_messages(&messages),
                ));
            }
        }

        if num_invalid_files > 0 {
            return CommandResult::stderr(format_args!(
                "{}\n{} {num_invalid_files} of {} files failed validation.",
                report.join("\n"),
                output_utils::RED_X,
                file_paths.len(),
            ));
        }

        let mut summary = report;
        summary.push(format!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_operations,
        ));
        CommandResult::stdout(format_args!("{}", summary.join("\n")))
    }
}
