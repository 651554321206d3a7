use crate::document::FieldBinding;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::execution::ExecutionFault;
use crate::execution::ResolvedVariables;
use crate::execution::ResolverContext;
use crate::execution::ResolverRegistry;
use crate::execution::argument_values::resolve_arguments;
use crate::execution::collected_field::CollectedField;
use crate::response_path::ResponsePath;
use crate::types::TypeAnnotation;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type Result<T> = std::result::Result<T, ExecutionFault>;

/// Resolves one field and completes everything selected beneath it.
///
/// Cheap to clone so each top-level field can run as its own task.
#[derive(Clone)]
pub(crate) struct FieldExecutor {
    pub(crate) cancellation_token: CancellationToken,
    pub(crate) document: Arc<QueryDocument>,
    pub(crate) resolvers: Arc<ResolverRegistry>,
    pub(crate) sequential: bool,
    pub(crate) variables: Arc<ResolvedVariables>,
}
impl FieldExecutor {
    /// Resolves the first selection of `collected` once, then completes the
    /// merged selection sets of all of them against that value.
    pub(crate) fn execute_field<'a>(
        &'a self,
        collected: &'a CollectedField,
        parent_type_name: &'a str,
        source: &'a serde_json::Value,
        path: ResponsePath,
    ) -> BoxFuture<'a, Result<serde_json::Value>> {
        async move {
            let document = self.document.as_ref();
            let exec_field = collected.primary();
            let Some(field) = document.part(exec_field.field).as_field() else {
                return Ok(serde_json::Value::Null);
            };
            let field_def = match field.binding() {
                FieldBinding::Schema(field_def) => field_def,
                FieldBinding::TypeName { concrete_type } =>
                    return Ok(serde_json::Value::String(concrete_type.to_string())),
                FieldBinding::Unbound => return Ok(serde_json::Value::Null),
            };

            let value = match self.resolvers.find(parent_type_name, field.name()) {
                Some(resolver) => {
                    let ctx = ResolverContext {
                        arguments: resolve_arguments(
                            document,
                            exec_field.field,
                            Some(field_def.arguments()),
                            &self.variables,
                        ),
                        cancellation_token: self.cancellation_token.clone(),
                        field_name: field.name().to_string(),
                        parent_type_name: parent_type_name.to_string(),
                        path: path.clone(),
                        source: source.clone(),
                    };
                    resolver.resolve(ctx).await.map_err(|err| ExecutionFault::new(
                        format!("{parent_type_name}.{}", field.name()),
                        path.clone(),
                        err,
                    ))?
                },
                None => source.get(field.name())
                    .cloned()
                    .unwrap_or(serde_json::Value::Null),
            };

            let selection_sets = collected.selection_sets(document);
            if selection_sets.is_empty() {
                return Ok(value);
            }
            self.complete_value(field_def.type_annotation(), &selection_sets, value, path).await
        }.boxed()
    }

    /// Lists complete element-wise; anything else non-null completes as an
    /// object of the field's type.
    fn complete_value<'a>(
        &'a self,
        type_annotation: &'a TypeAnnotation,
        selection_sets: &'a [PartId],
        value: serde_json::Value,
        path: ResponsePath,
    ) -> BoxFuture<'a, Result<serde_json::Value>> {
        async move {
            match (type_annotation.list_item(), value) {
                (_, serde_json::Value::Null) => Ok(serde_json::Value::Null),

                (Some(item_type), serde_json::Value::Array(items)) => {
                    let completions = items.into_iter()
                        .enumerate()
                        .map(|(idx, item)| {
                            self.complete_value(item_type, selection_sets, item, path.index(idx))
                        });
                    let completed = if self.sequential {
                        let mut completed = vec![];
                        for completion in completions {
                            completed.push(completion.await?);
                        }
                        completed
                    } else {
                        futures::future::try_join_all(completions).await?
                    };
                    Ok(serde_json::Value::Array(completed))
                },

                (_, value) => self.complete_object(
                    type_annotation.innermost_name(),
                    selection_sets,
                    value,
                    path,
                ).await,
            }
        }.boxed()
    }

    /// An abstract type is narrowed to the concrete type named by the
    /// value's `__typename`. Without one, only fields selected on the
    /// abstract type itself apply.
    async fn complete_object(
        &self,
        type_name: &str,
        selection_sets: &[PartId],
        source: serde_json::Value,
        path: ResponsePath,
    ) -> Result<serde_json::Value> {
        let schema = self.document.schema();
        let concrete_type = match schema.find_graph_type(type_name) {
            Some(graph_type) if graph_type.is_abstract() => source.get("__typename")
                .and_then(|typename| typename.as_str())
                .map(str::to_string),
            _ => Some(type_name.to_string()),
        };
        let parent_type_name = concrete_type.as_deref().unwrap_or(type_name);

        let fields = selection_sets.iter()
            .flat_map(|selection_set| self.document.executable_fields(*selection_set))
            .filter(|exec_field| match &concrete_type {
                Some(concrete_type) => schema.is_possible_type(&exec_field.target_type, concrete_type),
                None => exec_field.target_type == type_name,
            });
        let collected = CollectedField::collect(&self.document, fields);

        let resolutions = collected.iter().map(|collected_field| {
            let response_key = collected_field.response_key.as_str();
            let field_path = path.child(response_key);
            self.execute_field(collected_field, parent_type_name, &source, field_path)
                .map(move |result| result.map(|value| (response_key, value)))
        });
        let resolved = if self.sequential {
            let mut resolved = vec![];
            for resolution in resolutions {
                resolved.push(resolution.await?);
            }
            resolved
        } else {
            futures::future::try_join_all(resolutions).await?
        };

        let object = resolved.into_iter()
            .map(|(response_key, value)| (response_key.to_string(), value))
            .collect();
        Ok(serde_json::Value::Object(object))
    }
}
