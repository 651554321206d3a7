use crate::document::ExecutableField;
use crate::document::PartId;
use crate::document::QueryDocument;
use indexmap::IndexMap;

/// Every selection of one response key within an object, in selection
/// order.
///
/// The first field is resolved once; the selection sets of all of them are
/// completed against that single value.
#[derive(Clone, Debug)]
pub(crate) struct CollectedField {
    pub(crate) fields: Vec<ExecutableField>,
    pub(crate) response_key: String,
}
impl CollectedField {
    pub(crate) fn collect<'a>(
        document: &QueryDocument,
        exec_fields: impl IntoIterator<Item = &'a ExecutableField>,
    ) -> Vec<Self> {
        let mut grouped: IndexMap<String, Vec<ExecutableField>> = IndexMap::new();
        for exec_field in exec_fields {
            let response_key = document.part(exec_field.field)
                .as_field()
                .map(|field| field.response_key())
                .unwrap_or_default();
            grouped.entry(response_key.to_string())
                .or_default()
                .push(exec_field.clone());
        }
        grouped.into_iter()
            .map(|(response_key, fields)| Self { fields, response_key })
            .collect()
    }

    pub(crate) fn primary(&self) -> &ExecutableField {
        &self.fields[0]
    }

    pub(crate) fn selection_sets(&self, document: &QueryDocument) -> Vec<PartId> {
        self.fields.iter()
            .filter_map(|exec_field| document.selection_set_of(exec_field.field))
            .collect()
    }
}
