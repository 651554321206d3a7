use crate::ast;

/// An `@authorize` annotation found on a type or field definition.
///
/// A requirement with neither a policy nor roles only demands an
/// authenticated principal.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SecurityRequirement {
    pub policy: Option<String>,
    pub roles: Vec<String>,
}
impl SecurityRequirement {
    pub const DIRECTIVE_NAME: &'static str = "authorize";

    pub(crate) fn from_ast_directives(
        directives: &[ast::schema::Directive],
    ) -> Vec<Self> {
        directives.iter()
            .filter(|directive| directive.name == Self::DIRECTIVE_NAME)
            .map(|directive| {
                let mut requirement = SecurityRequirement::default();
                for (arg_name, arg_value) in &directive.arguments {
                    match (arg_name.as_str(), arg_value) {
                        ("policy", ast::schema::Value::String(policy)) =>
                            requirement.policy = Some(policy.to_string()),
                        ("roles", ast::schema::Value::List(roles)) =>
                            requirement.roles = roles.iter()
                                .filter_map(|role| match role {
                                    ast::schema::Value::String(role) => Some(role.to_string()),
                                    _ => None,
                                })
                                .collect(),
                        ("roles", ast::schema::Value::String(role)) =>
                            requirement.roles = vec![role.to_string()],
                        _ => (),
                    }
                }
                requirement
            })
            .collect()
    }
}
