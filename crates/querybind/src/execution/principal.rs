use std::collections::BTreeSet;

/// The authenticated caller a request runs on behalf of.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Principal {
    pub(crate) name: String,
    pub(crate) roles: BTreeSet<String>,
}
impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeSet::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}
