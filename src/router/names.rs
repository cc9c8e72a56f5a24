use crate::constants::NAME_SEPARATOR;
use crate::route::Template;
use crate::Error;
use std::collections::HashMap;

/// Qualified route name to reversible template.
#[derive(Debug, Clone, Default)]
pub(crate) struct Names {
    entries: HashMap<String, Template>,
}

impl Names {
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub(crate) fn get(&self, name: &str) -> crate::Result<&Template> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::NameNotFound(name.to_owned()))
    }

    /// Binds `name` to `template`, overwriting a previous binding.
    pub(crate) fn set(&mut self, name: String, template: Template) {
        self.entries.insert(name, template);
    }

    pub(crate) fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Imports every name of `other` as `<namespace>:<name>`, with its template mounted below `prefix`.
    pub(crate) fn merge(&mut self, namespace: &str, prefix: &Template, other: Names) {
        for (name, template) in other.entries {
            self.entries.insert(qualify(namespace, &name), template.prefixed(prefix));
        }
    }
}

/// Qualifies `name` with `namespace`. An empty namespace leaves the name as it is.
pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_owned()
    } else {
        format!("{}{}{}", namespace, NAME_SEPARATOR, name)
    }
}
