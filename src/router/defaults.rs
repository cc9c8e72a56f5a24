use crate::route::Route;
use std::sync::Arc;

/// Prefix to fallback route table.
///
/// Entries are kept sorted by descending prefix length, so the first prefix that matches a path
/// is the longest one.
pub(crate) struct Defaults<H> {
    entries: Vec<(String, Arc<Route<H>>)>,
}

impl<H> Default for Defaults<H> {
    fn default() -> Self {
        Defaults { entries: Vec::new() }
    }
}

impl<H> Defaults<H> {
    /// Registers `route` for `prefix`, replacing any route already registered for it.
    pub(crate) fn add(&mut self, prefix: String, route: Arc<Route<H>>) {
        self.put(prefix, route);
        self.sort();
    }

    /// Returns the route of the longest registered prefix of `path`.
    pub(crate) fn get(&self, path: &str) -> Option<&Arc<Route<H>>> {
        self.entries
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, route)| route)
    }

    /// Imports every entry of `other`, each re-keyed below `prefix`.
    pub(crate) fn merge(&mut self, prefix: &str, other: Defaults<H>) {
        for (other_prefix, route) in other.entries {
            self.put(format!("{}{}", prefix, other_prefix), route);
        }
        self.sort();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn put(&mut self, prefix: String, route: Arc<Route<H>>) {
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = route,
            None => self.entries.push((prefix, route)),
        }
    }

    // Stable, so prefixes of equal length keep their registration order.
    fn sort(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
    }
}
