/// Prefix of a single-segment parameter, e.g. `:id`.
pub(crate) const PARAMETER_RUNE: char = ':';

/// Prefix of a trailing greedy parameter, e.g. `*rest`.
pub(crate) const GREEDY_PARAMETER_RUNE: char = '*';

pub(crate) const PATH_SEPARATOR: char = '/';

/// Separates namespaces in a qualified route name, e.g. `api:v1:endpoint`.
pub(crate) const NAME_SEPARATOR: char = ':';
