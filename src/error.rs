use thiserror::Error;

/// The error type returned while building routers and reversing route names.
///
/// Building errors (`UnnamedCapture`, `InvalidPattern`, ...) are programmer errors: the router
/// refuses to register the offending route. `NameNotFound`, `NotReversible` and `MissingParameter` are ordinary
/// outcomes of [`Router::reverse`](./struct.Router.html#method.reverse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern contains a positional `(...)` capture group.
    #[error("All groups in pattern should be named: {pattern}")]
    UnnamedCapture { pattern: String },

    /// The pattern is not a valid regular expression.
    #[error("Could not compile the route pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A greedy `*name` segment is followed by more segments.
    #[error("The greedy parameter must be the last segment of the pattern: {pattern}")]
    GreedyNotLast { pattern: String },

    /// A `:` or `*` token without a usable name.
    #[error("Invalid parameter name {name:?} in pattern: {pattern}")]
    InvalidParameterName { pattern: String, name: String },

    /// The same parameter name is captured twice by one pattern.
    #[error("Parameter {name:?} is declared more than once in pattern: {pattern}")]
    DuplicateParameter { pattern: String, name: String },

    /// A route name is already registered in the router.
    #[error("Route name {0:?} is already registered")]
    DuplicateName(String),

    /// No route is registered under the qualified name.
    #[error("Name not found: {0}")]
    NameNotFound(String),

    /// The route contains a regex construct outside its named groups, so no single path renders it.
    #[error("Can't reverse the regex segment part {segment:?}")]
    NotReversible { segment: String },

    /// Reversal needs a value for this parameter but none was supplied.
    #[error("Have no value for '{name}' parameter")]
    MissingParameter { name: String },
}

/// The error type used by the HTTP route handlers.
pub type RouteError = Box<dyn std::error::Error + Send + Sync + 'static>;
