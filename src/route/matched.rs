use crate::route::segment::Segment;
use crate::route::Route;
use crate::types::RouteParams;
use std::fmt::{self, Debug, Formatter};
use std::ops::Range;
use std::sync::OnceLock;

/// A named value captured from a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// The span of one path segment consumed by a capturing route segment.
#[derive(Debug, Clone)]
pub(crate) struct Capture {
    pub(crate) segment: usize,
    pub(crate) span: Range<usize>,
}

/// The result of resolving a path: the matched route and the values captured from the path.
///
/// Parameters are parsed from the raw captures on first access and cached, so reading them
/// repeatedly (or from several threads at once) parses only once.
///
/// # Examples
///
/// ```
/// use nestroute::Router;
///
/// let mut router = Router::new();
/// router.add("/users/:userId/books/:bookName", "book", "book").unwrap();
///
/// let matched = router.resolve("/users/alice/books/HarryPotter").unwrap();
///
/// assert_eq!(*matched.handler(), "book");
/// assert_eq!(matched.get("userId"), Some("alice"));
/// assert_eq!(matched.values(), vec!["alice", "HarryPotter"]);
/// ```
pub struct Match<'r, H> {
    route: &'r Route<H>,
    path: String,
    captures: Vec<Capture>,
    fallback: bool,
    parameters: OnceLock<Vec<Parameter>>,
}

impl<'r, H> Match<'r, H> {
    pub(crate) fn new(route: &'r Route<H>, path: &str, captures: Vec<Capture>) -> Match<'r, H> {
        Match {
            route,
            path: path.to_owned(),
            captures,
            fallback: false,
            parameters: OnceLock::new(),
        }
    }

    pub(crate) fn fallback(route: &'r Route<H>, path: &str) -> Match<'r, H> {
        Match {
            fallback: true,
            ..Match::new(route, path, Vec::new())
        }
    }

    /// The matched route.
    pub fn route(&self) -> &'r Route<H> {
        self.route
    }

    /// The handler of the matched route.
    pub fn handler(&self) -> &'r H {
        self.route.handler()
    }

    /// The path this match was resolved from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns `true` if no concrete route matched and a default route was selected by prefix.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The captured parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.get_or_init(|| self.parse())
    }

    /// Returns the value captured for `name`.
    pub fn get<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        let name = name.as_ref();
        self.parameters()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// The captured values in declaration order.
    pub fn values(&self) -> Vec<&str> {
        self.parameters().iter().map(|p| p.value.as_str()).collect()
    }

    /// The captured parameters as a map.
    pub fn params(&self) -> RouteParams {
        self.parameters()
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }

    fn parse(&self) -> Vec<Parameter> {
        let mut parameters = Vec::with_capacity(self.route.params().len());

        for capture in self.captures.iter() {
            let value = &self.path[capture.span.clone()];

            match &self.route.segments[capture.segment] {
                Segment::Param(name) | Segment::Greedy(name) => parameters.push(Parameter {
                    name: name.clone(),
                    value: value.to_owned(),
                }),
                Segment::Regex(re) => {
                    if let Some(caps) = re.regex.captures(value) {
                        for name in re.names.iter() {
                            parameters.push(Parameter {
                                name: name.clone(),
                                value: caps.name(name).map(|m| m.as_str()).unwrap_or_default().to_owned(),
                            });
                        }
                    }
                }
                Segment::Literal(_) => {}
            }
        }

        parameters
    }
}

impl<'r, H> Debug for Match<'r, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ route: {:?}, path: {:?}, fallback: {:?} }}",
            self.route.name(),
            self.path,
            self.fallback
        )
    }
}
