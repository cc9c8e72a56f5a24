use crate::helpers::{self, split_path_spans};
use crate::types::RouteParams;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

pub use self::matched::{Match, Parameter};
pub(crate) use self::matched::Capture;
pub(crate) use self::segment::{compile_segments, Segment};
pub(crate) use self::template::Template;

mod matched;
mod segment;
pub(crate) mod template;

/// Represents a single route.
///
/// A route pairs a compiled path pattern with an opaque handler and a symbolic name. Patterns are
/// made of `/`-separated segments, each one of:
///
/// * a literal, matched exactly: `users`
/// * a named parameter matching any single segment: `:userId`
/// * a trailing greedy parameter matching the rest of the path: `*rest`
/// * a regular expression with named groups matched against one whole segment: `(?P<year>\d{4})-(?P<month>\d{2})`
///
/// Every group in a regular expression must be named. Routes are usually created through
/// [`Router::add`](./struct.Router.html#method.add), which also makes them reachable by name.
///
/// # Examples
///
/// ```
/// use nestroute::{Route, RouteParams};
///
/// let route = Route::new("/prefix/(?P<path>[a-z]+)", (), "test").unwrap();
///
/// assert!(route.resolve("/prefix/test").is_some());
/// assert_eq!(route.get_groups("/prefix/test").get("path"), Some("test"));
///
/// let params: RouteParams = vec![("path", "test")].into_iter().collect();
/// assert_eq!(route.reverse(&params).unwrap(), "/prefix/test");
///
/// assert!(Route::new("(.*)", (), "test").is_err());
/// ```
pub struct Route<H> {
    pub(crate) pattern: String,
    pub(crate) segments: Vec<Segment>,
    pub(crate) template: Template,
    params: Vec<String>,
    pub(crate) name: String,
    pub(crate) handler: Arc<H>,
}

impl<H> Route<H> {
    /// Compiles `pattern` into a route. Fails if the pattern is malformed or contains an unnamed capture group.
    pub fn new<P, N>(pattern: P, handler: H, name: N) -> crate::Result<Route<H>>
    where
        P: AsRef<str>,
        N: Into<String>,
    {
        Route::with_shared_handler(pattern.as_ref(), Arc::new(handler), name.into())
    }

    pub(crate) fn with_shared_handler(pattern: &str, handler: Arc<H>, name: String) -> crate::Result<Route<H>> {
        let pattern = helpers::normalize_path(pattern);
        let segments = compile_segments(&pattern)?;
        let template = Template::from_segments(&segments);
        let params = segments
            .iter()
            .flat_map(|s| s.param_names())
            .map(str::to_owned)
            .collect();

        Ok(Route {
            pattern,
            segments,
            template,
            params,
            name,
            handler,
        })
    }

    /// A route which only carries a handler, used as a default below `prefix`.
    pub(crate) fn fallback(prefix: &str, handler: H, name: String) -> Route<H> {
        Route {
            pattern: prefix.to_owned(),
            segments: Vec::new(),
            template: Template::default(),
            params: Vec::new(),
            name,
            handler: Arc::new(handler),
        }
    }

    /// Recompiles this route below `prefix` under its qualified `name`.
    pub(crate) fn mounted(&self, prefix: &str, name: String) -> crate::Result<Route<H>> {
        let pattern = helpers::join_paths(prefix, &self.pattern);
        Route::with_shared_handler(&pattern, Arc::clone(&self.handler), name)
    }

    /// The route name, qualified by the namespaces of the routers it was mounted into.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized pattern, always starting with a single `/`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The parameter names declared by the pattern, in order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Matches the whole `path` against this route alone.
    pub fn resolve(&self, path: &str) -> Option<Match<'_, H>> {
        let spans = split_path_spans(path);
        let mut captures = Vec::new();
        let mut idx = 0;

        for (seg_idx, segment) in self.segments.iter().enumerate() {
            let span = spans.get(idx)?.clone();
            let part = &path[span.clone()];

            match segment {
                Segment::Literal(text) if text == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) => captures.push(Capture { segment: seg_idx, span }),
                Segment::Regex(re) if re.is_match(part) => captures.push(Capture { segment: seg_idx, span }),
                Segment::Regex(_) => return None,
                Segment::Greedy(_) => {
                    captures.push(Capture {
                        segment: seg_idx,
                        span: span.start..path.len(),
                    });
                    return Some(Match::new(self, path, captures));
                }
            }

            idx += 1;
        }

        if idx == spans.len() {
            Some(Match::new(self, path, captures))
        } else {
            None
        }
    }

    /// Returns the parameters captured from `path`, or an empty map if it doesn't match.
    pub fn get_groups(&self, path: &str) -> RouteParams {
        self.resolve(path).map(|m| m.params()).unwrap_or_default()
    }

    /// Builds a path from this route's pattern, taking each parameter's value from `params`.
    pub fn reverse(&self, params: &RouteParams) -> crate::Result<String> {
        self.template.render(params)
    }

    /// Builds a path from this route's pattern, consuming `values` in declaration order.
    pub fn reverse_positional<S: AsRef<str>>(&self, values: &[S]) -> crate::Result<String> {
        self.template.render_positional(values)
    }
}

impl<H> Debug for Route<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ name: {:?}, pattern: {:?}, params: {:?} }}",
            self.name, self.pattern, self.params
        )
    }
}
