use crate::constants::PATH_SEPARATOR;
use crate::helpers;
use crate::route::{compile_segments, Match, Route, Segment, Template};
use crate::types::RouteParams;
use crate::Error;
use std::borrow::Cow;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

pub use self::builder::RouterBuilder;
use self::defaults::Defaults;
use self::names::{qualify, Names};
use self::tree::Node;

mod builder;
mod defaults;
mod names;
mod tree;

/// Represents a modular, lightweight and mountable router type.
///
/// A router stores routes in a segment trie, keeps a name registry for reverse routing and a
/// table of default routes selected by longest matching prefix. Routers compose: a router can be
/// mounted into another one under a path prefix and a namespace, importing its routes, names
/// and defaults.
///
/// The handler type `H` is opaque to the router; resolving a path hands it back together with
/// the captured parameters.
///
/// Build the router on one thread, then share it: [`resolve`](#method.resolve) and
/// [`reverse`](#method.reverse) only read.
///
/// # Examples
///
/// ```
/// use nestroute::{RouteParams, Router};
///
/// fn v1() -> Router<&'static str> {
///     Router::builder()
///         .add("/:user/:id", "endpoint", "endpoint")
///         .build()
///         .unwrap()
/// }
///
/// let router = Router::builder()
///     .mount("/api/v1", v1(), "api:v1")
///     .fallback("not found", "not_found")
///     .build()
///     .unwrap();
///
/// let matched = router.resolve("/api/v1/42/99").unwrap();
/// assert_eq!(*matched.handler(), "endpoint");
/// assert_eq!(matched.get("user"), Some("42"));
/// assert_eq!(matched.get("id"), Some("99"));
///
/// let params: RouteParams = vec![("user", "42"), ("id", "99")].into_iter().collect();
/// assert_eq!(router.reverse("api:v1:endpoint", &params).unwrap(), "/api/v1/42/99");
///
/// assert!(router.resolve("/unknown").unwrap().is_fallback());
/// ```
pub struct Router<H> {
    tree: Node<H>,
    names: Names,
    defaults: Defaults<H>,
}

impl<H> Router<H> {
    /// Creates an empty router.
    pub fn new() -> Router<H> {
        Router {
            tree: Node::default(),
            names: Names::default(),
            defaults: Defaults::default(),
        }
    }

    /// Return a [RouterBuilder](./struct.RouterBuilder.html) instance to build a `Router`.
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// Registers a route for `pattern` under `name`.
    ///
    /// A route already registered at the same position in the trie is replaced. An empty `name`
    /// registers a route which can be resolved but not reversed.
    ///
    /// Fails if the pattern is malformed, contains an unnamed capture group, or if `name` is
    /// already used by another route.
    pub fn add<P, N>(&mut self, pattern: P, handler: H, name: N) -> crate::Result<()>
    where
        P: AsRef<str>,
        N: Into<String>,
    {
        let route = Route::new(pattern, handler, name)?;
        self.check_name(&route)?;

        tracing::debug!(pattern = %route.pattern, name = %route.name, "Registered route");

        let binding = (!route.name.is_empty()).then(|| (route.name.clone(), route.template.clone()));
        self.insert_route(Arc::new(route));

        if let Some((name, template)) = binding {
            self.names.set(name, template);
        }

        Ok(())
    }

    /// Mounts `router` below `prefix`.
    ///
    /// Every route of `router` is re-registered below `prefix`, every route name `name` becomes
    /// `<namespace>:<name>` (or stays as is if `namespace` is empty), and every default route is
    /// re-keyed below `prefix`. Nothing is imported if any name would collide.
    pub fn mount<P, N>(&mut self, prefix: P, router: Router<H>, namespace: N) -> crate::Result<()>
    where
        P: AsRef<str>,
        N: AsRef<str>,
    {
        let prefix = helpers::normalize_path(prefix.as_ref());
        let namespace = namespace.as_ref();

        let prefix_segments = compile_segments(&prefix)?;
        if let Some(Segment::Greedy(_)) = prefix_segments.last() {
            return Err(Error::GreedyNotLast { pattern: prefix });
        }
        let prefix_template = Template::from_segments(&prefix_segments);

        let Router { tree, names, defaults } = router;

        let routes = tree
            .routes()
            .into_iter()
            .map(|route| {
                let name = if route.name.is_empty() {
                    String::new()
                } else {
                    qualify(namespace, &route.name)
                };
                route.mounted(&prefix, name)
            })
            .collect::<crate::Result<Vec<_>>>()?;

        for route in routes.iter() {
            self.check_name(route)?;
        }

        tracing::debug!(
            prefix = %prefix,
            namespace = %namespace,
            routes = routes.len(),
            defaults = defaults.len(),
            "Mounted router"
        );

        for route in routes {
            self.insert_route(Arc::new(route));
        }
        self.names.merge(namespace, &prefix_template, names);

        let defaults_prefix = if prefix == "/" { "" } else { prefix.as_str() };
        self.defaults.merge(defaults_prefix, defaults);

        Ok(())
    }

    /// Sets the default route of this router, used when no route matches a path.
    pub fn fallback<N: Into<String>>(&mut self, handler: H, name: N) {
        self.fallback_at("/", handler, name)
    }

    /// Sets a default route used when no route matches a path starting with `prefix`.
    ///
    /// Prefixes are compared as plain strings; the longest registered prefix of a path wins.
    pub fn fallback_at<P, N>(&mut self, prefix: P, handler: H, name: N)
    where
        P: AsRef<str>,
        N: Into<String>,
    {
        let prefix = helpers::normalize_path(prefix.as_ref());
        let key = if prefix == "/" { String::new() } else { prefix.clone() };

        tracing::debug!(prefix = %prefix, "Registered default route");

        self.defaults
            .add(key, Arc::new(Route::fallback(&prefix, handler, name.into())));
    }

    /// Resolves `path` to a route and the parameters captured from it.
    ///
    /// If no route matches, the default route of the longest matching prefix is returned, if any.
    /// `None` means that nothing matched, which is not an error.
    pub fn resolve(&self, path: &str) -> Option<Match<'_, H>> {
        if let Some((route, captures)) = self.tree.resolve(path) {
            tracing::trace!(path, route = %route.name, "Resolved route");
            return Some(Match::new(route, path, captures));
        }

        let lookup: Cow<'_, str> = if path.starts_with(PATH_SEPARATOR) {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("{}{}", PATH_SEPARATOR, path))
        };

        match self.defaults.get(&lookup) {
            Some(route) => {
                tracing::trace!(path, prefix = %route.pattern, "Resolved default route");
                Some(Match::fallback(route, path))
            }
            None => {
                tracing::trace!(path, "No route matched");
                None
            }
        }
    }

    /// Builds the path of the route named `name`, taking each parameter's value from `params`.
    ///
    /// `name` may be qualified by the namespaces the route was mounted under, e.g. `"api:v1:endpoint"`.
    pub fn reverse(&self, name: &str, params: &RouteParams) -> crate::Result<String> {
        self.names.get(name)?.render(params)
    }

    /// Builds the path of the route named `name`, consuming `values` in the order the parameters
    /// were declared. A greedy parameter consumes one value and ends the path.
    pub fn reverse_positional<S: AsRef<str>>(&self, name: &str, values: &[S]) -> crate::Result<String> {
        self.names.get(name)?.render_positional(values)
    }

    /// Returns an [`Iterator`](https://doc.rust-lang.org/std/iter/trait.Iterator.html) over the qualified names this router can reverse.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter()
    }

    /// Returns every route registered in this router, mounted ones included.
    pub fn routes(&self) -> Vec<&Route<H>> {
        self.tree.routes().into_iter().map(|route| &**route).collect()
    }

    fn check_name(&self, route: &Route<H>) -> crate::Result<()> {
        if route.name.is_empty() || !self.names.contains(&route.name) {
            return Ok(());
        }

        // Re-registering the same name at the same position replaces the route.
        match self.tree.find(&route.segments) {
            Some(existing) if existing.name == route.name => Ok(()),
            _ => Err(Error::DuplicateName(route.name.clone())),
        }
    }

    fn insert_route(&mut self, route: Arc<Route<H>>) {
        let name = route.name.clone();
        let pattern = route.pattern.clone();

        if let Some(replaced) = self.tree.insert(route) {
            tracing::debug!(pattern = %pattern, replaced = %replaced.pattern, "Replaced route");

            if !replaced.name.is_empty() && replaced.name != name {
                self.names.remove(&replaced.name);
            }
        }
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Router::new()
    }
}

impl<H> Debug for Router<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ routes: {:?}, defaults: {} }}",
            self.routes(),
            self.defaults.len()
        )
    }
}
