use crate::router::Router;

/// Builder for the [Router](./struct.Router.html) type.
///
/// Registration errors are kept until [`build`](#method.build) is called: once a step fails, the
/// remaining steps are skipped and `build` returns the first error.
///
/// # Examples
///
/// ```
/// use nestroute::{Router, RouterBuilder};
///
/// let router: Router<u32> = RouterBuilder::new()
///     .add("/", 0, "home")
///     .add("/users/:userId", 1, "user")
///     .add("/files/*path", 2, "files")
///     .fallback(404, "not_found")
///     .build()
///     .unwrap();
///
/// assert_eq!(*router.resolve("/users/7").unwrap().handler(), 1);
///
/// let failed = RouterBuilder::new().add("/(.*)", 0, "bad").add("/", 1, "home").build();
/// assert!(failed.is_err());
/// ```
#[derive(Debug)]
pub struct RouterBuilder<H> {
    inner: crate::Result<Router<H>>,
}

impl<H> RouterBuilder<H> {
    /// Creates a new `RouterBuilder` instance with default options.
    pub fn new() -> RouterBuilder<H> {
        RouterBuilder::default()
    }

    /// Creates a new [Router](./struct.Router.html) instance from the added configuration.
    pub fn build(self) -> crate::Result<Router<H>> {
        self.inner
    }

    /// Adds a route. See [`Router::add`](./struct.Router.html#method.add).
    pub fn add<P, N>(self, pattern: P, handler: H, name: N) -> Self
    where
        P: AsRef<str>,
        N: Into<String>,
    {
        self.and_then(move |mut router| {
            router.add(pattern, handler, name)?;
            Ok(router)
        })
    }

    /// Mounts another router. See [`Router::mount`](./struct.Router.html#method.mount).
    pub fn mount<P, N>(self, prefix: P, router: Router<H>, namespace: N) -> Self
    where
        P: AsRef<str>,
        N: AsRef<str>,
    {
        self.and_then(move |mut parent| {
            parent.mount(prefix, router, namespace)?;
            Ok(parent)
        })
    }

    /// Sets the default route. See [`Router::fallback`](./struct.Router.html#method.fallback).
    pub fn fallback<N: Into<String>>(self, handler: H, name: N) -> Self {
        self.and_then(move |mut router| {
            router.fallback(handler, name);
            Ok(router)
        })
    }

    /// Sets a default route below `prefix`. See [`Router::fallback_at`](./struct.Router.html#method.fallback_at).
    pub fn fallback_at<P, N>(self, prefix: P, handler: H, name: N) -> Self
    where
        P: AsRef<str>,
        N: Into<String>,
    {
        self.and_then(move |mut router| {
            router.fallback_at(prefix, handler, name);
            Ok(router)
        })
    }

    fn and_then<F>(self, func: F) -> Self
    where
        F: FnOnce(Router<H>) -> crate::Result<Router<H>>,
    {
        RouterBuilder {
            inner: self.inner.and_then(func),
        }
    }
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> RouterBuilder<H> {
        RouterBuilder {
            inner: Ok(Router::new()),
        }
    }
}
