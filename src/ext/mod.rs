//! Extension traits for the HTTP adapter.

use crate::types::RouteParams;
use hyper::Request;
use std::net::SocketAddr;

lazy_static::lazy_static! {
    static ref EMPTY_PARAMS: RouteParams = RouteParams::new();
}

/// A extension trait which extends the [`hyper::Request`](https://docs.rs/hyper/1/hyper/struct.Request.html) type with
/// the data a [`RequestService`](../struct.RequestService.html) attaches to a routed request.
pub trait RequestExt {
    /// Returns the parameters captured by the matched route.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytes::Bytes;
    /// use http_body_util::Full;
    /// use hyper::{body::Incoming, Request, Response};
    /// use nestroute::prelude::*;
    /// use nestroute::{handler, Handler, Router};
    /// use std::convert::Infallible;
    ///
    /// async fn book(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    ///     let params = req.params();
    ///     let text = format!("{} by {}", params.get("bookName").unwrap(), params.get("userName").unwrap());
    ///     Ok(Response::new(Full::new(Bytes::from(text))))
    /// }
    ///
    /// let router: Router<Handler<Incoming, Infallible>> = Router::builder()
    ///     .add("/users/:userName/books/:bookName", handler(book), "book")
    ///     .build()
    ///     .unwrap();
    /// ```
    fn params(&self) -> &RouteParams;

    /// Returns a single captured parameter by name.
    fn param<P: AsRef<str>>(&self, param_name: P) -> Option<&str>;

    /// Returns the remote address of the connection the request came from.
    fn remote_addr(&self) -> Option<SocketAddr>;
}

impl<B> RequestExt for Request<B> {
    fn params(&self) -> &RouteParams {
        self.extensions().get::<RouteParams>().unwrap_or(&EMPTY_PARAMS)
    }

    fn param<P: AsRef<str>>(&self, param_name: P) -> Option<&str> {
        self.params().get(param_name)
    }

    fn remote_addr(&self) -> Option<SocketAddr> {
        self.extensions().get::<SocketAddr>().copied()
    }
}
