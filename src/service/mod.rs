use bytes::Bytes;
use http_body_util::Full;
use hyper::{Request, Response};
use std::future::Future;

pub use self::request_service::RequestService;
pub use self::router_service::RouterService;

mod request_service;
mod router_service;

/// A boxed HTTP route handler, the handler type of a [`Router`](./struct.Router.html) served by a [`RouterService`](./struct.RouterService.html).
pub type Handler<B, E> = Box<dyn Fn(Request<B>) -> HandlerReturn<E> + Send + Sync + 'static>;

/// The future returned by a [`Handler`](./type.Handler.html).
pub type HandlerReturn<E> = Box<dyn Future<Output = Result<Response<Full<Bytes>>, E>> + Send + 'static>;

/// Boxes an async function or closure into a [`Handler`](./type.Handler.html).
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use http_body_util::Full;
/// use hyper::{body::Incoming, Request, Response};
/// use nestroute::{handler, Handler, Router};
/// use std::convert::Infallible;
///
/// async fn home(_: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
///     Ok(Response::new(Full::new(Bytes::from("Home page"))))
/// }
///
/// let router: Router<Handler<Incoming, Infallible>> = Router::builder()
///     .add("/", handler(home), "home")
///     .build()
///     .unwrap();
/// ```
pub fn handler<B, E, H, R>(handler: H) -> Handler<B, E>
where
    B: 'static,
    E: 'static,
    H: Fn(Request<B>) -> R + Send + Sync + 'static,
    R: Future<Output = Result<Response<Full<Bytes>>, E>> + Send + 'static,
{
    Box::new(move |req: Request<B>| -> HandlerReturn<E> { Box::new(handler(req)) })
}
