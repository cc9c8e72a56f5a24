use crate::helpers;
use crate::router::Router;
use crate::service::Handler;
use crate::RouteError;
use bytes::Bytes;
use http_body_util::Full;
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

/// Serves the requests of one connection.
///
/// The request path is percent-decoded and resolved. The captured [`RouteParams`](./struct.RouteParams.html)
/// and the remote address are put into the request extensions, readable through
/// [`RequestExt`](./ext/trait.RequestExt.html). A path nothing matches is answered with `404 Not Found`.
pub struct RequestService<B, E> {
    pub(crate) router: Arc<Router<Handler<B, E>>>,
    pub(crate) remote_addr: SocketAddr,
}

impl<B, E> Service<Request<B>> for RequestService<B, E>
where
    B: Send + 'static,
    E: Into<RouteError> + 'static,
{
    type Response = Response<Full<Bytes>>;
    type Error = RouteError;
    #[allow(clippy::type_complexity)]
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&self, mut req: Request<B>) -> Self::Future {
        let router = self.router.clone();
        let remote_addr = self.remote_addr;

        let fut = async move {
            let target_path = helpers::percent_decode_request_path(req.uri().path())
                .map_err(|e| -> RouteError { format!("Couldn't percent decode request path: {}", e).into() })?;

            let pending = match router.resolve(&target_path) {
                Some(matched) => {
                    req.extensions_mut().insert(matched.params());
                    req.extensions_mut().insert(remote_addr);
                    (matched.handler())(req)
                }
                None => {
                    tracing::debug!(path = %target_path, remote_addr = %remote_addr, "No route matched");
                    return not_found();
                }
            };

            Pin::from(pending).await.map_err(Into::into)
        };

        Box::pin(fut)
    }
}

fn not_found() -> Result<Response<Full<Bytes>>, RouteError> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from(StatusCode::NOT_FOUND.canonical_reason().unwrap_or_default())))?)
}
