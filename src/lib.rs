//! `nestroute` is a path router with composable, namespaced routers and reverse routing.
//!
//! Its core features:
//!
//! - Segment patterns: literals, `:param`, greedy `*rest` and per-segment regular expressions
//!   with named groups such as `(?P<id>\d+)`.
//!
//! - Resolution through a segment trie. At each segment a literal wins over a regex, which wins
//!   over a parameter, which wins over a greedy tail.
//!
//! - Default routes picked by the longest registered prefix when nothing else matches.
//!
//! - Named routes and reverse routing. Mounting a router under a namespace qualifies its names,
//!   so `api:v1:endpoint` names the `endpoint` route of a router mounted as `v1` inside `api`.
//!
//! - Match parameters parsed lazily, once, on first access, and safe to read from many threads.
//!
//! - An optional [hyper](https://hyper.rs/) adapter: [`RouterService`](./struct.RouterService.html)
//!   serves a router of boxed [`Handler`](./type.Handler.html)s.
//!
//! ## Basic Example
//!
//! The router is generic over its handler type:
//!
//! ```
//! use nestroute::{RouteParams, Router};
//!
//! let router: Router<&str> = Router::builder()
//!     .add("/", "home", "home")
//!     .add("/users/:userId", "user", "user")
//!     .add(r"/posts/(?P<year>\d{4})-(?P<slug>[a-z-]+)", "post", "post")
//!     .add("/static/*path", "static", "static")
//!     .fallback("not found", "not_found")
//!     .build()
//!     .unwrap();
//!
//! let matched = router.resolve("/posts/2024-hello-world").unwrap();
//! assert_eq!(*matched.handler(), "post");
//! assert_eq!(matched.get("year"), Some("2024"));
//! assert_eq!(matched.get("slug"), Some("hello-world"));
//!
//! let matched = router.resolve("/static/css/site.css").unwrap();
//! assert_eq!(matched.get("path"), Some("css/site.css"));
//!
//! assert!(router.resolve("/nowhere").unwrap().is_fallback());
//!
//! let params: RouteParams = vec![("year", "2025"), ("slug", "news")].into_iter().collect();
//! assert_eq!(router.reverse("post", &params).unwrap(), "/posts/2025-news");
//! assert_eq!(router.reverse_positional("user", &["7"]).unwrap(), "/users/7");
//! ```
//!
//! ## Mounting Routers
//!
//! ```
//! use nestroute::Router;
//!
//! fn v1() -> Router<&'static str> {
//!     Router::builder()
//!         .add("/books/:bookId", "book", "book")
//!         .fallback("v1 default", "default")
//!         .build()
//!         .unwrap()
//! }
//!
//! let api = Router::builder().mount("/v1", v1(), "v1").build().unwrap();
//! let router = Router::builder().mount("/api", api, "api").build().unwrap();
//!
//! assert_eq!(*router.resolve("/api/v1/books/3").unwrap().handler(), "book");
//! assert_eq!(*router.resolve("/api/v1/authors").unwrap().handler(), "v1 default");
//! assert!(router.resolve("/api/v2").is_none());
//! assert_eq!(router.reverse_positional("api:v1:book", &["3"]).unwrap(), "/api/v1/books/3");
//! ```
//!
//! ## Serving With Hyper
//!
//! ```no_run
//! use bytes::Bytes;
//! use http_body_util::Full;
//! use hyper::body::Incoming;
//! use hyper::service::Service;
//! use hyper::{Request, Response};
//! use hyper_util::rt::{TokioExecutor, TokioIo};
//! use hyper_util::server::conn::auto::Builder;
//! use nestroute::prelude::*;
//! use nestroute::{handler, Handler, Router, RouterService};
//! use std::convert::Infallible;
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! async fn user_handler(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
//!     let user_id = req.param("userId").unwrap();
//!     Ok(Response::new(Full::new(Bytes::from(format!("Hello {}", user_id)))))
//! }
//!
//! fn router() -> Router<Handler<Incoming, Infallible>> {
//!     Router::builder()
//!         .add("/users/:userId", handler(user_handler), "user")
//!         .build()
//!         .unwrap()
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let router_service = Arc::new(RouterService::new(router()));
//!
//!     let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
//!     let listener = TcpListener::bind(addr).await?;
//!
//!     loop {
//!         let (stream, _) = listener.accept().await?;
//!         let router_service = router_service.clone();
//!
//!         tokio::spawn(async move {
//!             let request_service = router_service.call(&stream).await.unwrap();
//!             let io = TokioIo::new(stream);
//!             let builder = Builder::new(TokioExecutor::new());
//!
//!             if let Err(err) = builder.serve_connection(io, request_service).await {
//!                 eprintln!("Error serving connection: {:?}", err);
//!             }
//!         });
//!     }
//! }
//! ```

pub use self::error::{Error, RouteError};
pub use self::route::{Match, Parameter, Route};
pub use self::router::{Router, RouterBuilder};
pub use self::service::{handler, Handler, HandlerReturn, RequestService, RouterService};
pub use self::types::RouteParams;

mod constants;
mod error;
pub mod ext;
mod helpers;
pub mod prelude;
mod regex_generator;
mod route;
mod router;
mod service;
mod types;

/// A Result type often returned from methods that can have `nestroute` errors.
pub type Result<T> = std::result::Result<T, Error>;
