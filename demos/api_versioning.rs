use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use nestroute::prelude::*;
use nestroute::{handler, Handler, RouteParams, Router, RouterService};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

type Api = Router<Handler<Incoming, io::Error>>;

// A handler for "/:section" pages of every version.
async fn section_handler(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, io::Error> {
    Ok(Response::new(Full::from(format!("Section {}", req.param("section").unwrap()))))
}

// A handler for "/docs/*page".
async fn docs_handler(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, io::Error> {
    Ok(Response::new(Full::from(format!("Docs page {}", req.param("page").unwrap()))))
}

// Answers any unknown path below a version prefix.
async fn version_not_found(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, io::Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::from(format!("No such endpoint: {}", req.uri().path())))
        .unwrap())
}

fn version(release: &'static str) -> Api {
    Router::builder()
        .add(
            r"/releases/(?P<major>\d+)\.(?P<minor>\d+)",
            handler(move |req: Request<Incoming>| async move {
                let params = req.params();
                Ok::<_, io::Error>(Response::new(Full::from(format!(
                    "{} release {}.{}",
                    release,
                    params.get("major").unwrap(),
                    params.get("minor").unwrap()
                ))))
            }),
            "release",
        )
        .add("/:section", handler(section_handler), "section")
        .fallback(handler(version_not_found), "not_found")
        .build()
        .unwrap()
}

fn router() -> Api {
    let api = Router::builder()
        .mount("/v1", version("v1"), "v1")
        .mount("/v2", version("v2"), "v2")
        .build()
        .unwrap();

    Router::builder()
        .add("/docs/*page", handler(docs_handler), "docs")
        .mount("/api", api, "api")
        .build()
        .unwrap()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nestroute=debug")))
        .init();

    let router = router();

    let params: RouteParams = vec![("major", "2"), ("minor", "1")].into_iter().collect();
    let release = router.reverse("api:v2:release", &params)?;
    let guide = router.reverse_positional("docs", &["guide/intro.html"])?;
    tracing::info!(%release, %guide, "Reversed routes");

    let router_service = Arc::new(RouterService::new(router));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "App is running");

    loop {
        let (stream, _) = listener.accept().await?;
        let router_service = router_service.clone();

        tokio::spawn(async move {
            let request_service = router_service.call(&stream).await.unwrap();
            let io = TokioIo::new(stream);
            let builder = Builder::new(TokioExecutor::new());

            if let Err(err) = builder.serve_connection(io, request_service).await {
                tracing::error!("Error serving connection: {:?}", err);
            }
        });
    }
}
