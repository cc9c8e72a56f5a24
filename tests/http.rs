use self::support::serve;
use bytes::Bytes;
use futures::future::join_all;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use nestroute::prelude::*;
use nestroute::{handler, Handler, Router};
use std::convert::Infallible;

mod support;

type Api = Router<Handler<Incoming, Infallible>>;

fn text(body: String) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(Response::new(Full::new(Bytes::from(body))))
}

fn v1() -> Api {
    Router::builder()
        .add(
            "/:user/:id",
            handler(|req: Request<Incoming>| async move {
                text(format!("v1 {} {}", req.param("user").unwrap(), req.param("id").unwrap()))
            }),
            "endpoint",
        )
        .build()
        .unwrap()
}

fn v2() -> Api {
    Router::builder()
        .add(
            "/:user/:id",
            handler(|req: Request<Incoming>| async move {
                text(format!("v2 {} {}", req.param("user").unwrap(), req.param("id").unwrap()))
            }),
            "endpoint",
        )
        .fallback(
            handler(|req: Request<Incoming>| async move {
                text(format!("v2 default for {}", req.uri().path()))
            }),
            "default",
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn can_serve_mounted_routers() {
    let api = Router::builder()
        .mount("/v1", v1(), "v1")
        .mount("/v2", v2(), "v2")
        .build()
        .unwrap();

    let router: Api = Router::builder()
        .add(
            "/files/*path",
            handler(|req: Request<Incoming>| async move { text(req.param("path").unwrap().to_owned()) }),
            "files",
        )
        .mount("/api", api, "api")
        .build()
        .unwrap();

    assert_eq!(
        router.reverse_positional("api:v1:endpoint", &["alice", "7"]).unwrap(),
        "/api/v1/alice/7"
    );

    let serve = serve(router).await;

    let (status, body) = serve.send("GET", "/api/v1/alice/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "v1 alice 7");

    let (status, body) = serve.send("POST", "/api/v2/bob/8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "v2 bob 8");

    let (status, body) = serve.send("GET", "/api/v2/unknown").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "v2 default for /api/v2/unknown");

    let (status, body) = serve.send("GET", "/files/a%20b/c.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "a b/c.txt");

    let (status, _) = serve.send("GET", "/api/v3/carol/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    serve.shutdown();
}

#[tokio::test]
async fn can_expose_the_remote_address() {
    let router: Api = Router::builder()
        .add(
            "/whoami",
            handler(|req: Request<Incoming>| async move { text(req.remote_addr().unwrap().ip().to_string()) }),
            "whoami",
        )
        .build()
        .unwrap();

    let serve = serve(router).await;

    let (status, body) = serve.send("GET", "/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "127.0.0.1");

    serve.shutdown();
}

#[tokio::test]
async fn can_serve_concurrent_requests() {
    let router: Api = Router::builder().mount("/v1", v1(), "v1").build().unwrap();
    let serve = serve(router).await;

    let paths = (0..16).map(|i| format!("/v1/user{}/{}", i, i)).collect::<Vec<_>>();
    let responses = join_all(paths.iter().map(|path| serve.send("GET", path))).await;

    for (i, (status, body)) in responses.into_iter().enumerate() {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("v1 user{} {}", i, i));
    }

    serve.shutdown();
}
