use nestroute::{Error, RouteParams, Router};
use std::thread;

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs.iter().cloned().collect()
}

fn v1() -> Router<&'static str> {
    Router::builder()
        .add("/:user/:id", "v1 endpoint", "endpoint")
        .add("/users", "v1 users", "users")
        .build()
        .unwrap()
}

#[test]
fn resolves_and_reverses_versioned_api() {
    let api = Router::builder().mount("/v1", v1(), "v1").build().unwrap();
    let router = Router::builder()
        .add("/", "home", "home")
        .mount("/api", api, "api")
        .build()
        .unwrap();

    let matched = router.resolve("/api/v1/42/99").unwrap();
    assert_eq!(*matched.handler(), "v1 endpoint");
    assert_eq!(matched.params(), params(&[("user", "42"), ("id", "99")]));

    assert_eq!(*router.resolve("/api/v1/users").unwrap().handler(), "v1 users");
    assert!(router.resolve("/api/v1/users").unwrap().parameters().is_empty());

    assert_eq!(
        router
            .reverse("api:v1:endpoint", &params(&[("user", "42"), ("id", "99")]))
            .unwrap(),
        "/api/v1/42/99"
    );
    assert_eq!(router.reverse("api:v1:users", &RouteParams::new()).unwrap(), "/api/v1/users");
    assert_eq!(
        router.reverse("v1:endpoint", &RouteParams::new()).unwrap_err(),
        Error::NameNotFound("v1:endpoint".to_owned())
    );

    let mut names = router.names().collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, vec!["api:v1:endpoint", "api:v1:users", "home"]);
}

#[test]
fn reverse_then_resolve_round_trips() {
    let router = Router::builder()
        .add("/users/:userId/books/:bookId", "book", "book")
        .add(r"/archive/(?P<year>\d{4})-(?P<month>\d{2})", "archive", "archive")
        .add("/assets/*path", "assets", "assets")
        .build()
        .unwrap();

    let cases: Vec<(&str, RouteParams)> = vec![
        ("book", params(&[("userId", "alice"), ("bookId", "dune")])),
        ("archive", params(&[("year", "2021"), ("month", "07")])),
        ("assets", params(&[("path", "css/site.css")])),
    ];

    for (name, expected) in cases {
        let path = router.reverse(name, &expected).unwrap();
        let matched = router.resolve(&path).unwrap();

        assert_eq!(matched.route().name(), name);
        assert_eq!(matched.params(), expected);
    }
}

#[test]
fn literal_regex_parameter_greedy_precedence() {
    let router = Router::builder()
        .add("/items/*rest", "greedy", "greedy")
        .add("/items/:id", "param", "param")
        .add(r"/items/(?P<num>\d+)", "regex", "regex")
        .add("/items/new", "literal", "literal")
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/items/new").unwrap().handler(), "literal");
    assert_eq!(*router.resolve("/items/17").unwrap().handler(), "regex");
    assert_eq!(*router.resolve("/items/abc").unwrap().handler(), "param");
    // The walk commits to the parameter and does not come back for the greedy route.
    assert!(router.resolve("/items/abc/def").is_none());

    let router = Router::builder()
        .add("/blobs/*rest", "greedy", "greedy")
        .add("/blobs/latest", "literal", "literal")
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/blobs/latest").unwrap().handler(), "literal");
    let matched = router.resolve("/blobs/a/b/c").unwrap();
    assert_eq!(*matched.handler(), "greedy");
    assert_eq!(matched.get("rest"), Some("a/b/c"));
}

#[test]
fn greedy_reverse_ends_the_path() {
    let router = Router::builder().add("/files/*path", "files", "files").build().unwrap();

    assert_eq!(
        router.reverse_positional("files", &["docs/readme.md", "ignored"]).unwrap(),
        "/files/docs/readme.md"
    );
    assert_eq!(
        router.reverse_positional::<&str>("files", &[]).unwrap_err(),
        Error::MissingParameter { name: "path".to_owned() }
    );
}

#[test]
fn unknown_paths_fall_back_to_the_longest_prefix() {
    let router = Router::builder()
        .add("/api/users", "users", "users")
        .fallback("root default", "root_default")
        .fallback_at("/api", "api default", "api_default")
        .fallback_at("/api/admin", "admin default", "admin_default")
        .build()
        .unwrap();

    let matched = router.resolve("/api/admin/settings").unwrap();
    assert!(matched.is_fallback());
    assert_eq!(*matched.handler(), "admin default");
    assert!(matched.parameters().is_empty());

    assert_eq!(*router.resolve("/api/orders").unwrap().handler(), "api default");
    assert_eq!(*router.resolve("/about").unwrap().handler(), "root default");
    assert!(!router.resolve("/api/users").unwrap().is_fallback());

    let bare = Router::builder().add("/api/users", "users", "users").build().unwrap();
    assert!(bare.resolve("/api/orders").is_none());
}

#[test]
fn rejects_positional_captures() {
    let err = Router::<()>::builder()
        .add(r"/posts/(\d+)", (), "post")
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        Error::UnnamedCapture {
            pattern: r"/posts/(\d+)".to_owned()
        }
    );
    assert_eq!(err.to_string(), r"All groups in pattern should be named: /posts/(\d+)");
}

#[test]
fn shares_a_match_across_threads() {
    let router = Router::builder()
        .add("/users/:id/:tab", "user", "user")
        .build()
        .unwrap();
    let matched = router.resolve("/users/7/profile").unwrap();

    thread::scope(|s| {
        let workers = (0..8)
            .map(|_| s.spawn(|| matched.values().join(",")))
            .collect::<Vec<_>>();

        for worker in workers {
            assert_eq!(worker.join().unwrap(), "7,profile");
        }
    });
}

#[test]
fn regex_metacharacters_without_groups_are_literal() {
    let router = Router::builder()
        .add("/search/a+b", "plus", "plus")
        .add("/price/$5", "dollar", "dollar")
        .add("/v[0-9]", "bracket", "bracket")
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/search/a+b").unwrap().handler(), "plus");
    assert!(router.resolve("/search/aab").is_none());
    assert_eq!(*router.resolve("/price/$5").unwrap().handler(), "dollar");
    assert_eq!(*router.resolve("/v[0-9]").unwrap().handler(), "bracket");
    assert!(router.resolve("/v1").is_none());

    assert_eq!(router.reverse("plus", &RouteParams::new()).unwrap(), "/search/a+b");
    assert_eq!(router.reverse("dollar", &RouteParams::new()).unwrap(), "/price/$5");
}

#[test]
fn reverse_fails_on_segments_without_a_single_rendering() {
    let router = Router::builder()
        .add("/alt/(?P<a>x+)|(?P<b>y+)", "alt", "alt")
        .add(r"/flags/(?i)user-(?P<id>\d+)", "flags", "flags")
        .add(r"/optional/n(?P<id>\d+)?", "optional", "optional")
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/flags/USER-5").unwrap().handler(), "flags");
    assert_eq!(router.resolve("/optional/n").unwrap().get("id"), Some(""));

    let values = params(&[("a", "x"), ("b", "y"), ("id", "5")]);
    for name in ["alt", "flags", "optional"] {
        assert!(matches!(
            router.reverse(name, &values),
            Err(Error::NotReversible { .. })
        ));
    }
}

#[test]
fn double_separator_is_not_the_root() {
    let router = Router::builder()
        .add("/", "home", "home")
        .add("/static/*rest", "static", "static")
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/").unwrap().handler(), "home");
    assert_eq!(*router.resolve("").unwrap().handler(), "home");
    assert!(router.resolve("//").is_none());

    let matched = router.resolve("/static/a/b/").unwrap();
    assert_eq!(matched.get("rest"), Some("a/b/"));
}
