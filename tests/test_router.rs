use raku_lite::http::request::Request;
use raku_lite::router::Router;
use std::collections::HashMap;
use std::path::PathBuf;

fn request(method: &str, path: &str) -> Request {
    Request {
        method: method.to_string(),
        path: path.to_string(),
        version: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
        body: vec![],
    }
}

/// Creates a unique scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("raku-lite-test-{}-{}", std::process::id(), tag));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_exact_route_match() {
    let mut router = Router::new();
    router.get("/ping", |_req, res| {
        res.set_content("pong", "text/plain");
    });

    let response = router.dispatch(&request("GET", "/ping"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"pong".to_vec());
}

#[test]
fn test_matched_route_always_has_content_type() {
    let mut router = Router::new();
    router.get("/bare", |_req, res| {
        res.body = b"no content type set".to_vec();
    });

    let response = router.dispatch(&request("GET", "/bare"));

    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
}

#[test]
fn test_explicit_content_type_is_not_overridden() {
    let mut router = Router::new();
    router.get("/json", |_req, res| {
        res.set_content("{}", "application/json");
    });

    let response = router.dispatch(&request("GET", "/json"));

    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "application/json"
    );
}

#[test]
fn test_query_string_is_stripped_before_matching() {
    let mut router = Router::new();
    router.get("/search", |_req, res| {
        res.set_content("found", "text/plain");
    });

    let response = router.dispatch(&request("GET", "/search?q=rust&page=2"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"found".to_vec());
}

#[test]
fn test_method_tables_are_separate() {
    let mut router = Router::new();
    router.post("/submit", |_req, res| {
        res.set_content("accepted", "text/plain");
    });

    assert_eq!(router.dispatch(&request("POST", "/submit")).status, 200);
    assert_eq!(router.dispatch(&request("GET", "/submit")).status, 404);
}

#[test]
fn test_unknown_method_is_a_miss() {
    let mut router = Router::new();
    router.get("/thing", |_req, res| {
        res.set_content("x", "text/plain");
    });

    let response = router.dispatch(&request("PUT", "/thing"));

    assert_eq!(response.status, 404);
    assert_eq!(response.body, b"not_found".to_vec());
}

#[test]
fn test_no_trailing_slash_normalization() {
    let mut router = Router::new();
    router.get("/exact", |_req, res| {
        res.set_content("x", "text/plain");
    });

    assert_eq!(router.dispatch(&request("GET", "/exact/")).status, 404);
}

#[test]
fn test_panicking_handler_yields_500() {
    let mut router = Router::new();
    router.get("/boom", |_req, _res| {
        panic!("handler exploded");
    });

    let response = router.dispatch(&request("GET", "/boom"));

    assert_eq!(response.status, 500);
}

#[test]
fn test_miss_without_mount_is_404() {
    let router = Router::new();

    let response = router.dispatch(&request("GET", "/nowhere"));

    assert_eq!(response.status, 404);
    assert_eq!(response.body, b"not_found".to_vec());
}

#[test]
fn test_static_file_served_from_mount() {
    let dir = scratch_dir("serve");
    std::fs::write(dir.join("page.html"), "<h1>hi</h1>").unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/page.html"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"<h1>hi</h1>".to_vec());
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/html");
}

#[test]
fn test_mount_prefix_serves_index_html() {
    let dir = scratch_dir("index");
    std::fs::write(dir.join("index.html"), "home").unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"home".to_vec());
}

#[test]
fn test_empty_remainder_serves_index_html() {
    let dir = scratch_dir("slash");
    std::fs::write(dir.join("index.html"), "home").unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"home".to_vec());
}

#[test]
fn test_traversal_attempt_is_forbidden() {
    let dir = scratch_dir("guard");

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/../../etc/passwd"));

    assert_eq!(response.status, 403);
    assert_eq!(response.body, b"forbidden".to_vec());
}

#[test]
fn test_traversal_guard_rejects_dotdot_in_filename() {
    // Coarse substring guard: even a legitimately named file with ".."
    // in it is rejected. Documented behavior.
    let dir = scratch_dir("coarse");
    std::fs::write(dir.join("a..b"), "data").unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/a..b"));

    assert_eq!(response.status, 403);
}

#[test]
fn test_missing_file_is_404() {
    let dir = scratch_dir("missing");

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/ghost.css"));

    assert_eq!(response.status, 404);
}

#[test]
fn test_path_outside_mount_prefix_is_404() {
    let dir = scratch_dir("outside");
    std::fs::write(dir.join("index.html"), "home").unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/elsewhere/index.html"));

    assert_eq!(response.status, 404);
}

#[test]
fn test_mime_detection_is_case_insensitive() {
    let dir = scratch_dir("mime");
    std::fs::write(dir.join("INDEX.HTML"), "caps").unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/INDEX.HTML"));

    assert_eq!(response.status, 200);
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/html");
}

#[test]
fn test_unknown_suffix_is_octet_stream() {
    let dir = scratch_dir("octet");
    std::fs::write(dir.join("blob.bin"), [1u8, 2, 3]).unwrap();

    let mut router = Router::new();
    router.mount("/assets", &dir);

    let response = router.dispatch(&request("GET", "/assets/blob.bin"));

    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "application/octet-stream"
    );
}

#[test]
fn test_root_mount_serves_nested_path() {
    let dir = scratch_dir("root");
    std::fs::write(dir.join("style.css"), "body{}").unwrap();

    let mut router = Router::new();
    router.mount("/", &dir);

    let response = router.dispatch(&request("GET", "/style.css"));

    assert_eq!(response.status, 200);
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/css");
}

#[test]
fn test_route_takes_precedence_over_mount() {
    let dir = scratch_dir("precedence");
    std::fs::write(dir.join("index.html"), "static").unwrap();

    let mut router = Router::new();
    router.mount("/", &dir);
    router.get("/", |_req, res| {
        res.set_content("dynamic", "text/plain");
    });

    let response = router.dispatch(&request("GET", "/"));

    assert_eq!(response.body, b"dynamic".to_vec());
}
