use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Request, Response};
use url::form_urlencoded;

use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::AppContext;

/// Fresh context over a temp-file database initialized from the
/// production schema. Each test gets its own file.
pub fn test_ctx() -> AppContext {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("vitrine_test_{nanos}.sqlite"));
    let path = path.to_string_lossy().to_string();

    let db = Database::new(path.clone());
    init_db(&db, "sql/schema.sql").expect("failed to initialize test db");

    AppContext {
        db,
        config: Config {
            db_path: path,
            ..Config::default()
        },
    }
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(path: &str, session: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .header("Cookie", format!("session={session}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, pairs: &[(&str, &str)]) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(pairs)))
        .unwrap()
}

pub fn post_form_with_cookie(path: &str, session: &str, pairs: &[(&str, &str)]) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Cookie", format!("session={session}"))
        .body(Body::from(encode_form(pairs)))
        .unwrap()
}

pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("readable response body");
    String::from_utf8(bytes).expect("utf-8 response body")
}

/// Pull the raw session token out of a login response's Set-Cookie.
pub fn session_from(resp: &Response) -> String {
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("login sets a cookie")
        .to_str()
        .unwrap();
    let (first, _) = cookie.split_once(';').unwrap_or((cookie, ""));
    first
        .strip_prefix("session=")
        .expect("session cookie")
        .to_string()
}

/// Log in with the schema-seeded default password and return the token.
pub fn login(ctx: &AppContext) -> String {
    let resp = crate::router::handle(
        post_form("/admin/login", &[("password", "trocar-senha")]),
        ctx,
    )
    .expect("login request succeeds");
    assert_eq!(resp.status(), 303);
    session_from(&resp)
}
