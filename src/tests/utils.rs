use crate::config::AppConfig;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Small body limit so oversize handling is cheap to exercise.
pub fn test_config() -> AppConfig {
    AppConfig {
        max_body_bytes: 64 * 1024,
    }
}

pub fn get(path: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    handle(req, &test_config()).expect("Handler failed")
}

/// POST an urlencoded form with a single `listings` field.
pub fn post_listings(path: &str, listings: &str) -> Result<Response, crate::errors::ServerError> {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("listings", listings)
        .finish();

    let req = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();

    handle(req, &test_config())
}

pub fn post_raw(path: &str, bytes: Vec<u8>) -> Result<Response, crate::errors::ServerError> {
    let req = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "text/plain")
        .body(Body::from(bytes))
        .unwrap();

    handle(req, &test_config())
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
