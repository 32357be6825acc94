use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_config};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_has_form_and_upload() {
    let resp = get("/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Rightmove Listing Scoring Tool"));
    assert!(body.contains(r#"action="/analyse""#));
    assert!(body.contains(r#"name="listings""#));
    assert!(body.contains(r#"type="file""#));
    assert!(body.contains("Analyse Listings"));
}

#[test]
fn unknown_route_is_not_found() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn analyse_requires_post() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/analyse")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(
        handle(req, &test_config()),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn error_pages_carry_status() {
    let resp = crate::templates::html_error_response(ServerError::BadRequest("nope".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("nope"));

    let resp = crate::templates::html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
}
