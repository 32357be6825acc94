use crate::domain::listing::ScoredListing;
use crate::errors::ServerError;
use crate::tests::utils::{body_bytes, body_string, post_listings, post_raw};

const TWO_LISTINGS: &str = "A flat in London £600,000 georgian\n\nB flat";

#[test]
fn analyse_renders_table_in_input_order() {
    let resp = post_listings("/analyse", TWO_LISTINGS).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Scored <strong>2</strong> listings."));

    for col in crate::domain::listing::COLUMNS {
        assert!(body.contains(&format!(">{col}</th>")), "missing column {col}");
    }

    let london = body.find("£600000").expect("price cell");
    let unknown_band = body.find("<td>Unknown</td>").expect("unknown band cell");
    assert!(london < unknown_band);

    // Downloads carry the original text along.
    assert!(body.contains(r#"action="/export.csv""#));
    assert!(body.contains(r#"action="/export.xlsx""#));
    assert!(body.contains("B flat"));
}

#[test]
fn whitespace_only_input_is_a_no_op() {
    let resp = post_listings("/analyse", "  \n\n\t ").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains(r#"id="results""#));
    assert!(body.contains(r#"action="/analyse""#));
}

#[test]
fn listing_text_is_escaped() {
    let resp = post_listings("/analyse", "Flat in <script>alert(1)</script>").unwrap();
    let body = body_string(resp);
    assert!(!body.contains("<script>alert(1)</script>"));
}

#[test]
fn api_returns_json_rows() {
    let resp = post_raw("/api/analyse", TWO_LISTINGS.as_bytes().to_vec()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let rows: Vec<ScoredListing> = serde_json::from_slice(&body_bytes(resp)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].price, Some(600_000));
    assert_eq!(rows[1].location, "Unknown");
}

#[test]
fn api_rejects_invalid_utf8() {
    let err = post_raw("/api/analyse", vec![0xff, 0xfe, 0x00]).unwrap_err();
    assert!(matches!(err, ServerError::Decode(_)));
}

#[test]
fn oversize_body_is_rejected() {
    let huge = "x".repeat(65 * 1024);
    let err = post_raw("/api/analyse", huge.into_bytes()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn largest_body_limit_still_reads_body() {
    use crate::config::AppConfig;
    use crate::router::handle;
    use astra::Body;
    use http::{Method, Request};

    let cfg = AppConfig {
        max_body_bytes: usize::MAX,
    };
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/analyse")
        .body(Body::from(TWO_LISTINGS))
        .unwrap();

    let resp = handle(req, &cfg).expect("Handler failed");
    let rows: Vec<ScoredListing> = serde_json::from_slice(&body_bytes(resp)).unwrap();
    assert_eq!(rows.len(), 2);
}
