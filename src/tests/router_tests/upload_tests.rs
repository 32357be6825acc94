use crate::router::DECODE_ERROR_MESSAGE;
use crate::tests::utils::{body_string, post_raw};

#[test]
fn upload_fills_text_area() {
    let file = "Loft in Leeds £300,000\n\nCottage in Bath".as_bytes().to_vec();
    let resp = post_raw("/upload", file).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Loft in Leeds £300,000"));
    assert!(body.contains("Cottage in Bath"));
    assert!(!body.contains(DECODE_ERROR_MESSAGE));
}

#[test]
fn undecodable_upload_shows_message_and_empty_input() {
    // Latin-1 pound sign is not valid UTF-8.
    let file = b"Flat in York \xa3250,000".to_vec();
    let resp = post_raw("/upload", file).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(DECODE_ERROR_MESSAGE));
    assert!(!body.contains("Flat in York"));
    assert!(body.contains(r#"name="listings" rows="16"></textarea>"#));
}
