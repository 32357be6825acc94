use crate::errors::ServerError;
use crate::router::{CSV_FILENAME, XLSX_FILENAME};
use crate::spreadsheets::read_csv;
use crate::tests::utils::{body_bytes, post_listings};

const LISTINGS: &str = "Crittall loft in Manchester £1,800,000, vaulted ceilings\n\n\
    Victorian terrace in Swindon £275,000\n\n\
    B flat";

#[test]
fn csv_download_headers() {
    let resp = post_listings("/export.csv", LISTINGS).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/csv"
    );
    assert_eq!(
        resp.headers()
            .get("Content-Disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        format!("attachment; filename=\"{CSV_FILENAME}\"")
    );
}

#[test]
fn csv_download_round_trips() {
    let resp = post_listings("/export.csv", LISTINGS).unwrap();
    let rows = read_csv(body_bytes(resp).as_slice()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].price, Some(1_800_000));
    assert!(rows[0].hook.contains("Crittall"));
    assert_eq!(rows[1].location, "Swindon");
    assert_eq!(rows[2].price, None);
}

#[test]
fn csv_download_is_repeatable() {
    let first = body_bytes(post_listings("/export.csv", LISTINGS).unwrap());
    let second = body_bytes(post_listings("/export.csv", LISTINGS).unwrap());
    assert_eq!(first, second);
}

#[test]
fn xlsx_download() {
    let resp = post_listings("/export.xlsx", LISTINGS).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains(XLSX_FILENAME));
    assert_eq!(&body_bytes(resp)[..2], b"PK");
}

#[test]
fn empty_export_is_bad_request() {
    let err = post_listings("/export.csv", "   ").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn xlsx_download_survives_very_long_location() {
    let listings = format!("House in {} £500,000", "a".repeat(40_000));

    let csv = post_listings("/export.csv", &listings).expect("CSV handler failed");
    assert_eq!(csv.status(), 200);

    let xlsx = post_listings("/export.xlsx", &listings).expect("XLSX handler failed");
    assert_eq!(xlsx.status(), 200);
    assert_eq!(&body_bytes(xlsx)[..2], b"PK");
}
