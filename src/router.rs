use crate::config::AppConfig;
use crate::domain::analyse;
use crate::errors::ServerError;
use crate::responses::{
    attachment_response, html_response, json_response, ResultResp, XLSX_CONTENT_TYPE,
};
use crate::spreadsheets::{write_csv, write_xlsx};
use crate::templates;
use astra::Request;
use std::io::Read;
use tracing::{info, warn};

pub const CSV_FILENAME: &str = "rightmove_scores.csv";
pub const XLSX_FILENAME: &str = "rightmove_scores.xlsx";
pub const DECODE_ERROR_MESSAGE: &str = "Could not decode file.";

pub fn handle(mut req: Request, cfg: &AppConfig) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    info!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page("", None)),

        ("POST", "/analyse") => {
            let listings = read_listings_form(&mut req, cfg)?;
            // Nothing to analyse: same as never pressing the button.
            if listings.trim().is_empty() {
                return html_response(templates::pages::home_page("", None));
            }
            let table = analyse(&listings);
            html_response(templates::pages::results_page(&table, &listings))
        }

        ("POST", "/upload") => {
            let bytes = read_body(&mut req, cfg.max_body_bytes)?;
            match String::from_utf8(bytes) {
                Ok(text) => html_response(templates::pages::home_page(&text, None)),
                Err(e) => {
                    warn!(error = %e, "uploaded file is not valid UTF-8");
                    html_response(templates::pages::home_page("", Some(DECODE_ERROR_MESSAGE)))
                }
            }
        }

        ("POST", "/export.csv") => {
            let listings = read_export_listings(&mut req, cfg)?;
            let buffer = write_csv(&analyse(&listings))?;
            attachment_response(buffer, CSV_FILENAME, mime::TEXT_CSV.as_ref())
        }

        ("POST", "/export.xlsx") => {
            let listings = read_export_listings(&mut req, cfg)?;
            let buffer = write_xlsx(&analyse(&listings))?;
            attachment_response(buffer, XLSX_FILENAME, XLSX_CONTENT_TYPE)
        }

        ("POST", "/api/analyse") => {
            let bytes = read_body(&mut req, cfg.max_body_bytes)?;
            let text = String::from_utf8(bytes).map_err(|e| ServerError::Decode(e.to_string()))?;
            json_response(&analyse(&text))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Reads the whole request body, refusing anything over `limit` bytes.
fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buf)?;

    if buf.len() > limit {
        warn!(limit, "request body too large");
        return Err(ServerError::BadRequest(format!(
            "request body exceeds {limit} bytes"
        )));
    }
    Ok(buf)
}

/// The `listings` field of an urlencoded form body. Missing field reads as empty.
fn read_listings_form(req: &mut Request, cfg: &AppConfig) -> Result<String, ServerError> {
    let body = read_body(req, cfg.max_body_bytes)?;

    let listings = url::form_urlencoded::parse(&body)
        .find(|(key, _)| key == "listings")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    Ok(listings)
}

fn read_export_listings(req: &mut Request, cfg: &AppConfig) -> Result<String, ServerError> {
    let listings = read_listings_form(req, cfg)?;
    if listings.trim().is_empty() {
        return Err(ServerError::BadRequest("nothing to export".into()));
    }
    Ok(listings)
}
