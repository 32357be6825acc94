pub mod download;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

pub use download::{attachment_response, XLSX_CONTENT_TYPE};
// Normal HTML response
pub use html::html_response;
pub use json::json_response;
