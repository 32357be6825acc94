pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{read_csv, write_csv};
pub use export_xlsx::write_xlsx;
