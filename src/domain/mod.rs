pub mod beauty;
pub mod hook;
pub mod listing;
pub mod location;
pub mod pipeline;
pub mod price;
pub mod scores;

pub use pipeline::analyse;
