pub mod client;
pub mod error;
pub mod flatten;
pub mod search;
pub mod table;
pub mod types;

pub use client::InventoryClient;
pub use error::ScraperError;
pub use flatten::flatten_listing;
pub use search::{run_search, ListingSource, SearchOutcome, StopReason};
pub use table::{CellValue, ColumnExclusion, ListingRow, ResultTable};
pub use tokio_util::sync::CancellationToken;
