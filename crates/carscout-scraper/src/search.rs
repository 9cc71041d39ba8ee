//! The paginated fetch-and-accumulate loop.
//!
//! Pages are requested strictly in order, one at a time. Cancellation is
//! cooperative: the token is checked only after a page has been fully
//! fetched and appended, so an in-flight request always runs to completion
//! (or its own timeout). Any fetch error ends the run; the loop never
//! returns an error itself and always hands back whatever it accumulated.

use std::future::Future;

use carscout_core::SearchFilter;
use tokio_util::sync::CancellationToken;

use crate::error::ScraperError;
use crate::flatten::flatten_listing;
use crate::table::{ColumnExclusion, ListingRow, ResultTable};
use crate::types::RawListing;

/// Anything that can produce one page of raw listings.
///
/// Implemented by [`crate::InventoryClient`]; tests substitute scripted
/// sources.
pub trait ListingSource {
    fn fetch_page(
        &self,
        filter: &SearchFilter,
        page: u32,
    ) -> impl Future<Output = Result<Vec<RawListing>, ScraperError>> + Send;
}

/// Why the loop stopped.
#[derive(Debug)]
pub enum StopReason {
    /// Every requested page was fetched.
    Completed,
    /// Cancellation was observed after `after_page` completed.
    Cancelled { after_page: u32 },
    /// Fetching or parsing `page` failed; nothing from that page was kept.
    Failed { page: u32, error: ScraperError },
}

/// Result of one search run. `table` is always present.
#[derive(Debug)]
pub struct SearchOutcome {
    pub table: ResultTable,
    pub pages_fetched: u32,
    pub stop: StopReason,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.stop, StopReason::Completed)
    }
}

/// Runs pages `1..=filter.page_count` against `source`.
///
/// Each page's listings are flattened, stripped of excluded columns, and
/// appended to the result table before the cancellation token is checked.
pub async fn run_search<S>(
    source: &S,
    filter: &SearchFilter,
    exclusion: &ColumnExclusion,
    cancel: &CancellationToken,
) -> SearchOutcome
where
    S: ListingSource,
{
    let mut table = ResultTable::new();
    let mut pages_fetched = 0u32;

    for page in 1..=filter.page_count {
        let listings = match source.fetch_page(filter, page).await {
            Ok(listings) => listings,
            Err(error) => {
                tracing::error!(
                    page,
                    transport = error.is_transport(),
                    error = %error,
                    "page fetch failed; stopping with partial results"
                );
                return SearchOutcome {
                    table,
                    pages_fetched,
                    stop: StopReason::Failed { page, error },
                };
            }
        };

        let rows = to_rows(listings, exclusion);
        let row_count = rows.len();
        table.append_page(rows);
        pages_fetched = page;

        let pages_left = filter.page_count - page;
        tracing::info!(page, rows = row_count, pages_left, "page scraped");

        if cancel.is_cancelled() && pages_left > 0 {
            tracing::info!(
                after_page = page,
                pages_left,
                "cancellation requested; stopping early"
            );
            return SearchOutcome {
                table,
                pages_fetched,
                stop: StopReason::Cancelled { after_page: page },
            };
        }
    }

    SearchOutcome {
        table,
        pages_fetched,
        stop: StopReason::Completed,
    }
}

fn to_rows(listings: Vec<RawListing>, exclusion: &ColumnExclusion) -> Vec<ListingRow> {
    listings
        .into_iter()
        .map(|listing| {
            let mut row = flatten_listing(listing);
            exclusion.apply(&mut row);
            row
        })
        .collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
