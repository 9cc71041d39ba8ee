//! Interrupt handling for a running search.
//!
//! The listener only cancels the token. The search loop notices at its next
//! page boundary, so the page in flight is kept and the table is still
//! exported.

use carscout_scraper::CancellationToken;
use tokio::task::JoinHandle;

/// Spawns a task that cancels `cancel` on the first Ctrl-C.
pub(crate) fn spawn_interrupt_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!(
                    "interrupt received; saving scraped listings after the current page"
                );
                cancel.cancel();
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not listen for ctrl-c; interrupts will not be graceful");
            }
        }
    })
}
