mod export;
mod prompt;
mod signal;

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

use carscout_scraper::{run_search, CancellationToken, ColumnExclusion, InventoryClient, StopReason};

#[derive(Debug, Parser)]
#[command(name = "carscout")]
#[command(about = "Search used-car inventory and export the listings to CSV")]
struct Cli {
    #[command(flatten)]
    filters: FilterArgs,

    /// CSV file to write (defaults to a timestamped file in the current directory)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Run the search without writing a file
    #[arg(long, conflicts_with = "output")]
    no_export: bool,

    /// Extra column to drop from the output; repeatable or comma-separated
    #[arg(long = "exclude", value_name = "COLUMN", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Fail instead of prompting when the page count is not given
    #[arg(long)]
    no_prompt: bool,
}

/// Search filters. Any left unset are prompted for interactively.
#[derive(Debug, Default, Args)]
pub(crate) struct FilterArgs {
    /// Number of result pages to fetch
    #[arg(long)]
    pub pages: Option<String>,

    #[arg(long)]
    pub price_max: Option<String>,

    #[arg(long)]
    pub mileage_max: Option<String>,

    #[arg(long)]
    pub year_min: Option<String>,

    #[arg(long)]
    pub year_max: Option<String>,

    /// Search centre (blank falls back to 90001)
    #[arg(long)]
    pub zip: Option<String>,

    /// Make to restrict results to
    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub body_style: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = carscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let filter = if cli.no_prompt {
        prompt::collect_filter(&cli.filters, &mut prompt::NonInteractive)?
    } else {
        prompt::collect_filter(&cli.filters, &mut prompt::DialoguerPrompter::default())?
    };
    prompt::print_filter_summary(&filter);

    let exclusion = ColumnExclusion::new(
        config
            .excluded_columns
            .iter()
            .cloned()
            .chain(cli.exclude.iter().cloned()),
    );
    let client = InventoryClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build inventory client: {e}"))?;

    println!("Searching...\n");

    let cancel = CancellationToken::new();
    let listener = signal::spawn_interrupt_listener(cancel.clone());
    let outcome = run_search(&client, &filter, &exclusion, &cancel).await;
    listener.abort();

    match &outcome.stop {
        StopReason::Completed => tracing::info!(
            pages = outcome.pages_fetched,
            rows = outcome.table.len(),
            "search complete"
        ),
        StopReason::Cancelled { after_page } => tracing::info!(
            after_page,
            rows = outcome.table.len(),
            "search interrupted; keeping listings fetched so far"
        ),
        StopReason::Failed { page, .. } => tracing::warn!(
            page,
            rows = outcome.table.len(),
            "search aborted; keeping listings fetched so far"
        ),
    }

    if cli.no_export {
        println!(
            "{} listings across {} columns (export skipped)",
            outcome.table.len(),
            outcome.table.columns().len()
        );
        return Ok(());
    }

    // An explicitly named file is always written, even when nothing was fetched.
    let write_empty = cli.output.is_some();
    let path = cli.output.unwrap_or_else(export::default_output_path);
    if export::export_table(&outcome.table, &path, write_empty) {
        println!(
            "Saved {} listings to {}",
            outcome.table.len(),
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests;
