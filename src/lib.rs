/// docview - document summary and chat glue for the document search UI.
///
/// This crate drives the per-page interactions of the document viewer:
/// 1. Requesting AI summaries of documents and search results from the
///    summary service and rendering them (or a fallback) into the page
/// 2. Toggling collapsible sections and showing the error banner
/// 3. Handing a document over to the chat view
///
/// # Architecture
///
/// The system uses:
/// - A headless, typed [`page::Page`] in place of the browser DOM
/// - reqwest for the `POST /api/summary/{docid}` call
/// - Per-element generation counters so late responses never overwrite newer ones
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use docview::clients::SummaryClient;
/// use docview::core::config::AppConfig;
/// use docview::features::{Outcome, SummaryRequester};
/// use docview::page::Page;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     docview::setup_logging();
///
///     let config = AppConfig::new("http://localhost:5000")?;
///     let page = Page::from_html(r#"<div id="summary-0"></div>"#);
///     let requester = SummaryRequester::new(
///         SummaryClient::from_config(&config)?,
///         page.clone(),
///         config.search_fallback,
///     );
///
///     match requester.summarize_file("mu2e-doc-1234", 0).await? {
///         Outcome::Rendered => println!("Summary ready"),
///         Outcome::Fallback => println!("Summary failed, fallback shown"),
///         Outcome::Stale => println!("Superseded by a newer request"),
///     }
///
///     Ok(())
/// }
/// ```
pub mod browser;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod page;
pub mod prompt;

pub use errors::DocViewError;

/// Configure structured JSON logging.
///
/// The level is taken from `RUST_LOG` (default `info`). Calling this more than
/// once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// docview::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
