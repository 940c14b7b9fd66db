use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use docview::browser::Browser;
use docview::clients::SummaryClient;
use docview::core::config::{AppConfig, SearchFallback, parse_timeout_secs};
use docview::core::models::TargetId;
use docview::features::{ChatLauncher, SummaryRequester};
use docview::page::{Page, Visibility, escape_html};

#[derive(Parser, Debug)]
#[command(name = "docview")]
#[command(
    about = "Request document summaries and chat handoffs from the document search service",
    long_about = None
)]
struct Cli {
    /// Origin of the document search service.
    #[arg(long, env = "DOCVIEW_BASE_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// What a failed search-result summary shows: `excerpt` or `message`.
    #[arg(long, env = "DOCVIEW_SEARCH_FALLBACK", default_value = "excerpt")]
    search_fallback: String,

    /// Request timeout in seconds; the transport default when unset.
    #[arg(long, env = "DOCVIEW_REQUEST_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize one file of a document and print the rendered fragment.
    Summarize {
        document_id: String,
        #[arg(long, default_value_t = 0)]
        file_index: u32,
    },
    /// Summarize a search hit with respect to a query.
    SearchSummary {
        document_id: String,
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 0)]
        result_index: u32,
        #[arg(long, default_value_t = 0)]
        file_index: u32,
        /// Plain-text file holding the hit's original content, used as the
        /// excerpt when summarization fails.
        #[arg(long)]
        original: Option<PathBuf>,
    },
    /// Hand a document over to the chat view and print where it went.
    Chat { document_id: String },
}

impl Cli {
    fn config(&self) -> Result<AppConfig> {
        let fallback: SearchFallback = self.search_fallback.parse()?;
        let timeout = self
            .timeout_secs
            .as_deref()
            .map(parse_timeout_secs)
            .transpose()?;
        Ok(AppConfig::new(&self.base_url)?
            .with_search_fallback(fallback)
            .with_request_timeout(timeout))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    docview::setup_logging();
    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.command {
        Commands::Summarize {
            document_id,
            file_index,
        } => {
            let page = Page::new().with_element(
                TargetId::Summary(file_index).dom_id(),
                "",
                Visibility::Visible,
            );
            let requester = requester(&config, page.clone())?;
            requester.summarize_file(&document_id, file_index).await?;
            print_slot(&page, &TargetId::Summary(file_index));
        }
        Commands::SearchSummary {
            document_id,
            query,
            result_index,
            file_index,
            original,
        } => {
            let mut page = Page::new().with_element(
                TargetId::SummaryContent(result_index).dom_id(),
                "",
                Visibility::Visible,
            );
            if let Some(path) = original {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                page = page.with_element(
                    TargetId::OriginalContent(result_index).dom_id(),
                    &escape_html(&text),
                    Visibility::Visible,
                );
            }
            let requester = requester(&config, page.clone())?;
            requester
                .summarize_search_result(&document_id, result_index, file_index, &query)
                .await?;
            print_slot(&page, &TargetId::SummaryContent(result_index));
        }
        Commands::Chat { document_id } => {
            let browser = Browser::new(Page::new(), "/document");
            match ChatLauncher::new(&browser).launch(Some(&document_id)) {
                Some(handoff) => println!(
                    "{} <- {} (session {})",
                    browser.location(),
                    handoff.document_id,
                    handoff.session_id
                ),
                None => error!("No document id given; chat not started"),
            }
        }
    }

    Ok(())
}

fn requester(config: &AppConfig, page: Page) -> Result<SummaryRequester> {
    let client = SummaryClient::from_config(config)?;
    Ok(SummaryRequester::new(client, page, config.search_fallback))
}

fn print_slot(page: &Page, target: &TargetId) {
    if let Some(html) = page.inner_html(target) {
        println!("{html}");
    }
}
