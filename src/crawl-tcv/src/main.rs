use std::path::PathBuf;

use clap::Parser;
use core_tcv::{CrawlConfig, Fetcher, setup_logging};
use crawl_tcv::{Error, crawl};
use data_model_tcv::PgJobSink;
use data_model_tcv::db::{apply_init_script, establish_connection_pool};

#[derive(Parser, Debug)]
#[command(name = "crawl-tcv")]
#[command(about = "Crawl TopCV job listings into PostgreSQL", long_about = None)]
struct CrawlCli {
    /// Listing page to start from. Overrides TCV_START_URL.
    #[arg(long, value_parser = validate_url)]
    start_url: Option<String>,
    /// Only scrape the first listing page.
    #[arg(long)]
    single_page: bool,
    /// Log and skip job pages that fail to parse instead of aborting the crawl.
    #[arg(long)]
    skip_failed_pages: bool,
    /// SQL script to run against the database before crawling (e.g. sql/init.sql).
    #[arg(long, value_parser = validate_input_file)]
    init_schema: Option<PathBuf>,
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file., if it exists
    dotenvy::dotenv().ok();

    setup_logging("crawl_tcv=info,core_tcv=info,data_model_tcv=info");

    let cli = CrawlCli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Crawl aborted: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CrawlCli) -> Result<(), Error> {
    let mut config = CrawlConfig::from_env().map_err(Error::ConfigError)?;
    if let Some(start_url) = cli.start_url {
        config.start_url = start_url;
    }
    if cli.single_page {
        config.recursive = false;
    }
    if cli.skip_failed_pages {
        config.skip_failed_pages = true;
    }

    tracing::info!(
        "Crawl starting at {} (recursive: {}, max retries: {}, pause: {:?})",
        config.start_url,
        config.recursive,
        config.max_retries,
        config.pause_between_jobs
    );

    let pool = establish_connection_pool(&config.database_url).await?;

    if let Some(script_path) = cli.init_schema {
        let script = std::fs::read_to_string(&script_path)?;
        apply_init_script(&pool, &script).await?;
    }

    let fetcher = Fetcher::from_config(&config)?;
    let mut sink = PgJobSink::new(pool);

    let summary = crawl(&fetcher, &mut sink, &config).await?;
    tracing::info!(
        "Done: {} saved, {} skipped out of {} job pages",
        summary.saved,
        summary.skipped,
        summary.yielded
    );
    Ok(())
}
