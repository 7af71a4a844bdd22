//! Sequential crawl: listing walk, template dispatch, politeness pause, fetch,
//! extraction and upsert, one detail page at a time.

mod errors;

pub use errors::Error;

use std::time::Duration;

use core_tcv::{CrawlConfig, Fetcher, JobRecord, Transport, select_extractor, walk};
use data_model_tcv::JobSink;
use futures::TryStreamExt;

/// Counts for a finished crawl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Detail-page URLs produced by the listing walk
    pub yielded: usize,
    /// Records handed to the sink
    pub saved: usize,
    /// Detail pages dropped because `skip_failed_pages` was set
    pub skipped: usize,
}

/// Walks the listings from `config.start_url` and upserts one record per detail page.
///
/// The first failure aborts the run, unless `config.skip_failed_pages` is set, in which
/// case failures confined to a single detail page are logged and skipped. Rate-limit
/// exhaustion, transport, listing-page and persistence failures always abort.
pub async fn crawl<T, S>(fetcher: &Fetcher<T>, sink: &mut S, config: &CrawlConfig) -> Result<CrawlSummary, Error>
where
    T: Transport,
    S: JobSink + Send,
{
    let job_urls = walk(fetcher, &config.start_url, config.recursive);
    futures::pin_mut!(job_urls);

    let mut summary = CrawlSummary::default();
    while let Some(job_url) = job_urls.try_next().await? {
        summary.yielded += 1;
        match process_job(fetcher, &job_url, config.pause_between_jobs).await {
            Ok(record) => {
                sink.upsert(&record).await?;
                summary.saved += 1;
                tracing::info!("Saved job {} ({})", record.job_id, record.job_title);
            }
            Err(error) if config.skip_failed_pages && error.is_page_level() => {
                summary.skipped += 1;
                tracing::warn!("[SKIP] Job page {}: {}", job_url, error);
            }
            Err(error) => return Err(error.into()),
        }
    }

    tracing::info!(
        "Crawl finished: {} job URLs, {} saved, {} skipped",
        summary.yielded,
        summary.saved,
        summary.skipped
    );
    Ok(summary)
}

/// Selects the template for the URL, pauses, then fetches and extracts the detail page.
pub async fn process_job<T: Transport>(
    fetcher: &Fetcher<T>,
    job_url: &str,
    pause_between_jobs: Duration,
) -> core_tcv::Result<JobRecord> {
    tracing::info!("Scraping job info at {}", job_url);
    let extractor = select_extractor(job_url)?;

    tokio::time::sleep(pause_between_jobs).await;

    let html = fetcher.get_text(job_url).await?;
    extractor.extract_job(&html, job_url)
}
