//! Pagination over job listing pages.

use std::collections::HashSet;

use futures::stream::{self, Stream, TryStreamExt};
use scraper::Html;
use url::Url;

use crate::errors::{CrawlError, Result};
use crate::extract::dom::{find, find_all};
use crate::fetch::{Fetcher, Transport};

/// Marker class of a job card on a listing page.
const JOB_CARD: &str = "div.job-item-2";
/// Detail-page link inside a job card.
const JOB_LINK: &str = r#"a[target="_blank"]"#;
const NEXT_LINK: &str = r#"a[rel="next"]"#;

/// Links found on one listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Detail-page URLs of the page's job cards, in page order
    pub job_urls: Vec<String>,
    /// Target of the page's `rel=next` link, if any
    pub next_page: Option<String>,
}

/// Extracts job detail links and the next-page link from a listing page.
/// Relative links are resolved against `page_url`.
///
/// # Errors
///
/// A job card without a detail link is a [`CrawlError::StructuralParse`].
pub fn parse_listing_page(html: &str, page_url: &Url) -> Result<ListingPage> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let mut job_urls = Vec::new();
    for card in find_all(root, JOB_CARD)? {
        let href = find(card, JOB_LINK)?
            .value()
            .attr("href")
            .ok_or_else(|| CrawlError::StructuralParse(format!("{} {}[href]", JOB_CARD, JOB_LINK)))?;
        job_urls.push(page_url.join(href)?.to_string());
    }

    let next_page = match find_all(root, NEXT_LINK)?.first().and_then(|a| a.value().attr("href")) {
        Some(href) if !href.trim().is_empty() => Some(page_url.join(href.trim())?.to_string()),
        _ => None,
    };

    Ok(ListingPage { job_urls, next_page })
}

struct WalkState<'a, T> {
    fetcher: &'a Fetcher<T>,
    next: Option<String>,
    recursive: bool,
    visited: HashSet<String>,
}

/// Lazily yields detail-page URLs, starting at `start_url` and, when
/// `recursive`, following `rel=next` links until a page has none.
///
/// URLs come out in page order. A listing page is only fetched once the
/// previous page's URLs have been consumed. Any fetch or parse failure ends
/// the stream with that error.
pub fn walk<'a, T: Transport>(
    fetcher: &'a Fetcher<T>,
    start_url: &str,
    recursive: bool,
) -> impl Stream<Item = Result<String>> + 'a {
    let state = WalkState {
        fetcher,
        next: Some(start_url.to_string()),
        recursive,
        visited: HashSet::new(),
    };

    stream::try_unfold(state, next_listing_page)
        .map_ok(|urls| stream::iter(urls.into_iter().map(Ok::<String, CrawlError>)))
        .try_flatten()
}

async fn next_listing_page<T: Transport>(mut state: WalkState<'_, T>) -> Result<Option<(Vec<String>, WalkState<'_, T>)>> {
    let Some(url) = state.next.take() else {
        return Ok(None);
    };

    tracing::info!("Scraping job URLs at {}", url);
    let page_url = Url::parse(&url)?;
    let html = state.fetcher.get_text(&url).await?;
    let page = parse_listing_page(&html, &page_url)?;
    tracing::info!("Found {} job URLs at {}", page.job_urls.len(), url);
    state.visited.insert(url);

    state.next = match page.next_page {
        Some(next) if state.recursive && state.visited.contains(&next) => {
            tracing::warn!("Next page {} was already visited. Crawl ended.", next);
            None
        }
        Some(next) if state.recursive => {
            tracing::info!("Page finished. Moving on to next page.");
            Some(next)
        }
        _ => {
            tracing::info!("Page finished. Crawl ended.");
            None
        }
    };

    Ok(Some((page.job_urls, state)))
}
