//! Template-specific field extraction from job detail pages.

mod brand;
pub(crate) mod dom;
pub mod fields;
mod normal;

pub use brand::BrandLayout;

use chrono::{Local, NaiveDate};
use scraper::Html;
use url::Url;

use crate::JobRecord;
use crate::errors::{CrawlError, Result};

/// The closed set of detail-page templates, keyed by the URL's first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// `/viec-lam/...`
    Normal,
    /// `/brand/...`, either the diamond or the premium layout
    Brand,
}

impl Extractor {
    /// The path segment that selects this extractor.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Normal => "viec-lam",
            Self::Brand => "brand",
        }
    }

    /// Parses a fetched detail page into a job record, computing relative
    /// deadlines from the local calendar date.
    pub fn extract_job(&self, html: &str, url: &str) -> Result<JobRecord> {
        self.extract_job_on(html, url, Local::now().date_naive())
    }

    /// Same as [`Extractor::extract_job`] with an explicit reference date for
    /// "N days left" deadlines.
    ///
    /// # Errors
    ///
    /// Fails with [`CrawlError::StructuralParse`] when an element the template
    /// needs is missing and with [`CrawlError::InvalidField`] when a value
    /// cannot be normalized. No partial record is produced.
    pub fn extract_job_on(&self, html: &str, url: &str, today: NaiveDate) -> Result<JobRecord> {
        let url = Url::parse(url)?;
        let document = Html::parse_document(html);
        let root = document.root_element();
        match self {
            Self::Normal => normal::extract(root, &url),
            Self::Brand => brand::extract(root, &url, today),
        }
    }
}

/// Picks the extractor for a detail-page URL from its first path segment.
///
/// # Errors
///
/// [`CrawlError::UnsupportedUrl`] for any segment other than `viec-lam` or
/// `brand`: unmapped site sections must not produce records.
///
/// ```
/// # use core_tcv::{Extractor, select_extractor};
/// let extractor = select_extractor("https://www.topcv.vn/viec-lam/rust-dev/123.html").unwrap();
/// assert_eq!(extractor, Extractor::Normal);
/// ```
pub fn select_extractor(url: &str) -> Result<Extractor> {
    let parsed = Url::parse(url)?;
    let keyword = parsed.path_segments().and_then(|mut segments| segments.next()).unwrap_or("");
    match keyword {
        "viec-lam" => Ok(Extractor::Normal),
        "brand" => Ok(Extractor::Brand),
        _ => Err(CrawlError::UnsupportedUrl(url.to_string())),
    }
}
