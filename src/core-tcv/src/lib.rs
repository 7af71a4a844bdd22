//! # TopCV job crawler core
//!
//! Everything between a listing URL and a normalized [`JobRecord`]:
//!
//! - [`Fetcher`]: HTTP requests with fixed-delay retry on HTTP 429
//! - [`walk`]: lazy pagination over listing pages, yielding detail-page URLs
//! - [`select_extractor`]: picks the page template from the URL
//! - [`Extractor`]: template-specific field extraction and normalization
//!
//! Persistence lives in `data-model-tcv`; the sequential driver in `crawl-tcv`.

mod common;
mod config;
mod errors;
pub mod extract;
pub mod fetch;
pub mod listing;

pub use common::env::{number_from_env, seconds_from_env, string_from_env};
pub use common::logging::setup_logging;
pub use config::{CrawlConfig, CrawlConfigBuilder, DEFAULT_START_URL, DEFAULT_USER_AGENT};
pub use data_model_tcv::JobRecord;
pub use errors::{CrawlError, Result};
pub use extract::{Extractor, select_extractor};
pub use fetch::{Fetcher, RawResponse, ReqwestTransport, Transport};
pub use listing::{ListingPage, parse_listing_page, walk};
