//! Error types for fetching, pagination and extraction.

use thiserror::Error;

/// Main error type for crawl operations.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Server kept answering 429 after every retry was spent
    #[error("Too many requests sent to {url}; still rate limited after {attempts} attempts (status code 429)")]
    RateLimitExceeded { url: String, attempts: u32 },

    /// Non-200, non-429 response
    #[error("HTTP error {status} from {url}")]
    HttpError { status: u16, url: String },

    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configured header value is not a valid HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// No extractor exists for the URL's first path segment
    #[error("Unsupported URL (no extractor for this page template): {0}")]
    UnsupportedUrl(String),

    /// An element the template requires is missing from the page
    #[error("Expected element not found: {0}")]
    StructuralParse(String),

    /// An element was found but its text could not be normalized
    #[error("Cannot parse {field} from '{value}'")]
    InvalidField { field: &'static str, value: String },

    /// CSS selector failed to compile
    #[error("Invalid CSS selector '{0}'")]
    InvalidSelector(String),
}

impl CrawlError {
    /// True for failures confined to a single detail page: the page can be
    /// skipped without invalidating the rest of the crawl.
    pub fn is_page_level(&self) -> bool {
        match self {
            Self::HttpError { .. }
            | Self::InvalidUrl(_)
            | Self::UnsupportedUrl(_)
            | Self::StructuralParse(_)
            | Self::InvalidField { .. } => true,
            Self::RateLimitExceeded { .. } | Self::Transport(_) | Self::InvalidHeader(_) | Self::InvalidSelector(_) => {
                false
            }
        }
    }
}

/// Type alias for Result with CrawlError
pub type Result<T> = std::result::Result<T, CrawlError>;
