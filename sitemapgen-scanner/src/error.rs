use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{url} answered with HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("{url} is not an HTML document (content-type: {})", content_type.as_deref().unwrap_or("none"))]
    NotHtml {
        url: String,
        content_type: Option<String>,
    },

    #[error("No domain signature in {0}")]
    NoDomainSignature(String),

    #[error("{url} is outside {expected} (found {found})")]
    DomainMismatch {
        url: String,
        expected: String,
        found: String,
    },

    #[error("Crawl cancelled before fetching {0}")]
    Cancelled(String),
}

impl ScanError {
    /// True for failures of the same-domain check, including URLs that yield
    /// no signature at all.
    pub fn is_domain_failure(&self) -> bool {
        matches!(
            self,
            ScanError::NoDomainSignature(_) | ScanError::DomainMismatch { .. }
        )
    }

    /// True for failures while retrieving or decoding a page.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ScanError::HttpError(_) | ScanError::UnexpectedStatus { .. } | ScanError::NotHtml { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
