//! Same-site detection.
//!
//! The default rule treats the first run of three dot-separated alphabetic
//! labels in a URL (`www.example.com`) as the site's signature. It ignores
//! scheme, port and path, so `http://www.example.com` and
//! `https://www.example.com:8443/docs` match, while a bare `example.com` has
//! no signature at all. [`DomainRule::ExactHost`] compares parsed hostnames
//! instead.

use crate::error::{Result, ScanError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static DOTTED_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+\.[A-Za-z]+\.[A-Za-z]+").unwrap());

/// How a URL is reduced to the value compared for "same site".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainRule {
    /// First `label.label.label` run of ASCII letters anywhere in the URL.
    #[default]
    DottedTriple,
    /// Lowercased hostname as parsed by `url`.
    ExactHost,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainSignature(String);

impl fmt::Display for DomainSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl DomainRule {
    pub fn signature(self, url: &str) -> Result<DomainSignature> {
        match self {
            DomainRule::DottedTriple => DOTTED_TRIPLE
                .find(url)
                .map(|m| DomainSignature(m.as_str().to_string()))
                .ok_or_else(|| ScanError::NoDomainSignature(url.to_string())),
            DomainRule::ExactHost => Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
                .map(DomainSignature)
                .ok_or_else(|| ScanError::NoDomainSignature(url.to_string())),
        }
    }

    /// Check `url` against an already computed signature of the seed.
    pub fn check(self, url: &str, expected: &DomainSignature) -> Result<()> {
        let found = self.signature(url)?;
        if &found == expected {
            Ok(())
        } else {
            Err(ScanError::DomainMismatch {
                url: url.to_string(),
                expected: expected.to_string(),
                found: found.to_string(),
            })
        }
    }
}
