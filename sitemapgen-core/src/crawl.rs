use colored::Colorize;
use sitemapgen_scanner::error::Result;
use sitemapgen_scanner::{
    CancellationFlag, CrawlEvent, Crawler, DomainRule, EventCallback, LinkRecord, ScanError,
};
use std::sync::Arc;

/// Options for configuring a crawl operation
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub seed: String,
    pub exclude_base: bool,
    pub silent: bool,
    pub timeout_secs: u64,
    pub domain_rule: DomainRule,
}

impl CrawlOptions {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            exclude_base: false,
            silent: false,
            timeout_secs: Crawler::DEFAULT_TIMEOUT_SECS,
            domain_rule: DomainRule::default(),
        }
    }
}

/// Console line for a crawl event, if it has one.
pub fn format_event(event: CrawlEvent<'_>) -> Option<String> {
    match event {
        CrawlEvent::Discovered { url, .. } => Some(format!("Crawling {}...", url)),
        CrawlEvent::Recorded { .. } => None,
        CrawlEvent::BranchFailed { url, error } => Some(format_failure(url, error)),
    }
}

fn format_failure(url: &str, error: &ScanError) -> String {
    if error.is_domain_failure() {
        format!("Crawl error: \"{}\" failed the same-domain check!", url)
    } else if let ScanError::Cancelled(_) = error {
        format!("Crawl skipped: \"{}\" (stop requested)", url)
    } else {
        format!("Crawl error: can't reach \"{}\" ({})", url, error)
    }
}

/// Prints crawl progress to stdout, failures in red.
pub fn console_callback() -> EventCallback {
    Arc::new(|event: CrawlEvent<'_>| {
        let Some(line) = format_event(event) else {
            return;
        };
        match event {
            CrawlEvent::BranchFailed { .. } => println!("{}", line.red()),
            _ => println!("{}", line),
        }
    })
}

/// Execute a crawl with the given options
/// Returns the records in discovery order
pub async fn execute_crawl(
    options: CrawlOptions,
    cancel: &CancellationFlag,
) -> Result<Vec<LinkRecord>> {
    let CrawlOptions {
        seed,
        exclude_base,
        silent,
        timeout_secs,
        domain_rule,
    } = options;

    let crawler = Crawler::with_timeout(timeout_secs)?
        .with_exclude_base(exclude_base)
        .with_silent(silent)
        .with_domain_rule(domain_rule)
        .with_event_callback(console_callback());

    let registry = crawler.crawl(&seed, cancel).await?;
    Ok(registry.into_records())
}

/// `title<TAB>url`, one line per record.
pub fn generate_crawl_report(records: &[LinkRecord]) -> String {
    let mut report = String::new();
    for record in records {
        report.push_str(&format!("{}\t{}\n", record.title, record.url));
    }
    report
}
