use crate::cancel::CancellationFlag;
use crate::domain::{DomainRule, DomainSignature};
use crate::error::{Result, ScanError};
use crate::link::resolve_link;
use crate::page::{Page, fetch_page};
use crate::registry::{LinkRecord, LinkRegistry};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Notifications emitted while a crawl runs.
#[derive(Debug, Clone, Copy)]
pub enum CrawlEvent<'a> {
    /// A link was reached for the first time and is about to be crawled.
    Discovered { url: &'a str },
    /// A page was fetched and added to the registry.
    Recorded { record: &'a LinkRecord },
    /// A branch was abandoned. Siblings and ancestors carry on.
    BranchFailed { url: &'a str, error: &'a ScanError },
}

pub type EventCallback = Arc<dyn Fn(CrawlEvent<'_>) + Send + Sync>;

/// Single-threaded, depth-first, same-domain crawler.
pub struct Crawler {
    client: Client,
    exclude_base: bool,
    silent: bool,
    domain_rule: DomainRule,
    event_callback: Option<EventCallback>,
}

/// Remaining anchor targets of one fetched page.
struct Frame {
    depth: usize,
    pending: std::vec::IntoIter<String>,
}

/// Per-run state; dropped when the run ends.
struct CrawlRun {
    base: Url,
    signature: Result<DomainSignature>,
    registry: LinkRegistry,
    visited: HashSet<String>,
}

impl Crawler {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sitemapgen/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            exclude_base: false,
            silent: false,
            domain_rule: DomainRule::default(),
            event_callback: None,
        })
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Keep the seed page out of the registry while still following its links.
    pub fn with_exclude_base(mut self, exclude_base: bool) -> Self {
        self.exclude_base = exclude_base;
        self
    }

    /// Suppress event callbacks.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_domain_rule(mut self, rule: DomainRule) -> Self {
        self.domain_rule = rule;
        self
    }

    pub fn with_event_callback(mut self, callback: EventCallback) -> Self {
        self.event_callback = Some(callback);
        self
    }

    /// Crawl everything reachable from `seed` on the seed's site.
    ///
    /// Only an unparseable seed is an error. Every other failure abandons the
    /// branch it happened in and is reported through the event callback.
    /// Setting `cancel` stops the run before the next fetch; whatever was
    /// collected so far is returned.
    pub async fn crawl(&self, seed: &str, cancel: &CancellationFlag) -> Result<LinkRegistry> {
        let mut base = Url::parse(seed)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", seed, e)))?;
        base.set_fragment(None);
        let seed = base.to_string();

        info!("Starting crawl of {}", seed);

        let mut run = CrawlRun {
            signature: self.domain_rule.signature(&seed),
            base,
            registry: LinkRegistry::new(),
            visited: HashSet::new(),
        };
        run.visited.insert(seed.clone());

        let mut stack: Vec<Frame> = Vec::new();
        if let Some(links) = self.visit(&mut run, &seed, 0, cancel).await {
            stack.push(Frame {
                depth: 0,
                pending: links.into_iter(),
            });
        }

        while let Some(frame) = stack.last_mut() {
            if cancel.should_stop() {
                debug!("Stop requested, abandoning remaining links");
                break;
            }

            let Some(link) = frame.pending.next() else {
                stack.pop();
                continue;
            };
            let depth = frame.depth + 1;

            if run.registry.contains(&link) || !run.visited.insert(link.clone()) {
                continue;
            }

            self.emit(CrawlEvent::Discovered { url: &link });

            if let Some(links) = self.visit(&mut run, &link, depth, cancel).await {
                stack.push(Frame {
                    depth,
                    pending: links.into_iter(),
                });
            }
        }

        info!("Crawl complete. Recorded {} pages", run.registry.len());
        Ok(run.registry)
    }

    /// Fetch one page, record it and return its resolved links, or `None` if
    /// the branch fails.
    async fn visit(
        &self,
        run: &mut CrawlRun,
        url: &str,
        depth: usize,
        cancel: &CancellationFlag,
    ) -> Option<Vec<String>> {
        let Page { title, hrefs } = match self.fetch_branch(run, url, cancel).await {
            Ok(page) => page,
            Err(error) => {
                debug!("Abandoning {}: {}", url, error);
                self.emit(CrawlEvent::BranchFailed { url, error: &error });
                return None;
            }
        };

        if (!self.exclude_base || depth != 0)
            && run.registry.append(LinkRecord::new(title, url))
            && let Some(record) = run.registry.records().last()
        {
            self.emit(CrawlEvent::Recorded { record });
        }

        let links: Vec<String> = hrefs
            .iter()
            .filter_map(|href| resolve_link(&run.base, href))
            .collect();
        debug!("{} yielded {} links", url, links.len());
        Some(links)
    }

    async fn fetch_branch(
        &self,
        run: &CrawlRun,
        url: &str,
        cancel: &CancellationFlag,
    ) -> Result<Page> {
        if cancel.should_stop() {
            return Err(ScanError::Cancelled(url.to_string()));
        }

        let expected = run
            .signature
            .as_ref()
            .map_err(|_| ScanError::NoDomainSignature(run.base.to_string()))?;
        self.domain_rule.check(url, expected)?;

        fetch_page(&self.client, url).await
    }

    fn emit(&self, event: CrawlEvent<'_>) {
        if self.silent {
            return;
        }
        if let Some(ref callback) = self.event_callback {
            callback(event);
        }
    }
}
