use crate::error::{Result, ScanError};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Title and raw anchor targets of a fetched HTML document.
///
/// `title` is the text of the first `<title>` element with surrounding
/// whitespace trimmed, so `<title>\n  Home\n</title>` yields `Home`. It is
/// empty when the document has no title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    /// `href` values in document order, unresolved.
    pub hrefs: Vec<String>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let hrefs = document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect();

        Self { title, hrefs }
    }
}

fn is_html(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| {
            let ct = ct.to_ascii_lowercase();
            ct.contains("text/html") || ct.contains("application/xhtml+xml")
        })
        .unwrap_or(false)
}

/// GET `url` and parse it. Non-2xx answers and non-HTML bodies are errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page> {
    debug!("Fetching {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScanError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    if !is_html(content_type.as_deref()) {
        return Err(ScanError::NotHtml {
            url: url.to_string(),
            content_type,
        });
    }

    let body = response.text().await?;
    Ok(Page::parse(&body))
}
