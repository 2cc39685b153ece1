pub mod crawl;
pub mod sitemap;

pub use crawl::{CrawlOptions, execute_crawl, format_event, generate_crawl_report};
pub use sitemap::{SitemapError, render_sitemap, write_sitemap};
