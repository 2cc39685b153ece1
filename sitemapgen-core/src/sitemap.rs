//! sitemaps.org `urlset` output.
//!
//! Every entry shares one `lastmod` date, taken when the run started, and the
//! same `changefreq`/`priority` values.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sitemapgen_scanner::LinkRecord;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const CHANGE_FREQUENCY: &str = "monthly";
pub const PRIORITY: &str = "1.0";
pub const LASTMOD_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sitemap is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, SitemapError>;

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render `records` as a sitemap, one `<url>` per record in the given order.
pub fn render_sitemap(records: &[LinkRecord], lastmod: NaiveDate) -> Result<String> {
    let lastmod = lastmod.format(LASTMOD_FORMAT).to_string();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
    ))?;

    for record in records {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &record.url)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        write_text_element(&mut writer, "changefreq", CHANGE_FREQUENCY)?;
        write_text_element(&mut writer, "priority", PRIORITY)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Render and write the sitemap to `path`, replacing any existing file.
pub fn write_sitemap(records: &[LinkRecord], lastmod: NaiveDate, path: &Path) -> Result<()> {
    let xml = render_sitemap(records, lastmod)?;
    std::fs::write(path, xml)?;
    info!("Wrote {} sitemap entries to {}", records.len(), path.display());
    Ok(())
}
