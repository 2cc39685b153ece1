// Tests for sitemap serialization

use chrono::NaiveDate;
use sitemapgen_core::sitemap::{SITEMAP_NAMESPACE, render_sitemap, write_sitemap};
use sitemapgen_scanner::LinkRecord;
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

fn records() -> Vec<LinkRecord> {
    vec![
        LinkRecord::new("Home", "http://a.b.com/"),
        LinkRecord::new("X", "http://a.b.com/x"),
    ]
}

// ============================================================================
// Document Structure Tests
// ============================================================================

#[test]
fn test_render_starts_with_declaration() {
    let xml = render_sitemap(&records(), date()).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
}

#[test]
fn test_render_has_namespaced_urlset() {
    let xml = render_sitemap(&records(), date()).unwrap();
    assert!(xml.contains(&format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE)));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[test]
fn test_render_one_url_per_record() {
    let xml = render_sitemap(&records(), date()).unwrap();
    assert_eq!(xml.matches("<url>").count(), 2);
    assert_eq!(xml.matches("</url>").count(), 2);
}

#[test]
fn test_render_entry_fields() {
    let xml = render_sitemap(&records(), date()).unwrap();
    assert!(xml.contains("<loc>http://a.b.com/x</loc>"));
    assert_eq!(xml.matches("<lastmod>2024-03-07</lastmod>").count(), 2);
    assert_eq!(xml.matches("<changefreq>monthly</changefreq>").count(), 2);
    assert_eq!(xml.matches("<priority>1.0</priority>").count(), 2);
}

#[test]
fn test_render_preserves_order() {
    let records = vec![
        LinkRecord::new("", "http://a.b.com/zeta"),
        LinkRecord::new("", "http://a.b.com/alpha"),
        LinkRecord::new("", "http://a.b.com/mid"),
    ];
    let xml = render_sitemap(&records, date()).unwrap();

    let zeta = xml.find("/zeta<").unwrap();
    let alpha = xml.find("/alpha<").unwrap();
    let mid = xml.find("/mid<").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn test_render_escapes_query_strings() {
    let records = vec![LinkRecord::new("", "http://a.b.com/search?q=1&page=2")];
    let xml = render_sitemap(&records, date()).unwrap();
    assert!(xml.contains("<loc>http://a.b.com/search?q=1&amp;page=2</loc>"));
}

#[test]
fn test_render_titles_are_not_emitted() {
    let records = vec![LinkRecord::new("Secret <Title>", "http://a.b.com/")];
    let xml = render_sitemap(&records, date()).unwrap();
    assert!(!xml.contains("Secret"));
}

#[test]
fn test_render_empty_list() {
    let xml = render_sitemap(&[], date()).unwrap();
    assert!(xml.contains("urlset"));
    assert!(!xml.contains("<url>"));
}

#[test]
fn test_lastmod_is_zero_padded() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let xml = render_sitemap(&records(), date).unwrap();
    assert!(xml.contains("<lastmod>2025-01-02</lastmod>"));
}

// ============================================================================
// File Output Tests
// ============================================================================

#[test]
fn test_write_sitemap_creates_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sitemap.xml");

    write_sitemap(&records(), date(), &path)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, render_sitemap(&records(), date())?);
    Ok(())
}

#[test]
fn test_write_sitemap_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sitemap.xml");
    std::fs::write(&path, "stale")?;

    write_sitemap(&records(), date(), &path)?;

    assert!(!std::fs::read_to_string(&path)?.contains("stale"));
    Ok(())
}

#[test]
fn test_write_sitemap_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/sitemap.xml");

    let result = write_sitemap(&records(), date(), &path);
    assert!(matches!(result, Err(sitemapgen_core::SitemapError::Io(_))));
}
