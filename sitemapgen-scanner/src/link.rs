use url::Url;

/// Drop everything from the first `#` onward.
pub fn strip_fragment(url: &str) -> &str {
    match url.split_once('#') {
        Some((head, _)) => head,
        None => url,
    }
}

/// Resolve an anchor target against `base` and strip its fragment.
///
/// Handles relative (`x`, `../x`, `/x`), protocol-relative (`//host/x`) and
/// absolute targets. Anything that does not resolve to an http(s) URL is
/// skipped.
pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let resolved = base.join(href.trim()).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(strip_fragment(resolved.as_str()).to_string()),
        _ => None,
    }
}
