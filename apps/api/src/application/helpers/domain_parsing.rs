use url::Url;

/// Build the per-site slug used as the local part of the sending address.
///
/// The host is taken in its ASCII (punycode) form, a leading `www.` is
/// dropped, and sub-path installs are flattened into the slug:
/// `https://www.Example.com/blog/` -> `example-com-blog`.
pub fn site_slug(site_url: &str) -> Option<String> {
    let url = Url::parse(site_url.trim()).ok()?;
    let host = url.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    let mut parts = vec![host.to_string()];
    if let Some(segments) = url.path_segments() {
        parts.extend(
            segments
                .filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase()),
        );
    }

    let slug = sanitize_slug(&parts.join("-"));
    if slug.is_empty() { None } else { Some(slug) }
}

/// `{slug}@{sending_domain}` for the given site URL.
pub fn derive_from_address(site_url: &str, sending_domain: &str) -> Option<String> {
    let domain = sending_domain.trim().trim_start_matches('@').to_lowercase();
    if domain.is_empty() {
        return None;
    }
    site_slug(site_url).map(|slug| format!("{}@{}", slug, domain))
}

/// Lowercase alphanumerics and hyphens, no leading or trailing hyphen.
///
/// Hyphen runs are kept so punycode labels (`xn--`) survive.
fn sanitize_slug(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}
