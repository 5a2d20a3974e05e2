//! Remote image allow-list
//!
//! Patterns look like `https://cdn.example.com` or
//! `https://*.images.example.com/menu`. A URL matches when the scheme is
//! equal, the host is equal (or a subdomain for `*.` patterns), and the path
//! starts with the pattern's path prefix.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePattern {
    scheme: String,
    host: HostPattern,
    path_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostPattern {
    Exact(String),
    /// `*.example.com`: any subdomain, not the apex
    Subdomain(String),
}

impl RemotePattern {
    /// Parse `scheme://host[/prefix]`; `None` for malformed patterns
    pub fn parse(pattern: &str) -> Option<Self> {
        let (scheme, host, path) = split_url(pattern.trim())?;
        let host = match host.strip_prefix("*.") {
            Some(rest) if !rest.is_empty() => HostPattern::Subdomain(rest.to_string()),
            Some(_) => return None,
            None => HostPattern::Exact(host),
        };
        Some(Self {
            scheme,
            host,
            path_prefix: path.trim_end_matches('/').to_string(),
        })
    }

    pub fn matches(&self, url: &str) -> bool {
        let Some((scheme, host, path)) = split_url(url.trim()) else {
            return false;
        };
        if scheme != self.scheme {
            return false;
        }
        let host_ok = match &self.host {
            HostPattern::Exact(h) => host == *h,
            HostPattern::Subdomain(base) => host
                .strip_suffix(base.as_str())
                .is_some_and(|sub| sub.len() > 1 && sub.ends_with('.')),
        };
        host_ok
            && (self.path_prefix.is_empty()
                || path == self.path_prefix
                || path.starts_with(&format!("{}/", self.path_prefix)))
    }
}

/// Which remote images may be loaded
#[derive(Debug, Clone, Default)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl ImagePolicy {
    /// Build from configured patterns; malformed entries are skipped with a warning
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| {
                let raw: &str = p.as_ref();
                let parsed = RemotePattern::parse(raw);
                if parsed.is_none() {
                    tracing::warn!(pattern = raw, "ignoring malformed image pattern");
                }
                parsed
            })
            .collect();
        Self { patterns }
    }

    /// Relative paths are local assets and always allowed
    pub fn allows(&self, url: &str) -> bool {
        if url.starts_with('/') && !url.starts_with("//") {
            return true;
        }
        self.patterns.iter().any(|p| p.matches(url))
    }

    /// The image to display, or `None` to fall back to a placeholder
    pub fn resolve<'a>(&self, image: Option<&'a str>) -> Option<&'a str> {
        image.filter(|url| !url.trim().is_empty() && self.allows(url))
    }
}

/// `(scheme, lowercase host, path)`; query and fragment dropped
fn split_url(url: &str) -> Option<(String, String, String)> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() {
        return None;
    }
    let rest = rest.split(['?', '#']).next().unwrap_or("");
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() {
        return None;
    }
    Some((scheme.to_ascii_lowercase(), host.to_ascii_lowercase(), path.to_string()))
}
