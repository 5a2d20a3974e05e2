//! Backend API wrappers
//!
//! One method per endpoint, grouped by resource. Each wrapper builds the
//! path and query, calls the transport and returns the typed body.

mod contact;
mod employees;
mod job_titles;
mod orders;
mod restaurants;
mod stats;
mod wallet;

use crate::HttpClient;

/// Typed API over an [`HttpClient`] transport
#[derive(Debug, Clone)]
pub struct Api<C> {
    http: C,
}

impl<C: HttpClient> Api<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Borrow the underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Mutable access (e.g. to swap the token after sign-in)
    pub fn http_mut(&mut self) -> &mut C {
        &mut self.http
    }

    pub fn into_inner(self) -> C {
        self.http
    }
}

/// Percent-encode a single path segment (ids supplied by the caller)
pub(crate) fn segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for b in id.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::segment;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("abc-123"), "abc-123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
