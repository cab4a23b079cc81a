use url::Url;

/// Extract the lowercased host from a URL string, if it parses and has one
pub fn host_from_url(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}

/// Check whether `domain` is `pattern` itself or a subdomain of it.
///
/// Matching happens on label boundaries, so `m.facebook.com` matches `facebook.com`
/// while `inbox.com` does not match `x.com`.
pub fn domain_matches(domain: &str, pattern: &str) -> bool {
    let domain = domain.trim_end_matches('.');
    let pattern = pattern.trim_start_matches('.');
    if pattern.is_empty() || domain.len() < pattern.len() {
        return false;
    }

    if domain.eq_ignore_ascii_case(pattern) {
        return true;
    }

    let split = domain.len() - pattern.len();
    domain.is_char_boundary(split)
        && domain[split..].eq_ignore_ascii_case(pattern)
        && domain[..split].ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_from_url() {
        assert_eq!(
            host_from_url("https://WWW.Example.com/a/b?c=1"),
            Some("www.example.com".to_string())
        );
        assert_eq!(host_from_url("not a url"), None);
        assert_eq!(host_from_url(""), None);
    }

    #[test]
    fn test_domain_matches() {
        assert!(domain_matches("facebook.com", "facebook.com"));
        assert!(domain_matches("m.facebook.com", "facebook.com"));
        assert!(domain_matches("WWW.GitHub.com", "github.com"));
        assert!(!domain_matches("inbox.com", "x.com"));
        assert!(!domain_matches("notfacebook.com", "facebook.com"));
        assert!(!domain_matches("com", "facebook.com"));
        assert!(!domain_matches("example.com", ""));
    }
}
