/// Domain resolution for the active tab
use crate::config::ExtensionConfig;
use crate::error::Result;
use url::Url;

/// What a tab URL means for the preference lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabDomain {
    /// Browser-internal page (or no URL at all); never scripted
    Reserved,
    /// Parsable URL without a host, e.g. `file:///` or `data:`
    NoHost,
    Host(String),
}

/// Extract the hostname from a URL.
///
/// This is the exact preference key: lowercase, no port, no path, no
/// subdomain folding. `www.example.com` and `example.com` are separate
/// entries.
///
/// Examples:
/// - https://Example.com:8080/wp-admin → example.com
/// - https://blog.example.co.uk/?p=1 → blog.example.co.uk
/// - http://127.0.0.1:8000 → 127.0.0.1
pub fn extract_hostname(url: &str) -> Result<Option<String>> {
    let parsed = Url::parse(url.trim())?;

    Ok(parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase()))
}

/// Classify a tab URL against the reserved prefixes, then extract its host.
pub fn resolve_tab_domain(config: &ExtensionConfig, url: Option<&str>) -> Result<TabDomain> {
    let url = match url {
        Some(url) if !url.is_empty() && !config.is_reserved_url(url) => url,
        _ => return Ok(TabDomain::Reserved),
    };

    Ok(match extract_hostname(url)? {
        Some(host) => TabDomain::Host(host),
        None => TabDomain::NoHost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hostname_basic() {
        assert_eq!(extract_hostname("https://www.example.com").unwrap(), Some("www.example.com".to_string()));
        assert_eq!(extract_hostname("http://example.com/").unwrap(), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_hostname_strips_port_and_path() {
        assert_eq!(
            extract_hostname("https://Example.com:8080/wp-admin/edit.php?post=1").unwrap(),
            Some("example.com".to_string())
        );
        assert_eq!(extract_hostname("http://localhost:3000/").unwrap(), Some("localhost".to_string()));
        assert_eq!(extract_hostname("http://127.0.0.1:8000").unwrap(), Some("127.0.0.1".to_string()));
    }

    #[test]
    fn test_extract_hostname_keeps_subdomains() {
        assert_eq!(
            extract_hostname("https://blog.example.co.uk/?p=1").unwrap(),
            Some("blog.example.co.uk".to_string())
        );
    }

    #[test]
    fn test_extract_hostname_without_host() {
        assert_eq!(extract_hostname("data:text/plain,hello").unwrap(), None);
        assert_eq!(extract_hostname("file:///home/user/index.html").unwrap(), None);
    }

    #[test]
    fn test_extract_hostname_invalid() {
        assert!(extract_hostname("").is_err());
        assert!(extract_hostname("not-a-url").is_err());
    }

    #[test]
    fn test_resolve_reserved_pages() {
        let config = ExtensionConfig::default();
        assert_eq!(resolve_tab_domain(&config, Some("chrome://newtab/")).unwrap(), TabDomain::Reserved);
        assert_eq!(
            resolve_tab_domain(&config, Some("chrome-extension://abc/options.html")).unwrap(),
            TabDomain::Reserved
        );
        assert_eq!(resolve_tab_domain(&config, Some("")).unwrap(), TabDomain::Reserved);
        assert_eq!(resolve_tab_domain(&config, None).unwrap(), TabDomain::Reserved);
    }

    #[test]
    fn test_resolve_regular_pages() {
        let config = ExtensionConfig::default();
        assert_eq!(
            resolve_tab_domain(&config, Some("https://wp.example.org/sample-page/")).unwrap(),
            TabDomain::Host("wp.example.org".to_string())
        );
        assert_eq!(
            resolve_tab_domain(&config, Some("file:///tmp/page.html")).unwrap(),
            TabDomain::NoHost
        );
    }
}
