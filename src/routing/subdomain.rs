//! Tenant label extraction.
//!
//! # Responsibilities
//! - Find the tenant subdomain label encoded in a request's host
//! - Report absence for the bare root domain and its `www` variant
//!
//! # Design Decisions
//! - Ordered step chain: local, preview, custom domain, generic
//! - A step may decide (label or absent) or defer to the next one
//! - Empty labels, `www`, and the root domain itself are never returned

use crate::config::DomainConfig;
use crate::routing::root_domain::{is_preview, resolve_root_domain, RootDomain};
use crate::routing::target::{is_local, RequestTarget};

/// Outcome of a single extraction step.
enum Step<'a> {
    Label(&'a str),
    Absent,
    Next,
}

/// Everything a step may look at.
struct Probe<'a> {
    domains: &'a DomainConfig,
    url: &'a str,
    hostname: &'a str,
    root: &'a RootDomain,
}

const STEPS: &[for<'a> fn(&Probe<'a>) -> Step<'a>] = &[local, preview, custom, generic];

/// Extract the tenant label for `target`, or `None` for a root-domain request.
pub fn extract_subdomain(domains: &DomainConfig, target: &RequestTarget) -> Option<String> {
    let hostname = target.hostname();
    let root = resolve_root_domain(domains, hostname);
    extract_with_root(domains, target, &root)
}

/// Extraction against an already resolved root domain.
pub fn extract_with_root(
    domains: &DomainConfig,
    target: &RequestTarget,
    root: &RootDomain,
) -> Option<String> {
    let probe = Probe {
        domains,
        url: &target.url,
        hostname: target.hostname(),
        root,
    };

    let label = STEPS.iter().find_map(|step| match step(&probe) {
        Step::Label(label) => Some(Some(label)),
        Step::Absent => Some(None),
        Step::Next => None,
    })??;

    (!label.is_empty() && label != "www" && label != root.domain).then(|| label.to_string())
}

// Local development is decided entirely here, whatever the outcome.
fn local<'a>(probe: &Probe<'a>) -> Step<'a> {
    if !is_local(probe.url) {
        return Step::Next;
    }
    if let Some(label) = label_from_local_url(probe.url) {
        return Step::Label(label);
    }
    if probe.hostname.contains(".localhost") {
        if let Some(label) = probe.hostname.split('.').next() {
            return Step::Label(label);
        }
    }
    Step::Absent
}

/// First `http://<label>.localhost` occurrence in `url`.
fn label_from_local_url(url: &str) -> Option<&str> {
    const SCHEME: &str = "http://";
    url.match_indices(SCHEME).find_map(|(start, _)| {
        let rest = &url[start + SCHEME.len()..];
        let dot = rest.find('.')?;
        let (label, tail) = rest.split_at(dot);
        (!label.is_empty() && tail.starts_with(".localhost")).then_some(label)
    })
}

fn preview<'a>(probe: &Probe<'a>) -> Step<'a> {
    if !is_preview(probe.domains, probe.hostname) {
        return Step::Next;
    }
    match probe.hostname.split(probe.domains.preview_separator.as_str()).next() {
        Some(tenant) => Step::Label(tenant),
        None => Step::Absent,
    }
}

fn custom<'a>(probe: &Probe<'a>) -> Step<'a> {
    let domain = probe.domains.custom_domain.as_str();
    let suffix = probe.domains.custom_suffix();
    if !probe.hostname.ends_with(&suffix) {
        return Step::Next;
    }
    if probe.hostname == domain || probe.hostname == format!("www.{domain}") {
        return Step::Absent;
    }
    match probe.hostname.strip_suffix(suffix.as_str()) {
        Some(candidate) if !candidate.is_empty() && candidate != "www" => Step::Label(candidate),
        _ => Step::Next,
    }
}

fn generic<'a>(probe: &Probe<'a>) -> Step<'a> {
    let root = probe.root.domain.as_str();
    if probe.hostname == root || probe.hostname == format!("www.{root}") {
        return Step::Absent;
    }
    match probe.hostname.strip_suffix(format!(".{root}").as_str()) {
        Some(label) => Step::Label(label),
        None => Step::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(host: &str) -> Option<String> {
        extract_subdomain(&DomainConfig::default(), &RequestTarget::from_host_and_path(host, "/"))
    }

    fn with_fallback(root: &str) -> DomainConfig {
        DomainConfig {
            fallback_root_domain: Some(root.into()),
            ..DomainConfig::default()
        }
    }

    #[test]
    fn test_custom_domain_tenant() {
        assert_eq!(extract("acme.coffeenchat.me").as_deref(), Some("acme"));
        assert_eq!(extract("acme.coffeenchat.me:443").as_deref(), Some("acme"));
    }

    #[test]
    fn test_custom_domain_root_and_www() {
        assert_eq!(extract("coffeenchat.me"), None);
        assert_eq!(extract("www.coffeenchat.me"), None);
    }

    #[test]
    fn test_nested_subdomain_keeps_everything_before_suffix() {
        assert_eq!(extract("a.b.coffeenchat.me").as_deref(), Some("a.b"));
    }

    #[test]
    fn test_preview_deployment() {
        assert_eq!(extract("tenant---feature-x.vercel.app").as_deref(), Some("tenant"));
        assert_eq!(extract("---feature-x.vercel.app"), None);
    }

    #[test]
    fn test_platform_production_host_has_no_label() {
        assert_eq!(extract("subdomaintesttrial.vercel.app"), None);
    }

    #[test]
    fn test_local_url_pattern() {
        let target = RequestTarget::new("http://acme.localhost:3000/dashboard", "acme.localhost:3000", "/dashboard");
        assert_eq!(extract_subdomain(&DomainConfig::default(), &target).as_deref(), Some("acme"));
    }

    #[test]
    fn test_local_falls_back_to_host_header() {
        // URL scheme does not match the http:// pattern.
        let target = RequestTarget::new("https://acme.localhost:3000/", "acme.localhost:3000", "/");
        assert_eq!(extract_subdomain(&DomainConfig::default(), &target).as_deref(), Some("acme"));
    }

    #[test]
    fn test_bare_local_root_has_no_label() {
        assert_eq!(extract("localhost:3000"), None);
        assert_eq!(extract("127.0.0.1:3000"), None);
    }

    #[test]
    fn test_local_www_is_not_a_label() {
        assert_eq!(extract("www.localhost:3000"), None);
    }

    #[test]
    fn test_generic_domain_with_fallback_root() {
        let domains = with_fallback("example.org:8080");
        let extract = |host: &str| {
            extract_subdomain(&domains, &RequestTarget::from_host_and_path(host, "/"))
        };

        assert_eq!(extract("shop.example.org").as_deref(), Some("shop"));
        assert_eq!(extract("example.org"), None);
        assert_eq!(extract("www.example.org"), None);
        assert_eq!(extract("other.net"), None);
    }

    #[test]
    fn test_generic_domain_without_fallback_has_no_label() {
        assert_eq!(extract("shop.example.org"), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(extract("acme.CoffeeNChat.me"), None);
    }

    #[test]
    fn test_root_and_www_variants_never_yield_label() {
        for root in ["example.org", "coffeenchat.me", "app.example.net"] {
            let domains = DomainConfig {
                custom_domain: root.into(),
                fallback_root_domain: Some(root.into()),
                ..DomainConfig::default()
            };
            for host in [root.to_string(), format!("www.{root}")] {
                let target = RequestTarget::from_host_and_path(&host, "/");
                assert_eq!(extract_subdomain(&domains, &target), None, "host {host}");
            }
        }
    }

    #[test]
    fn test_label_under_any_root() {
        for (root, label) in [("example.org", "acme"), ("coffeenchat.me", "x-1"), ("a.b.io", "t")] {
            let domains = with_fallback(root);
            let target = RequestTarget::from_host_and_path(&format!("{label}.{root}"), "/");
            assert_eq!(extract_subdomain(&domains, &target).as_deref(), Some(label));
        }
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let target = RequestTarget::from_host_and_path("acme.coffeenchat.me", "/");
        let domains = DomainConfig::default();
        assert_eq!(extract_subdomain(&domains, &target), extract_subdomain(&domains, &target));
    }
}
