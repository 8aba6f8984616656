//! Domain Extraction Tests
//!
//! Validates the lexical extractors:
//! - Config-pattern matches are domain-shaped (dot present, alphabetic
//!   trailing label of length >= 2)
//! - SAN DNS extraction preserves order of appearance
//! - Absence of matches yields empty results

use certsweep::domains::{find_domains, san_dns_names};

// ============================================================================
// Config-pattern matching
// ============================================================================

#[test]
fn test_matches_are_domain_shaped() {
    let text = "server_name example.com alt.example.co.uk; # a.1 does not count";
    let domains = find_domains(text);

    assert!(domains.contains("example.com"));
    assert!(domains.contains("alt.example.co.uk"));
    for domain in &domains {
        assert!(!domain.is_empty());
        assert!(domain.contains('.'));
        let last = domain.rsplit('.').next().unwrap();
        assert!(last.len() >= 2, "trailing label too short in {domain}");
        assert!(
            last.chars().all(|c| c.is_ascii_alphabetic()),
            "trailing label not alphabetic in {domain}"
        );
    }
}

#[test]
fn test_numeric_and_single_letter_tlds_rejected() {
    assert!(find_domains("a.1").is_empty());
    assert!(find_domains("10.0.0.1").is_empty());
    assert!(find_domains("x.y").is_empty());
}

#[test]
fn test_mixed_case_domains_kept_as_found() {
    let domains = find_domains("redirect to Example.COM please");
    assert!(domains.contains("Example.COM"));
    assert!(!domains.contains("example.com"));
}

#[test]
fn test_empty_text_yields_empty_set() {
    assert!(find_domains("").is_empty());
    assert!(find_domains("worker_processes auto;").is_empty());
}

// ============================================================================
// SAN DNS extraction
// ============================================================================

#[test]
fn test_san_names_in_order_of_appearance() {
    let dump = concat!(
        "        X509v3 Subject Alternative Name:\n",
        "            DNS:example.org, DNS:www.example.org\n",
    );
    assert_eq!(san_dns_names(dump), vec!["example.org", "www.example.org"]);
}

#[test]
fn test_san_names_empty_without_marker() {
    let dump = "Subject: CN = example.org\nIssuer: C = US, O = Let's Encrypt\n";
    assert!(san_dns_names(dump).is_empty());
}

#[test]
fn test_san_names_allow_looser_hostname_class() {
    // Wildcard stars are not hostname characters; the name stops there
    let names = san_dns_names("DNS:api-v2.example.net, DNS:xn--nxasmq6b.example");
    assert_eq!(names, vec!["api-v2.example.net", "xn--nxasmq6b.example"]);
}
