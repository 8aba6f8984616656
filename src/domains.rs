// Domain extraction - lexical matching of domain-like strings
//
// Pure functions over text, no I/O. Matching is best-effort: anything shaped
// like a domain counts, with no validation of registrability or DNS
// correctness.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Domain-shaped token: one or more labels of letters/digits/hyphens
    /// joined by dots, final label purely alphabetic with length >= 2.
    static ref DOMAIN_PATTERN: Regex =
        Regex::new(r"(?i)\b(?:[a-z0-9-]+\.)+[a-z]{2,}\b").expect("valid domain pattern");

    /// SAN DNS entry in an X.509 text dump: the literal "DNS:" marker
    /// followed by hostname characters.
    static ref SAN_DNS_PATTERN: Regex =
        Regex::new(r"DNS:([A-Za-z0-9.-]+)").expect("valid SAN pattern");
}

/// Extract every domain-like string from a text blob.
///
/// Returns a deduplicated set; matches keep the casing found in the text.
pub fn find_domains(text: &str) -> HashSet<String> {
    DOMAIN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the SAN DNS names from an X.509 text dump, in order of appearance.
pub fn san_dns_names(dump: &str) -> Vec<String> {
    SAN_DNS_PATTERN
        .captures_iter(dump)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
