use regex::Regex;

fn remote_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a caller-supplied asset entry points at a remote resource.
///
/// CDN URLs, protocol-relative references and data URIs cannot be read from
/// disk and can never feed a bundle.
pub fn is_remote_reference(value: &str) -> bool {
    remote_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}
