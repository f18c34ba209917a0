use miette::SourceSpan;

/// Find the span of a key in the TOML source
/// Searches for `key =`, `key=` and `"key"` before falling back to any match
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} =", key),
        format!("{}=", key),
        format!("\"{}\"", key),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            let start = if pattern.starts_with('"') { pos + 1 } else { pos };
            return Some(SourceSpan::from((start, key.len())));
        }
    }

    src.find(key)
        .map(|pos| SourceSpan::from((pos, key.len())))
}

/// Validate a value that becomes part of a generated file name
/// (a locale or an extension). Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_file_component(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("value cannot be empty");
    }
    if value.contains(['/', '\\']) {
        return Some("value cannot contain path separators");
    }
    if value.starts_with('.') {
        return Some("value must not start with a dot");
    }
    None
}

/// Upper-case the first character of `name`
pub(crate) fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[generate]\nsnippet_locale = \"en/GB\"\n";
        let span = find_key_span(src, "snippet_locale").unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), "snippet_locale".len());

        let src = "[targets]\n\"My Plugin\" = \"app\"\n";
        let span = find_key_span(src, "My Plugin").unwrap();
        assert_eq!(span.offset(), 11);

        assert!(find_key_span(src, "missing").is_none());
    }

    #[test]
    fn test_validate_file_component() {
        assert_eq!(validate_file_component("en-GB"), None);
        assert_eq!(validate_file_component("html.twig"), None);
        assert!(validate_file_component("").is_some());
        assert!(validate_file_component("  ").is_some());
        assert!(validate_file_component("en/GB").is_some());
        assert!(validate_file_component("..\\scss").is_some());
        assert!(validate_file_component(".scss").is_some());
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("swagExample"), "SwagExample");
        assert_eq!(capitalize_first("SwagExample"), "SwagExample");
        assert_eq!(capitalize_first("über"), "Über");
        assert_eq!(capitalize_first(""), "");
    }
}
