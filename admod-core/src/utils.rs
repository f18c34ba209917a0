//! Shared string utilities for name derivation.

fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '_' | ' ')
}

/// Convert a string to camelCase (e.g., "order-item" -> "orderItem")
pub fn to_camel_case(s: &str) -> String {
    s.split(is_delimiter)
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) if i == 0 => c.to_lowercase().chain(chars).collect(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "order-item" -> "order_item", "orderItem" -> "order_item")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if is_delimiter(c) {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            if c.is_uppercase()
                && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
            {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    result.trim_end_matches('_').to_string()
}

/// Convert a hyphenated name to dotted form (e.g., "order-item" -> "order.item")
pub fn to_dotted(s: &str) -> String {
    s.replace('-', ".")
}
