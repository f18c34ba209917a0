//! Placeholder substitution.
//!
//! Templates are plain text with four literal tokens. There is no template
//! language: unknown `{{ ... }}` sequences are copied through untouched,
//! which keeps markup expressions such as `{{ $tc('key') }}` intact.

use crate::names::NameVariants;

/// Replaced with the module name as given.
pub const NAME_TOKEN: &str = "{{ name }}";

/// Replaced with the dotted route prefix.
pub const ROUTE_NAME_TOKEN: &str = "{{ routeName }}";

/// Replaced with the camelCase label.
pub const LABEL_NAME_TOKEN: &str = "{{ labelName }}";

/// Replaced with the snake_case snippet key.
pub const TWIG_MODULE_TOKEN: &str = "{{ twigModule }}";

/// Substitute all placeholder tokens in `body`.
pub fn render(body: &str, names: &NameVariants) -> String {
    let substitutions: [(&str, &str); 4] = [
        (NAME_TOKEN, names.raw.as_str()),
        (ROUTE_NAME_TOKEN, names.route_form.as_str()),
        (LABEL_NAME_TOKEN, names.label_form.as_str()),
        (TWIG_MODULE_TOKEN, names.snippet_key_form.as_str()),
    ];

    substitutions
        .iter()
        .fold(body.to_string(), |text, (token, value)| {
            text.replace(token, value)
        })
}
