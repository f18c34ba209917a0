//! Templates compiled into the binary.

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/module/", $name)))),*]
    };
}

/// `(filename, body)` pairs, sorted by filename.
pub(crate) const TEMPLATES: &[(&str, &str)] = bundled![
    "module_acl_index.js",
    "module_base.js",
    "module_component_action_scss.scss",
    "module_component_action_twig.twig",
    "module_component_index.js",
    "module_mixin_index.js",
    "module_page-create.js",
    "module_page-detail.js",
    "module_page-list.js",
    "module_page_create_scss.scss",
    "module_page_create_twig.twig",
    "module_page_detail_scss.scss",
    "module_page_detail_twig.twig",
    "module_page_list_scss.scss",
    "module_page_list_twig.twig",
    "module_service_index.js",
    "module_snippet.json",
    "module_view_index.js",
];
