//! Path constants for the generated module tree.
//!
//! This module centralizes directory and file names used by the layout
//! planner and the router.

/// Administration source root relative to the base path.
pub const ADMIN_SRC_DIR: &str = "administration/src";

/// Directory holding all modules, relative to the administration root.
pub const MODULE_DIR: &str = "module";

/// Entry point the administration build expects next to `module/`.
pub const MAIN_JS: &str = "main.js";

/// Script entry point inside every generated folder.
pub const INDEX_JS: &str = "index.js";

/// Page folders live under this directory of the module root.
pub const PAGE_DIR: &str = "page";

/// Snippet dictionaries live under this directory of the module root.
pub const SNIPPET_DIR: &str = "snippet";

/// Action components live under this directory of the module root.
pub const COMPONENT_DIR: &str = "component";

/// Suffix of the action component folder (`<module>-action`).
pub const ACTION_SUFFIX: &str = "action";

/// Default snippet locale.
pub const DEFAULT_SNIPPET_LOCALE: &str = "en-GB";

/// Default markup template extension.
pub const DEFAULT_MARKUP_EXTENSION: &str = "html.twig";

/// Default stylesheet extension.
pub const DEFAULT_STYLESHEET_EXTENSION: &str = "scss";
