//! End-to-end generation tests against a temporary base directory.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use admod_engine::{
    Error, Facet, FacetSet, GenerateOptions, Generator, ModuleSpec, TemplateCatalog,
    UnroutedReason, WriteResult,
};
use tempfile::TempDir;

fn generator(name: &str, facets: &[Facet]) -> Generator {
    let spec = ModuleSpec::new(name, facets.iter().copied().collect()).expect("valid module name");
    Generator::new(spec)
}

fn module_root(base: &Path, name: &str) -> PathBuf {
    base.join("administration/src/module").join(name)
}

/// Snapshot every file below `root` as relative path -> content.
fn snapshot(root: &Path) -> BTreeMap<String, String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<String, String>) {
        for entry in fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            let rel = path.strip_prefix(root).unwrap().display().to_string();
            if path.is_dir() {
                out.insert(format!("{}/", rel), String::new());
                walk(&path, root, out);
            } else {
                out.insert(rel, fs::read_to_string(&path).expect("read file"));
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn test_task_with_component_scenario() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();

    generator("task", &[Facet::Page, Facet::Snippet, Facet::Component])
        .generate(base)
        .expect("generation succeeds");

    let root = module_root(base, "task");
    for dir in [
        "page/task-list",
        "page/task-detail",
        "page/task-create",
        "snippet",
        "component/task-action",
    ] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }
    for dir in ["acl", "view", "service", "mixin"] {
        assert!(!root.join(dir).exists(), "unexpected {dir}");
    }

    let index = fs::read_to_string(root.join("index.js")).unwrap();
    assert!(index.contains("Module.register('task'"));
    assert!(!index.contains("{{ name }}"));
    assert!(!index.contains("{{ routeName }}"));

    let snippet = fs::read_to_string(root.join("snippet/en-GB.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&snippet).expect("snippet is valid JSON");
    assert_eq!(json["task"]["general"]["mainMenuItemGeneral"], "task");

    for file in [
        "page/task-list/index.js",
        "page/task-list/task-list.html.twig",
        "page/task-list/task-list.scss",
        "page/task-detail/index.js",
        "page/task-create/task-create.html.twig",
        "component/task-action/index.js",
        "component/task-action/task-action.html.twig",
        "component/task-action/task-action.scss",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    assert_eq!(
        fs::read_to_string(base.join("administration/src/main.js")).unwrap(),
        ""
    );
}

#[test]
fn test_hyphenated_name_substitutes_every_variant() {
    let temp = TempDir::new().unwrap();

    generator("order-item", &[Facet::Service])
        .generate(temp.path())
        .unwrap();

    let root = module_root(temp.path(), "order-item");
    let index = fs::read_to_string(root.join("index.js")).unwrap();
    assert!(index.contains("Module.register('order-item'"));
    assert!(index.contains("parentPath: 'order.item.list'"));
    assert!(index.contains("name: 'orderItem'"));
    assert!(index.contains("title: 'order_item.general.mainMenuItemGeneral'"));

    let service = fs::read_to_string(root.join("service/index.js")).unwrap();
    assert!(service.contains("class orderItemApiService extends ApiService"));

    let markup = fs::read_to_string(root.join("page/order-item-list/order-item-list.html.twig"))
        .unwrap();
    assert!(markup.contains("{% block order_item_list %}"));
    // markup expressions that are not placeholders survive
    assert!(markup.contains("{{ $tc('order_item.list.buttonCreate') }}"));
}

#[test]
fn test_generation_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let facets = [Facet::Page, Facet::Snippet, Facet::Acl, Facet::Mixin];

    let first = generator("order-item", &facets).generate(temp.path()).unwrap();
    let after_first = snapshot(temp.path());

    let second = generator("order-item", &facets).generate(temp.path()).unwrap();
    let after_second = snapshot(temp.path());

    assert_eq!(after_first, after_second);
    assert!(first.has_changes());
    assert!(!second.has_changes());
    assert!(second.written.is_empty());
    assert_eq!(second.skipped.len(), first.written.len());
    assert_eq!(second.main_js, WriteResult::Skipped);
}

#[test]
fn test_only_selected_facets_are_created() {
    let all_gated = [Facet::Component, Facet::Acl, Facet::View, Facet::Service, Facet::Mixin];

    for selected in all_gated {
        let temp = TempDir::new().unwrap();
        generator("task", &[selected]).generate(temp.path()).unwrap();
        let root = module_root(temp.path(), "task");

        for facet in all_gated {
            let dir = match facet {
                Facet::Component => root.join("component"),
                other => root.join(other.as_str()),
            };
            assert_eq!(dir.exists(), facet == selected, "{facet} with {selected} selected");
        }
        // defaults are always present on a first run
        assert!(root.join("snippet/en-GB.json").is_file());
        assert!(root.join("page/task-create/index.js").is_file());
    }
}

#[test]
fn test_existing_files_are_never_overwritten() {
    let temp = TempDir::new().unwrap();
    let root = module_root(temp.path(), "task");
    let custom_index = root.join("index.js");
    let custom_main = temp.path().join("administration/src/main.js");
    fs::create_dir_all(&root).unwrap();
    fs::write(&custom_index, "// hand written").unwrap();
    fs::write(&custom_main, "import './module/task';\n").unwrap();

    let result = generator("task", &[]).generate(temp.path()).unwrap();

    assert_eq!(fs::read_to_string(&custom_index).unwrap(), "// hand written");
    assert_eq!(
        fs::read_to_string(&custom_main).unwrap(),
        "import './module/task';\n"
    );
    assert!(result.skipped.contains(&custom_index));
    assert_eq!(result.main_js, WriteResult::Skipped);
}

#[test]
fn test_adding_a_facet_later_only_adds_its_files() {
    let temp = TempDir::new().unwrap();
    generator("task", &[Facet::Page, Facet::Snippet, Facet::Component])
        .generate(temp.path())
        .unwrap();
    let before = snapshot(temp.path());

    let result = generator("task", &[Facet::Page, Facet::Snippet, Facet::Component, Facet::Acl])
        .generate(temp.path())
        .unwrap();
    let after = snapshot(temp.path());

    let root = module_root(temp.path(), "task");
    assert_eq!(result.written, vec![root.join("acl/index.js")]);
    assert_eq!(result.created_dirs, vec![root.join("acl")]);
    assert!(!result.first_run);

    for (path, content) in &before {
        assert_eq!(after.get(path), Some(content), "{path} changed");
    }
    let added: Vec<&String> = after.keys().filter(|k| !before.contains_key(*k)).collect();
    assert_eq!(
        added,
        vec![
            "administration/src/module/task/acl/",
            "administration/src/module/task/acl/index.js",
        ]
    );
}

#[test]
fn test_existing_root_does_not_restore_default_folders() {
    let temp = TempDir::new().unwrap();
    let root = module_root(temp.path(), "task");
    fs::create_dir_all(root.join("page/task-list")).unwrap();

    let result = generator("task", &[]).generate(temp.path()).unwrap();

    assert!(!result.first_run);
    assert!(result.created_dirs.is_empty());
    assert!(!root.join("page/task-detail").exists());
    assert!(!root.join("snippet").exists());
    // files for the surviving folder and the root are still filled in
    assert!(root.join("page/task-list/index.js").is_file());
    assert!(root.join("index.js").is_file());
    assert!(result.unrouted.iter().any(|u| u.reason
        == UnroutedReason::MissingDirectory(root.join("snippet"))));
}

#[test]
fn test_unselected_facets_are_not_reported_missing() {
    let temp = TempDir::new().unwrap();

    let result = generator("task", &[]).generate(temp.path()).unwrap();

    assert!(result.first_run);
    assert!(
        !result
            .unrouted
            .iter()
            .any(|u| matches!(u.reason, UnroutedReason::MissingDirectory(_)))
    );
    let unselected: Vec<&str> = result
        .unrouted
        .iter()
        .filter(|u| matches!(u.reason, UnroutedReason::FacetNotSelected(_)))
        .map(|u| u.filename.as_str())
        .collect();
    assert_eq!(unselected.len(), 7);
    assert!(unselected.contains(&"module_acl_index.js"));
    assert!(!module_root(temp.path(), "task").join("acl").exists());
}

#[test]
fn test_inert_templates_produce_no_output() {
    let templates = TempDir::new().unwrap();
    fs::write(templates.path().join("module_base.js"), "export default '{{ name }}';").unwrap();
    fs::write(templates.path().join("README.md"), "{{ name }} docs").unwrap();
    fs::write(templates.path().join("module_footer.js"), "footer").unwrap();

    let temp = TempDir::new().unwrap();
    let result = generator("task", &[Facet::Acl])
        .with_catalog(TemplateCatalog::from_dir(templates.path()))
        .generate(temp.path())
        .unwrap();

    let inert: Vec<&str> = result
        .unrouted
        .iter()
        .filter(|u| u.reason == UnroutedReason::Inert)
        .map(|u| u.filename.as_str())
        .collect();
    assert_eq!(inert, vec!["README.md", "module_footer.js"]);

    let files: Vec<String> = snapshot(temp.path())
        .into_keys()
        .filter(|k| !k.ends_with('/'))
        .collect();
    assert_eq!(
        files,
        vec![
            "administration/src/main.js",
            "administration/src/module/task/index.js",
        ]
    );
    assert_eq!(
        fs::read_to_string(module_root(temp.path(), "task").join("index.js")).unwrap(),
        "export default 'task';"
    );
}

#[test]
fn test_custom_options_rename_destinations() {
    let temp = TempDir::new().unwrap();
    let options = GenerateOptions {
        snippet_locale: "de-DE".to_string(),
        markup_extension: "html".to_string(),
        stylesheet_extension: "css".to_string(),
    };

    generator("task", &[Facet::Component])
        .with_options(options)
        .generate(temp.path())
        .unwrap();

    let root = module_root(temp.path(), "task");
    assert!(root.join("snippet/de-DE.json").is_file());
    assert!(!root.join("snippet/en-GB.json").exists());
    assert!(root.join("page/task-list/task-list.html").is_file());
    assert!(root.join("component/task-action/task-action.css").is_file());
}

#[test]
fn test_missing_base_path_aborts_before_writing() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let err = generator("task", &[]).generate(&missing).unwrap_err();

    assert!(matches!(*err, Error::Path { .. }));
    assert!(!missing.exists());
}

#[test]
fn test_unavailable_catalog_is_fatal() {
    let temp = TempDir::new().unwrap();

    let err = generator("task", &[])
        .with_catalog(TemplateCatalog::from_dir(temp.path().join("no-templates")))
        .generate(temp.path())
        .unwrap_err();

    assert!(matches!(*err, Error::CatalogUnavailable { .. }));
    // directories planned before the failure remain for the next run
    assert!(module_root(temp.path(), "task").join("snippet").is_dir());
}

#[test]
fn test_preview_matches_generate_without_writing() {
    let temp = TempDir::new().unwrap();
    let generator = generator("task", &[Facet::Component, Facet::View]);

    let preview = generator.preview(temp.path()).unwrap();
    assert!(snapshot(temp.path()).is_empty());
    assert!(preview.creates_main_js);

    let result = generator.generate(temp.path()).unwrap();

    let previewed: Vec<PathBuf> = preview.files.iter().map(|f| f.path().to_path_buf()).collect();
    assert_eq!(previewed, result.written);
    assert_eq!(preview.directories, result.created_dirs);
    for file in &preview.files {
        assert_eq!(fs::read_to_string(file.path()).unwrap(), file.content());
    }

    let again = generator.preview(temp.path()).unwrap();
    assert!(again.files.is_empty());
    assert!(again.directories.is_empty());
    assert!(!again.creates_main_js);
    assert_eq!(again.existing.len(), result.written.len());
}

#[test]
fn test_empty_facet_set_generates_defaults() {
    let temp = TempDir::new().unwrap();
    let spec = ModuleSpec::new("task", FacetSet::empty()).unwrap();

    let result = Generator::new(spec).generate(temp.path()).unwrap();

    assert!(result.first_run);
    assert_eq!(result.created_dirs.len(), 4);
    // index + snippet + 3 pages x (script, markup, stylesheet)
    assert_eq!(result.written.len(), 11);
}
