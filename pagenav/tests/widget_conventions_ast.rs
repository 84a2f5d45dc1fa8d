use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Attribute, Item, UseTree, Visibility};

const REQUIRED_WIDGET_MODULES: [&str; 5] =
    ["event", "model", "reducer", "state", "view"];

#[test]
fn given_widget_dirs_when_validating_layout_then_all_modules_declared() {
    let widgets_dir = src_dir().join("widgets");
    let mut violations: Vec<String> = Vec::new();

    for widget_dir in subdirectories(&widgets_dir) {
        let mod_rs = widget_dir.join("mod.rs");
        let file = parse(&mod_rs);

        let declared: BTreeSet<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Mod(item_mod) if item_mod.content.is_none() => {
                    Some(item_mod.ident.to_string())
                },
                _ => None,
            })
            .collect();

        for module in REQUIRED_WIDGET_MODULES {
            if !declared.contains(module) {
                violations.push(format!(
                    "{}: widget must declare `mod {module};`",
                    mod_rs.display()
                ));
            }
        }

        if !widget_dir.join("view").join("mod.rs").is_file() {
            violations.push(format!(
                "{}: view must be a directory module",
                widget_dir.display()
            ));
        }

        for view_file in rust_files(&widget_dir.join("view")) {
            if view_file.file_name().is_some_and(|name| name == "mod.rs") {
                continue;
            }
            validate_view_file(&view_file, &mut violations);
        }
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_crate_sources_when_scanning_uses_then_no_wildcards_outside_tests() {
    let mut violations: Vec<String> = Vec::new();

    for file_path in rust_files_recursive(&src_dir()) {
        let file = parse(&file_path);
        collect_glob_uses(&file.items, &file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "wildcard imports:\n{}",
        violations.join("\n")
    );
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    let file = parse(file_path);
    let expected_props = format!("{}Props", file_stem_pascal_case(file_path));

    for forbidden in ["crate::app::", "crate::state::", "crate::events::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: view depends on host internals: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["log::", "Task::", "std::fs::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names != [expected_props.clone()] {
        violations.push(format!(
            "{}: expected a single '{expected_props}' type, found {:?}",
            file_path.display(),
            props_names
        ));
    }
}

fn collect_glob_uses(
    items: &[Item],
    file_path: &Path,
    violations: &mut Vec<String>,
) {
    for item in items {
        match item {
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            Item::Mod(item_mod) if !is_cfg_test(&item_mod.attrs) => {
                if let Some((_, nested)) = &item_mod.content {
                    collect_glob_uses(nested, file_path, violations);
                }
            },
            _ => {},
        }
    }
}

fn src_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    entries(dir).into_iter().filter(|path| path.is_dir()).collect()
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    entries(dir)
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect()
}

fn rust_files_recursive(dir: &Path) -> Vec<PathBuf> {
    let mut files = rust_files(dir);
    for sub in subdirectories(dir) {
        files.extend(rust_files_recursive(&sub));
    }
    files
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();

    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
