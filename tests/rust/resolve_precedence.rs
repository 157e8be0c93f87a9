use std::fs;

use sassdata::importer::resolver::{Resolution, resolve};
use sassdata::{ImportContext, ImportError};

const JSON: &[&str] = &[".json"];

fn extensions(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

fn context_in(dir: &std::path::Path) -> ImportContext {
    ImportContext::from_file(dir.join("main.scss"))
}

fn claimed(resolution: Resolution) -> std::path::PathBuf {
    match resolution {
        Resolution::Claimed(path) => path,
        Resolution::NotClaimed => panic!("Expected the reference to be claimed"),
    }
}

#[test]
fn test_plain_stem_resolves() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    fs::write(scratch.path().join("colors.json"), "{}").expect("write file");

    let resolution =
        resolve("colors", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), scratch.path().join("colors.json"));
}

#[test]
fn test_partial_alone_resolves() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    fs::write(scratch.path().join("_colors.json"), "{}").expect("write partial");

    let resolution =
        resolve("colors", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), scratch.path().join("_colors.json"));
}

#[test]
fn test_reference_in_subdirectory() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    fs::create_dir(scratch.path().join("theme")).expect("create subdir");
    fs::write(scratch.path().join("theme").join("colors.json"), "{}").expect("write file");

    let resolution =
        resolve("theme/colors", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(
        claimed(resolution),
        scratch.path().join("theme").join("colors.json")
    );
}

#[test]
fn test_legacy_import_suffix_wins() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    fs::write(scratch.path().join("colors.json"), "{}").expect("write plain");
    fs::write(scratch.path().join("colors.import.json"), "{}").expect("write import variant");

    let legacy = context_in(scratch.path()).from_legacy_import();
    let resolution = resolve("colors", &legacy, &extensions(JSON)).unwrap();
    assert_eq!(
        claimed(resolution),
        scratch.path().join("colors.import.json")
    );

    // A module-style context ignores the `.import` variant entirely
    let resolution = resolve("colors", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), scratch.path().join("colors.json"));
}

#[test]
fn test_explicit_extension_restricts_candidates() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    fs::write(scratch.path().join("colors.json5"), "{}").expect("write json5");

    let exts = extensions(&[".json", ".json5"]);

    // Asking for the .json file finds nothing even though a .json5 exists
    let resolution = resolve("colors.json", &context_in(scratch.path()), &exts).unwrap();
    assert_eq!(resolution, Resolution::NotClaimed);

    let resolution = resolve("colors.json5", &context_in(scratch.path()), &exts).unwrap();
    assert_eq!(claimed(resolution), scratch.path().join("colors.json5"));
}

#[test]
fn test_explicit_extension_skips_directory_fallback() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    let module_dir = scratch.path().join("colors.json");
    fs::create_dir(&module_dir).expect("create dir named like a file");
    fs::write(module_dir.join("_index.json"), "{}").expect("write index");

    let resolution =
        resolve("colors.json", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(resolution, Resolution::NotClaimed);
}

#[test]
fn test_unrecognized_extension_uses_directory_fallback() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    let module_dir = scratch.path().join("colors.blue");
    fs::create_dir(&module_dir).expect("create module dir");
    fs::write(module_dir.join("_index.json"), "{}").expect("write index");

    let resolution =
        resolve("colors.blue", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), module_dir.join("_index.json"));
}

#[test]
fn test_file_wins_over_directory_index() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    fs::write(scratch.path().join("foo.json"), "{}").expect("write file");
    let module_dir = scratch.path().join("foo");
    fs::create_dir(&module_dir).expect("create module dir");
    fs::write(module_dir.join("index.json"), "{}").expect("write index");

    let resolution = resolve("foo", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), scratch.path().join("foo.json"));
}

#[test]
fn test_legacy_index_import_precedence() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    let module_dir = scratch.path().join("foo");
    fs::create_dir(&module_dir).expect("create module dir");
    fs::write(module_dir.join("index.import.json"), "{}").expect("write import index");
    fs::write(module_dir.join("_index.json"), "{}").expect("write index");

    let legacy = context_in(scratch.path()).from_legacy_import();
    let resolution = resolve("foo", &legacy, &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), module_dir.join("index.import.json"));

    let resolution = resolve("foo", &context_in(scratch.path()), &extensions(JSON)).unwrap();
    assert_eq!(claimed(resolution), module_dir.join("_index.json"));
}

#[test]
fn test_index_ambiguity_is_fatal() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    let module_dir = scratch.path().join("foo");
    fs::create_dir(&module_dir).expect("create module dir");
    fs::write(module_dir.join("index.json"), "{}").expect("write plain index");
    fs::write(module_dir.join("_index.json"), "{}").expect("write partial index");

    let err = resolve("foo", &context_in(scratch.path()), &extensions(JSON)).unwrap_err();
    assert!(matches!(err, ImportError::AmbiguousMatch(candidates) if candidates.len() == 2));
}
