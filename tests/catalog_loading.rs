use std::io::Write;

use brick_colour_quiz::catalog::{load_catalog, load_embedded_catalog, CatalogError};
use brick_colour_quiz::core::config::CatalogConfig;
use tempfile::NamedTempFile;

const SMALL_CATALOG: &str = r##"(
    colours: [
        (name: "Red", rgb: "C91A09", y1: 1949),
        (name: "Blue", rgb: "#0055bf", y1: 1950),
        (name: "Trans-Clear", rgb: "FCFCFC", is_trans: true, y1: 1960),
        (name: "Duplo Blue", rgb: "6B98D1", y1: 1990, y2: Some(2006)),
        (name: "Old Pink", rgb: "F2A5C2", y1: 1935, y2: Some(1940)),
        (name: "Red", rgb: "FF0000", y1: 1990),
    ],
)"##;

fn catalog_file(body: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp file");
    f.write_all(body.as_bytes()).expect("write");
    f
}

fn config_for(file: &NamedTempFile) -> CatalogConfig {
    CatalogConfig {
        path: Some(file.path().display().to_string()),
        ..Default::default()
    }
}

#[test]
fn file_catalog_is_filtered_and_deduplicated() {
    let file = catalog_file(SMALL_CATALOG);
    let ds = load_catalog(&config_for(&file)).expect("loads");
    let names: Vec<&str> = ds.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Red", "Blue", "Trans-Clear"]);
    // first record wins
    assert_eq!(ds.find("Red").unwrap().rgb_hex, "C91A09");
    assert_eq!(ds.find("Blue").unwrap().rgb_hex, "0055BF");
    assert_eq!(ds.class_counts(), (2, 1));
}

#[test]
fn transparency_filter_keeps_one_class() {
    let file = catalog_file(SMALL_CATALOG);
    let cfg = CatalogConfig {
        transparency: "trans".into(),
        ..config_for(&file)
    };
    let ds = load_catalog(&cfg).expect("loads");
    assert_eq!(ds.len(), 1);
    assert!(ds.iter().all(|e| e.is_transparent));
}

#[test]
fn disabling_keyword_filter_keeps_specialty_lines() {
    let file = catalog_file(SMALL_CATALOG);
    let cfg = CatalogConfig {
        exclude_non_system: false,
        ..config_for(&file)
    };
    let ds = load_catalog(&cfg).expect("loads");
    assert!(ds.find("Duplo Blue").is_some());
    assert!(ds.find("Old Pink").is_none());
}

#[test]
fn fully_filtered_catalog_is_an_error() {
    let file = catalog_file(SMALL_CATALOG);
    let mut cfg = config_for(&file);
    cfg.year_range.start = 2100;
    cfg.year_range.end = 2200;
    assert!(matches!(load_catalog(&cfg), Err(CatalogError::Empty { .. })));
}

#[test]
fn bad_files_surface_typed_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cfg = CatalogConfig {
        path: Some(dir.path().join("missing.ron").display().to_string()),
        ..Default::default()
    };
    assert!(matches!(load_catalog(&cfg), Err(CatalogError::Read { .. })));

    let garbage = catalog_file("(colours: [ (name: ");
    assert!(matches!(load_catalog(&config_for(&garbage)), Err(CatalogError::Parse { .. })));

    let bad_hex = catalog_file(r#"(colours: [(name: "Mystery", rgb: "XYZ", y1: 2000)])"#);
    assert!(matches!(
        load_catalog(&config_for(&bad_hex)),
        Err(CatalogError::InvalidHex { .. })
    ));
}

#[test]
fn embedded_catalog_has_both_classes_and_no_specialty_lines() {
    let ds = load_embedded_catalog(&CatalogConfig::default()).expect("embedded catalog");
    let (opaque, transparent) = ds.class_counts();
    assert!(opaque >= 9, "opaque={opaque}");
    assert!(transparent >= 4, "transparent={transparent}");
    for e in ds.iter() {
        let lower = e.name.to_lowercase();
        assert!(!lower.contains("modulex") && !lower.contains("duplo"), "{}", e.name);
    }
    assert!(ds.find("Very Light Orange").is_none());
}
