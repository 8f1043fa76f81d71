//! Integration tests for configuration loading

use std::io::Write;

use tempfile::NamedTempFile;

use tessera::{
    TesseraError,
    color::Color,
    config::load_config,
    creation::circle,
};

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [style]
        fill_color = "lightblue"
        line_width = 0.2

        [text]
        font_family = "Helvetica"
        "#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    let defaults = config.style().defaults().unwrap();
    assert_eq!(defaults.fill_color(), Some(Color::new("lightblue").unwrap()));
    assert_eq!(config.text().font_family(), "Helvetica");

    // Config defaults flow into style resolution
    let diagram = circle(1.0).unwrap();
    let items = diagram.primitives(&defaults);
    assert_eq!(items[0].style().fill_color(), Some(Color::new("lightblue").unwrap()));
    assert_eq!(items[0].style().line_color(), Color::black());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(TesseraError::Io(_))));
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[style\nline_width = ").unwrap();
    let result = load_config(file.path());
    assert!(matches!(result, Err(TesseraError::Config(_))));
}

#[test]
fn test_empty_config_file_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.style().defaults().unwrap(),
        tessera::style::ResolvedStyle::default()
    );
}
