//! Write-to-disk behavior of the generator.

use std::fs;

use kiln_codegen_go::{Block, Generator, GoFile, Template, ValueType};
use tempfile::TempDir;

#[test]
fn test_generate_writes_suffixed_output_file() {
    let temp = TempDir::new().unwrap();
    let template = Template {
        blocks: vec![Block::value(ValueType::String, "s")],
        render_fn: Some(Block::code("func Render(s string, w *bytes.Buffer)")),
        ..Template::new("views/index.html")
    };

    let path = Generator::new(&template).generate(temp.path()).unwrap();

    assert_eq!(path, temp.path().join("index.html.go"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("// Code generated by kiln - DO NOT EDIT"));
    assert!(content.contains("w.WriteString(s)"));
}

#[test]
fn test_generate_overwrites_stale_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html.go"), "stale").unwrap();
    let template = Template::new("index.html");

    Generator::new(&template).generate(temp.path()).unwrap();

    let content = fs::read_to_string(temp.path().join("index.html.go")).unwrap();
    assert!(content.contains("package template"));
}

#[test]
fn test_generate_aborts_before_writing_on_invalid_declaration() {
    let temp = TempDir::new().unwrap();
    let template = Template {
        render_fn: Some(Block::code("func Render(n int)")),
        ..Template::new("index.html")
    };

    assert!(Generator::new(&template).generate(temp.path()).is_err());
    assert!(!temp.path().join("index.html.go").exists());
}

#[test]
fn test_gofile_path_joins_destination() {
    let file = GoFile::new("page.html.go", "");
    assert_eq!(
        file.path("out".as_ref()),
        std::path::Path::new("out/page.html.go")
    );
    assert_eq!(file.name(), "page.html.go");
}
