use super::source_loader::load_source;

#[test]
fn loads_file_with_its_path_as_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("service.rs");
    std::fs::write(&path, "async fn f() -> () {}").unwrap();

    let source = load_source(&path).unwrap();

    assert_eq!(source.text, "async fn f() -> () {}");
    assert_eq!(source.name, path.to_string_lossy());
}

#[test]
fn missing_file_is_an_error_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.rs");

    let Err(msg) = load_source(&path) else {
        panic!("expected an error");
    };
    assert!(msg.starts_with("failed to read '"));
}
