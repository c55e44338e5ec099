use std::fs;

use pyinit::files;
use pyinit::templates::Template;

#[test]
fn test_template_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    for t in Template::ALL {
        let path = files::write(dir.path(), t.filename(), t.contents().as_bytes()).unwrap();
        assert_eq!(path, dir.path().join(t.filename()));
        assert_eq!(fs::read(&path).unwrap(), t.contents().as_bytes());
    }
}

#[test]
fn test_existing_file_truncated() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "a much longer previous content\n".repeat(10)).unwrap();

    files::write(dir.path(), ".gitignore", b"*.pyc\n").unwrap();

    assert_eq!(fs::read_to_string(dir.path().join(".gitignore")).unwrap(), "*.pyc\n");
}

#[test]
fn test_missing_directory_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = files::write(&missing, "License", b"x").unwrap_err();
    assert!(format!("{err:#}").contains("failed to open"));
}
