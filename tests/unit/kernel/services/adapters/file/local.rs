use super::*;
use tempfile::tempdir;

#[test]
fn import_builds_relative_records() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/lib")).unwrap();
    fs::write(root.join("index.html"), "<p>hi</p>").unwrap();
    fs::write(root.join("src/lib/a.js"), "a()").unwrap();
    fs::write(root.join(".hidden"), "secret").unwrap();

    let records = import_directory(root, &ProjectId::new("local")).unwrap();
    let rows: Vec<(&str, Option<&str>, bool)> = records
        .iter()
        .map(|r| (r.path.as_str(), r.parent_path.as_deref(), r.is_folder))
        .collect();
    assert_eq!(
        rows,
        [
            ("index.html", None, false),
            ("src", None, true),
            ("src/lib", Some("src"), true),
            ("src/lib/a.js", Some("src/lib"), false),
        ]
    );
    let html = records.iter().find(|r| r.path == "index.html").unwrap();
    assert_eq!(html.content, "<p>hi</p>");
    assert_eq!(html.name, "index.html");
}

#[test]
fn binary_files_import_without_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logo.png"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
    let records = import_directory(dir.path(), &ProjectId::new("local")).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].content.is_empty());
}

#[test]
fn import_rejects_missing_directory() {
    let dir = tempdir().unwrap();
    let err = import_directory(&dir.path().join("nope"), &ProjectId::new("x")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn write_then_import_round_trip() {
    let dir = tempdir().unwrap();
    let project = ProjectId::new("p");
    let records = vec![
        NewFileRecord::under(project.clone(), "", "src", true, ""),
        NewFileRecord::under(project.clone(), "src", "main.js", false, "run()"),
        NewFileRecord::under(project.clone(), "", "empty", true, ""),
    ];
    let written = write_records(dir.path(), &records).unwrap();
    assert_eq!(written, 1);
    assert!(dir.path().join("empty").is_dir());
    assert_eq!(
        fs::read_to_string(dir.path().join("src/main.js")).unwrap(),
        "run()"
    );
}

#[test]
fn write_refuses_escaping_paths() {
    let dir = tempdir().unwrap();
    let mut record = NewFileRecord::under(ProjectId::new("p"), "", "x.txt", false, "");
    record.path = "../x.txt".into();
    let err = write_records(dir.path(), &[record]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}
