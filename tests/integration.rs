//! Integration tests for treelist


use harness::{TestDir, run_treelist};
use treelist::FileEntry;

/// `a.txt` (10 bytes) and `b/c.txt` (5 bytes).
fn scenario() -> TestDir {
    let dir = TestDir::new();
    dir.add_file("a.txt", "0123456789");
    dir.add_file("b/c.txt", "01234");
    dir
}

#[test]
fn test_text_output_default() {
    let dir = scenario();
    let (stdout, _stderr, success) = run_treelist(&["--path", dir.path_str()]);
    assert!(success, "treelist should succeed");
    assert_eq!(stdout, format!("{}\n  a.txt\n  b/\n", dir.path_str()));
}

#[test]
fn test_text_output_recursive() {
    let dir = scenario();
    let (stdout, _stderr, success) = run_treelist(&["--path", dir.path_str(), "--recursive"]);
    assert!(success);
    assert_eq!(
        stdout,
        format!("{}\n  a.txt\n  b/\n    c.txt\n", dir.path_str())
    );
}

#[test]
fn test_json_output_non_recursive() {
    let dir = scenario();
    let (stdout, _stderr, success) = run_treelist(&["-p", dir.path_str(), "-o", "json"]);
    assert!(success);

    let entries: Vec<FileEntry> = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "a.txt");
    assert_eq!(entries[0].size, 10);
    assert_eq!(entries[1].name, "b");
    assert!(entries[1].is_dir);
    assert!(entries[1].children.is_empty());
}

#[test]
fn test_json_output_recursive() {
    let dir = scenario();
    let (stdout, _stderr, success) =
        run_treelist(&["-p", dir.path_str(), "-r", "-o", "json"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value[0]["children"], serde_json::json!([]));
    assert_eq!(value[1]["children"][0]["name"], "c.txt");
    assert_eq!(value[1]["children"][0]["size"], 5);
    assert_eq!(value[1]["children"][0]["isDir"], false);
}

#[test]
fn test_yaml_output_recursive() {
    let dir = scenario();
    let (stdout, _stderr, success) =
        run_treelist(&["--path", dir.path_str(), "--recursive", "--output", "yaml"]);
    assert!(success);
    assert!(stdout.starts_with("- name: a.txt\n"), "{}", stdout);

    let entries: Vec<FileEntry> = serde_yaml::from_str(&stdout).expect("valid YAML");
    assert_eq!(entries[1].children.len(), 1);
    assert_eq!(entries[1].children[0].size, 5);
}

#[test]
fn test_json_and_yaml_describe_same_tree() {
    let dir = scenario();
    let (json, _, _) = run_treelist(&["-p", dir.path_str(), "-r", "-o", "json"]);
    let (yaml, _, _) = run_treelist(&["-p", dir.path_str(), "-r", "-o", "yaml"]);

    let from_json: Vec<FileEntry> = serde_json::from_str(&json).unwrap();
    let from_yaml: Vec<FileEntry> = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn test_structured_output_omits_root_line() {
    let dir = scenario();
    for format in ["json", "yaml"] {
        let (stdout, _stderr, success) = run_treelist(&["-p", dir.path_str(), "-o", format]);
        assert!(success);
        assert!(
            !stdout.contains(dir.path_str()),
            "{} output should not contain the root path: {}",
            format,
            stdout
        );
    }
}

#[test]
fn test_empty_directory_json() {
    let dir = TestDir::new();
    let (stdout, _stderr, success) = run_treelist(&["-p", dir.path_str(), "-o", "json"]);
    assert!(success);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_version_flag() {
    let (stdout, _stderr, success) = run_treelist(&["--version"]);
    assert!(success);
    assert!(stdout.contains("treelist"));
}
