//! End-to-end tests for `dashzones parse`.

mod fixtures;
use fixtures::*;

#[test]
fn test_parse_page_document_summary() {
    let temp = temp_dir();
    let wireframe = write_file(temp.path(), "sales.md", PAGES_WIREFRAME);

    let output = run(
        &["parse", "--wireframe", wireframe.to_str().unwrap()],
        temp.path(),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "parse should succeed. stderr: {}",
        stderr(&output)
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("Wireframe: 2 page(s)"), "stdout: {stdout}");
    assert!(stdout.contains("Page 1: Executive Overview [kpi]"));
    assert!(stdout.contains("Page 2: Regional Detail [grid]"));
    assert!(stdout.contains("Grid: 2x3"));
    assert!(stdout.contains("2. line-chart - Revenue Trend"));
    assert!(stdout.contains("Canvas: 1920x1080"));
}

#[test]
fn test_parse_page_document_json() {
    let temp = temp_dir();
    let wireframe = write_file(temp.path(), "sales.md", PAGES_WIREFRAME);

    let output = run(
        &["parse", "--wireframe", wireframe.to_str().unwrap(), "--json"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["kind"], "pages");
    assert_eq!(result["defaults"]["width"], 1920);

    let pages = result["pages"].as_array().expect("pages should be an array");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["layout_mode"], "kpi");
    assert_eq!(pages[0]["settings"]["kpi_count"], 5);
    assert_eq!(pages[0]["visuals"][1]["show_label"], true);
    assert_eq!(pages[1]["grid"]["rows"], 2);
    assert_eq!(pages[1]["visuals"][0]["kind"], "map");
}

#[test]
fn test_parse_legacy_layouts() {
    let temp = temp_dir();
    let wireframe = write_file(temp.path(), "legacy.txt", LEGACY_WIREFRAME);

    let output = run(
        &["parse", "--wireframe", wireframe.to_str().unwrap(), "--json"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["kind"], "layouts");
    assert_eq!(
        result["layouts"]["three-col"]["settings"]["visuals_per_column"],
        3
    );
    assert_eq!(result["layouts"]["grid"]["grid"]["rows"], 3);
    assert_eq!(result["layouts"]["grid"]["grid"]["columns"], 4);
}

#[test]
fn test_parse_unrecognized_text_is_empty_document() {
    let temp = temp_dir();
    let wireframe = write_file(temp.path(), "notes.txt", "just some notes\nnothing else\n");

    let output = run(
        &["parse", "--wireframe", wireframe.to_str().unwrap()],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No pages or layouts recognized."));
}

#[test]
fn test_parse_missing_file() {
    let temp = temp_dir();
    let missing = temp.path().join("missing.md");

    let output = run(
        &["parse", "--wireframe", missing.to_str().unwrap()],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Wireframe file not found"));
}
