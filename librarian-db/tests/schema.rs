use librarian_db::{ExecMode, Execution, Gateway};

fn table_exists(path: &std::path::Path) -> bool {
    let conn = rusqlite::Connection::open(path).unwrap();
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='components')",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn open_creates_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    Gateway::open(&path);
    assert!(table_exists(&path));
}

#[test]
fn schema_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    Gateway::try_open(&path).unwrap();
    // Opening again should not error or drop data
    let gateway = Gateway::try_open(&path).unwrap();
    let exec = gateway.execute(
        "INSERT INTO components (name, date_added) VALUES ('Probe', '2024-01-01')",
        &[],
        ExecMode::Write,
    );
    assert_eq!(exec, Execution::Written(true));
    let again = Gateway::try_open(&path).unwrap();
    assert_eq!(again.all_components().len(), 1);
}

#[test]
fn expected_columns_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    Gateway::open(&path);

    let conn = rusqlite::Connection::open(&path).unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(components)").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        columns,
        [
            "component_id",
            "name",
            "pattern_name",
            "pattern_category",
            "language",
            "description",
            "code_snippet",
            "author",
            "date_added",
        ]
    );
}

#[test]
fn unreachable_store_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("catalog.db");
    assert!(Gateway::try_open(&path).is_err());
}
