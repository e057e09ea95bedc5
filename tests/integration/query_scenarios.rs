// tests/integration/query_scenarios.rs
use file_size::{FileSize, ProbeStrategy, SENTINEL_NOT_ACCESSIBLE, file_size, get_file_size, query, query_with};

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

#[test]
fn hello_reports_five_bytes() {
    let ws = TempWorkspace::new("hello");
    let path = ws.create_file("hello.txt", b"hello");

    assert_eq!(query(&path).unwrap(), FileSize::new(5));
    assert_eq!(get_file_size(&path), 5);
}

#[test]
fn empty_file_reports_zero() {
    let ws = TempWorkspace::new("empty");
    let path = ws.create_file("empty", b"");

    assert_eq!(query(&path).unwrap().bytes(), 0);
    assert_eq!(get_file_size(&path), 0);
}

#[test]
fn missing_path_fails_and_yields_sentinel() {
    let err = query("/definitely/does/not/exist").unwrap_err();
    assert!(err.is_not_accessible());
    assert_eq!(get_file_size("/definitely/does/not/exist"), SENTINEL_NOT_ACCESSIBLE);
}

#[test]
fn append_is_reflected_on_next_query() {
    let ws = TempWorkspace::new("grow");
    let path = ws.create_file("grow.bin", &[b'x'; 100]);
    assert_eq!(query(&path).unwrap().bytes(), 100);

    ws.append(&path, &[b'y'; 50]);
    assert_eq!(query(&path).unwrap().bytes(), 150);
}

#[test]
fn repeated_queries_agree() {
    let ws = TempWorkspace::new("idem");
    let path = ws.create_file("data.bin", &[1u8; 777]);

    let first = query(&path).unwrap();
    let second = query(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn directory_is_not_accessible() {
    let ws = TempWorkspace::new("dir");
    let err = query(ws.path()).unwrap_err();
    assert!(err.is_not_accessible());
    assert_eq!(get_file_size(ws.path()), -1);
}

#[test]
fn aliases_and_strategies_agree() {
    let ws = TempWorkspace::new("alias");
    let path = ws.create_file("nested/data.bin", &[0u8; 65_537]);

    let by_query = query(&path).unwrap();
    assert_eq!(file_size(&path).unwrap(), by_query);
    assert_eq!(query_with(&path, ProbeStrategy::Seek).unwrap(), by_query);
    assert_eq!(query_with(&path, ProbeStrategy::Metadata).unwrap(), by_query);
}

#[test]
fn querying_does_not_modify_the_file() {
    let ws = TempWorkspace::new("readonly");
    let path = ws.create_file("keep.txt", b"unchanged");
    let before = std::fs::read(&path).unwrap();
    let modified_before = std::fs::metadata(&path).unwrap().modified().unwrap();

    query(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), modified_before);
}

#[cfg(unix)]
#[test]
fn fifo_fails_promptly_under_both_strategies() {
    use file_size::QueryError;

    let ws = TempWorkspace::new("fifo");
    let fifo = ws.create_fifo("pipe");

    let err = query(&fifo).unwrap_err();
    assert!(matches!(err.query_error(), Some(QueryError::SizeUnavailable { .. })), "unexpected error: {err}");

    let err = query_with(&fifo, ProbeStrategy::Metadata).unwrap_err();
    assert!(matches!(err.query_error(), Some(QueryError::NotRegularFile { .. })), "unexpected error: {err}");

    assert_eq!(get_file_size(&fifo), SENTINEL_NOT_ACCESSIBLE);
}
