//! Seed Load/Persist Lifecycle Tests
//!
//! - Load validates every row before populating; no partial population
//! - Identifiers run 1..=N in seed order
//! - Persist(Load(doc)) preserves row count, order, and per-row field sets
//! - Malformed documents fail with format errors carrying the path

use std::fs;

use mockstore::schema::Column;
use mockstore::seed::{SeedDocument, SeedError, SeedLoader, SeedWriter};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn row(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

fn users_columns() -> Vec<Column> {
    vec![Column::new("name", "string"), Column::new("age", "int")]
}

fn users_document() -> SeedDocument {
    SeedDocument::new(
        "users",
        users_columns(),
        vec![
            row(json!({"name": "Alice", "age": "30"})),
            row(json!({"name": "Bob", "age": "25"})),
            row(json!({"name": "Carol", "age": "41"})),
        ],
    )
}

// =============================================================================
// Round-Trip
// =============================================================================

/// Persist(Load(doc)) with N valid rows yields N rows, sorted by identifier,
/// each field-set-equal (minus id) to the corresponding original row.
#[test]
fn test_load_persist_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let original = users_document();

    let store = SeedLoader::load_document(original.clone()).unwrap();
    SeedWriter::new(&path).save(&store).unwrap();

    let persisted: SeedDocument =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(persisted.name, original.name);
    assert_eq!(persisted.columns, original.columns);
    assert_eq!(persisted.seeds.len(), original.seeds.len());

    for (i, (persisted_row, original_row)) in
        persisted.seeds.iter().zip(original.seeds.iter()).enumerate()
    {
        assert_eq!(persisted_row.get("id"), Some(&json!(i as u64 + 1)));

        let mut without_id = persisted_row.clone();
        without_id.remove("id");
        assert_eq!(&without_id, original_row);
    }
}

/// A persisted document loads again with the same canonical id mapping.
#[test]
fn test_reload_of_persisted_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let store = SeedLoader::load_document(users_document()).unwrap();
    store.delete(2);
    SeedWriter::new(&path).save(&store).unwrap();

    // Prior ids are in the file but fresh ones are assigned in row order.
    let reloaded = SeedLoader::new(&path).load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get(1).unwrap().get("name"), Some(&json!("Alice")));
    assert_eq!(reloaded.get(2).unwrap().get("name"), Some(&json!("Carol")));
}

// =============================================================================
// Load Failure Modes
// =============================================================================

/// The first invalid row aborts the load with its index; nothing is populated.
#[test]
fn test_invalid_row_aborts_whole_load() {
    let document = SeedDocument::new(
        "users",
        users_columns(),
        vec![
            row(json!({"name": "ok", "age": "1"})),
            row(json!({"name": "short"})),
            row(json!({"name": "never", "age": "2"})),
        ],
    );

    let err = SeedLoader::load_document(document).unwrap_err();
    match err {
        SeedError::InvalidRow { row, .. } => assert_eq!(row, 1),
        other => panic!("expected InvalidRow, got {:?}", other),
    }
}

/// Unparsable JSON is a format error carrying the file path.
#[test]
fn test_malformed_document_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "resource_name: users").unwrap();

    let err = SeedLoader::new(&path).load().unwrap_err();
    match err {
        SeedError::Format { path: p, .. } => assert!(p.ends_with("broken.json")),
        other => panic!("expected Format, got {:?}", other),
    }
}

/// A document whose columns collide with the reserved id key is rejected.
#[test]
fn test_reserved_column_name_rejected() {
    let document = SeedDocument::new(
        "users",
        vec![Column::new("id", "int"), Column::new("name", "string")],
        vec![],
    );
    assert!(matches!(
        SeedLoader::load_document(document),
        Err(SeedError::InvalidSchema(_))
    ));
}

/// An empty seeds list loads an empty store whose first insert gets id 1.
#[test]
fn test_empty_seeds_load() {
    let document = SeedDocument::new("users", users_columns(), vec![]);
    let store = SeedLoader::load_document(document).unwrap();
    assert!(store.is_empty());

    let record = store.insert(row(json!({"name": "first", "age": "1"}))).unwrap();
    assert_eq!(record.id(), 1);
}

// =============================================================================
// Lifecycle: Load, Mutate, Persist
// =============================================================================

/// CRUD between load and persist is reflected in the persisted document.
#[test]
fn test_mutations_between_load_and_persist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let store = SeedLoader::load_document(users_document()).unwrap();
    store.update_partial(1, &row(json!({"age": "31"}))).unwrap();
    store.delete(3);
    store.insert(row(json!({"name": "Dave", "age": "19"}))).unwrap();

    SeedWriter::new(&path).save(&store).unwrap();
    let persisted: SeedDocument =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let ids: Vec<&Value> = persisted.seeds.iter().filter_map(|r| r.get("id")).collect();
    assert_eq!(ids, vec![&json!(1), &json!(2), &json!(4)]);
    assert_eq!(persisted.seeds[0].get("age"), Some(&json!("31")));
    assert_eq!(persisted.seeds[2].get("name"), Some(&json!("Dave")));
}
