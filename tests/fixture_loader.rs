use shopfront::catalog::{
    source_for, BuiltinFixture, Category, FixtureError, FixtureSource, JsonFixture,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("items.json");
    fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}

#[test]
fn builtin_fixture_has_eight_unique_items() {
    let items = BuiltinFixture.load().unwrap();
    assert_eq!(items.len(), 8);
    let mut ids: Vec<u32> = items.iter().map(|item| item.id.0).collect();
    ids.dedup();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}

#[test]
fn json_fixture_loads_items() {
    let (_dir, path) = write_fixture(
        r#"[
            {"id": 10, "name": "Kettle", "price": 45.5, "category": "accessories", "stock": 3},
            {"id": 11, "name": "Scarf", "price": 19.0, "category": "clothing", "stock": 0}
        ]"#,
    );
    let items = JsonFixture::new(&path).load().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Kettle");
    assert_eq!(items[0].category, Category::Accessories);
    assert!(!items[1].is_available());
}

#[test]
fn unknown_category_is_a_parse_error() {
    let (_dir, path) = write_fixture(
        r#"[{"id": 1, "name": "Rake", "price": 5.0, "category": "garden", "stock": 1}]"#,
    );
    assert!(matches!(
        JsonFixture::new(&path).load(),
        Err(FixtureError::Parse { .. })
    ));
}

#[test]
fn negative_stock_is_a_parse_error() {
    let (_dir, path) = write_fixture(
        r#"[{"id": 1, "name": "Rake", "price": 5.0, "category": "clothing", "stock": -1}]"#,
    );
    assert!(matches!(
        JsonFixture::new(&path).load(),
        Err(FixtureError::Parse { .. })
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let (_dir, path) = write_fixture(
        r#"[
            {"id": 1, "name": "A", "price": 1.0, "category": "clothing", "stock": 1},
            {"id": 1, "name": "B", "price": 2.0, "category": "clothing", "stock": 1}
        ]"#,
    );
    match JsonFixture::new(&path).load() {
        Err(FixtureError::Invalid { message }) => assert!(message.contains("duplicate")),
        other => panic!("Expected Invalid, got {:?}", other),
    }
}

#[test]
fn negative_price_is_rejected() {
    let (_dir, path) = write_fixture(
        r#"[{"id": 1, "name": "A", "price": -3.0, "category": "clothing", "stock": 1}]"#,
    );
    assert!(matches!(
        JsonFixture::new(&path).load(),
        Err(FixtureError::Invalid { .. })
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let source = source_for(Some(path.as_path()));
    assert!(source.describe().ends_with("nope.json"));
    assert!(matches!(source.load(), Err(FixtureError::Read { .. })));
}

#[test]
fn no_path_selects_builtin() {
    let source = source_for(None);
    assert_eq!(source.describe(), "builtin");
    assert_eq!(source.load().unwrap().len(), 8);
}
