//! Integration tests for the stmt module.

use crate::stmt::{
    Columns, Conditions, build_delete, build_insert, build_select, build_update, join_words,
    join_words_with, to_set_clause,
};

#[test]
fn test_select_table_only() {
    let sql = build_select("users", Columns::All, Conditions::None).unwrap();
    assert_eq!(sql, "SELECT * FROM users");
}

#[test]
fn test_select_full_form() {
    let sql = build_select("users", "id, name", "status = 'active'").unwrap();
    assert_eq!(sql, "SELECT id, name FROM users WHERE status = 'active'");
}

#[test]
fn test_select_list_forms() {
    let sql = build_select(
        "items",
        ["id", "name", "price"],
        ["id = 1", "AND", "price = 20"],
    )
    .unwrap();
    assert_eq!(
        sql,
        "SELECT id, name, price FROM items WHERE id = 1 AND price = 20"
    );
}

#[test]
fn test_update_parameterized_set() {
    let sql = build_update("items", ["id", "name"], "id = 1").unwrap();
    assert_eq!(sql, "UPDATE items SET id = ?, name = ? WHERE id = 1");
}

#[test]
fn test_delete_fragments() {
    let sql = build_delete("items", ["id = 1", "AND", "price > 20"]).unwrap();
    assert_eq!(sql, "DELETE FROM items WHERE id = 1 AND price > 20");
}

#[test]
fn test_insert_placeholder_per_column() {
    let sql = build_insert("items", &["id", "name", "price"]).unwrap();
    assert_eq!(sql, "INSERT INTO items (id, name, price) VALUES (?, ?, ?)");
}

#[test]
fn test_all_builders_reject_empty_table() {
    assert!(build_select("", Columns::All, Conditions::None).is_err());
    assert!(build_update("", "price = 1", Conditions::None).is_err());
    assert!(build_delete("", Conditions::None).is_err());
    assert!(build_insert("", &["id"]).is_err());
}

#[test]
fn test_join_words_properties() {
    assert_eq!(join_words(&["a", "b", "c"]), "a, b, c");
    assert_eq!(join_words(&["x"]), "x");
    assert_eq!(join_words::<&str>(&[]), "");
}

#[test]
fn test_join_words_with_space_separator() {
    assert_eq!(join_words_with(&["a", "AND", "b"], false, " "), "a AND b");
}

#[test]
fn test_set_clause_pairs() {
    assert_eq!(to_set_clause(&["id", "name"]), "id = ?, name = ?");
}

#[test]
fn test_builders_are_pure() {
    let first = build_select("items", "id", "id = 1").unwrap();
    let second = build_select("items", "id", "id = 1").unwrap();
    assert_eq!(first, second);

    let first = build_insert("items", &["id", "name"]).unwrap();
    let second = build_insert("items", &["id", "name"]).unwrap();
    assert_eq!(first, second);
}
