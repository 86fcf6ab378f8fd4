//! SELECT statement formatting.

use crate::error::SqlResult;
use crate::stmt::input::{Columns, Conditions};
use crate::stmt::require_table;

/// Build a SELECT statement.
///
/// `columns` defaults to `*` and `conditions` to no WHERE clause; pass
/// [`Columns::All`] / [`Conditions::None`] (or an empty string or list)
/// for the defaults. Fails if `table` is empty.
///
/// # Example
/// ```
/// use sqlgen::{build_select, Conditions};
///
/// let sql = build_select("items", "id, name", "id = 1")?;
/// assert_eq!(sql, "SELECT id, name FROM items WHERE id = 1");
///
/// let sql = build_select("items", ["id", "name"], Conditions::None)?;
/// assert_eq!(sql, "SELECT id, name FROM items");
/// # Ok::<(), sqlgen::SqlError>(())
/// ```
pub fn build_select(
    table: &str,
    columns: impl Into<Columns>,
    conditions: impl Into<Conditions>,
) -> SqlResult<String> {
    build(table, columns.into().resolve(), conditions.into().resolve())
}

/// Canonical implementation over resolved clause text.
fn build(
    table: &str,
    columns: Option<String>,
    conditions: Option<String>,
) -> SqlResult<String> {
    let table = require_table(table)?;

    let mut sql = String::from("SELECT ");
    match columns {
        Some(cols) => sql.push_str(&cols),
        None => sql.push('*'),
    }
    sql.push_str(" FROM ");
    sql.push_str(table);

    if let Some(cond) = conditions {
        sql.push_str(" WHERE ");
        sql.push_str(&cond);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%sql, "built SELECT statement");

    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlError;

    #[test]
    fn select_all_columns() {
        let sql = build_select("items", Columns::All, Conditions::None).unwrap();
        assert_eq!(sql, "SELECT * FROM items");
    }

    #[test]
    fn select_with_sequence_and_condition() {
        let sql = build_select("items", "id, name", "id = 1").unwrap();
        assert_eq!(sql, "SELECT id, name FROM items WHERE id = 1");
    }

    #[test]
    fn select_with_column_list() {
        let sql = build_select("items", ["id", "name", "price"], Conditions::None).unwrap();
        assert_eq!(sql, "SELECT id, name, price FROM items");
    }

    #[test]
    fn select_with_condition_fragments() {
        let sql =
            build_select("items", Columns::All, ["id = 1", "AND", "price = 20"]).unwrap();
        assert_eq!(sql, "SELECT * FROM items WHERE id = 1 AND price = 20");
    }

    #[test]
    fn select_empty_columns_defaults_to_star() {
        let sql = build_select("items", "", "id = 1").unwrap();
        assert_eq!(sql, "SELECT * FROM items WHERE id = 1");
    }

    #[test]
    fn select_rejects_empty_table() {
        let err = build_select("", "id", "id = 1").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err,
            SqlError::invalid_argument("table name must be specified")
        );
    }
}
