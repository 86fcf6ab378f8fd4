//! UPDATE statement formatting.

use crate::error::{SqlError, SqlResult};
use crate::stmt::input::{Conditions, SetClause};
use crate::stmt::require_table;

/// Build an UPDATE statement.
///
/// The SET clause is required: pass either pre-built assignment text
/// (`"price = 20, name = 'bolt'"`) or a column list, which becomes
/// parameterized `col = ?` pairs. Fails if `table` or the set clause is
/// empty.
///
/// # Example
/// ```
/// use sqlgen::build_update;
///
/// let sql = build_update("items", ["id", "name"], "id = 1")?;
/// assert_eq!(sql, "UPDATE items SET id = ?, name = ? WHERE id = 1");
///
/// let sql = build_update("items", "price = 40", ["id = 1", "AND", "price = 20"])?;
/// assert_eq!(sql, "UPDATE items SET price = 40 WHERE id = 1 AND price = 20");
/// # Ok::<(), sqlgen::SqlError>(())
/// ```
pub fn build_update(
    table: &str,
    set: impl Into<SetClause>,
    conditions: impl Into<Conditions>,
) -> SqlResult<String> {
    build(table, set.into().resolve(), conditions.into().resolve())
}

/// Canonical implementation over resolved clause text.
fn build(table: &str, set: Option<String>, conditions: Option<String>) -> SqlResult<String> {
    let table = require_table(table)?;
    let set =
        set.ok_or_else(|| SqlError::invalid_argument("set clause must be specified"))?;

    let mut sql = String::from("UPDATE ");
    sql.push_str(table);
    sql.push_str(" SET ");
    sql.push_str(&set);

    if let Some(cond) = conditions {
        sql.push_str(" WHERE ");
        sql.push_str(&cond);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%sql, "built UPDATE statement");

    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_with_raw_set_clause() {
        let sql = build_update("items", "price = 20, name = 10", "id = 1").unwrap();
        assert_eq!(sql, "UPDATE items SET price = 20, name = 10 WHERE id = 1");
    }

    #[test]
    fn update_with_column_list_emits_placeholders() {
        let sql = build_update("items", ["id", "name"], "id = 1").unwrap();
        assert_eq!(sql, "UPDATE items SET id = ?, name = ? WHERE id = 1");
    }

    #[test]
    fn update_without_conditions() {
        let sql = build_update("items", "price = 40", Conditions::None).unwrap();
        assert_eq!(sql, "UPDATE items SET price = 40");
    }

    #[test]
    fn update_with_condition_fragments() {
        let sql =
            build_update("items", "price = 40", ["id = 1", "AND", "price = 20"]).unwrap();
        assert_eq!(sql, "UPDATE items SET price = 40 WHERE id = 1 AND price = 20");
    }

    #[test]
    fn update_rejects_empty_table() {
        let err = build_update("", "price = 40", Conditions::None).unwrap_err();
        assert_eq!(
            err,
            SqlError::invalid_argument("table name must be specified")
        );
    }

    #[test]
    fn update_rejects_missing_set_clause() {
        let err = build_update("items", "", Conditions::None).unwrap_err();
        assert_eq!(
            err,
            SqlError::invalid_argument("set clause must be specified")
        );
    }

    #[test]
    fn update_rejects_empty_column_list() {
        let err = build_update("items", Vec::<&str>::new(), "id = 1").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
