//! DELETE statement formatting.

use crate::error::SqlResult;
use crate::stmt::input::Conditions;
use crate::stmt::require_table;

/// Build a DELETE statement.
///
/// `conditions` default to no WHERE clause, which deletes every row; the
/// caller is trusted to mean it. Fails if `table` is empty.
///
/// # Example
/// ```
/// use sqlgen::build_delete;
///
/// let sql = build_delete("items", ["id = 1", "AND", "price > 20"])?;
/// assert_eq!(sql, "DELETE FROM items WHERE id = 1 AND price > 20");
/// # Ok::<(), sqlgen::SqlError>(())
/// ```
pub fn build_delete(table: &str, conditions: impl Into<Conditions>) -> SqlResult<String> {
    build(table, conditions.into().resolve())
}

/// Canonical implementation over resolved clause text.
fn build(table: &str, conditions: Option<String>) -> SqlResult<String> {
    let table = require_table(table)?;

    let mut sql = String::from("DELETE FROM ");
    sql.push_str(table);

    if let Some(cond) = conditions {
        sql.push_str(" WHERE ");
        sql.push_str(&cond);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%sql, "built DELETE statement");

    Ok(sql)
}
