//! INSERT statement formatting.

use crate::error::{SqlError, SqlResult};
use crate::stmt::require_table;
use crate::stmt::words::join_words;

/// Build an INSERT statement with one `?` placeholder per column.
///
/// Column order is preserved; no literal values are embedded, binding is
/// the caller's responsibility. Fails if `table` is empty or `columns`
/// has no elements.
///
/// # Example
/// ```
/// use sqlgen::build_insert;
///
/// let sql = build_insert("items", &["id", "name", "price"])?;
/// assert_eq!(sql, "INSERT INTO items (id, name, price) VALUES (?, ?, ?)");
/// # Ok::<(), sqlgen::SqlError>(())
/// ```
pub fn build_insert<S: AsRef<str>>(table: &str, columns: &[S]) -> SqlResult<String> {
    let table = require_table(table)?;
    if columns.is_empty() {
        return Err(SqlError::invalid_argument(
            "insert requires at least one column",
        ));
    }

    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        join_words(columns),
        placeholders
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(%sql, "built INSERT statement");

    Ok(sql)
}
