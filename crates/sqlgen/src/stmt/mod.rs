//! Statement formatting for sqlgen.
//!
//! This module assembles SQL statement text from table names, column
//! specifications, and condition fragments. It is pure string formatting:
//! nothing is parsed, validated as SQL, or executed.
//!
//! # Features
//!
//! - **One canonical build per statement kind**: every input shape is
//!   normalized at the boundary, so there is a single concatenation path
//! - **Tagged-union inputs**: pre-joined text and word lists share the
//!   same entry points via [`Columns`], [`Conditions`], and [`SetClause`]
//! - **Placeholders, not literals**: UPDATE column lists and INSERT
//!   columns emit `?` markers for the caller's bound values
//!
//! # Usage
//!
//! ```
//! use sqlgen::stmt;
//!
//! let select = stmt::build_select("items", "id, name", "id = 1")?;
//! assert_eq!(select, "SELECT id, name FROM items WHERE id = 1");
//!
//! let update = stmt::build_update("items", ["id", "name"], "id = 1")?;
//! assert_eq!(update, "UPDATE items SET id = ?, name = ? WHERE id = 1");
//!
//! let delete = stmt::build_delete("items", ["id = 1", "AND", "price > 20"])?;
//! assert_eq!(delete, "DELETE FROM items WHERE id = 1 AND price > 20");
//!
//! let insert = stmt::build_insert("items", &["id", "name", "price"])?;
//! assert_eq!(insert, "INSERT INTO items (id, name, price) VALUES (?, ?, ?)");
//! # Ok::<(), sqlgen::SqlError>(())
//! ```

mod delete;
mod input;
mod insert;
mod select;
mod update;
mod words;

pub use delete::build_delete;
pub use input::{Columns, Conditions, SetClause};
pub use insert::build_insert;
pub use select::build_select;
pub use update::build_update;
pub use words::{join_words, join_words_with, to_set_clause};

use crate::error::{SqlError, SqlResult};

/// Every statement kind requires a non-empty table name.
fn require_table(table: &str) -> SqlResult<&str> {
    if table.is_empty() {
        return Err(SqlError::invalid_argument("table name must be specified"));
    }
    Ok(table)
}

#[cfg(test)]
mod tests;
