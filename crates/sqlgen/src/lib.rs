//! # sqlgen
//!
//! A small SQL statement text formatter.
//!
//! ## Features
//!
//! - **Pure formatting**: assembles SELECT / UPDATE / DELETE / INSERT text
//!   from table names, column lists, and condition fragments; no parsing,
//!   no execution, no connections
//! - **Flexible inputs**: columns and conditions accept pre-joined strings
//!   or word lists, normalized once at the boundary
//! - **Parameter placeholders**: UPDATE column lists and INSERT columns
//!   emit `?` markers so values stay out of the statement text
//! - **Stateless**: every function is pure and synchronous, safe to call
//!   from any thread
//!
//! ## Usage
//!
//! ```
//! use sqlgen::{build_delete, build_insert, build_select, build_update};
//!
//! let sql = build_select("items", "id, name", "id = 1")?;
//! assert_eq!(sql, "SELECT id, name FROM items WHERE id = 1");
//!
//! let sql = build_update("items", ["id", "name"], "id = 1")?;
//! assert_eq!(sql, "UPDATE items SET id = ?, name = ? WHERE id = 1");
//!
//! let sql = build_delete("items", ["id = 1", "AND", "price > 20"])?;
//! assert_eq!(sql, "DELETE FROM items WHERE id = 1 AND price > 20");
//!
//! let sql = build_insert("items", &["id", "name", "price"])?;
//! assert_eq!(sql, "INSERT INTO items (id, name, price) VALUES (?, ?, ?)");
//! # Ok::<(), sqlgen::SqlError>(())
//! ```
//!
//! The caller supplies already-valid SQL fragments; nothing here quotes
//! identifiers or guards against injection beyond the `?` placeholders.

pub mod error;
pub mod stmt;

pub use error::{SqlError, SqlResult};

// Re-export the stmt surface for easy access
pub use stmt::{
    Columns, Conditions, SetClause, build_delete, build_insert, build_select, build_update,
    join_words, join_words_with, to_set_clause,
};
