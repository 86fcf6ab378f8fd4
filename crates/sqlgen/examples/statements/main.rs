//! Prints one statement of each kind.
//!
//! Run with: cargo run --example statements

use sqlgen::{Conditions, SqlResult, build_delete, build_insert, build_select, build_update};

fn main() -> SqlResult<()> {
    let select = build_select("items", ["id", "name", "price"], "price > 20")?;
    println!("{select}");

    let update = build_update("items", ["name", "price"], "id = ?")?;
    println!("{update}");

    let delete = build_delete("items", ["id = 1", "AND", "price > 20"])?;
    println!("{delete}");

    let insert = build_insert("items", &["id", "name", "price"])?;
    println!("{insert}");

    let select_all = build_select("items", "", Conditions::None)?;
    println!("{select_all}");

    Ok(())
}
