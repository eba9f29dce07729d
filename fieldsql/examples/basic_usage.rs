use fieldsql::{accessor, delete, insert, update, FieldRef, QueryBuilder};

fn main() {
    // INSERT with columns derived from getter-style accessors
    let insert_stmt = insert("users")
        .with([accessor!(getName), accessor!(getEmail), accessor!(getCreatedAt)])
        .build();
    println!("INSERT SQL: {insert_stmt}");
    println!("  bind {} values in column order", insert_stmt.placeholders());

    // UPDATE: SET columns first, condition value binds last
    let update_stmt = update("users")
        .with([accessor!(getName), accessor!(getEmail)])
        .where_(accessor!(getId))
        .build();
    println!("UPDATE SQL: {update_stmt}");

    // DELETE with a single equality condition
    let delete_stmt = delete("users").where_(accessor!(getId)).build();
    println!("DELETE SQL: {delete_stmt}");

    // Accessor names only known at run time are validated
    match FieldRef::new("getLastLogin") {
        Ok(field) => {
            let stmt = update("users").with([field]).where_(accessor!(getId)).build();
            println!("Dynamic UPDATE SQL: {stmt}");
        }
        Err(err) => println!("bad accessor: {err}"),
    }

    // A builder with missing required state yields the incomplete sentinel
    let not_ready = insert("users").build();
    assert!(not_ready.is_incomplete());
    println!("No columns yet -> incomplete statement (empty text)");
}
