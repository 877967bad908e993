//! Query-execution primitives.
//!
//! Thin wrappers over rusqlite that every query and operation goes through.
//! Arguments are always bound as parameters; SQL text is never built from
//! caller-supplied values.

use rusqlite::{Connection, Params, Row};

/// Run a query expected to return at most one row.
///
/// Returns `Ok(None)` when the query matches nothing.
pub fn select_one_row<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> rusqlite::Result<Option<T>>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare_cached(sql)?;
    match stmt.query_row(params, map) {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Run a query and map every returned row, preserving row order.
pub fn select_n_rows<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, map)?;
    rows.collect()
}

/// Run a mutating statement. Returns the number of affected rows.
pub fn perform_action<P: Params>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<usize> {
    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params)
}
