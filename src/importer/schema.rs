use rusqlite::Connection;

/// Destination table name
pub const TABLE_NAME: &str = "election_results";

/// Drop-and-create DDL. The table is replaced wholesale on every run, so
/// re-importing the same file never duplicates rows.
const RESET_SQL: &str = r#"
DROP TABLE IF EXISTS election_results;
CREATE TABLE election_results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    state TEXT,
    county_name TEXT,
    year INTEGER,
    state_po TEXT,
    county_fips TEXT,
    office TEXT,
    candidate TEXT,
    party TEXT,
    candidatevotes INTEGER,
    totalvotes INTEGER,
    version TEXT,
    mode TEXT
);
"#;

pub(crate) const INSERT_SQL: &str = "INSERT INTO election_results (
    state, county_name, year, state_po, county_fips,
    office, candidate, party, candidatevotes, totalvotes,
    version, mode
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

/// Reset the destination table to an empty fresh schema. Idempotent; run once
/// at the start of each import.
pub fn reset_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(RESET_SQL)
}
