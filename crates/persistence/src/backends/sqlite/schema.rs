//! SQLite schema for the catalog store.
//!
//! One table per resource, mirroring the flat shape of the ILS export.
//! Record keys come from the upstream store and are primary keys here;
//! MARC fields, e-resource subjects, and API-user permissions are stored
//! as JSON text columns.

use rusqlite::Connection;

/// Creates all tables and indexes if they do not exist.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS item (
    id              TEXT PRIMARY KEY,
    bib_id          TEXT NOT NULL,
    call_number     TEXT,
    barcode         TEXT,
    location_code   TEXT,
    item_type_code  TEXT,
    status_code     TEXT,
    copy_number     INTEGER,
    suppressed      INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_item_bib_id        ON item(bib_id);
CREATE INDEX IF NOT EXISTS idx_item_call_number   ON item(call_number);
CREATE INDEX IF NOT EXISTS idx_item_location_code ON item(location_code);

CREATE TABLE IF NOT EXISTS bib (
    id               TEXT PRIMARY KEY,
    title            TEXT NOT NULL,
    author           TEXT,
    publication_year INTEGER,
    material_type    TEXT,
    call_number      TEXT,
    suppressed       INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_bib_title ON bib(title);

CREATE TABLE IF NOT EXISTS marc (
    id     TEXT PRIMARY KEY,
    leader TEXT,
    fields TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS eresource (
    id             TEXT PRIMARY KEY,
    title          TEXT NOT NULL,
    resource_type  TEXT,
    publisher      TEXT,
    subjects       TEXT NOT NULL DEFAULT '[]',
    holdings_count INTEGER
);

CREATE TABLE IF NOT EXISTS location (
    code  TEXT PRIMARY KEY,
    label TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS item_type (
    code  TEXT PRIMARY KEY,
    label TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS item_status (
    code  TEXT PRIMARY KEY,
    label TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS api_user (
    username    TEXT PRIMARY KEY,
    api_key     TEXT NOT NULL UNIQUE,
    permissions TEXT NOT NULL DEFAULT '[]'
);
"#;
