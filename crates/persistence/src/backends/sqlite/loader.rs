//! Record loading for the SQLite backend.
//!
//! The ILS export pipeline (and the test fixtures) push records in through
//! these methods. Inserts are upserts keyed on the record id, so re-running
//! an export refreshes rows in place.

use stacks_catalog::{ApiUser, Bib, EResource, Item, ItemStatus, ItemType, Location, MarcRecord};

use crate::error::{BackendError, StorageResult};

use super::backend::{BACKEND_NAME, SqliteBackend, map_sql_err};

fn to_json(value: &impl serde::Serialize) -> StorageResult<String> {
    serde_json::to_string(value).map_err(|e| {
        BackendError::Execution {
            backend_name: BACKEND_NAME,
            message: e.to_string(),
        }
        .into()
    })
}

impl SqliteBackend {
    pub fn insert_item(&self, item: &Item) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO item \
             (id, bib_id, call_number, barcode, location_code, item_type_code, status_code, copy_number, suppressed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                item.id,
                item.bib_id,
                item.call_number,
                item.barcode,
                item.location_code,
                item.item_type_code,
                item.status_code,
                item.copy_number,
                item.suppressed as i64,
            ],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    pub fn insert_bib(&self, bib: &Bib) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO bib \
             (id, title, author, publication_year, material_type, call_number, suppressed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                bib.id,
                bib.title,
                bib.author,
                bib.publication_year,
                bib.material_type,
                bib.call_number,
                bib.suppressed as i64,
            ],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    pub fn insert_marc(&self, record: &MarcRecord) -> StorageResult<()> {
        let fields = to_json(&record.fields)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO marc (id, leader, fields) VALUES (?1, ?2, ?3)",
            rusqlite::params![record.id, record.leader, fields],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    pub fn insert_eresource(&self, eresource: &EResource) -> StorageResult<()> {
        let subjects = to_json(&eresource.subjects)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO eresource \
             (id, title, resource_type, publisher, subjects, holdings_count) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                eresource.id,
                eresource.title,
                eresource.resource_type,
                eresource.publisher,
                subjects,
                eresource.holdings_count,
            ],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    pub fn insert_location(&self, location: &Location) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO location (code, label) VALUES (?1, ?2)",
            rusqlite::params![location.code, location.label],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    pub fn insert_item_type(&self, item_type: &ItemType) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO item_type (code, label) VALUES (?1, ?2)",
            rusqlite::params![item_type.code, item_type.label],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    pub fn insert_item_status(&self, item_status: &ItemStatus) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO item_status (code, label) VALUES (?1, ?2)",
            rusqlite::params![item_status.code, item_status.label],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }

    /// Registers an API user with the key that authenticates it. The key is
    /// stored alongside the user but never serialized back out.
    pub fn insert_api_user(&self, user: &ApiUser, api_key: &str) -> StorageResult<()> {
        let permissions = to_json(&user.permissions)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO api_user (username, api_key, permissions) VALUES (?1, ?2, ?3)",
            rusqlite::params![user.username, api_key, permissions],
        )
        .map_err(map_sql_err)?;
        Ok(())
    }
}
