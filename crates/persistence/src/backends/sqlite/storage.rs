//! [`CatalogStorage`] implementation for the SQLite backend.
//!
//! Filters arrive as API field names; each resource maps its whitelisted
//! fields onto columns here. Anything outside the whitelist is a
//! [`QueryError::UnknownField`] before any SQL runs.

use async_trait::async_trait;
use regex::Regex;
use rusqlite::{Row, ToSql, params_from_iter};
use tracing::debug;
use stacks_catalog::{ApiUser, Bib, EResource, Item, ItemStatus, ItemType, Location, MarcRecord};

use crate::core::CatalogStorage;
use crate::error::{QueryError, StorageResult};
use crate::query::{Filter, FilterOp, ListQuery};
use crate::types::Page;

use super::backend::{BACKEND_NAME, SqliteBackend, map_sql_err};

const ITEM_COLUMNS: &str =
    "id, bib_id, call_number, barcode, location_code, item_type_code, status_code, copy_number, suppressed";

const ITEM_FIELDS: &[(&str, &str)] = &[
    ("id", "id"),
    ("bibId", "bib_id"),
    ("callNumber", "call_number"),
    ("barcode", "barcode"),
    ("locationCode", "location_code"),
    ("itemTypeCode", "item_type_code"),
    ("statusCode", "status_code"),
    ("copyNumber", "copy_number"),
    ("suppressed", "suppressed"),
];

const BIB_COLUMNS: &str =
    "id, title, author, publication_year, material_type, call_number, suppressed";

const BIB_FIELDS: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("author", "author"),
    ("publicationYear", "publication_year"),
    ("materialType", "material_type"),
    ("callNumber", "call_number"),
    ("suppressed", "suppressed"),
];

const MARC_COLUMNS: &str = "id, leader, fields";

// MARC fields live in a JSON document; tag/subfield search belongs to the
// store's indexing concern, so only the record key is filterable.
const MARC_FIELDS: &[(&str, &str)] = &[("id", "id")];

const ERESOURCE_COLUMNS: &str = "id, title, resource_type, publisher, subjects, holdings_count";

const ERESOURCE_FIELDS: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("resourceType", "resource_type"),
    ("publisher", "publisher"),
];

const CODE_COLUMNS: &str = "code, label";

const CODE_FIELDS: &[(&str, &str)] = &[("code", "code"), ("label", "label")];

const API_USER_COLUMNS: &str = "username, permissions";

const API_USER_FIELDS: &[(&str, &str)] = &[("username", "username")];

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        bib_id: row.get(1)?,
        call_number: row.get(2)?,
        barcode: row.get(3)?,
        location_code: row.get(4)?,
        item_type_code: row.get(5)?,
        status_code: row.get(6)?,
        copy_number: row.get::<_, Option<i64>>(7)?.map(|v| v as u32),
        suppressed: row.get::<_, i64>(8)? != 0,
    })
}

fn bib_from_row(row: &Row<'_>) -> rusqlite::Result<Bib> {
    Ok(Bib {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        publication_year: row.get::<_, Option<i64>>(3)?.map(|v| v as i32),
        material_type: row.get(4)?,
        call_number: row.get(5)?,
        suppressed: row.get::<_, i64>(6)? != 0,
    })
}

fn marc_from_row(row: &Row<'_>) -> rusqlite::Result<MarcRecord> {
    let fields_json: String = row.get(2)?;
    let fields = serde_json::from_str(&fields_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(MarcRecord {
        id: row.get(0)?,
        leader: row.get(1)?,
        fields,
    })
}

fn eresource_from_row(row: &Row<'_>) -> rusqlite::Result<EResource> {
    let subjects_json: String = row.get(4)?;
    let subjects = serde_json::from_str(&subjects_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(EResource {
        id: row.get(0)?,
        title: row.get(1)?,
        resource_type: row.get(2)?,
        publisher: row.get(3)?,
        subjects,
        holdings_count: row.get::<_, Option<i64>>(5)?.map(|v| v as u32),
    })
}

fn location_from_row(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        code: row.get(0)?,
        label: row.get(1)?,
    })
}

fn item_type_from_row(row: &Row<'_>) -> rusqlite::Result<ItemType> {
    Ok(ItemType {
        code: row.get(0)?,
        label: row.get(1)?,
    })
}

fn item_status_from_row(row: &Row<'_>) -> rusqlite::Result<ItemStatus> {
    Ok(ItemStatus {
        code: row.get(0)?,
        label: row.get(1)?,
    })
}

fn api_user_from_row(row: &Row<'_>) -> rusqlite::Result<ApiUser> {
    let permissions_json: String = row.get(1)?;
    let permissions = serde_json::from_str(&permissions_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(ApiUser {
        username: row.get(0)?,
        permissions,
    })
}

// Columns stored as 0/1; exact filters accept true/false as well.
const BOOLEAN_COLUMNS: &[&str] = &["suppressed"];

fn bind_value(column: &str, value: &str) -> String {
    if BOOLEAN_COLUMNS.contains(&column) {
        match value {
            "true" => return "1".to_string(),
            "false" => return "0".to_string(),
            _ => {}
        }
    }
    value.to_string()
}

/// Escapes LIKE wildcards so user input matches literally under `ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Builds a WHERE clause from whitelisted filters.
///
/// Returns the clause (with a leading ` WHERE`, or empty) and the
/// positional parameters to bind.
fn build_where(
    resource: &'static str,
    fields: &[(&str, &str)],
    filters: &[Filter],
) -> StorageResult<(String, Vec<String>)> {
    let mut clauses = Vec::with_capacity(filters.len());
    let mut params = Vec::with_capacity(filters.len());

    for filter in filters {
        let column = fields
            .iter()
            .find(|(api, _)| *api == filter.field)
            .map(|(_, column)| *column)
            .ok_or_else(|| QueryError::UnknownField {
                resource,
                field: filter.field.clone(),
            })?;

        match filter.op {
            FilterOp::Exact => {
                clauses.push(format!("{column} = ?"));
                params.push(bind_value(column, &filter.value));
            }
            FilterOp::Matches => {
                // Validate here so a bad pattern is a 400, not a failure
                // inside the REGEXP function mid-scan.
                Regex::new(&filter.value).map_err(|e| QueryError::InvalidPattern {
                    field: filter.field.clone(),
                    message: e.to_string(),
                })?;
                clauses.push(format!("{column} REGEXP ?"));
                params.push(filter.value.clone());
            }
            FilterOp::StartsWith => {
                clauses.push(format!("{column} LIKE ? ESCAPE '\\'"));
                params.push(format!("{}%", escape_like(&filter.value)));
            }
            FilterOp::EndsWith => {
                clauses.push(format!("{column} LIKE ? ESCAPE '\\'"));
                params.push(format!("%{}", escape_like(&filter.value)));
            }
            FilterOp::Contains => {
                clauses.push(format!("{column} LIKE ? ESCAPE '\\'"));
                params.push(format!("%{}%", escape_like(&filter.value)));
            }
            FilterOp::Gt => {
                clauses.push(format!("{column} > ?"));
                params.push(filter.value.clone());
            }
            FilterOp::Gte => {
                clauses.push(format!("{column} >= ?"));
                params.push(filter.value.clone());
            }
            FilterOp::Lt => {
                clauses.push(format!("{column} < ?"));
                params.push(filter.value.clone());
            }
            FilterOp::Lte => {
                clauses.push(format!("{column} <= ?"));
                params.push(filter.value.clone());
            }
            FilterOp::IsNull => match filter.value.as_str() {
                "true" | "1" => clauses.push(format!("{column} IS NULL")),
                "false" | "0" => clauses.push(format!("{column} IS NOT NULL")),
                other => {
                    return Err(QueryError::InvalidParameter {
                        parameter: filter.field.clone(),
                        message: format!("isnull expects true or false, got '{other}'"),
                    }
                    .into());
                }
            },
        }
    }

    let clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    Ok((clause, params))
}

impl SqliteBackend {
    fn select_page<T>(
        &self,
        table: &str,
        columns: &str,
        order_by: &str,
        resource: &'static str,
        fields: &[(&str, &str)],
        query: &ListQuery,
        map_row: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> StorageResult<Page<T>> {
        let (where_sql, params) = build_where(resource, fields, &query.filters)?;
        let conn = self.conn()?;

        let total: u64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM {table}{where_sql}"),
                params_from_iter(params.iter()),
                |row| row.get(0),
            )
            .map_err(map_sql_err)?;

        let sql = format!(
            "SELECT {columns} FROM {table}{where_sql} ORDER BY {order_by} LIMIT ? OFFSET ?"
        );
        let mut stmt = conn.prepare(&sql).map_err(map_sql_err)?;

        let limit = query.limit as i64;
        let offset = query.offset as i64;
        let mut bind: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        bind.push(&limit);
        bind.push(&offset);

        let rows = stmt
            .query_map(&bind[..], map_row)
            .map_err(map_sql_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sql_err)?;

        debug!(table, total, returned = rows.len(), offset = query.offset, "listed rows");
        Ok(Page::new(rows, total))
    }

    fn select_one<T>(
        &self,
        sql: &str,
        key: &str,
        map_row: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> StorageResult<Option<T>> {
        let conn = self.conn()?;
        match conn.query_row(sql, [key], map_row) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(map_sql_err(e)),
        }
    }
}

#[async_trait]
impl CatalogStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn list_items(&self, query: &ListQuery) -> StorageResult<Page<Item>> {
        self.select_page("item", ITEM_COLUMNS, "id", "items", ITEM_FIELDS, query, item_from_row)
    }

    async fn get_item(&self, id: &str) -> StorageResult<Option<Item>> {
        self.select_one(
            &format!("SELECT {ITEM_COLUMNS} FROM item WHERE id = ?"),
            id,
            item_from_row,
        )
    }

    async fn list_bibs(&self, query: &ListQuery) -> StorageResult<Page<Bib>> {
        self.select_page("bib", BIB_COLUMNS, "id", "bibs", BIB_FIELDS, query, bib_from_row)
    }

    async fn get_bib(&self, id: &str) -> StorageResult<Option<Bib>> {
        self.select_one(
            &format!("SELECT {BIB_COLUMNS} FROM bib WHERE id = ?"),
            id,
            bib_from_row,
        )
    }

    async fn list_marc(&self, query: &ListQuery) -> StorageResult<Page<MarcRecord>> {
        self.select_page("marc", MARC_COLUMNS, "id", "marc", MARC_FIELDS, query, marc_from_row)
    }

    async fn get_marc(&self, id: &str) -> StorageResult<Option<MarcRecord>> {
        self.select_one(
            &format!("SELECT {MARC_COLUMNS} FROM marc WHERE id = ?"),
            id,
            marc_from_row,
        )
    }

    async fn list_eresources(&self, query: &ListQuery) -> StorageResult<Page<EResource>> {
        self.select_page(
            "eresource",
            ERESOURCE_COLUMNS,
            "id",
            "eresources",
            ERESOURCE_FIELDS,
            query,
            eresource_from_row,
        )
    }

    async fn get_eresource(&self, id: &str) -> StorageResult<Option<EResource>> {
        self.select_one(
            &format!("SELECT {ERESOURCE_COLUMNS} FROM eresource WHERE id = ?"),
            id,
            eresource_from_row,
        )
    }

    async fn list_locations(&self, query: &ListQuery) -> StorageResult<Page<Location>> {
        self.select_page(
            "location",
            CODE_COLUMNS,
            "code",
            "locations",
            CODE_FIELDS,
            query,
            location_from_row,
        )
    }

    async fn get_location(&self, code: &str) -> StorageResult<Option<Location>> {
        self.select_one(
            &format!("SELECT {CODE_COLUMNS} FROM location WHERE code = ?"),
            code,
            location_from_row,
        )
    }

    async fn list_item_types(&self, query: &ListQuery) -> StorageResult<Page<ItemType>> {
        self.select_page(
            "item_type",
            CODE_COLUMNS,
            "code",
            "itemtypes",
            CODE_FIELDS,
            query,
            item_type_from_row,
        )
    }

    async fn get_item_type(&self, code: &str) -> StorageResult<Option<ItemType>> {
        self.select_one(
            &format!("SELECT {CODE_COLUMNS} FROM item_type WHERE code = ?"),
            code,
            item_type_from_row,
        )
    }

    async fn list_item_statuses(&self, query: &ListQuery) -> StorageResult<Page<ItemStatus>> {
        self.select_page(
            "item_status",
            CODE_COLUMNS,
            "code",
            "itemstatuses",
            CODE_FIELDS,
            query,
            item_status_from_row,
        )
    }

    async fn get_item_status(&self, code: &str) -> StorageResult<Option<ItemStatus>> {
        self.select_one(
            &format!("SELECT {CODE_COLUMNS} FROM item_status WHERE code = ?"),
            code,
            item_status_from_row,
        )
    }

    async fn list_api_users(&self, query: &ListQuery) -> StorageResult<Page<ApiUser>> {
        self.select_page(
            "api_user",
            API_USER_COLUMNS,
            "username",
            "apiusers",
            API_USER_FIELDS,
            query,
            api_user_from_row,
        )
    }

    async fn get_api_user(&self, username: &str) -> StorageResult<Option<ApiUser>> {
        self.select_one(
            &format!("SELECT {API_USER_COLUMNS} FROM api_user WHERE username = ?"),
            username,
            api_user_from_row,
        )
    }

    async fn authenticate(&self, api_key: &str) -> StorageResult<Option<ApiUser>> {
        self.select_one(
            &format!("SELECT {API_USER_COLUMNS} FROM api_user WHERE api_key = ?"),
            api_key,
            api_user_from_row,
        )
    }

    async fn call_number_matches(&self, prefix: &str, limit: usize) -> StorageResult<Vec<String>> {
        let conn = self.conn()?;
        let pattern = format!("{}%", escape_like(prefix));
        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT call_number FROM item \
                 WHERE call_number IS NOT NULL AND call_number LIKE ? ESCAPE '\\' \
                 ORDER BY call_number LIMIT ?",
            )
            .map_err(map_sql_err)?;

        let limit = limit as i64;
        let bind: [&dyn ToSql; 2] = [&pattern, &limit];
        let matches = stmt
            .query_map(&bind[..], |row| row.get(0))
            .map_err(map_sql_err)?
            .collect::<Result<Vec<String>, _>>()
            .map_err(map_sql_err)?;

        Ok(matches)
    }

    async fn first_item_per_location(&self, query: &ListQuery) -> StorageResult<Page<Item>> {
        let (where_sql, params) = build_where("items", ITEM_FIELDS, &query.filters)?;
        // Locationless items never participate in the grouping.
        let item_filter = if where_sql.is_empty() {
            " WHERE location_code IS NOT NULL".to_string()
        } else {
            format!("{where_sql} AND location_code IS NOT NULL")
        };

        let conn = self.conn()?;

        let total: u64 = conn
            .query_row(
                &format!("SELECT COUNT(DISTINCT location_code) FROM item{item_filter}"),
                params_from_iter(params.iter()),
                |row| row.get(0),
            )
            .map_err(map_sql_err)?;

        let sql = format!(
            "WITH ranked AS (\
                 SELECT {ITEM_COLUMNS}, \
                        ROW_NUMBER() OVER (PARTITION BY location_code ORDER BY call_number, id) AS rn \
                 FROM item{item_filter}\
             ) \
             SELECT {ITEM_COLUMNS} FROM ranked WHERE rn = 1 \
             ORDER BY location_code LIMIT ? OFFSET ?"
        );
        let mut stmt = conn.prepare(&sql).map_err(map_sql_err)?;

        let limit = query.limit as i64;
        let offset = query.offset as i64;
        let mut bind: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        bind.push(&limit);
        bind.push(&offset);

        let rows = stmt
            .query_map(&bind[..], item_from_row)
            .map_err(map_sql_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sql_err)?;

        Ok(Page::new(rows, total))
    }
}
