//! Paginated collection envelope.
//!
//! Every collection endpoint (except the bare-sequence
//! `/callnumbermatches/`) wraps its rows in the same hyperlinked envelope:
//!
//! ```json
//! {
//!   "totalCount": 715,
//!   "startRow": 20,
//!   "endRow": 39,
//!   "_links": {
//!     "self": { "href": "..." },
//!     "previous": { "href": "...offset=0" },
//!     "next": { "href": "...offset=40" }
//!   },
//!   "_embedded": { "items": [ ... ] }
//! }
//! ```
//!
//! `previous` appears iff the window starts past row zero, `next` iff rows
//! remain past the window. Row indexes are inclusive, so an empty first
//! window reports `endRow: -1`.

use serde::Serialize;
use serde_json::{Value, json};
use stacks_persistence::Page;
use url::form_urlencoded;

/// Builds the envelope for one page of a collection.
///
/// `pairs` are the request's decoded query pairs in request order; the
/// `self` link reproduces them verbatim (re-encoded), and the
/// `previous`/`next` links reproduce them minus `offset`, which is
/// re-appended with the neighboring window's value.
pub fn collection_envelope<T: Serialize>(
    base_url: &str,
    path: &str,
    pairs: &[(String, String)],
    page: &Page<T>,
    offset: usize,
    limit: usize,
    collection: &str,
) -> Value {
    let end_row = offset as i64 + page.rows.len() as i64 - 1;

    let mut links = json!({
        "self": { "href": href(base_url, path, pairs.iter().cloned()) },
    });

    if offset > 0 {
        let previous = offset.saturating_sub(limit);
        links["previous"] = json!({ "href": href_at_offset(base_url, path, pairs, previous) });
    }
    if ((offset + limit) as u64) < page.total {
        let next = offset + limit;
        links["next"] = json!({ "href": href_at_offset(base_url, path, pairs, next) });
    }

    json!({
        "totalCount": page.total,
        "startRow": offset,
        "endRow": end_row,
        "_links": links,
        "_embedded": { collection: page.rows },
    })
}

/// Absolutizes `path` against the base URL with a re-encoded query string.
fn href<I>(base_url: &str, path: &str, pairs: I) -> String
where
    I: Iterator<Item = (String, String)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    let query = serializer.finish();

    if query.is_empty() {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}{path}?{query}")
    }
}

/// The request URL with `offset` replaced by the given value.
///
/// All other pairs survive in order; `offset` is emitted last and always
/// explicitly, including `offset=0`.
fn href_at_offset(base_url: &str, path: &str, pairs: &[(String, String)], offset: usize) -> String {
    let pairs = pairs
        .iter()
        .filter(|(k, _)| k != "offset")
        .cloned()
        .chain(std::iter::once(("offset".to_string(), offset.to_string())));
    href(base_url, path, pairs)
}
