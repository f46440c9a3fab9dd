//! Collection query model.
//!
//! List endpoints accept filters in the form `field[op]=value` (a bare
//! `field=value` means `[exact]`) plus `offset` and `limit` windowing
//! parameters. This module owns that grammar; the per-resource field
//! whitelists live with each backend.

use crate::error::QueryError;

/// Filter operators accepted in `field[op]=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact match (the default when no operator is given).
    Exact,
    /// Regular-expression match.
    Matches,
    /// Prefix match.
    StartsWith,
    /// Suffix match.
    EndsWith,
    /// Substring match.
    Contains,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Null test; value is `true` or `false`.
    IsNull,
}

impl FilterOp {
    /// Parses the operator name from inside the brackets.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "exact" => Some(FilterOp::Exact),
            "matches" => Some(FilterOp::Matches),
            "startswith" => Some(FilterOp::StartsWith),
            "endswith" => Some(FilterOp::EndsWith),
            "contains" => Some(FilterOp::Contains),
            "gt" => Some(FilterOp::Gt),
            "gte" => Some(FilterOp::Gte),
            "lt" => Some(FilterOp::Lt),
            "lte" => Some(FilterOp::Lte),
            "isnull" => Some(FilterOp::IsNull),
            _ => None,
        }
    }

    /// The operator name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Exact => "exact",
            FilterOp::Matches => "matches",
            FilterOp::StartsWith => "startswith",
            FilterOp::EndsWith => "endswith",
            FilterOp::Contains => "contains",
            FilterOp::Gt => "gt",
            FilterOp::Gte => "gte",
            FilterOp::Lt => "lt",
            FilterOp::Lte => "lte",
            FilterOp::IsNull => "isnull",
        }
    }
}

/// One parsed filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// API field name (camelCase, as on the wire).
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

/// A parsed collection query: filters plus a row window.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    /// Row window start.
    pub offset: usize,
    /// Row window size.
    pub limit: usize,
}

impl ListQuery {
    /// An unfiltered query over the first `limit` rows.
    pub fn first_page(limit: usize) -> Self {
        Self {
            filters: Vec::new(),
            offset: 0,
            limit,
        }
    }

    /// Parses query-string pairs into a `ListQuery`.
    ///
    /// `offset` and `limit` are reserved parameter names; everything else
    /// is treated as a filter. Pair order is preserved. `limit` is clamped
    /// to `max_limit`.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidParameter`] for unparseable offset/limit,
    /// [`QueryError::UnknownOperator`] for an unrecognized `[op]`.
    pub fn from_pairs<'a, I>(
        pairs: I,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = ListQuery {
            filters: Vec::new(),
            offset: 0,
            limit: default_limit,
        };

        for (key, value) in pairs {
            match key {
                "offset" => {
                    query.offset = parse_window_param("offset", value)?;
                }
                "limit" => {
                    let limit = parse_window_param("limit", value)?;
                    if limit == 0 {
                        return Err(QueryError::InvalidParameter {
                            parameter: "limit".to_string(),
                            message: "limit must be at least 1".to_string(),
                        });
                    }
                    query.limit = limit.min(max_limit);
                }
                _ => {
                    let (field, op) = parse_filter_key(key)?;
                    query.filters.push(Filter {
                        field: field.to_string(),
                        op,
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(query)
    }
}

/// Splits `name[op]` into the field name and operator.
fn parse_filter_key(key: &str) -> Result<(&str, FilterOp), QueryError> {
    match (key.find('['), key.ends_with(']')) {
        (Some(open), true) => {
            let op = &key[open + 1..key.len() - 1];
            let op = FilterOp::parse(op).ok_or_else(|| QueryError::UnknownOperator {
                operator: op.to_string(),
            })?;
            Ok((&key[..open], op))
        }
        _ => Ok((key, FilterOp::Exact)),
    }
}

fn parse_window_param(name: &str, value: &str) -> Result<usize, QueryError> {
    value
        .parse::<usize>()
        .map_err(|_| QueryError::InvalidParameter {
            parameter: name.to_string(),
            message: format!("expected a non-negative integer, got '{value}'"),
        })
}
