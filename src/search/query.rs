use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use crate::db::properties::{row_to_property, PROPERTY_COLUMNS};
use crate::db::search_history;
use crate::domain::{PropertyRecord, SearchCriteria};
use crate::errors::ServerError;
use crate::search::broadcast::{SearchBroadcast, SearchBus};

/// Translate criteria into a WHERE clause and its positional parameters.
///
/// The location text splits on `-` (the suggestion label separator); every
/// non-empty part contributes a case-insensitive "contains" condition on
/// location, city and region, and all of those conditions OR together. A
/// selected suggestion labeled "location - city, region" therefore round-trips
/// into a query that matches at least the properties behind the suggestion.
/// Structured filters AND onto the location block: exact type/status,
/// lower-bound counts, inclusive price bounds.
///
/// Empty criteria produce an empty clause: every property matches.
pub fn build_filter(criteria: &SearchCriteria) -> (String, Vec<Value>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    let mut location_conditions: Vec<String> = Vec::new();
    for part in criteria.location.split('-') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let pattern = format!("%{}%", part.to_lowercase());
        for column in ["location", "city", "region"] {
            params.push(Value::from(pattern.clone()));
            location_conditions.push(format!("lower({column}) like ?{}", params.len()));
        }
    }
    if !location_conditions.is_empty() {
        clauses.push(format!("({})", location_conditions.join(" or ")));
    }

    if let Some(kind) = criteria.property_type {
        params.push(Value::from(kind.as_str().to_string()));
        clauses.push(format!("type = ?{}", params.len()));
    }
    if let Some(status) = criteria.status {
        params.push(Value::from(status.as_str().to_string()));
        clauses.push(format!("status = ?{}", params.len()));
    }

    for (column, bound) in [
        ("bedrooms", criteria.bedrooms_min),
        ("suites", criteria.suites_min),
        ("parking_spots", criteria.parking_min),
    ] {
        if let Some(min) = bound {
            params.push(Value::from(i64::from(min)));
            clauses.push(format!("{column} >= ?{}", params.len()));
        }
    }

    if let Some(min) = criteria.price_min {
        params.push(Value::from(min));
        clauses.push(format!("price >= ?{}", params.len()));
    }
    if let Some(max) = criteria.price_max {
        params.push(Value::from(max));
        clauses.push(format!("price <= ?{}", params.len()));
    }

    (clauses.join(" and "), params)
}

/// Execute a search: compose the query, run it, append the history
/// snapshot, and publish the result set on the bus.
///
/// The history write happens only for non-empty result sets and is
/// fire-and-forget: its failure is logged and swallowed, never allowed
/// to fail a search that already resolved. The broadcast fires for every
/// completed search, zero-result ones included, after the history write
/// was issued.
pub fn execute(
    conn: &Connection,
    criteria: &SearchCriteria,
    bus: &mut SearchBus,
) -> Result<Vec<PropertyRecord>, ServerError> {
    let (filter, params) = build_filter(criteria);
    let sql = if filter.is_empty() {
        format!("select {PROPERTY_COLUMNS} from properties order by created_at desc, id desc")
    } else {
        format!(
            "select {PROPERTY_COLUMNS} from properties where {filter} \
             order by created_at desc, id desc"
        )
    };

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare search failed: {e}")))?;
    let rows = stmt
        .query_map(params_from_iter(params), row_to_property)
        .map_err(|e| ServerError::DbError(format!("search query failed: {e}")))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| ServerError::DbError(format!("map search row failed: {e}")))?);
    }

    if !records.is_empty() {
        if let Err(e) = search_history::record(conn, criteria) {
            tracing::warn!(error = %e, "search history write failed");
        }
    }

    bus.publish(&SearchBroadcast {
        results: records.clone(),
        criteria: criteria.clone(),
    });

    tracing::info!(
        location = %criteria.location,
        results = records.len(),
        "search completed"
    );
    Ok(records)
}
