use chrono::Utc;
use rusqlite::{params, Connection};

use crate::domain::SearchCriteria;
use crate::errors::ServerError;

/// Append a normalized snapshot of the criteria to the search audit.
/// Blank text fields become NULL; numeric fields are already parsed.
/// The table is write-only from the application's point of view.
pub fn record(conn: &Connection, criteria: &SearchCriteria) -> Result<(), ServerError> {
    let location = Some(criteria.location.trim()).filter(|s| !s.is_empty());

    conn.execute(
        r#"
        insert into property_search (
            location, property_type, status,
            price_range_min, price_range_max,
            bedrooms, suites, parking_spots,
            searched_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            location,
            criteria.property_type.map(|t| t.as_str()),
            criteria.status.map(|s| s.as_str()),
            criteria.price_min,
            criteria.price_max,
            criteria.bedrooms_min,
            criteria.suites_min,
            criteria.parking_min,
            Utc::now().naive_utc(),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert search history failed: {e}")))?;

    Ok(())
}
