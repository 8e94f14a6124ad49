use rusqlite::{params, Connection};

/// Suggestions only kick in once the typed text is this long; shorter
/// input clears the panel without querying.
pub const MIN_QUERY_LEN: usize = 3;

/// One ranked entry in the suggestion panel, derived from the
/// `location_stats` aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSuggestion {
    /// "location - city, region", absent parts omitted. Selecting a
    /// suggestion puts this label back into the location field.
    pub label: String,
    pub count: i64,
    pub location: String,
    pub city: Option<String>,
    pub region: Option<String>,
}

/// Resolve partial location text into ranked suggestions.
///
/// Two-phase lookup: an exact (case-insensitive) match of the whole
/// trimmed text against location, city or region wins; only when that
/// yields nothing does a substring match run against the same columns.
/// Precise input gets precise suggestions, everything else degrades to
/// fuzzy matching.
///
/// This is a secondary feature: any store error resolves to an empty
/// panel, never to a user-visible error.
pub fn resolve(conn: &Connection, location_text: &str) -> Vec<LocationSuggestion> {
    let term = location_text.trim().to_lowercase();
    if term.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    match resolve_inner(conn, &term) {
        Ok(suggestions) => suggestions,
        Err(e) => {
            tracing::warn!(error = %e, "location suggestion lookup failed");
            Vec::new()
        }
    }
}

fn resolve_inner(conn: &Connection, term: &str) -> Result<Vec<LocationSuggestion>, rusqlite::Error> {
    let mut rows = query_stats(
        conn,
        "select location, city, region, property_count
         from location_stats
         where lower(location) = ?1 or lower(city) = ?1 or lower(region) = ?1
         order by property_count desc",
        term,
    )?;

    if rows.is_empty() {
        rows = query_stats(
            conn,
            "select location, city, region, property_count
             from location_stats
             where lower(location) like ?1 or lower(city) like ?1 or lower(region) like ?1
             order by property_count desc",
            &format!("%{term}%"),
        )?;
    }

    Ok(aggregate(rows))
}

fn query_stats(
    conn: &Connection,
    sql: &str,
    param: &str,
) -> Result<Vec<LocationSuggestion>, rusqlite::Error> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![param], |row| {
        let location: String = row.get(0)?;
        let city: Option<String> = row.get(1)?;
        let region: Option<String> = row.get(2)?;
        Ok(LocationSuggestion {
            label: format_label(&location, city.as_deref(), region.as_deref()),
            count: row.get(3)?,
            location,
            city,
            region,
        })
    })?;
    rows.collect()
}

/// Collapse rows sharing a label into one suggestion (last write wins)
/// and rank the result by descending property count.
fn aggregate(rows: Vec<LocationSuggestion>) -> Vec<LocationSuggestion> {
    let mut merged: Vec<LocationSuggestion> = Vec::with_capacity(rows.len());
    for row in rows {
        match merged.iter().position(|s| s.label == row.label) {
            Some(idx) => merged[idx] = row,
            None => merged.push(row),
        }
    }
    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged
}

fn format_label(location: &str, city: Option<&str>, region: Option<&str>) -> String {
    let tail: Vec<&str> = [city, region]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if tail.is_empty() {
        location.to_string()
    } else {
        format!("{} - {}", location, tail.join(", "))
    }
}
