use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{PropertyRecord, PropertyStatus, PropertyType};
use crate::errors::ServerError;

pub(crate) const PROPERTY_COLUMNS: &str = "id, title, description, price, location, city, region, \
     type, status, display_status, bedrooms, suites, bathrooms, parking_spots, area, \
     amenities, images, video_links, created_at";

/// Map a `PROPERTY_COLUMNS` row into the typed domain record.
/// JSON-array columns decode leniently: a malformed value renders as an
/// empty list rather than taking the whole page down.
pub(crate) fn row_to_property(row: &Row) -> rusqlite::Result<PropertyRecord> {
    let kind_raw: String = row.get(7)?;
    let kind = PropertyType::parse(&kind_raw).map_err(|e| conversion_error(7, e))?;

    let status_raw: String = row.get(8)?;
    let status = PropertyStatus::parse(&status_raw).map_err(|e| conversion_error(8, e))?;

    Ok(PropertyRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        location: row.get(4)?,
        city: row.get(5)?,
        region: row.get(6)?,
        kind,
        status,
        display_status: row.get(9)?,
        bedrooms: row.get(10)?,
        suites: row.get(11)?,
        bathrooms: row.get(12)?,
        parking_spots: row.get(13)?,
        area: row.get(14)?,
        amenities: json_list(row.get::<_, String>(15)?),
        images: json_list(row.get::<_, String>(16)?),
        video_links: json_list(row.get::<_, String>(17)?),
        created_at: row.get(18)?,
    })
}

fn json_list(raw: String) -> Vec<String> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn conversion_error(idx: usize, e: ServerError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

pub fn list_all(conn: &Connection) -> Result<Vec<PropertyRecord>, ServerError> {
    select_properties(
        conn,
        &format!("select {PROPERTY_COLUMNS} from properties order by created_at desc, id desc"),
        [],
    )
}

pub fn get_property(conn: &Connection, id: i64) -> Result<Option<PropertyRecord>, ServerError> {
    conn.query_row(
        &format!("select {PROPERTY_COLUMNS} from properties where id = ?1"),
        params![id],
        row_to_property,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select property failed: {e}")))
}

/// The front page's default set: curated featured rows in curated order,
/// falling back to the six most recent properties when nothing is curated.
pub fn default_featured_set(conn: &Connection) -> Result<Vec<PropertyRecord>, ServerError> {
    let featured = select_properties(
        conn,
        &format!(
            "select {PROPERTY_COLUMNS} from properties
             where id in (select property_id from featured_properties where active = 1)
             order by (select position from featured_properties f
                       where f.property_id = properties.id and f.active = 1)"
        ),
        [],
    )?;

    if !featured.is_empty() {
        return Ok(featured);
    }
    recent(conn, 6)
}

pub fn recent(conn: &Connection, limit: i64) -> Result<Vec<PropertyRecord>, ServerError> {
    select_properties(
        conn,
        &format!(
            "select {PROPERTY_COLUMNS} from properties
             order by created_at desc, id desc limit ?1"
        ),
        params![limit],
    )
}

/// Launch inventory for the dedicated front-page region, newest first.
pub fn launches(conn: &Connection) -> Result<Vec<PropertyRecord>, ServerError> {
    select_properties(
        conn,
        &format!(
            "select {PROPERTY_COLUMNS} from properties
             where status = 'launch' order by created_at desc, id desc"
        ),
        [],
    )
}

fn select_properties<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<PropertyRecord>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(format!("prepare properties query failed: {e}")))?;
    let rows = stmt
        .query_map(params, row_to_property)
        .map_err(|e| ServerError::DbError(format!("properties query failed: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(format!("map property row failed: {e}")))?);
    }
    Ok(out)
}

/// Insert/update payload for the admin property form. `id` and
/// `created_at` stay store-owned.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub location: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub kind: PropertyType,
    pub status: PropertyStatus,
    pub display_status: Option<String>,
    pub bedrooms: Option<i64>,
    pub suites: Option<i64>,
    pub bathrooms: Option<i64>,
    pub parking_spots: Option<i64>,
    pub area: Option<f64>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub video_links: Vec<String>,
}

pub fn insert_property(conn: &Connection, draft: &PropertyDraft) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into properties (
            title, description, price, location, city, region,
            type, status, display_status,
            bedrooms, suites, bathrooms, parking_spots, area,
            amenities, images, video_links, created_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
        "#,
        params![
            draft.title,
            draft.description,
            draft.price,
            draft.location,
            draft.city,
            draft.region,
            draft.kind.as_str(),
            draft.status.as_str(),
            draft.display_status,
            draft.bedrooms,
            draft.suites,
            draft.bathrooms,
            draft.parking_spots,
            draft.area,
            json_column(&draft.amenities)?,
            json_column(&draft.images)?,
            json_column(&draft.video_links)?,
            Utc::now().naive_utc(),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert property failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

pub fn update_property(
    conn: &Connection,
    id: i64,
    draft: &PropertyDraft,
) -> Result<(), ServerError> {
    let updated = conn
        .execute(
            r#"
            update properties set
                title = ?1, description = ?2, price = ?3,
                location = ?4, city = ?5, region = ?6,
                type = ?7, status = ?8, display_status = ?9,
                bedrooms = ?10, suites = ?11, bathrooms = ?12,
                parking_spots = ?13, area = ?14,
                amenities = ?15, images = ?16, video_links = ?17
            where id = ?18
            "#,
            params![
                draft.title,
                draft.description,
                draft.price,
                draft.location,
                draft.city,
                draft.region,
                draft.kind.as_str(),
                draft.status.as_str(),
                draft.display_status,
                draft.bedrooms,
                draft.suites,
                draft.bathrooms,
                draft.parking_spots,
                draft.area,
                json_column(&draft.amenities)?,
                json_column(&draft.images)?,
                json_column(&draft.video_links)?,
                id,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update property failed: {e}")))?;

    if updated == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_property(conn: &Connection, id: i64) -> Result<(), ServerError> {
    let deleted = conn
        .execute("delete from properties where id = ?1", params![id])
        .map_err(|e| ServerError::DbError(format!("delete property failed: {e}")))?;

    if deleted == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

fn json_column(values: &[String]) -> Result<String, ServerError> {
    serde_json::to_string(values)
        .map_err(|e| ServerError::DbError(format!("encode json column failed: {e}")))
}
