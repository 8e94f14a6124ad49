use std::collections::HashMap;

use crate::domain::property::{PropertyStatus, PropertyType};
use crate::errors::ServerError;

/// The user's current filter selections. Every absent field means
/// "no constraint on this dimension": an all-empty criteria matches
/// every property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Free-form location text, matched against location, city and region.
    pub location: String,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    /// Lower bounds ("N+") on the corresponding count fields.
    pub bedrooms_min: Option<u32>,
    pub suites_min: Option<u32>,
    pub parking_min: Option<u32>,
    /// Inclusive price bounds; either side may be absent.
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.location.trim().is_empty()
            && self.property_type.is_none()
            && self.status.is_none()
            && self.bedrooms_min.is_none()
            && self.suites_min.is_none()
            && self.parking_min.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }

    /// Decode criteria from the search form's query parameters. Blank
    /// values are treated as absent; malformed numbers or unknown enum
    /// values are a BadRequest, not a silent drop.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("").trim();

        let property_type = match get("property_type") {
            "" => None,
            s => Some(PropertyType::parse(s)?),
        };
        let status = match get("status") {
            "" => None,
            s => Some(PropertyStatus::parse(s)?),
        };

        let (price_min, price_max) = parse_price_range(get("price_range"))?;

        Ok(Self {
            location: get("location").to_string(),
            property_type,
            status,
            bedrooms_min: parse_min(get("bedrooms"), "bedrooms")?,
            suites_min: parse_min(get("suites"), "suites")?,
            parking_min: parse_min(get("parking_spots"), "parking_spots")?,
            price_min,
            price_max,
        })
    }
}

/// The price selector encodes its value as "min-max" with either side
/// optional ("5000000-" means five million and up).
pub fn parse_price_range(raw: &str) -> Result<(Option<i64>, Option<i64>), ServerError> {
    if raw.is_empty() {
        return Ok((None, None));
    }
    let Some((lo, hi)) = raw.split_once('-') else {
        return Err(ServerError::BadRequest(format!(
            "malformed price range: {raw}"
        )));
    };
    Ok((parse_price(lo.trim(), raw)?, parse_price(hi.trim(), raw)?))
}

fn parse_price(part: &str, raw: &str) -> Result<Option<i64>, ServerError> {
    if part.is_empty() {
        return Ok(None);
    }
    let value: i64 = part
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("malformed price range: {raw}")))?;
    if value < 0 {
        return Err(ServerError::BadRequest(format!(
            "negative price bound: {raw}"
        )));
    }
    Ok(Some(value))
}

fn parse_min(raw: &str, field: &str) -> Result<Option<u32>, ServerError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let value: u32 = raw
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("malformed {field} minimum: {raw}")))?;
    if value == 0 {
        return Err(ServerError::BadRequest(format!(
            "{field} minimum must be positive"
        )));
    }
    Ok(Some(value))
}
