use chrono::NaiveDateTime;
use serde::Serialize;

use crate::errors::ServerError;

/// Inventory category of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ServerError> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "commercial" => Ok(PropertyType::Commercial),
            "land" => Ok(PropertyType::Land),
            other => Err(ServerError::BadRequest(format!(
                "unknown property type: {other}"
            ))),
        }
    }

    pub fn label_pt(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartamento",
            PropertyType::House => "Casa",
            PropertyType::Commercial => "Comercial",
            PropertyType::Land => "Terreno",
        }
    }

    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Commercial,
        PropertyType::Land,
    ];
}

/// Sale status of a property. `Launch` records also feed the separate
/// launches listing on the front page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Launch,
    New,
    Used,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Launch => "launch",
            PropertyStatus::New => "new",
            PropertyStatus::Used => "used",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ServerError> {
        match s {
            "launch" => Ok(PropertyStatus::Launch),
            "new" => Ok(PropertyStatus::New),
            "used" => Ok(PropertyStatus::Used),
            other => Err(ServerError::BadRequest(format!(
                "unknown property status: {other}"
            ))),
        }
    }

    pub fn label_pt(&self) -> &'static str {
        match self {
            PropertyStatus::Launch => "Lançamento",
            PropertyStatus::New => "Novo",
            PropertyStatus::Used => "Usado",
        }
    }

    pub const ALL: [PropertyStatus; 3] = [
        PropertyStatus::Launch,
        PropertyStatus::New,
        PropertyStatus::Used,
    ];
}

/// A property row as read from the store. Optional columns stay optional
/// here instead of being defaulted at the mapping boundary, so templates
/// decide what an absent value looks like.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub id: i64,
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
    pub created_at: NaiveDateTime,
}

impl PropertyRecord {
    /// Badge text shown on listing cards: an explicit display_status
    /// override wins over the localized status label.
    pub fn status_label(&self) -> &str {
        match self.display_status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => self.status.label_pt(),
        }
    }

    /// "location - city, region" with absent parts omitted. The same
    /// format the suggestion resolver uses for its labels.
    pub fn location_line(&self) -> String {
        let mut line = self.location.clone();
        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            line.push_str(" - ");
            line.push_str(city);
        }
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            line.push_str(", ");
            line.push_str(region);
        }
        line
    }
}
