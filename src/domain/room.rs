// src/domain/room.rs

use crate::domain::fields::{parse_amount, parse_count};
use crate::domain::logic::room_type_from_label;
use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operational state of a room. `Unknown` collects anything the front desk
/// typed that isn't one of the four real states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    Unknown,
}

impl RoomStatus {
    /// Case-insensitive parse. Unrecognized values land in `Unknown`,
    /// never in `Available`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "available" => RoomStatus::Available,
            "occupied" => RoomStatus::Occupied,
            "maintenance" => RoomStatus::Maintenance,
            "cleaning" => RoomStatus::Cleaning,
            _ => RoomStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Unknown => "unknown",
        }
    }
}

/// Canonical room type, the key pricing and capacity lookups use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Family,
    Twin,
    Unknown,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Family => "family",
            RoomType::Twin => "twin",
            RoomType::Unknown => "unknown",
        }
    }

    /// Exact canonical id match, used by filters. Display labels go through
    /// [`room_type_from_label`] instead.
    pub fn from_canonical(id: &str) -> Option<Self> {
        match id {
            "standard" => Some(RoomType::Standard),
            "deluxe" => Some(RoomType::Deluxe),
            "suite" => Some(RoomType::Suite),
            "family" => Some(RoomType::Family),
            "twin" => Some(RoomType::Twin),
            "unknown" => Some(RoomType::Unknown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: String,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// The label as it was entered, e.g. "Silid Payapa".
    pub type_label: String,
    pub name: String,
    pub status: RoomStatus,
    pub base_price: f64,
    pub max_guests: u32,
    pub features: Vec<String>,
}

/// A room document as exported from the `rooms` collection. Every field is
/// optional; [`RoomRecord::from_raw`] decides what is acceptable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoom {
    pub id: Option<String>,
    // Entered as "101" in some documents and 101 in others.
    pub room_number: Option<Value>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    // Prices and capacities arrive as numbers or numeric strings.
    #[serde(alias = "price")]
    pub base_price: Option<Value>,
    pub max_guests: Option<Value>,
    pub features: Option<Vec<String>>,
}

impl RoomRecord {
    pub fn from_raw(raw: RawRoom) -> Result<Self> {
        let id = raw
            .id
            .filter(|s| !s.trim().is_empty())
            .ok_or(AppError::MissingField {
                record: "room",
                field: "id",
            })?;

        let room_number = match raw.room_number {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(AppError::MissingField {
                    record: "room",
                    field: "roomNumber",
                })
            }
        };

        let type_label = raw.room_type.unwrap_or_default();
        let room_type = room_type_from_label(&type_label);

        let base_price = match &raw.base_price {
            Some(v) => parse_amount("room", &id, "basePrice", v)?,
            None => 0.0,
        };
        let max_guests = match &raw.max_guests {
            Some(v) => parse_count("room", &id, "maxGuests", v)?,
            None => 0,
        };

        Ok(RoomRecord {
            room_number,
            room_type,
            name: raw
                .name
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| type_label.clone()),
            type_label,
            status: raw
                .status
                .as_deref()
                .map(RoomStatus::parse)
                .unwrap_or(RoomStatus::Unknown),
            base_price,
            max_guests,
            features: raw.features.unwrap_or_default(),
            id,
        })
    }
}
