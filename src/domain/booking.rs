// src/domain/booking.rs

use crate::errors::{AppError, Result};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A stay from check-in up to, but not including, check-out.
///
/// The overlap check trusts `check_in < check_out`; build ranges from user
/// input with [`DateRange::new`] to have that enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_in >= check_out {
            return Err(AppError::invalid(format!(
                "check-out ({check_out}) must be after check-in ({check_in})"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping the date part.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .ok_or_else(|| AppError::invalid(format!("'{raw}' is not a date")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Unknown,
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "checked-in" => BookingStatus::CheckedIn,
            "checked-out" => BookingStatus::CheckedOut,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Unknown,
        }
    }

    /// Whether a booking in this state still holds the room. An unreadable
    /// status is treated as holding it.
    pub fn holds_room(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::CheckedOut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub room_id: String,
    pub guest_name: String,
    #[serde(flatten)]
    pub stay: DateRange,
    pub status: BookingStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBooking {
    pub id: Option<String>,
    pub room_id: Option<String>,
    pub guest_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: Option<String>,
}

impl BookingRecord {
    pub fn from_raw(raw: RawBooking) -> Result<Self> {
        let required = |value: Option<String>, field: &'static str| {
            value
                .filter(|s| !s.trim().is_empty())
                .ok_or(AppError::MissingField {
                    record: "booking",
                    field,
                })
        };

        let id = required(raw.id, "id")?;
        let room_id = required(raw.room_id, "roomId")?;
        let check_in = parse_date(&required(raw.check_in, "checkIn")?)?;
        let check_out = parse_date(&required(raw.check_out, "checkOut")?)?;
        let stay = DateRange::new(check_in, check_out)
            .map_err(|e| AppError::invalid(format!("booking {id}: {e}")))?;

        Ok(BookingRecord {
            id,
            room_id,
            guest_name: raw.guest_name.unwrap_or_default(),
            stay,
            status: raw
                .status
                .as_deref()
                .map(BookingStatus::parse)
                .unwrap_or(BookingStatus::Unknown),
        })
    }
}
