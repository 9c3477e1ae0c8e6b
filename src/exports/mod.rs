//! Where record lists come from.
//!
//! The reporting code never reaches for a global database handle; it is
//! handed a [`RecordSource`] and asks it for fully materialized lists.

pub mod json;

pub use json::JsonExport;

use crate::domain::{BookingRecord, InventoryItemRecord, RoomRecord};
use crate::errors::Result;

pub trait RecordSource {
    fn rooms(&self) -> Result<Vec<RoomRecord>>;
    fn inventory(&self) -> Result<Vec<InventoryItemRecord>>;
    fn bookings(&self) -> Result<Vec<BookingRecord>>;
}

/// Records already in memory, for driving reports without export files.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub rooms: Vec<RoomRecord>,
    pub inventory: Vec<InventoryItemRecord>,
    pub bookings: Vec<BookingRecord>,
}

#[cfg(test)]
impl RecordSource for MemorySource {
    fn rooms(&self) -> Result<Vec<RoomRecord>> {
        Ok(self.rooms.clone())
    }

    fn inventory(&self) -> Result<Vec<InventoryItemRecord>> {
        Ok(self.inventory.clone())
    }

    fn bookings(&self) -> Result<Vec<BookingRecord>> {
        Ok(self.bookings.clone())
    }
}
