//! Records the admin dashboard works with, and the pure rules over them.

pub mod booking;
pub mod fields;
pub mod inventory;
pub mod logic;
pub mod room;

pub use booking::{BookingRecord, DateRange, RawBooking};
pub use inventory::{InventoryItemRecord, ItemCategory, RawInventoryItem, StockStatus};
pub use room::{RawRoom, RoomRecord, RoomStatus, RoomType};
