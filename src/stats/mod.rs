//! Dashboard summary counts, recomputed from the record list on every call.

pub mod inventory;
pub mod rooms;

pub use inventory::{aggregate_inventory, InventoryStats};
pub use rooms::{aggregate_rooms, RoomStats};

/// `part / total` as a whole percentage, rounded half away from zero.
/// An empty total is 0%, not NaN.
pub fn rate_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
