// src/availability.rs

use crate::domain::logic::ranges_overlap;
use crate::domain::{BookingRecord, DateRange, RoomRecord, RoomStatus};
use tracing::debug;

/// Bookings still holding `room_id` that share a night with `stay`.
pub fn conflicting_bookings<'a>(
    bookings: &'a [BookingRecord],
    room_id: &str,
    stay: &DateRange,
) -> Vec<&'a BookingRecord> {
    bookings
        .iter()
        .filter(|b| b.room_id == room_id && b.status.holds_room() && ranges_overlap(&b.stay, stay))
        .collect()
}

/// Rooms that can take a new booking for `stay`: not under maintenance, not
/// in an unknown state, and with no conflicting booking.
///
/// A room being cleaned or currently occupied is still offered; its status
/// describes today, the bookings describe `stay`.
pub fn available_rooms(
    rooms: &[RoomRecord],
    bookings: &[BookingRecord],
    stay: &DateRange,
) -> Vec<RoomRecord> {
    let out: Vec<RoomRecord> = rooms
        .iter()
        .filter(|room| !matches!(room.status, RoomStatus::Maintenance | RoomStatus::Unknown))
        .filter(|room| conflicting_bookings(bookings, &room.id, stay).is_empty())
        .cloned()
        .collect();

    debug!(
        rooms = rooms.len(),
        available = out.len(),
        check_in = %stay.check_in,
        check_out = %stay.check_out,
        "Checked availability"
    );
    out
}
