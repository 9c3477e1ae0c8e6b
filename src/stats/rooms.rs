use crate::domain::{RoomRecord, RoomStatus, RoomType};
use crate::stats::rate_percent;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub cleaning: usize,
    pub unknown: usize,
    /// Occupied rooms as a rounded percentage of all rooms.
    pub occupancy_rate: u32,
    pub by_type: BTreeMap<RoomType, usize>,
}

pub fn aggregate_rooms(rooms: &[RoomRecord]) -> RoomStats {
    let mut stats = RoomStats {
        total: rooms.len(),
        ..Default::default()
    };

    for room in rooms {
        match room.status {
            RoomStatus::Available => stats.available += 1,
            RoomStatus::Occupied => stats.occupied += 1,
            RoomStatus::Maintenance => stats.maintenance += 1,
            RoomStatus::Cleaning => stats.cleaning += 1,
            RoomStatus::Unknown => stats.unknown += 1,
        }
        *stats.by_type.entry(room.room_type).or_insert(0) += 1;
    }

    stats.occupancy_rate = rate_percent(stats.occupied, stats.total);

    debug!(
        total = stats.total,
        occupied = stats.occupied,
        occupancy_rate = stats.occupancy_rate,
        "Aggregated rooms"
    );
    stats
}
