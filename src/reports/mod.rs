//! Command dispatch for the `hotel_ops` binary.
//!
//! Each command takes a `key=value&...` query, pulls what it needs from a
//! [`RecordSource`], runs the pure filters/aggregators and renders the result.

pub mod chart;
pub mod format;

use crate::availability::available_rooms;
use crate::config::AppConfig;
use crate::domain::booking::parse_date;
use crate::domain::{DateRange, InventoryItemRecord, RoomRecord, StockStatus};
use crate::errors::{AppError, Result};
use crate::exports::RecordSource;
use crate::filters::{filter_records, parse_criteria, parse_query, QueryPairs};
use crate::stats::{aggregate_inventory, aggregate_rooms, InventoryStats, RoomStats};
use chart::{chart_points, svg_polyline};
use format::format_currency;
use serde::Serialize;
use tracing::info;

pub const USAGE: &str = "usage: hotel_ops <rooms|inventory|stats|availability|summary|chart> [query]";

/// An item with its stock status worked out for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView<'a> {
    #[serde(flatten)]
    pub item: &'a InventoryItemRecord,
    pub status: StockStatus,
    pub value: f64,
}

impl<'a> From<&'a InventoryItemRecord> for InventoryView<'a> {
    fn from(item: &'a InventoryItemRecord) -> Self {
        Self {
            item,
            status: item.stock_status(),
            value: item.value(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub rooms: RoomStats,
    pub inventory: InventoryStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    #[serde(flatten)]
    pub stay: DateRange,
    pub nights: i64,
    pub rooms: Vec<RoomRecord>,
}

pub fn run(command: &str, query: &str, source: &dyn RecordSource, cfg: &AppConfig) -> Result<String> {
    let query = parse_query(query)?;
    info!(command, keys = query.len(), "Running report");

    match command {
        "rooms" => rooms(&query, source),
        "inventory" => inventory(&query, source),
        "stats" => stats(&query, source),
        "availability" => availability(&query, source),
        "summary" => summary(&query, source, cfg),
        "chart" => chart(&query, source, cfg),
        other => Err(AppError::UnknownCommand(other.to_string())),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::invalid(format!("could not render report: {e}")))
}

fn no_query(command: &str, query: &QueryPairs) -> Result<()> {
    match query.keys().next() {
        None => Ok(()),
        Some(key) => Err(AppError::invalid(format!("{command} takes no query, got '{key}'"))),
    }
}

fn rooms(query: &QueryPairs, source: &dyn RecordSource) -> Result<String> {
    let criteria = parse_criteria::<RoomRecord>(query, &[])?;
    let rooms = source.rooms()?;
    to_json(&filter_records(&rooms, &criteria))
}

fn filtered_inventory(query: &QueryPairs, source: &dyn RecordSource) -> Result<Vec<InventoryItemRecord>> {
    let criteria = parse_criteria::<InventoryItemRecord>(query, &[])?;
    let items = source.inventory()?;
    Ok(filter_records(&items, &criteria))
}

fn inventory(query: &QueryPairs, source: &dyn RecordSource) -> Result<String> {
    let items = filtered_inventory(query, source)?;
    let views: Vec<InventoryView> = items.iter().map(InventoryView::from).collect();
    to_json(&views)
}

fn stats(query: &QueryPairs, source: &dyn RecordSource) -> Result<String> {
    no_query("stats", query)?;
    let report = StatsReport {
        rooms: aggregate_rooms(&source.rooms()?),
        inventory: aggregate_inventory(&source.inventory()?),
    };
    to_json(&report)
}

fn availability(query: &QueryPairs, source: &dyn RecordSource) -> Result<String> {
    let date = |key: &str| {
        query
            .get(key)
            .ok_or_else(|| AppError::invalid(format!("availability needs {key}")))
            .and_then(|raw| parse_date(raw))
    };
    let stay = DateRange::new(date("checkIn")?, date("checkOut")?)?;

    let criteria = parse_criteria::<RoomRecord>(query, &["checkIn", "checkOut"])?;
    let rooms = filter_records(&source.rooms()?, &criteria);
    let bookings = source.bookings()?;

    let report = AvailabilityReport {
        nights: stay.nights(),
        rooms: available_rooms(&rooms, &bookings, &stay),
        stay,
    };
    info!(available = report.rooms.len(), nights = report.nights, "Availability computed");
    to_json(&report)
}

fn summary(query: &QueryPairs, source: &dyn RecordSource, cfg: &AppConfig) -> Result<String> {
    no_query("summary", query)?;
    let rooms = aggregate_rooms(&source.rooms()?);
    let inventory = aggregate_inventory(&source.inventory()?);

    let by_type = rooms
        .by_type
        .iter()
        .map(|(room_type, n)| format!("{} {n}", room_type.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        format!(
            "Rooms: {} total, {} available, {} occupied, {} maintenance, {} cleaning, {} unknown",
            rooms.total, rooms.available, rooms.occupied, rooms.maintenance, rooms.cleaning, rooms.unknown
        ),
        format!("Occupancy: {}%", rooms.occupancy_rate),
        format!("By type: {by_type}"),
        format!(
            "Inventory: {} items, {} low stock, {} out of stock ({} to reorder)",
            inventory.total_items,
            inventory.low_stock,
            inventory.out_of_stock,
            inventory.needs_reorder()
        ),
        format!(
            "Inventory value: {}",
            format_currency(inventory.total_value, &cfg.currency_symbol)
        ),
    ];
    Ok(lines.join("\n"))
}

fn chart(query: &QueryPairs, source: &dyn RecordSource, cfg: &AppConfig) -> Result<String> {
    let items = filtered_inventory(query, source)?;
    let levels: Vec<f64> = items.iter().map(|i| f64::from(i.current_stock)).collect();
    let points = chart_points(&levels, cfg.chart.width, cfg.chart.height);
    Ok(svg_polyline(&points))
}
