use crate::domain::{InventoryItemRecord, ItemCategory, StockStatus};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Units on hand across every item.
    pub total_units: u64,
    /// Σ(currentStock × unitPrice).
    pub total_value: f64,
    pub by_category: BTreeMap<ItemCategory, usize>,
}

impl InventoryStats {
    /// Items that are low or out and should go on the next requisition.
    pub fn needs_reorder(&self) -> usize {
        self.low_stock + self.out_of_stock
    }
}

pub fn aggregate_inventory(items: &[InventoryItemRecord]) -> InventoryStats {
    let mut stats = InventoryStats {
        total_items: items.len(),
        ..Default::default()
    };

    for item in items {
        match item.stock_status() {
            StockStatus::InStock => stats.in_stock += 1,
            StockStatus::LowStock => stats.low_stock += 1,
            StockStatus::OutOfStock => stats.out_of_stock += 1,
        }
        stats.total_units += u64::from(item.current_stock);
        stats.total_value += item.value();
        *stats.by_category.entry(item.category).or_insert(0) += 1;
    }

    debug!(
        total_items = stats.total_items,
        low_stock = stats.low_stock,
        out_of_stock = stats.out_of_stock,
        total_value = stats.total_value,
        "Aggregated inventory"
    );
    stats
}
