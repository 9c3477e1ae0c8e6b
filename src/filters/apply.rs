// src/filters/apply.rs

use crate::domain::{InventoryItemRecord, ItemCategory, RoomRecord, RoomStatus, RoomType, StockStatus};
use crate::filters::criteria::{FilterCriteria, FilterValue};
use tracing::debug;

/// A record the search box and the two dropdowns can narrow down.
pub trait Filterable: Clone {
    type Status: FilterValue;
    type Category: FilterValue;

    /// Query key for the second dropdown.
    const CATEGORY_KEY: &'static str;

    /// Fields the search box looks in.
    fn search_fields(&self) -> Vec<&str>;
    fn status(&self) -> Self::Status;
    fn category(&self) -> Self::Category;
}

impl Filterable for RoomRecord {
    type Status = RoomStatus;
    type Category = RoomType;

    const CATEGORY_KEY: &'static str = "type";

    fn search_fields(&self) -> Vec<&str> {
        vec![self.room_number.as_str(), self.name.as_str()]
    }

    fn status(&self) -> RoomStatus {
        self.status
    }

    fn category(&self) -> RoomType {
        self.room_type
    }
}

impl Filterable for InventoryItemRecord {
    type Status = StockStatus;
    type Category = ItemCategory;

    const CATEGORY_KEY: &'static str = "category";

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.supplier.as_str()]
    }

    fn status(&self) -> StockStatus {
        self.stock_status()
    }

    fn category(&self) -> ItemCategory {
        self.category
    }
}

fn matches_search<R: Filterable>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Returns the records passing search, then status, then category.
/// The input slice is left as it was.
pub fn filter_records<R: Filterable>(
    records: &[R],
    criteria: &FilterCriteria<R::Status, R::Category>,
) -> Vec<R> {
    let needle = criteria.search.trim().to_lowercase();

    let out: Vec<R> = records
        .iter()
        .filter(|r| {
            matches_search(*r, &needle)
                && criteria.status.matches(r.status())
                && criteria.category.matches(r.category())
        })
        .cloned()
        .collect();

    debug!(
        input = records.len(),
        output = out.len(),
        search = %criteria.search,
        "Filtered records"
    );
    out
}
