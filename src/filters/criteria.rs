// src/filters/criteria.rs

use crate::domain::{ItemCategory, RoomStatus, RoomType, StockStatus};
use crate::errors::{AppError, Result};
use crate::filters::apply::Filterable;
use crate::filters::query::QueryPairs;

/// A value that a status or category dropdown can select.
pub trait FilterValue: Copy + PartialEq {
    /// Exact canonical id, already trimmed and lowercased.
    fn from_filter(id: &str) -> Option<Self>;
}

impl FilterValue for RoomStatus {
    fn from_filter(id: &str) -> Option<Self> {
        let status = RoomStatus::parse(id);
        (status.as_str() == id).then_some(status)
    }
}

impl FilterValue for RoomType {
    fn from_filter(id: &str) -> Option<Self> {
        RoomType::from_canonical(id)
    }
}

impl FilterValue for StockStatus {
    fn from_filter(id: &str) -> Option<Self> {
        StockStatus::from_canonical(id)
    }
}

impl FilterValue for ItemCategory {
    fn from_filter(id: &str) -> Option<Self> {
        ItemCategory::from_canonical(id)
    }
}

/// One dropdown's worth of filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    All,
    Only(T),
    /// A value no record can have. Matches nothing.
    Unrecognized(String),
}

impl<T: FilterValue> Selection<T> {
    /// `""` and `"all"` select everything.
    pub fn parse(raw: &str) -> Self {
        let id = raw.trim().to_lowercase();
        if id.is_empty() || id == "all" {
            return Selection::All;
        }
        match T::from_filter(&id) {
            Some(value) => Selection::Only(value),
            None => Selection::Unrecognized(raw.to_string()),
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => *wanted == value,
            Selection::Unrecognized(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<S, C> {
    pub search: String,
    pub status: Selection<S>,
    pub category: Selection<C>,
}

impl<S, C> Default for FilterCriteria<S, C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: Selection::All,
            category: Selection::All,
        }
    }
}

pub type Criteria<R> = FilterCriteria<<R as Filterable>::Status, <R as Filterable>::Category>;

/// Builds criteria for `R` from query pairs. Keys other than `search`,
/// `status`, `R::CATEGORY_KEY` and the caller's `reserved` keys are rejected.
pub fn parse_criteria<R: Filterable>(query: &QueryPairs, reserved: &[&str]) -> Result<Criteria<R>> {
    let mut criteria = Criteria::<R>::default();

    for (key, value) in query {
        match key.as_str() {
            "search" => criteria.search = value.clone(),
            "status" => criteria.status = Selection::parse(value),
            k if k == R::CATEGORY_KEY => criteria.category = Selection::parse(value),
            k if reserved.contains(&k) => {}
            other => {
                return Err(AppError::invalid(format!(
                    "unknown filter key '{other}' (expected search, status or {})",
                    R::CATEGORY_KEY
                )))
            }
        }
    }

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InventoryItemRecord, RoomRecord};
    use crate::filters::query::parse_query;

    #[test]
    fn all_and_empty_select_everything() {
        assert_eq!(Selection::<RoomStatus>::parse("all"), Selection::All);
        assert_eq!(Selection::<RoomStatus>::parse(" ALL "), Selection::All);
        assert_eq!(Selection::<RoomStatus>::parse(""), Selection::All);
    }

    #[test]
    fn exact_values_only() {
        assert_eq!(
            Selection::<RoomStatus>::parse("Occupied"),
            Selection::Only(RoomStatus::Occupied)
        );
        assert_eq!(
            Selection::<StockStatus>::parse("low-stock"),
            Selection::Only(StockStatus::LowStock)
        );
        // Display labels are not canonical ids.
        assert_eq!(
            Selection::<RoomType>::parse("Silid Payapa"),
            Selection::Unrecognized("Silid Payapa".to_string())
        );
    }

    #[test]
    fn unrecognized_matches_nothing() {
        let sel = Selection::<RoomStatus>::parse("vacant");
        for status in [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
            RoomStatus::Cleaning,
            RoomStatus::Unknown,
        ] {
            assert!(!sel.matches(status));
        }
    }

    #[test]
    fn room_criteria_from_query() {
        let q = parse_query("search=101&status=available&type=suite").unwrap();
        let c = parse_criteria::<RoomRecord>(&q, &[]).unwrap();
        assert_eq!(c.search, "101");
        assert_eq!(c.status, Selection::Only(RoomStatus::Available));
        assert_eq!(c.category, Selection::Only(RoomType::Suite));
    }

    #[test]
    fn inventory_uses_category_key() {
        let q = parse_query("category=linens").unwrap();
        let c = parse_criteria::<InventoryItemRecord>(&q, &[]).unwrap();
        assert_eq!(c.category, Selection::Only(ItemCategory::Linens));

        let q = parse_query("type=linens").unwrap();
        assert!(parse_criteria::<InventoryItemRecord>(&q, &[]).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected_unless_reserved() {
        let q = parse_query("checkIn=2026-03-01&colour=red").unwrap();
        let err = parse_criteria::<RoomRecord>(&q, &["checkIn"]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("colour")));

        let q = parse_query("checkIn=2026-03-01").unwrap();
        assert!(parse_criteria::<RoomRecord>(&q, &["checkIn"]).is_ok());
    }
}
