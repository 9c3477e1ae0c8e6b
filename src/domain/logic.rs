// src/domain/logic.rs

use crate::domain::booking::DateRange;
use crate::domain::inventory::StockStatus;
use crate::domain::room::RoomType;

/// Display labels seen in the rooms collection, keyed by their
/// whitespace-collapsed lowercase form.
const ROOM_TYPE_ALIASES: &[(&str, &str)] = &[
    ("standard", "standard"),
    ("standard room", "standard"),
    ("std", "standard"),
    ("silid payapa", "standard"),
    ("deluxe", "deluxe"),
    ("deluxe room", "deluxe"),
    ("silid marahuyo", "deluxe"),
    ("suite", "suite"),
    ("executive suite", "suite"),
    ("silid haraya", "suite"),
    ("family", "family"),
    ("family room", "family"),
    ("silid ginhawa", "family"),
    ("twin", "twin"),
    ("twin room", "twin"),
    ("silid kambal", "twin"),
];

/// Canonical id for a free-text room type label, or `"unknown"`.
pub fn normalize_type_key(label: &str) -> &'static str {
    let key = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    ROOM_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, id)| *id)
        .unwrap_or("unknown")
}

/// Resolves a free-text room type label to its canonical type.
///
/// Labels that match no alias come back as `RoomType::Unknown`, never as
/// `Standard`: pricing and capacity are keyed off this value.
pub fn room_type_from_label(label: &str) -> RoomType {
    RoomType::from_canonical(normalize_type_key(label)).unwrap_or(RoomType::Unknown)
}

/// Buckets a stock count against its reorder level.
/// Stock at exactly the reorder level is already low.
pub fn classify_stock(current_stock: u32, reorder_level: u32) -> StockStatus {
    if current_stock == 0 {
        StockStatus::OutOfStock
    } else if current_stock <= reorder_level {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// True when two stays share at least one night. Ranges are half-open, so a
/// check-out on the same day as the next check-in is not a conflict.
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    a.check_in < b.check_out && b.check_in < a.check_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateRange {
        DateRange {
            check_in: NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            check_out: NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
        }
    }

    #[test]
    fn known_aliases_normalize() {
        let cases = [
            ("Silid Payapa", "standard"),
            ("  silid   PAYAPA  ", "standard"),
            ("Standard Room", "standard"),
            ("Deluxe", "deluxe"),
            ("Silid Marahuyo", "deluxe"),
            ("Executive Suite", "suite"),
            ("Family Room", "family"),
            ("Silid Kambal", "twin"),
        ];
        for (label, expected) in cases {
            assert_eq!(normalize_type_key(label), expected, "label {label:?}");
        }
    }

    #[test]
    fn unmatched_labels_are_unknown_not_standard() {
        for label in ["", "   ", "Penthouse", "Silid", "standard-ish"] {
            assert_eq!(normalize_type_key(label), "unknown", "label {label:?}");
            assert_eq!(room_type_from_label(label), RoomType::Unknown);
        }
    }

    #[test]
    fn labels_resolve_to_the_matching_type() {
        assert_eq!(room_type_from_label(" silid haraya "), RoomType::Suite);
        assert_eq!(room_type_from_label("Twin Room"), RoomType::Twin);
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify_stock(0, 0), StockStatus::OutOfStock);
        assert_eq!(classify_stock(0, 10), StockStatus::OutOfStock);
        assert_eq!(classify_stock(10, 10), StockStatus::LowStock);
        assert_eq!(classify_stock(1, 10), StockStatus::LowStock);
        assert_eq!(classify_stock(11, 10), StockStatus::InStock);
        assert_eq!(classify_stock(1, 0), StockStatus::InStock);
    }

    #[test]
    fn overlapping_stays() {
        let a = range((2026, 3, 1), (2026, 3, 5));
        let b = range((2026, 3, 3), (2026, 3, 8));
        assert!(ranges_overlap(&a, &b));
        assert!(ranges_overlap(&b, &a));

        // One stay inside the other.
        let inner = range((2026, 3, 2), (2026, 3, 3));
        assert!(ranges_overlap(&a, &inner));
        assert!(ranges_overlap(&inner, &a));
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        let first = range((2026, 3, 1), (2026, 3, 3));
        let second = range((2026, 3, 3), (2026, 3, 6));
        assert!(!ranges_overlap(&first, &second));
        assert!(!ranges_overlap(&second, &first));
    }

    #[test]
    fn overlap_is_symmetric() {
        let day = |d| NaiveDate::from_ymd_opt(2026, 4, d).unwrap();
        for a_in in 1..6 {
            for a_out in (a_in + 1)..7 {
                for b_in in 1..6 {
                    for b_out in (b_in + 1)..7 {
                        let a = DateRange { check_in: day(a_in), check_out: day(a_out) };
                        let b = DateRange { check_in: day(b_in), check_out: day(b_out) };
                        assert_eq!(ranges_overlap(&a, &b), ranges_overlap(&b, &a));
                    }
                }
            }
        }
    }
}
