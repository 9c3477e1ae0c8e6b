// src/domain/inventory.rs

use crate::domain::fields::{parse_amount, parse_count};
use crate::domain::logic::classify_stock;
use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn from_canonical(id: &str) -> Option<Self> {
        match id {
            "in-stock" => Some(StockStatus::InStock),
            "low-stock" => Some(StockStatus::LowStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }
}

/// Storeroom categories. Anything unrecognized is filed under `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    Linens,
    Toiletries,
    FoodAndBeverage,
    CleaningSupplies,
    Maintenance,
    OfficeSupplies,
    Amenities,
    Other,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Linens => "linens",
            ItemCategory::Toiletries => "toiletries",
            ItemCategory::FoodAndBeverage => "food-and-beverage",
            ItemCategory::CleaningSupplies => "cleaning-supplies",
            ItemCategory::Maintenance => "maintenance",
            ItemCategory::OfficeSupplies => "office-supplies",
            ItemCategory::Amenities => "amenities",
            ItemCategory::Other => "other",
        }
    }

    pub fn from_canonical(id: &str) -> Option<Self> {
        const ALL: [ItemCategory; 8] = [
            ItemCategory::Linens,
            ItemCategory::Toiletries,
            ItemCategory::FoodAndBeverage,
            ItemCategory::CleaningSupplies,
            ItemCategory::Maintenance,
            ItemCategory::OfficeSupplies,
            ItemCategory::Amenities,
            ItemCategory::Other,
        ];
        ALL.into_iter().find(|c| c.as_str() == id)
    }

    /// Maps the free-text category staff type into the storeroom form.
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim().to_lowercase();
        if let Some(category) = Self::from_canonical(&key) {
            return category;
        }
        match key.as_str() {
            "linen" | "bedding" | "towels" => ItemCategory::Linens,
            "toiletry" | "bathroom" | "bath" => ItemCategory::Toiletries,
            "food" | "beverage" | "beverages" | "f&b" | "food & beverage" | "food and beverage"
            | "kitchen" => ItemCategory::FoodAndBeverage,
            "cleaning" | "cleaning supplies" | "housekeeping" => ItemCategory::CleaningSupplies,
            "tools" | "engineering" | "repairs" => ItemCategory::Maintenance,
            "office" | "office supplies" | "stationery" => ItemCategory::OfficeSupplies,
            "amenity" | "guest amenities" | "minibar" => ItemCategory::Amenities,
            _ => ItemCategory::Other,
        }
    }
}

/// A storeroom item. Stock status is never stored; ask
/// [`InventoryItemRecord::stock_status`] each time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemRecord {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub current_stock: u32,
    pub reorder_level: u32,
    pub unit_price: f64,
    pub supplier: String,
    pub unit: String,
    pub location: String,
}

impl InventoryItemRecord {
    pub fn stock_status(&self) -> StockStatus {
        classify_stock(self.current_stock, self.reorder_level)
    }

    /// Stock on hand valued at unit price.
    pub fn value(&self) -> f64 {
        f64::from(self.current_stock) * self.unit_price
    }
}

/// An item document as exported from the `inventory` collection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInventoryItem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    // Counters and prices arrive as numbers or numeric strings.
    pub current_stock: Option<Value>,
    pub reorder_level: Option<Value>,
    pub unit_price: Option<Value>,
    pub supplier: Option<String>,
    pub unit: Option<String>,
    pub location: Option<String>,
}

impl InventoryItemRecord {
    pub fn from_raw(raw: RawInventoryItem) -> Result<Self> {
        let id = non_empty(raw.id).ok_or(AppError::MissingField {
            record: "inventory item",
            field: "id",
        })?;
        let name = non_empty(raw.name).ok_or(AppError::MissingField {
            record: "inventory item",
            field: "name",
        })?;

        let current_stock = match raw.current_stock {
            Some(v) => parse_count("item", &id, "currentStock", &v)?,
            None => {
                return Err(AppError::MissingField {
                    record: "inventory item",
                    field: "currentStock",
                })
            }
        };
        let reorder_level = match raw.reorder_level {
            Some(v) => parse_count("item", &id, "reorderLevel", &v)?,
            None => 0,
        };

        let unit_price = match &raw.unit_price {
            Some(v) => parse_amount("item", &id, "unitPrice", v)?,
            None => 0.0,
        };

        Ok(InventoryItemRecord {
            category: raw
                .category
                .as_deref()
                .map(ItemCategory::parse)
                .unwrap_or(ItemCategory::Other),
            current_stock,
            reorder_level,
            unit_price,
            supplier: raw.supplier.unwrap_or_default(),
            unit: raw.unit.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            id,
            name,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawInventoryItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn converts_and_derives_status() {
        let item = InventoryItemRecord::from_raw(raw(json!({
            "id": "i1",
            "name": "Bath Towel",
            "category": "Linen",
            "currentStock": "12",
            "reorderLevel": 20,
            "unitPrice": 150.0,
            "supplier": "Manila Textiles",
            "unit": "pcs",
            "location": "Storeroom A"
        })))
        .unwrap();

        assert_eq!(item.category, ItemCategory::Linens);
        assert_eq!(item.current_stock, 12);
        assert_eq!(item.stock_status(), StockStatus::LowStock);
        assert_eq!(item.value(), 1800.0);
    }

    #[test]
    fn non_numeric_stock_is_invalid_input() {
        let err = InventoryItemRecord::from_raw(raw(json!({
            "id": "i2", "name": "Soap", "currentStock": "plenty"
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = InventoryItemRecord::from_raw(raw(json!({
            "id": "i2", "name": "Soap", "currentStock": 2.5
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn negative_stock_is_invalid_input() {
        let err = InventoryItemRecord::from_raw(raw(json!({
            "id": "i3", "name": "Shampoo", "currentStock": -4
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn string_unit_price_is_accepted() {
        let item = InventoryItemRecord::from_raw(raw(json!({
            "id": "i5", "name": "Rice", "currentStock": 10, "unitPrice": "55.50"
        })))
        .unwrap();
        assert_eq!(item.unit_price, 55.5);
        assert_eq!(item.value(), 555.0);
    }

    #[test]
    fn missing_stock_is_a_missing_field() {
        let err = InventoryItemRecord::from_raw(raw(json!({"id": "i4", "name": "Mop"})))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "currentStock", .. }));
    }

    #[test]
    fn category_aliases() {
        assert_eq!(ItemCategory::parse("F&B"), ItemCategory::FoodAndBeverage);
        assert_eq!(ItemCategory::parse(" housekeeping "), ItemCategory::CleaningSupplies);
        assert_eq!(ItemCategory::parse("office-supplies"), ItemCategory::OfficeSupplies);
        assert_eq!(ItemCategory::parse("garden"), ItemCategory::Other);
    }
}
