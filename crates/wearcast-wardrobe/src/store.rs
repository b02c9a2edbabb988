//! In-memory wardrobe storage.
//!
//! `WardrobeStore` owns the item list and hands out cloned snapshots, so
//! readers never hold the lock while a recommendation is computed.

use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::WardrobeError;
use crate::item::{ClothingCategory, ClothingItem};
use crate::sample::sample_items;

/// Anything that can hand the recommendation engine a wardrobe snapshot.
pub trait WardrobeProvider: Send + Sync {
    /// Current items, order is not significant
    fn items(&self) -> Vec<ClothingItem>;
}

/// Thread-safe in-memory wardrobe.
#[derive(Debug, Default)]
pub struct WardrobeStore {
    items: RwLock<Vec<ClothingItem>>,
}

impl WardrobeStore {
    /// Create an empty wardrobe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wardrobe seeded with the starter items.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the sample definitions.
    pub fn with_sample_items() -> Result<Self, WardrobeError> {
        let items = sample_items()?;
        tracing::info!("Seeded wardrobe with {} sample items", items.len());
        Ok(Self {
            items: RwLock::new(items),
        })
    }

    /// Add an item, returning its id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an item with the same id is already stored.
    pub fn add(&self, item: ClothingItem) -> Result<Uuid, WardrobeError> {
        let mut items = self.items.write();
        let id = item.id();
        if items.iter().any(|i| i.id() == id) {
            return Err(WardrobeError::DuplicateId(id));
        }
        tracing::info!("Added clothing item {} ({})", item.name(), id);
        items.push(item);
        Ok(id)
    }

    /// Replace the stored item that has the same id.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has that id.
    pub fn update(&self, item: ClothingItem) -> Result<(), WardrobeError> {
        let mut items = self.items.write();
        let id = item.id();
        let slot = items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(WardrobeError::ItemNotFound(id))?;
        tracing::info!("Updated clothing item {} ({})", item.name(), id);
        *slot = item;
        Ok(())
    }

    /// Remove an item by id, returning it.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has that id.
    pub fn remove(&self, id: Uuid) -> Result<ClothingItem, WardrobeError> {
        let mut items = self.items.write();
        let index = items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(WardrobeError::ItemNotFound(id))?;
        let removed = items.remove(index);
        tracing::info!("Removed clothing item {} ({})", removed.name(), id);
        Ok(removed)
    }

    /// Remove items by position (as shown in a list view).
    ///
    /// Out-of-range positions are ignored. Returns how many were removed.
    pub fn remove_at(&self, positions: &[usize]) -> usize {
        let mut items = self.items.write();
        let mut positions: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&p| p < items.len())
            .collect();
        positions.sort_unstable();
        positions.dedup();

        // Highest first so earlier positions stay valid
        for &p in positions.iter().rev() {
            items.remove(p);
        }
        tracing::debug!("Removed {} clothing items by position", positions.len());
        positions.len()
    }

    pub fn get(&self, id: Uuid) -> Option<ClothingItem> {
        self.items.read().iter().find(|i| i.id() == id).cloned()
    }

    pub fn by_category(&self, category: ClothingCategory) -> Vec<ClothingItem> {
        self.items
            .read()
            .iter()
            .filter(|i| i.category() == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl WardrobeProvider for WardrobeStore {
    fn items(&self) -> Vec<ClothingItem> {
        self.items.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wearcast_weather::WeatherType;

    fn item(name: &str, category: ClothingCategory) -> ClothingItem {
        ClothingItem::builder(name, category, 40.0, 80.0)
            .weather_types([WeatherType::Sunny])
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let store = WardrobeStore::new();
        assert!(store.is_empty());
        let shirt = item("Shirt", ClothingCategory::Top);
        let id = store.add(shirt.clone()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id), Some(shirt));
    }

    #[test]
    fn test_add_duplicate_id_rejected() {
        let store = WardrobeStore::new();
        let shirt = item("Shirt", ClothingCategory::Top);
        store.add(shirt.clone()).unwrap();
        assert_eq!(store.add(shirt.clone()), Err(WardrobeError::DuplicateId(shirt.id())));
    }

    #[test]
    fn test_update_replaces_item() {
        let store = WardrobeStore::new();
        let shirt = item("Shirt", ClothingCategory::Top);
        let id = store.add(shirt.clone()).unwrap();
        let edited = shirt.to_builder().name("Linen Shirt").build().unwrap();
        store.update(edited).unwrap();
        assert_eq!(store.get(id).unwrap().name(), "Linen Shirt");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_missing_item() {
        let store = WardrobeStore::new();
        let shirt = item("Shirt", ClothingCategory::Top);
        assert_eq!(store.update(shirt.clone()), Err(WardrobeError::ItemNotFound(shirt.id())));
    }

    #[test]
    fn test_remove() {
        let store = WardrobeStore::new();
        let id = store.add(item("Shirt", ClothingCategory::Top)).unwrap();
        let removed = store.remove(id).unwrap();
        assert_eq!(removed.name(), "Shirt");
        assert!(store.is_empty());
        assert_eq!(store.remove(id), Err(WardrobeError::ItemNotFound(id)));
    }

    #[test]
    fn test_remove_at_ignores_out_of_range() {
        let store = WardrobeStore::new();
        store.add(item("A", ClothingCategory::Top)).unwrap();
        store.add(item("B", ClothingCategory::Bottom)).unwrap();
        store.add(item("C", ClothingCategory::Shoes)).unwrap();

        let removed = store.remove_at(&[2, 0, 7, 0]);
        assert_eq!(removed, 2);
        let names: Vec<String> = store.items().iter().map(|i| i.name().to_string()).collect();
        assert_eq!(names, vec!["B".to_string()]);
    }

    #[test]
    fn test_by_category() {
        let store = WardrobeStore::new();
        store.add(item("Tee", ClothingCategory::Top)).unwrap();
        store.add(item("Polo", ClothingCategory::Top)).unwrap();
        store.add(item("Jeans", ClothingCategory::Bottom)).unwrap();
        assert_eq!(store.by_category(ClothingCategory::Top).len(), 2);
        assert!(store.by_category(ClothingCategory::Accessory).is_empty());
    }

    #[test]
    fn test_with_sample_items() {
        let store = WardrobeStore::with_sample_items().unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.by_category(ClothingCategory::Outerwear).len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = WardrobeStore::new();
        store.add(item("Tee", ClothingCategory::Top)).unwrap();
        let snapshot = store.items();
        store.add(item("Jeans", ClothingCategory::Bottom)).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
