//! Price-ordered vehicle storage with a fixed capacity
//!
//! Records are kept in non-decreasing price order. Equal prices keep their
//! insertion order, since a new record always goes after existing equals.

use crate::error::{CarstockError, Result};
use crate::record::Vehicle;

/// Stores vehicles sorted by ascending price
#[derive(Clone, Debug)]
pub struct Inventory {
    vehicles: Vec<Vehicle>,
    /// Maximum number of vehicles, fixed at construction
    capacity: usize,
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vehicles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Capacity for a load of `load_count` records plus room for `extra` insertions
    pub fn for_load(load_count: usize, extra: usize) -> Self {
        Self::with_capacity(load_count.saturating_add(extra))
    }

    /// Insert each record in input order, exactly as repeated `insert` calls would
    pub fn bulk_load<I: IntoIterator<Item = Vehicle>>(&mut self, vehicles: I) -> Result<()> {
        for vehicle in vehicles {
            self.insert(vehicle)?;
        }
        Ok(())
    }

    /// Insert a vehicle before the first one with a strictly greater price
    ///
    /// Returns the 0-based position it was stored at. Fails without touching
    /// the inventory when it is already full.
    pub fn insert(&mut self, vehicle: Vehicle) -> Result<usize> {
        if self.is_full() {
            return Err(CarstockError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let pos = self
            .vehicles
            .iter()
            .position(|v| v.price > vehicle.price)
            .unwrap_or(self.vehicles.len());
        self.vehicles.insert(pos, vehicle);
        Ok(pos)
    }

    /// Remove every vehicle matching `pred`, returning how many were removed
    pub fn remove_where<P>(&mut self, pred: P) -> usize
    where
        P: FnMut(&Vehicle) -> bool,
    {
        self.remove_where_with(pred, |_| {})
    }

    /// Like `remove_where`, handing each match to `on_remove` just before it goes
    ///
    /// Scans left to right. After a removal the same index is examined again,
    /// since the following vehicle has shifted into it.
    pub fn remove_where_with<P, F>(&mut self, mut pred: P, mut on_remove: F) -> usize
    where
        P: FnMut(&Vehicle) -> bool,
        F: FnMut(&Vehicle),
    {
        let mut removed = 0;
        let mut i = 0;
        while i < self.vehicles.len() {
            if pred(&self.vehicles[i]) {
                on_remove(&self.vehicles[i]);
                self.vehicles.remove(i);
                removed += 1;
            } else {
                i += 1;
            }
        }
        removed
    }

    /// Vehicles in stored (price-ascending) order
    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    pub fn as_slice(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.capacity
    }

    /// Slots left before inserts are rejected
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.vehicles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(brand: &str, price: f64) -> Vehicle {
        Vehicle::new(brand, "Model", 2020, 10000, price)
    }

    fn prices(inv: &Inventory) -> Vec<f64> {
        inv.iter().map(|v| v.price).collect()
    }

    #[test]
    fn test_bulk_load_orders_by_price() {
        let mut inv = Inventory::with_capacity(3);
        inv.bulk_load(vec![car("A", 50000.0), car("B", 20000.0), car("C", 80000.0)])
            .unwrap();
        assert_eq!(prices(&inv), vec![20000.0, 50000.0, 80000.0]);
    }

    #[test]
    fn test_insert_returns_position() {
        let mut inv = Inventory::with_capacity(4);
        assert_eq!(inv.insert(car("A", 10.0)).unwrap(), 0);
        assert_eq!(inv.insert(car("B", 30.0)).unwrap(), 1);
        assert_eq!(inv.insert(car("C", 20.0)).unwrap(), 1);
        assert_eq!(inv.insert(car("D", 5.0)).unwrap(), 0);
        assert_eq!(prices(&inv), vec![5.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_equal_prices_keep_insertion_order() {
        let mut inv = Inventory::with_capacity(4);
        inv.bulk_load(vec![
            car("first", 100.0),
            car("cheap", 50.0),
            car("second", 100.0),
            car("third", 100.0),
        ])
        .unwrap();
        let brands: Vec<&str> = inv.iter().map(|v| v.brand.as_str()).collect();
        assert_eq!(brands, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_insert_when_full() {
        let mut inv = Inventory::with_capacity(2);
        inv.insert(car("A", 1.0)).unwrap();
        inv.insert(car("B", 2.0)).unwrap();
        assert!(inv.is_full());

        let err = inv.insert(car("C", 0.5)).unwrap_err();
        assert!(matches!(err, CarstockError::CapacityExceeded { capacity: 2 }));
        assert_eq!(inv.len(), 2);
        assert_eq!(prices(&inv), vec![1.0, 2.0]);
    }

    #[test]
    fn test_zero_capacity_rejects_insert() {
        let mut inv = Inventory::for_load(0, 0);
        assert!(inv.insert(car("A", 1.0)).is_err());
        assert!(inv.is_empty());
    }

    #[test]
    fn test_bulk_load_over_capacity_fails() {
        let mut inv = Inventory::with_capacity(1);
        let result = inv.bulk_load(vec![car("A", 1.0), car("B", 2.0)]);
        assert!(result.is_err());
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_remove_where_consecutive_matches() {
        let mut inv = Inventory::with_capacity(5);
        inv.bulk_load(vec![
            car("keep", 1.0),
            car("drop", 2.0),
            car("drop", 3.0),
            car("keep", 4.0),
            car("drop", 5.0),
        ])
        .unwrap();

        let removed = inv.remove_where(|v| v.brand.as_str() == "drop");
        assert_eq!(removed, 3);
        assert_eq!(prices(&inv), vec![1.0, 4.0]);
    }

    #[test]
    fn test_remove_where_none() {
        let mut inv = Inventory::with_capacity(2);
        inv.insert(car("A", 1.0)).unwrap();
        assert_eq!(inv.remove_where(|_| false), 0);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_remove_where_with_reports_in_order() {
        let mut inv = Inventory::with_capacity(3);
        inv.bulk_load(vec![car("A", 3.0), car("B", 1.0), car("C", 2.0)])
            .unwrap();

        let mut seen = Vec::new();
        let removed = inv.remove_where_with(|v| v.price >= 2.0, |v| seen.push(v.price));
        assert_eq!(removed, 2);
        assert_eq!(seen, vec![2.0, 3.0]);
        assert_eq!(prices(&inv), vec![1.0]);
    }

    #[test]
    fn test_removal_frees_capacity() {
        let mut inv = Inventory::for_load(2, 0);
        inv.bulk_load(vec![car("A", 1.0), car("B", 2.0)]).unwrap();
        assert_eq!(inv.remaining(), 0);
        inv.remove_where(|v| v.price > 1.5);
        assert_eq!(inv.remaining(), 1);
        assert!(inv.insert(car("C", 0.5)).is_ok());
    }
}
