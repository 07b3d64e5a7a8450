//! Read-only queries over the inventory

use crate::error::{CarstockError, Result};
use crate::inventory::Inventory;
use crate::record::Vehicle;

/// A vehicle together with its 1-based position in the inventory
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Listing<'a> {
    pub number: usize,
    pub vehicle: &'a Vehicle,
}

fn listings<'a, P>(inventory: &'a Inventory, mut pred: P) -> Vec<Listing<'a>>
where
    P: FnMut(&Vehicle) -> bool,
{
    inventory
        .iter()
        .enumerate()
        .filter(|(_, v)| pred(*v))
        .map(|(i, vehicle)| Listing {
            number: i + 1,
            vehicle,
        })
        .collect()
}

/// Every vehicle in stored order
pub fn list_all(inventory: &Inventory) -> Vec<Listing<'_>> {
    listings(inventory, |_| true)
}

/// Vehicles whose brand equals `brand`, ignoring ASCII case
pub fn filter_by_brand<'a>(inventory: &'a Inventory, brand: &str) -> Vec<Listing<'a>> {
    listings(inventory, |v| v.has_brand(brand))
}

/// Vehicles priced within `[min, max]`, both ends inclusive
///
/// Assumes `min <= max`; callers validate with [`check_price_range`] first.
pub fn filter_by_price_range(inventory: &Inventory, min: f64, max: f64) -> Vec<Listing<'_>> {
    debug_assert!(min <= max, "price range must be validated by the caller");
    listings(inventory, |v| v.price >= min && v.price <= max)
}

/// Reject a range whose minimum is above its maximum
pub fn check_price_range(min: f64, max: f64) -> Result<()> {
    if min > max {
        return Err(CarstockError::InvalidRange { min, max });
    }
    Ok(())
}
