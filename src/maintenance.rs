//! Mutating operations over the inventory

use crate::error::Result;
use crate::inventory::Inventory;
use crate::record::Vehicle;

/// Add a vehicle at its price-ordered position
///
/// Returns the 1-based position it now occupies.
pub fn insert_new(inventory: &mut Inventory, vehicle: Vehicle) -> Result<usize> {
    let pos = inventory.insert(vehicle)?;
    log::info!(
        "inserted vehicle at position {} ({} slots left)",
        pos + 1,
        inventory.remaining()
    );
    Ok(pos + 1)
}

/// Remove every vehicle driven more than `max_mileage` km
///
/// `on_remove` sees each vehicle before it is removed. Returns the number removed.
pub fn remove_overrun<F>(inventory: &mut Inventory, max_mileage: i32, on_remove: F) -> usize
where
    F: FnMut(&Vehicle),
{
    let removed = inventory.remove_where_with(|v| v.mileage > max_mileage, on_remove);
    log::info!("removed {removed} vehicles with mileage over {max_mileage} km");
    removed
}
