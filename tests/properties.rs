//! Property tests for the inventory ordering and removal contract

use carstock::inventory::Inventory;
use carstock::maintenance;
use carstock::query;
use carstock::record::Vehicle;
use proptest::prelude::*;

fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    (
        prop::sample::select(vec!["Toyota", "toyota", "Fiat", "VW", "Honda"]),
        1990i32..2025,
        0i32..300_000,
        // Whole prices in a narrow band so ties are common
        0u32..50,
    )
        .prop_map(|(brand, year, mileage, price)| {
            Vehicle::new(brand, "Model", year, mileage, f64::from(price) * 1000.0)
        })
}

fn load(vehicles: &[Vehicle], extra: usize) -> Inventory {
    let mut inv = Inventory::for_load(vehicles.len(), extra);
    inv.bulk_load(vehicles.iter().cloned()).unwrap();
    inv
}

proptest! {
    #[test]
    fn prop_bulk_load_is_price_ordered(vehicles in prop::collection::vec(vehicle_strategy(), 0..40)) {
        let inv = load(&vehicles, 0);
        prop_assert_eq!(inv.len(), vehicles.len());
        for pair in inv.as_slice().windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn prop_bulk_load_matches_stable_sort(vehicles in prop::collection::vec(vehicle_strategy(), 0..40)) {
        let inv = load(&vehicles, 0);
        let mut expected = vehicles.clone();
        expected.sort_by(|a, b| a.price.total_cmp(&b.price));
        prop_assert_eq!(inv.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_insert_never_exceeds_capacity(
        vehicles in prop::collection::vec(vehicle_strategy(), 0..20),
        extra in 0usize..5,
        attempts in prop::collection::vec(vehicle_strategy(), 0..10),
    ) {
        let mut inv = load(&vehicles, extra);
        for vehicle in attempts {
            let before = inv.as_slice().to_vec();
            match maintenance::insert_new(&mut inv, vehicle) {
                Ok(_) => prop_assert_eq!(inv.len(), before.len() + 1),
                Err(_) => prop_assert_eq!(inv.as_slice(), before.as_slice()),
            }
            prop_assert!(inv.len() <= inv.capacity());
        }
        prop_assert!(inv.len() <= vehicles.len() + extra);
        for pair in inv.as_slice().windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn prop_remove_where_is_stable_complement(
        vehicles in prop::collection::vec(vehicle_strategy(), 0..40),
        threshold in 0i32..300_000,
    ) {
        let mut inv = load(&vehicles, 0);
        let expected: Vec<Vehicle> = inv.iter().filter(|v| v.mileage <= threshold).cloned().collect();
        let matching = inv.len() - expected.len();

        let removed = inv.remove_where(|v| v.mileage > threshold);
        prop_assert_eq!(removed, matching);
        prop_assert_eq!(inv.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_queries_do_not_mutate(
        vehicles in prop::collection::vec(vehicle_strategy(), 0..40),
        a in 0u32..50,
        b in 0u32..50,
    ) {
        let inv = load(&vehicles, 0);
        let snapshot = inv.as_slice().to_vec();
        let (min, max) = (f64::from(a.min(b)) * 1000.0, f64::from(a.max(b)) * 1000.0);

        let first = query::filter_by_price_range(&inv, min, max);
        let second = query::filter_by_price_range(&inv, min, max);
        prop_assert_eq!(&first, &second);
        for listing in &first {
            prop_assert!(listing.vehicle.price >= min && listing.vehicle.price <= max);
        }

        let lower = query::filter_by_brand(&inv, "toyota");
        let upper = query::filter_by_brand(&inv, "TOYOTA");
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(inv.as_slice(), snapshot.as_slice());
    }
}
