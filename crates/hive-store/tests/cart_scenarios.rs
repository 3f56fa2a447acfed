//! End-to-end cart scenarios through the public `CartStore` API.

use hive_core::{CartError, ProductCatalog};
use hive_store::{CartStore, FileStorage, KeyValueStorage, MemoryStorage};
use proptest::prelude::*;

fn add_from_catalog<S: KeyValueStorage>(store: &mut CartStore<S>, id: &str, qty: i64) {
    let catalog = ProductCatalog::storefront();
    let product = catalog.get(id).unwrap();
    store
        .add_item(product.id.clone(), &product.name, product.unit_price.minor(), qty)
        .unwrap();
}

#[test]
fn test_add_two_summer_honey() {
    let mut store = CartStore::open(MemoryStorage::new());
    store
        .add_item("summer-honey", "Летний мед", 650, 2)
        .unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, "summer-honey");
    assert_eq!(snapshot[0].quantity, 2);
    assert_eq!(store.total_price().minor(), 1300);
}

#[test]
fn test_decrement_to_zero_empties_cart() {
    let mut store = CartStore::open(MemoryStorage::new());
    store
        .add_item("summer-honey", "Летний мед", 650, 2)
        .unwrap();

    assert!(store.change_quantity("summer-honey", -2));
    assert!(store.snapshot().is_empty());
    assert_eq!(store.total_item_count(), 0);
    assert_eq!(store.storage().raw("cart"), Some("[]"));
}

#[test]
fn test_beeswax_adds_merge() {
    let mut store = CartStore::open(MemoryStorage::new());
    store.add_item("beeswax", "Воск", 250, 1).unwrap();
    store.add_item("beeswax", "Воск", 250, 3).unwrap();

    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(store.snapshot()[0].quantity, 4);
    assert_eq!(store.total_price().minor(), 1000);
}

#[test]
fn test_corrupt_persisted_value_restores_empty() {
    for raw in ["garbage", "[{\"id\":1}]", "null", "[1,2,3]"] {
        let store = CartStore::open(MemoryStorage::new().with_entry("cart", raw));
        assert!(store.snapshot().is_empty(), "{:?} should restore empty", raw);
    }
}

#[test]
fn test_oversized_persisted_amounts_restore_empty() {
    let huge_price = r#"[{"id":"a","name":"A","price":9223372036854775807,"quantity":2}]"#;
    let huge_total = r#"[
        {"id":"a","name":"A","price":1000000000,"quantity":4294967295},
        {"id":"b","name":"B","price":1000000000,"quantity":4294967295},
        {"id":"c","name":"C","price":1000000000,"quantity":4294967295}
    ]"#;

    for raw in [huge_price, huge_total] {
        let store = CartStore::open(MemoryStorage::new().with_entry("cart", raw));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.total_price().minor(), 0);
    }
}

#[test]
fn test_huge_price_is_rejected_and_totals_stay_readable() {
    let mut store = CartStore::open(MemoryStorage::new());
    add_from_catalog(&mut store, "beeswax", 2);

    let err = store.add_item("gold", "Gold", i64::MAX / 2, 3).unwrap_err();
    assert!(matches!(err, CartError::InvalidPrice { .. }));
    assert_eq!(store.total_price().minor(), 500);
}

#[test]
fn test_non_positive_quantity_is_rejected() {
    let mut store = CartStore::open(MemoryStorage::new());
    add_from_catalog(&mut store, "beeswax", 1);

    let err = store.add_item("beeswax", "Воск", 250, -1).unwrap_err();
    assert_eq!(err, CartError::InvalidQuantity { requested: -1 });
    assert_eq!(store.snapshot()[0].quantity, 1);
}

#[test]
fn test_full_catalog_survives_file_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let expected = {
        let mut store = CartStore::open(FileStorage::new(dir.path()).unwrap());
        add_from_catalog(&mut store, "soft-set-honey", 1);
        add_from_catalog(&mut store, "summer-honey", 2);
        add_from_catalog(&mut store, "beeswax", 5);
        store.remove_item("soft-set-honey");
        store.state().clone()
    };

    let reopened = CartStore::open(FileStorage::new(dir.path()).unwrap());
    assert_eq!(reopened.state(), &expected);
    assert_eq!(reopened.total_price().minor(), 2 * 650 + 5 * 250);
}

#[test]
fn test_corrupt_file_restores_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "[{\"id\":").unwrap();

    let mut store = CartStore::open(FileStorage::new(dir.path()).unwrap());
    assert!(store.snapshot().is_empty());

    add_from_catalog(&mut store, "beeswax", 1);
    let reopened = CartStore::open(FileStorage::new(dir.path()).unwrap());
    assert_eq!(reopened.total_item_count(), 1);
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize, i64),
    Change(usize, i64),
    Remove(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..3usize, -2i64..6).prop_map(|(i, q)| Op::Add(i, q)),
        4 => (0..3usize, -4i64..4).prop_map(|(i, d)| Op::Change(i, d)),
        1 => (0..3usize).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_persist_then_restore_round_trips(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let catalog = ProductCatalog::storefront();
        let products: Vec<_> = catalog.iter().collect();
        let mut store = CartStore::open(MemoryStorage::new());

        for op in &ops {
            match *op {
                Op::Add(i, q) => {
                    let p = products[i];
                    let _ = store.add_item(p.id.clone(), &p.name, p.unit_price.minor(), q);
                }
                Op::Change(i, d) => {
                    store.change_quantity(products[i].id.as_str(), d);
                }
                Op::Remove(i) => {
                    store.remove_item(products[i].id.as_str());
                }
                Op::Clear => {
                    store.clear();
                }
            }
        }

        let expected = store.state().clone();
        let restored = CartStore::open(store.into_storage());
        prop_assert_eq!(restored.state(), &expected);
    }
}
