#![cfg(target_arch = "wasm32")]

use cafe_cart::constants::SNAPSHOT_KEY;
use cafe_cart::{CartLine, CartStore, RestoreOutcome, Size, SnapshotStorage};
use cafe_web::storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let storage = BrowserStorage;
    storage.write_snapshot("cafe-test", "[1]").expect("write");
    assert_eq!(
        storage.read_snapshot("cafe-test").expect("read").as_deref(),
        Some("[1]")
    );
    storage.remove("cafe-test").expect("remove");
    assert_eq!(storage.read_snapshot("cafe-test").expect("read"), None);
}

#[wasm_bindgen_test]
fn cart_survives_a_reload() {
    let _ = BrowserStorage.remove(SNAPSHOT_KEY);
    let mut store = CartStore::new(BrowserStorage);
    assert_eq!(store.mark_ready(), RestoreOutcome::Empty);
    store.add(
        CartLine::new("Margherita", 249, 2)
            .with_size(Size::Medium)
            .with_category("Pizza")
            .vegetarian(true),
    );

    let mut reloaded = CartStore::new(BrowserStorage);
    assert_eq!(reloaded.mark_ready(), RestoreOutcome::Restored { lines: 1 });
    assert_eq!(reloaded.grand_total(), 498 + 20);
    BrowserStorage.remove(SNAPSHOT_KEY).expect("cleanup");
}
