//! Named cart scenarios run against an in-memory snapshot store.
use anyhow::{Context, Result, ensure};
use std::fmt::Debug;

use cafe_cart::constants::{DELIVERY_FEE, FREE_DELIVERY_THRESHOLD, SNAPSHOT_KEY};
use cafe_cart::{
    CartLine, CartNotice, CartStore, MemorySnapshots, MenuCatalog, RestoreOutcome, Size,
    SnapshotStorage,
};

const MENU_JSON: &str = include_str!("../../../cafe-web/static/assets/data/menu.json");

type ScenarioFn = fn(&mut Probe) -> Result<()>;

/// Collects soft check outcomes for one scenario run.
#[derive(Debug, Default)]
pub struct Probe {
    checks: usize,
    failures: Vec<String>,
}

impl Probe {
    pub fn check(&mut self, ok: bool, what: impl Into<String>) {
        self.checks += 1;
        if !ok {
            self.failures.push(what.into());
        }
    }

    pub fn check_eq<T: PartialEq + Debug>(&mut self, what: &str, actual: T, expected: T) {
        self.checks += 1;
        if actual != expected {
            self.failures
                .push(format!("{what}: expected {expected:?}, got {actual:?}"));
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.failures.push(reason.into());
    }

    pub const fn checks(&self) -> usize {
        self.checks
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn into_parts(self) -> (usize, Vec<String>) {
        (self.checks, self.failures)
    }
}

pub struct CartScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

impl CartScenario {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        run: ScenarioFn,
    ) -> Self {
        Self {
            key,
            name,
            description,
            run,
        }
    }
}

pub fn catalog() -> Vec<CartScenario> {
    vec![
        CartScenario::new(
            "smoke",
            "Smoke",
            "Menu parses and a single add prices correctly",
            smoke,
        ),
        CartScenario::new(
            "merge",
            "Line Merging",
            "Adding an existing id merges quantities",
            merge,
        ),
        CartScenario::new(
            "free-delivery-threshold",
            "Free Delivery Threshold",
            "Delivery fee drops at exactly the threshold",
            free_delivery_threshold,
        ),
        CartScenario::new(
            "box-fee",
            "Pizza Box Fee",
            "Pizza lines add a per-unit box charge",
            box_fee,
        ),
        CartScenario::new(
            "zero-quantity",
            "Zero Quantity",
            "Quantity zero removes; zero-quantity adds are ignored",
            zero_quantity,
        ),
        CartScenario::new(
            "clear",
            "Clear Cart",
            "Clearing zeroes every total and persists an empty list",
            clear,
        ),
        CartScenario::new(
            "reload",
            "Reload",
            "A second store over the same storage restores the cart",
            reload,
        ),
        CartScenario::new(
            "pre-ready",
            "Before Ready",
            "Mutations before the gate opens are no-ops",
            pre_ready,
        ),
        CartScenario::new(
            "corrupt-snapshot",
            "Corrupt Snapshot",
            "Malformed snapshots restore as an empty cart",
            corrupt_snapshot,
        ),
        CartScenario::new(
            "write-failure",
            "Write Failure",
            "Rejected writes leave the in-memory cart intact",
            write_failure,
        ),
        CartScenario::new(
            "size-variants",
            "Size Variants",
            "Each size of a pizza is its own line",
            size_variants,
        ),
    ]
}

pub fn find_scenario(key: &str) -> Option<CartScenario> {
    catalog().into_iter().find(|scenario| scenario.key == key)
}

pub fn scenario_keys() -> Vec<&'static str> {
    catalog().iter().map(|scenario| scenario.key).collect()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

fn ready_store() -> Result<CartStore<MemorySnapshots>> {
    let mut store = CartStore::new(MemorySnapshots::new());
    let outcome = store.mark_ready();
    ensure!(
        outcome == RestoreOutcome::Empty,
        "fresh storage restored as {outcome:?}"
    );
    Ok(store)
}

fn menu() -> Result<MenuCatalog> {
    MenuCatalog::from_json(MENU_JSON).context("shipped menu does not parse")
}

fn smoke(probe: &mut Probe) -> Result<()> {
    let menu = menu()?;
    probe.check(menu.item_count() > 0, "menu has items");

    let (category, item) = menu
        .find_item("Aloo Paratha")
        .context("Aloo Paratha missing from menu")?;
    let line = item
        .cart_line(&category.name, Size::Medium, 2)
        .context("no line for a quantity of two")?;
    let unit = u64::from(line.unit_price);

    let mut store = ready_store()?;
    let notice = store.add(line);
    probe.check_eq(
        "notice",
        notice,
        Some(CartNotice::Added {
            name: "Aloo Paratha".into(),
        }),
    );
    probe.check_eq("line count", store.line_count(), 2);
    probe.check_eq("subtotal", store.subtotal(), unit * 2);
    let fee = if unit * 2 >= FREE_DELIVERY_THRESHOLD {
        0
    } else {
        DELIVERY_FEE
    };
    probe.check_eq("grand total", store.grand_total(), unit * 2 + fee);
    Ok(())
}

fn merge(probe: &mut Probe) -> Result<()> {
    let mut store = ready_store()?;
    store.add(CartLine::new("Veg Thali", 180, 2));
    let notice = store.add(CartLine::new("Veg Thali", 180, 3));
    probe.check_eq(
        "second add notice",
        notice,
        Some(CartNotice::QuantityUpdated {
            name: "Veg Thali".into(),
        }),
    );
    probe.check_eq("line entries", store.lines().len(), 1);
    probe.check_eq(
        "merged quantity",
        store.find_line("Veg Thali").map(|line| line.quantity),
        Some(5),
    );
    Ok(())
}

fn free_delivery_threshold(probe: &mut Probe) -> Result<()> {
    let mut store = ready_store()?;
    store.add(CartLine::new("Thali", 299, 1));
    probe.check_eq("fee below threshold", store.delivery_fee(), DELIVERY_FEE);
    probe.check(!store.is_free_delivery(), "299 is not free delivery");
    probe.check_eq(
        "remaining",
        store.totals().remaining_for_free_delivery,
        1,
    );

    store.add(CartLine::new("Papad", 1, 1));
    probe.check_eq("fee at threshold", store.delivery_fee(), 0);
    probe.check(store.is_free_delivery(), "300 is free delivery");
    probe.check_eq("grand total", store.grand_total(), 300);
    Ok(())
}

fn box_fee(probe: &mut Probe) -> Result<()> {
    let mut store = ready_store()?;
    store.add(CartLine::new("Farmhouse", 200, 3).with_category("Pizza"));
    store.add(CartLine::new("Fresh Lime Soda", 50, 2).with_category("Beverages"));
    probe.check_eq("subtotal", store.subtotal(), 700);
    probe.check_eq("box fees", store.surcharge_total(), 30);
    probe.check_eq("delivery", store.delivery_fee(), 0);
    probe.check_eq("grand total", store.grand_total(), 730);
    Ok(())
}

fn zero_quantity(probe: &mut Probe) -> Result<()> {
    let mut store = ready_store()?;
    probe.check_eq("zero add", store.add(CartLine::new("Tea", 20, 0)), None);
    probe.check(store.is_empty(), "zero add leaves the cart empty");

    store.add(CartLine::new("Tea", 20, 1));
    store.add(CartLine::new("Coffee", 30, 1));
    probe.check_eq(
        "set to zero",
        store.set_quantity("Tea", 0),
        Some(CartNotice::Removed { name: "Tea".into() }),
    );
    probe.check_eq("negative", store.set_quantity("Coffee", -4).is_some(), true);
    probe.check_eq("second remove", store.remove("Tea"), None);
    probe.check(store.is_empty(), "both lines gone");
    Ok(())
}

fn clear(probe: &mut Probe) -> Result<()> {
    let mut store = ready_store()?;
    store.add(CartLine::new("Margherita", 249, 2).with_category("Pizza"));
    probe.check_eq("notice", store.clear(), Some(CartNotice::Cleared));
    probe.check_eq("line count", store.line_count(), 0);
    probe.check_eq("surcharge", store.surcharge_total(), 0);
    probe.check_eq("delivery", store.delivery_fee(), 0);
    probe.check_eq("grand total", store.grand_total(), 0);
    probe.check_eq(
        "persisted snapshot",
        store.storage().get(SNAPSHOT_KEY).as_deref(),
        Some("[]"),
    );
    Ok(())
}

fn reload(probe: &mut Probe) -> Result<()> {
    let storage = MemorySnapshots::new();
    let mut store = CartStore::new(storage.clone());
    store.mark_ready();
    store.add(
        CartLine::new("Margherita", 249, 2)
            .with_size(Size::Medium)
            .with_category("Pizza")
            .vegetarian(true),
    );
    store.add(CartLine::new("Cold Coffee", 90, 1).with_category("Beverages"));

    let mut reloaded = CartStore::new(storage);
    probe.check_eq(
        "restore outcome",
        reloaded.mark_ready(),
        RestoreOutcome::Restored { lines: 2 },
    );
    probe.check_eq("lines", reloaded.lines(), store.lines());
    probe.check_eq("totals", reloaded.totals(), store.totals());
    Ok(())
}

fn pre_ready(probe: &mut Probe) -> Result<()> {
    let stored = r#"[{"id":"Tea","name":"Tea","price":20,"quantity":1}]"#;
    let storage = MemorySnapshots::with_entry(SNAPSHOT_KEY, stored);
    let mut store = CartStore::new(storage.clone());

    probe.check_eq("add", store.add(CartLine::new("Coffee", 30, 1)), None);
    probe.check_eq("clear", store.clear(), None);
    probe.check(store.is_empty(), "nothing visible before ready");
    probe.check_eq(
        "storage untouched",
        storage.get(SNAPSHOT_KEY).as_deref(),
        Some(stored),
    );
    probe.check_eq(
        "restore",
        store.mark_ready(),
        RestoreOutcome::Restored { lines: 1 },
    );
    Ok(())
}

fn corrupt_snapshot(probe: &mut Probe) -> Result<()> {
    for raw in ["{not json", r#"{"id":"Tea"}"#, r#"[{"id":"Tea","quantity":"two"}]"#] {
        let mut store = CartStore::new(MemorySnapshots::with_entry(SNAPSHOT_KEY, raw));
        probe.check_eq(raw, store.mark_ready(), RestoreOutcome::Discarded);
        probe.check(store.is_empty(), format!("{raw} leaves the cart empty"));
    }
    Ok(())
}

fn write_failure(probe: &mut Probe) -> Result<()> {
    let storage = MemorySnapshots::new();
    let mut store = CartStore::new(storage.clone());
    store.mark_ready();
    storage.set_fail_writes(true);

    store.add(CartLine::new("Tea", 20, 2));
    probe.check_eq("in-memory count", store.line_count(), 2);
    probe.check(
        storage.get(SNAPSHOT_KEY).is_none(),
        "rejected write left nothing behind",
    );

    storage.set_fail_writes(false);
    store.set_quantity("Tea", 3);
    let saved = storage
        .read_snapshot(SNAPSHOT_KEY)?
        .context("snapshot missing after storage recovered")?;
    probe.check(saved.contains("\"quantity\":3"), "recovered write persisted");
    Ok(())
}

fn size_variants(probe: &mut Probe) -> Result<()> {
    let menu = menu()?;
    let (category, item) = menu
        .find_item("Margherita")
        .context("Margherita missing from menu")?;
    let mut store = ready_store()?;
    for size in [Size::Small, Size::Large, Size::Small] {
        let line = item
            .cart_line(&category.name, size, 1)
            .context("no line for a quantity of one")?;
        store.add(line);
    }
    probe.check_eq("distinct lines", store.lines().len(), 2);
    probe.check_eq(
        "small quantity",
        store.find_line("Margherita-small").map(|line| line.quantity),
        Some(2),
    );
    probe.check_eq("box fees", store.surcharge_total(), 30);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::run_scenario;

    #[test]
    fn every_catalog_scenario_passes() {
        for scenario in catalog() {
            let result = run_scenario(&scenario, false);
            assert!(
                result.passed,
                "{} failed: {:?}",
                scenario.key, result.failures
            );
            assert!(result.checks > 0, "{} made no checks", scenario.key);
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys = scenario_keys();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 11);
    }

    #[test]
    fn probe_records_mismatches() {
        let mut probe = Probe::default();
        probe.check_eq("total", 1, 2);
        probe.check(true, "fine");
        assert_eq!(probe.checks(), 2);
        assert_eq!(probe.failures(), ["total: expected 2, got 1"]);
    }
}
