use cafe_cart::{MenuCatalog, OrderStatus, Profile, Size, derive_totals, is_pizza_line};
use std::collections::BTreeSet;

const MENU_JSON: &str = include_str!("../../cafe-web/static/assets/data/menu.json");
const ACCOUNT_JSON: &str = include_str!("../../cafe-web/static/assets/data/account.json");

#[test]
fn shipped_menu_parses_with_unique_ids() {
    let catalog = MenuCatalog::from_json(MENU_JSON).expect("menu.json should parse");
    let ids: BTreeSet<&str> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.categories.len(), "duplicate category id");
    for id in ["breakfast", "rice", "main", "paneer", "pizza", "beverages"] {
        assert!(ids.contains(id), "missing category {id}");
    }

    let mut names = BTreeSet::new();
    for category in &catalog.categories {
        assert!(
            category.all_items().next().is_some(),
            "{} has no items",
            category.id
        );
        for item in category.all_items() {
            assert!(names.insert(item.name.clone()), "duplicate item {}", item.name);
            assert!(item.price.for_size(Size::Small) > 0, "{} is free", item.name);
        }
    }
}

#[test]
fn every_pizza_line_carries_the_box_fee() {
    let catalog = MenuCatalog::from_json(MENU_JSON).unwrap();
    let pizza = catalog.find_category("pizza").unwrap();
    assert!(pizza.is_grouped());
    for item in pizza.all_items() {
        assert!(item.price.is_sized(), "{} should come in sizes", item.name);
        let line = item.cart_line(&pizza.name, Size::Large, 1).unwrap();
        assert!(is_pizza_line(&line));
        let totals = derive_totals(&[line], &cafe_cart::PricingPolicy::standard());
        assert_eq!(totals.surcharge_total, 10);
    }
}

#[test]
fn non_pizza_categories_are_surcharge_free() {
    let catalog = MenuCatalog::from_json(MENU_JSON).unwrap();
    let lines: Vec<_> = catalog
        .categories
        .iter()
        .filter(|c| c.id != "pizza")
        .flat_map(|c| {
            c.all_items()
                .filter(|item| !item.name.to_lowercase().contains("pizza"))
                .filter_map(|item| item.cart_line(&c.name, Size::Small, 1))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(!lines.is_empty());
    let totals = derive_totals(&lines, &cafe_cart::PricingPolicy::standard());
    assert_eq!(totals.surcharge_total, 0);
}

#[test]
fn demo_profile_parses() {
    let profile = Profile::from_json(ACCOUNT_JSON).expect("account.json should parse");
    assert_eq!(profile.initials(), "JD");
    assert_eq!(profile.orders.len(), 3);
    let latest = profile.recent_orders()[0];
    assert_eq!(latest.id, "ORD-1236");
    assert_eq!(latest.status, OrderStatus::Processing);
    assert_eq!(profile.addresses.iter().filter(|a| a.is_default).count(), 1);
}
