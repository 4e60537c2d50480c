use cafe_cart::{CartLine, MenuCatalog, PricingPolicy, derive_totals};
use cafe_web::cart::{CartProvider, ToastMessage, ToastTone};
use cafe_web::components::delivery_banner::{self, DeliveryBanner};
use cafe_web::components::footer::Footer;
use cafe_web::components::header::{self, Header};
use cafe_web::components::menu_item_card::{self, MenuItemCard};
use cafe_web::components::menu_section::{self, MenuSection};
use cafe_web::components::toast::{Toasts, ToastsProps};
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

const SAMPLE_MENU: &str = r#"{
    "categories": [
        {"id": "chinese", "name": "Chinese", "items": [
            {"name": "Chilli Chicken", "price": 200, "isVeg": false, "isSpicy": true,
             "description": "Crispy chicken in hot garlic sauce"}
        ]},
        {"id": "pizza", "name": "Pizza", "groups": [
            {"name": "Classic Veg", "items": [
                {"name": "Margherita", "price": {"small": 149, "medium": 249, "large": 349}, "isVeg": true}
            ]}
        ]}
    ]
}"#;

#[derive(Properties, PartialEq)]
struct RoutedProps {
    #[prop_or_default]
    children: Children,
}

#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let history = use_memo((), |()| AnyHistory::from(MemoryHistory::new()));
    html! {
        <Router history={(*history).clone()}>
            <CartProvider>
                { for props.children.iter() }
            </CartProvider>
        </Router>
    }
}

fn render_routed(node: Html) -> String {
    let props = RoutedProps {
        children: ChildrenRenderer::new(vec![node]),
    };
    block_on(LocalServerRenderer::<Routed>::with_props(props).render())
}

fn sample_menu() -> MenuCatalog {
    MenuCatalog::from_json(SAMPLE_MENU).unwrap()
}

#[test]
fn header_shows_badge_only_for_a_non_empty_cart() {
    let html = render_routed(html! { <Header cart_count={4} signed_in={false} /> });
    assert!(html.contains(r#"data-testid="cart-count""#));
    assert!(html.contains(">4<"));
    assert!(html.contains(r#"href="/auth""#));
    assert!(!html.contains("signed-in-dot"));

    let props = header::Props {
        cart_count: 0,
        signed_in: true,
    };
    let html = render_routed(html! { <Header ..props /> });
    assert!(!html.contains("cart-count"));
    assert!(html.contains("signed-in-dot"));
    assert!(html.contains(r#"href="/account""#));
    assert!(html.contains("My Account"));
}

#[test]
fn footer_renders_contact_anchor() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains(r#"id="contact""#));
    assert!(html.contains("Open daily"));
}

#[test]
fn toasts_render_each_message_with_dismiss() {
    let props = ToastsProps {
        toasts: vec![
            ToastMessage {
                id: 1,
                title: "Added to cart".into(),
                description: "Cold Coffee added to your cart".into(),
                tone: ToastTone::Info,
            },
            ToastMessage {
                id: 2,
                title: "Passwords don't match".into(),
                description: "Please make sure your passwords match".into(),
                tone: ToastTone::Destructive,
            },
        ],
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Toasts>::with_props(props).render());
    assert!(html.contains("Cold Coffee added to your cart"));
    assert!(html.contains("alert-error"));
    assert_eq!(html.matches(r#"aria-label="Dismiss""#).count(), 2);
}

#[test]
fn delivery_banner_reports_remaining_amount() {
    let lines = vec![CartLine::new("Veg Thali", 180, 1)];
    let props = delivery_banner::Props {
        totals: derive_totals(&lines, &PricingPolicy::standard()),
    };
    let html = block_on(LocalServerRenderer::<DeliveryBanner>::with_props(props).render());
    assert!(html.contains("Add items worth ₹120.00 more"));
    assert!(html.contains("₹10 box fee"));

    let lines = vec![CartLine::new("Veg Thali", 180, 2)];
    let props = delivery_banner::Props {
        totals: derive_totals(&lines, &PricingPolicy::standard()),
    };
    let html = block_on(LocalServerRenderer::<DeliveryBanner>::with_props(props).render());
    assert!(html.contains("You qualify for free delivery!"));
}

#[test]
fn sized_menu_item_offers_three_sizes_and_no_add_button_at_zero() {
    let catalog = sample_menu();
    let (category, item) = catalog.find_item("Margherita").unwrap();
    let props = menu_item_card::Props {
        item: item.clone(),
        category: category.name.clone().into(),
        on_add: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuItemCard>::with_props(props).render());
    assert_eq!(html.matches(r#"type="radio""#).count(), 3);
    assert!(html.contains("₹149"));
    assert!(html.contains("₹349"));
    assert!(html.contains(">Veg<"));
    assert!(!html.contains("Add to Cart"));
    assert!(html.contains("text=Margherita"));
}

#[test]
fn single_price_item_shows_spicy_and_non_veg_badges() {
    let catalog = sample_menu();
    let (category, item) = catalog.find_item("Chilli Chicken").unwrap();
    let props = menu_item_card::Props {
        item: item.clone(),
        category: category.name.clone().into(),
        on_add: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuItemCard>::with_props(props).render());
    assert!(!html.contains(r#"type="radio""#));
    assert!(html.contains("₹200"));
    assert!(html.contains("Non-Veg"));
    assert!(html.contains("Spicy"));
    assert!(html.contains("hot garlic sauce"));
}

#[test]
fn grouped_section_renders_group_headings() {
    let catalog = sample_menu();
    let props = menu_section::Props {
        category: catalog.find_category("pizza").unwrap().clone(),
        on_add: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuSection>::with_props(props).render());
    assert!(html.contains(r#"id="menu-pizza""#));
    assert!(html.contains("Classic Veg"));
    assert!(html.contains("Margherita"));
}
