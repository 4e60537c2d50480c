use cafe_cart::{CartLine, PricingPolicy, Size, derive_totals};
use cafe_web::app::{StaticApp, StaticAppProps};
use cafe_web::cart::CartProvider;
use cafe_web::pages::account::{AccountPage, AccountTab};
use cafe_web::pages::auth::{AuthPage, AuthTab};
use cafe_web::pages::cart::{CartView, CartViewProps};
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

fn render_path(path: &str) -> String {
    let props = StaticAppProps { path: path.to_string().into() };
    block_on(LocalServerRenderer::<StaticApp>::with_props(props).render())
}

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

fn cart_view(lines: Vec<CartLine>) -> String {
    let totals = derive_totals(&lines, &PricingPolicy::standard());
    let props = CartViewProps {
        lines,
        totals,
        checking_out: false,
        on_set_quantity: Callback::noop(),
        on_remove: Callback::noop(),
        on_clear: Callback::noop(),
        on_checkout: Callback::noop(),
    };
    block_on(LocalServerRenderer::<CartView>::with_props(props).render())
}

#[test]
fn home_route_renders_every_category_and_tabs() {
    let html = render_path("/");
    assert!(html.contains("Our Menu"));
    assert!(html.contains("All Items"));
    for tab in ["breakfast", "rice", "main", "paneer", "pizza", "beverages"] {
        assert!(html.contains(&format!(r#"data-tab="{tab}""#)), "missing tab {tab}");
    }
    assert!(html.contains("Margherita"));
    assert!(html.contains("Masala Chai"));
    assert!(html.contains("Add items worth ₹300.00 more"));
}

#[test]
fn server_render_sees_an_empty_unhydrated_cart() {
    let html = render_path("/cart");
    assert!(html.contains("Your cart is empty"));
    assert!(html.contains("Back to Menu"));
    assert!(!html.contains("cart-count"));
}

#[test]
fn cart_view_itemises_box_fees_and_free_delivery() {
    let html = cart_view(vec![
        CartLine::new("Farmhouse", 200, 3)
            .with_size(Size::Medium)
            .with_category("Pizza")
            .vegetarian(true),
        CartLine::new("Fresh Lime Soda", 50, 2).with_category("Beverages"),
    ]);
    assert!(html.contains("Order Summary (5 items)"));
    assert!(html.contains("Size: medium"));
    assert_eq!(html.matches("+₹10 box charge per item").count(), 1);
    assert!(html.contains("₹700.00"));
    assert!(html.contains("Pizza Box Charges"));
    assert!(html.contains("₹30.00"));
    assert!(html.contains(">Free<"));
    assert!(html.contains("₹730.00"));
    assert!(html.contains("Free delivery on orders above ₹300"));
    assert!(!html.contains("more for free delivery"));
}

#[test]
fn cart_view_below_threshold_charges_delivery() {
    let html = cart_view(vec![CartLine::new("Veg Thali", 180, 1)]);
    assert!(html.contains("Order Summary (1 item)"));
    assert!(html.contains("Add items worth ₹120.00 more for free delivery"));
    assert!(html.contains("₹30.00"));
    assert!(html.contains("₹210.00"));
    assert!(!html.contains("Pizza Box Charges"));
    assert!(html.contains("Checkout"));
}

#[test]
fn cart_view_disables_checkout_while_processing() {
    let lines = vec![CartLine::new("Veg Thali", 180, 1)];
    let props = CartViewProps {
        totals: derive_totals(&lines, &PricingPolicy::standard()),
        lines,
        checking_out: true,
        on_set_quantity: Callback::noop(),
        on_remove: Callback::noop(),
        on_clear: Callback::noop(),
        on_checkout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CartView>::with_props(props).render());
    assert!(html.contains("Processing..."));
    assert!(html.contains("disabled"));
}

#[test]
fn auth_route_starts_on_login() {
    let html = render_path("/auth");
    assert!(html.contains("Account Access"));
    assert!(html.contains("Welcome Back"));
    assert!(!html.contains("confirmPassword"));
}

#[test]
fn signup_tab_renders_every_field() {
    let html = render_routed(html! { <AuthPage initial_tab={AuthTab::Signup} /> });
    for id in ["firstName", "lastName", "email", "phone", "password", "confirmPassword"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing field {id}");
    }
    assert!(html.contains("Create Account"));
}

#[test]
fn account_route_marks_visitor_signed_in() {
    let html = render_path("/account");
    assert!(html.contains("John Doe"));
    assert!(html.contains("JD"));
    assert!(html.contains("signed-in-dot"));
    assert!(html.contains("Personal Information"));
}

#[test]
fn order_history_lists_demo_orders() {
    let html = render_routed(html! { <AccountPage initial_tab={AccountTab::Orders} /> });
    assert!(html.contains("Order #ORD-1234"));
    assert!(html.contains("7/30/2023"));
    assert!(html.contains("Processing"));
    assert!(html.contains("₹580.00"));
}

#[test]
fn payment_tab_shows_saved_card() {
    let html = render_routed(html! { <AccountPage initial_tab={AccountTab::Payment} /> });
    assert!(html.contains("VISA ending in 4242"));
    assert!(html.contains("Expires 08/2025"));
}

#[test]
fn unknown_route_renders_not_found() {
    let html = render_path("/no-such-page");
    assert!(html.contains("Page not found"));
}
