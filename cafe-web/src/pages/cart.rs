use crate::cart::{ToastTone, use_cart};
use crate::format::{fmt_price, fmt_rupees};
use crate::i18n::{t, tr};
use crate::paths::section_href;
use cafe_cart::constants::{BOX_FEE_PER_UNIT, FREE_DELIVERY_THRESHOLD};
use cafe_cart::{CartLine, CartTotals, is_pizza_line};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Simulated order processing time.
pub const CHECKOUT_DELAY_MS: i32 = 2_000;

/// The cart route: wires [`CartView`] to the shared cart.
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let cart = use_cart();
    let checking_out = use_state(|| false);

    let on_set_quantity = {
        let cart = cart.clone();
        Callback::from(move |(id, quantity): (String, i64)| cart.set_quantity(id, quantity))
    };
    let on_remove = {
        let cart = cart.clone();
        Callback::from(move |id: String| cart.remove(id))
    };
    let on_clear = {
        let cart = cart.clone();
        Callback::from(move |()| cart.clear())
    };
    let on_checkout = {
        let cart = cart.clone();
        let checking_out = checking_out.clone();
        Callback::from(move |()| {
            if *checking_out {
                return;
            }
            checking_out.set(true);
            let cart = cart.clone();
            let checking_out = checking_out.clone();
            crate::dom::run_after(CHECKOUT_DELAY_MS, move || {
                cart.notify(
                    t("cart.order_placed"),
                    t("cart.order_placed_body"),
                    ToastTone::Success,
                );
                cart.clear();
                checking_out.set(false);
            });
        })
    };

    html! {
        <CartView
            lines={cart.lines().to_vec()}
            totals={cart.totals()}
            checking_out={*checking_out}
            {on_set_quantity}
            {on_remove}
            {on_clear}
            {on_checkout}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CartViewProps {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    #[prop_or_default]
    pub checking_out: bool,
    pub on_set_quantity: Callback<(String, i64)>,
    pub on_remove: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_checkout: Callback<()>,
}

#[function_component(CartView)]
pub fn cart_view(p: &CartViewProps) -> Html {
    html! {
        <section class="cart-page">
            <h1 class="page-title">{ t("cart.title") }</h1>
            if p.lines.is_empty() {
                <EmptyCart />
            } else {
                { filled_cart(p) }
            }
        </section>
    }
}

#[function_component(EmptyCart)]
fn empty_cart() -> Html {
    html! {
        <div class="cart-empty">
            <div class="cart-empty-icon" aria-hidden="true">{ "🛍" }</div>
            <h2>{ t("cart.empty_title") }</h2>
            <p>{ t("cart.empty_message") }</p>
            <a href={section_href("menu")} class="btn btn-primary">{ t("cart.back_to_menu") }</a>
        </div>
    }
}

fn filled_cart(p: &CartViewProps) -> Html {
    let totals = &p.totals;
    let count = totals.line_count.to_string();
    let summary = tr("cart.summary", Some(&BTreeMap::from([("count", count.as_str())])));
    let remaining = (!totals.is_free_delivery).then(|| {
        let amount = fmt_rupees(totals.remaining_for_free_delivery);
        tr("cart.remaining", Some(&BTreeMap::from([("amount", amount.as_str())])))
    });
    let clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let checkout = {
        let cb = p.on_checkout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <>
            <div class="card cart-card">
                <div class="cart-header">
                    <h2 class="cart-summary-title">{ summary }</h2>
                    if let Some(remaining) = remaining {
                        <p class="cart-remaining">{ remaining }</p>
                    }
                </div>
                <ul class="cart-lines">
                    { for p.lines.iter().map(|line| html! {
                        <CartLineRow
                            key={line.id.clone()}
                            line={line.clone()}
                            on_set_quantity={p.on_set_quantity.clone()}
                            on_remove={p.on_remove.clone()}
                        />
                    }) }
                </ul>
                <SummaryBlock totals={*totals} />
            </div>
            <div class="cart-actions">
                <a href={section_href("menu")} class="btn btn-outline">{ t("cart.continue") }</a>
                <div class="cart-actions-right">
                    <button type="button" class="btn btn-outline" onclick={clear}>{ t("cart.clear") }</button>
                    <button
                        type="button"
                        class="btn btn-primary checkout"
                        disabled={p.checking_out}
                        onclick={checkout}
                    >
                        { if p.checking_out { t("cart.processing") } else { t("cart.checkout") } }
                    </button>
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct CartLineRowProps {
    line: CartLine,
    on_set_quantity: Callback<(String, i64)>,
    on_remove: Callback<String>,
}

#[function_component(CartLineRow)]
fn cart_line_row(p: &CartLineRowProps) -> Html {
    let line = &p.line;
    let current = i64::from(line.quantity);
    let step = |delta: i64| {
        let cb = p.on_set_quantity.clone();
        let id = line.id.clone();
        Callback::from(move |_| cb.emit((id.clone(), current + delta)))
    };
    let remove = {
        let cb = p.on_remove.clone();
        let id = line.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let (badge_class, badge_text) = if line.is_vegetarian {
        ("badge badge-veg", t("menu.veg"))
    } else {
        ("badge badge-nonveg", t("menu.non_veg"))
    };
    let box_fee = fmt_price(BOX_FEE_PER_UNIT);

    html! {
        <li class="cart-line" data-line-id={line.id.clone()}>
            <div class="cart-line-media">
                <img src={line.image_ref.clone()} alt={line.name.clone()} />
                <span class={badge_class}>{ badge_text }</span>
            </div>
            <div class="cart-line-info">
                <h3>{ &line.name }</h3>
                if let Some(size) = line.size_variant {
                    <p class="cart-line-size">
                        { tr("cart.size", Some(&BTreeMap::from([("size", size.key())]))) }
                    </p>
                }
                <p class="cart-line-price">{ fmt_price(line.unit_price) }</p>
                if is_pizza_line(line) {
                    <p class="cart-line-box-fee">
                        { tr("cart.box_charge", Some(&BTreeMap::from([("fee", box_fee.as_str())]))) }
                    </p>
                }
            </div>
            <div class="stepper">
                <button type="button" class="stepper-btn" aria-label={t("menu.decrease")} onclick={step(-1)}>{ "−" }</button>
                <span class="stepper-value">{ line.quantity }</span>
                <button type="button" class="stepper-btn" aria-label={t("menu.increase")} onclick={step(1)}>{ "+" }</button>
            </div>
            <p class="cart-line-total">{ fmt_rupees(line.line_total()) }</p>
            <button
                type="button"
                class="btn btn-ghost remove"
                aria-label={tr("cart.remove", Some(&BTreeMap::from([("name", line.name.as_str())])))}
                onclick={remove}
            >{ "🗑" }</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryBlockProps {
    totals: CartTotals,
}

#[function_component(SummaryBlock)]
fn summary_block(p: &SummaryBlockProps) -> Html {
    let totals = &p.totals;
    let threshold = fmt_price(FREE_DELIVERY_THRESHOLD);
    html! {
        <dl class="cart-summary">
            <div class="summary-row">
                <dt>{ t("cart.subtotal") }</dt>
                <dd>{ fmt_rupees(totals.subtotal) }</dd>
            </div>
            <div class="summary-row">
                <dt>{ t("cart.delivery_fee") }</dt>
                if totals.is_free_delivery {
                    <dd class="free">{ t("cart.free") }</dd>
                } else {
                    <dd>{ fmt_rupees(totals.delivery_fee) }</dd>
                }
            </div>
            if totals.surcharge_total > 0 {
                <div class="summary-row">
                    <dt>{ t("cart.box_charges") }</dt>
                    <dd>{ fmt_rupees(totals.surcharge_total) }</dd>
                </div>
            }
            <div class="summary-row summary-total">
                <dt>{ t("cart.total") }</dt>
                <dd data-testid="grand-total">{ fmt_rupees(totals.grand_total) }</dd>
            </div>
            <p class="summary-note">{ t("cart.tax_note") }</p>
            if totals.is_free_delivery {
                <p class="summary-note free">
                    { tr("cart.free_note", Some(&BTreeMap::from([("threshold", threshold.as_str())]))) }
                </p>
            }
        </dl>
    }
}
