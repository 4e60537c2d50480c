use crate::format::fmt_price;
use crate::i18n::t;
use cafe_cart::{CartLine, MenuItem, MenuPrice, Size};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: MenuItem,
    /// Display name of the category the item is listed under.
    pub category: AttrValue,
    pub on_add: Callback<CartLine>,
}

/// One menu entry with a local quantity stepper.
///
/// The stepper starts at zero; "Add to Cart" appears once it is positive and
/// resets it after adding.
#[function_component(MenuItemCard)]
pub fn menu_item_card(p: &Props) -> Html {
    let quantity = use_state(|| 0_u32);
    let size = use_state(|| Size::Small);

    let decrement = {
        let quantity = quantity.clone();
        Callback::from(move |_| quantity.set(quantity.saturating_sub(1)))
    };
    let increment = {
        let quantity = quantity.clone();
        Callback::from(move |_| quantity.set(quantity.saturating_add(1)))
    };
    let add = {
        let quantity = quantity.clone();
        let item = p.item.clone();
        let category = p.category.clone();
        let on_add = p.on_add.clone();
        let size = *size;
        Callback::from(move |_| {
            if let Some(line) = item.cart_line(&category, size, *quantity) {
                on_add.emit(line);
                quantity.set(0);
            }
        })
    };

    let price = match &p.item.price {
        MenuPrice::Single(price) => html! { <p class="price">{ fmt_price(*price) }</p> },
        MenuPrice::Sized(prices) => html! {
            <div class="size-options" role="radiogroup">
                { for Size::ALL.into_iter().map(|option| {
                    let on_pick = {
                        let size = size.clone();
                        Callback::from(move |_: Event| size.set(option))
                    };
                    html! {
                        <label key={option.key()} class="size-option">
                            <input
                                type="radio"
                                name={format!("size-{}", p.item.name)}
                                value={option.key()}
                                checked={*size == option}
                                onchange={on_pick}
                            />
                            <span class="price">
                                { fmt_price(prices.get(option)) }
                                { " " }
                                <span class="size-label">{ option.short_label() }</span>
                            </span>
                        </label>
                    }
                }) }
            </div>
        },
    };

    let (badge_class, badge_text) = if p.item.is_veg {
        ("badge badge-veg", t("menu.veg"))
    } else {
        ("badge badge-nonveg", t("menu.non_veg"))
    };

    html! {
        <article class="card menu-item">
            <div class="menu-item-media">
                <img src={p.item.image_ref()} alt={p.item.name.clone()} loading="lazy" />
                <span class={badge_class}>{ badge_text }</span>
            </div>
            <h4 class="menu-item-name">{ &p.item.name }</h4>
            if let Some(description) = &p.item.description {
                <p class="menu-item-description">{ description }</p>
            }
            <div class="menu-item-pricing">
                { price }
                if p.item.is_spicy {
                    <span class="badge badge-spicy">{ t("menu.spicy") }</span>
                }
            </div>
            <div class="menu-item-actions">
                <div class="stepper">
                    <button
                        type="button"
                        class="stepper-btn"
                        aria-label={t("menu.decrease")}
                        disabled={*quantity == 0}
                        onclick={decrement}
                    >{ "−" }</button>
                    <span class="stepper-value">{ *quantity }</span>
                    <button
                        type="button"
                        class="stepper-btn"
                        aria-label={t("menu.increase")}
                        onclick={increment}
                    >{ "+" }</button>
                </div>
                if *quantity > 0 {
                    <button type="button" class="btn btn-primary add-to-cart" onclick={add}>
                        { t("menu.add_to_cart") }
                    </button>
                }
            </div>
        </article>
    }
}
