use super::menu_item_card::MenuItemCard;
use cafe_cart::{CartLine, MenuCategory, MenuItem};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub category: MenuCategory,
    pub on_add: Callback<CartLine>,
}

/// A category heading followed by its item grid; grouped categories get a
/// sub-heading per group.
#[function_component(MenuSection)]
pub fn menu_section(p: &Props) -> Html {
    let category_name = AttrValue::from(p.category.name.clone());
    let grid = |items: &[MenuItem]| {
        html! {
            <div class="menu-grid">
                { for items.iter().map(|item| html! {
                    <MenuItemCard
                        key={item.name.clone()}
                        item={item.clone()}
                        category={category_name.clone()}
                        on_add={p.on_add.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <section class="menu-section" id={format!("menu-{}", p.category.id)}>
            <h3 class="menu-section-title">{ &p.category.name }</h3>
            if !p.category.items.is_empty() {
                { grid(&p.category.items) }
            }
            { for p.category.groups.iter().map(|group| html! {
                <div class="menu-group" key={group.name.clone()}>
                    <h4 class="menu-group-title">{ &group.name }</h4>
                    { grid(&group.items) }
                </div>
            }) }
        </section>
    }
}
