use crate::cart::use_cart;
use crate::components::delivery_banner::DeliveryBanner;
use crate::components::menu_section::MenuSection;
use crate::data::catalog;
use crate::i18n::t;
use crate::paths::section_href;
use cafe_cart::CartLine;
use yew::prelude::*;

const ALL_TAB: &str = "all";

/// Landing page: hero, delivery banner and the tabbed menu.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let cart = use_cart();
    let selected = use_state(|| AttrValue::from(ALL_TAB));
    let on_add = {
        let cart = cart.clone();
        Callback::from(move |line: CartLine| cart.add(line))
    };

    let catalog = catalog();
    let tabs = std::iter::once((AttrValue::from(ALL_TAB), t("menu.all"))).chain(
        catalog
            .categories
            .iter()
            .map(|category| (AttrValue::from(category.id.clone()), category.name.clone())),
    );
    let visible = catalog
        .categories
        .iter()
        .filter(|category| selected.as_str() == ALL_TAB || category.id == selected.as_str());

    html! {
        <>
            <section id="about" class="hero">
                <h2 class="hero-title">{ t("hero.title") }</h2>
                <p class="hero-subtitle">{ t("hero.subtitle") }</p>
                <a href={section_href("menu")} class="btn btn-primary">{ t("hero.cta") }</a>
            </section>
            <section id="menu" class="menu">
                <h2 class="menu-title">{ t("menu.title") }</h2>
                <DeliveryBanner totals={cart.totals()} />
                <div class="tabs" role="tablist">
                    { for tabs.map(|(id, label)| {
                        let active = *selected == id;
                        let on_click = {
                            let selected = selected.clone();
                            let id = id.clone();
                            Callback::from(move |_| selected.set(id.clone()))
                        };
                        html! {
                            <button
                                key={id.to_string()}
                                type="button"
                                role="tab"
                                class={classes!("tab", active.then_some("tab-active"))}
                                aria-selected={active.to_string()}
                                data-tab={id.clone()}
                                onclick={on_click}
                            >{ label }</button>
                        }
                    }) }
                </div>
                <div class="menu-sections">
                    { for visible.map(|category| html! {
                        <MenuSection key={category.id.clone()} category={category.clone()} on_add={on_add.clone()} />
                    }) }
                </div>
                <p class="bill-promise">{ t("menu.bill_promise") }</p>
            </section>
            <section id="gallery" class="gallery" aria-label={t("nav.gallery")}></section>
        </>
    }
}
