use crate::i18n::t;
use crate::paths::section_href;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const SECTIONS: [(&str, &str); 4] = [
    ("about", "nav.about"),
    ("menu", "nav.menu"),
    ("gallery", "nav.gallery"),
    ("contact", "nav.contact"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Total units in the cart; the badge is hidden at zero.
    pub cart_count: u64,
    pub signed_in: bool,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let menu_open = use_state(|| false);
    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <h1>{ t("app.name") }</h1>
                </Link<Route>>
                <nav class="header-nav desktop" aria-label={t("nav.menu")}>
                    <NavLinks signed_in={p.signed_in} on_pick={Callback::noop()} />
                </nav>
                <div class="header-actions">
                    <AccountButton signed_in={p.signed_in} />
                    <CartButton count={p.cart_count} />
                    <button
                        type="button"
                        class="menu-toggle mobile"
                        aria-label={t("nav.toggle_menu")}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
            if *menu_open {
                <nav class="header-nav mobile-nav" aria-label={t("nav.menu")}>
                    <NavLinks signed_in={p.signed_in} on_pick={close} />
                </nav>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    signed_in: bool,
    on_pick: Callback<MouseEvent>,
}

#[function_component(NavLinks)]
fn nav_links(p: &NavLinksProps) -> Html {
    html! {
        <>
            { for SECTIONS.iter().map(|(section, key)| html! {
                <a key={*section} href={section_href(section)} class="nav-link" onclick={p.on_pick.clone()}>
                    { t(key) }
                </a>
            }) }
            if p.signed_in {
                <span onclick={p.on_pick.clone()}>
                    <Link<Route> to={Route::Account} classes="nav-link">{ t("nav.account") }</Link<Route>>
                </span>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct AccountButtonProps {
    signed_in: bool,
}

#[function_component(AccountButton)]
fn account_button(p: &AccountButtonProps) -> Html {
    let target = if p.signed_in { Route::Account } else { Route::Auth };
    html! {
        <Link<Route> to={target} classes="icon-button account-link">
            <span aria-label={t("nav.profile")}>{ "👤" }</span>
            if p.signed_in {
                <span class="badge badge-online" data-testid="signed-in-dot"></span>
            }
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
struct CartButtonProps {
    count: u64,
}

#[function_component(CartButton)]
fn cart_button(p: &CartButtonProps) -> Html {
    html! {
        <Link<Route> to={Route::Cart} classes="icon-button cart-link">
            <span aria-label={t("nav.cart")}>{ "🛒" }</span>
            if p.count > 0 {
                <span class="badge badge-count" data-testid="cart-count">{ p.count }</span>
            }
        </Link<Route>>
    }
}
