use crate::cart::{CartProvider, use_cart};
use crate::components::{footer::Footer, header::Header, toast::Toasts};
use crate::router::{Route, switch};
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <CartProvider>
                <AppShell />
            </CartProvider>
        </BrowserRouter>
    }
}

/// Header, routed page, footer and toasts. Needs a router and a
/// [`CartProvider`] above it.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let cart = use_cart();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let on_dismiss = {
        let cart = cart.clone();
        Callback::from(move |id: u32| cart.dismiss(id))
    };

    html! {
        <>
            <Header cart_count={cart.totals().line_count} signed_in={route.is_signed_in_view()} />
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <Toasts toasts={cart.toasts().to_vec()} {on_dismiss} />
        </>
    }
}

/// Router-less root for tests and server rendering: the shell over an
/// in-memory history starting at `path`.
#[derive(Properties, PartialEq, Clone)]
pub struct StaticAppProps {
    pub path: AttrValue,
}

#[function_component(StaticApp)]
pub fn static_app(props: &StaticAppProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        AnyHistory::from(MemoryHistory::with_entries(vec![path.to_string()]))
    });
    html! {
        <Router history={(*history).clone()}>
            <CartProvider>
                <AppShell />
            </CartProvider>
        </Router>
    }
}
