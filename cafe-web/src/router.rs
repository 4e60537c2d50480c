use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    account::AccountPage, auth::AuthPage, cart::CartPage, home::HomePage, not_found::NotFoundPage,
};

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cart")]
    Cart,
    #[at("/auth")]
    Auth,
    #[at("/account")]
    Account,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The header shows the visitor as signed in while they are on the account page.
    #[must_use]
    pub const fn is_signed_in_view(&self) -> bool {
        matches!(self, Self::Account)
    }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Cart => html! { <CartPage /> },
        Route::Auth => html! { <AuthPage /> },
        Route::Account => html! { <AccountPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_round_trip_through_paths() {
        for (route, path) in [
            (Route::Home, "/"),
            (Route::Cart, "/cart"),
            (Route::Auth, "/auth"),
            (Route::Account, "/account"),
        ] {
            assert_eq!(route.to_path(), path);
            assert_eq!(Route::recognize(path), Some(route));
        }
        assert_eq!(Route::recognize("/menu/secret"), Some(Route::NotFound));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn only_account_route_counts_as_signed_in() {
        assert!(Route::Account.is_signed_in_view());
        assert!(!Route::Auth.is_signed_in_view());
        assert!(!Route::Cart.is_signed_in_view());
    }
}
