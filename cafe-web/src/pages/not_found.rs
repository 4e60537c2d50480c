use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown when no route matches.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                { t("not_found.back") }
            </Link<Route>>
        </section>
    }
}
