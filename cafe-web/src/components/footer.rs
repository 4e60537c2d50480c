use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <p>{ t("footer.hours") }</p>
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}
