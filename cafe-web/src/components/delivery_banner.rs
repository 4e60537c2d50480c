use crate::format::{fmt_price, fmt_rupees};
use crate::i18n::{t, tr};
use cafe_cart::CartTotals;
use cafe_cart::constants::{BOX_FEE_PER_UNIT, FREE_DELIVERY_THRESHOLD};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub totals: CartTotals,
}

/// Free-delivery progress and the pizza box fee note shown above the menu.
#[function_component(DeliveryBanner)]
pub fn delivery_banner(p: &Props) -> Html {
    let status = if p.totals.is_free_delivery {
        html! { <span class="delivery-qualified">{ t("delivery.qualified") }</span> }
    } else {
        let threshold = fmt_price(FREE_DELIVERY_THRESHOLD);
        let amount = fmt_rupees(p.totals.remaining_for_free_delivery);
        let args = BTreeMap::from([("threshold", threshold.as_str()), ("amount", amount.as_str())]);
        html! { <span class="delivery-remaining">{ tr("delivery.remaining", Some(&args)) }</span> }
    };
    let fee = fmt_price(BOX_FEE_PER_UNIT);

    html! {
        <div class="delivery-banner">
            <p>{ status }</p>
            <p class="box-fee-note">{ tr("delivery.box_fee", Some(&BTreeMap::from([("fee", fee.as_str())]))) }</p>
        </div>
    }
}
