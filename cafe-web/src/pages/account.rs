use crate::cart::{ToastTone, use_cart};
use crate::data::demo_profile;
use crate::format::{fmt_order_date, fmt_rupees};
use crate::i18n::{t, tr};
use crate::input::bind_form;
use crate::paths::asset_path;
use crate::router::Route;
use cafe_cart::{OrderStatus, Profile};
use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::prelude::*;

pub const PROFILE_UPDATE_DELAY_MS: i32 = 1_500;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountTab {
    #[default]
    Profile,
    Orders,
    Addresses,
    Payment,
}

impl AccountTab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Orders, Self::Addresses, Self::Payment];

    const fn label_key(self) -> &'static str {
        match self {
            Self::Profile => "account.tabs.profile",
            Self::Orders => "account.tabs.orders",
            Self::Addresses => "account.tabs.addresses",
            Self::Payment => "account.tabs.payment",
        }
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AccountPageProps {
    #[prop_or_default]
    pub initial_tab: AccountTab,
}

#[function_component(AccountPage)]
pub fn account_page(props: &AccountPageProps) -> Html {
    let tab = use_state(|| props.initial_tab);
    let Some(profile) = demo_profile() else {
        return html! { <section class="account-page"><p>{ t("not_found.message") }</p></section> };
    };

    let pick = |target: AccountTab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(target))
    };

    html! {
        <section class="account-page">
            <div class="account-header">
                <div class="avatar">
                    <img src={asset_path("placeholder.svg?height=96&width=96")} alt={profile.name.clone()} />
                    <span class="avatar-fallback">{ profile.initials() }</span>
                </div>
                <div>
                    <h1 class="page-title">{ &profile.name }</h1>
                    <p>{ &profile.email }</p>
                    <p class="account-address">{ "📍 " }{ &profile.address }</p>
                </div>
            </div>
            <div class="tabs" role="tablist">
                { for AccountTab::ALL.into_iter().map(|target| html! {
                    <button
                        type="button"
                        role="tab"
                        class={classes!("tab", (*tab == target).then_some("tab-active"))}
                        onclick={pick(target)}
                    >{ t(target.label_key()) }</button>
                }) }
            </div>
            {
                match *tab {
                    AccountTab::Profile => html! { <ProfilePanel profile={profile.clone()} /> },
                    AccountTab::Orders => orders_panel(profile),
                    AccountTab::Addresses => addresses_panel(profile),
                    AccountTab::Payment => payment_panel(profile),
                }
            }
            <div class="back-link">
                <Link<Route> to={Route::Home}>{ t("ui.back_home") }</Link<Route>>
            </div>
        </section>
    }
}

#[derive(Clone, PartialEq, Default)]
struct ProfileDraft {
    name: String,
    email: String,
    phone: String,
    current_password: String,
}

fn set_draft_field(draft: &mut ProfileDraft, id: &str, value: String) {
    match id {
        "fullName" => draft.name = value,
        "email" => draft.email = value,
        "phone" => draft.phone = value,
        "currentPassword" => draft.current_password = value,
        _ => {}
    }
}

#[derive(Properties, PartialEq)]
struct ProfilePanelProps {
    profile: Profile,
}

#[function_component(ProfilePanel)]
fn profile_panel(p: &ProfilePanelProps) -> Html {
    let cart = use_cart();
    let loading = use_state(|| false);
    let draft = {
        let profile = p.profile.clone();
        use_state(move || ProfileDraft {
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            current_password: String::new(),
        })
    };

    let on_submit = {
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);
            let loading = loading.clone();
            let cart = cart.clone();
            crate::dom::run_after(PROFILE_UPDATE_DELAY_MS, move || {
                loading.set(false);
                cart.notify(t("account.updated"), t("account.updated_body"), ToastTone::Success);
            });
        })
    };
    let oninput = bind_form(&draft, set_draft_field);

    html! {
        <div class="card account-card">
            <h2>{ t("account.personal") }</h2>
            <p class="card-description">{ t("account.personal_body") }</p>
            <form class="account-form" onsubmit={on_submit}>
                <div class="form-grid">
                    <label for="fullName">{ t("account.full_name") }</label>
                    <input id="fullName" required=true value={draft.name.clone()} oninput={oninput.clone()} />
                    <label for="email">{ t("account.email") }</label>
                    <input id="email" type="email" required=true value={draft.email.clone()} oninput={oninput.clone()} />
                    <label for="phone">{ t("account.phone") }</label>
                    <input id="phone" type="tel" required=true value={draft.phone.clone()} oninput={oninput.clone()} />
                </div>
                <label for="currentPassword">{ t("account.current_password") }</label>
                <input
                    id="currentPassword"
                    type="password"
                    placeholder={t("account.current_password_hint")}
                    value={draft.current_password.clone()}
                    {oninput}
                />
                <button type="submit" class="btn btn-primary" disabled={*loading}>
                    { if *loading { t("account.updating") } else { t("account.update") } }
                </button>
            </form>
            <hr />
            <h3>{ t("account.change_password") }</h3>
            <form class="account-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <label for="oldPassword">{ t("account.current_password") }</label>
                <input id="oldPassword" type="password" required=true />
                <label for="newPassword">{ t("account.new_password") }</label>
                <input id="newPassword" type="password" required=true />
                <label for="confirmNewPassword">{ t("account.confirm_new_password") }</label>
                <input id="confirmNewPassword" type="password" required=true />
                <button type="submit" class="btn btn-primary">{ t("account.change_password") }</button>
            </form>
            <hr />
            <h3 class="danger">{ t("account.management") }</h3>
            <button type="button" class="btn btn-outline danger">{ t("account.sign_out_all") }</button>
            <button type="button" class="btn btn-outline danger">{ t("account.delete") }</button>
        </div>
    }
}

fn orders_panel(profile: &Profile) -> Html {
    html! {
        <div class="card account-card">
            <h2>{ t("account.history") }</h2>
            <p class="card-description">{ t("account.history_body") }</p>
            <ul class="order-list">
                { for profile.orders.iter().map(|order| {
                    let status_class = match order.status {
                        OrderStatus::Delivered => "status status-delivered",
                        OrderStatus::Processing => "status status-processing",
                        OrderStatus::Cancelled => "status status-cancelled",
                    };
                    html! {
                        <li key={order.id.clone()} class="order">
                            <div>
                                <h3>{ tr("account.order", Some(&BTreeMap::from([("id", order.id.as_str())]))) }</h3>
                                <p class="order-date">{ "🕒 " }{ fmt_order_date(order.date) }</p>
                            </div>
                            <span class={status_class}>{ order.status.label() }</span>
                            <p class="order-total">{ fmt_rupees(order.total) }</p>
                            <button type="button" class="btn btn-outline btn-sm">{ t("account.view_details") }</button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

fn addresses_panel(profile: &Profile) -> Html {
    html! {
        <div class="card account-card">
            <h2>{ t("account.addresses_title") }</h2>
            <p class="card-description">{ t("account.addresses_body") }</p>
            <div class="address-grid">
                { for profile.addresses.iter().map(|address| html! {
                    <div key={address.label.clone()} class="address">
                        if address.is_default {
                            <span class="badge badge-default">{ t("account.default") }</span>
                        }
                        <h3>{ &address.label }</h3>
                        <p>{ &profile.name }<br />{ &address.line }<br />{ &profile.phone }</p>
                        <div class="address-actions">
                            <button type="button" class="btn btn-outline btn-sm">{ t("account.edit") }</button>
                            if !address.is_default {
                                <button type="button" class="btn btn-outline btn-sm danger">{ t("account.remove") }</button>
                                <button type="button" class="btn btn-outline btn-sm">{ t("account.set_default") }</button>
                            }
                        </div>
                    </div>
                }) }
                <div class="address add-new">
                    <button type="button" class="btn btn-outline">{ t("account.add_address") }</button>
                    <p>{ t("account.add_address_body") }</p>
                </div>
            </div>
        </div>
    }
}

fn payment_panel(profile: &Profile) -> Html {
    html! {
        <div class="card account-card">
            <h2>{ t("account.payment_title") }</h2>
            <p class="card-description">{ t("account.payment_body") }</p>
            <h3>{ t("account.saved_methods") }</h3>
            <div class="card-grid">
                { for profile.cards.iter().enumerate().map(|(idx, card)| {
                    let label = tr(
                        "account.card",
                        Some(&BTreeMap::from([("brand", card.brand.as_str()), ("last4", card.last4.as_str())])),
                    );
                    let expires = tr("account.expires", Some(&BTreeMap::from([("date", card.expires.as_str())])));
                    html! {
                        <div key={card.last4.clone()} class="saved-card">
                            if idx == 0 {
                                <span class="badge badge-default">{ t("account.default") }</span>
                            }
                            <h4>{ label }</h4>
                            <p>{ expires }</p>
                            <button type="button" class="btn btn-outline btn-sm">{ t("account.edit") }</button>
                        </div>
                    }
                }) }
                <div class="saved-card add-new">
                    <button type="button" class="btn btn-outline">{ t("account.add_payment") }</button>
                    <p>{ t("account.add_payment_body") }</p>
                </div>
            </div>
            <hr />
            <h3>{ t("account.preferences") }</h3>
            <label class="preference">
                <input type="checkbox" id="saveCardDetails" checked=true />
                <span>{ t("account.save_card") }</span>
                <small>{ t("account.save_card_body") }</small>
            </label>
            <label class="preference">
                <input type="checkbox" id="defaultPayment" checked=true />
                <span>{ t("account.default_payment") }</span>
                <small>{ t("account.default_payment_body") }</small>
            </label>
        </div>
    }
}
