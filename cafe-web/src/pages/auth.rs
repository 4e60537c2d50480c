use crate::cart::{ToastTone, use_cart};
use crate::i18n::t;
use crate::input::bind_form;
use crate::router::Route;
use cafe_cart::{LoginForm, SignupError, SignupForm};
use yew::prelude::*;
use yew_router::prelude::*;

pub const LOGIN_DELAY_MS: i32 = 1_500;
pub const SIGNUP_DELAY_MS: i32 = 1_500;
pub const SIGNUP_REDIRECT_MS: i32 = 2_000;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AuthPageProps {
    #[prop_or_default]
    pub initial_tab: AuthTab,
}

/// Mock login and signup. Nothing is sent anywhere; both forms wait a moment
/// and then land on the account page.
#[function_component(AuthPage)]
pub fn auth_page(props: &AuthPageProps) -> Html {
    let cart = use_cart();
    let navigator = use_navigator();
    let tab = use_state(|| props.initial_tab);
    let loading = use_state(|| false);
    let signup_done = use_state(|| false);
    let login = use_state(LoginForm::default);
    let signup = use_state(SignupForm::default);

    let go_account = move || {
        if let Some(nav) = &navigator {
            nav.push(&Route::Account);
        }
    };

    let on_login = {
        let cart = cart.clone();
        let loading = loading.clone();
        let login = login.clone();
        let go_account = go_account.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = login.validate() {
                reject(&cart, &err);
                return;
            }
            loading.set(true);
            let cart = cart.clone();
            let loading = loading.clone();
            let go_account = go_account.clone();
            crate::dom::run_after(LOGIN_DELAY_MS, move || {
                loading.set(false);
                cart.notify(
                    t("auth.login_success"),
                    t("auth.login_success_body"),
                    ToastTone::Success,
                );
                go_account();
            });
        })
    };

    let on_signup = {
        let cart = cart.clone();
        let loading = loading.clone();
        let signup = signup.clone();
        let signup_done = signup_done.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = signup.validate() {
                reject(&cart, &err);
                return;
            }
            loading.set(true);
            let cart = cart.clone();
            let loading = loading.clone();
            let signup_done = signup_done.clone();
            let go_account = go_account.clone();
            crate::dom::run_after(SIGNUP_DELAY_MS, move || {
                loading.set(false);
                signup_done.set(true);
                cart.notify(t("auth.created"), t("auth.created_body"), ToastTone::Success);
                crate::dom::run_after(SIGNUP_REDIRECT_MS, go_account);
            });
        })
    };

    if *signup_done {
        return html! { <SignupSuccess /> };
    }

    let pick = |target: AuthTab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(target))
    };
    let tab_class = |target: AuthTab| classes!("tab", (*tab == target).then_some("tab-active"));

    html! {
        <section class="auth-page">
            <h1 class="page-title">{ t("auth.title") }</h1>
            <div class="tabs" role="tablist">
                <button type="button" role="tab" class={tab_class(AuthTab::Login)} onclick={pick(AuthTab::Login)}>
                    { t("auth.login_tab") }
                </button>
                <button type="button" role="tab" class={tab_class(AuthTab::Signup)} onclick={pick(AuthTab::Signup)}>
                    { t("auth.signup_tab") }
                </button>
            </div>
            {
                match *tab {
                    AuthTab::Login => html! {
                        <div class="card auth-card">
                            <h2>{ t("auth.welcome") }</h2>
                            <p class="card-description">{ t("auth.welcome_body") }</p>
                            <form class="auth-form" onsubmit={on_login}>
                                <label for="email">{ t("auth.email") }</label>
                                <input id="email" type="email" placeholder="your.email@example.com" required=true
                                    value={login.email.clone()} oninput={bind_form(&login, set_login_field)} />
                                <div class="label-row">
                                    <label for="password">{ t("auth.password") }</label>
                                    <a href="#" class="forgot-link">{ t("auth.forgot") }</a>
                                </div>
                                <input id="password" type="password" placeholder="••••••••" required=true
                                    value={login.password.clone()} oninput={bind_form(&login, set_login_field)} />
                                <button type="submit" class="btn btn-primary" disabled={*loading}>
                                    { if *loading { t("auth.logging_in") } else { t("auth.login") } }
                                </button>
                            </form>
                        </div>
                    },
                    AuthTab::Signup => html! {
                        <div class="card auth-card">
                            <h2>{ t("auth.create_title") }</h2>
                            <p class="card-description">{ t("auth.create_body") }</p>
                            <form class="auth-form" onsubmit={on_signup}>
                                <div class="form-grid">
                                    { signup_input("firstName", "auth.first_name", "text", "John", &signup.first_name, &signup) }
                                    { signup_input("lastName", "auth.last_name", "text", "Doe", &signup.last_name, &signup) }
                                </div>
                                { signup_input("email", "auth.email", "email", "your.email@example.com", &signup.email, &signup) }
                                { signup_input("phone", "auth.phone", "tel", "+91 98765 43210", &signup.phone, &signup) }
                                { signup_input("password", "auth.password", "password", "••••••••", &signup.password, &signup) }
                                { signup_input("confirmPassword", "auth.confirm_password", "password", "••••••••", &signup.confirm_password, &signup) }
                                <button type="submit" class="btn btn-primary" disabled={*loading}>
                                    { if *loading { t("auth.creating") } else { t("auth.create") } }
                                </button>
                            </form>
                        </div>
                    },
                }
            }
            <div class="back-link">
                <Link<Route> to={Route::Home}>{ t("ui.back_home") }</Link<Route>>
            </div>
        </section>
    }
}

fn set_login_field(form: &mut LoginForm, id: &str, value: String) {
    match id {
        "email" => form.email = value,
        "password" => form.password = value,
        _ => {}
    }
}

fn set_signup_field(form: &mut SignupForm, id: &str, value: String) {
    form.set_field(id, value);
}

fn signup_input(
    id: &'static str,
    label_key: &str,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    state: &UseStateHandle<SignupForm>,
) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{ t(label_key) }</label>
            <input
                id={id}
                type={kind}
                placeholder={placeholder}
                required=true
                value={value.to_string()}
                oninput={bind_form(state, set_signup_field)}
            />
        </div>
    }
}

fn reject(cart: &crate::cart::CartHandle, err: &SignupError) {
    let (title, description) = match err {
        SignupError::PasswordMismatch => (t("auth.mismatch"), t("auth.mismatch_body")),
        other => (t("auth.invalid"), other.to_string()),
    };
    cart.notify(title, description, ToastTone::Destructive);
}

#[function_component(SignupSuccess)]
fn signup_success() -> Html {
    html! {
        <section class="auth-page">
            <div class="card auth-card success">
                <h2>{ "✔ " }{ t("auth.success_title") }</h2>
                <p class="card-description">{ t("auth.success_body") }</p>
                <p class="redirecting">{ t("auth.redirecting") }</p>
            </div>
        </section>
    }
}
