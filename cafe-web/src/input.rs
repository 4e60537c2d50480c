//! Form input helpers shared by the auth and account pages.
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// The `(id, value)` pair of the input that fired `e`.
#[must_use]
pub fn field_change(e: &InputEvent) -> Option<(String, String)> {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| (input.id(), input.value()))
}

/// Callback that hands each edited field to `apply` together with the
/// current form value, storing the result back into `state`.
pub fn bind_form<F>(
    state: &UseStateHandle<F>,
    apply: fn(&mut F, &str, String),
) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some((id, value)) = field_change(&e) {
            let mut next = (*state).clone();
            apply(&mut next, &id, value);
            state.set(next);
        }
    })
}
