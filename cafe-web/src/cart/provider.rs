use super::model::{CartAction, CartModel, ToastMessage, ToastTone};
use cafe_cart::{CartLine, CartTotals};
use yew::prelude::*;

/// What components get from [`use_cart`]: read access to the shared cart and
/// the mutations, each dispatched through the reducer.
#[derive(Clone, PartialEq)]
pub struct CartHandle {
    inner: UseReducerHandle<CartModel>,
}

impl CartHandle {
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.inner.store().lines()
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        *self.inner.store().totals()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.store().is_ready()
    }

    #[must_use]
    pub fn toasts(&self) -> &[ToastMessage] {
        self.inner.toasts()
    }

    pub fn add(&self, line: CartLine) {
        self.inner.dispatch(CartAction::Add(line));
    }

    pub fn remove(&self, id: impl Into<String>) {
        self.inner.dispatch(CartAction::Remove(id.into()));
    }

    pub fn set_quantity(&self, id: impl Into<String>, quantity: i64) {
        self.inner.dispatch(CartAction::SetQuantity {
            id: id.into(),
            quantity,
        });
    }

    pub fn clear(&self) {
        self.inner.dispatch(CartAction::Clear);
    }

    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>, tone: ToastTone) {
        self.inner.dispatch(CartAction::Notify {
            title: title.into(),
            description: description.into(),
            tone,
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.inner.dispatch(CartAction::Dismiss(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct CartProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the single cart for the app and hydrates it once mounted.
///
/// Hydration runs in an effect, so server-side renders and the first client
/// render see an empty, not-ready cart and never touch storage.
#[function_component(CartProvider)]
pub fn cart_provider(props: &CartProviderProps) -> Html {
    let model = use_reducer(CartModel::default);
    {
        let model = model.clone();
        use_effect_with((), move |()| {
            model.dispatch(CartAction::Hydrate);
            || ()
        });
    }

    let handle = CartHandle { inner: model };
    html! {
        <ContextProvider<CartHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<CartHandle>>
    }
}

/// The shared cart.
///
/// # Panics
/// Panics when called outside a [`CartProvider`].
#[hook]
pub fn use_cart() -> CartHandle {
    use_context::<CartHandle>().expect("CartHandle should be provided by CartProvider")
}
