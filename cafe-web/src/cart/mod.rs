//! The site-wide cart: a Yew reducer around [`cafe_cart::CartStore`] shared
//! through context.
mod model;
mod provider;

pub use model::{CartAction, CartModel, MAX_TOASTS, ToastMessage, ToastTone};
pub use provider::{CartHandle, CartProvider, CartProviderProps, use_cart};
