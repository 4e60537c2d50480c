use crate::storage::BrowserStorage;
use cafe_cart::{CartLine, CartNotice, CartStore, RestoreOutcome};
use std::rc::Rc;
use yew::Reducible;

/// Toasts kept on screen at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Info,
    Success,
    Destructive,
}

impl ToastTone {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Destructive => "alert alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tone: ToastTone,
}

pub enum CartAction {
    /// Open the persistence gate and restore the saved cart.
    Hydrate,
    Add(CartLine),
    Remove(String),
    SetQuantity { id: String, quantity: i64 },
    Clear,
    Notify {
        title: String,
        description: String,
        tone: ToastTone,
    },
    Dismiss(u32),
}

/// Reducer state: the cart store plus the toast queue its notices feed.
#[derive(Debug, Clone, PartialEq)]
pub struct CartModel {
    store: CartStore<BrowserStorage>,
    toasts: Vec<ToastMessage>,
    next_toast_id: u32,
}

impl Default for CartModel {
    fn default() -> Self {
        Self {
            store: CartStore::new(BrowserStorage),
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }
}

impl CartModel {
    #[must_use]
    pub const fn store(&self) -> &CartStore<BrowserStorage> {
        &self.store
    }

    #[must_use]
    pub fn toasts(&self) -> &[ToastMessage] {
        &self.toasts
    }

    fn push_toast(&mut self, title: String, description: String, tone: ToastTone) {
        let id = self.next_toast_id;
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
        self.toasts.push(ToastMessage {
            id,
            title,
            description,
            tone,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    fn announce(&mut self, notice: &CartNotice) {
        self.push_toast(
            notice.title().to_string(),
            notice.description(),
            ToastTone::Info,
        );
    }

    /// Apply `action` in place, returning the notice it produced, if any.
    fn apply(&mut self, action: CartAction) -> Option<CartNotice> {
        match action {
            CartAction::Hydrate => {
                match self.store.mark_ready() {
                    RestoreOutcome::Discarded => {
                        log::warn!("saved cart was unreadable; starting empty");
                    }
                    outcome => log::debug!("cart hydrated: {outcome:?}"),
                }
                None
            }
            CartAction::Add(line) => self.store.add(line),
            CartAction::Remove(id) => self.store.remove(&id),
            CartAction::SetQuantity { id, quantity } => self.store.set_quantity(&id, quantity),
            CartAction::Clear => self.store.clear(),
            CartAction::Notify {
                title,
                description,
                tone,
            } => {
                self.push_toast(title, description, tone);
                None
            }
            CartAction::Dismiss(id) => {
                self.toasts.retain(|toast| toast.id != id);
                None
            }
        }
    }
}

impl Reducible for CartModel {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        if let Some(notice) = next.apply(action) {
            next.announce(&notice);
        }
        Rc::new(next)
    }
}
