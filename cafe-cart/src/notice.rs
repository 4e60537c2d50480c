use serde::{Deserialize, Serialize};

/// Announcement produced by a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartNotice {
    Added { name: String },
    QuantityUpdated { name: String },
    Removed { name: String },
    Cleared,
}

impl CartNotice {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Added { .. } => "Added to cart",
            Self::QuantityUpdated { .. } => "Cart updated",
            Self::Removed { .. } => "Removed from cart",
            Self::Cleared => "Cart cleared",
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Added { name } => format!("{name} added to your cart"),
            Self::QuantityUpdated { name } => format!("{name} quantity updated in your cart"),
            Self::Removed { name } => format!("{name} removed from your cart"),
            Self::Cleared => "All items have been removed from your cart".to_string(),
        }
    }

    /// Display name of the item concerned, if any.
    #[must_use]
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::Added { name } | Self::QuantityUpdated { name } | Self::Removed { name } => {
                Some(name)
            }
            Self::Cleared => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_name_the_item() {
        let notice = CartNotice::QuantityUpdated {
            name: "Veg Momos".into(),
        };
        assert_eq!(notice.title(), "Cart updated");
        assert_eq!(
            notice.description(),
            "Veg Momos quantity updated in your cart"
        );
        assert_eq!(notice.item_name(), Some("Veg Momos"));
        assert_eq!(CartNotice::Cleared.item_name(), None);
    }
}
