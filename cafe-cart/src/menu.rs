//! Menu catalog and conversion of menu entries into cart lines.
use crate::constants::{
    PLACEHOLDER_IMAGE_HEIGHT, PLACEHOLDER_IMAGE_PATH, PLACEHOLDER_IMAGE_WIDTH,
};
use crate::line::{CartLine, Size};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu has no categories")]
    NoCategories,
}

/// Prices for the three sizes of a sized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizedPrice {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl SizedPrice {
    #[must_use]
    pub const fn get(&self, size: Size) -> u32 {
        match size {
            Size::Small => self.small,
            Size::Medium => self.medium,
            Size::Large => self.large,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuPrice {
    Single(u32),
    Sized(SizedPrice),
}

impl MenuPrice {
    #[must_use]
    pub const fn is_sized(&self) -> bool {
        matches!(self, Self::Sized(_))
    }

    /// Price for `size`; single-price items ignore the size.
    #[must_use]
    pub const fn for_size(&self, size: Size) -> u32 {
        match self {
            Self::Single(price) => *price,
            Self::Sized(prices) => prices.get(size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: MenuPrice,
    #[serde(rename = "isVeg")]
    pub is_veg: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isSpicy", default)]
    pub is_spicy: bool,
}

impl MenuItem {
    /// Cart line id for this item in `size`.
    #[must_use]
    pub fn line_id(&self, size: Size) -> String {
        if self.price.is_sized() {
            CartLine::variant_id(&self.name, size)
        } else {
            self.name.clone()
        }
    }

    #[must_use]
    pub fn image_ref(&self) -> String {
        placeholder_image(&self.name)
    }

    /// Build the cart line a customer adds from this menu card.
    ///
    /// Returns `None` for a zero quantity, which the card never submits.
    #[must_use]
    pub fn cart_line(&self, category: &str, size: Size, quantity: u32) -> Option<CartLine> {
        if quantity == 0 {
            return None;
        }
        let line = CartLine::new(self.name.clone(), self.price.for_size(size), quantity)
            .with_category(category)
            .vegetarian(self.is_veg)
            .with_image(self.image_ref());
        Some(if self.price.is_sized() {
            line.with_size(size)
        } else {
            line
        })
    }
}

/// Named sub-group within a category (the pizza menu is split this way).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub groups: Vec<MenuGroup>,
}

impl MenuCategory {
    /// Every item in the category, grouped or not.
    pub fn all_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .chain(self.groups.iter().flat_map(|group| group.items.iter()))
    }

    #[must_use]
    pub fn is_grouped(&self) -> bool {
        !self.groups.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub categories: Vec<MenuCategory>,
}

impl MenuCatalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or lists no categories.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.categories.is_empty() {
            return Err(MenuError::NoCategories);
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn find_category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Look up an item by display name, returning it with its category name.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<(&MenuCategory, &MenuItem)> {
        self.categories.iter().find_map(|category| {
            category
                .all_items()
                .find(|item| item.name == name)
                .map(|item| (category, item))
        })
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.all_items().count())
            .sum()
    }
}

/// Placeholder image URL used for every menu item.
#[must_use]
pub fn placeholder_image(name: &str) -> String {
    format!(
        "{PLACEHOLDER_IMAGE_PATH}?height={PLACEHOLDER_IMAGE_HEIGHT}&width={PLACEHOLDER_IMAGE_WIDTH}&text={}",
        utf8_percent_encode(name, URI_COMPONENT)
    )
}
