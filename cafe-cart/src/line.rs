//! Cart line items.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size option for menu goods sold in several sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Single-letter label shown next to size prices.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.key() == key)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One purchasable entry in the cart.
///
/// Serialized field names match the snapshot format stored in the browser
/// (`price`, `image`, `size`, `isVeg`, `category`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    /// Price per unit in rupees.
    #[serde(rename = "price")]
    pub unit_price: u32,
    pub quantity: u32,
    #[serde(rename = "image", default)]
    pub image_ref: String,
    #[serde(rename = "size", default, skip_serializing_if = "Option::is_none")]
    pub size_variant: Option<Size>,
    #[serde(rename = "isVeg", default)]
    pub is_vegetarian: bool,
    #[serde(rename = "category", default, skip_serializing_if = "Option::is_none")]
    pub category_tag: Option<String>,
}

impl CartLine {
    /// Build a line for an item sold at a single price.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price: u32, quantity: u32) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            unit_price,
            quantity,
            image_ref: String::new(),
            size_variant: None,
            is_vegetarian: false,
            category_tag: None,
        }
    }

    /// Line id for a size variant. Distinct sizes never share a line.
    #[must_use]
    pub fn variant_id(name: &str, size: Size) -> String {
        format!("{name}-{size}")
    }

    /// Attach a size variant and re-key the line to `"{name}-{size}"`.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.id = Self::variant_id(&self.name, size);
        self.size_variant = Some(size);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_tag = Some(category.into());
        self
    }

    #[must_use]
    pub const fn vegetarian(mut self, is_vegetarian: bool) -> Self {
        self.is_vegetarian = is_vegetarian;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Price of this line before fees.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}
