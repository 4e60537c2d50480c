//! Pricing policy and persistence constants for the cafe cart.
//!
//! These values are fixed in code; changing the delivery or box fee policy is
//! a reviewed code change, not a runtime setting.

// Pricing -------------------------------------------------------------------
/// Subtotal (in rupees) at which delivery becomes free. Inclusive.
pub const FREE_DELIVERY_THRESHOLD: u64 = 300;
/// Flat delivery fee charged below the free-delivery threshold.
pub const DELIVERY_FEE: u64 = 30;
/// Box fee charged per pizza unit.
pub const BOX_FEE_PER_UNIT: u64 = 10;
/// Category marker that triggers the box fee.
pub const SURCHARGE_CATEGORY: &str = "pizza";

// Persistence ---------------------------------------------------------------
/// Client-local storage key holding the serialized cart lines.
pub const SNAPSHOT_KEY: &str = "friendsCafeCart";

// Presentation --------------------------------------------------------------
pub const CURRENCY_SYMBOL: &str = "₹";
pub const PLACEHOLDER_IMAGE_PATH: &str = "/placeholder.svg";
pub const PLACEHOLDER_IMAGE_HEIGHT: u32 = 300;
pub const PLACEHOLDER_IMAGE_WIDTH: u32 = 400;
