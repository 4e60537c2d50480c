//! Friends' Cafe cart core
//!
//! Platform-agnostic cart, pricing and menu logic for the cafe ordering site.
//! This crate has no UI or browser dependencies; the web front end supplies a
//! [`SnapshotStorage`] backed by `localStorage`.

pub mod account;
pub mod constants;
pub mod line;
pub mod menu;
pub mod notice;
pub mod pricing;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use account::{LoginForm, OrderStatus, OrderSummary, Profile, SignupError, SignupForm};
pub use line::{CartLine, Size};
pub use menu::{MenuCatalog, MenuCategory, MenuError, MenuGroup, MenuItem, MenuPrice, SizedPrice};
pub use notice::CartNotice;
pub use pricing::{CartTotals, PricingPolicy, derive_totals, is_pizza_line};
pub use storage::MemorySnapshots;
pub use store::{CartStore, RestoreOutcome, SnapshotError};

/// Client-local key-value cache the cart snapshot is persisted to.
/// Platform-specific implementations should provide this
pub trait SnapshotStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be read.
    fn read_snapshot(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium rejects the write.
    fn write_snapshot(&self, key: &str, snapshot: &str) -> Result<(), Self::Error>;
}
