//! The shared cart: lines, derived totals and best-effort persistence.
use crate::SnapshotStorage;
use crate::constants::SNAPSHOT_KEY;
use crate::line::CartLine;
use crate::notice::CartNotice;
use crate::pricing::{CartTotals, PricingPolicy, derive_totals};
use thiserror::Error;

/// Failure reading or writing the persisted cart snapshot.
///
/// Never surfaced to callers of [`CartStore`]; the store logs and recovers.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot storage failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("snapshot is not a cart line list: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("cart lines could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl SnapshotError {
    fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}

/// What [`CartStore::mark_ready`] found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A snapshot was adopted with this many lines.
    Restored { lines: usize },
    /// Nothing was stored.
    Empty,
    /// The stored value was unreadable and has been ignored.
    Discarded,
    /// The store was already ready; nothing was read.
    AlreadyReady,
}

/// Cart state shared by every view of the site.
///
/// Mutations are no-ops until [`CartStore::mark_ready`] has run, so nothing
/// touches storage before the runtime has confirmed it can.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
    lines: Vec<CartLine>,
    totals: CartTotals,
    ready: bool,
}

impl<S> PartialEq for CartStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ready == other.ready && self.lines == other.lines && self.totals == other.totals
    }
}

impl<S: SnapshotStorage> CartStore<S> {
    /// Create an empty store. Performs no I/O.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            lines: Vec::new(),
            totals: derive_totals(&[], &PricingPolicy::standard()),
            ready: false,
        }
    }

    /// Open the persistence gate and restore the last snapshot.
    ///
    /// A missing or unreadable snapshot leaves the cart empty; failures are
    /// logged, not returned.
    pub fn mark_ready(&mut self) -> RestoreOutcome {
        if self.ready {
            return RestoreOutcome::AlreadyReady;
        }
        self.ready = true;

        let outcome = match self.read_snapshot() {
            Ok(Some(lines)) => {
                self.lines = normalize_lines(lines);
                log::info!("restored {} cart line(s) from snapshot", self.lines.len());
                RestoreOutcome::Restored {
                    lines: self.lines.len(),
                }
            }
            Ok(None) => RestoreOutcome::Empty,
            Err(err) => {
                log::warn!("failed to load cart snapshot: {err}");
                self.lines.clear();
                RestoreOutcome::Discarded
            }
        };
        self.recompute();
        outcome
    }

    /// Add a line, merging into an existing line with the same id.
    ///
    /// On merge only the quantity changes; the incoming metadata is dropped.
    pub fn add(&mut self, line: CartLine) -> Option<CartNotice> {
        if !self.ready {
            log::debug!("ignoring add of {} before cart is ready", line.id);
            return None;
        }
        if line.quantity == 0 {
            log::debug!("ignoring add of {} with zero quantity", line.id);
            return None;
        }

        let notice = if let Some(existing) = self.find_line_mut(&line.id) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
            CartNotice::QuantityUpdated { name: line.name }
        } else {
            let name = line.name.clone();
            self.lines.push(line);
            CartNotice::Added { name }
        };
        self.commit();
        Some(notice)
    }

    /// Remove the line with `id`. Unknown ids are ignored silently.
    pub fn remove(&mut self, id: &str) -> Option<CartNotice> {
        if !self.ready {
            log::debug!("ignoring remove of {id} before cart is ready");
            return None;
        }
        let position = self.lines.iter().position(|line| line.id == id);
        let notice = position.map(|idx| CartNotice::Removed {
            name: self.lines.remove(idx).name,
        });
        self.commit();
        notice
    }

    /// Set a line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Option<CartNotice> {
        if !self.ready {
            log::debug!("ignoring quantity change of {id} before cart is ready");
            return None;
        }
        if quantity <= 0 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.find_line_mut(id) {
            line.quantity = quantity;
        }
        self.commit();
        None
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Option<CartNotice> {
        if !self.ready {
            log::debug!("ignoring clear before cart is ready");
            return None;
        }
        self.lines.clear();
        self.commit();
        Some(CartNotice::Cleared)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn find_line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub const fn totals(&self) -> &CartTotals {
        &self.totals
    }

    #[must_use]
    pub const fn line_count(&self) -> u64 {
        self.totals.line_count
    }

    #[must_use]
    pub const fn subtotal(&self) -> u64 {
        self.totals.subtotal
    }

    #[must_use]
    pub const fn surcharge_total(&self) -> u64 {
        self.totals.surcharge_total
    }

    #[must_use]
    pub const fn delivery_fee(&self) -> u64 {
        self.totals.delivery_fee
    }

    #[must_use]
    pub const fn grand_total(&self) -> u64 {
        self.totals.grand_total
    }

    #[must_use]
    pub const fn is_free_delivery(&self) -> bool {
        self.totals.is_free_delivery
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn find_line_mut(&mut self, id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    fn recompute(&mut self) {
        self.totals = derive_totals(&self.lines, &PricingPolicy::standard());
    }

    fn commit(&mut self) {
        self.recompute();
        if let Err(err) = self.write_snapshot() {
            log::warn!("failed to save cart snapshot: {err}");
        }
    }

    fn read_snapshot(&self) -> Result<Option<Vec<CartLine>>, SnapshotError> {
        let Some(raw) = self
            .storage
            .read_snapshot(SNAPSHOT_KEY)
            .map_err(SnapshotError::storage)?
        else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(SnapshotError::Parse)
    }

    fn write_snapshot(&self) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string(&self.lines).map_err(SnapshotError::Serialize)?;
        self.storage
            .write_snapshot(SNAPSHOT_KEY, &raw)
            .map_err(SnapshotError::storage)
    }
}

/// Drop zero-quantity lines and fold duplicate ids into their first line.
fn normalize_lines(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut normalized: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines.into_iter().filter(|line| line.quantity > 0) {
        if let Some(existing) = normalized.iter_mut().find(|l| l.id == line.id) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            normalized.push(line);
        }
    }
    normalized
}
