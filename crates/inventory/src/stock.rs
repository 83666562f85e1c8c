use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, Entity, LocationId, ProductId, ValueObject};

/// Identity of a stock record: one product at one location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockKey {
    pub product_id: ProductId,
    pub location: LocationId,
}

impl StockKey {
    pub fn new(product_id: ProductId, location: LocationId) -> Self {
        Self {
            product_id,
            location,
        }
    }
}

impl ValueObject for StockKey {}

impl core::fmt::Display for StockKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.product_id, self.location)
    }
}

/// Stock level of one product at one location.
///
/// Quantities are only changed through the guarded operations below. Every
/// operation validates its argument first (`InvalidArgument`), then the
/// current state (`InvalidState`), and mutates only when both pass.
///
/// `reserved` is not kept below `on_hand` at all times: `remove_damaged`
/// leaves reservations alone, so a record can hold more reservations than
/// physical units until they are released. `ship_reserved` re-checks
/// `on_hand` for that reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductStock {
    key: StockKey,
    on_hand: i64,
    reserved: i64,
    reorder_threshold: i64,
    max_capacity: i64,
}

impl ProductStock {
    /// Create a record with `initial_on_hand` units and nothing reserved.
    ///
    /// A `reorder_threshold` above `max_capacity` is accepted here; the next
    /// `update_max_capacity` clamps it.
    pub fn new(
        product_id: &str,
        location: &str,
        initial_on_hand: i64,
        reorder_threshold: i64,
        max_capacity: i64,
    ) -> DomainResult<Self> {
        let key = StockKey::new(ProductId::parse(product_id)?, LocationId::parse(location)?);
        Self::with_key(key, initial_on_hand, reorder_threshold, max_capacity)
    }

    /// Same as [`ProductStock::new`] for callers that already hold typed ids.
    pub fn with_key(
        key: StockKey,
        initial_on_hand: i64,
        reorder_threshold: i64,
        max_capacity: i64,
    ) -> DomainResult<Self> {
        if initial_on_hand < 0 {
            return Err(DomainError::invalid_argument("initial_on_hand must be >= 0"));
        }
        ensure_threshold_non_negative(reorder_threshold)?;
        ensure_capacity_positive(max_capacity)?;
        if initial_on_hand > max_capacity {
            return Err(DomainError::invalid_argument(
                "initial_on_hand exceeds max_capacity",
            ));
        }

        Ok(Self {
            key,
            on_hand: initial_on_hand,
            reserved: 0,
            reorder_threshold,
            max_capacity,
        })
    }

    pub fn key(&self) -> &StockKey {
        &self.key
    }

    pub fn product_id(&self) -> &ProductId {
        &self.key.product_id
    }

    pub fn location(&self) -> &LocationId {
        &self.key.location
    }

    pub fn on_hand(&self) -> i64 {
        self.on_hand
    }

    pub fn reserved(&self) -> i64 {
        self.reserved
    }

    /// Units not committed to any order. Negative if reservations outgrew
    /// the physical stock.
    pub fn available(&self) -> i64 {
        self.on_hand - self.reserved
    }

    pub fn reorder_threshold(&self) -> i64 {
        self.reorder_threshold
    }

    pub fn max_capacity(&self) -> i64 {
        self.max_capacity
    }

    /// Largest amount `add_stock` currently accepts.
    pub fn remaining_capacity(&self) -> i64 {
        self.max_capacity - self.on_hand
    }

    pub fn is_reorder_needed(&self) -> bool {
        self.available() <= self.reorder_threshold
    }

    pub fn add_stock(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount, "amount to add must be positive")?;
        if amount > self.remaining_capacity() {
            return Err(DomainError::invalid_state(
                "cannot add stock beyond max_capacity",
            ));
        }

        self.mutate("add_stock", amount, |s| s.on_hand += amount);
        Ok(())
    }

    pub fn reserve(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount, "amount to reserve must be positive")?;
        if amount > self.available() {
            return Err(DomainError::invalid_state(
                "insufficient available stock to reserve",
            ));
        }

        self.mutate("reserve", amount, |s| s.reserved += amount);
        Ok(())
    }

    pub fn release_reservation(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount, "amount to release must be positive")?;
        if amount > self.reserved {
            return Err(DomainError::invalid_state(
                "cannot release more than reserved",
            ));
        }

        self.mutate("release_reservation", amount, |s| s.reserved -= amount);
        Ok(())
    }

    /// Ship previously reserved units: both `on_hand` and `reserved` drop.
    pub fn ship_reserved(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount, "amount to ship must be positive")?;
        if amount > self.reserved {
            return Err(DomainError::invalid_state("cannot ship more than reserved"));
        }
        // Separate from the reservation check: reservations may exceed
        // on-hand units after damaged stock was written off.
        if amount > self.on_hand {
            return Err(DomainError::invalid_state(
                "on-hand quantity is not enough to ship",
            ));
        }

        self.mutate("ship_reserved", amount, |s| {
            s.on_hand -= amount;
            s.reserved -= amount;
        });
        Ok(())
    }

    /// Write off damaged units. Reservations are left untouched, even when
    /// that leaves `reserved > on_hand`.
    pub fn remove_damaged(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount, "amount to remove must be positive")?;
        if amount > self.on_hand {
            return Err(DomainError::invalid_state(
                "cannot remove more than on-hand quantity",
            ));
        }

        self.mutate("remove_damaged", amount, |s| s.on_hand -= amount);
        Ok(())
    }

    pub fn update_reorder_threshold(&mut self, new_threshold: i64) -> DomainResult<()> {
        ensure_threshold_non_negative(new_threshold)?;
        if new_threshold > self.max_capacity {
            return Err(DomainError::invalid_argument(
                "reorder_threshold cannot exceed max_capacity",
            ));
        }

        self.mutate("update_reorder_threshold", new_threshold, |s| {
            s.reorder_threshold = new_threshold
        });
        Ok(())
    }

    /// Change the capacity; a threshold above the new capacity is clamped to it.
    pub fn update_max_capacity(&mut self, new_capacity: i64) -> DomainResult<()> {
        ensure_capacity_positive(new_capacity)?;
        if new_capacity < self.on_hand {
            return Err(DomainError::invalid_state(
                "new max_capacity is less than current on_hand",
            ));
        }

        self.mutate("update_max_capacity", new_capacity, |s| {
            s.max_capacity = new_capacity;
            if s.reorder_threshold > s.max_capacity {
                s.reorder_threshold = s.max_capacity;
            }
        });
        Ok(())
    }

    /// Apply an already-validated change and log the outcome.
    fn mutate(&mut self, op: &'static str, amount: i64, change: impl FnOnce(&mut Self)) {
        let reorder_before = self.is_reorder_needed();
        change(self);

        tracing::debug!(
            stock = %self.key,
            op,
            amount,
            on_hand = self.on_hand,
            reserved = self.reserved,
            reorder_threshold = self.reorder_threshold,
            max_capacity = self.max_capacity,
            "stock updated"
        );

        if !reorder_before && self.is_reorder_needed() {
            tracing::info!(
                stock = %self.key,
                available = self.available(),
                reorder_threshold = self.reorder_threshold,
                "reorder threshold reached"
            );
        }
    }

    pub(crate) fn from_parts(
        key: StockKey,
        on_hand: i64,
        reserved: i64,
        reorder_threshold: i64,
        max_capacity: i64,
    ) -> Self {
        Self {
            key,
            on_hand,
            reserved,
            reorder_threshold,
            max_capacity,
        }
    }

    /// Overwrite `reserved` without any check, to reproduce records whose
    /// reservations drifted from the physical stock.
    #[cfg(test)]
    pub(crate) fn force_reserved(&mut self, reserved: i64) {
        self.reserved = reserved;
    }
}

impl Entity for ProductStock {
    type Id = StockKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

fn ensure_positive(amount: i64, msg: &'static str) -> DomainResult<()> {
    if amount <= 0 {
        return Err(DomainError::invalid_argument(msg));
    }
    Ok(())
}

pub(crate) fn ensure_threshold_non_negative(threshold: i64) -> DomainResult<()> {
    if threshold < 0 {
        return Err(DomainError::invalid_argument("reorder_threshold must be >= 0"));
    }
    Ok(())
}

pub(crate) fn ensure_capacity_positive(capacity: i64) -> DomainResult<()> {
    if capacity <= 0 {
        return Err(DomainError::invalid_argument("max_capacity must be > 0"));
    }
    Ok(())
}
