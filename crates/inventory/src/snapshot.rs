//! Plain, serializable view of a stock record.

use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult};

use crate::stock::{
    ProductStock, StockKey, ensure_capacity_positive, ensure_threshold_non_negative,
};

/// Every field of a [`ProductStock`], for callers that persist or transmit
/// records. Turning a snapshot back into a record goes through
/// [`ProductStock::restore`], which re-validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    #[serde(flatten)]
    pub key: StockKey,
    pub on_hand: i64,
    pub reserved: i64,
    pub reorder_threshold: i64,
    pub max_capacity: i64,
}

impl ProductStock {
    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            key: self.key().clone(),
            on_hand: self.on_hand(),
            reserved: self.reserved(),
            reorder_threshold: self.reorder_threshold(),
            max_capacity: self.max_capacity(),
        }
    }

    /// Rebuild a record from a snapshot.
    ///
    /// Applies the construction checks plus `reserved >= 0`. Anything the
    /// record's own operations can produce restores unchanged, including
    /// reservations above `on_hand` and a threshold above capacity.
    pub fn restore(snapshot: StockSnapshot) -> DomainResult<Self> {
        let StockSnapshot {
            key,
            on_hand,
            reserved,
            reorder_threshold,
            max_capacity,
        } = snapshot;

        if on_hand < 0 {
            return Err(DomainError::invalid_argument("on_hand must be >= 0"));
        }
        if reserved < 0 {
            return Err(DomainError::invalid_argument("reserved must be >= 0"));
        }
        ensure_threshold_non_negative(reorder_threshold)?;
        ensure_capacity_positive(max_capacity)?;
        if on_hand > max_capacity {
            return Err(DomainError::invalid_argument("on_hand exceeds max_capacity"));
        }

        tracing::debug!(stock = %key, on_hand, reserved, "stock restored from snapshot");

        Ok(Self::from_parts(
            key,
            on_hand,
            reserved,
            reorder_threshold,
            max_capacity,
        ))
    }
}
