//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::BlockHeight;
use std::sync::Arc;

/// Source of the current block height.
///
/// Every timeout in a committee is a block-height threshold; the service reads
/// the height once per operation, inside the committee lock, so the height and
/// the transition it gates are observed together.
pub trait BlockClock: Send + Sync {
    /// Height of the block currently being executed. Must never decrease.
    fn current_block_height(&self) -> BlockHeight;
}

impl<T: BlockClock + ?Sized> BlockClock for Arc<T> {
    fn current_block_height(&self) -> BlockHeight {
        (**self).current_block_height()
    }
}
