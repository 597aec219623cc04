pub use self::{core::*, universe::*};

pub mod core;
pub mod universe;

/// Invalid universe parameters, rejected before any combination is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum UniverseError {
    #[display("pool size must be at least 1")]
    EmptyPool,
    #[display("pick count must be at least 1")]
    EmptyPick,
    #[display("pick count {pick_count} exceeds pool size {pool_size}")]
    PickExceedsPool { pick_count: usize, pool_size: u8 },
    #[display("pool size {pool_size} exceeds the supported maximum of {MAX_POOL_SIZE}")]
    PoolTooLarge { pool_size: u8 },
    #[display("pick count {pick_count} exceeds the supported maximum of {MAX_PICK_COUNT}")]
    PickTooLarge { pick_count: usize },
}
