//! Error types for allocation.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    #[error("bump region exhausted: requested {requested} bytes, {remaining} remaining")]
    RegionExhausted { requested: usize, remaining: usize },
}
