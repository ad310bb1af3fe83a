//! Analysis module - the three read-only flows over the sample table

pub mod correlation;
pub mod pairwise;
pub mod summary;

pub use correlation::*;
pub use pairwise::*;
pub use summary::*;
