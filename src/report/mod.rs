//! Report module - terminal rendering and JSON export of flow results

pub mod classify;
pub mod explore;
pub mod export;
pub mod heatmap;
pub mod pairs;

pub use classify::*;
pub use explore::*;
pub use export::*;
pub use heatmap::*;
pub use pairs::*;
