pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SplitPlan;

pub use adapters::{GeminiConfig, GeminiVision, LocalImage};
pub use core::allocator::compute_breakdown;
pub use core::extractor::Extractor;
pub use core::session::BillSession;
pub use utils::error::{Result, SplitError};
