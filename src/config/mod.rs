#[cfg(feature = "cli")]
pub mod cli;
pub mod split_plan;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use split_plan::SplitPlan;
