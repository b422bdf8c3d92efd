//! Command implementations.

mod analyze;
mod config;
mod export;
mod history;
mod serve;

pub use analyze::run_analyze;
pub use config::run_config;
pub use export::run_export;
pub use history::run_history;
pub use serve::run_serve;
