pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{build_router, cors_layer, AppState};
pub use adapters::storage::JsonFileStore;
pub use config::{AppConfig, CliConfig};
pub use core::search::{SearchPage, SearchService};
pub use utils::error::{ApiError, Result};
