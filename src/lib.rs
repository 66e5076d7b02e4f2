pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::{ConcatConfig, ServerConfig};
pub use utils::error::{AppError, Result};
