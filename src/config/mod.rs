//! Client configuration: network selection, poll budgets, file loading.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ClientConfig, Network};
pub use validation::{validate_config, ValidationError};
