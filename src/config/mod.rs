//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated)
//!     → held by the service in an ArcSwap
//!
//! At runtime:
//!     configure()/set_* swap the Arc; readers load lock-free,
//!     last writer wins
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every problem, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggerConfig, VerbosityMode};
pub use validation::{validate_config, ValidationError};
