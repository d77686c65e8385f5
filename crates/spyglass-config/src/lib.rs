//! Configuration for spyglass.
//!
//! Configuration is loaded in the following order (later sources
//! override earlier ones):
//! 1. **Hardcoded defaults** - built-in fallback values
//! 2. **User config** - `~/.spyglass/config.toml` (global preferences)
//! 3. **Project config** - `./.spyglass/config.toml` (per-suite
//!    overrides)
//!
//! Every optional field has an accessor that applies the built-in
//! default, so consumers never see a half-configured value.

mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{load_hierarchy, merge_configs};
pub use types::{AppConfig, DiffConfig, SpyglassConfig, WaitConfig};
pub use validation::validate_config;
