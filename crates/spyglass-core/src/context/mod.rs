mod errors;
mod handler;
mod recovery;
mod types;

pub use errors::ContextError;
pub use handler::ContextSwitcher;
pub use recovery::{ContextRecovery, NoRecovery, RelaunchRecovery, recovery_for};
pub use types::{DriverContext, NATIVE_CONTEXT};
