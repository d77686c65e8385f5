mod handler;
mod types;

pub use handler::{until_clickable, until_gone, until_present, wait_for, wait_for_absence};
pub use types::PollSpec;
