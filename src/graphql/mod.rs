pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, SpaceXClient};
pub use source::{FetchError, LaunchSource};
pub use types::LaunchRecord;
