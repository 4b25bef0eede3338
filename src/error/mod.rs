mod types;

pub use types::{Result, StashError};
