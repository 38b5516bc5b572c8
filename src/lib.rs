pub mod cs;
pub mod error;

pub use cs::{randomized, sort};
pub use error::{Result, SelectError};
