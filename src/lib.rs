pub mod cs;
pub mod error;

pub use cs::{dynamic, search, sequence, sort};
pub use error::{Error, Result};
