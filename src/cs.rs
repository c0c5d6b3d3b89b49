pub mod dynamic;
pub mod search;
pub mod sequence;
pub mod sort;

// Re-export all modules
pub use dynamic::*;
pub use search::*;
pub use sequence::Sequence;
pub use sort::*;
