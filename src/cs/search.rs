pub mod binary_search;

pub use binary_search::{
    binary_search_first, binary_search_first_in, binary_search_last, binary_search_last_in,
    decode,
};
