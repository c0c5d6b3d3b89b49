pub mod longest_common_subsequence;

pub use longest_common_subsequence::{
    lcs_length, lcs_length_by, lcs_string, longest_common_subsequence,
    longest_common_subsequence_by,
};
