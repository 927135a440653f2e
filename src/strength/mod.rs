//! Password strength modelling: charset classification and brute-force estimation

pub mod classifier;
pub mod estimator;

pub use classifier::classify;
pub use estimator::estimate;

/// Symbol class membership: the 32 printable ASCII punctuation characters
pub const SYMBOL_SET: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Per-class alphabet contributions
pub const LOWER_SIZE: u32 = 26;
pub const UPPER_SIZE: u32 = 26;
pub const DIGIT_SIZE: u32 = 10;
pub const SYMBOL_SIZE: u32 = 32;
