//! Finds the smallest non-negative integer missing from a file full of them.

pub mod bitmap;
pub mod cli;
pub mod finder;
pub mod parse;
pub mod rows;
pub mod testdata;

pub use finder::find_smallest_missing;
pub use parse::{read_numbers, read_numbers_file, ParseMode};
