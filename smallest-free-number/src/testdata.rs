//! Generates test inputs: a run of sequential integers with (optionally) one left out.

use std::io::{Result, Write};

use crate::rows::write_rows;

/// Writes `0..=max`, minus `empty_slot`, in rows the number parser can read back.
pub fn generate<W: Write>(max: u64, empty_slot: Option<u64>, w: &mut W) -> Result<()> {
    write_rows((0..=max).filter(|&i| Some(i) != empty_slot), w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(max: u64, empty_slot: Option<u64>) -> String {
        let mut out = Vec::new();
        generate(max, empty_slot, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn skips_the_empty_slot() {
        assert_eq!(generated(5, Some(3)), "0, 1, 2, 4, 5\n");
    }

    #[test]
    fn no_empty_slot() {
        assert_eq!(generated(3, None), "0, 1, 2, 3\n");
    }

    #[test]
    fn empty_slot_at_either_end() {
        assert_eq!(generated(3, Some(0)), "1, 2, 3\n");
        assert_eq!(generated(3, Some(3)), "0, 1, 2\n");
        assert_eq!(generated(0, Some(0)), "\n");
    }

    #[test]
    fn empty_slot_past_max_is_ignored() {
        assert_eq!(generated(2, Some(10)), "0, 1, 2\n");
    }

    #[test]
    fn wraps_long_runs() {
        let out = generated(40, Some(7));
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| l.split(", ").count() <= 16));
    }
}
