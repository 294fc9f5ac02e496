//! Finds the smallest non-negative integer missing from a list.
//!
//! Two passes over the input and one over a bitmap of `[0, max]`,
//! so O(n + max) time and a bit of space per possible value:
//!
//! 1. Find the min and max.
//! 2. If the min is above zero (or there's nothing at all), zero is free.
//! 3. Otherwise, set a bit for every value we have,
//! 4. and the first unset bit is our answer.
//!
//! ```text
//! [20, 10, 0, 30] => 1
//! [3, 2, 1, 0]    => 4
//! ```

use anyhow::*;
use log::*;

use crate::bitmap::MembershipBitmap;

/// The smallest and largest values in a list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    /// Walks the list once. Returns `None` if it's empty.
    pub fn scan(values: &[i64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let range = rest.iter().fold(
            Range {
                min: first,
                max: first,
            },
            |r, &v| Range {
                min: r.min.min(v),
                max: r.max.max(v),
            },
        );
        Some(range)
    }
}

/// The result of a search, along with the bitmap built to find it (if we needed one).
pub struct Search {
    answer: u64,
    bitmap: Option<MembershipBitmap>,
}

impl Search {
    pub fn answer(&self) -> u64 {
        self.answer
    }

    /// `None` if we took the short-circuit path and never built a bitmap.
    pub fn bitmap(&self) -> Option<&MembershipBitmap> {
        self.bitmap.as_ref()
    }
}

/// Fails only if the bitmap can't be allocated.
pub fn search(values: &[i64]) -> Result<Search> {
    let range = match Range::scan(values) {
        Some(r) if r.min <= 0 => r,
        other => {
            trace!("No zero possible in {:?}, short-circuiting", other);
            return Ok(Search {
                answer: 0,
                bitmap: None,
            });
        }
    };

    debug!("Building a bitmap for {} values in [0, {}]", values.len(), range.max);
    let bitmap = MembershipBitmap::from_values(values, range.max)?;
    let answer = bitmap.first_unset();

    Ok(Search {
        answer,
        bitmap: Some(bitmap),
    })
}

/// Returns the smallest non-negative integer not in `values`.
///
/// Negative values are ignored; duplicates and order don't matter.
pub fn find_smallest_missing(values: &[i64]) -> Result<u64> {
    search(values).map(|s| s.answer())
}
