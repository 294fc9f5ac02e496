//! Utility for printing long lists of values in a readable block

use std::fmt::Display;
use std::io::{Result, Write};

pub const VALUES_PER_ROW: usize = 16;

/// Writes the items comma-separated, `VALUES_PER_ROW` to a line.
///
/// Every line but the last ends in a trailing comma,
/// so the output is itself valid input for the number parser.
pub fn write_rows<W, I>(items: I, w: &mut W) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            if i % VALUES_PER_ROW == 0 {
                w.write_all(b",\n")?;
            } else {
                w.write_all(b", ")?;
            }
        }
        write!(w, "{}", item)?;
    }
    w.write_all(b"\n")
}
