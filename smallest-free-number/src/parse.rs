//! Reads whitespace/comma/semicolon/pipe-delimited integers from text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::*;
use log::*;

/// Bytes that separate numbers in an input file.
pub const DELIMITERS: &[u8] = b" ,;|\t\n";

/// How to treat tokens that aren't cleanly integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseMode {
    /// Take the leading `[+-]digits` of each token, like C's `atoi()`.
    /// Tokens with no leading digits become 0, and out-of-range values saturate.
    Lenient,
    /// Every token must be an integer, or reading fails.
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::Lenient
    }
}

/// Opens `path` and reads every integer in it.
pub fn read_numbers_file(path: &Path, mode: ParseMode) -> Result<Vec<i64>> {
    let fh = File::open(path).with_context(|| format!("Couldn't open {}", path.display()))?;
    let numbers = read_numbers(BufReader::new(fh), mode)
        .with_context(|| format!("Couldn't read numbers from {}", path.display()))?;
    debug!("Read {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Reads every integer from the given reader, line by line.
///
/// Lines are raw bytes, not UTF-8: junk is only an error in `Strict` mode.
pub fn read_numbers<R: BufRead>(r: R, mode: ParseMode) -> Result<Vec<i64>> {
    let mut numbers = Vec::new();

    for (line_number, line) in r.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        for token in line
            .split(|b| DELIMITERS.contains(b))
            .filter(|t| !t.is_empty())
        {
            let value = match mode {
                ParseMode::Lenient => parse_leading(token),
                ParseMode::Strict => parse_strict(token)
                    .with_context(|| format!("Line {} isn't all integers", line_number + 1))?,
            };
            trace!("{} -> {}", String::from_utf8_lossy(token), value);
            numbers.push(value);
        }
    }
    Ok(numbers)
}

fn parse_strict(token: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(token)
        .with_context(|| format!("{:?} isn't UTF-8", String::from_utf8_lossy(token)))?;
    text.parse::<i64>()
        .with_context(|| format!("{:?} isn't an integer", text))
}

/// Parses an optional sign and the digits after it, ignoring whatever follows.
pub fn parse_leading(token: &[u8]) -> i64 {
    let (negative, digits) = match token.first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    // Accumulate toward the sign so i64::MIN doesn't overflow on the way.
    let mut value: i64 = 0;
    for d in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let d = (d - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn mixed_delimiters() {
        let read = read_numbers("1,2;3|4 5\t6".as_bytes(), ParseMode::Lenient).unwrap();
        assert_eq!(read, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn multiple_lines_and_runs_of_delimiters() {
        let input = "0, 1, 2,\n3,,  4\r\n\n | ;5\n";
        let read = read_numbers(input.as_bytes(), ParseMode::Strict).unwrap();
        assert_eq!(read, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_input() {
        assert!(read_numbers(&b""[..], ParseMode::Lenient).unwrap().is_empty());
        assert!(read_numbers(&b" ,\n;|\n"[..], ParseMode::Strict)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let read = read_numbers(&b"30 0 30 -2"[..], ParseMode::Strict).unwrap();
        assert_eq!(read, [30, 0, 30, -2]);
    }

    #[rstest]
    #[case("42", 42)]
    #[case("+42", 42)]
    #[case("-7", -7)]
    #[case("12abc", 12)]
    #[case("abc", 0)]
    #[case("-", 0)]
    #[case("", 0)]
    #[case("0x10", 0)]
    #[case("3.9", 3)]
    #[case("99999999999999999999", i64::MAX)]
    #[case("-99999999999999999999", i64::MIN)]
    #[case("-9223372036854775808", i64::MIN)]
    fn lenient(#[case] token: &str, #[case] expected: i64) {
        assert_eq!(parse_leading(token.as_bytes()), expected);
    }

    #[test]
    fn lenient_by_default() {
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }

    #[test]
    fn lenient_coerces_junk_to_zero() {
        let read = read_numbers(&b"5, x, 7y"[..], ParseMode::Lenient).unwrap();
        assert_eq!(read, [5, 0, 7]);
    }

    #[test]
    fn lenient_survives_bytes_that_arent_utf8() {
        let read = read_numbers(&b"5, \xFF, 7\n12\xFE\n"[..], ParseMode::Lenient).unwrap();
        assert_eq!(read, [5, 0, 7, 12]);
    }

    #[test]
    fn strict_rejects_bytes_that_arent_utf8() {
        let err = read_numbers(&b"5\n\xFF\n"[..], ParseMode::Strict).unwrap_err();
        assert!(format!("{:#}", err).contains("Line 2"), "{:#}", err);
    }

    #[test]
    fn strict_rejects_junk() {
        let err = read_numbers(&b"1, 2\n3, 12abc"[..], ParseMode::Strict).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("Line 2"), "{}", msg);
        assert!(msg.contains("12abc"), "{}", msg);
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("smallest-free-number-does-not-exist.txt");
        let err = read_numbers_file(&path, ParseMode::Lenient).unwrap_err();
        assert!(format!("{}", err).starts_with("Couldn't open"));
        // The OS error should survive as the cause.
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn reads_a_file() {
        let path = std::env::temp_dir().join(format!(
            "smallest-free-number-parse-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "3|2|1\n0\n").unwrap();
        let read = read_numbers_file(&path, ParseMode::Lenient);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read.unwrap(), [3, 2, 1, 0]);
    }
}
