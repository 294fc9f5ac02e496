use std::convert::TryFrom;
use std::io::{self, Write};

use anyhow::*;
use bit_vec::BitVec;

use crate::rows::write_rows;

/// A bit per value in `[0, max]`, set if the value was seen.
pub struct MembershipBitmap {
    present: BitVec,
}

impl MembershipBitmap {
    /// Marks every value in `[0, max]` that shows up in `values`.
    ///
    /// Negative values can never be the smallest free number,
    /// so they're skipped instead of being used as an index.
    ///
    /// Fails if the bitmap is too big to allocate.
    pub fn from_values(values: &[i64], max: i64) -> Result<Self> {
        let len = if max < 0 {
            0
        } else {
            usize::try_from(max)
                .ok()
                .and_then(|m| m.checked_add(1))
                .ok_or_else(|| anyhow!("Can't index a bitmap up to {}", max))?
        };
        let mut present = zeroed(len, max)?;
        for &v in values {
            if v >= 0 && (v as u64) < len as u64 {
                present.set(v as usize, true);
            }
        }
        Ok(Self { present })
    }

    /// How many values the bitmap covers, i.e., `max + 1`.
    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    #[inline]
    pub fn contains(&self, v: i64) -> bool {
        usize::try_from(v)
            .ok()
            .and_then(|i| self.present.get(i))
            .unwrap_or(false)
    }

    /// Returns the first value without its bit set,
    /// or `len()` (one past the max) if they're all set.
    pub fn first_unset(&self) -> u64 {
        let first = self
            .present
            .iter()
            .position(|bit| !bit)
            .unwrap_or_else(|| self.present.len());
        first as u64
    }

    /// Packs the bitmap into bytes, where value `v` is bit `v % 8` of byte `v / 8`.
    pub fn to_bytes(&self) -> Vec<u8> {
        // BitVec packs the most significant bit first.
        self.present
            .to_bytes()
            .into_iter()
            .map(u8::reverse_bits)
            .collect()
    }

    /// Hex dump of `to_bytes()`, 16 bytes to a line.
    pub fn write_hex<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write_rows(self.to_bytes().iter().map(|b| format!("{:02X}", b)), w)
    }
}

/// `BitVec::from_elem()`, but handing back allocation failures instead of aborting.
fn zeroed(len: usize, max: i64) -> Result<BitVec> {
    let block_count = len / 32 + (len % 32 != 0) as usize;
    let mut blocks: Vec<u32> = Vec::new();
    blocks
        .try_reserve_exact(block_count)
        .with_context(|| format!("Couldn't allocate a bitmap for [0, {}]", max))?;
    blocks.resize(block_count, 0);

    let mut bits = BitVec::new();
    // Safe: the storage is all zeroes and holds at least `len` bits.
    unsafe {
        *bits.storage_mut() = blocks;
        bits.set_len(len);
    }
    Ok(bits)
}
