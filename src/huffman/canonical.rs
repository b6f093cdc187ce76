//! Canonical code assignment (C4).
//!
//! Implements spec.md §4.4's normative algorithm directly: sort symbols by
//! `(length, symbol)` ascending, assign codes starting at zero, and on every
//! length increase multiply the running code by `n` (the n-ary
//! generalization of the usual binary "shift left" step) instead of just
//! incrementing. Grounded in the same canonical-by-construction idea as
//! `minimum_redundancy::Coding::from_sorted` (other_examples), adapted from
//! its in-place two-pass form to a straightforward sort-then-assign pass
//! since C2/C3 already did the merge-reduction work.

use crate::{Error, Result};

/// Longest code length this block format can carry: the `\nX` table encodes
/// one length per symbol as a single ASCII decimal digit (see
/// `block::encode_length_table`), so lengths of 10 or more cannot round-trip.
pub const MAX_LENGTH: u8 = 9;

/// A symbol's canonical codeword: `length` n-ary digits, MSB-first, with
/// numeric value `code` (`code < n^length`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Codeword {
    pub symbol: u32,
    pub length: u8,
    pub code: u64,
}

/// A completed canonical table: per-symbol codewords plus the per-length
/// bookkeeping a decoder needs to find, for an incoming digit sequence, the
/// length at which its prefix becomes a valid code (spec.md §4.4's decode
/// sketch: "the smallest `len` such that the prefix read so far, as a
/// numeric value, lies in `[first_code[len], first_code[len] + count[len])`").
pub(crate) struct CanonicalTable {
    pub n: u32,
    pub max_length: u8,
    /// Codewords for real (non-dummy) symbols only, sorted by
    /// `(length, symbol)` ascending.
    pub codewords: Vec<Codeword>,
    /// `first_code[len]` is the numeric value of the first codeword of that
    /// length; `first_code[0]` is unused.
    first_code: Vec<u64>,
    /// `first_index[len]` is the index into `codewords` (sorted by length)
    /// of the first codeword of that length; `count[len]` entries follow.
    first_index: Vec<usize>,
    count: Vec<usize>,
}

/// Checks the Kraft inequality `sum(n^(-length)) <= 1` over nonzero entries
/// of `lengths`, using integer arithmetic scaled by `n^max_length` to avoid
/// floating point. Returns `Err(Error::BadLengthVector)` if it is violated
/// or if any length exceeds [`MAX_LENGTH`].
fn check_kraft(lengths: &[u8], n: u32) -> Result<u8> {
    let max_length = lengths.iter().copied().filter(|&l| l > 0).max().unwrap_or(0);
    if max_length > MAX_LENGTH {
        return Err(Error::BadLengthVector);
    }
    let scale = (n as u128).pow(max_length as u32);
    let mut sum: u128 = 0;
    for &len in lengths {
        if len == 0 {
            continue;
        }
        let term = scale / (n as u128).pow(len as u32);
        sum = sum.checked_add(term).ok_or(Error::BadLengthVector)?;
    }
    if sum > scale {
        return Err(Error::BadLengthVector);
    }
    Ok(max_length)
}

/// Assign canonical n-ary codewords to every symbol with a nonzero entry in
/// `lengths` (`lengths[sym] == 0` means "absent from this block").
pub(crate) fn assign(lengths: &[u8], n: u32) -> Result<CanonicalTable> {
    assert!(n >= 2, "output alphabet size must be at least 2");
    let max_length = check_kraft(lengths, n)?;

    let mut order: Vec<(u32, u8)> = lengths
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l > 0)
        .map(|(sym, &l)| (sym as u32, l))
        .collect();
    order.sort_by_key(|&(sym, len)| (len, sym));

    let mut codewords = Vec::with_capacity(order.len());
    let mut code: u64 = 0;
    let mut prev_length: u8 = order.first().map(|&(_, l)| l).unwrap_or(1);
    let mut first_code = vec![0u64; max_length as usize + 1];
    let mut first_index = vec![0usize; max_length as usize + 1];
    let mut count = vec![0usize; max_length as usize + 1];

    for &(symbol, length) in &order {
        if length > prev_length {
            code = code
                .checked_mul((n as u64).pow((length - prev_length) as u32))
                .ok_or(Error::Overflow)?;
            prev_length = length;
        }
        if count[length as usize] == 0 {
            first_code[length as usize] = code;
            first_index[length as usize] = codewords.len();
        }
        count[length as usize] += 1;
        codewords.push(Codeword { symbol, length, code });
        code += 1;
    }

    Ok(CanonicalTable { n, max_length, codewords, first_code, first_index, count })
}

impl CanonicalTable {
    /// Decode one symbol from a numeric digit-prefix `value` accumulated
    /// over `len` n-ary digits (MSB-first), returning the symbol if `(value,
    /// len)` names a real codeword, or `None` if more digits are needed.
    pub fn try_decode(&self, value: u64, len: u8) -> Option<u32> {
        if len == 0 || len as usize >= self.first_code.len() {
            return None;
        }
        let lo = self.first_code[len as usize];
        let n = self.count[len as usize];
        if n == 0 || value < lo || value - lo >= n as u64 {
            return None;
        }
        let idx = self.first_index[len as usize] + (value - lo) as usize;
        Some(self.codewords[idx].symbol)
    }

    pub fn codeword_for(&self, symbol: u32) -> Option<Codeword> {
        self.codewords.iter().copied().find(|c| c.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_four_equal_length_symbols_get_sequential_codes() {
        let mut lengths = vec![0u8; 256];
        lengths[b'a' as usize] = 2;
        lengths[b'b' as usize] = 2;
        lengths[b'c' as usize] = 2;
        lengths[b'd' as usize] = 2;
        let t = assign(&lengths, 2).unwrap();
        let codes: Vec<u64> = t.codewords.iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn length_increase_multiplies_by_n() {
        // n=3, one symbol of length 1, two of length 2: after the length-1
        // symbol (code 0), the next length's first code must be 0 * 3 = 0,
        // then 1, not simply incremented by one "bit".
        let mut lengths = vec![0u8; 256];
        lengths[b'a' as usize] = 1;
        lengths[b'b' as usize] = 2;
        lengths[b'c' as usize] = 2;
        let t = assign(&lengths, 3).unwrap();
        assert_eq!(t.codeword_for(b'a' as u32).unwrap().code, 0);
        assert_eq!(t.codeword_for(b'b' as u32).unwrap().code, 0);
        assert_eq!(t.codeword_for(b'c' as u32).unwrap().code, 1);
    }

    #[test]
    fn roundtrip_via_try_decode() {
        let mut lengths = vec![0u8; 256];
        lengths[b'a' as usize] = 1;
        lengths[b'b' as usize] = 2;
        lengths[b'c' as usize] = 2;
        let t = assign(&lengths, 3).unwrap();
        for sym in [b'a', b'b', b'c'] {
            let cw = t.codeword_for(sym as u32).unwrap();
            assert_eq!(t.try_decode(cw.code, cw.length), Some(sym as u32));
        }
    }

    #[test]
    fn length_over_cap_is_rejected() {
        let mut lengths = vec![0u8; 4];
        lengths[0] = 10;
        assert_eq!(assign(&lengths, 2), Err(Error::BadLengthVector));
    }

    #[test]
    fn kraft_violation_is_rejected() {
        // Three symbols each claiming length 1 under a binary alphabet is
        // over-subscribed: 1/2 + 1/2 + 1/2 > 1.
        let mut lengths = vec![0u8; 4];
        lengths[0] = 1;
        lengths[1] = 1;
        lengths[2] = 1;
        assert_eq!(assign(&lengths, 2), Err(Error::BadLengthVector));
    }
}
