//! Digit-string <-> printable-character packing (C5).
//!
//! Codewords are sequences of n-ary digits, written MSB-first (the natural
//! order for a prefix code: the first digit read is the one that narrows
//! the decoder's search the most). Those digits are then grouped into an
//! output radix `r = n^k` and each group of `k` digits is packed into one
//! printable character. spec.md's Design Notes resolve the packing order as
//! little-endian *within* a group — the first digit of a group lands in the
//! group's least-significant place — so that appending digits to an
//! in-progress final group never disturbs digits already packed. The final
//! group is zero-padded on the high end if short; the exact digit count is
//! carried in the block header (see `block::encode_coded`) so the decoder
//! knows precisely where the real digits end.

use super::alphabet::{char_to_digit, digit_to_char};
use super::canonical::Codeword;
use crate::{Error, Result};

/// Expand one codeword into its n-ary digit sequence, MSB-first.
pub(crate) fn expand_digits(codeword: &Codeword, n: u32) -> Vec<u8> {
    let mut digits = vec![0u8; codeword.length as usize];
    let mut v = codeword.code;
    for slot in digits.iter_mut().rev() {
        *slot = (v % n as u64) as u8;
        v /= n as u64;
    }
    digits
}

/// How many n-ary digits combine into one output-radix character, i.e.
/// `k` such that `n^k == r`. Returns `Err` if `r` is not an exact power of
/// `n` (the only case the Design Notes' group-packing scheme supports).
fn group_size(n: u32, r: u32) -> Result<u32> {
    if n < 2 || r < n {
        return Err(Error::BadLengthVector);
    }
    let mut k = 1u32;
    let mut p = n as u64;
    while p < r as u64 {
        p = p.checked_mul(n as u64).ok_or(Error::BadLengthVector)?;
        k += 1;
    }
    if p == r as u64 {
        Ok(k)
    } else {
        Err(Error::BadLengthVector)
    }
}

/// Pack a flat n-ary digit stream into printable characters of radix `r`.
/// Returns the packed characters; the caller is responsible for recording
/// `digits.len()` in the block header.
pub(crate) fn pack(digits: &[u8], n: u32, r: u32) -> Result<Vec<u8>> {
    let k = group_size(n, r)? as usize;
    let mut out = Vec::with_capacity((digits.len() + k - 1) / k.max(1));
    for chunk in digits.chunks(k) {
        let mut value: u64 = 0;
        let mut place: u64 = 1;
        for &d in chunk {
            value += d as u64 * place;
            place *= n as u64;
        }
        // Missing digits in a short final chunk are zero, which is exactly
        // what `value` already has by construction: they simply never add
        // to the sum.
        out.push(digit_to_char(r, value as u32)?);
    }
    Ok(out)
}

/// Unpack printable characters back into an n-ary digit stream, truncated
/// to exactly `digit_count` digits (discarding the zero padding of the
/// final group, if any).
pub(crate) fn unpack(packed: &[u8], n: u32, r: u32, digit_count: usize) -> Result<Vec<u8>> {
    let k = group_size(n, r)? as usize;
    let mut digits = Vec::with_capacity(packed.len() * k);
    for &c in packed {
        let mut value = char_to_digit(r, c)?;
        for _ in 0..k {
            digits.push((value % n) as u8);
            value /= n;
        }
    }
    if digit_count > digits.len() {
        return Err(Error::TruncatedPayload { expected: digit_count, found: digits.len() });
    }
    digits.truncate(digit_count);
    Ok(digits)
}
