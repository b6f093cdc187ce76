//! Print-radix alphabets (C5 support).
//!
//! `original_source/n_ary_huffman.c`'s header comment wishes for a family of
//! printable output radixes: base64url, base16, base9, base27, base81,
//! base10, base6, base36... rather than hard-code each one, this module
//! picks one fixed, ordered table of printable ASCII and slices it to
//! whatever width `r` the caller asks for, with base64url kept as its own
//! table since its conventional alphabet order is not a prefix of ASCII
//! order.

use crate::{Error, Result};

/// The standard (URL-safe) base64 alphabet, in its conventional order.
const BASE64URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A 96-entry printable-ASCII table (space through `~`, reordered digits
/// first) used for every print radix other than exactly 64. Slicing
/// `GENERIC[..r]` gives a stable, human-scannable alphabet for any
/// `r <= 96`: base10 prints ordinary decimal digits, base16 prints
/// hex-looking digits-then-letters, and so on.
const GENERIC: &[u8; 96] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!\"#$%&'()*+,-./:;<=>?@[\\]^`{|}~ ";

/// Largest print radix this module can represent.
pub const MAX_RADIX: u32 = 96;

fn table_for(r: u32) -> Result<&'static [u8]> {
    if r < 2 || r > MAX_RADIX {
        return Err(Error::BadLengthVector);
    }
    if r == 64 {
        Ok(BASE64URL)
    } else {
        Ok(&GENERIC[..r as usize])
    }
}

/// Map a digit value `0..r` to its printable character under radix `r`.
pub(crate) fn digit_to_char(r: u32, digit: u32) -> Result<u8> {
    let table = table_for(r)?;
    table.get(digit as usize).copied().ok_or(Error::BadLengthVector)
}

/// Map a printable character back to its digit value under radix `r`.
pub(crate) fn char_to_digit(r: u32, c: u8) -> Result<u32> {
    let table = table_for(r)?;
    table
        .iter()
        .position(|&t| t == c)
        .map(|i| i as u32)
        .ok_or(Error::BadLengthVector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64url_matches_conventional_alphabet() {
        assert_eq!(digit_to_char(64, 0).unwrap(), b'A');
        assert_eq!(digit_to_char(64, 62).unwrap(), b'-');
        assert_eq!(digit_to_char(64, 63).unwrap(), b'_');
    }

    #[test]
    fn base10_prints_ordinary_digits() {
        for d in 0..10 {
            assert_eq!(digit_to_char(10, d).unwrap(), b'0' + d as u8);
        }
    }

    #[test]
    fn roundtrips_for_every_supported_radix() {
        for r in [2, 3, 6, 9, 16, 27, 36, 64, 81, 96] {
            for d in 0..r {
                let c = digit_to_char(r, d).unwrap();
                assert_eq!(char_to_digit(r, c).unwrap(), d);
            }
        }
    }

    #[test]
    fn radix_out_of_range_is_rejected() {
        assert!(digit_to_char(1, 0).is_err());
        assert!(digit_to_char(97, 0).is_err());
    }
}
