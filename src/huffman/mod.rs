//! Core A: n-ary canonical Huffman coding.
//!
//! Wires the six components together: [`histogram`] (C1) counts symbols,
//! [`tree`] (C2) builds the n-ary merge tree with dummy-leaf padding,
//! [`lengths`] (C3) reads code lengths off that tree, [`canonical`] (C4)
//! assigns canonical codewords from the lengths alone, [`bitstream`] (C5)
//! packs the resulting n-ary digit stream into printable characters, and
//! [`crate::block`] (C6) frames the length table and coded payload as
//! netstrings. Mirrors the teacher's top-level `compress`/`expand` pair in
//! `lzss_huff.rs`: thin orchestration functions that return `Result<_,
//! Error>` and delegate all real work to the submodules.

pub(crate) mod alphabet;
pub(crate) mod bitstream;
pub(crate) mod canonical;
pub mod histogram;
pub(crate) mod lengths;
pub(crate) mod tree;

use crate::block::{self, Block, BlockReader};
use crate::{Error, Result};
use canonical::CanonicalTable;

/// Tunables for [`compress`]/[`expand`]. `s_max` bounds the input symbol
/// space (255 for arbitrary bytes); `n` is the Huffman tree's arity; `r` is
/// the print radix, which must be an exact power of `n` (see
/// `bitstream::pack`).
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub s_max: usize,
    pub n: u32,
    pub r: u32,
}

/// Binary tree, base64url-packed output: the combination spec.md calls out
/// as the default the same way the teacher's `STD_OPTIONS` picks LZHUF's
/// conventional parameters.
pub const STD_OPTIONS: Options = Options { s_max: 255, n: 2, r: 64 };

fn build_canonical(data: &[u8], opts: &Options) -> Result<Option<(Vec<u8>, CanonicalTable)>> {
    let hist = histogram::histogram(data, opts.s_max);
    let m = histogram::nonzero_symbol_count(&hist, opts.s_max);
    if m == 0 {
        return Ok(None);
    }
    let lengths = if m == 1 {
        let mut lengths = vec![0u8; opts.s_max + 1];
        let only = hist[..=opts.s_max].iter().position(|&c| c > 0).expect("m == 1");
        lengths[only] = 1;
        lengths
    } else {
        let t = tree::build(&hist, opts.s_max, opts.n)?.expect("m > 1 implies a tree");
        lengths::length_vector(&t, opts.s_max)
    };
    let table = canonical::assign(&lengths, opts.n)?;
    Ok(Some((lengths, table)))
}

fn digit_stream(data: &[u8], table: &CanonicalTable, opts: &Options) -> Vec<u8> {
    let mut digits = Vec::with_capacity(data.len() * 2);
    for &b in data {
        let cw = table
            .codeword_for(b as u32)
            .expect("every input byte has a codeword in its own histogram's table");
        digits.extend(bitstream::expand_digits(&cw, opts.n));
    }
    digits
}

/// Compress `data` into a netstring-framed stream of a length-table block
/// followed by one coded block. Falls back to a bare pass-through block
/// when the coded form would not actually be smaller (spec.md's
/// pass-through escape hatch), and to an empty stream's single empty
/// pass-through block for empty input.
pub fn compress(data: &[u8], opts: &Options) -> Result<Vec<u8>> {
    let pass_through = block::encode_pass_through(data);

    let Some((lengths, table)) = build_canonical(data, opts)? else {
        return Ok(pass_through);
    };

    let digits = digit_stream(data, &table, opts);
    let digit_count = digits.len();
    let packed = bitstream::pack(&digits, opts.n, opts.r)?;

    let mut coded = block::encode_length_table(opts.n, opts.s_max, &lengths)?;
    coded.extend(block::encode_coded(opts.n, opts.r, digit_count, &packed));

    if coded.len() < pass_through.len() {
        log::debug!("huffman::compress: coded {} bytes -> {} bytes", data.len(), coded.len());
        Ok(coded)
    } else {
        log::debug!("huffman::compress: coded form not smaller, falling back to pass-through");
        Ok(pass_through)
    }
}

fn decode_coded_block(
    table: &CanonicalTable,
    n: u32,
    r: u32,
    digit_count: usize,
    packed: &[u8],
) -> Result<Vec<u8>> {
    let digits = bitstream::unpack(packed, n, r, digit_count)?;
    let mut out = Vec::with_capacity(digits.len());
    let mut value: u64 = 0;
    let mut len: u8 = 0;
    for &d in &digits {
        value = value * n as u64 + d as u64;
        len += 1;
        if let Some(sym) = table.try_decode(value, len) {
            out.push(sym as u8);
            value = 0;
            len = 0;
        } else if len as usize > table.max_length as usize {
            return Err(Error::MalformedStream(0));
        }
    }
    if len != 0 {
        return Err(Error::MalformedStream(0));
    }
    Ok(out)
}

/// Expand a stream produced by [`compress`]. Walks every framed block,
/// keeping the most-recently-seen length table live across coded blocks
/// (spec.md §4.6).
pub fn expand(stream: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut table: Option<CanonicalTable> = None;
    for block in BlockReader::new(stream) {
        match block? {
            Block::PassThrough(data) => out.extend(data),
            Block::Comment(_) => {}
            Block::LengthTable { n, s_max: _, lengths } => {
                table = Some(canonical::assign(&lengths, n)?);
            }
            Block::Coded { n, r, digit_count, packed } => {
                let t = table.as_ref().ok_or(Error::MissingTable(0))?;
                out.extend(decode_coded_block(t, n, r, digit_count, &packed)?);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_ordinary_text() {
        let text = b"I am Sam. Sam I am. I do not like this Sam I am.\n";
        let compressed = compress(text, &STD_OPTIONS).unwrap();
        let expanded = expand(&compressed).unwrap();
        assert_eq!(expanded, text);
    }

    #[test]
    fn roundtrips_empty_input() {
        let compressed = compress(b"", &STD_OPTIONS).unwrap();
        let expanded = expand(&compressed).unwrap();
        assert_eq!(expanded, b"");
    }

    #[test]
    fn roundtrips_single_repeated_symbol() {
        let text = vec![b'x'; 64];
        let compressed = compress(&text, &STD_OPTIONS).unwrap();
        let expanded = expand(&compressed).unwrap();
        assert_eq!(expanded, text);
    }

    #[test]
    fn roundtrips_ternary_alphabet() {
        let opts = Options { s_max: 255, n: 3, r: 81 };
        let text = b"the quick brown fox jumps over the lazy dog";
        let compressed = compress(text, &opts).unwrap();
        let expanded = expand(&compressed).unwrap();
        assert_eq!(expanded, text);
    }

    #[test]
    fn falls_back_to_pass_through_on_tiny_uncompressible_input() {
        let text = b"ab";
        let compressed = compress(text, &STD_OPTIONS).unwrap();
        let (block, _) = block::decode_next(&compressed, 0).unwrap();
        assert_eq!(block, Block::PassThrough(text.to_vec()));
    }

    #[test]
    fn abab_gives_scenario_one_digit_stream() {
        let (lengths, table) = build_canonical(b"abab", &STD_OPTIONS).unwrap().unwrap();
        assert_eq!(lengths[b'a' as usize], 1);
        assert_eq!(lengths[b'b' as usize], 1);
        assert_eq!(table.codeword_for(b'a' as u32).unwrap().code, 0);
        assert_eq!(table.codeword_for(b'b' as u32).unwrap().code, 1);
        let digits = digit_stream(b"abab", &table, &STD_OPTIONS);
        assert_eq!(digits, vec![0, 1, 0, 1]);
    }

    #[test]
    fn aaab_gives_scenario_two_digit_stream() {
        let (_, table) = build_canonical(b"aaab", &STD_OPTIONS).unwrap().unwrap();
        assert_eq!(table.codeword_for(b'a' as u32).unwrap().code, 0);
        assert_eq!(table.codeword_for(b'b' as u32).unwrap().code, 1);
        let digits = digit_stream(b"aaab", &table, &STD_OPTIONS);
        assert_eq!(digits, vec![0, 0, 0, 1]);
    }

    #[test]
    fn all_256_distinct_bytes_give_scenario_four_lengths() {
        let text: Vec<u8> = (0u8..=255).collect();
        let (lengths, table) = build_canonical(&text, &STD_OPTIONS).unwrap().unwrap();
        for &len in &lengths {
            assert_eq!(len, 8);
        }
        let digits = digit_stream(&text, &table, &STD_OPTIONS);
        assert_eq!(digits.len(), 2048);
    }
}
