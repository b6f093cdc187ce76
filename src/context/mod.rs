//! Core B: context-mixing adaptive coders.
//!
//! A thin container around the two coder families — [`nybble`] (C7) and
//! [`lzw`] (C8) — picking between them with a leading selector byte the way
//! the teacher's `main.rs` picks a method by name, except the choice is
//! recorded in-band here since, unlike the CLI's `-m` flag, a library caller
//! has no side channel to carry it across `encode`/`decode`. Both coders
//! restrict their input alphabet (see each module's docs); `encode` falls
//! back to a raw pass-through block automatically when the chosen coder
//! cannot represent the data, mirroring Core A's pass-through escape hatch
//! in `huffman::compress`.
//!
//! Termination follows the wire format precisely for LZW: `0x00` can never
//! appear in an LZW code (it's reserved, plaintext already forbids it), so a
//! trailing `0x00` byte unambiguously marks the end of the code stream and
//! needs no length field. The nybble coder has no such spare value and
//! genuinely terminates at "byte-stream end, container-provided" — this
//! library is itself the container for the two-file CLI in `main.rs`, which
//! has nowhere else to stash the original length, so `encode` carries it in
//! an explicit 8-byte header ahead of the nybble payload specifically (see
//! DESIGN.md's Open Question decisions for the reasoning).
//!
//! The context count `k` is chosen per call (`Options::contexts`), not fixed
//! at compile time, so it has to travel with the stream rather than being
//! assumed at decode time: a 4-byte little-endian field follows the nybble
//! length header and precedes the LZW code stream, in both cases read back
//! by `decode` before constructing the coder's `Options`.

pub mod lzw;
pub mod nybble;

use crate::{Error, Result};

const SELECTOR_PASS_THROUGH: u8 = 0x20;
const SELECTOR_NYBBLE: u8 = 0xAF;
const SELECTOR_LZW: u8 = 0x08;
const LZW_TERMINATOR: u8 = 0x00;

/// Which coder family to prefer. [`encode`] falls back to pass-through
/// regardless of this choice if the input isn't representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Nybble,
    Lzw,
}

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub method: Method,
    pub contexts: u32,
}

pub const STD_OPTIONS: Options = Options { method: Method::Nybble, contexts: 16 };

pub fn encode(data: &[u8], opts: &Options) -> Result<Vec<u8>> {
    let attempt = match opts.method {
        Method::Nybble => {
            let nybble_opts = nybble::Options { contexts: opts.contexts };
            nybble::encode(data, &nybble_opts).map(|packed| {
                let mut out = Vec::with_capacity(packed.len() + 13);
                out.push(SELECTOR_NYBBLE);
                out.extend_from_slice(&(data.len() as u64).to_le_bytes());
                out.extend_from_slice(&opts.contexts.to_le_bytes());
                out.extend_from_slice(&packed);
                out
            })
        }
        Method::Lzw => {
            let lzw_opts = lzw::Options { contexts: opts.contexts };
            lzw::encode(data, &lzw_opts).map(|codes| {
                let mut out = Vec::with_capacity(codes.len() + 6);
                out.push(SELECTOR_LZW);
                out.extend_from_slice(&opts.contexts.to_le_bytes());
                out.extend_from_slice(&codes);
                out.push(LZW_TERMINATOR);
                out
            })
        }
    };
    match attempt {
        Ok(framed) => {
            log::debug!("context::encode: {:?} coded {} -> {} bytes", opts.method, data.len(), framed.len());
            Ok(framed)
        }
        Err(Error::ReservedByte(b)) => {
            log::debug!("context::encode: byte {b:#04x} unsupported by {:?}, falling back to pass-through", opts.method);
            let mut out = Vec::with_capacity(data.len() + 1);
            out.push(SELECTOR_PASS_THROUGH);
            out.extend_from_slice(data);
            Ok(out)
        }
        Err(e) => Err(e),
    }
}

pub fn decode(stream: &[u8]) -> Result<Vec<u8>> {
    let Some((&selector, rest)) = stream.split_first() else {
        return Err(Error::TruncatedPayload { expected: 1, found: 0 });
    };
    match selector {
        SELECTOR_PASS_THROUGH => Ok(rest.to_vec()),
        SELECTOR_NYBBLE => {
            if rest.len() < 12 {
                return Err(Error::TruncatedPayload { expected: 12, found: rest.len() });
            }
            let plain_len = u64::from_le_bytes(rest[..8].try_into().unwrap()) as usize;
            let contexts = u32::from_le_bytes(rest[8..12].try_into().unwrap());
            nybble::decode(&rest[12..], plain_len, &nybble::Options { contexts })
        }
        SELECTOR_LZW => {
            if rest.len() < 4 {
                return Err(Error::TruncatedPayload { expected: 4, found: rest.len() });
            }
            let contexts = u32::from_le_bytes(rest[..4].try_into().unwrap());
            let body = &rest[4..];
            let end = body
                .iter()
                .position(|&b| b == LZW_TERMINATOR)
                .ok_or(Error::TruncatedPayload { expected: body.len() + 1, found: body.len() })?;
            let codes = &body[..end];
            lzw::decode(codes, codes.len(), &lzw::Options { contexts })
        }
        other => Err(Error::UnknownBlockType([other, 0], 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_via_nybble_method() {
        let text = b"mississippi river";
        let opts = Options { method: Method::Nybble, contexts: 16 };
        let framed = encode(text, &opts).unwrap();
        assert_eq!(decode(&framed).unwrap(), text);
    }

    #[test]
    fn roundtrips_via_lzw_method() {
        let text = b"TOBEORNOTTOBEORTOBEORNOT";
        let opts = Options { method: Method::Lzw, contexts: 16 };
        let framed = encode(text, &opts).unwrap();
        assert_eq!(decode(&framed).unwrap(), text);
    }

    #[test]
    fn falls_back_to_pass_through_for_high_bit_bytes() {
        let text = [0xFFu8, 0x01, 0x02];
        let opts = Options { method: Method::Nybble, contexts: 16 };
        let framed = encode(&text, &opts).unwrap();
        assert_eq!(framed[0], SELECTOR_PASS_THROUGH);
        assert_eq!(decode(&framed).unwrap(), text.to_vec());
    }

    #[test]
    fn roundtrips_empty_input() {
        let opts = Options { method: Method::Nybble, contexts: 16 };
        let framed = encode(b"", &opts).unwrap();
        assert_eq!(decode(&framed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn lzw_stream_ends_with_zero_terminator() {
        let text = b"TOBEORNOTTOBEORTOBEORNOT";
        let opts = Options { method: Method::Lzw, contexts: 16 };
        let framed = encode(text, &opts).unwrap();
        assert_eq!(framed[0], SELECTOR_LZW);
        assert_eq!(*framed.last().unwrap(), LZW_TERMINATOR);
    }

    #[test]
    fn lzw_stream_missing_terminator_is_rejected() {
        let text = b"TOBEORNOTTOBEORTOBEORNOT";
        let opts = Options { method: Method::Lzw, contexts: 16 };
        let mut framed = encode(text, &opts).unwrap();
        framed.pop();
        assert!(decode(&framed).is_err());
    }
}
