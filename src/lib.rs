//! # n-ary compress
//!
//! Two experimental, self-contained lossless codecs:
//!
//! * [`huffman`] — an n-ary canonical Huffman coder. The output alphabet
//!   size `n` is an arbitrary integer `>= 2` (binary, ternary, decimal,
//!   ...). The code table and payload are framed as a stream of
//!   netstring-delimited, typed [`block`]s.
//! * [`context`] — a pair of adaptive context-mixing coders: a 4-bit
//!   move-to-front "hot-list" coder (`context::nybble`) and a per-context
//!   LZW dictionary coder (`context::lzw`).
//!
//! Both operate on in-memory buffers; streaming I/O, the CLI, and
//! debug-print formatting are left to callers (see `src/main.rs` for a
//! minimal example of such a caller).
//!
//! ## Example
//!
//! ```rs
//! use nary_compress::huffman;
//! let text = b"I am Sam. Sam I am. I do not like this Sam I am.\n";
//! let compressed = huffman::compress(text, &huffman::STD_OPTIONS).expect("compress failed");
//! let expanded = huffman::expand(&compressed).expect("expand failed");
//! assert_eq!(text.to_vec(), expanded);
//! ```

pub mod block;
pub mod context;
pub mod huffman;

pub(crate) type DYNERR = Box<dyn std::error::Error>;

/// Errors raised by either codec core. All are recoverable at block
/// boundaries; none of the library's public functions panic on
/// attacker-controlled input.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Bad netstring framing, bad tag, or short read, at the given byte
    /// offset into the stream.
    #[error("malformed stream at byte offset {0}")]
    MalformedStream(usize),
    /// Block tag was not one of `\n\n`, `\n#`, `\nX`, `\nZ`.
    #[error("unknown block type {0:?} at byte offset {1}")]
    UnknownBlockType([u8; 2], usize),
    /// A `\nZ` block was encountered with no preceding `\nX` in the stream.
    #[error("missing code-length table for coded block at byte offset {0}")]
    MissingTable(usize),
    /// Lengths violate the Kraft inequality, or a length exceeds the
    /// implementation cap (see `block::MAX_LENGTH_DIGIT`).
    #[error("code length vector is not a valid n-ary prefix code")]
    BadLengthVector,
    /// Symbol count sum exceeded the codec's integer range.
    #[error("symbol count overflowed during tree construction")]
    Overflow,
    /// The header's digit count disagreed with the bytes actually present.
    #[error("truncated payload: expected {expected} digits, found {found}")]
    TruncatedPayload { expected: usize, found: usize },
    /// Encoder-only: no free dictionary slot was found in a full
    /// revolution of the pruning scan. The LZW encoder falls back to
    /// literals for the remainder of the block when this happens.
    #[error("context dictionary exhausted")]
    DictionaryExhausted,
    /// A byte value outside the codec's declared symbol space, or (for
    /// Core B's LZW variant) the reserved end-of-stream byte `0x00`
    /// appearing in plaintext.
    #[error("byte {0:#04x} is reserved or out of range for this codec")]
    ReservedByte(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
