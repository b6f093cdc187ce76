//! Frequency histogram (C1).
//!
//! Ported in spirit from `original_source/n_ary_huffman.c`'s `histogram()`:
//! same sentinel-slot sanity check, `printf` diagnostics replaced by
//! `log::trace!`.

/// Count occurrences of each symbol in `block`. The returned vector has
/// `s_max + 2` entries: index `i` holds the count of byte value `i` for
/// `i in 0..=s_max`, and the final slot (`s_max + 1`) is a sentinel that is
/// never written, kept only so callers can assert it stayed zero.
pub fn histogram(block: &[u8], s_max: usize) -> Vec<u64> {
    let mut h = vec![0u64; s_max + 2];
    for &b in block {
        let sym = b as usize;
        debug_assert!(sym <= s_max, "symbol {sym} exceeds s_max {s_max}");
        h[sym] += 1;
    }
    debug_assert_eq!(h[s_max + 1], 0, "sentinel slot must stay untouched");
    log::trace!("histogram over {} bytes, s_max={}", block.len(), s_max);
    h
}

/// Number of distinct symbols with nonzero count, i.e. `m` in spec.md §4.2.
pub fn nonzero_symbol_count(hist: &[u64], s_max: usize) -> usize {
    hist[..=s_max].iter().filter(|&&c| c > 0).count()
}
