//! Bit-range transfers over MSB-first `u64` words.
//!
//! Bit `i` of a word slice lives in `words[i / 64]` at shift `63 - i % 64`.
//! Every transfer moves up to one word's worth of bits per step: two word
//! reads and at most two masked word writes, whatever the alignment. Aligned
//! steps degenerate to whole-word copies.

use std::cmp::min;

pub const WORD_BITS: usize = u64::BITS as usize;

/// The top `count` bits set, `count` in `0..=64`.
#[inline]
fn high_mask(count: usize) -> u64 {
    if count == 0 {
        0
    } else {
        u64::MAX << (WORD_BITS - count)
    }
}

/// Reads `count` bits starting at bit `pos`, returned left-aligned.
#[inline]
pub fn load(words: &[u64], pos: usize, count: usize) -> u64 {
    debug_assert!(count > 0 && count <= WORD_BITS);

    let (index, offset) = (pos / WORD_BITS, pos % WORD_BITS);
    let mut value = words[index] << offset;
    if offset + count > WORD_BITS {
        value |= words[index + 1] >> (WORD_BITS - offset);
    }

    value & high_mask(count)
}

/// Writes the top `count` bits of `value` to bits `pos..pos + count`,
/// leaving every other bit untouched.
#[inline]
pub fn store(words: &mut [u64], pos: usize, count: usize, value: u64) {
    debug_assert!(count > 0 && count <= WORD_BITS);

    let value = value & high_mask(count);
    let (index, offset) = (pos / WORD_BITS, pos % WORD_BITS);

    let head = high_mask(count) >> offset;
    words[index] = (words[index] & !head) | (value >> offset);

    if offset + count > WORD_BITS {
        let tail = high_mask(offset + count - WORD_BITS);
        words[index + 1] =
            (words[index + 1] & !tail) | (value << (WORD_BITS - offset));
    }
}

/// Exchanges bits `a..a + len` with `b..b + len`. The ranges must not overlap.
pub fn swap_ranges(words: &mut [u64], a: usize, b: usize, len: usize) {
    let mut done = 0;
    while done < len {
        let count = min(WORD_BITS, len - done);
        let x = load(words, a + done, count);
        let y = load(words, b + done, count);
        store(words, a + done, count, y);
        store(words, b + done, count, x);
        done += count;
    }
}

/// Copies bits `src..src + len` down to `dst..dst + len`, `dst <= src`.
/// The ranges may overlap.
pub fn copy_down(words: &mut [u64], src: usize, dst: usize, len: usize) {
    debug_assert!(dst <= src);

    let mut done = 0;
    while done < len {
        let count = min(WORD_BITS, len - done);
        let value = load(words, src + done, count);
        store(words, dst + done, count, value);
        done += count;
    }
}

/// Copies bits `src..src + len` up to `dst..dst + len`, `dst >= src`.
/// The ranges may overlap.
pub fn copy_up(words: &mut [u64], src: usize, dst: usize, len: usize) {
    debug_assert!(dst >= src);

    let mut remaining = len;
    while remaining > 0 {
        let count = min(WORD_BITS, remaining);
        remaining -= count;
        let value = load(words, src + remaining, count);
        store(words, dst + remaining, count, value);
    }
}

/// Copies `len` bits between two distinct word buffers.
pub fn transfer(
    src: &[u64],
    src_pos: usize,
    dst: &mut [u64],
    dst_pos: usize,
    len: usize,
) {
    let mut done = 0;
    while done < len {
        let count = min(WORD_BITS, len - done);
        let value = load(src, src_pos + done, count);
        store(dst, dst_pos + done, count, value);
        done += count;
    }
}
