use super::words::{self, WORD_BITS};
use super::PackedBools;

/// Words of stack scratch used to finish the final short block.
const SCRATCH_WORDS: usize = 2;
const SCRATCH_BITS: usize = SCRATCH_WORDS * WORD_BITS;

/// Rotates bits `[first, last)` of packed storage so that `middle` comes
/// first, returning `first + (last - middle)`.
///
/// Blocks are exchanged a word's worth of bits at a time. While the shorter
/// block exceeds the scratch buffer, it is swapped with the adjacent end of
/// the longer block, shrinking the problem by its length. Once it fits, it is
/// parked in scratch, the longer block slides over with one overlapping copy
/// and the parked bits land behind it.
pub fn rotate<S>(
    seq: &mut S,
    first: usize,
    middle: usize,
    last: usize,
) -> Result<usize, S::Error>
where
    S: PackedBools + ?Sized,
{
    debug_assert!(first <= middle && middle <= last);

    if first == middle {
        return Ok(last);
    }
    if middle == last {
        return Ok(first);
    }

    rotate_words(seq.words_mut(), first, middle, last);

    Ok(first + (last - middle))
}

fn rotate_words(
    words: &mut [u64],
    mut first: usize,
    mut middle: usize,
    last: usize,
) {
    let mut left = middle - first;
    let mut right = last - middle;
    let mut scratch = [0_u64; SCRATCH_WORDS];

    while left != 0 && right != 0 {
        if left <= right {
            if left <= SCRATCH_BITS {
                words::transfer(words, first, &mut scratch, 0, left);
                words::copy_down(words, middle, first, right);
                words::transfer(&scratch, 0, words, first + right, left);
                return;
            }

            tracing::trace!(first, left, right, "swapping leading block");
            words::swap_ranges(words, first, middle, left);
            first = middle;
            middle += left;
            right -= left;
        } else {
            if right <= SCRATCH_BITS {
                words::transfer(words, middle, &mut scratch, 0, right);
                words::copy_up(words, first, first + right, left);
                words::transfer(&scratch, 0, words, first, right);
                return;
            }

            tracing::trace!(first, left, right, "swapping trailing block");
            words::swap_ranges(words, middle, first, right);
            first += right;
            left -= right;
        }
    }
}

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use test_case::test_case;

    use super::*;
    use crate::bits::PackedBits;

    fn bit_string(bits: &BitSlice<u64, Msb0>) -> String {
        bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    /// Rotates a copy through bitvec, one bit at a time.
    fn oracle(
        words: &[u64],
        first: usize,
        middle: usize,
        last: usize,
    ) -> String {
        let mut expected = BitVec::<u64, Msb0>::from_slice(words);
        expected[first..last].rotate_left(middle - first);
        bit_string(&expected)
    }

    #[test_case(8 ; "one byte")]
    #[test_case(19 ; "under one word")]
    #[test_case(32 ; "half word")]
    #[test_case(49 ; "odd")]
    #[test_case(64 ; "one word")]
    #[test_case(199 ; "several words")]
    #[test_case(256 ; "four words")]
    fn ones_suffix_moves_to_front(len: usize) {
        for offset in -4_isize..=4 {
            let middle = (len / 2).saturating_add_signed(offset);
            let mut bits = PackedBits::zeroed(len);
            for i in middle..len {
                bits.set(i, true);
            }

            let pos = rotate(&mut bits, 0, middle, len).unwrap();

            assert_eq!(pos, len - middle);
            for i in 0..len {
                assert_eq!(bits[i], i < len - middle, "bit {i} at middle {middle}");
            }
        }
    }

    #[test_case(3, 70, 150 ; "unaligned start")]
    #[test_case(64, 100, 192 ; "aligned start")]
    #[test_case(5, 400, 1000 ; "long left block")]
    #[test_case(7, 300, 1020 ; "long right block")]
    #[test_case(130, 131, 1000 ; "one bit left")]
    #[test_case(13, 998, 999 ; "one bit right")]
    #[test_case(17, 517, 1017 ; "equal blocks")]
    fn matches_bitwise_rotation(first: usize, middle: usize, last: usize) {
        let words: Vec<u64> = (0..16_u64)
            .map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ (i << 7))
            .collect();
        let mut bits = PackedBits::from_words(words.clone(), 16 * WORD_BITS);

        let pos = rotate(&mut bits, first, middle, last).unwrap();

        assert_eq!(pos, first + last - middle);
        similar_asserts::assert_eq!(
            bit_string(bits.to_bitvec().as_bitslice()),
            oracle(&words, first, middle, last)
        );
    }

    #[test]
    fn blocks_either_side_of_scratch() {
        let total = 8 * WORD_BITS;
        let words: Vec<u64> = (0..8_u64)
            .map(|i| i.wrapping_mul(0xd6e8_feb8_6659_fd93) ^ !(i << 11))
            .collect();

        for first in [0, 1, 63, 64, 65] {
            for last in [total, total - 1, total - 63] {
                let middles = [
                    first + SCRATCH_BITS - 1,
                    first + SCRATCH_BITS,
                    first + SCRATCH_BITS + 1,
                    last - SCRATCH_BITS - 1,
                    last - SCRATCH_BITS,
                    last - SCRATCH_BITS + 1,
                ];
                for middle in middles {
                    let mut bits = PackedBits::from_words(words.clone(), total);

                    let pos = rotate(&mut bits, first, middle, last).unwrap();

                    assert_eq!(pos, first + last - middle);
                    assert_eq!(
                        bit_string(bits.to_bitvec().as_bitslice()),
                        oracle(&words, first, middle, last),
                        "rotating [{first}, {last}) at {middle}"
                    );
                }
            }
        }
    }
}
