use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{self, Debug};
use std::ops::Index;
use std::str::FromStr;

use bitvec::prelude::*;
use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

pub use self::words::WORD_BITS;
use crate::error::ParseBitsError;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};
use crate::strategy;

pub mod rotate;
mod words;

/// Boolean storage packed MSB-first into `u64` words, exposing the words for
/// bulk transfers.
///
/// Positions are bit indices counted from the first bit of
/// `words_mut()[0]`.
pub trait PackedBools: Sequence<Position = usize> {
    fn words_mut(&mut self) -> &mut [u64];
}

/// A growable-at-construction bit sequence.
///
/// Bit `i` is stored in `words[i / 64]` at shift `63 - i % 64`. Bits past
/// `len` in the last word are always zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PackedBits {
    words: Vec<u64>,
    len: usize,
}

impl PackedBits {
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    pub fn repeat(bit: bool, len: usize) -> Self {
        let mut bits = Self::zeroed(len);
        if bit {
            bits.words.fill(u64::MAX);
            bits.clear_tail();
        }
        bits
    }

    /// Takes the first `len` bits of `words`; `len` may not exceed the
    /// words' capacity.
    pub fn from_words(mut words: Vec<u64>, len: usize) -> Self {
        assert!(
            len <= words.len() * WORD_BITS,
            "{len} bits do not fit in {} words",
            words.len()
        );
        words.truncate(len.div_ceil(WORD_BITS));
        let mut bits = Self { words, len };
        bits.clear_tail();
        bits
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let mut bits = Self::zeroed(len);
        rng.fill(bits.words.as_mut_slice());
        bits.clear_tail();
        bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit {index} out of range {}", self.len);
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        self.words[word] & (1_u64 << (WORD_BITS - 1 - bit)) != 0
    }

    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "bit {index} out of range {}", self.len);
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        let mask = 1_u64 << (WORD_BITS - 1 - bit);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.get(i))
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Rotates the whole sequence so bit `by` comes first.
    pub fn rotate_left(&mut self, by: usize) {
        assert!(by <= self.len, "cannot rotate {} bits by {by}", self.len);
        let len = self.len;
        if let Err(never) = rotate::rotate(self, 0, by, len) {
            match never {}
        }
    }

    /// Rotates the whole sequence so the last `by` bits come first.
    pub fn rotate_right(&mut self, by: usize) {
        assert!(by <= self.len, "cannot rotate {} bits by {by}", self.len);
        self.rotate_left(self.len - by);
    }

    pub fn to_bitvec(&self) -> BitVec<u64, Msb0> {
        let mut bv = BitVec::from_slice(&self.words);
        bv.truncate(self.len);
        bv
    }

    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= u64::MAX << (WORD_BITS - used);
            }
        }
    }
}

impl Sequence for PackedBits {
    type Position = usize;
    type Error = Infallible;
    type Capability = strategy::BitPacked;

    fn advance(&self, pos: usize) -> usize {
        pos + 1
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        let (x, y) = (self.get(a), self.get(b));
        if x != y {
            self.set(a, y);
            self.set(b, x);
        }
        Ok(())
    }
}

impl BidirectionalSequence for PackedBits {
    fn retreat(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl RandomAccessSequence for PackedBits {
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }

    fn jump(&self, pos: usize, by: usize) -> usize {
        pos + by
    }
}

impl PackedBools for PackedBits {
    fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }
}

impl Index<usize> for PackedBits {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        if self.get(index) {
            &true
        } else {
            &false
        }
    }
}

impl Debug for PackedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedBits({self})")
    }
}

impl fmt::Display for PackedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for PackedBits {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        let mut bits = Self::zeroed(len);

        for (index, found) in s.chars().enumerate() {
            match found {
                '0' => {}
                '1' => bits.set(index, true),
                _ => return Err(ParseBitsError::InvalidDigit { index, found }),
            }
        }

        Ok(bits)
    }
}

impl From<&BitSlice<u64, Msb0>> for PackedBits {
    fn from(slice: &BitSlice<u64, Msb0>) -> Self {
        let mut bits = Self::zeroed(slice.len());
        for index in slice.iter_ones() {
            bits.set(index, true);
        }
        bits
    }
}

impl Serialize for PackedBits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackedBits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: Cow<'static, str> = Deserialize::deserialize(deserializer)?;

        s.parse().map_err(D::Error::custom)
    }
}
