//! In-place rotation of sequences.
//!
//! [`rotate`] picks a strategy from the sequence's declared capability:
//! lockstep block swaps for forward-only sequences, three reversals for
//! bidirectional ones, cycle-following for random access, and word-level
//! transfers for packed bits.

pub mod bits;
pub mod config;
pub mod cycle;
pub mod error;
pub mod forward;
pub mod reverse;
pub mod rng_source;
pub mod sequence;
pub mod strategy;
pub mod verify;

pub use crate::bits::{PackedBits, PackedBools};
pub use crate::sequence::{
    AsBidirectional, AsForward, BidirectionalSequence, RandomAccessSequence,
    Sequence,
};
pub use crate::strategy::{rotate, rotate_with, Strategy};
