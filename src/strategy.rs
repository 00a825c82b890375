use crate::bits::PackedBools;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};
use crate::{bits, cycle, forward, reverse};

/// A rotation algorithm usable on sequences of type `S`.
///
/// The marker types below are the implementors; they are never constructed.
pub trait Strategy<S: Sequence + ?Sized> {
    const NAME: &'static str;

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> Result<S::Position, S::Error>;
}

/// Lockstep block swapping, needing only forward steps.
#[derive(Debug)]
pub enum Forward {}

/// Three reversals, needing forward and backward steps.
#[derive(Debug)]
pub enum Bidirectional {}

/// Cycle-following permutation over `gcd(left, right)` orbits.
#[derive(Debug)]
pub enum RandomAccess {}

/// Word-level block swapping on packed boolean storage.
#[derive(Debug)]
pub enum BitPacked {}

impl<S> Strategy<S> for Forward
where
    S: Sequence + ?Sized,
{
    const NAME: &'static str = "forward";

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> Result<S::Position, S::Error> {
        forward::rotate(seq, first, middle, last)
    }
}

impl<S> Strategy<S> for Bidirectional
where
    S: BidirectionalSequence + ?Sized,
{
    const NAME: &'static str = "bidirectional";

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> Result<S::Position, S::Error> {
        reverse::rotate(seq, first, middle, last)
    }
}

impl<S> Strategy<S> for RandomAccess
where
    S: RandomAccessSequence + ?Sized,
{
    const NAME: &'static str = "random-access";

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> Result<S::Position, S::Error> {
        cycle::rotate(seq, first, middle, last)
    }
}

impl<S> Strategy<S> for BitPacked
where
    S: PackedBools + ?Sized,
{
    const NAME: &'static str = "bit-packed";

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> Result<S::Position, S::Error> {
        bits::rotate::rotate(seq, first, middle, last)
    }
}

/// Rotates `[first, last)` so that `middle` becomes the first element.
///
/// The strategy is the one named by the sequence's `Capability`. Returns the
/// new position of the element that was at `first`: `last` when
/// `first == middle`, `first` when `middle == last`.
///
/// Positions must satisfy `first <= middle <= last` in traversal order. This
/// is not checked.
///
/// ```
/// let mut v = vec![0, 1, 2, 3, 4, 5];
/// let pos = rotation::rotate(&mut v, 0, 4, 6).unwrap();
///
/// assert_eq!(v, [4, 5, 0, 1, 2, 3]);
/// assert_eq!(pos, 2);
/// ```
pub fn rotate<S>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
) -> Result<S::Position, S::Error>
where
    S: Sequence + ?Sized,
{
    <S::Capability as Strategy<S>>::rotate(seq, first, middle, last)
}

/// Like [`rotate`], but with the strategy chosen by the caller.
pub fn rotate_with<St, S>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
) -> Result<S::Position, S::Error>
where
    S: Sequence + ?Sized,
    St: Strategy<S>,
{
    St::rotate(seq, first, middle, last)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use test_case::test_case;

    use super::*;
    use crate::bits::PackedBits;
    use crate::sequence::{AsBidirectional, AsForward};

    fn capability_name<S: Sequence + ?Sized>(_: &S) -> &'static str {
        <S::Capability as Strategy<S>>::NAME
    }

    #[test]
    fn dispatch_follows_capability() {
        let mut v = vec![0_u8; 4];
        let mut bits = PackedBits::zeroed(4);

        assert_eq!(capability_name(v.as_slice()), "random-access");
        assert_eq!(capability_name(&VecDeque::<u8>::new()), "random-access");
        assert_eq!(capability_name(&AsBidirectional(&mut v)), "bidirectional");
        assert_eq!(capability_name(&AsForward(&mut v)), "forward");
        assert_eq!(capability_name(&AsForward(&mut bits)), "forward");
        assert_eq!(capability_name(&bits), "bit-packed");
    }

    #[test_case(4, 1 => (vec![1, 2, 3, 0], 3) ; "four at one")]
    #[test_case(6, 4 => (vec![4, 5, 0, 1, 2, 3], 2) ; "six at four")]
    #[test_case(6, 0 => (vec![0, 1, 2, 3, 4, 5], 6) ; "at start")]
    #[test_case(6, 6 => (vec![0, 1, 2, 3, 4, 5], 0) ; "at end")]
    #[test_case(0, 0 => (vec![], 0) ; "empty")]
    #[test_case(1, 0 => (vec![0], 1) ; "single at start")]
    #[test_case(1, 1 => (vec![0], 0) ; "single at end")]
    fn explicit_strategies_agree(len: usize, middle: usize) -> (Vec<usize>, usize) {
        let original: Vec<usize> = (0..len).collect();

        let mut by_forward = original.clone();
        let mut by_bidirectional = original.clone();
        let mut by_cycles = original.clone();

        let f = rotate_with::<Forward, _>(&mut by_forward, 0, middle, len).unwrap();
        let b =
            rotate_with::<Bidirectional, _>(&mut by_bidirectional, 0, middle, len)
                .unwrap();
        let c = rotate_with::<RandomAccess, _>(&mut by_cycles, 0, middle, len)
            .unwrap();

        assert_eq!(by_forward, by_cycles);
        assert_eq!(by_bidirectional, by_cycles);
        assert_eq!((f, b), (c, c));

        (by_cycles, c)
    }
}
