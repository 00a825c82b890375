use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::Debug;

use crate::strategy::{self, Strategy};

/// A range of elements addressed through positions that can at least step
/// forward one slot at a time.
///
/// `Capability` names the rotation strategy [`crate::rotate`] selects for
/// this sequence. It is resolved at compile time.
pub trait Sequence {
    type Position: Copy + Eq + Debug;
    type Error;
    type Capability: Strategy<Self>;

    /// Returns the position one slot after `pos`.
    fn advance(&self, pos: Self::Position) -> Self::Position;

    /// Exchanges the elements at `a` and `b`.
    fn swap(
        &mut self,
        a: Self::Position,
        b: Self::Position,
    ) -> Result<(), Self::Error>;
}

pub trait BidirectionalSequence: Sequence {
    /// Returns the position one slot before `pos`.
    fn retreat(&self, pos: Self::Position) -> Self::Position;
}

/// Sequences with O(1) distance and jumps.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Number of slots in `[from, to)`. `from` must not be after `to`.
    fn distance(&self, from: Self::Position, to: Self::Position) -> usize;

    /// Returns the position `by` slots after `pos`.
    fn jump(&self, pos: Self::Position, by: usize) -> Self::Position;
}

impl<T> Sequence for [T] {
    type Position = usize;
    type Error = Infallible;
    type Capability = strategy::RandomAccess;

    fn advance(&self, pos: usize) -> usize {
        pos + 1
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        <[T]>::swap(self, a, b);
        Ok(())
    }
}

impl<T> BidirectionalSequence for [T] {
    fn retreat(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccessSequence for [T] {
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }

    fn jump(&self, pos: usize, by: usize) -> usize {
        pos + by
    }
}

impl<T> Sequence for Vec<T> {
    type Position = usize;
    type Error = Infallible;
    type Capability = strategy::RandomAccess;

    fn advance(&self, pos: usize) -> usize {
        pos + 1
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        self.as_mut_slice().swap(a, b);
        Ok(())
    }
}

impl<T> BidirectionalSequence for Vec<T> {
    fn retreat(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccessSequence for Vec<T> {
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }

    fn jump(&self, pos: usize, by: usize) -> usize {
        pos + by
    }
}

impl<T> Sequence for VecDeque<T> {
    type Position = usize;
    type Error = Infallible;
    type Capability = strategy::RandomAccess;

    fn advance(&self, pos: usize) -> usize {
        pos + 1
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        VecDeque::swap(self, a, b);
        Ok(())
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    fn retreat(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccessSequence for VecDeque<T> {
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }

    fn jump(&self, pos: usize, by: usize) -> usize {
        pos + by
    }
}

/// Narrows a sequence to single forward steps, so [`crate::rotate`] uses the
/// forward-only strategy on it.
#[derive(Debug)]
pub struct AsForward<'a, S: ?Sized>(pub &'a mut S);

impl<S> Sequence for AsForward<'_, S>
where
    S: Sequence + ?Sized,
{
    type Position = S::Position;
    type Error = S::Error;
    type Capability = strategy::Forward;

    fn advance(&self, pos: Self::Position) -> Self::Position {
        self.0.advance(pos)
    }

    fn swap(
        &mut self,
        a: Self::Position,
        b: Self::Position,
    ) -> Result<(), Self::Error> {
        self.0.swap(a, b)
    }
}

/// Narrows a sequence to forward and backward steps, hiding O(1) distance.
#[derive(Debug)]
pub struct AsBidirectional<'a, S: ?Sized>(pub &'a mut S);

impl<S> Sequence for AsBidirectional<'_, S>
where
    S: BidirectionalSequence + ?Sized,
{
    type Position = S::Position;
    type Error = S::Error;
    type Capability = strategy::Bidirectional;

    fn advance(&self, pos: Self::Position) -> Self::Position {
        self.0.advance(pos)
    }

    fn swap(
        &mut self,
        a: Self::Position,
        b: Self::Position,
    ) -> Result<(), Self::Error> {
        self.0.swap(a, b)
    }
}

impl<S> BidirectionalSequence for AsBidirectional<'_, S>
where
    S: BidirectionalSequence + ?Sized,
{
    fn retreat(&self, pos: Self::Position) -> Self::Position {
        self.0.retreat(pos)
    }
}
