use crate::sequence::RandomAccessSequence;

/// Rotates by following the `gcd(left, right)` orbits of the permutation
/// `i -> (i + left) mod n`.
///
/// Every orbit carries one element in flight: the element that started at the
/// orbit's leader. Each step pulls the element `left` slots ahead into the
/// current slot, parking the in-flight element in the slot just vacated, so
/// every slot is settled exactly once. When the orbit wraps back to its
/// leader the in-flight element is already in the last slot.
///
/// No temporary is held outside the sequence: each orbit of length `m` takes
/// `m - 1` swaps instead of `m + 1` moves through a temporary, for `n - g`
/// swaps in total.
pub fn rotate<S>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
) -> Result<S::Position, S::Error>
where
    S: RandomAccessSequence + ?Sized,
{
    if first == middle {
        return Ok(last);
    }
    if middle == last {
        return Ok(first);
    }

    let left = seq.distance(first, middle);
    let right = seq.distance(middle, last);

    if left == right {
        swap_ranges(seq, first, middle, left)?;
        return Ok(middle);
    }

    let len = left + right;
    for leader in 0..gcd(left, right) {
        let mut slot = leader;
        loop {
            let mut source = slot + left;
            if source >= len {
                source -= len;
            }
            if source == leader {
                break;
            }

            let (to, from) = (seq.jump(first, slot), seq.jump(first, source));
            seq.swap(to, from)?;
            slot = source;
        }
    }

    Ok(seq.jump(first, right))
}

fn swap_ranges<S>(
    seq: &mut S,
    mut a: S::Position,
    mut b: S::Position,
    count: usize,
) -> Result<(), S::Error>
where
    S: RandomAccessSequence + ?Sized,
{
    for _ in 0..count {
        seq.swap(a, b)?;
        a = seq.advance(a);
        b = seq.advance(b);
    }
    Ok(())
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
