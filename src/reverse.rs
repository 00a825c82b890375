use crate::sequence::BidirectionalSequence;

/// Rotates with three reversals, tracking the result position instead of
/// measuring block lengths.
///
/// Both blocks are reversed in place, then the whole range is reversed from
/// both ends inward until one end reaches `middle`. The unreversed remainder
/// is finished with one more reversal, and the inner end that stopped there is
/// the returned position.
pub fn rotate<S>(
    seq: &mut S,
    mut first: S::Position,
    middle: S::Position,
    mut last: S::Position,
) -> Result<S::Position, S::Error>
where
    S: BidirectionalSequence + ?Sized,
{
    if first == middle {
        return Ok(last);
    }
    if middle == last {
        return Ok(first);
    }

    reverse(seq, first, middle)?;
    reverse(seq, middle, last)?;

    while first != middle && middle != last {
        last = seq.retreat(last);
        seq.swap(first, last)?;
        first = seq.advance(first);
    }

    if first == middle {
        reverse(seq, middle, last)?;
        Ok(last)
    } else {
        reverse(seq, first, middle)?;
        Ok(first)
    }
}

/// Reverses `[first, last)` in place.
pub fn reverse<S>(
    seq: &mut S,
    mut first: S::Position,
    mut last: S::Position,
) -> Result<(), S::Error>
where
    S: BidirectionalSequence + ?Sized,
{
    loop {
        if first == last {
            return Ok(());
        }
        last = seq.retreat(last);
        if first == last {
            return Ok(());
        }
        seq.swap(first, last)?;
        first = seq.advance(first);
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::sequence::AsBidirectional;

    #[test_case(&[1, 2, 3], 0 => (vec![1, 2, 3], 3) ; "No rotation")]
    #[test_case(&[1, 2, 3], 1 => (vec![2, 3, 1], 2) ; "Rotate left once")]
    #[test_case(&[1, 2, 3], 2 => (vec![3, 1, 2], 1) ; "Rotate left twice")]
    #[test_case(&[1, 2, 3], 3 => (vec![1, 2, 3], 0) ; "Full rotation")]
    #[test_case(&[0, 1, 2, 3, 4, 5], 4 => (vec![4, 5, 0, 1, 2, 3], 2) ; "Short suffix")]
    #[test_case(&[0, 1, 2, 3, 4, 5, 6], 3 => (vec![3, 4, 5, 6, 0, 1, 2], 4) ; "Short prefix")]
    fn rotation(s: &[u8], middle: usize) -> (Vec<u8>, usize) {
        let mut s = s.to_vec();
        let len = s.len();

        let pos = rotate(&mut AsBidirectional(&mut s), 0, middle, len).unwrap();

        (s, pos)
    }

    #[test_case(&[], 0, 0 => Vec::<u8>::new() ; "empty")]
    #[test_case(&[1, 2, 3, 4], 0, 4 => vec![4, 3, 2, 1] ; "even")]
    #[test_case(&[1, 2, 3, 4, 5], 1, 4 => vec![1, 4, 3, 2, 5] ; "interior")]
    fn reversal(s: &[u8], first: usize, last: usize) -> Vec<u8> {
        let mut s = s.to_vec();

        reverse(s.as_mut_slice(), first, last).unwrap();

        s
    }
}
