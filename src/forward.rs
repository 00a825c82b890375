use crate::sequence::Sequence;

/// Rotates by swapping the two blocks in lockstep, re-solving the leftover
/// boundary whenever the shorter block runs out.
///
/// Only [`Sequence::advance`] and [`Sequence::swap`] are used, so block
/// lengths are never computed. The returned position is found by walking:
/// it is where `first` stands when the first pass reaches `last`.
pub fn rotate<S>(
    seq: &mut S,
    mut first: S::Position,
    mut middle: S::Position,
    last: S::Position,
) -> Result<S::Position, S::Error>
where
    S: Sequence + ?Sized,
{
    if first == middle {
        return Ok(last);
    }
    if middle == last {
        return Ok(first);
    }

    let mut next = middle;
    loop {
        seq.swap(first, next)?;
        first = seq.advance(first);
        next = seq.advance(next);
        if next == last {
            break;
        }
        if first == middle {
            middle = next;
        }
    }

    let result = first;

    // [first, middle) still has to move behind [middle, last)
    if first != middle {
        next = middle;
        loop {
            seq.swap(first, next)?;
            first = seq.advance(first);
            next = seq.advance(next);
            if next == last {
                if first == middle {
                    break;
                }
                next = middle;
            } else if first == middle {
                middle = next;
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::sequence::AsForward;

    #[test_case(&[0, 1, 2, 3], 1 => (vec![1, 2, 3, 0], 3) ; "short prefix")]
    #[test_case(&[0, 1, 2, 3, 4, 5], 4 => (vec![4, 5, 0, 1, 2, 3], 2) ; "short suffix")]
    #[test_case(&[0, 1, 2, 3, 4, 5], 3 => (vec![3, 4, 5, 0, 1, 2], 3) ; "equal halves")]
    #[test_case(&[0, 1, 2, 3, 4], 2 => (vec![2, 3, 4, 0, 1], 3) ; "uneven halves")]
    #[test_case(&[0, 1, 2], 0 => (vec![0, 1, 2], 3) ; "middle at first")]
    #[test_case(&[0, 1, 2], 3 => (vec![0, 1, 2], 0) ; "middle at last")]
    fn rotation(s: &[u8], middle: usize) -> (Vec<u8>, usize) {
        let mut s = s.to_vec();
        let len = s.len();

        let pos = rotate(&mut AsForward(&mut s), 0, middle, len).unwrap();

        (s, pos)
    }

    #[test]
    fn sub_range_leaves_outside_untouched() {
        let mut s: Vec<u8> = (0..10).collect();

        let pos = rotate(&mut AsForward(&mut s), 2, 5, 8).unwrap();

        assert_eq!(s, [0, 1, 5, 6, 7, 2, 3, 4, 8, 9]);
        assert_eq!(pos, 5);
    }
}
