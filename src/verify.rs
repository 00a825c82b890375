use std::collections::VecDeque;
use std::fmt::Debug;

use eyre::WrapErr;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::bits::PackedBits;
use crate::config::VerifyConfig;
use crate::sequence::{AsBidirectional, AsForward};
use crate::strategy::{rotate, rotate_with, RandomAccess};

/// Totals over every checked round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rounds: usize,
    pub elements: usize,
    pub bits: usize,
}

impl Report {
    fn merge(self, other: Self) -> Self {
        Self {
            rounds: self.rounds + other.rounds,
            elements: self.elements + other.elements,
            bits: self.bits + other.bits,
        }
    }
}

/// Rotates random inputs with every strategy and checks they agree with a
/// reference rotation, both in contents and in the returned position.
///
/// Each round draws its own seed from `config.rng` up front, so rounds run in
/// parallel yet stay reproducible for seeded sources. `on_round` is called
/// after every successful round.
#[tracing::instrument(skip_all, fields(rounds = config.rounds, rng = %config.rng))]
pub fn run<F>(config: &VerifyConfig, on_round: F) -> eyre::Result<Report>
where
    F: Fn() + Sync,
{
    let seeds = config.rng.round_seeds(config.rounds);

    let report = seeds
        .into_par_iter()
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = check_round(&mut rng, config)
                .wrap_err_with(|| format!("Round seeded with {seed} failed"))?;
            on_round();
            Ok::<_, eyre::Report>(round)
        })
        .try_reduce(Report::default, |a, b| Ok(a.merge(b)))?;

    tracing::info!(?report, "All strategies agree");

    Ok(report)
}

fn check_round<R: Rng>(
    rng: &mut R,
    config: &VerifyConfig,
) -> eyre::Result<Report> {
    let len = rng.gen_range(0..=config.max_len);
    let middle = rng.gen_range(0..=len);
    let original: Vec<u32> = (0..len).map(|_| rng.gen()).collect();

    let mut expected = original.clone();
    expected.rotate_left(middle);
    let expected_pos = if middle == 0 { len } else { len - middle };

    let mut forward = original.clone();
    let pos = rotate(&mut AsForward(&mut forward), 0, middle, len)?;
    ensure_rotated("forward", &forward, pos, &expected, expected_pos)?;

    let mut bidirectional = original.clone();
    let pos = rotate(&mut AsBidirectional(&mut bidirectional), 0, middle, len)?;
    ensure_rotated(
        "bidirectional",
        &bidirectional,
        pos,
        &expected,
        expected_pos,
    )?;

    let mut deque: VecDeque<u32> = original.iter().copied().collect();
    let pos = rotate(&mut deque, 0, middle, len)?;
    ensure_rotated(
        "random-access",
        deque.make_contiguous(),
        pos,
        &expected,
        expected_pos,
    )?;

    // rotating by the complement undoes it
    rotate(&mut deque, 0, len - middle, len)?;
    eyre::ensure!(
        deque.make_contiguous() == original.as_slice(),
        "Rotating {len} elements at {middle} and back did not restore them"
    );

    let bit_len = rng.gen_range(0..=config.max_bits);
    let bit_middle = rng.gen_range(0..=bit_len);
    let bits = PackedBits::random(rng, bit_len);

    let mut reference = bits.to_bitvec();
    reference.rotate_left(bit_middle);
    let expected = PackedBits::from(reference.as_bitslice());
    let expected_pos = if bit_middle == 0 {
        bit_len
    } else {
        bit_len - bit_middle
    };

    let mut packed = bits.clone();
    let pos = rotate(&mut packed, 0, bit_middle, bit_len)?;
    eyre::ensure!(
        packed == expected,
        "bit-packed rotation produced {packed}, expected {expected}"
    );
    eyre::ensure!(
        pos == expected_pos,
        "bit-packed rotation returned {pos}, expected {expected_pos}"
    );

    let mut per_bit = bits;
    rotate_with::<RandomAccess, _>(&mut per_bit, 0, bit_middle, bit_len)?;
    eyre::ensure!(
        per_bit == packed,
        "Per-bit and packed rotation of {bit_len} bits at {bit_middle} differ"
    );

    Ok(Report {
        rounds: 1,
        elements: len,
        bits: bit_len,
    })
}

fn ensure_rotated<T: PartialEq + Debug>(
    strategy: &str,
    actual: &[T],
    pos: usize,
    expected: &[T],
    expected_pos: usize,
) -> eyre::Result<()> {
    eyre::ensure!(
        actual == expected,
        "{strategy} rotation produced {actual:?}, expected {expected:?}"
    );
    eyre::ensure!(
        pos == expected_pos,
        "{strategy} rotation returned {pos}, expected {expected_pos}"
    );

    Ok(())
}
