//! Random single-cycle assignment
//!
//! The cycle is built as a self-avoiding random walk over the complete graph of
//! participants:
//!
//! 1. every participant gets its own shuffled list of all *other* participants
//! 2. the walk starts from a uniformly chosen participant
//! 3. from the last placed participant, the first candidate not yet visited is
//!    taken next
//! 4. once everybody is placed, the last participant gives to the first one
//!
//! The scan can only come up empty when every other participant is already
//! visited, which is exactly when the walk is complete, so it never gets stuck
//! for two or more participants.
//!
//! The walk does not sample uniformly among all Hamiltonian cycles: taking the
//! first unvisited candidate skews the distribution. Every cycle it returns is
//! valid.

use crate::error::{DrawError, Result};
use crate::participant::{AssignmentCycle, Participant};
use crate::MIN_GROUP_SIZE;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// Draws assignment cycles from its own randomness source
#[derive(Debug, Clone)]
pub struct AssignmentGenerator<R> {
    rng: R,
}

impl AssignmentGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> AssignmentGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a new cycle for the group
    pub fn generate(&mut self, participants: &[Participant]) -> Result<AssignmentCycle> {
        generate_assignments(participants, &mut self.rng)
    }
}

/// Draw a single cycle covering every participant exactly once
///
/// Fails before touching the randomness source with
/// `DrawError::InvalidGroupSize` for fewer than two participants, and with
/// `DrawError::DuplicateParticipant` when the same participant appears twice.
pub fn generate_assignments<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
) -> Result<AssignmentCycle> {
    let size = participants.len();
    if size < MIN_GROUP_SIZE {
        return Err(DrawError::InvalidGroupSize { size });
    }

    // Indices are distinct, values must be too or a giver could draw their twin
    let mut distinct = HashSet::with_capacity(size);
    if let Some(twin) = participants.iter().find(|participant| !distinct.insert(*participant)) {
        return Err(DrawError::DuplicateParticipant { name: twin.name().to_string() });
    }

    // Candidate receivers per participant, by index
    let mut candidates: Vec<Vec<usize>> = Vec::with_capacity(size);
    for node in 0..size {
        let mut others: Vec<usize> = (0..size).filter(|&other| other != node).collect();
        others.shuffle(rng);
        candidates.push(others);
    }

    let start = rng.gen_range(0..size);
    let mut visited = vec![false; size];
    let mut sequence = Vec::with_capacity(size);
    visited[start] = true;
    sequence.push(start);

    while sequence.len() < size {
        let last = sequence[sequence.len() - 1];
        let next = candidates[last]
            .iter()
            .copied()
            .find(|&candidate| !visited[candidate])
            .ok_or_else(|| {
                DrawError::Internal(format!("no unvisited candidate left for participant #{last}"))
            })?;

        visited[next] = true;
        sequence.push(next);
    }

    debug!("Drew cycle over {} participants starting at #{}", size, start);

    let order = sequence.into_iter().map(|index| participants[index].clone()).collect();
    Ok(AssignmentCycle::from_order(order))
}
