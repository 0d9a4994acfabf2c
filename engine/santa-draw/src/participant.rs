//! Participants and the assignments drawn between them

use crate::error::{DrawError, Result};
use crate::MIN_GROUP_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A member of the group taking part in the draw
///
/// Identity is by value: two participants with the same name and address are
/// the same participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    email: String,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    /// Full display name (e.g. "Alice Martin")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// First token of the display name
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// One giver surprising one receiver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}

impl Assignment {
    pub fn new(giver: Participant, receiver: Participant) -> Self {
        Self { giver, receiver }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver.name(), self.receiver.name())
    }
}

/// The complete outcome of a draw
///
/// Assignments are stored in cycle order: the receiver of each assignment is
/// the giver of the next one, and the last receiver is the first giver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCycle {
    assignments: Vec<Assignment>,
}

impl AssignmentCycle {
    /// Build a cycle from its visiting order, pairing each node with the next
    pub(crate) fn from_order(order: Vec<Participant>) -> Self {
        let size = order.len();
        let assignments = (0..size)
            .map(|i| Assignment::new(order[i].clone(), order[(i + 1) % size].clone()))
            .collect();
        Self { assignments }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    /// Who the given participant has to surprise
    pub fn receiver_of(&self, giver: &Participant) -> Option<&Participant> {
        self.assignments.iter().find(|a| &a.giver == giver).map(|a| &a.receiver)
    }

    /// Givers in the order the cycle visits them
    pub fn order(&self) -> Vec<&Participant> {
        self.assignments.iter().map(|a| &a.giver).collect()
    }

    /// Check the cycle against the participants it was drawn for
    ///
    /// Fails unless every participant gives and receives exactly once, nobody
    /// draws themselves, and the assignments chain into one single cycle.
    pub fn verify(&self, participants: &[Participant]) -> Result<()> {
        let size = self.assignments.len();
        if size < MIN_GROUP_SIZE {
            return Err(DrawError::InvalidCycle(format!("cycle has only {size} assignments")));
        }
        if size != participants.len() {
            return Err(DrawError::InvalidCycle(format!(
                "{} participants but {} assignments",
                participants.len(),
                size
            )));
        }

        for (i, assignment) in self.assignments.iter().enumerate() {
            if assignment.giver == assignment.receiver {
                return Err(DrawError::InvalidCycle(format!(
                    "{} is assigned to themselves",
                    assignment.giver.name()
                )));
            }
            let next = &self.assignments[(i + 1) % size];
            if assignment.receiver != next.giver {
                return Err(DrawError::InvalidCycle(format!(
                    "chain broken after {}: {} receives but {} gives next",
                    assignment.giver.name(),
                    assignment.receiver.name(),
                    next.giver.name()
                )));
            }
        }

        // The chain is closed, so matching givers against the group also covers receivers
        let mut expected: HashMap<&Participant, usize> = HashMap::new();
        for participant in participants {
            *expected.entry(participant).or_default() += 1;
        }
        for assignment in &self.assignments {
            match expected.get_mut(&assignment.giver) {
                Some(count) if *count > 0 => *count -= 1,
                _ => {
                    return Err(DrawError::InvalidCycle(format!(
                        "{} gives more often than they appear in the group",
                        assignment.giver.name()
                    )))
                }
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a AssignmentCycle {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
