//! # Santa Draw
//!
//! Turns a list of names into participants and draws who surprises whom.
//!
//! The draw produces a single cycle through the whole group: every participant
//! gives exactly one gift, receives exactly one gift, and never draws themselves.
//! Following the chain of receivers from anyone visits everybody before coming
//! back to the start.
//!
//! ## Usage
//!
//! ```rust
//! use santa_draw::{AssignmentGenerator, LoaderConfig, ParticipantLoader};
//!
//! let loader = ParticipantLoader::new(LoaderConfig::with_domain("example.org")).unwrap();
//! let participants = loader.parse_lines(["Alice", "Bob", "Carol"]).unwrap();
//!
//! let cycle = AssignmentGenerator::seeded(7).generate(&participants).unwrap();
//! cycle.verify(&participants).unwrap();
//! assert_eq!(cycle.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod participant;

#[cfg(test)]
mod tests;

pub use config::{DrawConfig, LoaderConfig};
pub use error::{DrawError, Result};
pub use generator::{generate_assignments, AssignmentGenerator};
pub use loader::ParticipantLoader;
pub use participant::{Assignment, AssignmentCycle, Participant};

/// Smallest group for which a draw exists
pub const MIN_GROUP_SIZE: usize = 2;

/// Default separator placed between name parts in derived addresses
pub const DEFAULT_NAME_SEPARATOR: &str = ".";

/// Default location of the participant list
pub const DEFAULT_PARTICIPANTS_FILE: &str = "data/participants.txt";

/// Participants together with the cycle drawn for them
#[derive(Debug, Clone)]
pub struct Draw {
    pub participants: Vec<Participant>,
    pub cycle: AssignmentCycle,
}

/// Load the configured participant list and draw a verified cycle for it
pub fn run_draw(config: &DrawConfig) -> Result<Draw> {
    let loader = ParticipantLoader::new(config.loader.clone())?;
    let participants = loader.load_from_file(&config.participants_file)?;

    let cycle = config.generator().generate(&participants)?;
    cycle.verify(&participants)?;

    Ok(Draw { participants, cycle })
}
