//! Participant list loading
//!
//! The list is plain text with one name per line. Surrounding whitespace is
//! trimmed, blank lines are skipped and lines starting with `#` are comments.
//! Two lines that derive the same address are rejected, whether the names match
//! exactly or only differ in case or spacing: both would reach one mailbox, so
//! that person could end up drawing themselves.

use crate::config::LoaderConfig;
use crate::error::{DrawError, Result};
use crate::participant::Participant;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const COMMENT_PREFIX: char = '#';

/// Builds participants from raw names
#[derive(Debug, Clone)]
pub struct ParticipantLoader {
    config: LoaderConfig,
}

impl ParticipantLoader {
    /// Create a loader, validating its configuration
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load participants from a file
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Participant>> {
        let path = path.as_ref();
        info!("Loading participants from: {:?}", path);

        let file = File::open(path)
            .map_err(|source| DrawError::Io { path: path.to_path_buf(), source })?;

        self.load_from_reader(BufReader::new(file)).map_err(|err| match err {
            DrawError::Io { source, .. } => DrawError::Io { path: path.to_path_buf(), source },
            other => other,
        })
    }

    /// Load participants from any buffered reader
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Participant>> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|source| DrawError::Io { path: "<reader>".into(), source })?;

        self.parse_lines(lines.iter().map(String::as_str))
    }

    /// Build one participant per non-blank, non-comment line
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Vec<Participant>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut participants = Vec::new();
        let mut seen = HashSet::new();

        for line in lines {
            let name = line.trim();
            if name.is_empty() || name.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let email = self.derive_email(name);
            if !seen.insert(email.clone()) {
                return Err(DrawError::DuplicateParticipant { name: name.to_string() });
            }

            let participant = Participant::new(name, email);
            debug!("Loaded participant {}", participant);
            participants.push(participant);
        }

        if participants.is_empty() {
            return Err(DrawError::config("participant list yields no participants"));
        }

        info!("Loaded {} participants", participants.len());
        Ok(participants)
    }

    /// Contact address derived from a display name
    ///
    /// "Alice Martin" becomes "alice.martin@<domain>" with the default settings.
    pub fn derive_email(&self, name: &str) -> String {
        let local = name.split_whitespace().collect::<Vec<_>>().join(&self.config.separator);
        let local = if self.config.lowercase { local.to_lowercase() } else { local };
        format!("{}@{}", local, self.config.normalized_domain())
    }
}
