//! Unit tests for the draw

use std::collections::{HashMap, HashSet};
use std::io::Write;

use crate::{
    generate_assignments, run_draw, AssignmentCycle, AssignmentGenerator, DrawConfig, DrawError,
    LoaderConfig, Participant, ParticipantLoader, MIN_GROUP_SIZE,
};

fn create_group(names: &[&str]) -> Vec<Participant> {
    ParticipantLoader::new(LoaderConfig::with_domain("example.org"))
        .unwrap()
        .parse_lines(names.iter().copied())
        .unwrap()
}

fn numbered_group(size: usize) -> Vec<Participant> {
    (0..size)
        .map(|i| Participant::new(format!("Person {i}"), format!("p{i}@example.org")))
        .collect()
}

/// Walk receivers from the first giver and count how many distinct people are visited
fn cycle_length(cycle: &AssignmentCycle) -> usize {
    let receivers: HashMap<&Participant, &Participant> =
        cycle.iter().map(|a| (&a.giver, &a.receiver)).collect();
    let start = &cycle.assignments()[0].giver;

    let mut seen = HashSet::new();
    let mut current = start;
    loop {
        if !seen.insert(current) {
            break;
        }
        current = receivers[current];
    }
    assert_eq!(current, start, "walk must return to its starting point");
    seen.len()
}

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn test_three_people_form_one_cycle() {
        let group = create_group(&["Alice", "Bob", "Carol"]);
        let cycle = AssignmentGenerator::from_entropy().generate(&group).unwrap();

        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle_length(&cycle), 3);
        for assignment in &cycle {
            assert_ne!(assignment.giver, assignment.receiver);
        }

        let givers: HashSet<&Participant> = cycle.iter().map(|a| &a.giver).collect();
        let receivers: HashSet<&Participant> = cycle.iter().map(|a| &a.receiver).collect();
        let everyone: HashSet<&Participant> = group.iter().collect();
        assert_eq!(givers, everyone);
        assert_eq!(receivers, everyone);
    }

    #[test]
    fn test_two_people_swap() {
        let group = create_group(&["Alice", "Bob"]);

        for seed in 0..20 {
            let cycle = AssignmentGenerator::seeded(seed).generate(&group).unwrap();
            assert_eq!(cycle.receiver_of(&group[0]), Some(&group[1]));
            assert_eq!(cycle.receiver_of(&group[1]), Some(&group[0]));
        }
    }

    #[test]
    fn test_too_small_groups_are_rejected() {
        let mut generator = AssignmentGenerator::seeded(1);

        let err = generator.generate(&[]).unwrap_err();
        assert!(matches!(err, DrawError::InvalidGroupSize { size: 0 }));

        let err = generator.generate(&create_group(&["Alice"])).unwrap_err();
        assert!(matches!(err, DrawError::InvalidGroupSize { size: 1 }));
        assert!(!err.is_configuration());
        assert!(err.to_string().contains(&MIN_GROUP_SIZE.to_string()));
    }

    #[test]
    fn test_repeated_participant_is_rejected() {
        let alice = Participant::new("Alice", "alice@example.org");
        let bob = Participant::new("Bob", "bob@example.org");
        let group = vec![alice.clone(), alice, bob];

        for seed in 0..50 {
            let err = AssignmentGenerator::seeded(seed).generate(&group).unwrap_err();
            assert!(matches!(
                err,
                DrawError::DuplicateParticipant { ref name } if name == "Alice"
            ));
        }
    }

    #[test]
    fn test_same_seed_same_cycle() {
        let group = numbered_group(12);
        let first = AssignmentGenerator::seeded(42).generate(&group).unwrap();
        let second = AssignmentGenerator::seeded(42).generate(&group).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_draws_vary() {
        let group = create_group(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
        let mut generator = AssignmentGenerator::from_entropy();

        let mut distinct = HashSet::new();
        for _ in 0..200 {
            let cycle = generator.generate(&group).unwrap();
            let mut pairs: Vec<(String, String)> = cycle
                .iter()
                .map(|a| (a.giver.name().to_string(), a.receiver.name().to_string()))
                .collect();
            pairs.sort();
            distinct.insert(pairs);
        }

        // 24 distinct 5-cycles exist; 200 draws landing on a single one is not a real outcome
        assert!(distinct.len() > 1, "expected varied cycles, got {}", distinct.len());
    }

    #[test]
    fn test_both_directions_occur_for_three() {
        let group = create_group(&["Alice", "Bob", "Carol"]);
        let mut generator = AssignmentGenerator::from_entropy();

        let mut alice_gives_to = HashSet::new();
        for _ in 0..200 {
            let cycle = generator.generate(&group).unwrap();
            alice_gives_to.insert(cycle.receiver_of(&group[0]).unwrap().name().to_string());
        }
        assert_eq!(alice_gives_to.len(), 2);
    }

    #[test]
    fn test_free_function_with_thread_rng() {
        let group = numbered_group(6);
        let cycle = generate_assignments(&group, &mut rand::thread_rng()).unwrap();
        assert_eq!(cycle_length(&cycle), 6);
        cycle.verify(&group).unwrap();
    }
}

#[cfg(test)]
mod draw_tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_draw_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Alice Martin\nBob Stone\n\nCarol King").unwrap();

        let config = DrawConfig {
            participants_file: file.path().to_path_buf(),
            seed: Some(7),
            loader: LoaderConfig::with_domain("example.org"),
        };

        let draw = run_draw(&config).unwrap();
        assert_eq!(draw.participants.len(), 3);
        assert_eq!(draw.cycle.len(), 3);
        assert_eq!(cycle_length(&draw.cycle), 3);
    }

    #[test]
    fn test_run_draw_single_participant() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Alice").unwrap();

        let config = DrawConfig {
            participants_file: file.path().to_path_buf(),
            seed: None,
            loader: LoaderConfig::with_domain("example.org"),
        };

        assert!(matches!(run_draw(&config), Err(DrawError::InvalidGroupSize { size: 1 })));
    }

    #[test]
    fn test_draw_config_defaults() {
        let config = DrawConfig::default();
        assert_eq!(config.participants_file.to_str(), Some(crate::DEFAULT_PARTICIPANTS_FILE));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_err(), "no domain configured by default");

        let config = DrawConfig { loader: LoaderConfig::with_domain("example.org"), ..config };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cycle_serializes() {
        let group = create_group(&["Alice", "Bob"]);
        let cycle = AssignmentGenerator::seeded(3).generate(&group).unwrap();

        let json = serde_json::to_string(&cycle).unwrap();
        let restored: AssignmentCycle = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cycle);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_every_draw_is_a_single_cycle(size in 2usize..40, seed in any::<u64>()) {
            let group = numbered_group(size);
            let cycle = AssignmentGenerator::seeded(seed).generate(&group).unwrap();

            prop_assert_eq!(cycle.len(), size);
            prop_assert_eq!(cycle_length(&cycle), size);
            prop_assert!(cycle.iter().all(|a| a.giver != a.receiver));
            prop_assert!(cycle.verify(&group).is_ok());
        }
    }
}
