use std::collections::HashSet;
use std::sync::Arc;

use brick_colour_quiz::catalog::{ColorEntry, Dataset};
use brick_colour_quiz::gameplay::{generate_round, QuizError, RandomSource, RoundGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dataset(colours: &[(&str, &str, bool)]) -> Dataset {
    Dataset::new(
        colours.iter()
            .map(|(name, hex, trans)| ColorEntry::from_hex(*name, hex, *trans).unwrap())
            .collect(),
    )
    .unwrap()
}

fn mixed() -> Dataset {
    dataset(&[
        ("Red", "C91A09", false),
        ("Blue", "0055BF", false),
        ("Yellow", "F2CD37", false),
        ("Trans-Clear", "FCFCFC", true),
        ("Trans-Red", "C91A09", true),
    ])
}

/// Always picks the same index (clamped to the range).
struct Fixed(usize);

impl RandomSource for Fixed {
    fn index(&mut self, upper: usize) -> usize {
        self.0.min(upper - 1)
    }
}

#[test]
fn options_hold_the_answer_exactly_once() {
    let ds = dataset(&[
        ("Black", "05131D", false),
        ("White", "FFFFFF", false),
        ("Tan", "E4CD9E", false),
        ("Orange", "FE8A18", false),
        ("Lime", "BBE90B", false),
        ("Dark Red", "720E0F", false),
        ("Medium Azure", "36AEBF", false),
        ("Sand Green", "A0BCAC", false),
    ]);
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..=6 {
        for _ in 0..200 {
            let round = generate_round(&ds, n, &mut rng).unwrap();
            assert_eq!(round.options.len(), n);
            let hits = round.options.iter().filter(|o| **o == round.correct_name).count();
            assert_eq!(hits, 1, "{round:?}");
            let unique: HashSet<_> = round.options.iter().collect();
            assert_eq!(unique.len(), n, "duplicate option in {round:?}");
        }
    }
}

#[test]
fn opaque_answer_draws_only_opaque_distractors() {
    let ds = mixed();
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen_opaque = 0;
    for _ in 0..300 {
        let round = generate_round(&ds, 3, &mut rng).unwrap();
        let correct = ds.find(&round.correct_name).unwrap();
        if correct.is_transparent {
            continue;
        }
        seen_opaque += 1;
        for name in &round.options {
            assert!(!ds.find(name).unwrap().is_transparent, "{round:?}");
        }
    }
    assert!(seen_opaque > 0);
}

#[test]
fn thin_transparent_class_falls_back_to_whole_catalog() {
    let ds = mixed();
    // index 3 is Trans-Clear; only one other transparent colour exists.
    let round = generate_round(&ds, 3, &mut Fixed(3)).unwrap();
    assert_eq!(round.correct_name, "Trans-Clear");
    assert_eq!(round.options.len(), 3);
    assert!(round.options.iter().any(|o| ds.find(o).is_some_and(|e| !e.is_transparent)));
}

#[test]
fn full_catalog_round_is_a_permutation() {
    let ds = dataset(&[
        ("Red", "C91A09", false),
        ("Blue", "0055BF", false),
        ("Green", "237841", false),
        ("Tan", "E4CD9E", false),
    ]);
    let expected: HashSet<&str> = ["Red", "Blue", "Green", "Tan"].into();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let round = generate_round(&ds, 4, &mut rng).unwrap();
        let got: HashSet<&str> = round.options.iter().map(String::as_str).collect();
        assert_eq!(got, expected);
    }
}

#[test]
fn swatch_is_the_answer_colour() {
    let ds = mixed();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let round = generate_round(&ds, 2, &mut rng).unwrap();
        assert_eq!(ds.find(&round.correct_name).unwrap().rgb_hex, round.swatch_color);
    }
}

#[test]
fn generator_rejects_oversized_rounds() {
    let ds = Arc::new(mixed());
    let err = RoundGenerator::new(ds.clone(), 9).unwrap_err();
    assert_eq!(
        err,
        QuizError::InsufficientData {
            available: 5,
            required: 9
        }
    );
    assert!(err.to_string().contains('9'));
    assert!(RoundGenerator::new(ds, 5).is_ok());
}

#[test]
fn seeded_generators_repeat_rounds() {
    let generator = RoundGenerator::new(Arc::new(mixed()), 3).unwrap();
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        assert_eq!(generator.next_round(&mut a), generator.next_round(&mut b));
    }
}
