//! Round generation: one correct colour plus plausible distractors.

use bevy::prelude::*; // For logging macros only
use std::fmt;
use std::sync::Arc;

use super::random::{sample_distinct, sample_with_replacement, shuffle, RandomSource};
use crate::catalog::Dataset;

/// One quiz question. Replaced wholesale each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Hex of the correct entry (`RRGGBB`).
    pub swatch_color: String,
    pub correct_name: String,
    /// Shuffled names; contains `correct_name` exactly once.
    pub options: Vec<String>,
}

impl Round {
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_name)
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Fewer catalog colours than answer buttons.
    InsufficientData { available: usize, required: usize },
    NoChoices,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { available, required } => write!(
                f,
                "not enough colours to build a quiz after filtering: {available} available, {required} choices required"
            ),
            Self::NoChoices => write!(f, "a round needs at least one choice"),
        }
    }
}

impl std::error::Error for QuizError {}

fn check_capacity(dataset: &Dataset, choice_count: usize) -> Result<(), QuizError> {
    if choice_count == 0 {
        return Err(QuizError::NoChoices);
    }
    if dataset.len() < choice_count {
        return Err(QuizError::InsufficientData {
            available: dataset.len(),
            required: choice_count,
        });
    }
    Ok(())
}

/// Builds rounds from a shared dataset. Capacity is validated once, at construction.
#[derive(Debug, Clone)]
pub struct RoundGenerator {
    dataset: Arc<Dataset>,
    choice_count: usize,
}

impl RoundGenerator {
    pub fn new(dataset: Arc<Dataset>, choice_count: usize) -> Result<Self, QuizError> {
        check_capacity(&dataset, choice_count)?;
        Ok(Self {
            dataset,
            choice_count,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn choice_count(&self) -> usize {
        self.choice_count
    }

    pub fn next_round<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Round {
        build_round(&self.dataset, self.choice_count, rng)
    }
}

/// One-shot variant of [`RoundGenerator::next_round`] that checks capacity itself.
pub fn generate_round<R: RandomSource + ?Sized>(
    dataset: &Dataset,
    choice_count: usize,
    rng: &mut R,
) -> Result<Round, QuizError> {
    check_capacity(dataset, choice_count)?;
    Ok(build_round(dataset, choice_count, rng))
}

// Caller has checked `1 <= choice_count <= dataset.len()`.
fn build_round<R: RandomSource + ?Sized>(dataset: &Dataset, choice_count: usize, rng: &mut R) -> Round {
    let entries = dataset.entries();
    let correct_idx = rng.index(entries.len());
    let correct = &entries[correct_idx];
    let need = choice_count - 1;

    let others: Vec<&str> = entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != correct_idx)
        .map(|(_, e)| e.name.as_str())
        .collect();
    let mut pool: Vec<&str> = entries
        .iter()
        .enumerate()
        .filter(|(i, e)| *i != correct_idx && e.is_transparent == correct.is_transparent)
        .map(|(_, e)| e.name.as_str())
        .collect();
    if pool.len() < need {
        debug!(
            target: "quiz",
            "Round: only {} {} distractors for {} slots; using the whole catalog",
            pool.len(),
            if correct.is_transparent { "transparent" } else { "opaque" },
            need
        );
        pool = others;
    }

    let distractors = if pool.len() >= need {
        sample_distinct(rng, &pool, need)
    } else {
        sample_with_replacement(rng, &pool, need)
    };

    let mut options = Vec::with_capacity(choice_count);
    options.push(correct.name.clone());
    options.extend(distractors.into_iter().map(String::from));
    shuffle(rng, &mut options);

    Round {
        swatch_color: correct.rgb_hex.clone(),
        correct_name: correct.name.clone(),
        options,
    }
}
