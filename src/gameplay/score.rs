//! Session scoring: rounds, score, streak and the last outcome.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    None,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: u32,
    /// Never exceeds `rounds`.
    pub score: u32,
    pub streak: u32,
    pub last_outcome: Outcome,
    /// True answer of the most recent submission, whatever the outcome.
    pub last_correct_name: Option<String>,
}

impl SessionStats {
    /// `score / rounds`, 0 before the first answer.
    pub fn accuracy(&self) -> f32 {
        if self.rounds == 0 {
            0.0
        } else {
            self.score as f32 / self.rounds as f32
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    stats: SessionStats,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn accuracy(&self) -> f32 {
        self.stats.accuracy()
    }

    /// Records one answer; returns whether it was correct.
    pub fn submit_answer(&mut self, chosen_name: &str, correct_name: &str) -> bool {
        let s = &mut self.stats;
        s.rounds += 1;
        let correct = chosen_name == correct_name;
        if correct {
            s.score += 1;
            s.streak += 1;
            s.last_outcome = Outcome::Correct;
        } else {
            s.streak = 0;
            s.last_outcome = Outcome::Incorrect;
        }
        s.last_correct_name = Some(correct_name.to_string());
        correct
    }
}
