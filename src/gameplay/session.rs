//! Quiz session: one generator, one tracker, the live round, its layout and
//! the post-answer feedback countdown.
//!
//! Frame contract: input calls [`QuizSession::answer`] / [`QuizSession::resize`],
//! then [`QuizSession::tick`] runs once, then the renderer reads the session.

use bevy::prelude::*;
use rand::rngs::StdRng;
use std::sync::Arc;

use super::random::RandomSource;
use super::round::{QuizError, Round, RoundGenerator};
use super::score::{ScoreTracker, SessionStats};
use crate::catalog::Dataset;
use crate::core::config::QuizRulesConfig;
use crate::rendering::layout::{self, FontSizes, LayoutGeometry, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub choices: usize,
    pub feedback_frames: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        (&QuizRulesConfig::default()).into()
    }
}

impl From<&QuizRulesConfig> for SessionSettings {
    fn from(cfg: &QuizRulesConfig) -> Self {
        Self {
            choices: cfg.choices,
            feedback_frames: cfg.feedback_frames,
        }
    }
}

/// Pending post-answer state; the round advances when `frames_left` hits 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub selected: usize,
    pub correct: bool,
    pub frames_left: u32,
}

/// Border state of one answer button while feedback is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonHighlight {
    #[default]
    None,
    Correct,
    Wrong,
}

#[derive(Resource)]
pub struct QuizSession<R: RandomSource = StdRng> {
    generator: RoundGenerator,
    tracker: ScoreTracker,
    round: Round,
    layout: LayoutGeometry,
    fonts: FontSizes,
    feedback: Option<Feedback>,
    feedback_frames: u32,
    rng: R,
}

impl<R: RandomSource> QuizSession<R> {
    /// Fails before any round exists when the dataset cannot fill `settings.choices`.
    pub fn new(
        dataset: Arc<Dataset>,
        settings: SessionSettings,
        viewport: Viewport,
        mut rng: R,
    ) -> Result<Self, QuizError> {
        let generator = RoundGenerator::new(dataset, settings.choices)?;
        let round = generator.next_round(&mut rng);
        let fonts = FontSizes::for_viewport_height(viewport.height);
        let layout = layout::compute(viewport, settings.choices, &fonts.metrics());
        info!(
            target: "quiz",
            "Session started: {} colours, {} choices, viewport {}x{}",
            generator.dataset().len(),
            settings.choices,
            viewport.width,
            viewport.height
        );
        Ok(Self {
            generator,
            tracker: ScoreTracker::new(),
            round,
            layout,
            fonts,
            feedback: None,
            feedback_frames: settings.feedback_frames.max(1),
            rng,
        })
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn stats(&self) -> &SessionStats {
        self.tracker.stats()
    }

    pub fn layout(&self) -> &LayoutGeometry {
        &self.layout
    }

    pub fn fonts(&self) -> &FontSizes {
        &self.fonts
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn choice_count(&self) -> usize {
        self.generator.choice_count()
    }

    /// Submits option `index` of the current round. Ignored (returns `None`)
    /// for out-of-range indices and while feedback is pending.
    pub fn answer(&mut self, index: usize) -> Option<bool> {
        if self.feedback.is_some() {
            return None;
        }
        let chosen = self.round.option(index)?.to_string();
        let correct = self.tracker.submit_answer(&chosen, &self.round.correct_name);
        let stats = self.tracker.stats();
        info!(
            target: "quiz",
            "Answer #{} '{}' -> {} (expected '{}') score={} streak={}",
            stats.rounds,
            chosen,
            if correct { "correct" } else { "incorrect" },
            self.round.correct_name,
            stats.score,
            stats.streak
        );
        self.feedback = Some(Feedback {
            selected: index,
            correct,
            frames_left: self.feedback_frames,
        });
        Some(correct)
    }

    /// Consumes one frame of the feedback countdown. Returns `true` on the
    /// frame the next round replaces the current one.
    pub fn tick(&mut self) -> bool {
        let Some(fb) = self.feedback.as_mut() else {
            return false;
        };
        fb.frames_left = fb.frames_left.saturating_sub(1);
        if fb.frames_left > 0 {
            return false;
        }
        self.advance();
        true
    }

    /// Drops any pending feedback and starts a fresh round.
    pub fn advance(&mut self) {
        self.feedback = None;
        self.round = self.generator.next_round(&mut self.rng);
        debug!(target: "quiz", "Next round: {} options", self.round.options.len());
    }

    /// Recomputes fonts and layout; round and score are untouched.
    /// Returns `false` when the viewport did not change.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.layout.viewport {
            return false;
        }
        self.fonts = FontSizes::for_viewport_height(viewport.height);
        self.layout = layout::compute(viewport, self.choice_count(), &self.fonts.metrics());
        debug!(
            target: "layout",
            "Resize {}x{}: button_h={} gap={} overflow={:?}",
            viewport.width,
            viewport.height,
            self.layout.button_height,
            self.layout.gap,
            self.layout.overflow
        );
        true
    }

    /// Feedback border for button `index`: the true answer turns green, a
    /// wrongly picked button turns red.
    pub fn highlight(&self, index: usize) -> ButtonHighlight {
        let Some(fb) = self.feedback else {
            return ButtonHighlight::None;
        };
        let is_answer = match (self.round.option(index), self.stats().last_correct_name.as_deref()) {
            (Some(option), Some(answer)) => option == answer,
            _ => false,
        };
        if is_answer {
            ButtonHighlight::Correct
        } else if index == fb.selected {
            ButtonHighlight::Wrong
        } else {
            ButtonHighlight::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorEntry;
    use crate::gameplay::random::scripted::ScriptedSource;
    use crate::gameplay::score::Outcome;

    fn dataset() -> Arc<Dataset> {
        let names = ["Red", "Blue", "Yellow", "Green", "Tan"];
        Arc::new(
            Dataset::new(
                names
                    .iter()
                    .map(|n| ColorEntry::from_hex(*n, "123456", false).unwrap())
                    .collect(),
            )
            .unwrap(),
        )
    }

    fn session(frames: u32) -> QuizSession<ScriptedSource> {
        let settings = SessionSettings {
            choices: 3,
            feedback_frames: frames,
        };
        QuizSession::new(dataset(), settings, Viewport::new(1200, 800), ScriptedSource::new([])).unwrap()
    }

    #[test]
    fn insufficient_data_fails_before_first_round() {
        let settings = SessionSettings {
            choices: 6,
            feedback_frames: 10,
        };
        let mut rng = ScriptedSource::new([]);
        let err = QuizSession::new(dataset(), settings, Viewport::new(1200, 800), &mut rng)
            .err()
            .unwrap();
        assert_eq!(
            err,
            QuizError::InsufficientData {
                available: 5,
                required: 6
            }
        );
        assert!(rng.calls.is_empty(), "no round may be generated");
    }

    #[test]
    fn answer_then_countdown_advances_exactly_once() {
        let mut s = session(3);
        let correct = s.round().correct_index().unwrap();
        assert_eq!(s.answer(correct), Some(true));
        assert_eq!(s.stats().last_outcome, Outcome::Correct);
        // locked while feedback shows
        assert_eq!(s.answer(correct), None);
        assert_eq!(s.stats().rounds, 1);
        assert!(!s.tick());
        assert!(!s.tick());
        assert!(s.tick());
        assert!(s.feedback().is_none());
        assert!(!s.tick());
        assert_eq!(s.stats().rounds, 1);
    }

    #[test]
    fn highlights_reveal_answer_and_wrong_pick() {
        let mut s = session(5);
        let correct = s.round().correct_index().unwrap();
        let wrong = (correct + 1) % 3;
        let other = (correct + 2) % 3;
        assert_eq!(s.highlight(correct), ButtonHighlight::None);
        assert_eq!(s.answer(wrong), Some(false));
        assert_eq!(s.highlight(correct), ButtonHighlight::Correct);
        assert_eq!(s.highlight(wrong), ButtonHighlight::Wrong);
        assert_eq!(s.highlight(other), ButtonHighlight::None);
        assert_eq!(s.stats().streak, 0);
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut s = session(5);
        assert_eq!(s.answer(3), None);
        assert_eq!(s.stats().rounds, 0);
        assert!(s.feedback().is_none());
    }

    #[test]
    fn resize_keeps_round_and_score() {
        let mut s = session(5);
        let correct = s.round().correct_index().unwrap();
        s.answer(correct);
        let round = s.round().clone();
        let stats = s.stats().clone();
        assert!(s.resize(Viewport::new(900, 1000)));
        assert!(!s.resize(Viewport::new(900, 1000)));
        assert_eq!(*s.round(), round);
        assert_eq!(*s.stats(), stats);
        assert_eq!(s.layout().viewport, Viewport::new(900, 1000));
        assert_eq!(s.fonts().title, 57.0);
        assert!(s.feedback().is_some());
    }

    #[test]
    fn zero_feedback_frames_still_shows_one_frame() {
        let mut s = session(0);
        s.answer(0);
        assert!(s.feedback().is_some());
        assert!(s.tick());
    }
}
