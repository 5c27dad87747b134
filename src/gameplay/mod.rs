//! Quiz gameplay core: round generation, scoring and the session that ties
//! them to the layout.

pub mod random;
pub mod round;
pub mod score;
pub mod session;

pub use random::RandomSource;
pub use round::{generate_round, QuizError, Round, RoundGenerator};
pub use score::{Outcome, ScoreTracker, SessionStats};
pub use session::{ButtonHighlight, Feedback, QuizSession, SessionSettings};
