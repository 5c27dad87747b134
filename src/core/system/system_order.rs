//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Input (resize, answer keys / clicks, quit)
//! 2. Advance (feedback countdown, round transition)
//! 3. Present (UI nodes read session state)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum QuizFlowSet {
    Input,
    Advance,
    Present,
}
