use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::core::system::system_order::QuizFlowSet;
use crate::gameplay::QuizSession;
use crate::rendering::layout::Viewport;

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const NUMPAD_KEYS: [KeyCode; 9] = [
    KeyCode::Numpad1,
    KeyCode::Numpad2,
    KeyCode::Numpad3,
    KeyCode::Numpad4,
    KeyCode::Numpad5,
    KeyCode::Numpad6,
    KeyCode::Numpad7,
    KeyCode::Numpad8,
    KeyCode::Numpad9,
];

pub struct QuizInputPlugin;

impl Plugin for QuizInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (handle_window_resize, handle_answer_keys, handle_answer_clicks, handle_quit_key)
                    .chain()
                    .in_set(QuizFlowSet::Input),
                tick_feedback.in_set(QuizFlowSet::Advance),
            ),
        );
    }
}

/// First option index whose key (top row or numpad) was pressed this frame.
pub fn answer_from_keys(keys: &ButtonInput<KeyCode>, choice_count: usize) -> Option<usize> {
    (0..choice_count.min(9)).find(|&i| keys.just_pressed(DIGIT_KEYS[i]) || keys.just_pressed(NUMPAD_KEYS[i]))
}

pub fn handle_window_resize(mut events: EventReader<WindowResized>, mut session: ResMut<QuizSession>) {
    // only the latest size matters
    let Some(ev) = events.read().last() else {
        return;
    };
    let viewport = Viewport::from_logical(ev.width, ev.height);
    if session.layout().viewport != viewport {
        session.resize(viewport);
    }
}

pub fn handle_answer_keys(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<QuizSession>) {
    if session.feedback().is_some() {
        return;
    }
    if let Some(index) = answer_from_keys(&keys, session.choice_count()) {
        session.answer(index);
    }
}

pub fn handle_answer_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut session: ResMut<QuizSession>,
) {
    if !buttons.just_pressed(MouseButton::Left) || session.feedback().is_some() {
        return;
    }
    let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };
    if let Some(index) = session.layout().button_at(cursor.x, cursor.y) {
        session.answer(index);
    }
}

pub fn handle_quit_key(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!(target: "quiz", "Escape pressed, requesting app exit");
        exit.write(AppExit::Success);
    }
}

/// Counts down feedback; reads through `Deref` first so idle frames do not
/// flag the session as changed.
pub fn tick_feedback(mut session: ResMut<QuizSession>) {
    if session.feedback().is_some() {
        session.tick();
    }
}
