// This file is part of Brick Colour Quiz.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::QuizFlowSet;
use crate::gameplay::QuizSession;
use crate::interaction::input::QuizInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::palette;
use crate::rendering::quiz_ui::{spawn_quiz_ui, sync_quiz_ui, update_button_hover};

/// Wires the quiz into an app. Expects [`QuizSession`] and
/// [`QuizConfig`](crate::core::config::QuizConfig) resources to be inserted
/// before the app runs.
pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette::BACKGROUND))
            .configure_sets(
                Update,
                (QuizFlowSet::Input, QuizFlowSet::Advance, QuizFlowSet::Present).chain(),
            )
            .add_plugins((QuizInputPlugin, AutoClosePlugin))
            .add_systems(Startup, spawn_quiz_ui)
            .add_systems(
                Update,
                (
                    sync_quiz_ui.run_if(resource_changed::<QuizSession>),
                    update_button_hover,
                )
                    .in_set(QuizFlowSet::Present),
            );
    }
}
