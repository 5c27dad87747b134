use crate::core::config::QuizConfig;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits after `window.autoClose` seconds when that is positive. Used for
/// unattended smoke runs.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_autoclose).add_systems(
            Update,
            exit_when_elapsed.run_if(resource_exists::<AutoCloseTimer>),
        );
    }
}

fn arm_autoclose(mut commands: Commands, cfg: Res<QuizConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "quiz", seconds = secs, "AutoClose: quiz will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn exit_when_elapsed(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!(target: "quiz", "AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
