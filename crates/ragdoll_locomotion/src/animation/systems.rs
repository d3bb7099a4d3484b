//! ECS интеграция: LocomotionPlugin + система резолва target'ов
//!
//! Physics слой пишет EnvironmentState, мы пишем LocomotionTargets.
//! Bypass для discrete анимаций делает потребитель (смотрит AnimationState).

use bevy::prelude::*;

use super::AnimController;
use crate::components::{CharacterCapabilities, EnvironmentState, LocomotionTargets};
use crate::logger::{log_info, DiagnosticsSink, LoggerSink};
use crate::params::LocomotionProfile;
use crate::FIXED_TICK_HZ;

/// Diagnostics канал для контроллеров (default — глобальный logger)
#[derive(Resource)]
pub struct LocomotionDiagnostics(pub Box<dyn DiagnosticsSink>);

impl Default for LocomotionDiagnostics {
    fn default() -> Self {
        Self(Box::new(LoggerSink))
    }
}

impl LocomotionDiagnostics {
    pub fn new(sink: impl DiagnosticsSink + 'static) -> Self {
        Self(Box::new(sink))
    }

    pub fn sink(&self) -> &dyn DiagnosticsSink {
        self.0.as_ref()
    }
}

/// Система: резолв locomotion target'ов для каждого персонажа
///
/// Работает в FixedUpdate, один раз за physics тик.
pub fn resolve_locomotion_targets(
    diagnostics: Res<LocomotionDiagnostics>,
    mut query: Query<(
        &LocomotionProfile,
        &CharacterCapabilities,
        &EnvironmentState,
        &mut LocomotionTargets,
    )>,
) {
    for (profile, character, environment, mut targets) in query.iter_mut() {
        let controller = AnimController::new(profile, character, environment, diagnostics.sink());
        let params = controller.current_animation_params();

        *targets = LocomotionTargets {
            animation_type: params.animation_type(),
            speed: params.speed(),
            max_speed: controller.get_current_speed(true),
            moving_fast: controller.is_moving_fast(),
            head_position: controller.head_position_target(),
            torso_position: controller.torso_position_target(),
            head_angle: controller.head_angle_target(),
            torso_angle: controller.torso_angle_target(),
        };
    }
}

/// Locomotion Plugin
///
/// Регистрирует:
/// - Time<Fixed> 60Hz
/// - LocomotionDiagnostics (если не вставлен заранее)
/// - resolve_locomotion_targets в FixedUpdate
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .init_resource::<LocomotionDiagnostics>()
            .add_systems(FixedUpdate, resolve_locomotion_targets);

        log_info("LocomotionPlugin: resolve_locomotion_targets registered in FixedUpdate");
    }
}
