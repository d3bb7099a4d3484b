//! Pose Target Deriver: raw поля parameter set'а → валидные optional target'ы
//!
//! NaN/∞ = "намеренно не задано" → None. В physics solver уходит только
//! конечное число или ничего.

use super::AnimController;
use crate::params::AnimationParams;

/// Единственная проверка валидности для всех target'ов
pub fn valid_or_none(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

impl<'a> AnimController<'a> {
    /// Высота головы — только из grounded набора
    pub fn head_position_target(&self) -> Option<f32> {
        self.grounded_target(|p| p.as_grounded().map(|g| g.head_position))
    }

    /// Высота торса — только из grounded набора
    pub fn torso_position_target(&self) -> Option<f32> {
        self.grounded_target(|p| p.as_grounded().map(|g| g.torso_position))
    }

    /// Наклон головы (радианы) — из текущего набора, grounded или swim
    pub fn head_angle_target(&self) -> Option<f32> {
        valid_or_none(self.current_animation_params().head_angle_in_radians())
    }

    /// Наклон торса (радианы) — из текущего набора, grounded или swim
    pub fn torso_angle_target(&self) -> Option<f32> {
        valid_or_none(self.current_animation_params().torso_angle_in_radians())
    }

    // Отсутствие grounded набора здесь штатная ситуация: без warning'а
    fn grounded_target(&self, field: impl Fn(&AnimationParams<'a>) -> Option<f32>) -> Option<f32> {
        let params = self.resolve_grounded_params().ok()?;
        field(&params).and_then(valid_or_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CharacterCapabilities, EnvironmentState};
    use crate::logger::RecordingSink;
    use crate::params::{GroundedMovementParams, LocomotionProfile, SwimParams};
    use bevy::prelude::*;

    fn profile_with(walk: GroundedMovementParams, swim_slow: SwimParams) -> LocomotionProfile {
        LocomotionProfile::walker(
            walk,
            GroundedMovementParams::with_speed(5.0),
            swim_slow,
            SwimParams::with_speed(3.0),
        )
    }

    #[test]
    fn test_valid_or_none() {
        assert_eq!(valid_or_none(1.5), Some(1.5));
        assert_eq!(valid_or_none(-0.0), Some(-0.0));
        assert_eq!(valid_or_none(f32::NAN), None);
        assert_eq!(valid_or_none(f32::INFINITY), None);
        assert_eq!(valid_or_none(f32::NEG_INFINITY), None);
    }

    #[test]
    fn test_position_targets_from_walk_set() {
        let walk = GroundedMovementParams {
            head_position: 1.6,
            torso_position: f32::INFINITY,
            ..GroundedMovementParams::with_speed(2.0)
        };
        let profile = profile_with(walk, SwimParams::with_speed(1.0));
        let character = CharacterCapabilities::new("human", true);
        let env = EnvironmentState::on_ground(Vec2::new(1.0, 0.0));
        let sink = RecordingSink::new();
        let controller = AnimController::new(&profile, &character, &env, &sink);

        assert_eq!(controller.head_position_target(), Some(1.6));
        assert_eq!(controller.torso_position_target(), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_position_targets_absent_for_non_walker() {
        // Поля заполнены, но capability нет
        let walk = GroundedMovementParams {
            head_position: 1.6,
            torso_position: 1.1,
            ..GroundedMovementParams::with_speed(2.0)
        };
        let profile = profile_with(walk, SwimParams::with_speed(1.0));
        let character = CharacterCapabilities::new("crawler", false);
        let env = EnvironmentState::on_ground(Vec2::ZERO);
        let sink = RecordingSink::new();
        let controller = AnimController::new(&profile, &character, &env, &sink);

        assert_eq!(controller.head_position_target(), None);
        assert_eq!(controller.torso_position_target(), None);
        // Отсутствие позы — не ошибка, warning'ов нет
        assert!(sink.is_empty());
    }

    #[test]
    fn test_position_targets_use_grounded_set_while_submerged() {
        let walk = GroundedMovementParams {
            head_position: 1.6,
            ..GroundedMovementParams::with_speed(2.0)
        };
        let profile = profile_with(walk, SwimParams::with_speed(1.0));
        let character = CharacterCapabilities::new("human", true);
        let env = EnvironmentState::submerged(Vec2::new(0.5, 0.0));
        let sink = RecordingSink::new();
        let controller = AnimController::new(&profile, &character, &env, &sink);

        assert_eq!(controller.head_position_target(), Some(1.6));
    }

    #[test]
    fn test_angle_targets_follow_current_set() {
        let swim_slow = SwimParams {
            speed: 1.0,
            head_angle: f32::NAN,
            torso_angle: 90.0,
        };
        let profile = profile_with(GroundedMovementParams::with_speed(2.0), swim_slow);
        let character = CharacterCapabilities::new("human", true);
        let env = EnvironmentState::submerged(Vec2::new(0.2, 0.2));
        let sink = RecordingSink::new();
        let controller = AnimController::new(&profile, &character, &env, &sink);

        assert_eq!(controller.head_angle_target(), None);
        let torso = controller.torso_angle_target().expect("torso angle set");
        assert!((torso - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_angle_targets_idempotent() {
        let walk = GroundedMovementParams {
            head_angle: 12.0,
            torso_angle: f32::NEG_INFINITY,
            ..GroundedMovementParams::with_speed(2.0)
        };
        let profile = profile_with(walk, SwimParams::with_speed(1.0));
        let character = CharacterCapabilities::default();
        let env = EnvironmentState::on_ground(Vec2::new(1.0, 0.0));
        let sink = RecordingSink::new();
        let controller = AnimController::new(&profile, &character, &env, &sink);

        let first = controller.head_angle_target();
        assert_eq!(first, Some(12.0_f32.to_radians()));
        assert_eq!(controller.head_angle_target(), first);
        assert_eq!(controller.torso_angle_target(), None);
        assert_eq!(controller.torso_angle_target(), None);
    }
}
