//! Owned state контроллера + результат резолва для physics/pose слоя

use bevy::prelude::*;

use crate::animation::{AnimationType, DiscreteAnimation};

/// Состояние, которым контроллер владеет эксклюзивно
///
/// - discrete: overlay special анимации (climbing, CPR, ...)
/// - walk_pos: фаза цикла шага (накапливается снаружи)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AnimationState {
    discrete: DiscreteAnimation,
    walk_pos: f32,
}

impl AnimationState {
    pub fn discrete_animation(&self) -> DiscreteAnimation {
        self.discrete
    }

    pub fn set_discrete_animation(&mut self, animation: DiscreteAnimation) {
        self.discrete = animation;
    }

    pub fn walk_pos(&self) -> f32 {
        self.walk_pos
    }

    pub fn set_walk_pos(&mut self, walk_pos: f32) {
        self.walk_pos = walk_pos;
    }

    pub fn advance_walk_pos(&mut self, delta: f32) {
        self.walk_pos += delta;
    }
}

/// Что получил physics/pose слой на этом тике
///
/// Pose target'ы — либо конечное число, либо None. NaN/∞ сюда не попадают.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionTargets {
    pub animation_type: AnimationType,
    /// Скорость выбранного набора
    pub speed: f32,
    /// Максимальная скорость в текущем окружении (run / swim fast)
    pub max_speed: f32,
    pub moving_fast: bool,
    pub head_position: Option<f32>,
    pub torso_position: Option<f32>,
    pub head_angle: Option<f32>,
    pub torso_angle: Option<f32>,
}

impl Default for LocomotionTargets {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::SwimSlow,
            speed: 0.0,
            max_speed: 0.0,
            moving_fast: false,
            head_position: None,
            torso_position: None,
            head_angle: None,
            torso_angle: None,
        }
    }
}
