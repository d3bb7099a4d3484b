//! LocomotionProfile — Parameter Store персонажа
//!
//! Хранит четыре parameter set'а и служит таблицей AnimationType → set.
//! Grounded пара (walk + run) опциональна: у рыб/ползунов её нет.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{AnimationParams, GroundedMovementParams, SwimParams};
use crate::animation::AnimationType;
use crate::error::LocomotionError;

/// Walk + run всегда идут парой
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct GroundedSets {
    pub walk: GroundedMovementParams,
    pub run: GroundedMovementParams,
}

/// Parameter Store персонажа
///
/// Любой setter увеличивает `revision` — по нему вызывающая сторона
/// инвалидирует свои кеши (например результат `all_parameter_sets`).
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct LocomotionProfile {
    #[serde(default)]
    grounded: Option<GroundedSets>,
    swim_slow: SwimParams,
    swim_fast: SwimParams,
    #[serde(skip)]
    revision: u64,
}

impl Default for LocomotionProfile {
    /// Humanoid: ходит, бегает, плавает
    fn default() -> Self {
        Self::walker(
            GroundedMovementParams {
                speed: 2.0,
                head_position: 1.55,
                torso_position: 1.1,
                head_angle: f32::NAN,
                torso_angle: 10.0,
            },
            GroundedMovementParams {
                speed: 5.0,
                head_position: 1.5,
                torso_position: 1.05,
                head_angle: 5.0,
                torso_angle: 15.0,
            },
            SwimParams {
                speed: 1.0,
                head_angle: f32::NAN,
                torso_angle: 90.0,
            },
            SwimParams {
                speed: 3.0,
                head_angle: 10.0,
                torso_angle: 90.0,
            },
        )
    }
}

impl LocomotionProfile {
    /// Существо с grounded locomotion (все четыре набора)
    pub fn walker(
        walk: GroundedMovementParams,
        run: GroundedMovementParams,
        swim_slow: SwimParams,
        swim_fast: SwimParams,
    ) -> Self {
        Self {
            grounded: Some(GroundedSets { walk, run }),
            swim_slow,
            swim_fast,
            revision: 0,
        }
    }

    /// Существо без grounded варианта (только плавание)
    pub fn swimmer(swim_slow: SwimParams, swim_fast: SwimParams) -> Self {
        Self {
            grounded: None,
            swim_slow,
            swim_fast,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn grounded(&self) -> Option<&GroundedSets> {
        self.grounded.as_ref()
    }

    pub fn walk(&self) -> Option<&GroundedMovementParams> {
        self.grounded.as_ref().map(|g| &g.walk)
    }

    pub fn run(&self) -> Option<&GroundedMovementParams> {
        self.grounded.as_ref().map(|g| &g.run)
    }

    pub fn swim_slow(&self) -> &SwimParams {
        &self.swim_slow
    }

    pub fn swim_fast(&self) -> &SwimParams {
        &self.swim_fast
    }

    pub fn set_grounded(&mut self, grounded: Option<GroundedSets>) {
        self.grounded = grounded;
        self.revision += 1;
    }

    pub fn set_swim_slow(&mut self, params: SwimParams) {
        self.swim_slow = params;
        self.revision += 1;
    }

    pub fn set_swim_fast(&mut self, params: SwimParams) {
        self.swim_fast = params;
        self.revision += 1;
    }

    /// Lookup table: тип → набор (None если набора нет в профиле)
    pub fn get(&self, animation_type: AnimationType) -> Option<AnimationParams<'_>> {
        match animation_type {
            AnimationType::Walk => self.walk().map(AnimationParams::Walk),
            AnimationType::Run => self.run().map(AnimationParams::Run),
            AnimationType::SwimSlow => Some(AnimationParams::SwimSlow(&self.swim_slow)),
            AnimationType::SwimFast => Some(AnimationParams::SwimFast(&self.swim_fast)),
        }
    }

    /// Проверка конфигурации: speed каждого набора конечный и > 0
    ///
    /// Контроллер эту проверку не делает — это ответственность того, кто
    /// загружает/редактирует профиль.
    pub fn validate(&self) -> Result<(), LocomotionError> {
        for params in AnimationType::ALL.into_iter().filter_map(|t| self.get(t)) {
            let speed = params.speed();
            if !speed.is_finite() || speed <= 0.0 {
                return Err(LocomotionError::InvalidSpeed {
                    animation_type: params.animation_type(),
                    speed,
                });
            }
        }
        Ok(())
    }
}
