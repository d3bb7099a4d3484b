//! Parameter sets для procedural locomotion
//!
//! Два конкретных вида:
//! - GroundedMovementParams (walk / run) — скорость + высоты и наклоны head/torso
//! - SwimParams (swim slow / swim fast) — скорость + наклоны
//!
//! NaN в опциональном поле = "намеренно не задано". Отсутствующее в
//! конфиге поле десериализуется как NaN.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationType;

pub mod profile;


pub use profile::{GroundedSets, LocomotionProfile};

/// Маркер "unset" для serde default
fn unset() -> f32 {
    f32::NAN
}

/// Параметры ходьбы/бега
///
/// Углы в градусах (так их редактируют), наружу отдаются в радианах.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct GroundedMovementParams {
    /// Скорость (sim units/sec)
    pub speed: f32,
    /// Целевая высота головы над землёй
    #[serde(default = "unset")]
    pub head_position: f32,
    /// Целевая высота торса над землёй
    #[serde(default = "unset")]
    pub torso_position: f32,
    /// Наклон головы (градусы)
    #[serde(default = "unset")]
    pub head_angle: f32,
    /// Наклон торса (градусы)
    #[serde(default = "unset")]
    pub torso_angle: f32,
}

impl GroundedMovementParams {
    /// Набор только со скоростью, все pose поля unset
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            head_position: f32::NAN,
            torso_position: f32::NAN,
            head_angle: f32::NAN,
            torso_angle: f32::NAN,
        }
    }

    pub fn head_angle_in_radians(&self) -> f32 {
        self.head_angle.to_radians()
    }

    pub fn torso_angle_in_radians(&self) -> f32 {
        self.torso_angle.to_radians()
    }
}

/// Параметры плавания
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct SwimParams {
    pub speed: f32,
    #[serde(default = "unset")]
    pub head_angle: f32,
    #[serde(default = "unset")]
    pub torso_angle: f32,
}

impl SwimParams {
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            head_angle: f32::NAN,
            torso_angle: f32::NAN,
        }
    }

    pub fn head_angle_in_radians(&self) -> f32 {
        self.head_angle.to_radians()
    }

    pub fn torso_angle_in_radians(&self) -> f32 {
        self.torso_angle.to_radians()
    }
}

/// Borrowed handle на parameter set, помеченный ролью
///
/// Роль нужна потому что walk и run — один и тот же тип данных.
#[derive(Debug, Clone, Copy)]
pub enum AnimationParams<'a> {
    Walk(&'a GroundedMovementParams),
    Run(&'a GroundedMovementParams),
    SwimSlow(&'a SwimParams),
    SwimFast(&'a SwimParams),
}

impl<'a> AnimationParams<'a> {
    pub fn animation_type(&self) -> AnimationType {
        match self {
            AnimationParams::Walk(_) => AnimationType::Walk,
            AnimationParams::Run(_) => AnimationType::Run,
            AnimationParams::SwimSlow(_) => AnimationType::SwimSlow,
            AnimationParams::SwimFast(_) => AnimationType::SwimFast,
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            AnimationParams::Walk(p) | AnimationParams::Run(p) => p.speed,
            AnimationParams::SwimSlow(p) | AnimationParams::SwimFast(p) => p.speed,
        }
    }

    pub fn head_angle_in_radians(&self) -> f32 {
        match self {
            AnimationParams::Walk(p) | AnimationParams::Run(p) => p.head_angle_in_radians(),
            AnimationParams::SwimSlow(p) | AnimationParams::SwimFast(p) => p.head_angle_in_radians(),
        }
    }

    pub fn torso_angle_in_radians(&self) -> f32 {
        match self {
            AnimationParams::Walk(p) | AnimationParams::Run(p) => p.torso_angle_in_radians(),
            AnimationParams::SwimSlow(p) | AnimationParams::SwimFast(p) => p.torso_angle_in_radians(),
        }
    }

    pub fn as_grounded(&self) -> Option<&'a GroundedMovementParams> {
        match *self {
            AnimationParams::Walk(p) | AnimationParams::Run(p) => Some(p),
            AnimationParams::SwimSlow(_) | AnimationParams::SwimFast(_) => None,
        }
    }
}
