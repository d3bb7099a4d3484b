//! Ключи анимаций: procedural (AnimationType) и discrete overlay (DiscreteAnimation)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LocomotionError;

/// Какой из четырёх parameter set'ов управляет телом
///
/// Используется только как lookup key, в state не хранится.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AnimationType {
    Walk,
    Run,
    SwimSlow,
    SwimFast,
}

impl AnimationType {
    pub const ALL: [AnimationType; 4] = [
        AnimationType::Walk,
        AnimationType::Run,
        AnimationType::SwimSlow,
        AnimationType::SwimFast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationType::Walk => "Walk",
            AnimationType::Run => "Run",
            AnimationType::SwimSlow => "SwimSlow",
            AnimationType::SwimFast => "SwimFast",
        }
    }

    /// 2×2 матрица: (swimming?, fast?) → тип
    pub fn from_mode(swimming: bool, fast: bool) -> Self {
        match (swimming, fast) {
            (false, false) => AnimationType::Walk,
            (false, true) => AnimationType::Run,
            (true, false) => AnimationType::SwimSlow,
            (true, true) => AnimationType::SwimFast,
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationType {
    type Err = LocomotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocomotionError::UnknownAnimationType(s.to_owned()))
    }
}

impl TryFrom<u8> for AnimationType {
    type Error = LocomotionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AnimationType::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| LocomotionError::UnknownAnimationType(value.to_string()))
    }
}

/// Special full-body анимации, перекрывающие procedural blending
///
/// Переходы решает gameplay снаружи; здесь только хранение.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum DiscreteAnimation {
    #[default]
    None,
    Climbing,
    UsingConstructionItem,
    Struggle,
    #[serde(rename = "CPR")]
    Cpr,
}

impl DiscreteAnimation {
    /// true когда procedural pose derivation должен уступить canned анимации
    pub fn overrides_procedural(&self) -> bool {
        !matches!(self, DiscreteAnimation::None)
    }
}
