//! Capability персонажа и состояние окружения
//!
//! Оба компонента пишутся снаружи (character setup / physics layer),
//! контроллер только читает — на каждом запросе, без кеша.

use bevy::prelude::*;

use super::{AnimationState, LocomotionTargets};

/// Capability флаги персонажа
///
/// Автоматически добавляет AnimationState, EnvironmentState, LocomotionTargets
/// через Required Components.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(AnimationState, EnvironmentState, LocomotionTargets)]
pub struct CharacterCapabilities {
    /// Имя вида — попадает в diagnostics warning'и
    pub species_name: String,
    /// Может ли заходить в замкнутые пространства (= умеет ходить)
    pub can_enter_confined_space: bool,
}

impl Default for CharacterCapabilities {
    fn default() -> Self {
        Self::new("human", true)
    }
}

impl CharacterCapabilities {
    pub fn new(species_name: impl Into<String>, can_enter_confined_space: bool) -> Self {
        Self {
            species_name: species_name.into(),
            can_enter_confined_space,
        }
    }
}

/// Состояние окружения от physics слоя (обновляется каждый тик)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct EnvironmentState {
    /// Персонаж погружён в воду
    pub in_water: bool,
    /// Commanded movement (sim units/sec, тот же frame что у physics)
    pub target_movement: Vec2,
    /// Позиция коллайдера (sim units)
    pub collider_position: Vec2,
}

impl EnvironmentState {
    pub fn on_ground(target_movement: Vec2) -> Self {
        Self {
            in_water: false,
            target_movement,
            collider_position: Vec2::ZERO,
        }
    }

    pub fn submerged(target_movement: Vec2) -> Self {
        Self {
            in_water: true,
            target_movement,
            collider_position: Vec2::ZERO,
        }
    }
}
