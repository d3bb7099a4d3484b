//! AnimController — выбор locomotion parameter set'а
//!
//! Пайплайн на каждый тик:
//! 1. Classifier: can_use_grounded_locomotion / is_submerged
//! 2. Speed classifier: is_moving_fast
//! 3. Selector: walk / run / swim slow / swim fast
//! 4. Pose deriver (см. pose.rs)
//!
//! Контроллер — borrowing view: ничего не кеширует, все флаги читаются
//! заново на каждом запросе (между тиками они могут поменяться).

use bevy::prelude::*;

use crate::components::{CharacterCapabilities, EnvironmentState};
use crate::error::LocomotionError;
use crate::logger::DiagnosticsSink;
use crate::params::{AnimationParams, GroundedSets, LocomotionProfile};
use crate::DISPLAY_UNITS_PER_SIM_UNIT;

use super::AnimationType;

pub struct AnimController<'a> {
    profile: &'a LocomotionProfile,
    character: &'a CharacterCapabilities,
    environment: &'a EnvironmentState,
    diagnostics: &'a dyn DiagnosticsSink,
}

impl<'a> AnimController<'a> {
    pub fn new(
        profile: &'a LocomotionProfile,
        character: &'a CharacterCapabilities,
        environment: &'a EnvironmentState,
        diagnostics: &'a dyn DiagnosticsSink,
    ) -> Self {
        Self {
            profile,
            character,
            environment,
            diagnostics,
        }
    }

    // === Classifier ===

    /// Capability флаг персонажа как есть
    pub fn can_use_grounded_locomotion(&self) -> bool {
        self.character.can_enter_confined_space
    }

    pub fn is_submerged(&self) -> bool {
        self.environment.in_water
    }

    pub fn target_movement(&self) -> Vec2 {
        self.environment.target_movement
    }

    /// Grounded пара, если она применима к персонажу
    ///
    /// None если capability нет или профиль не содержит walk/run —
    /// тогда персонаж во всём ведёт себя как пловец.
    fn grounded_sets(&self) -> Option<&'a GroundedSets> {
        if self.can_use_grounded_locomotion() {
            self.profile.grounded()
        } else {
            None
        }
    }

    /// Grounded режим: на суше и умеет ходить
    fn walking_sets(&self) -> Option<&'a GroundedSets> {
        if self.is_submerged() {
            None
        } else {
            self.grounded_sets()
        }
    }

    // === Speed classifier ===

    pub fn is_moving_fast(&self) -> bool {
        self.is_moving_fast_with(self.target_movement())
    }

    /// Плавание: полная 2D величина против swim slow speed.
    /// Ходьба: только |x| против walk speed (прыжок не превращается в бег).
    ///
    /// Предполагается slow speed < fast speed. Инвертированная конфигурация
    /// не исправляется — сравнение выполняется как есть.
    pub fn is_moving_fast_with(&self, target_movement: Vec2) -> bool {
        match self.walking_sets() {
            Some(grounded) => target_movement.x.abs() > grounded.walk.speed,
            None => {
                let slow = self.profile.swim_slow().speed;
                target_movement.length_squared() > slow * slow
            }
        }
    }

    // === Selector ===

    /// Набор, который управляет телом прямо сейчас
    pub fn select_movement_params(&self) -> AnimationParams<'a> {
        match self.walking_sets() {
            Some(grounded) if self.is_moving_fast() => AnimationParams::Run(&grounded.run),
            Some(grounded) => AnimationParams::Walk(&grounded.walk),
            None => self.current_swim_params(),
        }
    }

    /// Canonical accessor для pose derivation (то же правило что select_movement_params)
    pub fn current_animation_params(&self) -> AnimationParams<'a> {
        self.select_movement_params()
    }

    pub fn current_swim_params(&self) -> AnimationParams<'a> {
        if self.is_moving_fast() {
            AnimationParams::SwimFast(self.profile.swim_fast())
        } else {
            AnimationParams::SwimSlow(self.profile.swim_slow())
        }
    }

    /// Grounded набор (run/walk по скорости) независимо от воды
    ///
    /// Без grounded locomotion — warning в diagnostics и None.
    pub fn grounded_params(&self) -> Option<AnimationParams<'a>> {
        self.resolve_grounded_params()
            .map_err(|err| self.report(&err))
            .ok()
    }

    /// То же, но без warning'а — для pose derivation, где отсутствие
    /// grounded позы ожидаемо каждый тик
    pub(crate) fn resolve_grounded_params(&self) -> Result<AnimationParams<'a>, LocomotionError> {
        if !self.can_use_grounded_locomotion() {
            return Err(self.cannot_walk());
        }

        let animation_type = if self.is_moving_fast() {
            AnimationType::Run
        } else {
            AnimationType::Walk
        };
        self.lookup(animation_type)
    }

    /// Speed из конкретного набора; walk/run у не-ходящего — warning и 0
    pub fn get_speed(&self, animation_type: AnimationType) -> f32 {
        let resolved = match animation_type {
            AnimationType::Walk if !self.can_use_grounded_locomotion() => Err(self.cannot_walk()),
            AnimationType::Run if !self.can_use_grounded_locomotion() => Err(self.cannot_run()),
            _ => self.lookup(animation_type),
        };

        match resolved {
            Ok(params) => params.speed(),
            Err(err) => {
                self.report(&err);
                0.0
            }
        }
    }

    /// Speed для текущего окружения: (swimming × use_max_speed) → тип
    ///
    /// swimming считается тем же правилом что и селекция: нет grounded
    /// пары на суше = плывём.
    pub fn get_current_speed(&self, use_max_speed: bool) -> f32 {
        let swimming = self.walking_sets().is_none();
        self.get_speed(AnimationType::from_mode(swimming, use_max_speed))
    }

    /// Все применимые наборы: 4 для ходящих, 2 (swim) для остальных
    ///
    /// Пересчитывается на каждый вызов — наборы могут редактироваться на лету.
    /// Если нужно каждый тик, кешируйте снаружи по `LocomotionProfile::revision()`.
    pub fn all_parameter_sets(&self) -> Vec<AnimationParams<'a>> {
        let types: &[AnimationType] = if self.can_use_grounded_locomotion() {
            &AnimationType::ALL
        } else {
            &[AnimationType::SwimSlow, AnimationType::SwimFast]
        };

        types.iter().filter_map(|t| self.profile.get(*t)).collect()
    }

    /// Прямой lookup без учёта capability
    pub fn animation_params_from_type(&self, animation_type: AnimationType) -> Option<AnimationParams<'a>> {
        self.profile.get(animation_type)
    }

    // === Aim source ===

    pub fn aim_source_sim_pos(&self) -> Vec2 {
        self.environment.collider_position
    }

    pub fn aim_source_pos(&self) -> Vec2 {
        self.aim_source_sim_pos() * DISPLAY_UNITS_PER_SIM_UNIT
    }

    // === helpers ===

    fn lookup(&self, animation_type: AnimationType) -> Result<AnimationParams<'a>, LocomotionError> {
        self.profile
            .get(animation_type)
            .ok_or_else(|| LocomotionError::MissingParams {
                species: self.character.species_name.clone(),
                animation_type,
            })
    }

    fn cannot_walk(&self) -> LocomotionError {
        LocomotionError::CannotWalk {
            species: self.character.species_name.clone(),
        }
    }

    fn cannot_run(&self) -> LocomotionError {
        LocomotionError::CannotRun {
            species: self.character.species_name.clone(),
        }
    }

    fn report(&self, err: &LocomotionError) {
        self.diagnostics.warn(&err.to_string());
    }
}
