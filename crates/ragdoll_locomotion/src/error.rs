//! Ошибки locomotion слоя
//!
//! Display строки — это и есть текст warning'а для DiagnosticsSink.

use thiserror::Error;

use crate::animation::AnimationType;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocomotionError {
    /// Grounded запрос (walk) у существа без grounded locomotion
    #[error("{species} cannot walk!")]
    CannotWalk { species: String },

    /// Grounded запрос (run) у существа без grounded locomotion
    #[error("{species} cannot run!")]
    CannotRun { species: String },

    /// Capability есть, но в профиле нет соответствующего набора
    #[error("{species} has no {animation_type} parameters configured")]
    MissingParams {
        species: String,
        animation_type: AnimationType,
    },

    /// Configuration defect: speed должен быть конечным и > 0
    #[error("{animation_type} speed must be finite and positive, got {speed}")]
    InvalidSpeed {
        animation_type: AnimationType,
        speed: f32,
    },

    #[error("unknown animation type: {0}")]
    UnknownAnimationType(String),
}
