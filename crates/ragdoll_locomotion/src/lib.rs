//! Ragdoll Locomotion Core
//!
//! Выбор и блендинг procedural locomotion параметров для physically
//! simulated персонажа (ragdoll) каждый simulation тик.
//!
//! Архитектура:
//! - params: Parameter Store (walk / run / swim slow / swim fast)
//! - animation: classifier → selector → pose deriver (AnimController)
//! - components: ECS state персонажа (capability, environment, targets)
//! - logger: глобальный logger + инжектируемый diagnostics sink
//!
//! Physics/joint solver, item holding, discrete анимации — снаружи.

use bevy::prelude::*;

// Публичные модули
pub mod animation;
pub mod components;
pub mod error;
pub mod logger;
pub mod params;

// Re-export базовых типов для удобства
pub use animation::{
    valid_or_none, AnimController, AnimationType, DiscreteAnimation, LocomotionDiagnostics,
    LocomotionPlugin,
};
pub use components::*;
pub use error::LocomotionError;
pub use logger::{init_logger, DiagnosticsSink, LoggerSink, RecordingSink};
pub use params::{AnimationParams, GroundedMovementParams, GroundedSets, LocomotionProfile, SwimParams};

/// Частота physics тика (FixedUpdate)
pub const FIXED_TICK_HZ: f64 = 60.0;

/// Sim units → display units (пиксели)
pub const DISPLAY_UNITS_PER_SIM_UNIT: f32 = 100.0;

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ));

    app
}
