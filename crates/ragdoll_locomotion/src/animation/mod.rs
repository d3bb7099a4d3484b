//! Animation state resolution
//!
//! - types: AnimationType / DiscreteAnimation
//! - controller: classifier + selector (AnimController)
//! - pose: валидные pose target'ы из выбранного набора
//! - systems: ECS plugin, резолвит LocomotionTargets каждый fixed тик

pub mod controller;
pub mod pose;
pub mod systems;
pub mod types;


pub use controller::AnimController;
pub use pose::valid_or_none;
pub use systems::{resolve_locomotion_targets, LocomotionDiagnostics, LocomotionPlugin};
pub use types::{AnimationType, DiscreteAnimation};
