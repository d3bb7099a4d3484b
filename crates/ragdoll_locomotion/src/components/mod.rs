//! ECS Components для ragdoll персонажей
//!
//! Организация по доменам:
//! - character: capability флаги и environment state (borrowed контроллером)
//! - animation: owned state контроллера (discrete animation, walk cycle) и результат резолва

pub mod animation;
pub mod character;

pub use animation::*;
pub use character::*;
