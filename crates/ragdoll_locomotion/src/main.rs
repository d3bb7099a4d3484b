//! Headless демо locomotion резолва
//!
//! Два персонажа (human + crawler), меняем окружение и скорость,
//! печатаем что получил бы pose слой.

use bevy::prelude::*;
use ragdoll_locomotion::logger::log_info;
use ragdoll_locomotion::*;

fn main() {
    let mut app = create_headless_app();
    app.add_plugins(LocomotionPlugin);

    let human = app
        .world_mut()
        .spawn((CharacterCapabilities::new("human", true), LocomotionProfile::default()))
        .id();
    let crawler = app
        .world_mut()
        .spawn((
            CharacterCapabilities::new("crawler", false),
            LocomotionProfile::swimmer(SwimParams::with_speed(1.5), SwimParams::with_speed(4.0)),
        ))
        .id();

    let scenarios = [
        ("idle on ground", EnvironmentState::on_ground(Vec2::ZERO)),
        ("walking", EnvironmentState::on_ground(Vec2::new(1.5, 0.0))),
        ("running", EnvironmentState::on_ground(Vec2::new(4.0, 0.0))),
        ("diving", EnvironmentState::submerged(Vec2::new(0.0, -2.0))),
    ];

    for (label, environment) in scenarios {
        for entity in [human, crawler] {
            app.world_mut().entity_mut(entity).insert(environment);
        }
        app.world_mut().run_schedule(FixedUpdate);

        for entity in [human, crawler] {
            let world = app.world();
            let Some(character) = world.get::<CharacterCapabilities>(entity) else {
                continue;
            };
            let Some(targets) = world.get::<LocomotionTargets>(entity) else {
                continue;
            };
            log_info(&format!(
                "{} / {}: {} speed={} max={} head={:?} torso_angle={:?}",
                label,
                character.species_name,
                targets.animation_type,
                targets.speed,
                targets.max_speed,
                targets.head_position,
                targets.torso_angle,
            ));
        }
    }

    log_info("Locomotion demo complete");
}
