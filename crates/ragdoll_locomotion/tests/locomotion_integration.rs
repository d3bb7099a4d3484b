//! Locomotion integration test
//!
//! Headless App + LocomotionPlugin, FixedUpdate гоняем вручную.
//!
//! Проверяем:
//! - LocomotionTargets пишутся для каждого персонажа
//! - Смена окружения между тиками подхватывается без кеша
//! - Non-walker не получает grounded позу и не спамит warning'ами

use bevy::prelude::*;
use ragdoll_locomotion::*;

/// Helper: App с plugin и recording diagnostics
fn create_locomotion_app(sink: RecordingSink) -> App {
    let mut app = create_headless_app();
    app.insert_resource(LocomotionDiagnostics::new(sink));
    app.add_plugins(LocomotionPlugin);
    app
}

fn spawn_character(app: &mut App, character: CharacterCapabilities, profile: LocomotionProfile) -> Entity {
    app.world_mut().spawn((character, profile)).id()
}

fn set_environment(app: &mut App, entity: Entity, environment: EnvironmentState) {
    app.world_mut().entity_mut(entity).insert(environment);
}

fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn targets(app: &App, entity: Entity) -> LocomotionTargets {
    *app
        .world()
        .get::<LocomotionTargets>(entity)
        .expect("LocomotionTargets is a required component")
}

#[test]
fn test_required_components_are_inserted() {
    let mut app = create_locomotion_app(RecordingSink::new());
    let human = spawn_character(&mut app, CharacterCapabilities::default(), LocomotionProfile::default());

    let world = app.world();
    assert!(world.get::<AnimationState>(human).is_some());
    assert!(world.get::<EnvironmentState>(human).is_some());
    assert!(world.get::<LocomotionTargets>(human).is_some());
}

#[test]
fn test_human_targets_follow_environment() {
    let sink = RecordingSink::new();
    let mut app = create_locomotion_app(sink.clone());
    let human = spawn_character(&mut app, CharacterCapabilities::default(), LocomotionProfile::default());

    // Бег по суше
    set_environment(&mut app, human, EnvironmentState::on_ground(Vec2::new(3.0, 0.0)));
    tick(&mut app);

    let run = targets(&app, human);
    assert_eq!(run.animation_type, AnimationType::Run);
    assert_eq!(run.speed, 5.0);
    assert_eq!(run.max_speed, 5.0);
    assert!(run.moving_fast);
    assert_eq!(run.head_position, Some(1.5));
    assert_eq!(run.head_angle, Some(5.0_f32.to_radians()));

    // Тот же персонаж нырнул
    set_environment(&mut app, human, EnvironmentState::submerged(Vec2::new(0.0, 1.5)));
    tick(&mut app);

    let swim = targets(&app, human);
    assert_eq!(swim.animation_type, AnimationType::SwimFast);
    assert_eq!(swim.speed, 3.0);
    assert_eq!(swim.max_speed, 3.0);
    assert_eq!(swim.torso_angle, Some(90.0_f32.to_radians()));

    // Медленно по суше: head angle в walk наборе не задан
    set_environment(&mut app, human, EnvironmentState::on_ground(Vec2::new(1.0, 0.0)));
    tick(&mut app);

    let walk = targets(&app, human);
    assert_eq!(walk.animation_type, AnimationType::Walk);
    assert_eq!(walk.head_angle, None);
    assert_eq!(walk.head_position, Some(1.55));

    assert!(sink.is_empty());
}

#[test]
fn test_non_walker_resolves_swim_without_warnings() {
    let sink = RecordingSink::new();
    let mut app = create_locomotion_app(sink.clone());
    let crawler = spawn_character(
        &mut app,
        CharacterCapabilities::new("crawler", false),
        LocomotionProfile::swimmer(SwimParams::with_speed(1.0), SwimParams::with_speed(3.0)),
    );

    set_environment(&mut app, crawler, EnvironmentState::on_ground(Vec2::new(10.0, 10.0)));
    for _ in 0..100 {
        tick(&mut app);
    }

    let resolved = targets(&app, crawler);
    assert_eq!(resolved.animation_type, AnimationType::SwimFast);
    assert_eq!(resolved.head_position, None);
    assert_eq!(resolved.torso_position, None);
    assert_eq!(resolved.head_angle, None);
    assert!(sink.is_empty(), "unexpected warnings: {:?}", sink.messages());
}

#[test]
fn test_discrete_animation_does_not_affect_resolution() {
    let mut app = create_locomotion_app(RecordingSink::new());
    let human = spawn_character(&mut app, CharacterCapabilities::default(), LocomotionProfile::default());
    set_environment(&mut app, human, EnvironmentState::on_ground(Vec2::new(3.0, 0.0)));

    tick(&mut app);
    let before = targets(&app, human);

    app.world_mut()
        .get_mut::<AnimationState>(human)
        .expect("AnimationState is a required component")
        .set_discrete_animation(DiscreteAnimation::Climbing);
    tick(&mut app);

    assert_eq!(targets(&app, human), before);
    assert_eq!(
        app.world().get::<AnimationState>(human).map(|s| s.discrete_animation()),
        Some(DiscreteAnimation::Climbing)
    );
}

#[test]
fn test_profile_edit_picked_up_next_tick() {
    let mut app = create_locomotion_app(RecordingSink::new());
    let human = spawn_character(&mut app, CharacterCapabilities::default(), LocomotionProfile::default());
    set_environment(&mut app, human, EnvironmentState::submerged(Vec2::new(0.5, 0.0)));

    tick(&mut app);
    assert_eq!(targets(&app, human).speed, 1.0);

    {
        let mut profile = app
            .world_mut()
            .get_mut::<LocomotionProfile>(human)
            .expect("profile spawned");
        profile.set_swim_slow(SwimParams::with_speed(0.25));
    }
    tick(&mut app);

    // 0.5² > 0.25² — теперь это fast
    let resolved = targets(&app, human);
    assert_eq!(resolved.animation_type, AnimationType::SwimFast);
    assert_eq!(resolved.speed, 3.0);
}

#[test]
fn test_walker_without_grounded_sets_swims_quietly_on_ground() {
    let sink = RecordingSink::new();
    let mut app = create_locomotion_app(sink.clone());
    let swim_fast = SwimParams::with_speed(3.0);
    let human = spawn_character(
        &mut app,
        CharacterCapabilities::new("human", true),
        LocomotionProfile::swimmer(SwimParams::with_speed(1.0), swim_fast),
    );

    set_environment(&mut app, human, EnvironmentState::on_ground(Vec2::new(0.5, 0.0)));
    for _ in 0..10 {
        tick(&mut app);
    }

    let resolved = targets(&app, human);
    assert_eq!(resolved.animation_type, AnimationType::SwimSlow);
    assert_eq!(resolved.speed, 1.0);
    assert_eq!(resolved.max_speed, swim_fast.speed);
    assert!(sink.is_empty(), "unexpected warnings: {:?}", sink.messages());
}
