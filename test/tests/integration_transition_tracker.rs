/// Integration tests for damage detection across entity updates

use realm_client::{DamageReaction, EntitySynchronizer, HealthSample, SyncOutcome, TransitionTracker};
use realm_shared::{EntityUpdate, Health, RemoteEntity, WorldMutType, WorldPos};
use realm_test::{TestEntity, TestWorld};

fn spawn(world: &mut TestWorld, synchronizer: &mut EntitySynchronizer<TestEntity>, id: u64, health: i32) -> TestEntity {
    synchronizer
        .apply(world, EntityUpdate::new(RemoteEntity::new(id)).with(Health::new(health, 100)), None)
        .unwrap()
        .entity()
}

fn damage_of(outcome: SyncOutcome<TestEntity>) -> Option<DamageReaction> {
    match outcome {
        SyncOutcome::Updated { damage, .. } => damage,
        SyncOutcome::Spawned { .. } => panic!("expected an update"),
    }
}

#[test]
fn controlled_entity_health_drop_is_reported() {
    let mut world = TestWorld::new();
    let mut synchronizer = EntitySynchronizer::<TestEntity>::new();
    let player = spawn(&mut world, &mut synchronizer, 1, 100);

    let outcome = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(1)).with(Health::new(80, 100)), Some(player))
        .unwrap();

    assert_eq!(damage_of(outcome), Some(DamageReaction { amount: 20 }));
}

#[test]
fn other_entity_health_drop_is_ignored() {
    let mut world = TestWorld::new();
    let mut synchronizer = EntitySynchronizer::<TestEntity>::new();
    let player = spawn(&mut world, &mut synchronizer, 1, 100);
    spawn(&mut world, &mut synchronizer, 2, 100);

    let outcome = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(2)).with(Health::new(80, 100)), Some(player))
        .unwrap();

    assert_eq!(damage_of(outcome), None);
}

#[test]
fn heal_or_unchanged_health_is_not_damage() {
    let mut world = TestWorld::new();
    let mut synchronizer = EntitySynchronizer::<TestEntity>::new();
    let player = spawn(&mut world, &mut synchronizer, 1, 50);

    let healed = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(1)).with(Health::new(70, 100)), Some(player))
        .unwrap();
    let unchanged = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(1)).with(WorldPos::new(1, 3, 3)), Some(player))
        .unwrap();

    assert_eq!(damage_of(healed), None);
    assert_eq!(damage_of(unchanged), None);
}

#[test]
fn missing_health_skips_comparison() {
    let mut world = TestWorld::new();
    let mut synchronizer = EntitySynchronizer::<TestEntity>::new();
    let player = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(1)).with(WorldPos::new(1, 1, 1)), None)
        .unwrap()
        .entity();

    // health appears for the first time: no pre-image, so nothing to compare
    let outcome = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(1)).with(Health::new(10, 100)), Some(player))
        .unwrap();
    assert_eq!(damage_of(outcome), None);

    // health removed: no post-image
    let outcome = synchronizer
        .apply(&mut world, EntityUpdate::new(RemoteEntity::new(1)).without::<Health>(), Some(player))
        .unwrap();
    assert_eq!(damage_of(outcome), None);
}

#[test]
fn tracker_runs_update_exactly_once_on_both_paths() {
    let mut world = TestWorld::new();
    let entity = world.spawn_entity();
    world.insert_component(&entity, Health::new(40, 100));

    let mut calls = 0;
    TransitionTracker::track(&mut world, &entity, None, |_| calls += 1);
    TransitionTracker::track(&mut world, &entity, Some(&entity), |_| calls += 1);

    assert_eq!(calls, 2);
}

#[test]
fn tracker_reports_magnitude_from_samples() {
    let mut world = TestWorld::new();
    let entity = world.spawn_entity();
    world.insert_component(&entity, Health::new(40, 100));
    assert_eq!(HealthSample::read(&world, &entity).map(|sample| sample.value()), Some(40));

    let reaction = TransitionTracker::track(&mut world, &entity, Some(&entity), |world| {
        world.insert_component(&entity, Health::new(-5, 100));
    });

    assert_eq!(reaction, Some(DamageReaction { amount: 45 }));
}
