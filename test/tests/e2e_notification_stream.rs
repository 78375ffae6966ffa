/// END-TO-END: notification streams through NotificationProcessor
///
/// Each test feeds decoded notifications to a processor wired to a TestWorld
/// and recording UI/feedback doubles, then checks world state and the effects
/// that reached the doubles.

use realm_client::{EntityRegistryError, NotificationError};
use realm_shared::{
    Destination, EntityUpdate, Focused, Health, Heading, Movement, MovementNotification,
    Notification, Physics, RemoteEntity, RemoveEntity, SoundNotification, WorldPos, WorldRefType,
};
use realm_test::{init_logging, TestClient, TestEntityBuilder};

#[test]
fn create_damage_remove_scenario() {
    init_logging();
    let mut client = TestClient::new();

    let errors = client.process_all(vec![
        TestEntityBuilder::player(1, 100).build().into(),
        EntityUpdate::new(RemoteEntity::new(1)).with(Health::new(80, 100)).into(),
    ]);
    assert!(errors.is_empty());

    let player = client.entity(1).expect("player materialized");
    assert_eq!(client.world.spawned(), 1);
    assert_eq!(client.processor.player(), Some(player));
    assert_eq!(client.screen.log().ready_players, vec![player]);
    assert_eq!(client.feedback.log().shakes, vec![2.0]);
    assert_eq!(client.feedback.log().pushes, vec![(5.0, 5.0)]);

    client.process(RemoveEntity::new(RemoteEntity::new(1))).unwrap();

    assert!(client.processor.registry().is_empty());
    assert_eq!(client.entity(1), None);
    assert!(!client.world.has_entity(&player));
    assert_eq!(client.processor.player(), None);
    assert_eq!(client.feedback.log().shakes.len(), 1);
}

#[test]
fn non_controlled_damage_has_no_feedback() {
    let mut client = TestClient::new();
    client.process(TestEntityBuilder::player(1, 100).build()).unwrap();
    client.process(TestEntityBuilder::new(2).health(100).build()).unwrap();

    client.process(EntityUpdate::new(RemoteEntity::new(2)).with(Health::new(80, 100))).unwrap();

    assert!(client.feedback.log().shakes.is_empty());
}

#[test]
fn local_player_ready_fires_once_and_only_at_creation() {
    let mut client = TestClient::new();
    client.process(TestEntityBuilder::new(3).health(100).build()).unwrap();

    // focus arriving by update does not promote the entity
    client.process(EntityUpdate::new(RemoteEntity::new(3)).with(Focused)).unwrap();
    assert!(client.screen.log().ready_players.is_empty());
    assert_eq!(client.processor.player(), None);

    client.process(TestEntityBuilder::player(4, 100).build()).unwrap();
    client.process(TestEntityBuilder::player(4, 90).build()).unwrap();

    assert_eq!(client.screen.log().ready_players.len(), 1);
}

#[test]
fn update_for_unseen_id_creates_it() {
    let mut client = TestClient::new();

    client.process(EntityUpdate::new(RemoteEntity::new(42)).with(WorldPos::new(2, 5, 5))).unwrap();

    let entity = client.entity(42).expect("lazily created");
    assert_eq!(client.world.component::<WorldPos>(&entity), Some(&WorldPos::new(2, 5, 5)));
}

#[test]
fn remove_unknown_entity_is_reported() {
    let mut client = TestClient::new();

    let result = client.process(RemoveEntity::new(RemoteEntity::new(77)));

    assert_eq!(
        result,
        Err(NotificationError::Registry(EntityRegistryError::EntityNotRegistered {
            entity_id: "RemoteEntity(77)".to_string(),
            operation: "unregister",
        }))
    );
}

#[test]
fn batch_continues_after_failure() {
    let mut client = TestClient::new();

    let errors = client.process_all(vec![
        RemoveEntity::new(RemoteEntity::new(5)).into(),
        TestEntityBuilder::new(6).health(10).build().into(),
        SoundNotification::new(3).into(),
    ]);

    assert_eq!(errors.len(), 1);
    assert!(client.entity(6).is_some());
    assert_eq!(client.feedback.log().sounds, vec![3]);
}

#[test]
fn movement_for_unregistered_id_is_dropped() {
    let mut client = TestClient::new();
    let destination = Destination::new(WorldPos::new(1, 2, 3), Heading::Down);

    let result = client.process(MovementNotification::new(RemoteEntity::new(9), destination));

    assert!(result.is_ok());
    assert_eq!(client.world.spawned(), 0);
    assert!(client.processor.registry().is_empty());
}

#[test]
fn movement_enables_physics_and_queues_destinations() {
    let mut client = TestClient::new();
    client.process(TestEntityBuilder::new(9).at(WorldPos::new(1, 2, 2)).build()).unwrap();
    let entity = client.entity(9).unwrap();
    let first = Destination::new(WorldPos::new(1, 2, 3), Heading::Down);
    let second = Destination::new(WorldPos::new(1, 3, 3), Heading::Right);

    client.process(MovementNotification::new(RemoteEntity::new(9), first)).unwrap();
    client.process(MovementNotification::new(RemoteEntity::new(9), second)).unwrap();

    assert!(client.world.has_component::<Physics>(&entity));
    let movement = client.world.component::<Movement>(&entity).unwrap();
    assert_eq!(movement.len(), 2);
    assert_eq!(movement.peek(), Some(&first));
}

#[test]
fn late_update_after_removal_recreates_entity() {
    let mut client = TestClient::new();
    client.process(TestEntityBuilder::new(5).health(10).build()).unwrap();
    client.process(RemoveEntity::new(RemoteEntity::new(5))).unwrap();

    client.process(EntityUpdate::new(RemoteEntity::new(5)).with(Health::new(5, 10))).unwrap();

    assert_eq!(client.world.spawned(), 2);
    assert_eq!(client.world.entity_count(), 1);
    assert!(client.entity(5).is_some());
}

#[test]
fn sound_notifications_are_forwarded_in_order() {
    let mut client = TestClient::new();

    let notifications: Vec<Notification> = [4, 1, 4]
        .into_iter()
        .map(|number| SoundNotification::new(number).into())
        .collect();
    client.process_all(notifications);

    assert_eq!(client.feedback.log().sounds, vec![4, 1, 4]);
}
