//local shortcuts
use crate::test_helpers::*;
use bevy_spawn_cycle::*;

//third-party shortcuts
use bevy::prelude::*;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

#[test]
fn terrain_generated_spawns_batch()
{
    let mut broker = GameStateBroker::default();
    let mut factory = MockPlayerFactory::default();
    let mut coordinator = make_active_coordinator(&mut broker);
    assert_eq!(coordinator.phase(), CoordinatorPhase::Idle);

    publish_and_update(&mut coordinator, &mut broker, &mut factory, GameState::TerrainGenerated);

    // one player per slot, at the slot's position, in slot order
    assert_eq!(coordinator.alive_count(), 2);
    assert_eq!(coordinator.active_players().len(), coordinator.alive_count());
    assert_eq!(coordinator.active_players(), factory.live());
    assert_eq!(factory.calls(), &[
            FactoryCall::Instantiate{
                    player   : MockPlayer(0),
                    template : "knight",
                    position : Vec3::new(-5.0, 0.0, 0.0)
                },
            FactoryCall::Instantiate{
                    player   : MockPlayer(1),
                    template : "archer",
                    position : Vec3::new(5.0, 0.0, 0.0)
                },
        ]);
    assert_eq!(coordinator.phase(), CoordinatorPhase::Playing);

    // ready then playing
    assert_eq!(broker.drain_requests(), vec![transition(GameState::Ready), transition(GameState::Playing)]);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn other_states_are_ignored()
{
    let mut broker = GameStateBroker::default();
    let mut factory = MockPlayerFactory::default();
    let mut coordinator = make_active_coordinator(&mut broker);

    for state in [GameState::GeneratingTerrain, GameState::Ready, GameState::Playing]
    {
        publish_and_update(&mut coordinator, &mut broker, &mut factory, state);
    }

    assert!(factory.calls().is_empty());
    assert!(!broker.has_requests());
    assert_eq!(coordinator.alive_count(), 0);
    assert_eq!(coordinator.phase(), CoordinatorPhase::Idle);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn repeated_terrain_generated_replaces_batch()
{
    let mut broker = GameStateBroker::default();
    let mut factory = MockPlayerFactory::default();
    let mut coordinator = make_active_coordinator(&mut broker);

    publish_and_update(&mut coordinator, &mut broker, &mut factory, GameState::TerrainGenerated);
    let _ = factory.take_calls();
    let _ = broker.drain_requests();

    publish_and_update(&mut coordinator, &mut broker, &mut factory, GameState::TerrainGenerated);

    // the old batch is destroyed before the new batch is created
    let calls = factory.take_calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], FactoryCall::Destroy(MockPlayer(0)));
    assert_eq!(calls[1], FactoryCall::Destroy(MockPlayer(1)));
    let FactoryCall::Instantiate{ player: MockPlayer(2), .. } = calls[2] else { panic!("expected a new player"); };
    let FactoryCall::Instantiate{ player: MockPlayer(3), .. } = calls[3] else { panic!("expected a new player"); };

    // never more live players than slots
    assert_eq!(factory.live(), &[MockPlayer(2), MockPlayer(3)]);
    assert_eq!(coordinator.active_players(), factory.live());
    assert_eq!(coordinator.alive_count(), 2);
    assert_eq!(broker.drain_requests(), vec![transition(GameState::Ready), transition(GameState::Playing)]);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn batch_respawns_after_partial_deaths()
{
    let mut broker = GameStateBroker::default();
    let mut factory = MockPlayerFactory::default();
    let mut coordinator = make_active_coordinator(&mut broker);

    publish_and_update(&mut coordinator, &mut broker, &mut factory, GameState::TerrainGenerated);
    assert!(factory.kill(MockPlayer(0)));
    publish_and_update(&mut coordinator, &mut broker, &mut factory, GameState::Playing);
    assert_eq!(coordinator.active_players(), &[MockPlayer(1)]);

    // only the survivor is cleaned up
    let _ = factory.take_calls();
    publish_and_update(&mut coordinator, &mut broker, &mut factory, GameState::TerrainGenerated);
    let calls = factory.take_calls();
    assert_eq!(calls[0], FactoryCall::Destroy(MockPlayer(1)));
    assert_eq!(calls.iter().filter(|call| matches!(call, FactoryCall::Destroy(_))).count(), 1);
    assert_eq!(coordinator.alive_count(), 2);
}

//-------------------------------------------------------------------------------------------------------------------
