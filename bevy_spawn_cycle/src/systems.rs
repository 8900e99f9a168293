//local shortcuts
use crate::*;
use bevy_spawn_cycle_utils::*;

//third-party shortcuts
use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Applies a session reload.
fn apply_reload(world: &mut World)
{
    world.resource_mut::<GameStateBroker>().record_reload();
    world.send_event(SessionReloaded);
    tracing::info!("session reloaded");

    let current = *world.resource::<State<GameState>>().get();
    if current == GameState::default() { return; }
    if !set_and_apply_state(world, GameState::default())
    { tracing::error!(?current, "reload could not return the game state to its default"); }
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Applies requests queued in the [`GameStateBroker`] one at a time, so every accepted transition is entered (and
/// published) even when several are requested in the same tick.
///
/// Invalid transitions are rejected with a warning.
pub(crate) fn apply_state_requests(world: &mut World)
{
    let requests = world.resource_mut::<GameStateBroker>().drain_requests();

    for request in requests
    {
        match request
        {
            StateRequest::Transition(next) =>
            {
                let current = *world.resource::<State<GameState>>().get();
                if !current.can_transition_to(next)
                { tracing::warn!(?current, ?next, "rejected game state transition"); continue; }

                if set_and_apply_state(world, next) { tracing::info!(?next, "game state changed"); }
            }
            StateRequest::Reload => apply_reload(world),
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Publishes every entered [`GameState`] to the broker's subscribers.
pub(crate) fn publish_state_transitions(
    mut transitions : EventReader<StateTransitionEvent<GameState>>,
    mut broker      : ResMut<GameStateBroker>,
){
    for transition in transitions.read()
    {
        let Some(entered) = transition.entered else { continue; };
        broker.publish(entered);
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Forwards [`PlayerDied`] events through each player's [`DeathWatch`].
pub(crate) fn forward_player_deaths(
    mut deaths  : EventReader<PlayerDied>,
    mut watches : Query<&mut DeathWatch>,
){
    for PlayerDied(player) in deaths.read()
    {
        let Ok(mut watch) = watches.get_mut(*player)
        else { tracing::warn!(?player, "death reported for an entity that is not a live player"); continue; };

        if !watch.notify() { tracing::debug!(?player, "ignored repeated death report"); }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Drives the [`SpawnCoordinator`] for one tick.
pub(crate) fn update_spawn_coordinator(
    time            : Res<Time>,
    mut broker      : ResMut<GameStateBroker>,
    mut coordinator : ResMut<SpawnCoordinator>,
    mut commands    : Commands,
){
    let mut factory = CommandsPlayerFactory::new(&mut commands);

    if let Err(err) = coordinator.update(time.delta(), &mut *broker, &mut factory)
    { tracing::error!(%err, "spawn coordinator update failed"); }
}

//-------------------------------------------------------------------------------------------------------------------

/// Activates the [`SpawnCoordinator`].
pub fn enable_spawn_cycle(mut broker: ResMut<GameStateBroker>, mut coordinator: ResMut<SpawnCoordinator>)
{
    coordinator.activate(&mut *broker);
}

//-------------------------------------------------------------------------------------------------------------------

/// Deactivates the [`SpawnCoordinator`], canceling a pending restart.
pub fn disable_spawn_cycle(mut broker: ResMut<GameStateBroker>, mut coordinator: ResMut<SpawnCoordinator>)
{
    coordinator.deactivate(&mut *broker);
}

//-------------------------------------------------------------------------------------------------------------------
