//local shortcuts
use crate::*;

//third-party shortcuts
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// Validate resources that should exist before startup.
fn build_precheck(world: &World)
{
    if !world.contains_resource::<Time>()            { panic!("Time is missing on startup, add TimePlugin!"); }
    if !world.contains_resource::<GameStateBroker>() { panic!("GameStateBroker is missing on startup!"); }
    if !world.contains_resource::<SpawnCoordinator>() { panic!("SpawnCoordinator is missing on startup!"); }
}

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

/// The app's player coordinator.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnCoordinator(pub PlayerCoordinator<PlayerTemplate, Entity>);

impl SpawnCoordinator
{
    pub fn new(config: SpawnCycleConfig<PlayerTemplate>) -> SpawnCoordinator
    {
        SpawnCoordinator(PlayerCoordinator::new(config))
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Sent when the session is reloaded.
#[derive(Event, Debug, Copy, Clone, Default)]
pub struct SessionReloaded;

//-------------------------------------------------------------------------------------------------------------------

/// System set containing the spawn cycle. In schedule `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SpawnCycleSet;

//-------------------------------------------------------------------------------------------------------------------

/// Spawn cycle plugin.
///
/// Adds `State<GameState>`, the [`GameStateBroker`] that owns it, and a [`SpawnCoordinator`] that is activated on
/// startup. Requires `TimePlugin`. Adds `StatesPlugin` if it is missing.
///
/// Game code reports deaths with the [`PlayerDied`] event and moves the session forward by requesting states
/// through the [`GameStateBroker`] (e.g. `GameState::TerrainGenerated` once terrain is built).
pub struct SpawnCyclePlugin
{
    config: SpawnCycleConfig<PlayerTemplate>,
}

impl SpawnCyclePlugin
{
    pub fn new(config: SpawnCycleConfig<PlayerTemplate>) -> SpawnCyclePlugin
    {
        SpawnCyclePlugin{ config }
    }
}

impl Plugin for SpawnCyclePlugin
{
    fn build(&self, app: &mut App)
    {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }

        app.init_state::<GameState>()
            .add_event::<PlayerDied>()
            .add_event::<SessionReloaded>()
            .insert_resource(GameStateBroker::default())
            .insert_resource(SpawnCoordinator::new(self.config.clone()))
            .add_systems(PreStartup, build_precheck)
            .add_systems(Startup, enable_spawn_cycle)
            .add_systems(Update,
                (
                    // apply requests left over from the previous tick
                    apply_state_requests,
                    publish_state_transitions,
                    forward_player_deaths,
                    update_spawn_coordinator,
                ).chain().in_set(SpawnCycleSet)
            );
    }
}

//-------------------------------------------------------------------------------------------------------------------
