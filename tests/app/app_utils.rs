//local shortcuts
use bevy_spawn_cycle::*;

//third-party shortcuts
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

//standard shortcuts
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Fixed frame time for app tests.
pub const APP_TICK: Duration = Duration::from_millis(100);

//-------------------------------------------------------------------------------------------------------------------

#[derive(Component, Debug)]
pub struct Archer;

//-------------------------------------------------------------------------------------------------------------------

/// Installs a log subscriber for the test binary, filtered by `RUST_LOG` (warnings by default).
pub fn prepare_tracing()
{
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

//-------------------------------------------------------------------------------------------------------------------

/// Makes a two-player app and runs its startup tick.
pub fn make_test_app(restart_delay: Duration) -> App
{
    prepare_tracing();

    let config = SpawnCycleConfig::new(
            vec![
                PlayerTemplate::new("knight"),
                PlayerTemplate::with_hook("archer", |entity_commands| { entity_commands.insert(Archer); }),
            ],
            vec![Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)],
            SpawnCycleSettings{ restart_delay },
        ).expect("config should be valid");

    let mut app = App::new();
    app.add_plugins(bevy::time::TimePlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(APP_TICK))
        .add_plugins(SpawnCyclePlugin::new(config));
    app.update();

    app
}

//-------------------------------------------------------------------------------------------------------------------

pub fn run_updates(app: &mut App, updates: u32)
{
    for _ in 0..updates
    {
        app.update();
    }
}

//-------------------------------------------------------------------------------------------------------------------

pub fn current_state(app: &App) -> GameState
{
    *app.world().resource::<State<GameState>>().get()
}

//-------------------------------------------------------------------------------------------------------------------

pub fn request_state(app: &mut App, state: GameState)
{
    app.world_mut().resource_mut::<GameStateBroker>().request_state(state);
}

//-------------------------------------------------------------------------------------------------------------------

pub fn live_players(app: &mut App) -> Vec<Entity>
{
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.iter(app.world()).collect()
}

//-------------------------------------------------------------------------------------------------------------------

pub fn kill_player(app: &mut App, player: Entity)
{
    app.world_mut().send_event(PlayerDied(player));
}

//-------------------------------------------------------------------------------------------------------------------

pub fn reload_count(app: &App) -> u64
{
    app.world().resource::<GameStateBroker>().reload_count()
}

//-------------------------------------------------------------------------------------------------------------------

/// Generates terrain and waits until the session is playing.
pub fn start_playing(app: &mut App)
{
    request_state(app, GameState::TerrainGenerated);
    app.update();
    assert_eq!(current_state(app), GameState::TerrainGenerated);
    app.update();
    assert_eq!(current_state(app), GameState::Playing);
}

//-------------------------------------------------------------------------------------------------------------------
