//local shortcuts

//third-party shortcuts
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Phase of a game session, owned by the [`GameStatePublisher`](crate::GameStatePublisher).
#[derive(States, Debug, Default, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum GameState
{
    /// Terrain for the session is being built. Sessions start (and reload back) here.
    #[default]
    GeneratingTerrain,
    /// Terrain is ready. This is the trigger for spawning players.
    TerrainGenerated,
    /// Players are spawned and the session is about to start.
    Ready,
    /// The session is running.
    Playing,
    /// No players survived; a restart will follow.
    Ended,
}

impl GameState
{
    /// Checks if a publisher should accept a transition from `self` to `next`.
    ///
    /// Reloading is not a transition, it always returns the session to [`GameState::GeneratingTerrain`].
    pub fn can_transition_to(self, next: GameState) -> bool
    {
        match (self, next)
        {
            (GameState::GeneratingTerrain, GameState::TerrainGenerated) => true,
            (GameState::TerrainGenerated,  GameState::Ready)            => true,
            (GameState::Ready,             GameState::Playing)          => true,
            (GameState::Playing,           GameState::Ended)            => true,
            // terrain may be regenerated in place while a session is running
            (GameState::Ready,             GameState::TerrainGenerated) => true,
            (GameState::Playing,           GameState::TerrainGenerated) => true,
            (GameState::Ended,             GameState::TerrainGenerated) => true,
            _ => false,
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
